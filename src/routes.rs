//! Route Table
//!
//! Every lesson page, its path and the labels used by navigation,
//! home page and footer.

pub const HOME_PATH: &str = "/";

/// Lesson group with its own navigation dropdown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    React,
    Vite,
    TypeScript,
    Css,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::React, Section::Vite, Section::TypeScript, Section::Css];

    pub fn label(self) -> &'static str {
        match self {
            Section::React => "React",
            Section::Vite => "Vite",
            Section::TypeScript => "TypeScript",
            Section::Css => "CSS",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::React => "⚛️",
            Section::Vite => "⚡",
            Section::TypeScript => "📘",
            Section::Css => "🎨",
        }
    }

    /// Intro line shown above the lesson list on the home page
    pub fn tagline(self) -> &'static str {
        match self {
            Section::React => "Lerne die fundamentalen React Konzepte und Hooks:",
            Section::Vite => "Moderne Build-Tools und Development-Setup:",
            Section::TypeScript => "Type-Safety für robuste Anwendungen:",
            Section::Css => "Modernes Layout und Styling:",
        }
    }

    /// Lessons of this section in menu order
    pub fn lessons(self) -> impl Iterator<Item = Lesson> {
        Lesson::ALL.into_iter().filter(move |lesson| lesson.section() == self)
    }
}

/// A routed lesson page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lesson {
    UseState,
    UseEffect,
    Components,
    ViteSetup,
    ViteBuild,
    TypeScriptBasics,
    TypeScriptTypes,
    Flexbox,
    Grid,
}

impl Lesson {
    pub const ALL: [Lesson; 9] = [
        Lesson::UseState,
        Lesson::UseEffect,
        Lesson::Components,
        Lesson::ViteSetup,
        Lesson::ViteBuild,
        Lesson::TypeScriptBasics,
        Lesson::TypeScriptTypes,
        Lesson::Flexbox,
        Lesson::Grid,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Lesson::UseState => "/react/usestate",
            Lesson::UseEffect => "/react/useeffect",
            Lesson::Components => "/react/components",
            Lesson::ViteSetup => "/vite/setup",
            Lesson::ViteBuild => "/vite/build",
            Lesson::TypeScriptBasics => "/typescript/basics",
            Lesson::TypeScriptTypes => "/typescript/types",
            Lesson::Flexbox => "/css/flexbox",
            Lesson::Grid => "/css/grid",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Lesson::UseState | Lesson::UseEffect | Lesson::Components => Section::React,
            Lesson::ViteSetup | Lesson::ViteBuild => Section::Vite,
            Lesson::TypeScriptBasics | Lesson::TypeScriptTypes => Section::TypeScript,
            Lesson::Flexbox | Lesson::Grid => Section::Css,
        }
    }

    /// Link text in dropdowns and on the home page
    pub fn nav_label(self) -> &'static str {
        match self {
            Lesson::UseState => "useState",
            Lesson::UseEffect => "useEffect",
            Lesson::Components => "Components",
            Lesson::ViteSetup => "Setup",
            Lesson::ViteBuild => "Build & Deploy",
            Lesson::TypeScriptBasics => "Basics",
            Lesson::TypeScriptTypes => "Types & Interfaces",
            Lesson::Flexbox => "Flexbox",
            Lesson::Grid => "Grid",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Lesson::UseState => "State-Management in Komponenten",
            Lesson::UseEffect => "Side Effects und Lifecycle",
            Lesson::Components => "Komponenten-Architektur",
            Lesson::ViteSetup => "Projekt-Initialisierung und Konfiguration",
            Lesson::ViteBuild => "Production-Ready bauen",
            Lesson::TypeScriptBasics => "Grundlagen und erste Schritte",
            Lesson::TypeScriptTypes => "Fortgeschrittene Typen",
            Lesson::Flexbox => "Flexible Box Layout",
            Lesson::Grid => "CSS Grid Layout",
        }
    }

    /// Resolve a location pathname; a single trailing slash is ignored
    pub fn from_path(path: &str) -> Option<Lesson> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Lesson::ALL.into_iter().find(|lesson| lesson.path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = Lesson::ALL.iter().map(|l| l.path()).collect();
        assert_eq!(paths.len(), Lesson::ALL.len());
        assert!(!paths.contains(HOME_PATH));
    }

    #[test]
    fn test_every_lesson_round_trips_through_its_path() {
        for lesson in Lesson::ALL {
            assert_eq!(Lesson::from_path(lesson.path()), Some(lesson));
        }
    }

    #[test]
    fn test_from_path_tolerates_trailing_slash() {
        assert_eq!(Lesson::from_path("/css/grid/"), Some(Lesson::Grid));
        assert_eq!(Lesson::from_path("/react/useeffect/"), Some(Lesson::UseEffect));
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(Lesson::from_path("/"), None);
        assert_eq!(Lesson::from_path(""), None);
        assert_eq!(Lesson::from_path("/react"), None);
        assert_eq!(Lesson::from_path("/css/grid//"), None);
        assert_eq!(Lesson::from_path("/React/UseState"), None);
    }

    #[test]
    fn test_section_lessons_in_menu_order() {
        let react: Vec<_> = Section::React.lessons().collect();
        assert_eq!(react, vec![Lesson::UseState, Lesson::UseEffect, Lesson::Components]);

        let css: Vec<_> = Section::Css.lessons().collect();
        assert_eq!(css, vec![Lesson::Flexbox, Lesson::Grid]);
    }

    #[test]
    fn test_every_lesson_belongs_to_one_listed_section() {
        let total: usize = Section::ALL.iter().map(|s| s.lessons().count()).sum();
        assert_eq!(total, Lesson::ALL.len());
    }

    #[test]
    fn test_paths_are_prefixed_by_section() {
        for lesson in Lesson::ALL {
            let prefix = format!("/{}/", lesson.section().label().to_lowercase());
            assert!(lesson.path().starts_with(&prefix), "{:?}", lesson);
        }
    }
}
