//! Lesson Models
//!
//! Per-page UI state behind the interactive demos.

/// Click counter that never drops below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(u32);

impl Counter {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn add(&mut self, by: u32) {
        self.0 = self.0.saturating_add(by);
    }

    pub fn increment(&mut self) {
        self.add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// In-memory scratch list of user-entered strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchList {
    items: Vec<String>,
}

impl ScratchList {
    /// Append `text` unless it is blank. Returns whether it was added.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.items.push(text.to_string());
        true
    }

    /// Remove the entry at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// (index, text) pairs for keyed rendering
    pub fn indexed(&self) -> Vec<(usize, String)> {
        self.items.iter().cloned().enumerate().collect()
    }
}

/// Seconds counter driven by an interval while running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    pub seconds: u32,
    pub running: bool,
}

impl Stopwatch {
    /// Interval period in milliseconds
    pub const TICK_MS: u32 = 1000;

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Advance by one second; ticks arriving after a stop are dropped
    pub fn tick(&mut self) {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    /// Zero the display without changing the running flag
    pub fn reset(&mut self) {
        self.seconds = 0;
    }

    pub fn button_label(self) -> &'static str {
        if self.running { "Stop" } else { "Start" }
    }
}

/// Style variant of the demo button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
        }
    }
}

/// Role of the demo user on the Types page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn toggled(self) -> Role {
        match self {
            Role::User => Role::Admin,
            Role::Admin => Role::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Default for DemoUser {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Max Mustermann".to_string(),
            email: "max@example.com".to_string(),
            role: Role::User,
        }
    }
}

impl DemoUser {
    pub fn toggle_role(&mut self) {
        self.role = self.role.toggled();
    }

    pub fn summary(&self) -> String {
        format!("User: {} ({})", self.name, self.role.as_str())
    }

    pub fn contact(&self) -> String {
        format!("#{} · {}", self.id, self.email)
    }
}

/// Type a JavaScript engine would give a literal typed into the Basics demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralType {
    Number,
    Boolean,
    String,
    Empty,
}

impl LiteralType {
    pub fn classify(input: &str) -> LiteralType {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            LiteralType::Empty
        } else if trimmed == "true" || trimmed == "false" {
            LiteralType::Boolean
        } else if trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
            LiteralType::Number
        } else {
            LiteralType::String
        }
    }

    /// TypeScript annotation for the inferred type
    pub fn annotation(self) -> Option<&'static str> {
        match self {
            LiteralType::Number => Some("number"),
            LiteralType::Boolean => Some("boolean"),
            LiteralType::String => Some("string"),
            LiteralType::Empty => None,
        }
    }
}

/// Declaration TypeScript would infer for `input`, e.g. `let value: string = 'Hallo'`
pub fn inferred_declaration(input: &str) -> Option<String> {
    let kind = LiteralType::classify(input);
    let literal = input.trim();
    let annotation = kind.annotation()?;
    let literal = match kind {
        LiteralType::String => format!("'{}'", literal.replace('\'', "\\'")),
        _ => literal.to_string(),
    };
    Some(format!("let value: {annotation} = {literal}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_never_negative() {
        let mut counter = Counter::default();
        counter.decrement();
        assert_eq!(counter.value(), 0);
        counter.increment();
        counter.increment();
        counter.decrement();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_counter_add_and_reset() {
        let mut counter = Counter::default();
        counter.add(2);
        counter.increment();
        assert_eq!(counter.value(), 3);
        counter.reset();
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_scratch_list_ignores_blank_input() {
        let mut list = ScratchList::default();
        assert!(!list.add(""));
        assert!(!list.add("   \t"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_scratch_list_keeps_entered_text() {
        let mut list = ScratchList::default();
        assert!(list.add(" Milch "));
        assert!(list.add("Brot"));
        assert_eq!(list.indexed(), vec![(0, " Milch ".to_string()), (1, "Brot".to_string())]);
    }

    #[test]
    fn test_scratch_list_remove_by_index() {
        let mut list = ScratchList::default();
        list.add("a");
        list.add("b");
        list.add("c");
        list.remove(1);
        assert_eq!(list.indexed(), vec![(0, "a".to_string()), (1, "c".to_string())]);
        list.remove(7);
        assert_eq!(list.indexed().len(), 2);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_stopwatch_ticks_only_while_running() {
        let mut sw = Stopwatch::default();
        sw.tick();
        assert_eq!(sw.seconds, 0);
        sw.toggle();
        sw.tick();
        sw.tick();
        assert_eq!(sw.seconds, 2);
        assert_eq!(sw.button_label(), "Stop");
        sw.toggle();
        sw.tick();
        assert_eq!(sw.seconds, 2);
        assert_eq!(sw.button_label(), "Start");
    }

    #[test]
    fn test_stopwatch_reset_keeps_running() {
        let mut sw = Stopwatch { seconds: 12, running: true };
        sw.reset();
        assert_eq!(sw, Stopwatch { seconds: 0, running: true });
    }

    #[test]
    fn test_button_variant_default_is_primary() {
        assert_eq!(ButtonVariant::default().class(), "primary");
        assert_eq!(ButtonVariant::Danger.class(), "danger");
    }

    #[test]
    fn test_demo_user_role_toggle() {
        let mut user = DemoUser::default();
        assert_eq!(user.summary(), "User: Max Mustermann (user)");
        assert_eq!(user.contact(), "#1 · max@example.com");
        user.toggle_role();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.summary(), "User: Max Mustermann (admin)");
        user.toggle_role();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_literal_type_classify() {
        assert_eq!(LiteralType::classify("42"), LiteralType::Number);
        assert_eq!(LiteralType::classify(" -3.5 "), LiteralType::Number);
        assert_eq!(LiteralType::classify("true"), LiteralType::Boolean);
        assert_eq!(LiteralType::classify("Hallo"), LiteralType::String);
        assert_eq!(LiteralType::classify("inf"), LiteralType::String);
        assert_eq!(LiteralType::classify("  "), LiteralType::Empty);
        assert_eq!(LiteralType::Empty.annotation(), None);
        assert_eq!(LiteralType::Number.annotation(), Some("number"));
    }

    #[test]
    fn test_inferred_declaration() {
        assert_eq!(inferred_declaration(" 42 ").as_deref(), Some("let value: number = 42"));
        assert_eq!(inferred_declaration("false").as_deref(), Some("let value: boolean = false"));
        assert_eq!(inferred_declaration("Hallo").as_deref(), Some("let value: string = 'Hallo'"));
        assert_eq!(inferred_declaration("it's").as_deref(), Some("let value: string = 'it\\'s'"));
        assert_eq!(inferred_declaration(""), None);
    }
}
