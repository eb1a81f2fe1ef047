//! Landing page with an overview of every section.

use leptos::prelude::*;

use crate::components::{CodeBox, LessonBox};
use crate::routes::Section;

const QUICK_START: &str = r#"// Typisches React + TypeScript Beispiel
import { useState } from 'react';

interface User {
  name: string;
  age: number;
}

function App() {
  const [user, setUser] = useState<User>({
    name: 'Max',
    age: 25
  });

  return <h1>Hallo, {user.name}!</h1>
}"#;

/// Lesson list of one section, generated from the route table
#[component]
fn SectionOverview(section: Section) -> impl IntoView {
    view! {
        <LessonBox title=format!("{} {}", section.icon(), section.label())>
            <p>{section.tagline()}</p>
            <ul class="lesson-list">
                {section
                    .lessons()
                    .map(|lesson| view! {
                        <li>
                            <a href=lesson.path() class="lesson-link">{lesson.nav_label()}</a>
                            " - " {lesson.summary()}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </LessonBox>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <h1 class="page-title">"React + TypeScript + Vite Lern-App 🚀"</h1>

        <LessonBox title="Willkommen zur vollständigen Web-Development Lern-Plattform!">
            <p>
                "Diese App hilft dir, moderne Web-Entwicklung mit den wichtigsten "
                "Technologien zu lernen: React, TypeScript, Vite und CSS."
            </p>
        </LessonBox>

        {Section::ALL
            .into_iter()
            .map(|section| view! { <SectionOverview section=section /> })
            .collect_view()}

        <LessonBox title="🚀 Quick Start" accent=true>
            <CodeBox code=QUICK_START />
            <p class="spaced">"👉 Nutze die Navigation oben, um zu den verschiedenen Lektionen zu gelangen."</p>
        </LessonBox>
    }
}
