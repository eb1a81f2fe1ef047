//! Lesson Box Components
//!
//! Content blocks every lesson page is built from.

use leptos::prelude::*;

use crate::markdown::{parse_markdown, parse_markdown_inline};

/// Bordered section of a lesson page
#[component]
pub fn LessonBox(
    #[prop(into)] title: String,
    /// Highlight the border with the secondary color
    #[prop(optional)]
    accent: bool,
    children: Children,
) -> impl IntoView {
    let style = if accent { "border-color: var(--color-secondary);" } else { "" };

    view! {
        <div class="lesson-box" style=style>
            <h2>{title}</h2>
            {children()}
        </div>
    }
}

/// Markdown paragraph(s) of lesson text
#[component]
pub fn Prose(text: &'static str) -> impl IntoView {
    view! { <div class="prose" inner_html=parse_markdown(text)></div> }
}

/// Closing summary box: one markdown line per concept
#[component]
pub fn KeyConcepts(
    #[prop(default = "📚 Wichtige Konzepte")] title: &'static str,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <LessonBox title=title>
            <ul class="concept-list">
                {items
                    .iter()
                    .map(|item| view! { <li inner_html=parse_markdown_inline(item)></li> })
                    .collect_view()}
            </ul>
        </LessonBox>
    }
}
