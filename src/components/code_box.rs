//! Code Box Component
//!
//! Syntax-highlighted code sample.

use leptos::prelude::*;

use crate::markdown::{highlight_code, CodeLang};

/// Highlighted, read-only code sample
#[component]
pub fn CodeBox(code: &'static str, #[prop(optional)] lang: Option<CodeLang>) -> impl IntoView {
    let html = highlight_code(code, lang.unwrap_or(CodeLang::Tsx));

    view! { <div class="code-box" inner_html=html></div> }
}
