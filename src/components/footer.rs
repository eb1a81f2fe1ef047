//! Footer Component
//!
//! Static site footer shown below every page.

use leptos::prelude::*;

use crate::app::APP_NAME;
use crate::routes::{Lesson, HOME_PATH};

/// External documentation links
const RESOURCES: &[(&str, &str)] = &[
    ("React Dokumentation", "https://react.dev"),
    ("TypeScript Docs", "https://www.typescriptlang.org/docs/"),
    ("Vite Dokumentation", "https://vitejs.dev"),
];

/// (icon, aria label, url)
const SOCIAL: &[(&str, &str, &str)] = &[
    ("💻", "GitHub", "https://github.com"),
    ("🐦", "Twitter", "https://twitter.com"),
    ("💼", "LinkedIn", "https://linkedin.com"),
];

/// Lessons linked from the footer navigation column
const FOOTER_LESSONS: &[(Lesson, &str)] = &[
    (Lesson::UseState, "useState Hook"),
    (Lesson::UseEffect, "useEffect Hook"),
];

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-section">
                    <h3>{APP_NAME}</h3>
                    <p>"Eine interaktive Plattform zum Lernen von React Hooks mit TypeScript und Vite."</p>
                    <p class="text-muted">"Perfekt für Anfänger und Fortgeschrittene."</p>
                </div>

                <div class="footer-section">
                    <h3>"Navigation"</h3>
                    <ul class="footer-links">
                        <li><a href=HOME_PATH>"Home"</a></li>
                        {FOOTER_LESSONS
                            .iter()
                            .map(|(lesson, label)| view! { <li><a href=lesson.path()>{*label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-section">
                    <h3>"Ressourcen"</h3>
                    <ul class="footer-links">
                        {RESOURCES
                            .iter()
                            .map(|(label, url)| view! {
                                <li>
                                    <a href=*url target="_blank" rel="noopener noreferrer">{*label}</a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-section">
                    <h3>"Folge uns"</h3>
                    <div class="footer-social">
                        {SOCIAL
                            .iter()
                            .map(|(icon, label, url)| view! {
                                <a href=*url target="_blank" rel="noopener noreferrer" aria-label=*label>
                                    {*icon}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    "© " {year} " " {APP_NAME} ". Erstellt mit "
                    <span style="color: #f56565;">"❤️"</span>
                    " und React."
                </p>
            </div>
        </footer>
    }
}
