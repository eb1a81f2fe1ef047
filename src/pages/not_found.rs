//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::LessonBox;
use crate::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    log::warn!("[ROUTER] no page for {}", location.pathname.get_untracked());

    view! {
        <h1 class="page-title">"Seite nicht gefunden 🔍"</h1>
        <LessonBox title="404">
            <p>"Unter " <code>{move || location.pathname.get()}</code> " gibt es keine Lektion."</p>
            <p class="spaced"><a href=HOME_PATH>"Zurück zur Startseite"</a></p>
        </LessonBox>
    }
}
