//! Lern-App Frontend App
//!
//! Router, page layout (navigation, routed page, footer) and route logging.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Footer, Navigation};
use crate::pages::css::{FlexboxPage, GridPage};
use crate::pages::react::{ComponentsPage, UseEffectPage, UseStatePage};
use crate::pages::typescript::{BasicsPage, TypesPage};
use crate::pages::vite::{BuildPage, SetupPage};
use crate::pages::{HomePage, NotFoundPage};
use crate::routes::Lesson;
use crate::store::NavState;

pub const APP_NAME: &str = "React Lern-App";

/// Logs every client-side navigation
#[component]
fn RouteLogger() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        match Lesson::from_path(&path) {
            Some(lesson) => log::debug!("[ROUTER] {path} -> {}", lesson.nav_label()),
            None => log::debug!("[ROUTER] {path}"),
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    // Navigation state shared by the nav bar and its links
    provide_context(Store::new(NavState::default()));

    view! {
        <Router>
            <RouteLogger />
            <Navigation />

            <div class="container">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />

                    <Route path=path!("/react/usestate") view=UseStatePage />
                    <Route path=path!("/react/useeffect") view=UseEffectPage />
                    <Route path=path!("/react/components") view=ComponentsPage />

                    <Route path=path!("/vite/setup") view=SetupPage />
                    <Route path=path!("/vite/build") view=BuildPage />

                    <Route path=path!("/typescript/basics") view=BasicsPage />
                    <Route path=path!("/typescript/types") view=TypesPage />

                    <Route path=path!("/css/flexbox") view=FlexboxPage />
                    <Route path=path!("/css/grid") view=GridPage />
                </Routes>
            </div>

            <Footer />
        </Router>
    }
}
