//! Navigation Bar Component
//!
//! Sticky header with brand link, mobile menu toggle and one dropdown per
//! section. Every link click closes the menu and all dropdowns.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::APP_NAME;
use crate::routes::{Section, HOME_PATH};
use crate::store::{store_close_menu, store_toggle_menu, store_toggle_submenu, use_nav_store, NavStateStoreFields};

/// Link that is marked active while its route is shown
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let store = use_nav_store();
    let location = use_location();

    let link_class = move || {
        if location.pathname.get() == href {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <a href=href class=link_class on:click=move |_| store_close_menu(&store)>
            {label}
        </a>
    }
}

/// Dropdown listing the lessons of one section
#[component]
fn SectionDropdown(section: Section) -> impl IntoView {
    let store = use_nav_store();
    let is_open = move || store.with(|state| state.is_submenu_open(section));

    view! {
        <li class="nav-item nav-item-dropdown">
            <button
                class="nav-link nav-dropdown-toggle"
                on:click=move |_| store_toggle_submenu(&store, section)
            >
                {section.label()} " " {move || if is_open() { "▲" } else { "▼" }}
            </button>
            <ul class=move || if is_open() { "nav-dropdown open" } else { "nav-dropdown" }>
                {section
                    .lessons()
                    .map(|lesson| view! {
                        <li>
                            <NavLink href=lesson.path() label=lesson.nav_label() />
                        </li>
                    })
                    .collect_view()}
            </ul>
        </li>
    }
}

/// Main navigation bar
#[component]
pub fn Navigation() -> impl IntoView {
    let store = use_nav_store();
    let menu_open = move || store.menu_open().get();

    view! {
        <nav class="nav">
            <div class="nav-container">
                <a href=HOME_PATH class="nav-brand" on:click=move |_| store_close_menu(&store)>
                    <span>"⚛️"</span>
                    {APP_NAME}
                </a>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| store_toggle_menu(&store)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>

                <ul class=move || if menu_open() { "nav-list open" } else { "nav-list" }>
                    <li class="nav-item">
                        <NavLink href=HOME_PATH label="Home" />
                    </li>
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <SectionDropdown section=section /> })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
