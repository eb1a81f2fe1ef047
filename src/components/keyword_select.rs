//! Keyword Select Component
//!
//! Dropdown over a closed set of CSS keywords.

use leptos::prelude::*;

use crate::css::CssKeyword;

/// `<select>` bound to a keyword signal; unknown values are ignored
#[component]
pub fn KeywordSelect<T>(value: RwSignal<T>) -> impl IntoView
where
    T: CssKeyword + Send + Sync,
{
    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match T::from_css(&raw) {
            Some(keyword) => value.set(keyword),
            None => log::warn!("[css] ignoring unknown keyword {raw:?}"),
        }
    };

    view! {
        <select class="keyword-select" on:change=on_change>
            {T::ALL
                .iter()
                .copied()
                .map(|keyword| {
                    let css = keyword.as_css();
                    view! {
                        <option value=css selected=move || value.get() == keyword>
                            {css}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
