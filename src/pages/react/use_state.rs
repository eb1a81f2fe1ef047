//! useState lesson: counter, controlled input and list state.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, LessonBox};
use crate::models::{Counter, ScratchList};

const CONCEPTS: &[&str] = &[
    "**State ist lokal:** Jede Komponente hat ihren eigenen State",
    "**Immutability:** Bei Arrays/Objekten immer neue Kopien erstellen",
    "**setState löst Re-Render aus:** Die Komponente wird neu gezeichnet",
    "**TypeScript:** Mit `<string[]>` den Typ definieren",
];

#[component]
pub fn UseStatePage() -> impl IntoView {
    let counter = RwSignal::new(Counter::default());
    let name = RwSignal::new(String::new());
    let items = RwSignal::new(ScratchList::default());
    let new_item = RwSignal::new(String::new());

    // Blank input is ignored and stays in the field
    let add_item = move || {
        let text = new_item.get();
        if items.try_update(|list| list.add(&text)).unwrap_or(false) {
            new_item.set(String::new());
        }
    };

    let greeting = move || {
        let name = name.get();
        if name.is_empty() {
            "Noch kein Name eingegeben".to_string()
        } else {
            format!("Hallo, {name}!")
        }
    };

    view! {
        <h1 class="page-title">"useState Hook"</h1>

        <LessonBox title="1. Einfacher Counter">
            <CodeBox code="const [count, setCount] = useState(0)" />
            <div class="demo-result">"Count: " {move || counter.get().value()}</div>
            <button on:click=move |_| counter.update(Counter::increment)>"+1"</button>
            <button on:click=move |_| counter.update(Counter::decrement)>"-1"</button>
            <button class="secondary" on:click=move |_| counter.update(Counter::reset)>"Reset"</button>
        </LessonBox>

        <LessonBox title="2. Text Input mit State">
            <CodeBox code="const [name, setName] = useState('')" />
            <input
                type="text"
                placeholder="Gib deinen Namen ein"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <div class="demo-result">{greeting}</div>
        </LessonBox>

        <LessonBox title="3. Liste verwalten (Array State)">
            <CodeBox code="const [items, setItems] = useState<string[]>([])" />
            <input
                type="text"
                placeholder="Neues Item"
                prop:value=move || new_item.get()
                on:input=move |ev| new_item.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        add_item();
                    }
                }
            />
            <button on:click=move |_| add_item()>"Hinzufügen"</button>
            <button class="danger" on:click=move |_| items.update(ScratchList::clear)>"Alle löschen"</button>

            <div class="demo-result">
                <Show
                    when=move || !items.with(ScratchList::is_empty)
                    fallback=|| view! { <p>"Keine Items vorhanden"</p> }
                >
                    <ul class="scratch-list">
                        <For
                            each=move || items.with(ScratchList::indexed)
                            key=|(index, text)| (*index, text.clone())
                            children=move |(index, text)| {
                                view! {
                                    <li class="scratch-item">
                                        {text}
                                        <button
                                            class="danger small"
                                            on:click=move |_| items.update(|list| list.remove(index))
                                        >
                                            "Löschen"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </LessonBox>

        <KeyConcepts items=CONCEPTS />
    }
}
