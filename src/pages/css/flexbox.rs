//! Flexbox lesson with live direction, justify and align demos.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, KeywordSelect, LessonBox};
use crate::css::{
    align_container_style, demo_box, flex_container_style, justify_container_style, tile, AlignItems,
    CssKeyword, FlexDirection, JustifyContent,
};
use crate::markdown::CodeLang;

const ENABLE: &str = r#".container {
  display: flex;  /* Aktiviert Flexbox */
}"#;

const DIRECTION: &str = r#".container {
  display: flex;
  flex-direction: row;        /* horizontal (default) */
  flex-direction: column;     /* vertikal */
  flex-direction: row-reverse;    /* horizontal rückwärts */
  flex-direction: column-reverse; /* vertikal rückwärts */
}"#;

const JUSTIFY: &str = r#".container {
  justify-content: flex-start;    /* Start (default) */
  justify-content: center;        /* Zentriert */
  justify-content: flex-end;      /* Ende */
  justify-content: space-between; /* Gleichmäßig verteilt */
  justify-content: space-around;  /* Mit Abstand außen */
  justify-content: space-evenly;  /* Gleichmäßiger Abstand */
}"#;

const ALIGN: &str = r#".container {
  align-items: stretch;      /* Volle Höhe (default) */
  align-items: flex-start;   /* Oben */
  align-items: center;       /* Zentriert */
  align-items: flex-end;     /* Unten */
  align-items: baseline;     /* Textbaseline */
}"#;

const GAP: &str = r#".container {
  display: flex;
  gap: 20px;              /* Abstand zwischen allen Items */
  row-gap: 10px;          /* Nur vertikaler Abstand */
  column-gap: 20px;       /* Nur horizontaler Abstand */
}"#;

const ITEM_PROPS: &str = r#".item {
  flex-grow: 1;     /* Wachsen bei freiem Platz */
  flex-shrink: 1;   /* Schrumpfen bei wenig Platz */
  flex-basis: 200px; /* Basis-Größe */

  /* Kurzschreibweise: */
  flex: 1;          /* flex-grow: 1, flex-shrink: 1, flex-basis: 0% */
  flex: 0 0 200px;  /* nicht wachsen, nicht schrumpfen, 200px */
}"#;

const WRAP: &str = r#".container {
  flex-wrap: nowrap;    /* Kein Umbruch (default) */
  flex-wrap: wrap;      /* Umbruch erlaubt */
  flex-wrap: wrap-reverse; /* Umbruch rückwärts */
}"#;

const NAVBAR: &str = r##".navbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 2rem;
  background: #1a1a1a;
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}"##;

const CHEATSHEET: &[&str] = &[
    "**display: flex** → Aktiviert Flexbox auf Container",
    "**flex-direction** → Hauptachse: row | column",
    "**justify-content** → Ausrichtung auf Hauptachse",
    "**align-items** → Ausrichtung auf Querachse",
    "**gap** → Abstand zwischen Items (moderner als margin)",
    "**flex** → Wachstum/Schrumpfen von Items",
    "**flex-wrap** → Umbruch bei wenig Platz",
];

/// The three colored tiles shared by most demos
const TILE_COLORS: [&str; 3] = ["primary", "secondary", "danger"];

fn numbered_tiles(extra: &'static str) -> impl IntoView {
    TILE_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| view! { <div style=tile(color, extra)>{i + 1}</div> })
        .collect_view()
}

#[component]
pub fn FlexboxPage() -> impl IntoView {
    let direction = RwSignal::new(FlexDirection::default());
    let justify = RwSignal::new(JustifyContent::default());
    let align = RwSignal::new(AlignItems::default());

    view! {
        <h1 class="page-title">"CSS Flexbox 📐"</h1>

        <LessonBox title="Was ist Flexbox?">
            <p>
                "Flexbox ist ein eindimensionales Layout-Modell für CSS, das die "
                "Anordnung von Elementen in einer Reihe oder Spalte erleichtert."
            </p>
            <ul class="indented">
                <li>"📏 Flexible Größenanpassung"</li>
                <li>"🔄 Einfache Ausrichtung"</li>
                <li>"📱 Responsive Layouts"</li>
                <li>"🎯 Perfekt für UI-Komponenten"</li>
            </ul>
        </LessonBox>

        <LessonBox title="1. Flexbox aktivieren">
            <CodeBox code=ENABLE lang=CodeLang::Css />
            <p class="spaced">
                "Sobald " <code>"display: flex"</code> " gesetzt ist, werden alle direkten "
                "Kinder zu Flex-Items."
            </p>
        </LessonBox>

        <LessonBox title="2. Flex Direction (Hauptachse)">
            <CodeBox code=DIRECTION lang=CodeLang::Css />
            <div class="demo-controls">
                {FlexDirection::ALL
                    .iter()
                    .copied()
                    .map(|choice| view! {
                        <label class="radio-label">
                            <input
                                type="radio"
                                name="flex-direction"
                                prop:checked=move || direction.get() == choice
                                on:change=move |_| direction.set(choice)
                            />
                            " " {choice.label()}
                        </label>
                    })
                    .collect_view()}
            </div>
            <div style=move || flex_container_style(direction.get())>{numbered_tiles("")}</div>
        </LessonBox>

        <LessonBox title="3. Justify Content (Hauptachse)">
            <CodeBox code=JUSTIFY lang=CodeLang::Css />
            <KeywordSelect value=justify />
            <div style=move || justify_container_style(justify.get())>
                {numbered_tiles("padding: 15px 30px;")}
            </div>
        </LessonBox>

        <LessonBox title="4. Align Items (Querachse)">
            <CodeBox code=ALIGN lang=CodeLang::Css />
            <KeywordSelect value=align />
            <div style=move || align_container_style(align.get())>
                <div style=tile("primary", "padding: 10px 20px;")>"Klein"</div>
                <div style=tile("secondary", "padding: 30px 20px;")>"Mittel"</div>
                <div style=tile("danger", "padding: 50px 20px;")>"Groß"</div>
            </div>
        </LessonBox>

        <LessonBox title="5. Gap (Abstand zwischen Items)">
            <CodeBox code=GAP lang=CodeLang::Css />
            <div style=demo_box("display: flex; gap: 20px;")>{numbered_tiles("")}</div>
        </LessonBox>

        <LessonBox title="6. Flex Properties für Items">
            <CodeBox code=ITEM_PROPS lang=CodeLang::Css />
            <div style=demo_box("display: flex; gap: 10px;")>
                <div style=tile("primary", "flex: 0 0 100px;")>"Fix 100px"</div>
                <div style=tile("secondary", "flex: 1;")>"Flexibel"</div>
                <div style=tile("danger", "flex: 2;")>"2x größer"</div>
            </div>
        </LessonBox>

        <LessonBox title="7. Flex Wrap (Umbruch)">
            <CodeBox code=WRAP lang=CodeLang::Css />
            <div style=demo_box("display: flex; flex-wrap: wrap; gap: 10px;")>
                {(1..=6)
                    .map(|n| view! {
                        <div style=tile("primary", "padding: 20px 40px; min-width: 150px;")>"Item " {n}</div>
                    })
                    .collect_view()}
            </div>
        </LessonBox>

        <LessonBox title="8. Praktisches Beispiel: Navbar">
            <CodeBox code=NAVBAR lang=CodeLang::Css />
            <div style="display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background-color: #1a1a1a; border-radius: 8px; margin-top: 15px;">
                <div style="font-weight: bold; font-size: 1.2rem;">"Logo"</div>
                <div style="display: flex; gap: 2rem;">
                    <span>"Home"</span>
                    <span>"About"</span>
                    <span>"Contact"</span>
                </div>
            </div>
        </LessonBox>

        <KeyConcepts title="📚 Flexbox Cheatsheet" items=CHEATSHEET />
    }
}
