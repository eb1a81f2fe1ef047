//! CSS Grid lesson with column and gap sliders.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, LessonBox};
use crate::css::{demo_box, grid_columns_style, grid_gap_style, parse_slider, tile, GridSettings};
use crate::markdown::CodeLang;

const ENABLE: &str = r#".container {
  display: grid;  /* Aktiviert Grid */
}"#;

const COLUMNS: &str = r#".container {
  display: grid;
  grid-template-columns: 200px 200px 200px;  /* 3 Spalten à 200px */
  grid-template-columns: 1fr 1fr 1fr;        /* 3 gleiche Spalten */
  grid-template-columns: 1fr 2fr 1fr;        /* Mittlere doppelt so breit */
  grid-template-columns: repeat(3, 1fr);     /* 3 gleiche Spalten */
  grid-template-columns: auto 1fr auto;      /* Außen auto, Mitte flexibel */
}"#;

const GAP: &str = r#".container {
  display: grid;
  gap: 20px;              /* Abstand zwischen allen Items */
  row-gap: 10px;          /* Nur vertikaler Abstand */
  column-gap: 20px;       /* Nur horizontaler Abstand */
}"#;

const AREAS: &str = r#".container {
  display: grid;
  grid-template-areas:
    "header header header"
    "sidebar main main"
    "footer footer footer";
  grid-template-columns: 200px 1fr 1fr;
  grid-template-rows: auto 1fr auto;
  gap: 10px;
}

.header  { grid-area: header; }
.sidebar { grid-area: sidebar; }
.main    { grid-area: main; }
.footer  { grid-area: footer; }"#;

const AREAS_DEMO: &str = r#"display: grid; grid-template-areas: "header header header" "sidebar main main" "footer footer footer"; grid-template-columns: 200px 1fr 1fr; grid-template-rows: auto 1fr auto; gap: 10px; min-height: 300px;"#;

const SPANNING: &str = r#".item {
  grid-column: 1 / 3;     /* Spalte 1 bis 3 */
  grid-column: span 2;    /* 2 Spalten überspannen */

  grid-row: 1 / 3;        /* Zeile 1 bis 3 */
  grid-row: span 2;       /* 2 Zeilen überspannen */
}"#;

const AUTO_FIT: &str = r#".container {
  display: grid;
  /* Automatisch so viele Spalten wie möglich, min 200px */
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 20px;
}"#;

const CHEATSHEET: &[&str] = &[
    "**display: grid** → Aktiviert Grid auf Container",
    "**grid-template-columns** → Spalten definieren",
    "**grid-template-rows** → Zeilen definieren",
    "**fr** → Flexible Einheit (fraction)",
    "**repeat()** → Wiederholung von Spalten/Zeilen",
    "**grid-template-areas** → Benannte Bereiche",
    "**span** → Über mehrere Spalten/Zeilen",
    "**auto-fit/auto-fill** → Responsive Grids",
];

const CENTERED: &str = "padding: 30px; text-align: center;";

/// Apply a slider value, logging and dropping input that is not a number
fn on_slider(ev: leptos::ev::Event, settings: RwSignal<GridSettings>, apply: fn(&mut GridSettings, u8)) {
    let raw = event_target_value(&ev);
    match parse_slider(&raw) {
        Some(value) => settings.update(|s| apply(s, value)),
        None => log::warn!("[grid] ignoring slider value {raw:?}"),
    }
}

#[component]
pub fn GridPage() -> impl IntoView {
    let settings = RwSignal::new(GridSettings::default());

    view! {
        <h1 class="page-title">"CSS Grid 🎨"</h1>

        <LessonBox title="Was ist CSS Grid?">
            <p>
                "CSS Grid ist ein zweidimensionales Layout-System, das die Anordnung "
                "von Elementen in Zeilen UND Spalten gleichzeitig ermöglicht."
            </p>
            <ul class="indented">
                <li>"📊 Zweidimensionales Layout"</li>
                <li>"🎯 Präzise Platzierung"</li>
                <li>"📱 Responsive Layouts"</li>
                <li>"🏗️ Perfekt für komplexe Layouts"</li>
            </ul>
        </LessonBox>

        <LessonBox title="1. Grid aktivieren">
            <CodeBox code=ENABLE lang=CodeLang::Css />
            <p class="spaced">
                "Mit " <code>"display: grid"</code> " werden alle direkten Kinder zu Grid-Items."
            </p>
        </LessonBox>

        <LessonBox title="2. Grid Template Columns (Spalten)">
            <CodeBox code=COLUMNS lang=CodeLang::Css />
            <div class="demo-controls">
                <label>"Spalten: " {move || settings.get().columns()}</label>
                <input
                    type="range"
                    class="slider"
                    min=GridSettings::MIN_COLUMNS.to_string()
                    max=GridSettings::MAX_COLUMNS.to_string()
                    prop:value=move || settings.get().columns().to_string()
                    on:input=move |ev| on_slider(ev, settings, GridSettings::set_columns)
                />
            </div>
            <div style=move || grid_columns_style(settings.get())>
                {(1..=9).map(|n| view! { <div style=tile("primary", CENTERED)>{n}</div> }).collect_view()}
            </div>
        </LessonBox>

        <LessonBox title="3. Grid Gap (Abstand)">
            <CodeBox code=GAP lang=CodeLang::Css />
            <div class="demo-controls">
                <label>"Gap: " {move || settings.get().gap_px()} "px"</label>
                <input
                    type="range"
                    class="slider"
                    min=GridSettings::MIN_GAP_PX.to_string()
                    max=GridSettings::MAX_GAP_PX.to_string()
                    prop:value=move || settings.get().gap_px().to_string()
                    on:input=move |ev| on_slider(ev, settings, GridSettings::set_gap_px)
                />
            </div>
            <div style=move || grid_gap_style(settings.get())>
                {(1..=6).map(|n| view! { <div style=tile("secondary", CENTERED)>{n}</div> }).collect_view()}
            </div>
        </LessonBox>

        <LessonBox title="4. Grid Template Areas (Named Areas)">
            <CodeBox code=AREAS lang=CodeLang::Css />
            <div style=demo_box(AREAS_DEMO)>
                <div style=tile("primary", "grid-area: header;")>"Header"</div>
                <div style=tile("secondary", "grid-area: sidebar;")>"Sidebar"</div>
                <div style=tile("danger", "grid-area: main;")>"Main Content"</div>
                <div style=tile("primary", "grid-area: footer;")>"Footer"</div>
            </div>
        </LessonBox>

        <LessonBox title="5. Grid Column & Row Spanning">
            <CodeBox code=SPANNING lang=CodeLang::Css />
            <div style=demo_box("display: grid; grid-template-columns: repeat(4, 1fr); gap: 10px;")>
                <div style=tile("primary", "grid-column: span 2; padding: 30px; text-align: center;")>
                    "Span 2 Spalten"
                </div>
                {(3..=5).map(|n| view! { <div style=tile("secondary", CENTERED)>{n}</div> }).collect_view()}
                <div style=tile("danger", "grid-column: span 3; padding: 30px; text-align: center;")>
                    "Span 3 Spalten"
                </div>
            </div>
        </LessonBox>

        <LessonBox title="6. Responsive Grid (auto-fit / auto-fill)">
            <CodeBox code=AUTO_FIT lang=CodeLang::Css />
            <div style=demo_box("display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px;")>
                {(1..=6).map(|n| view! { <div style=tile("primary", CENTERED)>"Card " {n}</div> }).collect_view()}
            </div>
            <p class="spaced text-muted">"💡 Ändere die Fenstergröße - Grid passt sich automatisch an!"</p>
        </LessonBox>

        <KeyConcepts title="📚 Grid Cheatsheet" items=CHEATSHEET />

        <LessonBox title="🤔 Grid vs Flexbox - Wann was?" accent=true>
            <div class="comparison">
                <div>
                    <h3 style="color: var(--color-primary);">"Flexbox nutzen für:"</h3>
                    <ul class="indented">
                        <li>"Navigation Bars"</li>
                        <li>"Buttons nebeneinander"</li>
                        <li>"Listen"</li>
                        <li>"Eindimensionale Layouts"</li>
                    </ul>
                </div>
                <div>
                    <h3 style="color: var(--color-secondary);">"Grid nutzen für:"</h3>
                    <ul class="indented">
                        <li>"Komplexe Page-Layouts"</li>
                        <li>"Card-Grids"</li>
                        <li>"Dashboards"</li>
                        <li>"Zweidimensionale Layouts"</li>
                    </ul>
                </div>
            </div>
        </LessonBox>
    }
}
