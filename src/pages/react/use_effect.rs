//! useEffect lesson: document title, mount effect, timer and resize listener.

use leptos::prelude::*;
use leptos_subscriptions::{use_interval, use_window_width};

use crate::components::{CodeBox, KeyConcepts, LessonBox};
use crate::models::{Counter, Stopwatch};

const TITLE_EFFECT: &str = r#"useEffect(() => {
  document.title = `Count: ${count}`
})"#;

const MOUNT_EFFECT: &str = r#"useEffect(() => {
  console.log('Komponente wurde gemountet!')
}, [])"#;

const TIMER_EFFECT: &str = r#"useEffect(() => {
  const interval = setInterval(() => {
    setSeconds(prev => prev + 1)
  }, 1000)

  return () => clearInterval(interval)
}, [isRunning])"#;

const RESIZE_EFFECT: &str = r#"useEffect(() => {
  const handleResize = () => {
    setWindowWidth(window.innerWidth)
  }
  window.addEventListener('resize', handleResize)

  return () => {
    window.removeEventListener('resize', handleResize)
  }
}, [])"#;

const CONCEPTS: &[&str] = &[
    "**Ohne Dependency Array:** Läuft bei jedem Render",
    "**Leeres Array []:** Läuft nur beim Mount (einmal)",
    "**Mit Dependencies [count]:** Läuft wenn sich count ändert",
    "**Cleanup Function:** `return () => ...` wird beim Unmount ausgeführt",
    "**Anwendungsfälle:** API-Calls, Timer, Event Listener, Subscriptions",
];

fn count_title(count: u32) -> String {
    format!("Count: {count}")
}

#[component]
pub fn UseEffectPage() -> impl IntoView {
    let counter = RwSignal::new(Counter::default());
    let stopwatch = RwSignal::new(Stopwatch::default());

    // Title follows the counter
    Effect::new(move |_| {
        let title = count_title(counter.get().value());
        document().set_title(&title);
    });

    // No tracked reads, so this runs once after mount
    Effect::new(move |_| {
        log::info!("Komponente wurde gemountet!");
    });

    let running = Signal::derive(move || stopwatch.get().running);
    use_interval(running, Stopwatch::TICK_MS, move || stopwatch.update(Stopwatch::tick));

    let window_width = use_window_width();

    view! {
        <h1 class="page-title">"useEffect Hook"</h1>

        <LessonBox title="1. Effect bei jedem Render">
            <CodeBox code=TITLE_EFFECT />
            <p>"Der Document Title ändert sich mit jedem Count!"</p>
            <div class="demo-result">"Count: " {move || counter.get().value()}</div>
            <button on:click=move |_| counter.update(Counter::increment)>"+1"</button>
            <button on:click=move |_| counter.update(Counter::decrement)>"-1"</button>
        </LessonBox>

        <LessonBox title="2. Effect nur beim Mount">
            <CodeBox code=MOUNT_EFFECT />
            <p>"Schau in die Browser-Konsole (F12) - die Nachricht erscheint nur einmal!"</p>
            <p>"Das leere Array [] bedeutet: nur beim ersten Render ausführen."</p>
        </LessonBox>

        <LessonBox title="3. Timer mit Cleanup">
            <CodeBox code=TIMER_EFFECT />
            <div class="demo-result">"Timer: " {move || stopwatch.get().seconds} "s"</div>
            <button on:click=move |_| stopwatch.update(Stopwatch::toggle)>
                {move || stopwatch.get().button_label()}
            </button>
            <button class="secondary" on:click=move |_| stopwatch.update(Stopwatch::reset)>"Reset"</button>
        </LessonBox>

        <LessonBox title="4. Event Listener mit Cleanup">
            <CodeBox code=RESIZE_EFFECT />
            <div class="demo-result">"Fensterbreite: " {move || window_width.get()} "px"</div>
            <p>"Ändere die Fenstergröße, um die Breite zu aktualisieren!"</p>
        </LessonBox>

        <KeyConcepts items=CONCEPTS />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_title() {
        assert_eq!(count_title(0), "Count: 0");
        assert_eq!(count_title(17), "Count: 17");
    }
}
