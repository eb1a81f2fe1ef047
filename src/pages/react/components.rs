//! Components lesson: props, children and local state.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, LessonBox};
use crate::models::{ButtonVariant, Counter};

const BUTTON_PROPS: &str = r#"interface ButtonProps {
  text: string;
  onClick: () => void;
  variant?: 'primary' | 'secondary';
}

function CustomButton({ text, onClick, variant }: ButtonProps) {
  return <button className={variant} onClick={onClick}>
    {text}
  </button>
}"#;

const CARD_PROPS: &str = r#"interface CardProps {
  title: string;
  children: React.ReactNode;
}

function Card({ title, children }: CardProps) {
  return (
    <div className="card">
      <h3>{title}</h3>
      {children}
    </div>
  )
}"#;

const MESSAGE_INPUT: &str = r#"function MessageInput() {
  const [message, setMessage] = useState('')

  return (
    <div>
      <input
        value={message}
        onChange={(e) => setMessage(e.target.value)}
      />
      <p>Nachricht: {message}</p>
    </div>
  )
}"#;

const CONCEPTS: &[&str] = &[
    "**Props:** Daten von Parent an Child übergeben",
    "**Children:** Verschachtelte Inhalte ermöglichen",
    "**TypeScript Interfaces:** Props typisieren für Type-Safety",
    "**Optional Props:** Mit ? markieren (z.B. variant?)",
    "**Default Values:** Mit = setzen in Destructuring",
    "**React.ReactNode:** Typ für Children (JSX, String, Number, etc.)",
];

/// Reusable button; `variant` defaults to primary
#[component]
fn CustomButton(
    text: &'static str,
    on_click: impl Fn() + 'static,
    #[prop(optional)] variant: ButtonVariant,
) -> impl IntoView {
    view! {
        <button class=variant.class() on:click=move |_| on_click()>
            {text}
        </button>
    }
}

/// Titled wrapper around arbitrary content
#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="lesson-box">
            <h3>{title}</h3>
            {children()}
        </div>
    }
}

#[component]
pub fn ComponentsPage() -> impl IntoView {
    let clicks = RwSignal::new(Counter::default());
    let message = RwSignal::new(String::new());

    let message_text = move || {
        let message = message.get();
        if message.is_empty() { "Keine Nachricht".to_string() } else { message }
    };

    view! {
        <h1 class="page-title">"React Components"</h1>

        <LessonBox title="1. Einfache Komponente mit Props">
            <CodeBox code=BUTTON_PROPS />
            <div class="demo-result">"Clicks: " {move || clicks.get().value()}</div>
            <CustomButton text="Primary Button" on_click=move || clicks.update(|c| c.add(1)) />
            <CustomButton
                text="Secondary Button"
                on_click=move || clicks.update(|c| c.add(2))
                variant=ButtonVariant::Secondary
            />
            <CustomButton
                text="Reset"
                on_click=move || clicks.update(Counter::reset)
                variant=ButtonVariant::Danger
            />
        </LessonBox>

        <LessonBox title="2. Komponente mit Children">
            <CodeBox code=CARD_PROPS />
            <Card title="Beispiel Card 1">
                <p>"Dies ist der Inhalt der ersten Card."</p>
                <p>"Children können beliebiger Content sein!"</p>
            </Card>
            <Card title="Beispiel Card 2">
                <ul class="indented">
                    <li>"Flexibel"</li>
                    <li>"Wiederverwendbar"</li>
                    <li>"Type-Safe"</li>
                </ul>
            </Card>
        </LessonBox>

        <LessonBox title="3. Komponente mit lokalem State">
            <CodeBox code=MESSAGE_INPUT />
            <input
                type="text"
                placeholder="Gib eine Nachricht ein..."
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            />
            <div class="demo-result">{message_text}</div>
        </LessonBox>

        <KeyConcepts items=CONCEPTS />
    }
}
