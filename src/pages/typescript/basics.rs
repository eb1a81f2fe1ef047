//! TypeScript basics lesson with a type inference demo.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, LessonBox, Prose};
use crate::markdown::CodeLang;
use crate::models::inferred_declaration;

const INTRO: &str = "TypeScript ist **JavaScript mit Typen**. Der Compiler prüft deinen Code \
vor dem Ausführen und findet Fehler, bevor sie im Browser passieren. \
Am Ende entsteht ganz normales JavaScript.";

const INSTALL: &str = r#"# TypeScript installieren
npm install -D typescript

# tsconfig.json erzeugen
npx tsc --init

# Einzelne Datei kompilieren
npx tsc main.ts"#;

const PRIMITIVES: &str = r#"let username: string = 'Max'
let age: number = 25
let isActive: boolean = true

let nothing: null = null
let notSet: undefined = undefined

// Fehler: Type 'string' is not assignable to type 'number'
age = 'fünfundzwanzig'"#;

const ARRAYS: &str = r#"let scores: number[] = [90, 85, 77]
let names: Array<string> = ['Anna', 'Ben']

// Tuple: feste Länge und Typen pro Position
let point: [number, number] = [10, 20]
let entry: [string, number] = ['Alter', 25]"#;

const FUNCTIONS: &str = r#"function add(a: number, b: number): number {
  return a + b
}

// Optionaler Parameter mit ?
function greet(name: string, greeting?: string): string {
  return `${greeting ?? 'Hallo'}, ${name}!`
}

// Default-Wert
function repeat(text: string, times: number = 2): string {
  return text.repeat(times)
}

// Arrow Function mit Typen
const multiply = (a: number, b: number): number => a * b

// Kein Rückgabewert
function log(message: string): void {
  console.log(message)
}"#;

const OBJECTS: &str = r#"let user: { name: string; age: number; email?: string } = {
  name: 'Max',
  age: 25
}

user.email = 'max@example.com'  // ✅ optional
user.phone = '123'              // ❌ existiert nicht im Typ"#;

const UNIONS: &str = r#"let id: string | number
id = 42        // ✅
id = 'abc-42'  // ✅
id = true      // ❌

// Literal Types
let size: 'small' | 'medium' | 'large' = 'medium'"#;

const INFERENCE: &str = r#"let count = 0          // number
let title = 'Lern-App'  // string
let done = false        // boolean

count = 'zehn'  // ❌ count ist number

// any vs unknown
let a: any = 5        // keine Prüfung mehr
let u: unknown = 5    // muss vor Nutzung geprüft werden"#;

const CONCEPTS: &[&str] = &[
    "**Type Annotation:** `let x: number = 5`",
    "**Inference:** TypeScript erkennt Typen oft automatisch",
    "**Optionale Parameter:** Mit `?` markieren",
    "**Union Types:** `string | number` erlaubt mehrere Typen",
    "**void:** Funktion ohne Rückgabewert",
    "**unknown statt any:** Sicherer, weil geprüft werden muss",
];

#[component]
pub fn BasicsPage() -> impl IntoView {
    let literal = RwSignal::new(String::new());

    let inferred = move || {
        inferred_declaration(&literal.get()).unwrap_or_else(|| "Noch kein Wert eingegeben".to_string())
    };

    view! {
        <h1 class="page-title">"TypeScript Basics 📘"</h1>

        <LessonBox title="Was ist TypeScript?">
            <Prose text=INTRO />
            <ul class="indented">
                <li>"🛡️ Fehler zur Compile-Zeit statt zur Laufzeit"</li>
                <li>"💡 Bessere Autovervollständigung im Editor"</li>
                <li>"📖 Typen dokumentieren den Code"</li>
                <li>"🔄 Schrittweise in JavaScript-Projekte einführbar"</li>
            </ul>
        </LessonBox>

        <LessonBox title="1. Installation">
            <CodeBox code=INSTALL lang=CodeLang::Shell />
        </LessonBox>

        <LessonBox title="2. Primitive Typen">
            <CodeBox code=PRIMITIVES />
        </LessonBox>

        <LessonBox title="3. Arrays und Tuples">
            <CodeBox code=ARRAYS />
        </LessonBox>

        <LessonBox title="4. Funktionen">
            <CodeBox code=FUNCTIONS />
        </LessonBox>

        <LessonBox title="5. Objekte">
            <CodeBox code=OBJECTS />
        </LessonBox>

        <LessonBox title="6. Union Types">
            <CodeBox code=UNIONS />
        </LessonBox>

        <LessonBox title="7. Type Inference">
            <CodeBox code=INFERENCE />
            <p class="spaced">"Probiere es aus: Welchen Typ würde TypeScript ableiten?"</p>
            <input
                type="text"
                placeholder="z.B. 42, true oder Hallo"
                prop:value=move || literal.get()
                on:input=move |ev| literal.set(event_target_value(&ev))
            />
            <div class="demo-result"><code>{inferred}</code></div>
        </LessonBox>

        <KeyConcepts items=CONCEPTS />
    }
}
