//! Vite setup lesson.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, LessonBox};
use crate::markdown::CodeLang;

const CREATE_PROJECT: &str = r#"# With npm
npm create vite@latest

# With yarn
yarn create vite

# With pnpm
pnpm create vite

# Direct with template
npm create vite@latest my-app -- --template react-ts"#;

const INSTALL: &str = "cd my-app\nnpm install";

const DEV_SERVER: &str = r#"npm run dev

# Server läuft auf:
# http://localhost:5173"#;

const PROJECT_TREE: &str = r#"my-app/
├── node_modules/
├── public/              # Static assets
│   └── vite.svg
├── src/                 # Source code
│   ├── App.tsx
│   ├── main.tsx         # Entry point
│   └── styles/
├── index.html           # HTML template
├── package.json
├── tsconfig.json        # TypeScript config
├── vite.config.ts       # Vite config
└── .gitignore"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
  server: {
    port: 3000,        // Custom port
    open: true         // Auto-open browser
  },
  build: {
    outDir: 'dist',    // Output folder
    sourcemap: true    // Generate source maps
  }
})"#;

const COMMANDS: &str = r#"# Development server
npm run dev

# Production build
npm run build

# Preview production build
npm run preview

# Type-check (TypeScript)
tsc --noEmit"#;

const ADVANTAGES: &[&str] = &[
    "**Geschwindigkeit:** Native ES-Modules = kein Bundling im Dev",
    "**HMR:** Änderungen sofort sichtbar ohne Reload",
    "**TypeScript:** Out-of-the-box Support",
    "**Optimiert:** Rollup für Production Build",
    "**Modern:** Fokus auf moderne Browser",
];

#[component]
pub fn SetupPage() -> impl IntoView {
    view! {
        <h1 class="page-title">"Vite Setup ⚡"</h1>

        <LessonBox title="Was ist Vite?">
            <p>
                "Vite ist ein modernes Build-Tool für Web-Projekte, das extrem schnell ist. "
                "Es nutzt native ES-Modules im Browser und bietet:"
            </p>
            <ul class="indented">
                <li>"⚡ Blitzschneller Dev-Server"</li>
                <li>"🔥 Hot Module Replacement (HMR)"</li>
                <li>"📦 Optimiertes Production-Build"</li>
                <li>"🔧 Zero-Config für TypeScript, JSX, CSS"</li>
            </ul>
        </LessonBox>

        <LessonBox title="1. Neues Projekt erstellen">
            <CodeBox code=CREATE_PROJECT lang=CodeLang::Shell />
            <p class="spaced">"Vite fragt dich nach:"</p>
            <ul class="indented">
                <li>"Projektname"</li>
                <li>"Framework (React, Vue, Svelte, etc.)"</li>
                <li>"Variant (JavaScript, TypeScript)"</li>
            </ul>
        </LessonBox>

        <LessonBox title="2. Dependencies installieren">
            <CodeBox code=INSTALL lang=CodeLang::Shell />
        </LessonBox>

        <LessonBox title="3. Development Server starten">
            <CodeBox code=DEV_SERVER lang=CodeLang::Shell />
            <p class="spaced">"Der Dev-Server startet in Sekunden und bietet:"</p>
            <ul class="indented">
                <li>"Instant Hot Module Replacement"</li>
                <li>"Schnelle Änderungen ohne Full-Reload"</li>
                <li>"Optimierte Entwickler-Experience"</li>
            </ul>
        </LessonBox>

        <LessonBox title="4. Typische Projektstruktur">
            <CodeBox code=PROJECT_TREE lang=CodeLang::Text />
        </LessonBox>

        <LessonBox title="5. Vite Konfiguration (vite.config.ts)">
            <CodeBox code=VITE_CONFIG />
        </LessonBox>

        <LessonBox title="6. Wichtige Commands">
            <CodeBox code=COMMANDS lang=CodeLang::Shell />
        </LessonBox>

        <KeyConcepts title="📚 Vorteile von Vite" items=ADVANTAGES />
    }
}
