//! Vite build and deploy lesson.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, LessonBox};
use crate::markdown::CodeLang;

const BUILD: &str = r#"# Build für Production
npm run build

# Output in 'dist' Folder:
dist/
├── assets/
│   ├── index-abc123.js
│   ├── index-def456.css
│   └── ...
└── index.html"#;

const PREVIEW: &str = r#"# Preview des Production Builds
npm run preview

# Läuft auf: http://localhost:4173"#;

const BUILD_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
  build: {
    outDir: 'dist',
    sourcemap: false,          // Keine Source Maps in Prod
    minify: 'terser',          // Bessere Minification
    chunkSizeWarningLimit: 1000,
    rollupOptions: {
      output: {
        manualChunks: {
          'react-vendor': ['react', 'react-dom'],
          'router': ['react-router-dom']
        }
      }
    }
  }
})"#;

const VERCEL: &str = r#"# 1. Vercel CLI installieren
npm i -g vercel

# 2. In Projektordner wechseln
cd my-app

# 3. Deploy
vercel

# Folge den Anweisungen:
# - Login mit GitHub/GitLab/Bitbucket
# - Projekt verknüpfen
# - Automatisches Deploy bei Git Push"#;

const NETLIFY: &str = r#"# 1. Netlify CLI installieren
npm i -g netlify-cli

# 2. Login
netlify login

# 3. Build und Deploy
netlify deploy --prod

# Build Command: npm run build
# Publish Directory: dist"#;

const GH_PAGES: &str = r#"# 1. In vite.config.ts Base setzen
export default defineConfig({
  base: '/repo-name/',  // Dein Repository Name
  // ... rest
})

# 2. gh-pages Package installieren
npm install -D gh-pages

# 3. Script in package.json hinzufügen
"scripts": {
  "deploy": "npm run build && gh-pages -d dist"
}

# 4. Deploy
npm run deploy"#;

const ENV_VARS: &str = r#"# .env Datei erstellen
VITE_API_URL=https://api.example.com
VITE_API_KEY=your-key-here

# In Code verwenden:
const apiUrl = import.meta.env.VITE_API_URL

# Wichtig:
# - Prefix VITE_ ist notwendig!
# - Niemals Secrets in .env committen
# - Nutze .env.local für lokale Secrets"#;

const BEST_PRACTICES: &[&str] = &[
    "**Immer testen:** Nutze preview vor dem Deploy",
    "**Chunk-Splitting:** Große Libraries separat bundeln",
    "**Source Maps:** In Production deaktivieren",
    "**Environment Variables:** `VITE_` Prefix verwenden",
    "**CI/CD:** Automatisches Deploy bei Git Push einrichten",
    "**.gitignore:** `dist/`, `node_modules/`, `.env.local`",
];

#[component]
pub fn BuildPage() -> impl IntoView {
    view! {
        <h1 class="page-title">"Vite Build & Deploy 🚀"</h1>

        <LessonBox title="1. Production Build erstellen">
            <CodeBox code=BUILD lang=CodeLang::Shell />
            <p class="spaced">"Der Build-Prozess:"</p>
            <ul class="indented">
                <li>"Minifiziert JavaScript und CSS"</li>
                <li>"Optimiert Assets (Bilder, Fonts)"</li>
                <li>"Generiert Hash-Namen für Cache-Busting"</li>
                <li>"Tree-Shaking für kleinere Bundles"</li>
            </ul>
        </LessonBox>

        <LessonBox title="2. Production Build testen">
            <CodeBox code=PREVIEW lang=CodeLang::Shell />
            <p class="spaced">"Wichtig: Immer das Production Build testen, bevor du deployest!"</p>
        </LessonBox>

        <LessonBox title="3. Build-Optimierung (vite.config.ts)">
            <CodeBox code=BUILD_CONFIG />
        </LessonBox>

        <LessonBox title="4. Deploy auf Vercel">
            <CodeBox code=VERCEL lang=CodeLang::Shell />
            <p class="spaced">"Vercel erkennt Vite automatisch und konfiguriert alles!"</p>
        </LessonBox>

        <LessonBox title="5. Deploy auf Netlify">
            <CodeBox code=NETLIFY lang=CodeLang::Shell />
        </LessonBox>

        <LessonBox title="6. Deploy auf GitHub Pages">
            <CodeBox code=GH_PAGES lang=CodeLang::Shell />
        </LessonBox>

        <LessonBox title="7. Environment Variables">
            <CodeBox code=ENV_VARS lang=CodeLang::Shell />
        </LessonBox>

        <KeyConcepts title="📚 Best Practices" items=BEST_PRACTICES />
    }
}
