//! Lesson Text Rendering
//!
//! Renders lesson prose with pulldown-cmark and code samples with syntect:
//! - Inline markdown for key-concept lists (`**bold**`, `code`)
//! - Fenced code blocks inside prose are highlighted like code boxes

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

/// Dark theme matching the site palette
const THEME_NAME: &str = "base16-ocean.dark";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    let themes = &THEME_SET.get_or_init(ThemeSet::load_defaults).themes;
    themes.get(THEME_NAME).or_else(|| themes.values().next())
}

/// Language of a code sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLang {
    /// TypeScript / TSX, highlighted with the JavaScript grammar
    Tsx,
    Css,
    Shell,
    Json,
    Text,
}

impl CodeLang {
    fn syntax_token(self) -> &'static str {
        match self {
            CodeLang::Tsx => "js",
            CodeLang::Css => "css",
            CodeLang::Shell => "sh",
            CodeLang::Json => "json",
            CodeLang::Text => "txt",
        }
    }

    /// Map a fenced block info string (` ```tsx `) to a language
    pub fn from_fence(info: &str) -> CodeLang {
        match info.trim().to_lowercase().as_str() {
            "ts" | "tsx" | "typescript" | "js" | "jsx" | "javascript" => CodeLang::Tsx,
            "css" => CodeLang::Css,
            "sh" | "bash" | "shell" => CodeLang::Shell,
            "json" => CodeLang::Json,
            _ => CodeLang::Text,
        }
    }
}

/// Highlight a code sample to HTML; falls back to an escaped `<pre>` block
pub fn highlight_code(code: &str, lang: CodeLang) -> String {
    let ss = get_syntax_set();
    let Some(theme) = get_theme() else {
        return plain_block(code);
    };

    let syntax = ss
        .find_syntax_by_token(lang.syntax_token())
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|err| {
        log::warn!("[markdown] highlighting failed: {err}");
        plain_block(code)
    })
}

fn plain_block(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

/// Parse markdown with fenced code highlighting
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

enum State {
    Normal,
    InCodeBlock { lang: CodeLang, content: String },
}

/// Replace code block events with highlighted HTML
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => CodeLang::from_fence(&info),
                        CodeBlockKind::Indented => CodeLang::Text,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },

            State::InCodeBlock { lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang);
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_strong_without_paragraph() {
        let html = parse_markdown_inline("**State ist lokal:** Jede Komponente hat ihren eigenen State");
        assert_eq!(html, "<strong>State ist lokal:</strong> Jede Komponente hat ihren eigenen State");
    }

    #[test]
    fn test_inline_escapes_angle_brackets() {
        let html = parse_markdown_inline("Mit `<string[]>` den Typ definieren");
        assert!(html.contains("<code>&lt;string[]&gt;</code>"));
    }

    #[test]
    fn test_fenced_block_is_highlighted() {
        let html = parse_markdown("Beispiel:\n\n```tsx\nconst x = 1\n```\n");
        assert!(html.contains("<p>Beispiel:</p>"));
        assert!(html.contains("<pre"));
        assert!(!html.contains("<code class=\"language-tsx\">"));
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let html = highlight_code("a < b && <div>", CodeLang::Text);
        assert!(html.starts_with("<pre"));
        assert!(html.contains("&lt;div&gt;"));
        assert!(!html.contains("<div>"));
    }

    #[test]
    fn test_highlight_keeps_source_text() {
        let html = highlight_code(".container {\n  display: flex;\n}\n", CodeLang::Css);
        assert!(html.contains("display"));
        assert!(html.contains("flex"));
    }

    #[test]
    fn test_fence_languages() {
        assert_eq!(CodeLang::from_fence("TSX"), CodeLang::Tsx);
        assert_eq!(CodeLang::from_fence(" bash "), CodeLang::Shell);
        assert_eq!(CodeLang::from_fence(""), CodeLang::Text);
    }

    #[test]
    fn test_plain_block_escapes() {
        assert_eq!(plain_block("<a href=\"x\">"), "<pre><code>&lt;a href=&quot;x&quot;&gt;</code></pre>");
    }
}
