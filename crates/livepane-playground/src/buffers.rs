//! The three source buffers.

use livepane_common::Language;
use livepane_config::schema::SnippetsConfig;

/// HTML, CSS, and JS text, each written only by its editor pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffers {
    html: String,
    css: String,
    js: String,
}

impl SourceBuffers {
    pub fn new(html: impl Into<String>, css: impl Into<String>, js: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            js: js.into(),
        }
    }

    pub fn from_snippets(snippets: &SnippetsConfig) -> Self {
        Self::new(&snippets.html, &snippets.css, &snippets.js)
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Html => &self.html,
            Language::Css => &self.css,
            Language::Js => &self.js,
        }
    }

    /// Overwrite a buffer with the editor's full new content.
    pub fn set(&mut self, language: Language, content: impl Into<String>) {
        let slot = match language {
            Language::Html => &mut self.html,
            Language::Css => &mut self.css,
            Language::Js => &mut self.js,
        };
        *slot = content.into();
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn js(&self) -> &str {
        &self.js
    }
}

impl Default for SourceBuffers {
    fn default() -> Self {
        Self::from_snippets(&SnippetsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_starter_snippets() {
        let buffers = SourceBuffers::default();
        assert_eq!(buffers.html(), "<h1>Hello World!</h1>");
        assert_eq!(buffers.css(), "h1 { color: blue; }");
        assert_eq!(buffers.js(), "console.log(\"JavaScript is running\");");
    }

    #[test]
    fn set_overwrites_only_target() {
        let mut buffers = SourceBuffers::default();
        buffers.set(Language::Css, "body { margin: 0 }");
        assert_eq!(buffers.get(Language::Css), "body { margin: 0 }");
        assert_eq!(buffers.get(Language::Html), "<h1>Hello World!</h1>");
    }

    #[test]
    fn set_accepts_empty_content() {
        let mut buffers = SourceBuffers::default();
        buffers.set(Language::Js, "");
        assert_eq!(buffers.js(), "");
    }
}
