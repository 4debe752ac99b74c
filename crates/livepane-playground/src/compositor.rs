//! Composite document assembly.
//!
//! Output layout:
//! `<html><head><style>{css}</style></head><body>{html}<script>{js}</script></body></html>`
//!
//! Nothing is sanitized. The only rewrites keep each fragment inside its
//! element: `</style` inside CSS, and inside JS every sequence that moves
//! the HTML tokenizer out of plain script data (`<!--`, `<script`,
//! `</script`). Each gets a backslash after the `<`, which JS string
//! literals read as the same text.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(!--|/?script)").unwrap());

static STYLE_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</(style)").unwrap());

/// Combine the three buffers into one self-contained HTML document.
pub fn composite(html: &str, css: &str, js: &str) -> String {
    let css = STYLE_CLOSE_RE.replace_all(css, r"<\/$1");
    let js = SCRIPT_MARKUP_RE.replace_all(js, r"<\$1");

    let mut doc = String::with_capacity(html.len() + css.len() + js.len() + 80);
    doc.push_str("<html><head><style>");
    doc.push_str(&css);
    doc.push_str("</style></head><body>");
    doc.push_str(html);
    doc.push_str("<script>");
    doc.push_str(&js);
    doc.push_str("</script></body></html>");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_structure_for_defaults() {
        let doc = composite(
            "<h1>Hello World!</h1>",
            "h1 { color: blue; }",
            "console.log(\"JavaScript is running\");",
        );
        assert_eq!(
            doc,
            "<html><head><style>h1 { color: blue; }</style></head>\
             <body><h1>Hello World!</h1>\
             <script>console.log(\"JavaScript is running\");</script></body></html>"
        );
    }

    #[test]
    fn special_characters_pass_through_verbatim() {
        let html = "<div class=\"a&b\">caf\u{e9} \u{1f600} &amp; <b>bold</b></div>";
        let css = "a::after { content: \"<>&'\\\"\"; }";
        let js = "const s = '<div>' + \"&\" + `${1 < 2}`; if (a && b) {}";
        let doc = composite(html, css, js);
        assert!(doc.contains(&format!("<style>{css}</style>")));
        assert!(doc.contains(&format!("<body>{html}<script>")));
        assert!(doc.contains(&format!("<script>{js}</script>")));
    }

    #[test]
    fn empty_buffers_still_form_a_document() {
        assert_eq!(
            composite("", "", ""),
            "<html><head><style></style></head><body><script></script></body></html>"
        );
    }

    #[test]
    fn is_deterministic() {
        let a = composite("<p>x</p>", "p{}", "let x = 1;");
        let b = composite("<p>x</p>", "p{}", "let x = 1;");
        assert_eq!(a, b);
    }

    #[test]
    fn closing_script_tag_in_js_is_neutralized() {
        let doc = composite("", "", "var s = '</script><img src=x>'; var t = '</SCRIPT>';");
        assert_eq!(doc.matches("</script>").count(), 1);
        assert!(doc.contains("'<\\/script><img src=x>'"));
        assert!(doc.contains("'<\\/SCRIPT>'"));
        assert!(doc.ends_with("</script></body></html>"));
    }

    #[test]
    fn comment_opener_in_js_cannot_swallow_the_closing_tag() {
        let js = "var m = \"<!--<script>\"; run();";
        let doc = composite("", "", js);
        assert_eq!(doc.matches("<script").count(), 1);
        assert_eq!(doc.matches("</script>").count(), 1);
        assert_eq!(doc.matches("<!--").count(), 0);
        assert!(doc.contains(r#"<script>var m = "<\!--<\script>"; run();</script>"#));
        assert!(doc.ends_with("</script></body></html>"));
    }

    #[test]
    fn opening_script_tag_in_js_is_neutralized_in_any_case() {
        let doc = composite("", "", "document.write('<SCRIPT src=a.js>');");
        assert_eq!(doc.to_lowercase().matches("<script").count(), 1);
        assert!(doc.contains(r"'<\SCRIPT src=a.js>'"));
    }

    #[test]
    fn closing_style_tag_in_css_is_neutralized() {
        let doc = composite("", "p{}</style><script>alert(1)</script>", "");
        assert_eq!(doc.matches("</style>").count(), 1);
        assert!(doc.starts_with("<html><head><style>p{}<\\/style><script>"));
    }

    #[test]
    fn html_is_never_rewritten() {
        let html = "<script>inline()</script><style>p{}</style>";
        let doc = composite(html, "", "");
        assert!(doc.contains(&format!("<body>{html}<script>")));
    }
}
