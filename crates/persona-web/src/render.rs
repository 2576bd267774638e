//! Markdown presentation of generated text.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render Markdown to HTML.
///
/// Raw HTML in the input is emitted as escaped text, never as markup.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_and_bullets() {
        let out = render_markdown("## Hermione (ISTJ)\n\n- Studies constantly\n- Follows rules\n");
        assert!(out.contains("<h2>Hermione (ISTJ)</h2>"));
        assert!(out.contains("<li>Studies constantly</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render_markdown("hi <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_fenced_block_becomes_code() {
        let out = render_markdown("```xml\n<title>x</title>\n```");
        assert!(out.contains("<pre><code class=\"language-xml\">"));
        assert!(out.contains("&lt;title&gt;x&lt;/title&gt;"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let text = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert_eq!(render_markdown(text), render_markdown(text));
        assert!(render_markdown(text).contains("<table>"));
    }
}
