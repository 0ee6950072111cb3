//! Draft Markdown Rendering
//!
//! Renders generated drafts with pulldown-cmark:
//! - Raw HTML from the model is shown as text, never injected
//! - Links open in a new tab; only http(s) and mailto targets stay clickable
//! - Images collapse to their alt text

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown into HTML safe for `inner_html`
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // One entry per open link: whether an <a> was emitted for it
    let mut link_stack: Vec<bool> = Vec::new();

    for event in parser {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

            Event::Start(Tag::Link { dest_url, title, .. }) => {
                if is_safe_url(&dest_url) {
                    let mut html = format!(
                        r#"<a href="{}" target="_blank" rel="noreferrer noopener""#,
                        escape_html(&dest_url)
                    );
                    if !title.is_empty() {
                        html.push_str(&format!(r#" title="{}""#, escape_html(&title)));
                    }
                    html.push('>');
                    events.push(Event::Html(CowStr::from(html)));
                    link_stack.push(true);
                } else {
                    link_stack.push(false);
                }
            }
            Event::End(TagEnd::Link) => {
                if link_stack.pop().unwrap_or(false) {
                    events.push(Event::Html(CowStr::from("</a>")));
                }
            }

            // Alt text arrives as ordinary Text events between these two
            Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => {}

            other => events.push(other),
        }
    }

    events
}

/// Whether `url` may become a clickable link
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
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
    fn test_heading_and_paragraph() {
        let html = parse_markdown("## Quick idea\n\nHi **there**");
        assert!(html.contains("<h2>Quick idea</h2>"));
        assert!(html.contains("<strong>there</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("Hello <script>alert(1)</script>\n\n<div onclick=\"x\">block</div>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = parse_markdown("[our site](https://example.com?a=1&b=2)");
        assert!(html.contains(r#"<a href="https://example.com?a=1&amp;b=2" target="_blank""#));
        assert!(html.contains("our site</a>"));
    }

    #[test]
    fn test_unsafe_link_keeps_text_only() {
        let html = parse_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("<a"));
        assert!(html.contains("click"));
    }

    #[test]
    fn test_image_becomes_alt_text() {
        let html = parse_markdown("![logo](https://example.com/logo.png)");
        assert!(!html.contains("<img"));
        assert!(html.contains("logo"));
    }

    #[test]
    fn test_safe_url_schemes() {
        assert!(is_safe_url("https://example.com/news"));
        assert!(is_safe_url(" HTTP://example.com"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html,hi"));
        assert!(!is_safe_url(""));
    }
}
