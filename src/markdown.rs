//! Product Description Markdown
//!
//! Vendors write descriptions in Markdown. Rendering is restricted:
//! - raw HTML is dropped
//! - links and images only keep http(s), relative or anchor targets
//! - tables and strikethrough are enabled

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render a description to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render for inline use (strips the outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// First paragraph as plain text, cut at `max_chars`
pub fn summary(text: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph) => break,
            _ => {}
        }
    }
    if out.chars().count() > max_chars {
        let cut: String = out.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    } else {
        out
    }
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut in_dropped_image = false;

    for event in parser {
        match event {
            Event::Html(_) | Event::InlineHtml(_) => {}

            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                let dest_url = if is_safe_url(&dest_url) { dest_url } else { CowStr::from("#") };
                events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
            }

            // Unsafe image: keep only its alt text
            Event::Start(Tag::Image { ref dest_url, .. }) if !is_safe_url(dest_url) => {
                in_dropped_image = true;
            }
            Event::End(TagEnd::Image) if in_dropped_image => {
                in_dropped_image = false;
            }

            other => events.push(other),
        }
    }

    events
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    match lower.split_once(':') {
        // No scheme, or a colon after the first path/query/fragment delimiter
        None => true,
        Some((scheme, _)) if scheme.contains(['/', '?', '#']) => true,
        Some((scheme, _)) => scheme == "http" || scheme == "https" || scheme == "mailto",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = parse_markdown("**Bold** and ~~gone~~\n\n- a\n- b");
        assert!(html.contains("<strong>Bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<li>a</li>"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = parse_markdown("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_raw_html_dropped() {
        let html = parse_markdown("Hi <script>alert(1)</script> there\n\n<div onclick=\"x\">block</div>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_unsafe_urls_neutralised() {
        let html = parse_markdown("[click](javascript:alert(1)) [ok](https://shop.test/a)");
        assert!(html.contains(r##"href="#""##));
        assert!(html.contains(r#"href="https://shop.test/a""#));

        let html = parse_markdown("![front view](data:image/png;base64,AAAA)");
        assert!(!html.contains("<img"));
        assert!(html.contains("front view"));
    }

    #[test]
    fn test_inline_and_summary() {
        assert_eq!(parse_markdown_inline("*hi*"), "<em>hi</em>");
        assert_eq!(summary("First **para** here.\n\nSecond.", 100), "First para here.");
        assert_eq!(summary("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn test_relative_urls_are_safe() {
        assert!(is_safe_url("/products/3"));
        assert!(is_safe_url("#specs"));
        assert!(is_safe_url("images/a:b.png"));
        assert!(!is_safe_url(" JavaScript:void(0)"));
    }
}
