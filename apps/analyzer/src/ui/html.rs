//! Small helpers for building HTML strings.

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `body` in a card with an optional section header.
pub fn card(header: Option<&str>, body: &str) -> String {
    match header {
        Some(header) => format!(
            "<div class='card'><p class='section-header'>{header}</p>{body}</div>"
        ),
        None => format!("<div class='card'>{body}</div>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text_and_unicode() {
        assert_eq!(escape("C++ / Rust ✓"), "C++ / Rust ✓");
    }

    #[test]
    fn test_card_with_and_without_header() {
        assert_eq!(card(None, "x"), "<div class='card'>x</div>");
        assert!(card(Some("Title"), "x").contains("<p class='section-header'>Title</p>"));
    }
}
