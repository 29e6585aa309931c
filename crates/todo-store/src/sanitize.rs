//! Text Sanitization
//!
//! Free text is escaped once, on the way into the store, so it can be
//! injected into the page as markup and still render literally.

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverse `escape_html`, for showing stored text in a plain-text prompt
pub fn unescape_html(text: &str) -> String {
    const ENTITIES: &[(&str, char)] = &[
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
    ];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        for (entity, ch) in ENTITIES {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(*ch);
                rest = tail;
                continue 'scan;
            }
        }
        // Not one of ours, keep the ampersand as-is
        out.push('&');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

/// Trim and escape user input. `None` when nothing is left after trimming.
pub fn sanitize_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(escape_html(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_script_tag() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert_eq!(escaped, "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
        assert!(!escaped.contains('<'));
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_unescape_leaves_unknown_entities() {
        assert_eq!(unescape_html("&copy; &amp; &"), "&copy; & &");
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_sanitize_input_trims() {
        assert_eq!(sanitize_input("  Buy milk \n"), Some("Buy milk".to_string()));
        assert_eq!(sanitize_input(""), None);
        assert_eq!(sanitize_input(" \t "), None);
    }

    proptest! {
        #[test]
        fn escaped_text_has_no_markup(input in any::<String>()) {
            let escaped = escape_html(&input);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }

        #[test]
        fn unescape_inverts_escape(input in any::<String>()) {
            prop_assert_eq!(unescape_html(&escape_html(&input)), input);
        }
    }
}
