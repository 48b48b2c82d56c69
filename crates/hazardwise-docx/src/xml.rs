//! XML text helpers.

pub(crate) const DECLARATION: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>";

/// Escape text for element content or attribute values.
///
/// Characters that XML 1.0 cannot carry at all (most C0 controls, U+FFFE,
/// U+FFFF) are dropped.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            '\t' | '\n' | '\r' => result.push(c),
            c if is_forbidden(c) => {}
            _ => result.push(c),
        }
    }
    result
}

fn is_forbidden(c: char) -> bool {
    (c as u32) < 0x20 || c == '\u{FFFE}' || c == '\u{FFFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            xml_escape(r#"A & B < C > "D" 'E'"#),
            "A &amp; B &lt; C &gt; &quot;D&quot; &apos;E&apos;"
        );
    }

    #[test]
    fn test_escape_passes_unicode() {
        assert_eq!(xml_escape("Café – naïve ✓"), "Café – naïve ✓");
    }

    #[test]
    fn test_escape_drops_control_characters() {
        assert_eq!(xml_escape("a\u{0}b\u{1B}c\td"), "abc\td");
        assert_eq!(xml_escape("x\u{FFFF}y"), "xy");
    }
}
