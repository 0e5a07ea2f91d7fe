//! Leading comment header extraction.
//!
//! Plugin configuration files open with a banner of comments that the
//! structured tree cannot hold. The header is everything before the first
//! top-level key line; it is kept as an opaque string and prefixed back on
//! serialization.

use once_cell::sync::Lazy;
use regex::Regex;

/// A top-level key: a bare word (hyphens and dots allowed) or a quoted key at
/// column 0, followed by a colon and whitespace or end of line.
static TOP_LEVEL_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\x{FEFF}?(?:[\w-][\w.-]*|"[^"\n]*"|'[^'\n]*')[ \t]*:(?:[ \t\r]|$)"#)
        .expect("valid top-level key pattern")
});

/// Extract the header of a YAML source.
///
/// Returns the longest prefix that ends right before the first top-level key
/// line. Blank lines and comment lines are included verbatim. If no key line
/// exists, the whole text is the header.
///
/// # Example
///
/// ```rust
/// use craftconf_yaml::extract_header;
///
/// let source = "# DeluxeMenus main configuration\n\ndebug: HIGHEST\n";
/// assert_eq!(extract_header(source), "# DeluxeMenus main configuration\n\n");
/// ```
pub fn extract_header(source: &str) -> &str {
    match TOP_LEVEL_KEY.find(source) {
        Some(m) => &source[..m.start()],
        None => source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_stops_at_first_key() {
        let source = "###\n## Banner ##\n###\n\n# Explanation: with colon\ngive-item-name: x\nother: y\n";
        assert_eq!(
            extract_header(source),
            "###\n## Banner ##\n###\n\n# Explanation: with colon\n"
        );
    }

    #[test]
    fn test_no_header() {
        assert_eq!(extract_header("debug: HIGHEST\n"), "");
    }

    #[test]
    fn test_indented_keys_do_not_end_the_header() {
        let source = "# top\n  # indented comment\n  nested: no\nroot: yes\n";
        assert_eq!(extract_header(source), "# top\n  # indented comment\n  nested: no\n");
    }

    #[test]
    fn test_key_without_value_on_same_line() {
        let source = "# header\ngui_menus:\n  a: b\n";
        assert_eq!(extract_header(source), "# header\n");
    }

    #[test]
    fn test_quoted_key() {
        let source = "# header\n'1': one\n";
        assert_eq!(extract_header(source), "# header\n");
    }

    #[test]
    fn test_whole_text_when_no_key() {
        let source = "# just comments\n\n# nothing else\n";
        assert_eq!(extract_header(source), source);
        assert_eq!(extract_header(""), "");
    }

    #[test]
    fn test_colon_inside_word_is_not_a_key() {
        let source = "# header\nurl:http\nkey: value\n";
        assert_eq!(extract_header(source), "# header\nurl:http\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let source = "# header\r\nkey:\r\n  a: 1\r\n";
        assert_eq!(extract_header(source), "# header\r\n");
    }
}
