//! DOT string escaping.

/// Escapes a string for use inside a double-quoted DOT identifier or label.
///
/// Backslashes and quotes are escaped, line feeds become the DOT `\n` centered line break and
/// carriage returns are dropped.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::escape_dot;
///
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot_plain() {
        assert_eq!(escape_dot("tmp#3"), "tmp#3");
        assert_eq!(escape_dot(""), "");
    }

    #[test]
    fn test_escape_dot_quotes_and_backslashes() {
        assert_eq!(escape_dot("say \"hello\""), "say \\\"hello\\\"");
        assert_eq!(escape_dot("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_dot_newlines() {
        assert_eq!(escape_dot("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn test_escape_dot_keeps_generics() {
        assert_eq!(
            escape_dot("valueflow::add<i64>"),
            "valueflow::add<i64>"
        );
    }
}
