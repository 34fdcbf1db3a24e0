//! Escaping utilities for safe document generation.
//!
//! SBOM data comes from external sources and may contain HTML entities that
//! could inject scripts, Markdown syntax that breaks table formatting, or
//! control characters that disrupt rendering. All document-controlled data is
//! escaped before embedding in HTML or Markdown output.

/// Escape a string for safe inclusion in HTML content.
///
/// Escapes the following characters:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
///
/// # Examples
///
/// ```
/// use sbom_doc::builder::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("safe text"), "safe text");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in a Markdown table cell.
///
/// Markdown tables use `|` as column separators and can be broken by
/// unescaped pipe characters, newlines and backticks.
///
/// # Examples
///
/// ```
/// use sbom_doc::builder::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_xss_vectors() {
        assert_eq!(
            escape_html("<img src=x onerror=alert(1)>"),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
        assert!(!escape_html("<script>").contains('<'));
    }

    #[test]
    fn test_escape_markdown_table_pipes() {
        assert_eq!(escape_markdown_table("MIT | Apache-2.0"), "MIT \\| Apache-2.0");
        assert_eq!(escape_markdown_table("plain"), "plain");
    }

    #[test]
    fn test_escape_markdown_table_newlines() {
        assert_eq!(escape_markdown_table("a\nb"), "a b");
        assert_eq!(escape_markdown_table("a\r\nb"), "a b");
    }

    #[test]
    fn test_escape_preserves_unicode() {
        assert_eq!(escape_html("naïve café"), "naïve café");
        assert_eq!(escape_markdown_table("naïve café"), "naïve café");
    }
}
