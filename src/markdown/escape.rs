//! Pure HTML escaping utilities.

/// Escape the five HTML-sensitive characters in text.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity forms. The
/// single-pass scan never re-examines emitted entities, so ampersands
/// produced by the substitution are not double-escaped.
///
/// # Examples
///
/// ```
/// use mdsite::markdown::escape_html;
///
/// assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
