//! Inline text formatting.
//!
//! One inline construct is supported: backtick-delimited code spans.
//! The line is HTML-escaped first, so anything inside a span is already
//! entity-encoded by the time it lands in the `<code>` element.

use memchr::memchr;

use super::escape::escape_html;

/// Escape a line of text and apply inline code-span formatting.
///
/// A span is the shortest run between two backticks with at least one
/// character inside. Unmatched and adjacent backticks stay literal, but
/// the second backtick of an empty pair may still open a later span.
///
/// # Examples
///
/// ```
/// use mdsite::markdown::format_inline;
///
/// assert_eq!(format_inline("run `cargo build`"), "run <code>cargo build</code>");
/// assert_eq!(format_inline("a < `b`"), "a &lt; <code>b</code>");
/// assert_eq!(format_inline("stray ` backtick"), "stray ` backtick");
/// ```
pub fn format_inline(line: &str) -> String {
    let escaped = escape_html(line);
    let bytes = escaped.as_bytes();
    let mut out = String::with_capacity(escaped.len());
    let mut i = 0;

    while i < bytes.len() {
        let Some(open) = memchr(b'`', &bytes[i..]).map(|pos| i + pos) else {
            out.push_str(&escaped[i..]);
            break;
        };
        out.push_str(&escaped[i..open]);

        match memchr(b'`', &bytes[open + 1..]).map(|pos| open + 1 + pos) {
            Some(close) if close > open + 1 => {
                out.push_str("<code>");
                out.push_str(&escaped[open + 1..close]);
                out.push_str("</code>");
                i = close + 1;
            }
            Some(_) => {
                // Empty pair: the first backtick is literal, the second
                // may still pair with a later one.
                out.push('`');
                i = open + 1;
            }
            None => {
                out.push_str(&escaped[open..]);
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_span() {
        assert_eq!(format_inline("use `code` here"), "use <code>code</code> here");
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(format_inline("`a` and `b`"), "<code>a</code> and <code>b</code>");
    }

    #[test]
    fn test_unmatched_backtick_is_literal() {
        assert_eq!(format_inline("one ` alone"), "one ` alone");
    }

    #[test]
    fn test_adjacent_backticks_are_literal() {
        assert_eq!(format_inline("a``b"), "a``b");
    }

    #[test]
    fn test_second_of_empty_pair_can_open_span() {
        // The second backtick of `` pairs with the next one.
        assert_eq!(format_inline("a `` b `c`"), "a `<code> b </code>c`");
    }

    #[test]
    fn test_escaping_happens_before_span_detection() {
        assert_eq!(
            format_inline("`<script>`"),
            "<code>&lt;script&gt;</code>"
        );
    }

    #[test]
    fn test_no_nesting() {
        // Three backticks: first pair forms a span, third stays literal.
        assert_eq!(format_inline("`a`b`"), "<code>a</code>b`");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(format_inline(""), "");
    }

    proptest! {
        #[test]
        fn prop_backtick_free_input_is_just_escaped(s in "[^`]*") {
            prop_assert_eq!(format_inline(&s), escape_html(&s));
        }

        #[test]
        fn prop_output_never_contains_raw_quotes(s in ".*") {
            let out = format_inline(&s);
            prop_assert!(!out.contains('"'));
            prop_assert!(!out.contains('\''));
        }
    }
}
