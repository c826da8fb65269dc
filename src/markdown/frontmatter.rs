//! Frontmatter extraction.
//!
//! Documents may begin with a small `---`-delimited key/value header:
//!
//! ```text
//! ---
//! title: "Getting Started"
//! sidebar_label: Start
//! ---
//! body...
//! ```
//!
//! Malformed headers are never an error: a document that does not start
//! with `---`, or whose header is never terminated, is treated as having
//! no frontmatter at all and the full text becomes the body.

use memchr::memmem;

/// Recognized frontmatter keys. Unrecognized keys are parsed and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    /// Page title, used in the document `<title>`.
    pub title: Option<String>,
    /// Short label for sidebar navigation.
    pub sidebar_label: Option<String>,
}

/// Split a raw document into its frontmatter and body.
///
/// The body is returned as a subslice of the input; no copying happens
/// until individual values are retained.
///
/// # Examples
///
/// ```
/// use mdsite::markdown::extract_frontmatter;
///
/// let (fm, body) = extract_frontmatter("---\ntitle: Hello\n---\nBody text");
/// assert_eq!(fm.title.as_deref(), Some("Hello"));
/// assert_eq!(body, "\nBody text");
/// ```
pub fn extract_frontmatter(text: &str) -> (Frontmatter, &str) {
    if !text.starts_with("---") {
        return (Frontmatter::default(), text);
    }

    // Header ends at the first "\n---" at or after the opening marker.
    let Some(end) = memmem::find(&text.as_bytes()[3..], b"\n---").map(|pos| pos + 3) else {
        return (Frontmatter::default(), text);
    };

    let header = text[3..end].trim();
    let body = &text[end + 4..];

    let mut frontmatter = Frontmatter::default();
    for line in header.split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = unquote(value.trim());
        match key.trim() {
            "title" => frontmatter.title = Some(value.to_string()),
            "sidebar_label" => frontmatter.sidebar_label = Some(value.to_string()),
            _ => {}
        }
    }

    (frontmatter, body)
}

/// Strip one leading and one trailing double-quote when both are present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
