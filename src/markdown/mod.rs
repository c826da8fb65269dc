//! Markdown → HTML rendering for documentation pages.
//!
//! This module is the pure core of the generator. The design separates
//! pure string transformation from I/O:
//!
//! - [`escape`]: HTML entity escaping, used by every other stage
//! - [`frontmatter`]: `---`-delimited header extraction
//! - [`inline`]: per-line escaping plus backtick code spans
//! - [`render`]: the block-level state machine
//!
//! The build layer ([`crate::build`]) handles I/O orchestration, calling
//! these pure functions to generate page content.
//!
//! ## Design Notes
//!
//! The supported grammar is a deliberately small Markdown subset, not
//! CommonMark:
//!
//! - **Line-oriented classification**: each line is classified into a
//!   block type in a fixed priority order (fence, blank, heading,
//!   blockquote, list item, paragraph)
//! - **Flush-before-transition**: at most one block buffer is active
//!   between lines; every block-type change drains the previous buffer
//!   into the output first
//! - **Escape-then-format**: inline formatting runs on already-escaped
//!   text, so code spans can never smuggle raw markup into the output
//! - **Total over any input**: malformed source degrades to best-effort
//!   HTML rather than an error; documentation source is trusted

mod escape;
mod frontmatter;
mod inline;
mod render;

pub use escape::escape_html;
pub use frontmatter::{Frontmatter, extract_frontmatter};
pub use inline::format_inline;
pub use render::render_markdown;
