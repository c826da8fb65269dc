//! # mdsite
//!
//! A fast, lightweight static documentation generator: converts a
//! directory of Markdown sources into styled, self-contained HTML pages.
//!
//! ## Features
//!
//! - Small, line-oriented Markdown subset: headings, fenced code blocks,
//!   flat unordered lists, blockquote callouts, paragraphs, inline code
//! - `---`-delimited frontmatter (`title`, `sidebar_label`)
//! - Optional sidebar navigation driven by a `sidebar.json` descriptor
//! - Total rendering: malformed source degrades to best-effort HTML,
//!   never an error
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdsite::{BuildOptions, build_docs};
//!
//! // Render docs/**/*.md into self-contained HTML pages
//! let options = BuildOptions::new("docs").with_site_name("MyProject");
//! let summary = build_docs(&options).unwrap();
//! println!("wrote {} pages", summary.written);
//! ```
//!
//! ## Rendering Without I/O
//!
//! The pipeline stages are plain string functions and can be used
//! directly:
//!
//! ```
//! use mdsite::{extract_frontmatter, render_markdown};
//!
//! let (fm, body) = extract_frontmatter("---\ntitle: Hi\n---\n# Hi\n\nUse `mdsite`.");
//! assert_eq!(fm.title.as_deref(), Some("Hi"));
//! assert_eq!(
//!     render_markdown(body),
//!     "<h1>Hi</h1>\n<p>Use <code>mdsite</code>.</p>"
//! );
//! ```

pub mod build;
pub mod error;
pub mod markdown;
pub mod page;
pub mod sidebar;

pub use build::{BuildOptions, BuildSummary, build_docs, find_markdown_files};
pub use error::{Error, Result};
pub use markdown::{Frontmatter, extract_frontmatter, format_inline, render_markdown};
pub use page::render_page;
pub use sidebar::{SidebarConfig, render_sidebar};
