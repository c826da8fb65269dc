//! Error types for mdsite operations.

use thiserror::Error;

/// Errors that can occur while building the documentation tree.
///
/// Rendering itself is total: any document text produces some HTML.
/// Failures only arise in the I/O layer (reading sources, writing pages)
/// and when explicitly parsing a sidebar descriptor.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid sidebar config: {0}")]
    SidebarConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
