//! Build orchestration: the I/O layer of the generator.
//!
//! Walks a docs root for Markdown sources, renders each one through the
//! pure pipeline (frontmatter → body → fragment → page shell), and
//! writes the resulting HTML next to the source (or into a separate
//! output tree). A failure on one file is reported and counted but does
//! not abort the rest of the build.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::markdown::{extract_frontmatter, render_markdown};
use crate::page::render_page;
use crate::sidebar::{SidebarConfig, empty_sidebar, render_sidebar};

/// Options for one documentation build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory containing Markdown sources and the optional
    /// `sidebar.json` descriptor.
    pub docs_root: PathBuf,
    /// Output root; defaults to the docs root itself.
    pub out_root: Option<PathBuf>,
    /// Site name used in page titles and the sidebar header.
    pub site_name: String,
    /// Suppress progress messages.
    pub quiet: bool,
}

impl BuildOptions {
    /// Create options with defaults for the given docs root.
    pub fn new(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            out_root: None,
            site_name: "Docs".to_string(),
            quiet: false,
        }
    }

    /// Write generated pages under a separate output tree.
    pub fn with_out_root(mut self, out_root: impl Into<PathBuf>) -> Self {
        self.out_root = Some(out_root.into());
        self
    }

    /// Set the site name used in titles and the sidebar header.
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    /// Suppress progress output.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Outcome of a build: pages written and per-file failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub written: usize,
    pub failed: usize,
}

/// Recursively collect Markdown files under `root`.
///
/// `node_modules` directories are skipped; unreadable entries are
/// silently dropped rather than failing the walk.
pub fn find_markdown_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != "node_modules")
        .filter_map(|entry| entry.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect()
}

/// Render every Markdown source under the docs root to an HTML page.
pub fn build_docs(options: &BuildOptions) -> Result<BuildSummary> {
    let docs_root = &options.docs_root;
    let out_root = options.out_root.as_deref().unwrap_or(docs_root);

    // Sidebar config is optional; a missing or malformed descriptor just
    // means pages get an empty sidebar.
    let sidebar = SidebarConfig::load(&docs_root.join("sidebar.json")).ok();

    let files = find_markdown_files(docs_root);
    if files.is_empty() {
        if !options.quiet {
            println!("[docs] no markdown docs found, skipping generation");
        }
        return Ok(BuildSummary::default());
    }

    if !options.quiet {
        println!("[docs] generating HTML docs from markdown...");
    }

    let mut summary = BuildSummary::default();
    for file in &files {
        let rel = file.strip_prefix(docs_root).unwrap_or(file.as_path());
        match build_page(file, rel, out_root, sidebar.as_ref(), &options.site_name) {
            Ok(out_path) => {
                summary.written += 1;
                if !options.quiet {
                    println!("[docs] wrote {}", out_path.display());
                }
            }
            Err(e) => {
                summary.failed += 1;
                eprintln!("[docs] {}: {e}", file.display());
            }
        }
    }

    Ok(summary)
}

/// Render one source file and write the page. Returns the output path.
fn build_page(
    file: &Path,
    rel: &Path,
    out_root: &Path,
    sidebar: Option<&SidebarConfig>,
    site_name: &str,
) -> Result<PathBuf> {
    let url_path = url_path(rel);
    let href = format!("/docs/{url_path}");

    let raw = fs::read_to_string(file)?;
    let (frontmatter, body) = extract_frontmatter(&raw);
    let content = render_markdown(body);

    let title = frontmatter
        .title
        .unwrap_or_else(|| page_fallback_title(&url_path));

    let sidebar_html = match sidebar {
        Some(config) => render_sidebar(config, site_name, &href),
        None => empty_sidebar(),
    };

    let html = render_page(&title, site_name, &sidebar_html, &content);

    let out_path = out_root.join(rel).with_extension("html");
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, html)?;

    Ok(out_path)
}

/// Doc-relative URL path: forward slashes, `.md` extension stripped.
fn url_path(rel: &Path) -> String {
    let stripped = rel.with_extension("");
    let segments: Vec<String> = stripped
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    segments.join("/")
}

/// Title used when frontmatter declares none: the last URL segment.
fn page_fallback_title(url_path: &str) -> String {
    url_path
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("Docs")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_path_strips_extension_and_uses_slashes() {
        assert_eq!(url_path(Path::new("guide/install.md")), "guide/install");
        assert_eq!(url_path(Path::new("index.md")), "index");
    }

    #[test]
    fn test_fallback_title_is_last_segment() {
        assert_eq!(page_fallback_title("guide/install"), "install");
        assert_eq!(page_fallback_title("index"), "index");
        assert_eq!(page_fallback_title(""), "Docs");
    }
}
