//! Sidebar navigation rendering.
//!
//! The sidebar is described by an optional `sidebar.json` in the docs
//! root: an ordered list of groups, each holding an ordered list of
//! links. A missing or unparsable descriptor is not an error; pages are
//! then rendered with an empty sidebar shell.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::markdown::escape_html;

/// Top-level sidebar descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarConfig {
    pub groups: Vec<SidebarGroup>,
}

/// A titled group of navigation links.
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarGroup {
    pub id: String,
    pub label: String,
    pub items: Vec<SidebarItem>,
}

/// One navigation link.
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarItem {
    pub id: String,
    pub label: String,
    pub href: String,
}

impl SidebarConfig {
    /// Load a sidebar descriptor from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Render the sidebar for one page.
///
/// The item whose `href` equals `current_href` is marked active. Labels
/// and hrefs are escaped; the descriptor is data, not markup.
pub fn render_sidebar(config: &SidebarConfig, site_name: &str, current_href: &str) -> String {
    let mut groups_html = Vec::with_capacity(config.groups.len());

    for group in &config.groups {
        let items: String = group
            .items
            .iter()
            .map(|item| {
                let active = if item.href == current_href {
                    " class=\"active\""
                } else {
                    ""
                };
                format!(
                    "<li><a href=\"{}\"{}>{}</a></li>",
                    escape_html(&item.href),
                    active,
                    escape_html(&item.label)
                )
            })
            .collect();

        groups_html.push(format!(
            "<div class=\"sidebar-section\"><h3>{}</h3><ul>{}</ul></div>",
            escape_html(&group.label),
            items
        ));
    }

    format!(
        "<aside class=\"sidebar\">\n  <a href=\"/\" class=\"sidebar-logo\">{}</a>\n  {}\n</aside>",
        escape_html(site_name),
        groups_html.join("\n  ")
    )
}

/// Sidebar shell used when no descriptor is configured.
pub fn empty_sidebar() -> String {
    "<aside class=\"sidebar\"></aside>".to_string()
}
