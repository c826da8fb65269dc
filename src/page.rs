//! Page assembly: wraps a rendered fragment in the documentation shell.
//!
//! The shell is a self-contained HTML5 document with an embedded
//! stylesheet, so generated pages can be served as plain static files
//! with no asset pipeline.

use crate::markdown::escape_html;

/// Embedded stylesheet for generated pages.
const PAGE_STYLE: &str = r#"    :root {
      --primary: #06b6d4;
      --accent: #8b5cf6;
      --text: #f9fafb;
      --text-muted: #9ca3af;
      --bg: #09090b;
      --bg-secondary: #020617;
      --bg-tertiary: #111827;
      --border: rgba(148, 163, 184, 0.25);
    }

    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
      font-family: -apple-system, 'Segoe UI', sans-serif;
      background: var(--bg);
      color: var(--text);
      line-height: 1.7;
    }

    .docs-layout {
      display: flex;
      min-height: 100vh;
    }

    .sidebar {
      width: 280px;
      background: var(--bg-secondary);
      border-right: 1px solid var(--border);
      padding: 1.5rem;
      position: fixed;
      height: 100vh;
      overflow-y: auto;
    }

    .sidebar-logo {
      display: flex;
      align-items: center;
      gap: 0.75rem;
      margin-bottom: 1.5rem;
      text-decoration: none;
      color: var(--text);
      font-weight: 600;
      letter-spacing: -0.03em;
    }

    .sidebar-section {
      margin-bottom: 1.5rem;
    }

    .sidebar-section h3 {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.16em;
      color: var(--text-muted);
      margin-bottom: 0.5rem;
    }

    .sidebar-section ul { list-style: none; }

    .sidebar-section a {
      display: block;
      padding: 0.45rem 0.75rem;
      color: var(--text-muted);
      border-radius: 6px;
      font-size: 0.9rem;
      text-decoration: none;
      transition: all 0.2s;
    }

    .sidebar-section a:hover {
      background: var(--bg-tertiary);
      color: var(--text);
    }

    .sidebar-section a.active {
      background: rgba(50, 108, 229, 0.15);
      color: var(--primary);
    }

    .docs-content {
      flex: 1;
      margin-left: 280px;
      padding: 3rem 3rem;
      max-width: 960px;
    }

    .prose h1 {
      font-size: 2.1rem;
      font-weight: 600;
      margin-bottom: 0.75rem;
      letter-spacing: -0.03em;
    }

    .prose h2 {
      font-size: 1.4rem;
      font-weight: 600;
      margin: 2rem 0 0.75rem;
      padding-bottom: 0.35rem;
      border-bottom: 1px solid var(--border);
    }

    .prose h3 {
      font-size: 1.1rem;
      font-weight: 600;
      margin: 1.5rem 0 0.5rem;
    }

    .prose p {
      color: var(--text-muted);
      margin-bottom: 0.9rem;
    }

    .prose ul {
      color: var(--text-muted);
      margin: 0.75rem 0 0.9rem 1.5rem;
    }

    .prose li { margin-bottom: 0.4rem; }

    .prose code {
      font-family: ui-monospace, 'JetBrains Mono', monospace;
      font-size: 0.85rem;
      background: var(--bg-tertiary);
      padding: 0.15rem 0.35rem;
      border-radius: 4px;
      color: var(--accent);
    }

    .prose pre {
      background: rgba(0, 0, 0, 0.6);
      border: 1px solid rgba(255, 255, 255, 0.1);
      border-radius: 0.75rem;
      padding: 1rem 1.25rem;
      overflow-x: auto;
      margin: 1rem 0 1.25rem;
      font-family: ui-monospace, 'JetBrains Mono', monospace;
      font-size: 0.85rem;
    }

    .callout {
      border-radius: 0.75rem;
      border: 1px solid rgba(148, 163, 184, 0.35);
      padding: 0.9rem 1rem;
      background: rgba(15, 23, 42, 0.9);
      margin: 1.25rem 0;
    }

    @media (max-width: 900px) {
      .sidebar { display: none; }
      .docs-content { margin-left: 0; padding: 2rem 1.5rem; }
    }"#;

/// Assemble a complete HTML document from a rendered fragment.
///
/// `content_html` is embedded verbatim; it must already be safe markup
/// (the output of [`crate::markdown::render_markdown`]). The title and
/// site name are escaped here.
pub fn render_page(title: &str, site_name: &str, sidebar_html: &str, content_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - {site_name} Documentation</title>
  <style>
{style}
  </style>
</head>
<body>
  <div class="docs-layout">
    {sidebar}
    <main class="docs-content">
      <article class="prose">
{content}
      </article>
    </main>
  </div>
</body>
</html>"#,
        title = escape_html(title),
        site_name = escape_html(site_name),
        style = PAGE_STYLE,
        sidebar = sidebar_html,
        content = content_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_site_name_escaped() {
        let html = render_page("A & B", "<Site>", "", "");
        assert!(html.contains("<title>A &amp; B - &lt;Site&gt; Documentation</title>"));
    }

    #[test]
    fn test_content_embedded_verbatim() {
        let html = render_page("t", "s", "", "<p>already rendered</p>");
        assert!(html.contains("<p>already rendered</p>"));
    }

    #[test]
    fn test_sidebar_embedded_verbatim() {
        let html = render_page("t", "s", "<aside class=\"sidebar\"></aside>", "");
        assert!(html.contains("<aside class=\"sidebar\"></aside>"));
    }

    #[test]
    fn test_shell_structure() {
        let html = render_page("t", "s", "", "");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<article class=\"prose\">"));
        assert!(html.contains(".callout {"));
        assert!(html.ends_with("</html>"));
    }
}
