//! mdsite - static Markdown documentation generator

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mdsite::{BuildOptions, build_docs};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version, about = "Static Markdown documentation generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdsite docs                  Render docs/**/*.md in place
    mdsite docs --out public     Render into a separate output tree
    mdsite docs --site-name Foo  Use \"Foo\" in titles and the sidebar")]
struct Cli {
    /// Directory containing Markdown sources (and optional sidebar.json)
    #[arg(value_name = "DOCS_ROOT", default_value = "docs")]
    docs_root: PathBuf,

    /// Output directory (defaults to the docs root)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Site name used in page titles and the sidebar header
    #[arg(long, value_name = "NAME", default_value = "Docs")]
    site_name: String,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = BuildOptions {
        docs_root: cli.docs_root,
        out_root: cli.out,
        site_name: cli.site_name,
        quiet: cli.quiet,
    };

    match build_docs(&options) {
        Ok(summary) if summary.failed > 0 => {
            eprintln!("error: {} page(s) failed to render", summary.failed);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
