use crate::commands::tabs::load_fragments;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use handoff_artifact::{content, default_tab, merge, CustomCode, FragmentKind};
use handoff_common::RealFileSystem;
use handoff_export::{build_bundle, write_bundle};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Design-derived fragments (JSON)
    pub fragments: PathBuf,

    /// Component name used for file names (overrides fragments/config)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Treat TypeScript as available (prefer TSX over JSX)
    #[arg(long)]
    pub typescript: bool,

    /// File with custom JSX appended after the design JSX
    #[arg(long)]
    pub custom_jsx: Option<PathBuf>,

    /// File with custom CSS appended after the design CSS
    #[arg(long)]
    pub custom_css: Option<PathBuf>,

    /// File with custom advanced CSS appended after the design advanced CSS
    #[arg(long)]
    pub custom_advanced_css: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Print one tab to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Tab to print with --stdout (jsx, tsx, css, cssAdvanced, typescript, html);
    /// defaults to the default tab
    #[arg(long)]
    pub tab: Option<String>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let design = load_fragments(&args.fragments)?;

    let custom = CustomCode {
        jsx: read_optional(args.custom_jsx.as_deref())?,
        css: read_optional(args.custom_css.as_deref())?,
        css_advanced: read_optional(args.custom_advanced_css.as_deref())?,
    };
    let bag = merge(&design, &custom);

    let has_typescript = args.typescript || config.typescript;
    let name = args
        .name
        .or_else(|| bag.component_name.clone())
        .unwrap_or_else(|| config.component_name.clone());

    if args.stdout {
        // Unknown tab ids degrade to empty output by design
        let kind = match &args.tab {
            Some(id) => FragmentKind::from_id(id),
            None => default_tab(&bag, has_typescript),
        };
        print!("{}", content(&bag, kind));
        return Ok(());
    }

    let files = build_bundle(&bag, has_typescript, &name);
    if files.is_empty() {
        println!("{} nothing to export", "!".yellow());
        return Ok(());
    }

    let out_dir = match args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };

    let written = write_bundle(&files, &out_dir, &RealFileSystem)?;
    for path in &written {
        println!("  {} {}", "✓".green(), path.display());
    }
    println!();
    println!(
        "{} exported {} file(s)",
        "Done".green().bold(),
        written.len()
    );

    Ok(())
}

fn read_optional(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read custom code file {}", path.display())),
        None => Ok(String::new()),
    }
}
