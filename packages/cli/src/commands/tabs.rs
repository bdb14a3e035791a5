use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use handoff_artifact::{default_tab, file_name, stats, visible_tabs, ContentBag};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct TabsArgs {
    /// Design-derived fragments (JSON)
    pub fragments: PathBuf,

    /// Component name used for file names (overrides fragments/config)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Treat TypeScript as available
    #[arg(long)]
    pub typescript: bool,
}

pub fn tabs(args: TabsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let bag = load_fragments(&args.fragments)?;

    let has_typescript = args.typescript || config.typescript;
    let name = args
        .name
        .or_else(|| bag.component_name.clone())
        .unwrap_or(config.component_name);

    let visible = visible_tabs(&bag, has_typescript);
    if visible.is_empty() {
        println!("{} no representations available", "!".yellow());
        return Ok(());
    }

    let active = default_tab(&bag, has_typescript);
    for tab in &visible {
        let s = stats(&tab.content);
        let marker = if active == Some(tab.kind) { "●" } else { " " };
        println!(
            "  {} {:<14} {:<24} {:>5} lines {:>6} words {:>8} chars",
            marker.green(),
            tab.label,
            file_name(Some(tab.kind), &name),
            s.lines,
            s.words,
            s.characters
        );
    }

    Ok(())
}

pub(crate) fn load_fragments(path: &Path) -> Result<ContentBag> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read fragments file {}", path.display()))?;
    let bag: ContentBag = serde_json::from_str(&content)
        .with_context(|| format!("Invalid fragments JSON in {}", path.display()))?;
    Ok(bag)
}
