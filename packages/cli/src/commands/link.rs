use anyhow::Result;
use clap::Args;
use colored::Colorize;
use handoff_source::{parse_design_url, LinkKind};

#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Design file URL to validate
    pub url: String,
}

pub fn link(args: LinkArgs, _cwd: &str) -> Result<()> {
    let link = parse_design_url(&args.url)?;

    let kind = match link.kind {
        LinkKind::File => "file",
        LinkKind::Design => "design",
        LinkKind::Prototype => "prototype",
    };

    println!("  {} {} link, key {}", "✓".green(), kind, link.key.bright_white());

    Ok(())
}
