mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, init, link, tabs, ExportArgs, InitArgs, LinkArgs, TabsArgs};

/// Handoff CLI - turn design output into a downloadable source bundle
#[derive(Parser, Debug)]
#[command(name = "handoff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a handoff config in the current directory
    Init(InitArgs),

    /// List the visible representations for a fragments file
    Tabs(TabsArgs),

    /// Export the source bundle to files or stdout
    Export(ExportArgs),

    /// Validate a pasted design file URL
    Link(LinkArgs),
}

fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Tabs(args) => tabs(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Link(args) => link(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
