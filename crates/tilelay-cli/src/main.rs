//! tilelay - CLI and TUI for tiling layout previews
//!
//! Usage:
//!   tilelay patterns                          List available patterns
//!   tilelay layout --plane-width 4 ...        Print the draw sequence (JSON or SVG)
//!   tilelay render -c request.yaml -o out.png Render a PNG preview
//!   tilelay preview                           Interactive terminal preview
//!   tilelay example                           Print an example request file

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tilelay::Pattern;

use cli::config::EXAMPLE_REQUEST;
use cli::{cmd_layout, cmd_preview, cmd_render, LayoutArgs, PreviewArgs, RenderArgs};

#[derive(Parser, Debug)]
#[command(name = "tilelay", version, about = "Preview how rectangular units tile a plane")]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available patterns
    Patterns,
    /// Compute the draw sequence and print it as JSON or SVG
    Layout(LayoutArgs),
    /// Render a PNG preview
    Render(RenderArgs),
    /// Interactive terminal preview
    Preview(PreviewArgs),
    /// Print an example request file
    Example,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so log lines would corrupt it
    let interactive = matches!(cli.command, Command::Preview(_));
    init_logging(cli.verbose, interactive);

    match &cli.command {
        Command::Patterns => cmd_patterns(),
        Command::Layout(args) => cmd_layout(args)?,
        Command::Render(args) => cmd_render(args)?,
        Command::Preview(args) => cmd_preview(args)?,
        Command::Example => print!("{EXAMPLE_REQUEST}"),
    }

    Ok(())
}

fn init_logging(verbose: u8, silent: bool) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if silent {
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
}

fn cmd_patterns() {
    println!("Available patterns:");
    for pattern in Pattern::all() {
        let meta = pattern.metadata();
        println!("  {:<12} {}", pattern.name(), meta.description);
    }
}
