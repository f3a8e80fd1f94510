//! `tilelay layout`: compute a draw sequence and print it.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use tilelay::layout_to_svg;

use super::common::{compute, RequestArgs};

/// Output format for a computed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Draw sequence with its transform, for another renderer
    #[default]
    Json,
    /// Standalone SVG preview sized to the viewport
    Svg,
}

#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn cmd_layout(args: &LayoutArgs) -> Result<()> {
    let request = args.request.resolve()?;
    let sequence = compute(&request)?;

    let output = match args.format {
        OutputFormat::Json if args.pretty => serde_json::to_string_pretty(&sequence)?,
        OutputFormat::Json => serde_json::to_string(&sequence)?,
        OutputFormat::Svg => layout_to_svg(&sequence, &request.viewport, &request.style),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), rects = sequence.len(), "layout written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
