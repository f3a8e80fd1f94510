//! `tilelay render`: rasterize a layout preview to PNG.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use resvg::usvg;
use tiny_skia::Pixmap;
use tracing::{debug, info};

use tilelay::layout_to_svg;

use super::common::{compute, RequestArgs};

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// PNG file to write
    #[arg(short, long, value_name = "FILE", default_value = "layout.png")]
    pub output: PathBuf,
}

pub fn cmd_render(args: &RenderArgs) -> Result<()> {
    let request = args.request.resolve()?;
    let sequence = compute(&request)?;

    let svg = layout_to_svg(&sequence, &request.viewport, &request.style);
    let width = request.viewport.width.ceil() as u32;
    let height = request.viewport.height.ceil() as u32;
    let pixmap = rasterize(&svg, width, height)?;

    pixmap
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        width,
        height,
        rects = sequence.len(),
        "preview rendered"
    );
    Ok(())
}

/// Rasterize an SVG document onto a `width` x `height` pixmap at 1:1.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<Pixmap> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .context("Failed to parse generated SVG")?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("cannot allocate a {width}x{height} pixmap"))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    debug!(width, height, "svg rasterized");

    Ok(pixmap)
}
