//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `layout` - Compute a draw sequence and print it as JSON or SVG
//! - `render` - Rasterize a layout preview to PNG
//! - `preview` - Interactive terminal preview
//!
//! `patterns` and `example` are small enough to live in `main.rs`.

pub mod common;
pub mod config;
pub mod layout;
pub mod preview;
pub mod render;

pub use layout::{cmd_layout, LayoutArgs};
pub use preview::{cmd_preview, PreviewArgs};
pub use render::{cmd_render, RenderArgs};
