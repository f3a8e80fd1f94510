//! Fixed drawing style for layout previews.
//!
//! Every unit gets the same fill and stroke; the plane outline gets its own
//! heavier stroke, drawn once before any unit.

use serde::{Deserialize, Serialize};

/// Colors and stroke widths used by the preview renderers.
///
/// Colors are any CSS color string an SVG renderer accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Surface background
    pub background: String,
    /// Unit fill color
    pub fill: String,
    /// Unit stroke color
    pub stroke: String,
    /// Unit stroke width in output units
    pub stroke_width: f64,
    /// Plane outline color
    pub outline: String,
    /// Plane outline width in output units
    pub outline_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            fill: "#d8c3a5".to_string(),
            stroke: "#8e8d8a".to_string(),
            stroke_width: 1.0,
            outline: "#e85a4f".to_string(),
            outline_width: 2.0,
        }
    }
}
