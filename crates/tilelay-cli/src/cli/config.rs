//! Layout request files.
//!
//! A request file is a YAML document describing one layout: plane, unit,
//! pattern, and optionally the viewport, device pixel ratio and style.
//! Everything is optional in the file itself; command-line flags fill in or
//! override whatever it leaves out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tilelay::{Plane, RenderStyle, Unit, Viewport};

/// One layout request as written in a YAML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    /// Plane size in meters
    #[serde(default)]
    pub plane: Option<Plane>,

    /// Unit size in meters
    #[serde(default)]
    pub unit: Option<Unit>,

    /// Pattern name. Kept as text so an unknown name is reported as an
    /// unknown pattern rather than a YAML error.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Logical viewport (before device pixel ratio)
    #[serde(default)]
    pub viewport: Option<Viewport>,

    /// Device pixel ratio applied to the viewport
    #[serde(default)]
    pub dpr: Option<f64>,

    /// Preview style overrides
    #[serde(default)]
    pub style: RenderStyle,
}

impl RequestFile {
    /// Load a request from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse request file {}", path.display()))
    }

    /// Parse a request from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Example request file, printed by `tilelay example`.
pub const EXAMPLE_REQUEST: &str = r##"# Example tilelay layout request
plane:          # meters
  width: 4.0
  height: 3.0

unit:           # meters
  width: 0.6
  length: 1.2

pattern: staggered   # straight | staggered | herringbone

viewport:       # logical pixels, before dpr
  width: 800
  height: 600
  padding: 20

dpr: 1.0

style:
  fill: "#d8c3a5"
  stroke: "#8e8d8a"
  stroke_width: 1.0
  outline: "#e85a4f"
  outline_width: 2.0
"##;
