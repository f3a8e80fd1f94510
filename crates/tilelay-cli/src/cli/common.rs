//! Common utilities shared across CLI commands.
//!
//! Every command that draws a layout takes the same request flags. They are
//! merged over an optional request file here, and the resulting request is
//! turned into a draw sequence with the host-side guards applied.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use thiserror::Error;
use tracing::{debug, warn};

use tilelay::{
    compute_layout, validate, DrawSequence, LayoutError, Pattern, Plane, RenderStyle, Unit,
    Viewport,
};

use super::config::RequestFile;

/// Logical viewport used when neither flags nor the request file name one.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
    padding: 20.0,
};

/// Largest candidate count the CLI will generate for a single request.
///
/// Units that are tiny relative to the plane explode the candidate count;
/// past this point the request is refused instead of stalling.
pub const MAX_CANDIDATES: usize = 2_000_000;

/// Request flags shared by `layout`, `render` and `preview`.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Layout request file (YAML); flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Plane width in meters
    #[arg(long, value_name = "M")]
    pub plane_width: Option<f64>,

    /// Plane height in meters
    #[arg(long, value_name = "M")]
    pub plane_height: Option<f64>,

    /// Unit width in meters
    #[arg(long, value_name = "M")]
    pub unit_width: Option<f64>,

    /// Unit length in meters
    #[arg(long, value_name = "M")]
    pub unit_length: Option<f64>,

    /// Pattern name (see `tilelay patterns`)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Viewport width in logical pixels
    #[arg(long, value_name = "PX")]
    pub viewport_width: Option<f64>,

    /// Viewport height in logical pixels
    #[arg(long, value_name = "PX")]
    pub viewport_height: Option<f64>,

    /// Padding around the plane in logical pixels
    #[arg(long, value_name = "PX")]
    pub padding: Option<f64>,

    /// Device pixel ratio applied to the viewport
    #[arg(long)]
    pub dpr: Option<f64>,
}

/// A fully resolved layout request.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    pub plane: Plane,
    pub unit: Unit,
    /// Pattern name as given; parsed when the layout is computed.
    pub pattern: String,
    /// Device viewport (logical viewport times dpr).
    pub viewport: Viewport,
    pub style: RenderStyle,
}

impl RequestArgs {
    /// Resolve flags and request file into a complete request.
    ///
    /// Plane and unit dimensions are required from one source or the other.
    pub fn resolve(&self) -> Result<LayoutRequest> {
        self.resolve_or(None)
    }

    /// Like [`resolve`](Self::resolve), but missing plane and unit values
    /// fall back to `fallback` instead of failing.
    pub fn resolve_or(&self, fallback: Option<(Plane, Unit)>) -> Result<LayoutRequest> {
        let file = match &self.config {
            Some(path) => RequestFile::load(path)?,
            None => RequestFile::default(),
        };

        let fallback_plane = fallback.map(|(plane, _)| plane);
        let fallback_unit = fallback.map(|(_, unit)| unit);

        let plane = Plane::new(
            pick(self.plane_width, file.plane.map(|p| p.width), fallback_plane.map(|p| p.width))
                .ok_or_else(|| missing("plane width", "--plane-width", "plane.width"))?,
            pick(self.plane_height, file.plane.map(|p| p.height), fallback_plane.map(|p| p.height))
                .ok_or_else(|| missing("plane height", "--plane-height", "plane.height"))?,
        );

        let unit = Unit::new(
            pick(self.unit_width, file.unit.map(|u| u.width), fallback_unit.map(|u| u.width))
                .ok_or_else(|| missing("unit width", "--unit-width", "unit.width"))?,
            pick(self.unit_length, file.unit.map(|u| u.length), fallback_unit.map(|u| u.length))
                .ok_or_else(|| missing("unit length", "--unit-length", "unit.length"))?,
        );

        let pattern = self
            .pattern
            .clone()
            .or(file.pattern)
            .unwrap_or_else(|| Pattern::Straight.name().to_string());

        let logical = file.viewport.unwrap_or(DEFAULT_VIEWPORT);
        let logical = Viewport::new(
            self.viewport_width.unwrap_or(logical.width),
            self.viewport_height.unwrap_or(logical.height),
            self.padding.unwrap_or(logical.padding),
        );

        let dpr = self.dpr.or(file.dpr).unwrap_or(1.0);
        let viewport = device_viewport(&logical, dpr)?;

        Ok(LayoutRequest {
            plane,
            unit,
            pattern,
            viewport,
            style: file.style,
        })
    }
}

fn pick(flag: Option<f64>, file: Option<f64>, fallback: Option<f64>) -> Option<f64> {
    flag.or(file).or(fallback)
}

fn missing(what: &str, flag: &str, key: &str) -> anyhow::Error {
    anyhow!("missing {what}: pass {flag} or set `{key}` in the request file")
}

/// Scale a logical viewport to device pixels.
///
/// Padding scales with the viewport so the plane keeps its on-screen margin.
pub fn device_viewport(logical: &Viewport, dpr: f64) -> Result<Viewport> {
    if !(dpr.is_finite() && dpr > 0.0) {
        bail!("device pixel ratio must be a finite value > 0 (got {dpr})");
    }
    Ok(Viewport::new(
        logical.width * dpr,
        logical.height * dpr,
        logical.padding * dpr,
    ))
}

/// Parse a pattern name, logging and explaining an unknown one.
pub fn parse_pattern(name: &str) -> Result<Pattern> {
    name.parse::<Pattern>().map_err(explain)
}

/// Why a host refused to draw a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Refusal {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(
        "{pattern} layout needs {candidates} candidate units (limit {MAX_CANDIDATES}); \
         use larger units or a smaller plane"
    )]
    TooManyCandidates { pattern: Pattern, candidates: usize },
}

/// Compute a layout, refusing it before generation when the candidate count
/// is over [`MAX_CANDIDATES`].
pub fn compute_guarded(
    plane: &Plane,
    unit: &Unit,
    pattern: Pattern,
    viewport: &Viewport,
) -> Result<DrawSequence, Refusal> {
    let transform = validate(plane, unit, viewport)?;

    let candidates = pattern.candidate_count(plane, unit, &transform);
    debug!(%pattern, candidates, "layout request accepted");
    if candidates > MAX_CANDIDATES {
        warn!(%pattern, candidates, "layout refused, too many candidates");
        return Err(Refusal::TooManyCandidates { pattern, candidates });
    }

    Ok(compute_layout(plane, unit, pattern, viewport)?)
}

/// Compute the draw sequence for a resolved request.
///
/// The pattern is checked before the geometry, and the candidate count is
/// checked before anything is generated.
pub fn compute(request: &LayoutRequest) -> Result<DrawSequence> {
    let pattern = parse_pattern(&request.pattern)?;
    compute_guarded(&request.plane, &request.unit, pattern, &request.viewport).map_err(|refusal| {
        match refusal {
            Refusal::Layout(err) => explain(err),
            other => anyhow::Error::new(other),
        }
    })
}

/// Wrap a layout error with the fix the user should make.
pub fn explain(err: LayoutError) -> anyhow::Error {
    match &err {
        LayoutError::DegenerateGeometry(reason) => {
            warn!(%reason, "layout rejected, drawing nothing");
            let hint = format!("nothing to draw: fix the {}", reason.field());
            anyhow::Error::new(err).context(hint)
        }
        LayoutError::UnknownPattern(name) => {
            warn!(pattern = %name, "unknown pattern, drawing nothing");
            let hint = format!("nothing to draw: choose one of {}", pattern_names());
            anyhow::Error::new(err).context(hint)
        }
    }
}

/// Comma separated list of every pattern name.
pub fn pattern_names() -> String {
    Pattern::all()
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RequestArgs {
        RequestArgs {
            plane_width: Some(4.0),
            plane_height: Some(3.0),
            unit_width: Some(1.0),
            unit_length: Some(1.0),
            ..RequestArgs::default()
        }
    }

    #[test]
    fn flags_alone_resolve() {
        let request = args().resolve().unwrap();
        assert_eq!(request.plane, Plane::new(4.0, 3.0));
        assert_eq!(request.pattern, "straight");
        assert_eq!(request.viewport, DEFAULT_VIEWPORT);
    }

    #[test]
    fn missing_dimension_names_the_flag() {
        let err = RequestArgs::default().resolve().unwrap_err();
        assert!(err.to_string().contains("--plane-width"));
    }

    #[test]
    fn fallback_fills_gaps_but_flags_win() {
        let partial = RequestArgs {
            plane_width: Some(9.0),
            ..RequestArgs::default()
        };
        let request = partial
            .resolve_or(Some((Plane::new(4.0, 3.0), Unit::new(0.5, 1.0))))
            .unwrap();
        assert_eq!(request.plane, Plane::new(9.0, 3.0));
        assert_eq!(request.unit, Unit::new(0.5, 1.0));
    }

    #[test]
    fn dpr_scales_viewport_and_padding() {
        let vp = device_viewport(&Viewport::new(400.0, 300.0, 10.0), 2.0).unwrap();
        assert_eq!(vp, Viewport::new(800.0, 600.0, 20.0));
    }

    #[test]
    fn bad_dpr_is_rejected() {
        assert!(device_viewport(&DEFAULT_VIEWPORT, 0.0).is_err());
        assert!(device_viewport(&DEFAULT_VIEWPORT, f64::NAN).is_err());
    }

    #[test]
    fn compute_matches_core() {
        let request = args().resolve().unwrap();
        let seq = compute(&request).unwrap();
        assert_eq!(seq.len(), 12);
    }

    #[test]
    fn unknown_pattern_lists_names() {
        let mut request = args().resolve().unwrap();
        request.pattern = "parquet".to_string();
        let err = compute(&request).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("straight, staggered, herringbone"));
        assert!(message.contains("unknown pattern 'parquet'"));
    }

    #[test]
    fn unknown_pattern_wins_over_bad_geometry() {
        let mut request = args().resolve().unwrap();
        request.pattern = "parquet".to_string();
        request.unit = Unit::new(0.0, 1.0);
        let err = compute(&request).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LayoutError>(),
            Some(LayoutError::UnknownPattern(_))
        ));
    }

    #[test]
    fn degenerate_names_the_field() {
        let mut request = args().resolve().unwrap();
        request.unit = Unit::new(-1.0, 1.0);
        let err = compute(&request).unwrap_err();
        assert!(format!("{err:#}").contains("unit width"));
    }

    #[test]
    fn guard_refuses_before_generating() {
        let plane = Plane::new(3000.0, 1000.0);
        let unit = Unit::new(1.0, 1.0);
        let result = compute_guarded(&plane, &unit, Pattern::Straight, &DEFAULT_VIEWPORT);
        assert!(matches!(
            result,
            Err(Refusal::TooManyCandidates { pattern: Pattern::Straight, candidates })
                if candidates >= 3_000_000
        ));
    }

    #[test]
    fn guard_passes_layout_errors_through() {
        let result = compute_guarded(
            &Plane::new(4.0, 3.0),
            &Unit::new(0.0, 1.0),
            Pattern::Straight,
            &DEFAULT_VIEWPORT,
        );
        assert_eq!(
            result,
            Err(Refusal::Layout(LayoutError::DegenerateGeometry(
                tilelay::Degeneracy::UnitWidth
            )))
        );
    }

    #[test]
    fn huge_requests_are_refused() {
        let mut request = args().resolve().unwrap();
        request.plane = Plane::new(1000.0, 1000.0);
        request.unit = Unit::new(0.1, 0.1);
        let err = compute(&request).unwrap_err();
        assert!(err.to_string().contains("limit"));
    }
}
