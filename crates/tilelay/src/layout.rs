//! Layout computation: transform, generate, clip.
//!
//! [`compute_layout`] is the one entry point a host needs. It is a pure
//! function - call it again whenever the plane, unit, pattern or viewport
//! changes and throw the previous [`DrawSequence`] away.

use serde::Serialize;
use tracing::{debug, warn};

use crate::clip::clip_rects;
use crate::error::{is_positive, Degeneracy, LayoutError};
use crate::geometry::{ClippedRect, Plane, Unit, Viewport};
use crate::patterns::Pattern;
use crate::transform::Transform;

/// The clipped rectangles to draw, in generation order.
///
/// Carries the transform it was computed under so a renderer can outline the
/// plane at `(x0, y0)..(x1, y1)`. Styling is left entirely to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawSequence {
    pub pattern: Pattern,
    pub transform: Transform,
    pub rects: Vec<ClippedRect>,
}

impl DrawSequence {
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClippedRect> {
        self.rects.iter()
    }
}

impl<'a> IntoIterator for &'a DrawSequence {
    type Item = &'a ClippedRect;
    type IntoIter = std::slice::Iter<'a, ClippedRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

/// Check every input dimension and fit the plane into the viewport.
///
/// This is the whole validation story of the core: positive, finite sizes.
/// Business rules belong to the host.
pub fn validate(plane: &Plane, unit: &Unit, viewport: &Viewport) -> Result<Transform, LayoutError> {
    let transform = Transform::fit(plane, viewport)?;

    if !is_positive(unit.width) {
        return Err(Degeneracy::UnitWidth.into());
    }
    if !is_positive(unit.length) {
        return Err(Degeneracy::UnitLength.into());
    }

    Ok(transform)
}

/// Compute the draw sequence for an already-parsed pattern.
///
/// Fails with [`LayoutError::DegenerateGeometry`] before any generation when a
/// dimension is not positive or the padding leaves no room.
pub fn compute_layout(
    plane: &Plane,
    unit: &Unit,
    pattern: Pattern,
    viewport: &Viewport,
) -> Result<DrawSequence, LayoutError> {
    let transform = validate(plane, unit, viewport).inspect_err(|err| {
        warn!(%pattern, %err, "layout rejected");
    })?;

    let candidates = pattern.candidates(plane, unit, &transform);
    let rects = clip_rects(candidates, &transform);

    debug!(
        %pattern,
        scale = transform.scale,
        candidates = pattern.candidate_count(plane, unit, &transform),
        drawn = rects.len(),
        "layout computed"
    );

    Ok(DrawSequence { pattern, transform, rects })
}

/// Compute the draw sequence from an external pattern name.
///
/// The name is parsed first, so an unknown pattern short-circuits with
/// [`LayoutError::UnknownPattern`] without touching the geometry.
pub fn compute_layout_named(
    plane: &Plane,
    unit: &Unit,
    pattern: &str,
    viewport: &Viewport,
) -> Result<DrawSequence, LayoutError> {
    let pattern: Pattern = pattern.parse().inspect_err(|err| {
        warn!(%err, "layout rejected");
    })?;
    compute_layout(plane, unit, pattern, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    const EPS: f64 = 1e-9;

    fn plane() -> Plane {
        Plane::new(4.0, 3.0)
    }

    fn square() -> Unit {
        Unit::new(1.0, 1.0)
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0, 20.0)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn scale_matches_tighter_axis() {
        let seq = compute_layout(&plane(), &square(), Pattern::Straight, &viewport()).unwrap();
        assert!(approx(seq.transform.scale, 186.666_666_666_666_66));
    }

    #[test]
    fn straight_exact_tiling_is_not_trimmed() {
        let seq = compute_layout(&plane(), &square(), Pattern::Straight, &viewport()).unwrap();
        let s = seq.transform.scale;
        assert_eq!(seq.len(), 12);

        for (i, rect) in seq.iter().enumerate() {
            let (row, col) = (i / 4, i % 4);
            assert!(approx(rect.x(), 20.0 + col as f64 * s), "x of #{i}");
            assert!(approx(rect.y(), 20.0 + row as f64 * s), "y of #{i}");
            assert!(approx(rect.width(), s), "width of #{i}");
            assert!(approx(rect.height(), s), "height of #{i}");
        }
    }

    #[test]
    fn staggered_odd_row_is_clamped_at_origin() {
        let seq = compute_layout(&plane(), &square(), Pattern::Staggered, &viewport()).unwrap();
        let s = seq.transform.scale;
        let t = seq.transform;

        // Rows 0 and 2 are untouched: 4 full units each. Row 1 keeps all 4
        // units, the first trimmed to half width, and ends half a unit short.
        assert_eq!(seq.len(), 12);

        let row0_first = seq.rects[0];
        assert!(approx(row0_first.x(), t.x0));
        assert!(approx(row0_first.width(), s));

        let row1_first = seq.rects[4];
        assert!(approx(row1_first.x(), t.x0));
        assert!(approx(row1_first.width(), s / 2.0));
        assert!(approx(row1_first.y(), t.y0 + s));

        let row1_last = seq.rects[7];
        assert!(approx(row1_last.right(), t.x1 - s / 2.0));

        let row2_first = seq.rects[8];
        assert!(approx(row2_first.x(), t.x0));
        assert!(approx(row2_first.width(), s));
    }

    #[test]
    fn herringbone_blocks_pair_up() {
        let seq = compute_layout(&plane(), &square(), Pattern::Herringbone, &viewport()).unwrap();
        let s = seq.transform.scale;
        let t = seq.transform;

        // block = 2s: 2 blocks across, 1.5 -> 2 blocks down. With a square
        // unit every tile of the second block row ends exactly on y1.
        assert_eq!(seq.len(), 8);

        let a = seq.rects[0];
        let b = seq.rects[1];
        assert!(approx(a.x(), t.x0) && approx(a.y(), t.y0));
        assert!(approx(a.width(), s) && approx(a.height(), s));
        assert!(approx(b.x(), t.x0 + s));
        assert!(approx(b.y(), t.y0));

        // Second block along the row
        assert!(approx(seq.rects[2].x(), t.x0 + 2.0 * s));
    }

    #[test]
    fn herringbone_trims_tiles_to_a_thin_plane() {
        let plane = Plane::new(4.0, 0.5);
        let seq = compute_layout(&plane, &square(), Pattern::Herringbone, &viewport()).unwrap();
        let t = seq.transform;
        // Vertical tiles are a full unit tall but the plane is half a unit
        assert!(seq.iter().all(|r| r.bottom() <= t.y1 + EPS));
        assert!(approx(seq.rects[1].height(), t.height()));
    }

    #[test]
    fn edge_touching_tile_is_dropped_not_kept_empty() {
        // One block; tile B starts exactly on the plane's right edge
        let plane = Plane::new(1.0, 1.0);
        let pattern = Pattern::Herringbone;
        let seq = compute_layout(&plane, &square(), pattern, &viewport()).unwrap();
        assert_eq!(pattern.candidate_count(&plane, &square(), &seq.transform), 2);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn every_rect_is_inside_the_plane() {
        let unit = Unit::new(0.7, 0.3);
        for pattern in Pattern::all() {
            let seq = compute_layout(&plane(), &unit, *pattern, &viewport()).unwrap();
            let t = seq.transform;
            for r in &seq {
                assert!(r.x() >= t.x0 && r.y() >= t.y0, "{pattern}: {r:?}");
                assert!(r.right() <= t.x1 + EPS && r.bottom() <= t.y1 + EPS, "{pattern}: {r:?}");
                assert!(r.width() > 0.0 && r.height() > 0.0, "{pattern}: {r:?}");
            }
        }
    }

    #[test]
    fn degenerate_unit_draws_nothing() {
        for unit in [Unit::new(0.0, 1.0), Unit::new(1.0, -2.0), Unit::new(f64::NAN, 1.0)] {
            for pattern in Pattern::all() {
                let result = compute_layout(&plane(), &unit, *pattern, &viewport());
                assert!(
                    matches!(result, Err(LayoutError::DegenerateGeometry(_))),
                    "{pattern} with {unit:?}"
                );
            }
        }
    }

    #[test]
    fn degenerate_reason_names_the_input() {
        let err = compute_layout(&plane(), &Unit::new(0.0, 1.0), Pattern::Straight, &viewport())
            .unwrap_err();
        assert_eq!(err, LayoutError::DegenerateGeometry(Degeneracy::UnitWidth));

        let err = compute_layout(&plane(), &square(), Pattern::Straight, &Viewport::new(30.0, 600.0, 20.0))
            .unwrap_err();
        assert_eq!(err, LayoutError::DegenerateGeometry(Degeneracy::ViewportWidth));
    }

    #[test]
    fn unknown_pattern_name_is_rejected() {
        let err = compute_layout_named(&plane(), &square(), "parquet", &viewport()).unwrap_err();
        assert_eq!(err, LayoutError::UnknownPattern("parquet".to_string()));
    }

    #[test]
    fn unknown_pattern_wins_over_degenerate_geometry() {
        let err = compute_layout_named(&plane(), &Unit::new(0.0, 0.0), "parquet", &viewport())
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnknownPattern(_)));
    }

    #[test]
    fn named_layout_matches_typed_layout() {
        let named = compute_layout_named(&plane(), &square(), "herringbone", &viewport()).unwrap();
        let typed = compute_layout(&plane(), &square(), Pattern::Herringbone, &viewport()).unwrap();
        assert_eq!(named, typed);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let unit = Unit::new(0.33, 0.21);
        let first = compute_layout(&plane(), &unit, Pattern::Staggered, &viewport()).unwrap();
        let second = compute_layout(&plane(), &unit, Pattern::Staggered, &viewport()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sequence_serializes_for_renderers() {
        let seq = compute_layout(
            &Plane::new(1.0, 1.0),
            &square(),
            Pattern::Straight,
            &Viewport::new(100.0, 100.0, 0.0),
        )
        .unwrap();
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(json["pattern"], "straight");
        assert_eq!(json["rects"][0]["width"], 100.0);
        assert_eq!(Rect::from(seq.rects[0]), Rect::new(0.0, 0.0, 100.0, 100.0));
    }
}
