//! Rectangle clipping against the plane's output bounds.
//!
//! This is the HOT PATH - every candidate a pattern emits passes through
//! here once per recomputation.

use crate::geometry::{ClippedRect, Rect};
use crate::transform::Transform;

// ============================================================================
// SINGLE RECTANGLE
// ============================================================================
//
// ## Rust Lesson #6: Option<T>
//
// A candidate either survives clipping or it doesn't. Returning
// `Option<ClippedRect>` makes "dropped" a value the caller has to handle,
// instead of a zero-sized rectangle that slips through to the renderer.

/// Intersect `candidate` with the transform's `[x0, x1] x [y0, y1]` bounds.
///
/// Returns `None` when the candidate lies wholly outside. The outside test is
/// strict: a rectangle that only touches an edge has zero overlap and is
/// dropped, never kept at zero size.
#[inline]
pub fn clip_rect(candidate: Rect, bounds: &Transform) -> Option<ClippedRect> {
    let right = candidate.right();
    let bottom = candidate.bottom();

    // Negation of `right <= x0 || x >= x1 || bottom <= y0 || y >= y1`, written
    // this way round so a NaN coordinate fails the test instead of passing it.
    let overlaps = right > bounds.x0 && candidate.x < bounds.x1 && bottom > bounds.y0 && candidate.y < bounds.y1;
    if !overlaps {
        return None;
    }

    let x = candidate.x.max(bounds.x0);
    let y = candidate.y.max(bounds.y0);
    let width = right.min(bounds.x1) - x;
    let height = bottom.min(bounds.y1) - y;

    // Zero-sized candidates overlap nothing.
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    Some(ClippedRect::new_unchecked(Rect::new(x, y, width, height)))
}

// ============================================================================
// BATCH
// ============================================================================

/// Clip a whole candidate sequence, keeping emission order.
pub fn clip_rects<I>(candidates: I, bounds: &Transform) -> Vec<ClippedRect>
where
    I: IntoIterator<Item = Rect>,
{
    let candidates = candidates.into_iter();
    let mut result = Vec::with_capacity(candidates.size_hint().0);
    result.extend(candidates.filter_map(|rect| clip_rect(rect, bounds)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plane bounds from (10, 10) to (110, 60).
    fn bounds() -> Transform {
        Transform { scale: 1.0, x0: 10.0, y0: 10.0, x1: 110.0, y1: 60.0 }
    }

    #[test]
    fn inside_rect_is_unchanged() {
        let r = Rect::new(20.0, 20.0, 30.0, 10.0);
        let clipped = clip_rect(r, &bounds()).unwrap();
        assert_eq!(clipped.rect(), r);
    }

    #[test]
    fn rect_filling_bounds_exactly_is_kept() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert_eq!(clip_rect(r, &bounds()).unwrap().rect(), r);
    }

    #[test]
    fn left_overhang_trims_x_and_width_only() {
        let r = Rect::new(0.0, 20.0, 30.0, 10.0);
        let clipped = clip_rect(r, &bounds()).unwrap();
        assert_eq!(clipped.x(), 10.0);
        assert_eq!(clipped.width(), 20.0);
        assert_eq!(clipped.y(), r.y);
        assert_eq!(clipped.height(), r.height);
    }

    #[test]
    fn right_overhang_trims_width_only() {
        let r = Rect::new(100.0, 20.0, 30.0, 10.0);
        let clipped = clip_rect(r, &bounds()).unwrap();
        assert_eq!(clipped.x(), 100.0);
        assert_eq!(clipped.width(), 10.0);
        assert_eq!((clipped.y(), clipped.height()), (20.0, 10.0));
    }

    #[test]
    fn bottom_overhang_trims_height_only() {
        let r = Rect::new(20.0, 50.0, 30.0, 30.0);
        let clipped = clip_rect(r, &bounds()).unwrap();
        assert_eq!((clipped.x(), clipped.width()), (20.0, 30.0));
        assert_eq!(clipped.y(), 50.0);
        assert_eq!(clipped.height(), 10.0);
    }

    #[test]
    fn corner_overhang_trims_both_axes() {
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        let clipped = clip_rect(r, &bounds()).unwrap();
        assert_eq!(clipped.rect(), Rect::new(10.0, 10.0, 10.0, 10.0));
    }

    #[test]
    fn rect_larger_than_bounds_is_cut_to_bounds() {
        let r = Rect::new(-100.0, -100.0, 500.0, 500.0);
        assert_eq!(clip_rect(r, &bounds()).unwrap().rect(), Rect::new(10.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn edge_touching_rects_are_dropped() {
        let b = bounds();
        // Right edge of candidate lands on x0
        assert!(clip_rect(Rect::new(0.0, 20.0, 10.0, 10.0), &b).is_none());
        // Left edge lands on x1
        assert!(clip_rect(Rect::new(110.0, 20.0, 10.0, 10.0), &b).is_none());
        // Bottom edge lands on y0
        assert!(clip_rect(Rect::new(20.0, 0.0, 10.0, 10.0), &b).is_none());
        // Top edge lands on y1
        assert!(clip_rect(Rect::new(20.0, 60.0, 10.0, 10.0), &b).is_none());
    }

    #[test]
    fn far_outside_rects_are_dropped() {
        let b = bounds();
        assert!(clip_rect(Rect::new(500.0, 500.0, 10.0, 10.0), &b).is_none());
        assert!(clip_rect(Rect::new(-50.0, 20.0, 10.0, 10.0), &b).is_none());
    }

    #[test]
    fn nan_candidate_is_dropped() {
        assert!(clip_rect(Rect::new(f64::NAN, 20.0, 10.0, 10.0), &bounds()).is_none());
        assert!(clip_rect(Rect::new(20.0, 20.0, 10.0, f64::NAN), &bounds()).is_none());
    }

    #[test]
    fn zero_width_candidate_is_dropped() {
        assert!(clip_rect(Rect::new(20.0, 20.0, 0.0, 10.0), &bounds()).is_none());
    }

    #[test]
    fn batch_keeps_order_and_drops_outsiders() {
        let candidates = vec![
            Rect::new(20.0, 20.0, 5.0, 5.0),
            Rect::new(200.0, 20.0, 5.0, 5.0),
            Rect::new(0.0, 20.0, 15.0, 5.0),
        ];
        let clipped = clip_rects(candidates, &bounds());
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped[0].x(), 20.0);
        assert_eq!(clipped[1].x(), 10.0);
        assert_eq!(clipped[1].width(), 5.0);
    }
}
