//! World-to-output mapping.
//!
//! The plane is scaled uniformly to fit the viewport's usable area and
//! pinned to the top-left padding corner.

use serde::Serialize;

use crate::error::{is_positive, Degeneracy, LayoutError};
use crate::geometry::{Plane, Viewport};

/// Uniform scale plus the plane's output-space bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Output units per world unit, same on both axes.
    pub scale: f64,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Transform {
    /// Fit `plane` into `viewport`.
    ///
    /// `scale = min((Vw - 2p) / W, (Vh - 2p) / H)` keeps the aspect ratio; the
    /// origin sits at `(p, p)` and the extent at `origin + plane * scale`.
    pub fn fit(plane: &Plane, viewport: &Viewport) -> Result<Self, LayoutError> {
        if !is_positive(plane.width) {
            return Err(Degeneracy::PlaneWidth.into());
        }
        if !is_positive(plane.height) {
            return Err(Degeneracy::PlaneHeight.into());
        }
        if !(viewport.padding.is_finite() && viewport.padding >= 0.0) {
            return Err(Degeneracy::Padding.into());
        }

        let avail_w = viewport.usable_width();
        let avail_h = viewport.usable_height();
        if !is_positive(avail_w) {
            return Err(Degeneracy::ViewportWidth.into());
        }
        if !is_positive(avail_h) {
            return Err(Degeneracy::ViewportHeight.into());
        }

        // Subnormal dimensions pass the positivity check but overflow here
        let scale_w = avail_w / plane.width;
        let scale_h = avail_h / plane.height;
        let scale = scale_w.min(scale_h);
        if !scale.is_finite() {
            return Err(if scale_w.is_finite() {
                Degeneracy::PlaneHeight
            } else {
                Degeneracy::PlaneWidth
            }
            .into());
        }
        let x0 = viewport.padding;
        let y0 = viewport.padding;

        Ok(Self {
            scale,
            x0,
            y0,
            x1: x0 + plane.width * scale,
            y1: y0 + plane.height * scale,
        })
    }

    /// Output-space width of the plane.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Output-space height of the plane.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}
