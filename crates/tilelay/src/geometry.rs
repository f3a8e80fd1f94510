//! Core value types for tilelay.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! Every type here is a plain bundle of `f64`s, so they all derive `Copy`:
//! passing a `Plane` around copies two floats instead of moving ownership.
//! Nothing in this module is mutated after it is built - a new layout is a
//! new set of values.
//!
//! World units (meters) are used by [`Plane`] and [`Unit`]. Output units
//! (device pixels) are used by [`Viewport`], [`Rect`] and [`ClippedRect`].

use serde::{Deserialize, Serialize};

/// The bounded rectangular area being tiled, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub width: f64,
    pub height: f64,
}

/// A single rectangular module placed repeatedly across the plane.
///
/// `width` runs along the x axis and `length` along the y axis when the unit
/// is laid straight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub width: f64,
    pub length: f64,
}

/// The drawable output surface, in device pixels.
///
/// Any device-pixel-ratio correction is the host's job and has already been
/// applied by the time a `Viewport` reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: f64,
}

/// An axis-aligned rectangle in output space.
///
/// Pattern generators emit these as *candidates*: they may hang over the
/// plane's edge or lie entirely outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A rectangle that has been intersected with the plane's output bounds.
///
/// Only [`crate::clip::clip_rect`] builds these, so every value satisfies
/// `x >= x0`, `y >= y0`, `right <= x1`, `bottom <= y1` and has a strictly
/// positive width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClippedRect(Rect);

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Plane {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Unit {
    #[inline]
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// Width left for the plane once padding is taken off both sides.
    #[inline]
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height left for the plane once padding is taken off both sides.
    #[inline]
    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl ClippedRect {
    /// Wrap a rectangle the clipper has already proven to be in bounds.
    #[inline]
    pub(crate) fn new_unchecked(rect: Rect) -> Self {
        Self(rect)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.0.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.0.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.0.right()
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.0.bottom()
    }

    /// The underlying rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.0
    }
}

impl From<ClippedRect> for Rect {
    fn from(clipped: ClippedRect) -> Self {
        clipped.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
