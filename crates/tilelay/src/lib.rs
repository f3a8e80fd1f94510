//! # tilelay
//!
//! Tiling and clipping engine for rectangular unit layouts.
//!
//! Given a plane, a unit, a pattern and a viewport, [`compute_layout`]
//! returns the exact rectangles to paint, already scaled into the viewport
//! and clipped to the plane:
//!
//! ```text
//! Transform::fit -> Pattern::candidates -> clip_rects -> DrawSequence
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod clip;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod patterns;
pub mod style;
pub mod svg;
pub mod transform;

// Re-export common types at crate root for convenience.
pub use clip::{clip_rect, clip_rects};
pub use error::{Degeneracy, LayoutError};
pub use geometry::{ClippedRect, Plane, Rect, Unit, Viewport};
pub use layout::{compute_layout, compute_layout_named, validate, DrawSequence};
pub use patterns::Pattern;
pub use style::RenderStyle;
pub use svg::layout_to_svg;
pub use transform::Transform;
