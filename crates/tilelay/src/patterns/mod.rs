//! Pattern generators for unit layouts.
//!
//! Each pattern turns a plane, a unit and a transform into candidate
//! rectangles in output space. Candidates may overhang the plane; clipping
//! happens afterwards in [`crate::clip`].

pub mod util;

mod straight;
mod staggered;
mod herringbone;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::{Plane, Rect, Unit};
use crate::transform::Transform;

pub use straight::{straight_candidates, straight_count};
pub use staggered::{staggered_candidates, staggered_count, row_offset};
pub use herringbone::{herringbone_candidates, herringbone_count, block_size};
pub use util::TileContext;

/// Metadata describing a pattern for UI display.
#[derive(Debug, Clone, Copy)]
pub struct PatternMetadata {
    /// Brief description of the pattern
    pub description: &'static str,
    /// How many candidates one grid step produces
    pub tiles_per_step: usize,
}

impl PatternMetadata {
    pub const fn new(description: &'static str, tiles_per_step: usize) -> Self {
        Self { description, tiles_per_step }
    }
}

/// Available pattern variants.
///
/// ## Rust Lesson #10: Enums (Sum Types)
///
/// The set is closed: there is no "other" variant. Strings from the outside
/// world go through [`Pattern::from_str`] and either become one of these or
/// an [`LayoutError::UnknownPattern`] - generation code can never see an
/// invalid tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Straight,
    Staggered,
    Herringbone,
}

/// A restartable stream of candidate rectangles.
///
/// Boxed so the three variants' iterator types fit behind one name.
pub type Candidates = Box<dyn Iterator<Item = Rect> + Send>;

impl Pattern {
    /// Get all available patterns.
    pub fn all() -> &'static [Pattern] {
        &[Pattern::Straight, Pattern::Staggered, Pattern::Herringbone]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Straight => "straight",
            Pattern::Staggered => "staggered",
            Pattern::Herringbone => "herringbone",
        }
    }

    /// Get UI metadata for this pattern.
    pub fn metadata(&self) -> PatternMetadata {
        match self {
            Pattern::Straight => PatternMetadata::new("Units edge to edge in a plain grid", 1),
            Pattern::Staggered => {
                PatternMetadata::new("Brick bond: odd rows shifted left by half a unit", 1)
            }
            Pattern::Herringbone => {
                PatternMetadata::new("Two-unit L blocks, horizontal then vertical", 2)
            }
        }
    }

    /// How many candidates [`Pattern::candidates`] will yield, without
    /// generating them.
    pub fn candidate_count(&self, plane: &Plane, unit: &Unit, transform: &Transform) -> usize {
        let ctx = TileContext::new(plane, unit, transform);
        match self {
            Pattern::Straight => straight_count(&ctx),
            Pattern::Staggered => staggered_count(&ctx),
            Pattern::Herringbone => herringbone_count(&ctx),
        }
    }

    /// Generate candidate rectangles for this pattern.
    ///
    /// Dimensions are assumed already validated (positive and finite); see
    /// [`crate::layout::compute_layout`]. The same inputs always give the
    /// same rectangles in the same order.
    pub fn candidates(&self, plane: &Plane, unit: &Unit, transform: &Transform) -> Candidates {
        let ctx = TileContext::new(plane, unit, transform);
        match self {
            Pattern::Straight => Box::new(straight_candidates(ctx)),
            Pattern::Staggered => Box::new(staggered_candidates(ctx)),
            Pattern::Herringbone => Box::new(herringbone_candidates(ctx)),
        }
    }

    /// Parse pattern from string, ignoring ASCII case and surrounding
    /// whitespace.
    pub fn from_name(name: &str) -> Option<Pattern> {
        let name = name.trim();
        Pattern::all()
            .iter()
            .copied()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for Pattern {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::from_name(s).ok_or_else(|| LayoutError::UnknownPattern(s.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
