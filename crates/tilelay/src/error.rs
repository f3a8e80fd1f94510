//! Errors a layout computation can end with.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
//! `Display` and `std::error::Error` impls for us from the `#[error(...)]`
//! attributes, so the enum stays a plain list of what can go wrong.
//!
//! Both errors are "draw nothing" outcomes: the host shows a message and
//! must not paint a stale or partial sequence.

use std::fmt;

use thiserror::Error;

/// Why a layout could not be computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A plane, unit or viewport dimension leaves nothing to draw.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(Degeneracy),

    /// The pattern name is not one of the known variants.
    #[error("unknown pattern '{0}' (expected one of: straight, staggered, herringbone)")]
    UnknownPattern(String),
}

/// Which input made the geometry degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    PlaneWidth,
    PlaneHeight,
    UnitWidth,
    UnitLength,
    /// Viewport width minus both paddings is not positive.
    ViewportWidth,
    /// Viewport height minus both paddings is not positive.
    ViewportHeight,
    Padding,
}

impl Degeneracy {
    /// The input field this degeneracy points at.
    pub fn field(&self) -> &'static str {
        match self {
            Degeneracy::PlaneWidth => "plane width",
            Degeneracy::PlaneHeight => "plane height",
            Degeneracy::UnitWidth => "unit width",
            Degeneracy::UnitLength => "unit length",
            Degeneracy::ViewportWidth => "viewport width",
            Degeneracy::ViewportHeight => "viewport height",
            Degeneracy::Padding => "viewport padding",
        }
    }
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::ViewportWidth | Degeneracy::ViewportHeight => {
                write!(f, "{} leaves no room after padding", self.field())
            }
            Degeneracy::Padding => write!(f, "{} must be a finite value >= 0", self.field()),
            _ => write!(f, "{} must be a finite value > 0", self.field()),
        }
    }
}

impl From<Degeneracy> for LayoutError {
    fn from(reason: Degeneracy) -> Self {
        LayoutError::DegenerateGeometry(reason)
    }
}

/// `true` when `value` is a usable strictly-positive dimension.
///
/// Written as `value > 0.0` plus a finiteness check so that NaN is rejected:
/// every comparison against NaN is false.
#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = LayoutError::from(Degeneracy::UnitWidth);
        assert_eq!(err.to_string(), "degenerate geometry: unit width must be a finite value > 0");

        let err = LayoutError::from(Degeneracy::ViewportHeight);
        assert!(err.to_string().contains("viewport height leaves no room"));
    }

    #[test]
    fn unknown_pattern_echoes_the_name() {
        let err = LayoutError::UnknownPattern("diagonal".to_string());
        assert!(err.to_string().contains("'diagonal'"));
    }

    #[test]
    fn positivity_rejects_nan_and_infinity() {
        assert!(is_positive(0.5));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-1.0));
        assert!(!is_positive(f64::NAN));
        assert!(!is_positive(f64::INFINITY));
    }
}
