//! Error types.

use thiserror::Error;

/// Returned when a [`ColorPicker`](crate::picker::ColorPicker) or a
/// [`Color`](crate::color::Color) cannot be built from the given input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// No breakpoints and no colors were supplied.
    #[error("a color picker needs at least one breakpoint")]
    Empty,

    /// The breakpoint and color sequences have different lengths.
    #[error("got {breakpoints} breakpoints but {colors} colors")]
    LengthMismatch {
        /// Number of breakpoints supplied.
        breakpoints: usize,
        /// Number of colors supplied.
        colors: usize,
    },

    /// A breakpoint is NaN or infinite and cannot be ordered.
    #[error("breakpoint at index {index} is not a finite number")]
    NonFiniteBreakpoint {
        /// Position of the offending breakpoint in the caller's input.
        index: usize,
    },

    /// A color string is not `#rgb` or `#rrggbb` hex.
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
}
