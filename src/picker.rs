//! Piecewise-linear color lookup.
//!
//! A [`ColorPicker`] holds a table of breakpoints, each paired with a color.
//! Querying a value between two breakpoints blends the two neighbouring
//! colors; values outside the table take the color of the nearest end.
//!
//! Breakpoints are meant to be fractions of the drawable's maximum
//! (`0.0..=1.0`), because the drawable queries with `shown / max`.
//!
//! ```rust
//! use background_progress::color::Color;
//! use background_progress::picker::ColorPicker;
//!
//! let picker = ColorPicker::new(&[0.0, 1.0], &[Color::RED, Color::GREEN]).unwrap();
//! assert_eq!(picker.get_color(0.5), Color::rgb(127, 127, 0));
//! assert_eq!(picker.get_color(-3.0), Color::RED);
//! assert_eq!(picker.get_color(7.0), Color::GREEN);
//! ```

use crate::color::Color;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// One row of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Query value at which `color` is returned exactly.
    pub breakpoint: f64,
    /// Color at this breakpoint.
    pub color: Color,
}

/// Maps a value to a color by linear interpolation over sorted stops.
///
/// Stops are sorted by breakpoint on construction, and each color moves with
/// its breakpoint. The picker is immutable afterwards and can be shared
/// between drawables behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Stop>", into = "Vec<Stop>")]
pub struct ColorPicker {
    stops: Vec<Stop>,
}

impl ColorPicker {
    /// Builds a picker from index-aligned breakpoints and colors.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::LengthMismatch`] if the slices differ in length
    /// - [`ValidationError::Empty`] if both are empty
    /// - [`ValidationError::NonFiniteBreakpoint`] for NaN or infinite breakpoints
    pub fn new(breakpoints: &[f64], colors: &[Color]) -> Result<Self, ValidationError> {
        if breakpoints.len() != colors.len() {
            return Err(ValidationError::LengthMismatch {
                breakpoints: breakpoints.len(),
                colors: colors.len(),
            });
        }
        Self::from_stops(breakpoints.iter().copied().zip(colors.iter().copied()))
    }

    /// Builds a picker from `(breakpoint, color)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ColorPicker::new`], minus the length check.
    pub fn from_stops<I>(stops: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (f64, Color)>,
    {
        let mut stops: Vec<Stop> = stops
            .into_iter()
            .map(|(breakpoint, color)| Stop { breakpoint, color })
            .collect();

        if stops.is_empty() {
            return Err(ValidationError::Empty);
        }
        if let Some(index) = stops.iter().position(|s| !s.breakpoint.is_finite()) {
            return Err(ValidationError::NonFiniteBreakpoint { index });
        }

        // Stable: equal breakpoints keep the caller's order.
        stops.sort_by(|a, b| a.breakpoint.total_cmp(&b.breakpoint));

        Ok(Self { stops })
    }

    /// Returns the interpolated color for `value`.
    ///
    /// A NaN `value` matches no segment and yields [`Color::BLACK`].
    pub fn get_color(&self, value: f64) -> Color {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];

        if self.stops.len() == 1 || value <= first.breakpoint {
            return first.color;
        }
        if value >= last.breakpoint {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if lo.breakpoint <= value && value <= hi.breakpoint {
                let ratio = (value - lo.breakpoint) / (hi.breakpoint - lo.breakpoint);
                return lo.color.lerp(hi.color, ratio);
            }
        }

        tracing::debug!(value, "no color segment matched, falling back to black");
        Color::BLACK
    }

    /// Sorted breakpoints.
    pub fn breakpoints(&self) -> Vec<f64> {
        self.stops.iter().map(|s| s.breakpoint).collect()
    }

    /// Colors in breakpoint order.
    pub fn colors(&self) -> Vec<Color> {
        self.stops.iter().map(|s| s.color).collect()
    }

    /// The sorted stop table.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops, always at least one.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; an empty picker cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Red at 0, yellow at 0.5, green at 1.
impl Default for ColorPicker {
    fn default() -> Self {
        Self {
            stops: vec![
                Stop {
                    breakpoint: 0.0,
                    color: Color::RED,
                },
                Stop {
                    breakpoint: 0.5,
                    color: Color::YELLOW,
                },
                Stop {
                    breakpoint: 1.0,
                    color: Color::GREEN,
                },
            ],
        }
    }
}

impl TryFrom<Vec<Stop>> for ColorPicker {
    type Error = ValidationError;

    fn try_from(stops: Vec<Stop>) -> Result<Self, Self::Error> {
        Self::from_stops(stops.into_iter().map(|s| (s.breakpoint, s.color)))
    }
}

impl From<ColorPicker> for Vec<Stop> {
    fn from(picker: ColorPicker) -> Self {
        picker.stops
    }
}
