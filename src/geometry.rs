//! Rectangles and fill modes.
//!
//! Coordinates follow the screen convention: `y` grows downward, so for a
//! well-formed rectangle `top < bottom`.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Rect {
    /// Creates a rectangle from its edges.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `right - left`
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `bottom - top`
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the point lies inside, with the left/top edges inclusive and
    /// the right/bottom edges exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// How progress maps onto the area covered by the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// The fill grows from the left edge to the right.
    #[default]
    Horizontal,
    /// The fill grows from the bottom edge upward.
    Vertical,
    /// The fill always covers the whole bounds; only its color follows
    /// progress.
    Full,
}

impl FillMode {
    /// Computes the filled part of `bounds` for a progress `ratio`.
    ///
    /// `ratio` is expected in `0.0..=1.0`; the caller clamps it.
    pub fn fill_rect(self, bounds: Rect, ratio: f64) -> Rect {
        match self {
            FillMode::Horizontal => Rect::new(
                bounds.left,
                bounds.top,
                bounds.left + bounds.width() * ratio,
                bounds.bottom,
            ),
            FillMode::Vertical => Rect::new(
                bounds.left,
                bounds.bottom + (bounds.top - bounds.bottom) * ratio,
                bounds.right,
                bounds.bottom,
            ),
            FillMode::Full => bounds,
        }
    }
}
