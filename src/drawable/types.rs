//! Value types exchanged between the drawable and its host.

use crate::color::Color;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Message that advances a running progress transition by one frame.
///
/// Frame messages are produced by the command returned from
/// [`Model::set_progress`](super::Model::set_progress) and must be routed back
/// into [`Model::update`](super::Model::update). The `id` keeps frames from
/// reaching other drawables, and the `tag` drops frames that belong to a
/// transition which has since been replaced.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    /// Identifier of the drawable that scheduled the frame.
    pub(crate) id: i64,
    /// Transition generation the frame belongs to.
    pub(crate) tag: i64,
}

/// Called by the drawable whenever its displayed progress changes, asking
/// the host to repaint.
///
/// Any `Fn()` closure that is `Send + Sync` implements this trait.
pub trait Invalidate: Send + Sync {
    /// Schedules a repaint. Hosts are expected to coalesce repeated calls.
    fn invalidate(&self);
}

impl<F> Invalidate for F
where
    F: Fn() + Send + Sync,
{
    fn invalidate(&self) {
        self()
    }
}

/// Color filter passed through from the host to draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFilter {
    /// Replaces the fill color with a fixed color.
    Tint(Color),
    /// Multiplies each channel by `mul / 255`, then adds `add`, saturating.
    Lighting {
        /// Per-channel multiplier.
        mul: Color,
        /// Per-channel offset.
        add: Color,
    },
}

impl ColorFilter {
    /// Applies the filter to `color`.
    pub fn apply(self, color: Color) -> Color {
        match self {
            ColorFilter::Tint(tint) => tint,
            ColorFilter::Lighting { mul, add } => {
                let channel = |c: u8, m: u8, a: u8| {
                    let scaled = (u16::from(c) * u16::from(m) / 255) as u8;
                    scaled.saturating_add(a)
                };
                Color::rgb(
                    channel(color.r, mul.r, add.r),
                    channel(color.g, mul.g, add.g),
                    channel(color.b, mul.b, add.b),
                )
            }
        }
    }
}

/// Coarse opacity of what the drawable paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    /// Alpha is 255.
    Opaque,
    /// Alpha is strictly between 0 and 255.
    Translucent,
    /// Alpha is 0; nothing visible is drawn.
    Transparent,
}

impl Opacity {
    /// Classifies an alpha value.
    pub fn from_alpha(alpha: u8) -> Self {
        match alpha {
            255 => Opacity::Opaque,
            0 => Opacity::Transparent,
            _ => Opacity::Translucent,
        }
    }
}

/// A single filled rectangle, the whole output of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Area to fill.
    pub rect: Rect,
    /// Fill color before the color filter.
    pub color: Color,
    /// Alpha applied on top of `color`.
    pub alpha: u8,
    /// Filter set by the host, if any.
    pub color_filter: Option<ColorFilter>,
}

impl DrawCommand {
    /// The fill color with the color filter applied.
    pub fn filtered_color(&self) -> Color {
        match self.color_filter {
            Some(filter) => filter.apply(self.color),
            None => self.color,
        }
    }
}
