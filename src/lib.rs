#![warn(missing_docs)]

//! # background-progress
//!
//! A progress indicator that lives in a view's background. The drawable
//! paints a single rectangle whose color and extent both follow a progress
//! value, and animates between values with a linear transition driven by
//! `bubbletea-rs` frame ticks.
//!
//! ## Overview
//!
//! - [`picker::ColorPicker`] maps a value to a color by interpolating between
//!   sorted breakpoints.
//! - [`drawable::Model`] holds the progress state, computes the fill
//!   rectangle for the bounds it is given, and runs the transition.
//!
//! ## Fill Modes
//!
//! - [`FillMode::Horizontal`]: the fill grows from the left edge.
//! - [`FillMode::Vertical`]: the fill grows from the bottom edge.
//! - [`FillMode::Full`]: the fill covers the bounds; only the color changes.
//!
//! ## Example
//!
//! ```rust
//! use background_progress::prelude::*;
//!
//! let picker = ColorPicker::new(
//!     &[0.0, 0.5, 1.0],
//!     &[Color::RED, Color::YELLOW, Color::GREEN],
//! )
//! .unwrap();
//!
//! let mut drawable = Config::new()
//!     .mode(FillMode::Vertical)
//!     .color_picker(picker)
//!     .create();
//!
//! drawable.set_progress_immediate(40.0);
//! let cmd = drawable.render(Rect::new(0.0, 100.0, 50.0, 200.0));
//! assert_eq!(cmd.rect.bottom, 200.0);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (transition start and finish at
//! `debug`, stale frames at `trace`, ignored setter input at `warn`) and
//! leaves subscriber setup to the application.

pub mod color;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod picker;
pub mod transition;

pub use color::Color;
pub use drawable::Model as ProgressFillRenderer;
pub use drawable::{ColorFilter, Config, DrawCommand, FrameMsg, Invalidate, Opacity};
pub use error::ValidationError;
pub use geometry::{FillMode, Rect};
pub use picker::ColorPicker;

/// Prelude module for convenient imports.
///
/// ```rust
/// use background_progress::prelude::*;
///
/// let drawable: ProgressFillRenderer = Config::new().max(1000.0).create();
/// assert_eq!(drawable.max(), 1000.0);
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::drawable::{
        new as drawable_new, with_alpha, with_color_picker, with_duration, with_max, with_mode,
        ColorFilter, Config, DrawCommand, DrawableOption, FrameMsg, Invalidate,
        Model as ProgressFillRenderer, Opacity,
    };
    pub use crate::error::ValidationError;
    pub use crate::geometry::{FillMode, Rect};
    pub use crate::picker::ColorPicker;
}
