//! Background progress drawable for Bubble Tea applications.
//!
//! A drawable paints one rectangle inside the bounds it is given. Its color
//! comes from a [`ColorPicker`](crate::picker::ColorPicker) queried with the
//! progress ratio, and its size depends on the [`FillMode`](crate::geometry::FillMode):
//! it grows left to right, bottom to top, or always covers the bounds.
//!
//! # Basic Usage
//!
//! ```rust
//! use background_progress::drawable::Config;
//! use background_progress::geometry::FillMode;
//! use std::time::Duration;
//!
//! let mut drawable = Config::new()
//!     .mode(FillMode::Full)
//!     .max(1000.0)
//!     .duration(Duration::from_secs(5))
//!     .create();
//!
//! // Animated: return the command from your update() to drive frames.
//! let _cmd = drawable.set_progress(400.0);
//! assert_eq!(drawable.progress(), 400.0);
//!
//! // Immediate: no transition.
//! drawable.set_progress_immediate(1000.0);
//! assert_eq!(drawable.shown_progress(), 1000.0);
//! ```
//!
//! # Integration with bubbletea-rs
//!
//! ```rust
//! use background_progress::drawable;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     background: drawable::Model,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut background = drawable::new(&[]);
//!         let cmd = background.set_progress(20.0);
//!         (Self { background }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Forward frames so the transition keeps running
//!         self.background.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.background.view()
//!     }
//! }
//! ```

pub mod model;
pub mod options;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use model::Model;
pub use options::{
    new, with_alpha, with_color_picker, with_duration, with_max, with_mode, Config,
    DrawableOption,
};
pub use types::{ColorFilter, DrawCommand, FrameMsg, Invalidate, Opacity};
