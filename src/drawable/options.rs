//! Construction of drawables: the [`Config`] builder and functional options.

use super::model::Model;
use crate::geometry::FillMode;
use crate::picker::ColorPicker;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

pub(crate) const DEFAULT_MAX: f64 = 100.0;
pub(crate) const DEFAULT_DURATION_MS: u64 = 1000;
pub(crate) const DEFAULT_ALPHA: u8 = 255;

pub(crate) fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Settings a drawable starts with.
///
/// `Config` doubles as the builder: chain the setters, then call
/// [`Config::create`]. A config can create any number of drawables, which all
/// share the same color picker.
///
/// It also deserializes, with every field optional:
///
/// ```rust
/// use background_progress::drawable::Config;
/// use background_progress::geometry::FillMode;
///
/// let config: Config = serde_json::from_str(r#"{ "mode": "full", "max": 1000 }"#).unwrap();
/// assert_eq!(config.mode, FillMode::Full);
/// assert_eq!(config.duration_ms, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound of progress. Must be positive and finite.
    pub max: f64,
    /// How progress maps to the filled area.
    pub mode: FillMode,
    /// Color lookup table, queried with `shown / max`.
    pub color_picker: Arc<ColorPicker>,
    /// Length of a progress transition in milliseconds.
    pub duration_ms: u64,
    /// Alpha of the fill, 255 being fully opaque.
    pub alpha: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            mode: FillMode::default(),
            color_picker: Arc::new(ColorPicker::default()),
            duration_ms: DEFAULT_DURATION_MS,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl Config {
    /// A config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upper bound of progress.
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Sets the fill mode.
    pub fn mode(mut self, mode: FillMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the color picker.
    pub fn color_picker(mut self, picker: impl Into<Arc<ColorPicker>>) -> Self {
        self.color_picker = picker.into();
        self
    }

    /// Sets the transition length.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration_ms = as_millis(duration);
        self
    }

    /// Sets the fill alpha.
    pub fn alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Creates a drawable from these settings.
    ///
    /// A `max` that is not positive and finite is replaced by the default
    /// of 100.
    pub fn create(&self) -> Model {
        let max = if self.max.is_finite() && self.max > 0.0 {
            self.max
        } else {
            tracing::warn!(max = self.max, "invalid maximum, using the default");
            DEFAULT_MAX
        };

        Model::from_parts(
            self.mode,
            max,
            Arc::clone(&self.color_picker),
            self.alpha,
            Duration::from_millis(self.duration_ms),
        )
    }
}

/// Functional options accepted by [`new`].
#[derive(Debug, Clone)]
pub enum DrawableOption {
    /// Upper bound of progress.
    WithMax(f64),
    /// Fill mode.
    WithMode(FillMode),
    /// Shared color picker.
    WithColorPicker(Arc<ColorPicker>),
    /// Transition length.
    WithDuration(Duration),
    /// Fill alpha.
    WithAlpha(u8),
}

impl DrawableOption {
    fn apply(&self, config: &mut Config) {
        match self {
            DrawableOption::WithMax(max) => config.max = *max,
            DrawableOption::WithMode(mode) => config.mode = *mode,
            DrawableOption::WithColorPicker(picker) => config.color_picker = Arc::clone(picker),
            DrawableOption::WithDuration(duration) => config.duration_ms = as_millis(*duration),
            DrawableOption::WithAlpha(alpha) => config.alpha = *alpha,
        }
    }
}

/// Sets the upper bound of progress (default 100).
pub fn with_max(max: f64) -> DrawableOption {
    DrawableOption::WithMax(max)
}

/// Sets the fill mode (default [`FillMode::Horizontal`]).
pub fn with_mode(mode: FillMode) -> DrawableOption {
    DrawableOption::WithMode(mode)
}

/// Sets the color picker (default red, yellow, green at 0, 0.5, 1).
pub fn with_color_picker(picker: impl Into<Arc<ColorPicker>>) -> DrawableOption {
    DrawableOption::WithColorPicker(picker.into())
}

/// Sets the transition length (default one second).
pub fn with_duration(duration: Duration) -> DrawableOption {
    DrawableOption::WithDuration(duration)
}

/// Sets the fill alpha (default 255).
pub fn with_alpha(alpha: u8) -> DrawableOption {
    DrawableOption::WithAlpha(alpha)
}

/// Creates a drawable from default settings with `opts` applied in order.
///
/// ```rust
/// use background_progress::drawable::{new, with_alpha, with_max};
///
/// let drawable = new(&[with_max(1000.0), with_alpha(150)]);
/// assert_eq!(drawable.max(), 1000.0);
/// assert_eq!(drawable.alpha(), 150);
/// ```
pub fn new(opts: &[DrawableOption]) -> Model {
    let mut config = Config::default();
    for opt in opts {
        opt.apply(&mut config);
    }
    config.create()
}
