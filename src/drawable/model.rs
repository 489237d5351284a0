//! The drawable model: progress state, transitions and rendering.

use super::options::{as_millis, Config};
use super::types::{ColorFilter, DrawCommand, FrameMsg, Invalidate, Opacity};
use crate::geometry::{FillMode, Rect};
use crate::picker::ColorPicker;
use crate::transition::Transition;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// Internal ID management for drawable instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const FPS: u32 = 60;
const DEFAULT_WIDTH: u16 = 40;
const DEFAULT_HEIGHT: u16 = 1;

/// A background progress drawable.
///
/// The drawable keeps two progress values. The *target* is what the caller
/// last asked for; the *shown* value is what gets painted and walks toward
/// the target over [`duration`](Model::duration) whenever
/// [`set_progress`](Model::set_progress) is called. Both the fill color and,
/// outside [`FillMode::Full`], the size of the fill follow the shown value.
///
/// Only one transition runs at a time. Starting a new one, or jumping with
/// [`set_progress_immediate`](Model::set_progress_immediate), bumps an
/// internal tag so frames scheduled for the old transition are ignored.
///
/// ```rust
/// use background_progress::drawable::Config;
/// use background_progress::geometry::{FillMode, Rect};
///
/// let mut drawable = Config::new().mode(FillMode::Horizontal).create();
/// drawable.set_progress_immediate(25.0);
///
/// let cmd = drawable.render(Rect::new(0.0, 0.0, 200.0, 50.0));
/// assert_eq!(cmd.rect, Rect::new(0.0, 0.0, 50.0, 50.0));
/// ```
#[derive(Clone)]
pub struct Model {
    /// An identifier to keep us from receiving frames intended for other
    /// drawables.
    pub(crate) id: i64,

    /// Transition generation; frames carrying an older tag are stale.
    pub(crate) tag: i64,

    /// Columns used by the terminal preview in [`Model::view`].
    pub width: u16,
    /// Rows used by the terminal preview in [`Model::view`].
    pub height: u16,

    pub(crate) mode: FillMode,
    pub(crate) max: f64,
    pub(crate) target: f64, // progress we're animating to
    pub(crate) shown: f64,  // progress currently painted
    pub(crate) alpha: u8,
    pub(crate) duration: Duration,
    pub(crate) color_picker: Arc<ColorPicker>,
    pub(crate) color_filter: Option<ColorFilter>,
    pub(crate) transition: Option<Transition>,
    pub(crate) callback: Option<Arc<dyn Invalidate>>,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("mode", &self.mode)
            .field("max", &self.max)
            .field("target", &self.target)
            .field("shown", &self.shown)
            .field("alpha", &self.alpha)
            .field("duration", &self.duration)
            .field("transition", &self.transition)
            .field("has_callback", &self.callback.is_some())
            .finish_non_exhaustive()
    }
}

impl Model {
    pub(crate) fn from_parts(
        mode: FillMode,
        max: f64,
        color_picker: Arc<ColorPicker>,
        alpha: u8,
        duration: Duration,
    ) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode,
            max,
            target: 0.0,
            shown: 0.0,
            alpha,
            duration,
            color_picker,
            color_filter: None,
            transition: None,
            callback: None,
        }
    }

    /// Identifier carried by this drawable's frame messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Target progress, i.e. the value last set by the caller.
    pub fn progress(&self) -> f64 {
        self.target
    }

    /// Progress currently painted. Differs from [`Model::progress`] while a
    /// transition runs.
    pub fn shown_progress(&self) -> f64 {
        self.shown
    }

    /// Sets the target progress and starts a transition toward it.
    ///
    /// `value` is clamped to `0..=max`; NaN counts as 0. Any transition still
    /// running is abandoned and the new one starts from the currently shown
    /// value. The returned command delivers the first [`FrameMsg`]; return it
    /// from your `update` so the runtime schedules it.
    pub fn set_progress(&mut self, value: f64) -> Cmd {
        let value = if value.is_nan() { 0.0 } else { value };
        self.target = value.clamp(0.0, self.max);
        self.tag += 1;

        if self.transition.is_some() {
            tracing::debug!(id = self.id, tag = self.tag, "superseding running transition");
        }
        tracing::debug!(
            id = self.id,
            tag = self.tag,
            from = self.shown,
            to = self.target,
            duration_ms = as_millis(self.duration),
            "starting progress transition"
        );

        self.transition = Some(Transition::new(
            self.shown,
            self.target,
            self.duration,
            Instant::now(),
        ));
        self.next_frame()
    }

    /// Sets target and shown progress to `value` at once and requests one
    /// repaint.
    ///
    /// The value is taken as is, without clamping. A running transition is
    /// cancelled.
    pub fn set_progress_immediate(&mut self, value: f64) {
        self.tag += 1;
        self.transition = None;
        self.target = value;
        self.shown = value;
        self.invalidate_self();
    }

    /// Upper bound of progress.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the upper bound of progress.
    ///
    /// Values that are not positive and finite are ignored. Progress already
    /// set is not rescaled; rendering clamps the fill to the bounds.
    pub fn set_max(&mut self, max: f64) {
        if !(max.is_finite() && max > 0.0) {
            tracing::warn!(id = self.id, max, "ignoring invalid maximum");
            return;
        }
        self.max = max;
    }

    /// Length of progress transitions.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sets the length of future progress transitions.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Current fill mode.
    pub fn mode(&self) -> FillMode {
        self.mode
    }

    /// Changes the fill mode.
    pub fn set_mode(&mut self, mode: FillMode) {
        self.mode = mode;
    }

    /// Fill alpha.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Sets the fill alpha.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    /// Color filter attached to draw commands.
    pub fn color_filter(&self) -> Option<ColorFilter> {
        self.color_filter
    }

    /// Sets or clears the color filter.
    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.color_filter = filter;
    }

    /// Opacity class derived from the alpha.
    pub fn opacity(&self) -> Opacity {
        Opacity::from_alpha(self.alpha)
    }

    /// The color picker, shared with other drawables built from the same
    /// config.
    pub fn color_picker(&self) -> &Arc<ColorPicker> {
        &self.color_picker
    }

    /// Registers the repaint callback, replacing any previous one.
    pub fn set_callback(&mut self, callback: Option<Arc<dyn Invalidate>>) {
        self.callback = callback;
    }

    /// Whether a transition is running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Computes what to paint inside `bounds`.
    ///
    /// The color is looked up with `shown / max`. The fill rectangle uses the
    /// same ratio clamped to `0..=1`, so the fill never leaves `bounds`. This
    /// method is pure: the same state and bounds give the same command.
    pub fn render(&self, bounds: Rect) -> DrawCommand {
        let ratio = self.shown / self.max;
        DrawCommand {
            rect: self.mode.fill_rect(bounds, ratio.clamp(0.0, 1.0)),
            color: self.color_picker.get_color(ratio),
            alpha: self.alpha,
            color_filter: self.color_filter,
        }
    }

    /// Advances the running transition to `now` and requests a repaint.
    ///
    /// Returns `true` while the transition still has frames to go. Hosts
    /// with their own clock can call this directly instead of routing
    /// [`FrameMsg`]s through [`Model::update`].
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        self.shown = transition.value_at(now);
        self.invalidate_self();

        if transition.is_finished(now) {
            tracing::debug!(id = self.id, tag = self.tag, shown = self.shown, "transition finished");
            self.transition = None;
            return false;
        }
        true
    }

    /// Handles [`FrameMsg`]s for this drawable.
    ///
    /// Returns the command for the next frame while the transition runs, and
    /// `None` once it is done or when `msg` is not a current frame of this
    /// drawable.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let frame = msg.downcast_ref::<FrameMsg>()?;
        if frame.id != self.id || frame.tag != self.tag {
            tracing::trace!(
                id = self.id,
                frame_id = frame.id,
                frame_tag = frame.tag,
                tag = self.tag,
                "dropping stale frame"
            );
            return None;
        }

        if self.tick_at(Instant::now()) {
            Some(self.next_frame())
        } else {
            None
        }
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

        bubbletea_tick(duration, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }

    fn invalidate_self(&self) {
        if let Some(callback) = &self.callback {
            callback.invalidate();
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Config::default().create(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        Config::default().create()
    }
}
