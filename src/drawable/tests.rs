//! Tests for the drawable component.

use super::*;
use crate::color::Color;
use crate::geometry::{FillMode, Rect};
use crate::picker::ColorPicker;
use bubbletea_rs::Msg;
use lipgloss_extras::lipgloss::{set_color_profile, ColorProfileKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn counting_callback(model: &mut Model) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&count);
    model.set_callback(Some(Arc::new(move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })));
    count
}

fn frame(model: &Model) -> Msg {
    Box::new(FrameMsg {
        id: model.id,
        tag: model.tag,
    }) as Msg
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_config_defaults() {
    let d = Config::new().create();

    assert_eq!(d.max(), 100.0);
    assert_eq!(d.mode(), FillMode::Horizontal);
    assert_eq!(d.duration(), Duration::from_millis(1000));
    assert_eq!(d.alpha(), 255);
    assert_eq!(**d.color_picker(), ColorPicker::default());
    assert_eq!(d.progress(), 0.0);
    assert_eq!(d.shown_progress(), 0.0);
    assert!(d.color_filter().is_none());
    assert!(!d.is_animating());
}

#[test]
fn test_config_builder_chain() {
    let d = Config::new()
        .max(1000.0)
        .mode(FillMode::Full)
        .duration(Duration::from_millis(5000))
        .alpha(150)
        .create();

    assert_eq!(d.max(), 1000.0);
    assert_eq!(d.mode(), FillMode::Full);
    assert_eq!(d.duration(), Duration::from_secs(5));
    assert_eq!(d.alpha(), 150);
}

#[test]
fn test_new_with_options() {
    let picker = Arc::new(ColorPicker::new(&[0.0, 1.0], &[Color::RED, Color::GREEN]).unwrap());
    let d = new(&[
        with_max(10.0),
        with_mode(FillMode::Vertical),
        with_color_picker(Arc::clone(&picker)),
        with_duration(Duration::from_millis(250)),
        with_alpha(0),
    ]);

    assert_eq!(d.max(), 10.0);
    assert_eq!(d.mode(), FillMode::Vertical);
    assert!(Arc::ptr_eq(d.color_picker(), &picker));
    assert_eq!(d.duration(), Duration::from_millis(250));
    assert_eq!(d.alpha(), 0);
}

#[test]
fn test_drawables_from_one_config_share_picker() {
    let config = Config::new().max(1000.0).alpha(150);
    let a = config.create();
    let b = config.create();

    assert!(Arc::ptr_eq(a.color_picker(), b.color_picker()));
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_duration_millis_saturate() {
    assert_eq!(options::as_millis(Duration::from_millis(1500)), 1500);
    assert_eq!(options::as_millis(Duration::MAX), u64::MAX);
    assert_eq!(Config::new().duration(Duration::MAX).duration_ms, u64::MAX);
}

#[test]
fn test_create_replaces_invalid_max() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        assert_eq!(Config::new().max(bad).create().max(), 100.0);
    }
}

#[test]
fn test_set_progress_clamps_target() {
    let mut d = Config::new().create();

    std::mem::drop(d.set_progress(-50.0));
    assert_eq!(d.progress(), 0.0);

    std::mem::drop(d.set_progress(500.0));
    assert_eq!(d.progress(), 100.0);

    std::mem::drop(d.set_progress(42.0));
    assert_eq!(d.progress(), 42.0);

    std::mem::drop(d.set_progress(f64::NAN));
    assert_eq!(d.progress(), 0.0);
}

#[test]
fn test_set_progress_starts_transition_without_moving_shown() {
    let mut d = Config::new().create();
    let original_tag = d.tag;

    std::mem::drop(d.set_progress(60.0));

    assert_eq!(d.tag, original_tag + 1);
    assert!(d.is_animating());
    assert_eq!(d.shown_progress(), 0.0);
}

#[test]
fn test_tick_at_interpolates_linearly() {
    let mut d = Config::new().create();
    let redraws = counting_callback(&mut d);

    std::mem::drop(d.set_progress(80.0));
    let started = d.transition.unwrap().started();

    assert!(d.tick_at(started + Duration::from_millis(250)));
    assert_close(d.shown_progress(), 20.0);

    assert!(d.tick_at(started + Duration::from_millis(500)));
    assert_close(d.shown_progress(), 40.0);

    assert!(!d.tick_at(started + Duration::from_millis(1000)));
    assert_eq!(d.shown_progress(), 80.0);
    assert!(!d.is_animating());

    assert_eq!(redraws.load(Ordering::SeqCst), 3);

    // Nothing left to advance
    assert!(!d.tick_at(started + Duration::from_millis(2000)));
    assert_eq!(redraws.load(Ordering::SeqCst), 3);
}

#[test]
fn test_new_transition_starts_from_shown_value() {
    let mut d = Config::new().create();
    std::mem::drop(d.set_progress(100.0));
    let started = d.transition.unwrap().started();
    d.tick_at(started + Duration::from_millis(500));
    assert_close(d.shown_progress(), 50.0);

    std::mem::drop(d.set_progress(0.0));
    let transition = d.transition.unwrap();
    assert_close(transition.from(), 50.0);
    assert_eq!(transition.to(), 0.0);
}

#[test]
fn test_set_progress_immediate() {
    let mut d = Config::new().create();
    let redraws = counting_callback(&mut d);

    d.set_progress_immediate(30.0);

    assert_eq!(d.progress(), 30.0);
    assert_eq!(d.shown_progress(), 30.0);
    assert_eq!(redraws.load(Ordering::SeqCst), 1);
    assert!(!d.is_animating());
}

#[test]
fn test_set_progress_immediate_does_not_clamp() {
    let mut d = Config::new().create();
    d.set_progress_immediate(250.0);
    assert_eq!(d.progress(), 250.0);
    assert_eq!(d.shown_progress(), 250.0);
}

#[test]
fn test_set_progress_immediate_cancels_running_transition() {
    let mut d = Config::new().create();
    std::mem::drop(d.set_progress(100.0));
    let stale = frame(&d);

    d.set_progress_immediate(10.0);

    assert!(d.update(stale).is_none());
    assert_eq!(d.shown_progress(), 10.0);
    assert!(!d.is_animating());
}

#[test]
fn test_immediate_then_animated_matches_scan_sequence() {
    let mut d = Config::new()
        .mode(FillMode::Full)
        .max(1000.0)
        .duration(Duration::from_millis(5000))
        .create();

    d.set_progress_immediate(1000.0);
    std::mem::drop(d.set_progress(0.0));

    let transition = d.transition.unwrap();
    assert_eq!(transition.from(), 1000.0);
    assert_eq!(transition.to(), 0.0);
    assert_eq!(transition.duration(), Duration::from_secs(5));
}

#[test]
fn test_update_with_current_frame_advances() {
    let mut d = Config::new().duration(Duration::from_secs(3600)).create();
    let redraws = counting_callback(&mut d);
    std::mem::drop(d.set_progress(50.0));

    let next = d.update(frame(&d));

    assert!(next.is_some());
    assert!(d.is_animating());
    assert_eq!(redraws.load(Ordering::SeqCst), 1);
}

#[test]
fn test_update_with_zero_duration_finishes_on_first_frame() {
    let mut d = Config::new().duration(Duration::ZERO).create();
    std::mem::drop(d.set_progress(75.0));

    assert!(d.update(frame(&d)).is_none());
    assert_eq!(d.shown_progress(), 75.0);
    assert!(!d.is_animating());
}

#[test]
fn test_update_with_wrong_id() {
    let mut d = Config::new().create();
    std::mem::drop(d.set_progress(50.0));

    let wrong = FrameMsg {
        id: d.id + 999,
        tag: d.tag,
    };

    assert!(d.update(Box::new(wrong)).is_none());
    assert_eq!(d.shown_progress(), 0.0);
}

#[test]
fn test_update_drops_frames_of_superseded_transition() {
    let mut d = Config::new().duration(Duration::ZERO).create();
    let redraws = counting_callback(&mut d);

    std::mem::drop(d.set_progress(90.0));
    let stale = frame(&d);
    std::mem::drop(d.set_progress(10.0));

    assert!(d.update(stale).is_none());
    assert_eq!(d.shown_progress(), 0.0);
    assert_eq!(redraws.load(Ordering::SeqCst), 0);

    assert!(d.update(frame(&d)).is_none());
    assert_eq!(d.shown_progress(), 10.0);
    assert_eq!(redraws.load(Ordering::SeqCst), 1);
}

#[test]
fn test_update_ignores_other_messages() {
    let mut d = Config::new().create();
    std::mem::drop(d.set_progress(50.0));

    assert!(d.update(Box::new("not a frame") as Msg).is_none());
    assert_eq!(d.shown_progress(), 0.0);
}

#[test]
fn test_render_horizontal() {
    let mut d = Config::new().mode(FillMode::Horizontal).create();
    d.set_progress_immediate(25.0);

    let cmd = d.render(Rect::new(0.0, 0.0, 200.0, 50.0));
    assert_eq!(cmd.rect, Rect::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(cmd.alpha, 255);
}

#[test]
fn test_render_vertical() {
    let mut d = Config::new().mode(FillMode::Vertical).create();
    d.set_progress_immediate(40.0);

    let cmd = d.render(Rect::new(0.0, 100.0, 50.0, 200.0));
    assert_eq!(cmd.rect.left, 0.0);
    assert_close(cmd.rect.top, 160.0);
    assert_eq!(cmd.rect.right, 50.0);
    assert_eq!(cmd.rect.bottom, 200.0);
}

#[test]
fn test_render_full_only_changes_color() {
    let mut d = Config::new().mode(FillMode::Full).create();
    let bounds = Rect::new(5.0, 5.0, 95.0, 45.0);

    d.set_progress_immediate(0.0);
    let empty = d.render(bounds);
    d.set_progress_immediate(100.0);
    let full = d.render(bounds);

    assert_eq!(empty.rect, bounds);
    assert_eq!(full.rect, bounds);
    assert_eq!(empty.color, Color::RED);
    assert_eq!(full.color, Color::GREEN);
}

#[test]
fn test_render_color_uses_ratio_of_max() {
    let mut d = Config::new().max(1000.0).create();
    d.set_progress_immediate(500.0);

    assert_eq!(d.render(Rect::new(0.0, 0.0, 10.0, 10.0)).color, Color::YELLOW);
}

#[test]
fn test_render_is_idempotent() {
    let mut d = Config::new().create();
    d.set_progress_immediate(33.0);
    d.set_color_filter(Some(ColorFilter::Tint(Color::BLACK)));
    let bounds = Rect::new(0.0, 0.0, 120.0, 30.0);

    assert_eq!(d.render(bounds), d.render(bounds));
}

#[test]
fn test_render_keeps_overshoot_inside_bounds() {
    let mut d = Config::new().create();
    d.set_progress_immediate(250.0);
    let bounds = Rect::new(0.0, 0.0, 100.0, 10.0);

    let cmd = d.render(bounds);
    assert_eq!(cmd.rect, bounds);
    assert_eq!(cmd.color, Color::GREEN);
}

#[test]
fn test_set_max_ignores_invalid_values() {
    let mut d = Config::new().create();

    d.set_max(0.0);
    d.set_max(-1.0);
    d.set_max(f64::NAN);
    assert_eq!(d.max(), 100.0);

    d.set_max(1000.0);
    assert_eq!(d.max(), 1000.0);
}

#[test]
fn test_set_progress_clamps_to_new_max() {
    let mut d = Config::new().create();
    d.set_max(10.0);
    std::mem::drop(d.set_progress(50.0));
    assert_eq!(d.progress(), 10.0);
}

#[test]
fn test_set_duration_applies_to_next_transition() {
    let mut d = Config::new().create();
    d.set_duration(Duration::from_millis(200));
    assert_eq!(d.duration(), Duration::from_millis(200));

    std::mem::drop(d.set_progress(1.0));
    assert_eq!(d.transition.unwrap().duration(), Duration::from_millis(200));
}

#[test]
fn test_opacity_follows_alpha() {
    let mut d = Config::new().create();
    assert_eq!(d.opacity(), Opacity::Opaque);

    d.set_alpha(128);
    assert_eq!(d.opacity(), Opacity::Translucent);

    d.set_alpha(0);
    assert_eq!(d.opacity(), Opacity::Transparent);
}

#[test]
fn test_color_filter_passes_through() {
    let mut d = Config::new().create();
    d.set_progress_immediate(100.0);
    let bounds = Rect::new(0.0, 0.0, 1.0, 1.0);

    assert_eq!(d.render(bounds).filtered_color(), Color::GREEN);

    let lighting = ColorFilter::Lighting {
        mul: Color::rgb(255, 128, 255),
        add: Color::rgb(10, 0, 0),
    };
    d.set_color_filter(Some(lighting));
    let cmd = d.render(bounds);
    assert_eq!(cmd.color, Color::GREEN);
    assert_eq!(cmd.color_filter, Some(lighting));
    assert_eq!(cmd.filtered_color(), Color::rgb(10, 128, 0));

    d.set_color_filter(Some(ColorFilter::Tint(Color::YELLOW)));
    assert_eq!(d.render(bounds).filtered_color(), Color::YELLOW);

    d.set_color_filter(None);
    assert!(d.render(bounds).color_filter.is_none());
}

#[test]
fn test_view_dimensions() {
    let mut d = Config::new().alpha(0).create();
    d.width = 12;
    d.height = 3;
    d.set_progress_immediate(50.0);

    // Transparent: blank cells only, no styling
    let view = d.view();
    assert_eq!(view, vec![" ".repeat(12); 3].join("\n"));

    d.width = 0;
    assert_eq!(d.view(), "");
}

#[test]
fn test_view_empty_progress_is_blank() {
    let mut d = Config::new().create();
    d.width = 8;
    assert_eq!(d.view(), " ".repeat(8));
}

#[test]
fn test_view_horizontal_paints_left_half() {
    set_color_profile(ColorProfileKind::TrueColor);
    let mut d = Config::new().create();
    d.width = 8;
    d.set_progress_immediate(50.0);

    // Yellow at 50%: four styled cells, then four blank ones
    assert_eq!(d.view(), "\u{1b}[48;2;255;255;0m    \u{1b}[0m    ");
}

#[test]
fn test_view_vertical_paints_bottom_rows() {
    set_color_profile(ColorProfileKind::TrueColor);
    let mut d = Config::new().mode(FillMode::Vertical).create();
    d.width = 2;
    d.height = 4;
    d.set_progress_immediate(50.0);

    let view = d.view();
    let rows: Vec<&str> = view.split('\n').collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], "  ");
    assert_eq!(rows[1], "  ");
    for row in &rows[2..] {
        assert!(row.contains("48;2;255;255;0"), "row should be filled: {row:?}");
        assert!(row.contains("  "));
    }
}

#[test]
fn test_debug_omits_callback() {
    let mut d = Config::new().create();
    counting_callback(&mut d);
    let debug = format!("{d:?}");
    assert!(debug.contains("has_callback: true"));
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: Config = serde_json::from_str(
        r##"{
            "mode": "vertical",
            "duration_ms": 250,
            "color_picker": [
                { "breakpoint": 0.0, "color": "#000000" },
                { "breakpoint": 1.0, "color": "#ffffff" }
            ]
        }"##,
    )
    .unwrap();

    assert_eq!(config.max, 100.0);
    assert_eq!(config.alpha, 255);
    assert_eq!(config.mode, FillMode::Vertical);

    let d = config.create();
    assert_eq!(d.duration(), Duration::from_millis(250));
    assert_eq!(
        d.color_picker().get_color(0.5),
        Color::rgb(127, 127, 127)
    );
}

#[test]
fn test_config_rejects_empty_picker() {
    let result = serde_json::from_str::<Config>(r#"{ "color_picker": [] }"#);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_frame_command_round_trip() {
    let mut d = Config::new().duration(Duration::ZERO).create();
    let cmd = d.set_progress(60.0);

    let msg = cmd.await.expect("tick should produce a frame message");
    assert!(d.update(msg).is_none());
    assert_eq!(d.shown_progress(), 60.0);
}
