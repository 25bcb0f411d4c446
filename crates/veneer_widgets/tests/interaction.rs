//! End-to-end widget scenarios: full interaction cycles against a live
//! theme context, including mid-flight theme changes and the
//! disable/enable race.

use std::cell::Cell;
use std::rc::Rc;

use veneer_core::events::{event_types, Event, KeyCode};
use veneer_theme::{AccentTable, ThemeContext, ThemeMode};
use veneer_widgets::{states, Button, ButtonVariant, ProgressBar, ToggleSwitch};

fn context(mode: ThemeMode) -> Rc<ThemeContext> {
    Rc::new(ThemeContext::with_defaults(mode))
}

fn pointer(event_type: veneer_core::events::EventType) -> Event {
    Event::pointer(event_type, 0.0, 0.0)
}

fn settle_button(button: &mut Button) {
    while button.update(16.0) {}
}

#[test]
fn full_pointer_cycle_fires_one_click() {
    let ctx = context(ThemeMode::Light);
    let palette = ctx.current_palette();
    let mut button = Button::new(ctx, ButtonVariant::Primary);

    let clicks = Rc::new(Cell::new(0u32));
    let counter = clicks.clone();
    button.set_on_click(move || counter.set(counter.get() + 1));

    button.handle_event(&pointer(event_types::POINTER_ENTER));
    assert_eq!(button.state(), states::HOVERED);

    button.handle_event(&pointer(event_types::POINTER_DOWN));
    assert_eq!(button.state(), states::PRESSED);

    button.handle_event(&pointer(event_types::POINTER_UP));
    assert_eq!(clicks.get(), 1);
    assert_eq!(button.state(), states::HOVERED);

    button.handle_event(&pointer(event_types::POINTER_LEAVE));
    settle_button(&mut button);
    assert_eq!(button.background(), palette.idle);
}

#[test]
fn drag_out_suppresses_click() {
    let ctx = context(ThemeMode::Light);
    let mut button = Button::new(ctx, ButtonVariant::Primary);

    let clicks = Rc::new(Cell::new(0u32));
    let counter = clicks.clone();
    button.set_on_click(move || counter.set(counter.get() + 1));

    button.handle_event(&pointer(event_types::POINTER_ENTER));
    button.handle_event(&pointer(event_types::POINTER_DOWN));
    button.handle_event(&pointer(event_types::POINTER_LEAVE));

    assert_eq!(clicks.get(), 0);
    assert_eq!(button.state(), states::IDLE);
}

#[test]
fn disable_enable_race_converges_to_idle() {
    let ctx = context(ThemeMode::Light);
    let palette = ctx.current_palette();
    let mut button = Button::new(ctx, ButtonVariant::Primary);

    // Both calls land before any transition completes.
    button.set_enabled(false);
    button.set_enabled(true);

    settle_button(&mut button);
    assert_eq!(button.state(), states::IDLE);
    assert_eq!(button.background(), palette.idle);
    assert_eq!(button.border_color(), palette.idle_border);
}

#[test]
fn space_key_click_requires_self_origin() {
    let ctx = context(ThemeMode::Light);
    let mut button = Button::new(ctx, ButtonVariant::Primary);

    let clicks = Rc::new(Cell::new(0u32));
    let counter = clicks.clone();
    button.set_on_click(move || counter.set(counter.get() + 1));

    // Bubbled from a descendant: ignored.
    button.handle_event(&Event::key(event_types::KEY_DOWN, KeyCode::SPACE, false));
    button.handle_event(&Event::key(event_types::KEY_UP, KeyCode::SPACE, false));
    assert_eq!(clicks.get(), 0);

    button.handle_event(&Event::key(event_types::KEY_DOWN, KeyCode::SPACE, true));
    assert_eq!(button.state(), states::PRESSED);
    button.handle_event(&Event::key(event_types::KEY_UP, KeyCode::SPACE, true));
    assert_eq!(clicks.get(), 1);
    assert_eq!(button.state(), states::IDLE);
}

#[test]
fn mode_flip_mid_hover_is_continuous_and_converges() {
    let ctx = context(ThemeMode::Light);
    let mut button = Button::new(ctx.clone(), ButtonVariant::Primary);

    button.handle_event(&pointer(event_types::POINTER_ENTER));
    button.update(20.0);
    let rendered = button.background();

    ctx.set_dark_mode(true);

    // The retarget picks up from the rendered color, no snap.
    button.update(0.0);
    assert_eq!(button.background(), rendered);

    settle_button(&mut button);
    assert_eq!(button.background(), ctx.current_palette().mouse_over);
}

#[test]
fn accent_change_rethemes_resting_widgets() {
    let ctx = context(ThemeMode::Light);
    let mut button = Button::new(ctx.clone(), ButtonVariant::Primary);
    let before = button.background();

    let mut bytes = *AccentTable::default().as_bytes();
    bytes[16] = 0xF7;
    bytes[17] = 0x63;
    bytes[18] = 0x0C;
    ctx.set_accent(AccentTable::from_bytes(&bytes).unwrap());

    settle_button(&mut button);
    assert_ne!(button.background(), before);
    assert_eq!(button.background(), ctx.current_palette().idle);
}

#[test]
fn toggle_drag_release_is_deterministic_at_the_midpoint() {
    for (delta, expect_checked) in [(9.9, false), (10.0, true), (10.1, true)] {
        let mut toggle = ToggleSwitch::new(context(ThemeMode::Light));

        // Indicator starts at 3.0; the midpoint 13.0 is 10.0 away.
        toggle.handle_event(&Event::pointer(event_types::POINTER_ENTER, 50.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_DOWN, 50.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_MOVE, 50.0 + delta, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_UP, 50.0 + delta, 0.0));

        assert_eq!(toggle.is_checked(), expect_checked, "delta {delta}");
    }
}

#[test]
fn toggle_flip_fires_exactly_one_event() {
    let mut toggle = ToggleSwitch::new(context(ThemeMode::Light));

    let checks = Rc::new(Cell::new(0u32));
    let counter = checks.clone();
    toggle.set_on_checked(move || counter.set(counter.get() + 1));

    toggle.handle_event(&Event::pointer(event_types::POINTER_ENTER, 50.0, 0.0));
    toggle.handle_event(&Event::pointer(event_types::POINTER_DOWN, 50.0, 0.0));
    toggle.handle_event(&Event::pointer(event_types::POINTER_MOVE, 70.0, 0.0));
    toggle.handle_event(&Event::pointer(event_types::POINTER_UP, 70.0, 0.0));

    assert!(toggle.is_checked());
    assert_eq!(checks.get(), 1);
}

#[test]
fn progress_half_of_hundred_on_200_track_is_101() {
    let mut bar = ProgressBar::new(context(ThemeMode::Light), 200.0);
    bar.set_maximum(100.0);
    bar.set_value(50.0);

    while bar.update(16.0) {}
    assert_eq!(bar.indicator_width(), 101.0);
}

#[test]
fn indeterminate_sweep_ignores_value() {
    let mut bar = ProgressBar::new(context(ThemeMode::Light), 200.0);
    bar.set_indeterminate(true);
    bar.set_value(75.0);

    bar.update(250.0);
    let quarter = bar.sweep_position();
    assert!((quarter - 0.35).abs() < 1e-3);

    bar.update(500.0);
    assert!((bar.sweep_position() - 0.65).abs() < 1e-3);
}

#[test]
fn dropped_widget_stops_observing() {
    let ctx = context(ThemeMode::Light);
    let button = Button::new(ctx.clone(), ButtonVariant::Primary);
    drop(button);

    // A broadcast after the widget is gone must not call into it.
    ctx.set_dark_mode(true);
    assert!(ctx.is_dark_mode());
}
