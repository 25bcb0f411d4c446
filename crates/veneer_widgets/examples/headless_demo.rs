//! Headless walkthrough of the widget set: simulates a pointer session
//! and an OS theme flip, printing the rendered colors each frame batch.
//!
//! Run with `RUST_LOG=veneer_theme=debug` to watch the theme broadcasts.

use std::rc::Rc;

use veneer_core::events::{event_types, Event};
use veneer_platform::bridge_channel;
use veneer_theme::{ThemeContext, ThemeMode};
use veneer_widgets::{Button, ButtonVariant, ProgressBar, ToggleSwitch};

const FRAME_MS: f32 = 16.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let ctx = Rc::new(ThemeContext::with_defaults(ThemeMode::Light));
    let (bridge, pump) = bridge_channel();

    let mut button = Button::new(ctx.clone(), ButtonVariant::Primary);
    button.set_content("Install");
    button.set_on_click(|| println!("  -> click"));

    let mut toggle = ToggleSwitch::new(ctx.clone());
    toggle.set_on_checked(|| println!("  -> checked"));

    let mut bar = ProgressBar::new(ctx.clone(), 200.0);
    bar.set_value(50.0);

    println!("hover + press:");
    button.handle_event(&Event::pointer(event_types::POINTER_ENTER, 10.0, 10.0));
    button.handle_event(&Event::pointer(event_types::POINTER_DOWN, 10.0, 10.0));
    run_frames(&mut button, &mut toggle, &mut bar);

    println!("release:");
    button.handle_event(&Event::pointer(event_types::POINTER_UP, 10.0, 10.0));
    run_frames(&mut button, &mut toggle, &mut bar);

    println!("drag the toggle past the midpoint:");
    toggle.handle_event(&Event::pointer(event_types::POINTER_ENTER, 50.0, 0.0));
    toggle.handle_event(&Event::pointer(event_types::POINTER_DOWN, 50.0, 0.0));
    toggle.handle_event(&Event::pointer(event_types::POINTER_MOVE, 68.0, 0.0));
    toggle.handle_event(&Event::pointer(event_types::POINTER_UP, 68.0, 0.0));
    run_frames(&mut button, &mut toggle, &mut bar);

    println!("OS switches to dark mid-session:");
    let watcher = std::thread::spawn(move || bridge.on_theme_changed(false));
    watcher.join().unwrap();
    pump.apply_pending(&ctx);
    run_frames(&mut button, &mut toggle, &mut bar);
}

fn run_frames(button: &mut Button, toggle: &mut ToggleSwitch, bar: &mut ProgressBar) {
    let mut frames = 0;
    loop {
        let animating =
            button.update(FRAME_MS) | toggle.update(FRAME_MS) | bar.update(FRAME_MS);
        frames += 1;
        if !animating || frames > 60 {
            break;
        }
    }
    let fill = button.background();
    println!(
        "  {frames} frames, button #{:02X}{:02X}{:02X}, knob at {:.1}, bar {:.1}px",
        fill.r,
        fill.g,
        fill.b,
        toggle.indicator_offset(),
        bar.indicator_width()
    );
}
