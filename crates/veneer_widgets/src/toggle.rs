//! Themed toggle switch
//!
//! Checkbox semantics plus direct manipulation: pointer-down on the
//! indicator captures the pointer, pointer-move drags the indicator along
//! the track, and release snaps to the nearer end. The indicator offset
//! is authoritative while dragging (set directly, no animation); the snap
//! on release animates with the long duration and a decelerating curve.
//!
//! Checked/unchecked callbacks fire only on an actual flip, and a release
//! with no drag movement toggles like a click.

use std::rc::Rc;

use smallvec::smallvec;

use veneer_animation::{AnimatedScalar, Easing, LONG_MS};
use veneer_core::events::{event_types, Event, EventData};
use veneer_core::fsm::StateId;
use veneer_core::Color;
use veneer_theme::{ThemeContext, ThemeMode};

use crate::surface::{states, InteractiveSurface, LayerColors};

/// Indicator offset at the unchecked end of the track.
pub const TRACK_MIN: f32 = 3.0;

/// Indicator offset at the checked end of the track.
pub const TRACK_MAX: f32 = 23.0;

/// Release at or beyond the midpoint resolves to checked.
const TRACK_MIDPOINT: f32 = 13.0;

const LAYER_TRACK: usize = 0;
const LAYER_TRACK_BORDER: usize = 1;
const LAYER_KNOB: usize = 2;

struct OffRamp {
    track: Color,
    track_hover: Color,
    border: Color,
    border_disabled: Color,
    knob: Color,
    knob_disabled: Color,
}

const DARK_OFF: OffRamp = OffRamp {
    track: Color::from_hex(0x262626),
    track_hover: Color::from_hex(0x2E2E2E),
    border: Color::from_hex(0x9E9E9E),
    border_disabled: Color::from_hex(0x434343),
    knob: Color::from_hex(0xCCCCCC),
    knob_disabled: Color::from_hex(0x434343),
};

const LIGHT_OFF: OffRamp = OffRamp {
    track: Color::from_hex(0xF5F5F5),
    track_hover: Color::from_hex(0xEBEBEB),
    border: Color::from_hex(0x8A8A8A),
    border_disabled: Color::from_hex(0xBFBFBF),
    knob: Color::from_hex(0x5D5D5D),
    knob_disabled: Color::from_hex(0xBFBFBF),
};

const DARK_KNOB_ON: Color = Color::BLACK;
const LIGHT_KNOB_ON: Color = Color::WHITE;

fn toggle_targets(ctx: &ThemeContext, state: StateId, checked: bool) -> LayerColors {
    let (ramp, knob_on) = match ctx.mode() {
        ThemeMode::Dark => (&DARK_OFF, DARK_KNOB_ON),
        ThemeMode::Light => (&LIGHT_OFF, LIGHT_KNOB_ON),
    };

    if checked {
        let palette = ctx.current_palette();
        let fill = match state {
            states::HOVERED => palette.mouse_over,
            states::PRESSED => palette.mouse_down,
            states::DISABLED => palette.disabled,
            _ => palette.idle,
        };
        return smallvec![fill, fill, knob_on];
    }

    match state {
        states::HOVERED | states::PRESSED => {
            smallvec![ramp.track_hover, ramp.border, ramp.knob]
        }
        states::DISABLED => smallvec![ramp.track, ramp.border_disabled, ramp.knob_disabled],
        _ => smallvec![ramp.track, ramp.border, ramp.knob],
    }
}

/// A themed on/off switch with a draggable indicator.
pub struct ToggleSwitch {
    surface: InteractiveSurface,
    indicator: AnimatedScalar,
    dragging: bool,
    drag_moved: bool,
    drag_origin: f32,
    indicator_origin: f32,
    decoupled_events: bool,
    on_checked: Option<Box<dyn FnMut()>>,
    on_unchecked: Option<Box<dyn FnMut()>>,
}

impl ToggleSwitch {
    pub fn new(context: Rc<ThemeContext>) -> Self {
        let surface = InteractiveSurface::new(
            context,
            Box::new(|ctx, state, checked| toggle_targets(ctx, state, checked)),
        );
        Self {
            surface,
            indicator: AnimatedScalar::new(TRACK_MIN),
            dragging: false,
            drag_moved: false,
            drag_origin: 0.0,
            indicator_origin: TRACK_MIN,
            decoupled_events: false,
            on_checked: None,
            on_unchecked: None,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.surface.is_checked()
    }

    pub fn is_enabled(&self) -> bool {
        self.surface.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.dragging = false;
        }
        self.surface.set_enabled(enabled);
    }

    /// Suppress checked/unchecked callbacks for programmatic writes.
    pub fn set_decoupled_events(&mut self, decoupled: bool) {
        self.decoupled_events = decoupled;
    }

    pub fn set_on_checked(&mut self, callback: impl FnMut() + 'static) {
        self.on_checked = Some(Box::new(callback));
    }

    pub fn set_on_unchecked(&mut self, callback: impl FnMut() + 'static) {
        self.on_unchecked = Some(Box::new(callback));
    }

    pub fn state(&self) -> StateId {
        self.surface.state()
    }

    /// Current indicator offset along the track.
    pub fn indicator_offset(&self) -> f32 {
        self.indicator.value()
    }

    pub fn track_color(&self) -> Color {
        self.surface.layer_color(LAYER_TRACK)
    }

    pub fn border_color(&self) -> Color {
        self.surface.layer_color(LAYER_TRACK_BORDER)
    }

    pub fn knob_color(&self) -> Color {
        self.surface.layer_color(LAYER_KNOB)
    }

    /// Programmatic write. Snaps the indicator to the matching end;
    /// fires callbacks unless `decoupled_events` is set.
    pub fn set_checked(&mut self, checked: bool) {
        if self.surface.is_checked() == checked {
            return;
        }
        self.apply_checked(checked, self.decoupled_events);
        self.snap_indicator();
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event.event_type {
            event_types::POINTER_DOWN => {
                if self.surface.is_enabled() {
                    if let EventData::Pointer { x, .. } = event.data {
                        self.dragging = true;
                        self.drag_moved = false;
                        self.drag_origin = x;
                        self.indicator_origin = self.indicator.value();
                    }
                }
                self.surface.handle_event(event);
            }
            event_types::POINTER_MOVE if self.dragging => {
                if let EventData::Pointer { x, .. } = event.data {
                    let delta = x - self.drag_origin;
                    if delta != 0.0 {
                        self.drag_moved = true;
                    }
                    // The pointer is authoritative while dragging.
                    self.indicator
                        .set((self.indicator_origin + delta).clamp(TRACK_MIN, TRACK_MAX));
                }
            }
            event_types::POINTER_UP if self.dragging => {
                self.dragging = false;
                self.surface.handle_event(event);

                let checked = if self.drag_moved {
                    self.indicator.value() >= TRACK_MIDPOINT
                } else {
                    !self.surface.is_checked()
                };
                if checked != self.surface.is_checked() {
                    self.apply_checked(checked, false);
                }
                self.snap_indicator();
            }
            // The pointer is captured while dragging; a leave must not
            // abandon the drag or the press visuals.
            event_types::POINTER_LEAVE if self.dragging => {}
            _ => {
                self.surface.handle_event(event);
            }
        }
    }

    /// Advance surface and indicator transitions. Returns true while
    /// anything is animating.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        let surface_animating = self.surface.update(dt_ms);
        let indicator_animating = self.indicator.tick(dt_ms);
        surface_animating || indicator_animating
    }

    fn apply_checked(&mut self, checked: bool, suppress_events: bool) {
        self.surface.set_checked(checked);
        tracing::trace!(checked, "toggle flipped");
        if suppress_events {
            return;
        }
        let callback = if checked {
            self.on_checked.as_mut()
        } else {
            self.on_unchecked.as_mut()
        };
        if let Some(callback) = callback {
            callback();
        }
    }

    fn snap_indicator(&mut self) {
        let end = if self.surface.is_checked() {
            TRACK_MAX
        } else {
            TRACK_MIN
        };
        self.indicator.animate_to(end, LONG_MS, Easing::EaseOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn toggle() -> ToggleSwitch {
        let ctx = Rc::new(ThemeContext::with_defaults(ThemeMode::Light));
        ToggleSwitch::new(ctx)
    }

    fn settle(toggle: &mut ToggleSwitch) {
        while toggle.update(16.0) {}
    }

    fn press_drag_release(toggle: &mut ToggleSwitch, from_x: f32, to_x: f32) {
        toggle.handle_event(&Event::pointer(event_types::POINTER_ENTER, from_x, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_DOWN, from_x, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_MOVE, to_x, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_UP, to_x, 0.0));
    }

    #[test]
    fn release_past_midpoint_checks() {
        let mut toggle = toggle();
        // Indicator starts at 3.0; dragging +12 puts it at 15.0.
        press_drag_release(&mut toggle, 10.0, 22.0);
        assert!(toggle.is_checked());

        settle(&mut toggle);
        assert_eq!(toggle.indicator_offset(), TRACK_MAX);
    }

    #[test]
    fn release_before_midpoint_stays_unchecked() {
        let mut toggle = toggle();
        press_drag_release(&mut toggle, 10.0, 15.0); // indicator at 8.0
        assert!(!toggle.is_checked());

        settle(&mut toggle);
        assert_eq!(toggle.indicator_offset(), TRACK_MIN);
    }

    #[test]
    fn midpoint_tie_resolves_to_checked() {
        let mut toggle = toggle();
        press_drag_release(&mut toggle, 10.0, 20.0); // indicator exactly 13.0
        assert!(toggle.is_checked());
    }

    #[test]
    fn no_movement_release_toggles() {
        let mut toggle = toggle();
        press_drag_release(&mut toggle, 10.0, 10.0);
        assert!(toggle.is_checked());

        press_drag_release(&mut toggle, 10.0, 10.0);
        assert!(!toggle.is_checked());
    }

    #[test]
    fn events_fire_only_on_actual_flip() {
        let mut toggle = toggle();
        let fired = Rc::new(Cell::new(0u32));
        let f = fired.clone();
        toggle.set_on_unchecked(move || f.set(f.get() + 1));

        // A short drag that releases on the unchecked side is not a flip.
        press_drag_release(&mut toggle, 10.0, 14.0);
        assert!(!toggle.is_checked());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn drag_is_clamped_to_track() {
        let mut toggle = toggle();
        toggle.handle_event(&Event::pointer(event_types::POINTER_ENTER, 10.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_DOWN, 10.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_MOVE, 500.0, 0.0));
        assert_eq!(toggle.indicator_offset(), TRACK_MAX);

        toggle.handle_event(&Event::pointer(event_types::POINTER_MOVE, -500.0, 0.0));
        assert_eq!(toggle.indicator_offset(), TRACK_MIN);
    }

    #[test]
    fn leave_during_drag_keeps_the_drag_alive() {
        let mut toggle = toggle();
        toggle.handle_event(&Event::pointer(event_types::POINTER_ENTER, 10.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_DOWN, 10.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_LEAVE, 30.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_MOVE, 25.0, 0.0));
        toggle.handle_event(&Event::pointer(event_types::POINTER_UP, 25.0, 0.0));
        assert!(toggle.is_checked());
    }

    #[test]
    fn programmatic_set_snaps_indicator() {
        let mut toggle = toggle();
        toggle.set_decoupled_events(true);

        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        toggle.set_on_checked(move || f.set(true));

        toggle.set_checked(true);
        assert!(!fired.get());

        settle(&mut toggle);
        assert_eq!(toggle.indicator_offset(), TRACK_MAX);
    }
}
