//! Themed checkbox
//!
//! Layers: box fill, box border, check glyph. The checked axis selects
//! between two palette branches under the same hover/press machinery:
//! unchecked draws a hollow neutral box, checked fills it with the accent
//! palette and shows the glyph.
//!
//! Interactive toggles always fire the checked/unchecked callbacks.
//! Programmatic writes through [`Checkbox::set_checked`] fire them too
//! unless `decoupled_events` is set, which lets a backend mirror state
//! into the widget without triggering its own handlers back.

use std::rc::Rc;

use smallvec::smallvec;

use veneer_core::events::Event;
use veneer_core::fsm::StateId;
use veneer_core::Color;
use veneer_theme::{ThemeContext, ThemeMode};

use crate::surface::{states, InteractiveSurface, LayerColors};

const LAYER_FILL: usize = 0;
const LAYER_BORDER: usize = 1;
const LAYER_GLYPH: usize = 2;

struct UncheckedRamp {
    hover_fill: Color,
    pressed_fill: Color,
    border: Color,
    border_disabled: Color,
}

const DARK_UNCHECKED: UncheckedRamp = UncheckedRamp {
    hover_fill: Color::from_hex(0x2B2B2B),
    pressed_fill: Color::from_hex(0x262626),
    border: Color::from_hex(0x9E9E9E),
    border_disabled: Color::from_hex(0x434343),
};

const LIGHT_UNCHECKED: UncheckedRamp = UncheckedRamp {
    hover_fill: Color::from_hex(0xF3F3F3),
    pressed_fill: Color::from_hex(0xEBEBEB),
    border: Color::from_hex(0x8A8A8A),
    border_disabled: Color::from_hex(0xBFBFBF),
};

const DARK_GLYPH: Color = Color::BLACK;
const LIGHT_GLYPH: Color = Color::WHITE;

fn checkbox_targets(ctx: &ThemeContext, state: StateId, checked: bool) -> LayerColors {
    let (ramp, glyph) = match ctx.mode() {
        ThemeMode::Dark => (&DARK_UNCHECKED, DARK_GLYPH),
        ThemeMode::Light => (&LIGHT_UNCHECKED, LIGHT_GLYPH),
    };

    if checked {
        let palette = ctx.current_palette();
        let fill = match state {
            states::HOVERED => palette.mouse_over,
            states::PRESSED => palette.mouse_down,
            states::DISABLED => palette.disabled,
            _ => palette.idle,
        };
        // Checked boxes paint border and fill with the same color.
        return smallvec![fill, fill, glyph];
    }

    match state {
        states::HOVERED => smallvec![ramp.hover_fill, ramp.border, Color::TRANSPARENT],
        states::PRESSED => smallvec![ramp.pressed_fill, ramp.border, Color::TRANSPARENT],
        states::DISABLED => smallvec![
            Color::TRANSPARENT,
            ramp.border_disabled,
            Color::TRANSPARENT
        ],
        _ => smallvec![Color::TRANSPARENT, ramp.border, Color::TRANSPARENT],
    }
}

/// A themed two-state checkbox.
pub struct Checkbox {
    surface: InteractiveSurface,
    content: String,
    decoupled_events: bool,
    on_checked: Option<Box<dyn FnMut()>>,
    on_unchecked: Option<Box<dyn FnMut()>>,
}

impl Checkbox {
    pub fn new(context: Rc<ThemeContext>) -> Self {
        let surface = InteractiveSurface::new(
            context,
            Box::new(|ctx, state, checked| checkbox_targets(ctx, state, checked)),
        );
        Self {
            surface,
            content: String::new(),
            decoupled_events: false,
            on_checked: None,
            on_unchecked: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn is_checked(&self) -> bool {
        self.surface.is_checked()
    }

    pub fn is_enabled(&self) -> bool {
        self.surface.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
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

    pub fn fill_color(&self) -> Color {
        self.surface.layer_color(LAYER_FILL)
    }

    pub fn border_color(&self) -> Color {
        self.surface.layer_color(LAYER_BORDER)
    }

    pub fn glyph_color(&self) -> Color {
        self.surface.layer_color(LAYER_GLYPH)
    }

    /// Programmatic write. Animates onto the other branch; fires
    /// callbacks unless `decoupled_events` is set.
    pub fn set_checked(&mut self, checked: bool) {
        if self.surface.is_checked() == checked {
            return;
        }
        self.apply_checked(checked, self.decoupled_events);
    }

    /// Returns true when the event completed a click (and toggled).
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let response = self.surface.handle_event(event);
        if response.clicked {
            let checked = !self.surface.is_checked();
            self.apply_checked(checked, false);
        }
        response.clicked
    }

    /// Advance layer transitions. Returns true while animating.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        self.surface.update(dt_ms)
    }

    fn apply_checked(&mut self, checked: bool, suppress_events: bool) {
        self.surface.set_checked(checked);
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
}
