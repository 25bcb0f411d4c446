//! Accent and neutral buttons
//!
//! Three layers: fill, border, text. The `Primary` variant draws its fill
//! from the accent palette; `Secondary` uses a fixed neutral ramp per
//! mode. Text colors are fixed per mode rather than accent-derived, with
//! dedicated pressed and disabled shades.

use std::rc::Rc;

use smallvec::smallvec;

use veneer_core::events::Event;
use veneer_core::fsm::StateId;
use veneer_core::Color;
use veneer_theme::{ThemeContext, ThemeMode};

use crate::surface::{states, InteractiveSurface, LayerColors};

const LAYER_FILL: usize = 0;
const LAYER_BORDER: usize = 1;
const LAYER_TEXT: usize = 2;

// Text shades per mode. The dark-mode accent fill is light, so idle text
// is near-black; light-mode accent fill is dark, so idle text is white.
const DARK_TEXT: Color = Color::BLACK;
const DARK_TEXT_PRESSED: Color = Color::from_hex(0x2D2D2D);
const DARK_TEXT_DISABLED: Color = Color::from_hex(0xA7A7A7);
const LIGHT_TEXT: Color = Color::WHITE;
const LIGHT_TEXT_PRESSED: Color = Color::from_hex(0xEBEBEB);
const LIGHT_TEXT_DISABLED: Color = Color::WHITE;

/// Fixed neutral ramp for the secondary variant.
struct NeutralRamp {
    idle: Color,
    idle_border: Color,
    mouse_over: Color,
    mouse_down: Color,
    disabled: Color,
    text: Color,
    text_pressed: Color,
    text_disabled: Color,
}

const DARK_NEUTRAL: NeutralRamp = NeutralRamp {
    idle: Color::from_hex(0x2D2D2D),
    idle_border: Color::from_hex(0x353535),
    mouse_over: Color::from_hex(0x323232),
    mouse_down: Color::from_hex(0x272727),
    disabled: Color::from_hex(0x2D2D2D),
    text: Color::WHITE,
    text_pressed: Color::from_hex(0xCECECE),
    text_disabled: Color::from_hex(0x787878),
};

const LIGHT_NEUTRAL: NeutralRamp = NeutralRamp {
    idle: Color::from_hex(0xFBFBFB),
    idle_border: Color::from_hex(0xE5E5E5),
    mouse_over: Color::from_hex(0xF6F6F6),
    mouse_down: Color::from_hex(0xF5F5F5),
    disabled: Color::from_hex(0xF5F5F5),
    text: Color::from_hex(0x1A1A1A),
    text_pressed: Color::from_hex(0x5D5D5D),
    text_disabled: Color::from_hex(0x9D9D9D),
};

/// Button fill source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Accent-colored, for the dominant action.
    Primary,
    /// Neutral, for everything else.
    Secondary,
}

impl ButtonVariant {
    fn targets(self, ctx: &ThemeContext, state: StateId) -> LayerColors {
        match self {
            ButtonVariant::Primary => primary_targets(ctx, state),
            ButtonVariant::Secondary => secondary_targets(ctx, state),
        }
    }
}

fn primary_targets(ctx: &ThemeContext, state: StateId) -> LayerColors {
    let palette = ctx.current_palette();
    let (text, text_pressed, text_disabled) = match ctx.mode() {
        ThemeMode::Dark => (DARK_TEXT, DARK_TEXT_PRESSED, DARK_TEXT_DISABLED),
        ThemeMode::Light => (LIGHT_TEXT, LIGHT_TEXT_PRESSED, LIGHT_TEXT_DISABLED),
    };

    match state {
        states::HOVERED => smallvec![palette.mouse_over, palette.mouse_over_border, text],
        states::PRESSED => smallvec![palette.mouse_down, palette.mouse_down_border, text_pressed],
        states::DISABLED => smallvec![palette.disabled, palette.disabled_border, text_disabled],
        _ => smallvec![palette.idle, palette.idle_border, text],
    }
}

fn secondary_targets(ctx: &ThemeContext, state: StateId) -> LayerColors {
    let ramp = match ctx.mode() {
        ThemeMode::Dark => &DARK_NEUTRAL,
        ThemeMode::Light => &LIGHT_NEUTRAL,
    };

    match state {
        states::HOVERED => smallvec![ramp.mouse_over, ramp.idle_border, ramp.text],
        states::PRESSED => smallvec![ramp.mouse_down, ramp.idle_border, ramp.text_pressed],
        states::DISABLED => smallvec![ramp.disabled, ramp.idle_border, ramp.text_disabled],
        _ => smallvec![ramp.idle, ramp.idle_border, ramp.text],
    }
}

/// A themed push button.
pub struct Button {
    surface: InteractiveSurface,
    content: String,
    on_preview_click: Option<Box<dyn FnMut()>>,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(context: Rc<ThemeContext>, variant: ButtonVariant) -> Self {
        let surface = InteractiveSurface::new(
            context,
            Box::new(move |ctx, state, _checked| variant.targets(ctx, state)),
        );
        Self {
            surface,
            content: String::new(),
            on_preview_click: None,
            on_click: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.surface.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.surface.set_enabled(enabled);
    }

    /// Fired after a completed press/release cycle.
    pub fn set_on_click(&mut self, callback: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    /// Fired before `on_click` on the same cycle.
    pub fn set_on_preview_click(&mut self, callback: impl FnMut() + 'static) {
        self.on_preview_click = Some(Box::new(callback));
    }

    pub fn state(&self) -> StateId {
        self.surface.state()
    }

    pub fn background(&self) -> Color {
        self.surface.layer_color(LAYER_FILL)
    }

    pub fn border_color(&self) -> Color {
        self.surface.layer_color(LAYER_BORDER)
    }

    pub fn text_color(&self) -> Color {
        self.surface.layer_color(LAYER_TEXT)
    }

    /// Returns true when the event completed a click.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let response = self.surface.handle_event(event);
        if response.clicked {
            if let Some(callback) = self.on_preview_click.as_mut() {
                callback();
            }
            if let Some(callback) = self.on_click.as_mut() {
                callback();
            }
        }
        response.clicked
    }

    /// Advance layer transitions. Returns true while animating.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        self.surface.update(dt_ms)
    }
}
