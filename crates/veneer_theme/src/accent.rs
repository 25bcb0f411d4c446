//! Accent palette derivation
//!
//! The OS supplies accent colors as an 8-triplet table (32 bytes, each
//! entry RGB plus a padding byte). The dark-mode base color is triplet 1,
//! the light-mode base triplet 5. Every other interactive color is an
//! affine function of the base, rounded to the nearest channel value with
//! ties to even, clamped to [0, 255] before narrowing.

use crate::context::ThemeMode;
use veneer_core::Color;

/// Byte length of the OS accent table.
pub const ACCENT_TABLE_LEN: usize = 32;

const DARK_BASE_OFFSET: usize = 4;
const LIGHT_BASE_OFFSET: usize = 16;

/// The 8-triplet OS accent palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentTable([u8; ACCENT_TABLE_LEN]);

impl AccentTable {
    /// Parse an OS-reported payload. Anything but exactly 32 bytes is
    /// malformed and rejected.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let table: [u8; ACCENT_TABLE_LEN] = bytes.try_into().ok()?;
        Some(Self(table))
    }

    pub fn as_bytes(&self) -> &[u8; ACCENT_TABLE_LEN] {
        &self.0
    }

    /// The 3-byte accent base for a mode.
    pub fn base(&self, mode: ThemeMode) -> [u8; 3] {
        let offset = match mode {
            ThemeMode::Dark => DARK_BASE_OFFSET,
            ThemeMode::Light => LIGHT_BASE_OFFSET,
        };
        [self.0[offset], self.0[offset + 1], self.0[offset + 2]]
    }
}

impl Default for AccentTable {
    /// The default Windows accent table (Windows blue).
    fn default() -> Self {
        Self([
            0x99, 0xEB, 0xFF, 0x00, 0x4C, 0xC2, 0xFF, 0x00, //
            0x00, 0x91, 0xF8, 0x00, 0x00, 0x78, 0xD4, 0x00, //
            0x00, 0x67, 0xC0, 0x00, 0x00, 0x3E, 0x92, 0x00, //
            0x00, 0x1A, 0x68, 0x00, 0xF7, 0x63, 0x0C, 0x00,
        ])
    }
}

/// Named visual purpose of a derived color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Idle,
    IdleBorder,
    MouseOver,
    MouseOverBorder,
    MouseDown,
    MouseDownBorder,
    Disabled,
    DisabledBorder,
    FocusVisual,
}

/// Affine coefficients: `derived = base + round((base - offset) * scale)`.
/// Fitted per role per mode; preserved bit-for-bit for pixel parity.
struct Coefficients {
    mouse_over: (f64, f64),
    mouse_down: (f64, f64),
    idle_border: (f64, f64),
    mouse_over_border: (f64, f64),
}

const DARK_COEFFICIENTS: Coefficients = Coefficients {
    mouse_over: (25.1, -0.1),
    mouse_down: (27.51, -0.2),
    idle_border: (255.0, -0.0784313725490195),
    mouse_over_border: (131.2, -0.1724137931034483),
};

const LIGHT_COEFFICIENTS: Coefficients = Coefficients {
    mouse_over: (245.1, -0.1),
    mouse_down: (243.0, -0.2),
    idle_border: (255.0, -0.0784313725490195),
    mouse_over_border: (248.0, -0.1718213058419243),
};

// Disabled/focus colors are fixed per mode rather than accent-derived.
const DARK_DISABLED: Color = Color::from_hex(0x434343);
const DARK_FOCUS_VISUAL: Color = Color::WHITE;
const LIGHT_DISABLED: Color = Color::from_hex(0xBFBFBF);
const LIGHT_FOCUS_VISUAL: Color = Color::from_hex(0x1A1A1A);

/// The full set of derived colors for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub idle: Color,
    pub idle_border: Color,
    pub mouse_over: Color,
    pub mouse_over_border: Color,
    pub mouse_down: Color,
    pub mouse_down_border: Color,
    pub disabled: Color,
    pub disabled_border: Color,
    pub focus_visual: Color,
}

impl Palette {
    /// Derive the palette for a 3-byte accent base. Pure: identical inputs
    /// produce bit-identical palettes.
    pub fn derive(base: [u8; 3], mode: ThemeMode) -> Self {
        let (coefficients, disabled, focus_visual) = match mode {
            ThemeMode::Dark => (&DARK_COEFFICIENTS, DARK_DISABLED, DARK_FOCUS_VISUAL),
            ThemeMode::Light => (&LIGHT_COEFFICIENTS, LIGHT_DISABLED, LIGHT_FOCUS_VISUAL),
        };

        let mouse_down = affine(base, coefficients.mouse_down);

        Self {
            idle: Color::from_triplet(base),
            idle_border: affine(base, coefficients.idle_border),
            mouse_over: affine(base, coefficients.mouse_over),
            mouse_over_border: affine(base, coefficients.mouse_over_border),
            mouse_down,
            // The pressed state paints border and fill with the same color.
            mouse_down_border: mouse_down,
            disabled,
            disabled_border: disabled,
            focus_visual,
        }
    }

    /// Derive from an accent table, extracting the mode's base triplet.
    pub fn derive_from_table(table: &AccentTable, mode: ThemeMode) -> Self {
        Self::derive(table.base(mode), mode)
    }

    pub fn get(&self, role: SemanticRole) -> Color {
        match role {
            SemanticRole::Idle => self.idle,
            SemanticRole::IdleBorder => self.idle_border,
            SemanticRole::MouseOver => self.mouse_over,
            SemanticRole::MouseOverBorder => self.mouse_over_border,
            SemanticRole::MouseDown => self.mouse_down,
            SemanticRole::MouseDownBorder => self.mouse_down_border,
            SemanticRole::Disabled => self.disabled,
            SemanticRole::DisabledBorder => self.disabled_border,
            SemanticRole::FocusVisual => self.focus_visual,
        }
    }
}

fn affine(base: [u8; 3], (offset, scale): (f64, f64)) -> Color {
    Color::rgb(
        affine_channel(base[0], offset, scale),
        affine_channel(base[1], offset, scale),
        affine_channel(base[2], offset, scale),
    )
}

fn affine_channel(base: u8, offset: f64, scale: f64) -> u8 {
    let delta = ((base as f64 - offset) * scale).round_ties_even();
    // Clamp before narrowing; channel arithmetic must never wrap.
    (base as f64 + delta).clamp(0.0, 255.0) as u8
}
