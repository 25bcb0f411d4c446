//! 8-bit RGBA color value type
//!
//! Channels are `u8` because the whole palette pipeline is specified in
//! 8-bit channel space: the OS accent table delivers bytes, the derived
//! palettes are bytes, and the brush transitions sample back to bytes.

/// An immutable RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color from individual channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Opaque color from an RGB byte triplet.
    pub const fn from_triplet(t: [u8; 3]) -> Self {
        Self::rgb(t[0], t[1], t[2])
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Per-channel linear interpolation, rounded to nearest with ties to
    /// even. `t` is clamped to [0, 1], so the result never leaves the
    /// [from, to] channel range.
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0) as f64;
        Self {
            r: lerp_channel(from.r, to.r, t),
            g: lerp_channel(from.g, to.g, t),
            b: lerp_channel(from.b, to.b, t),
            a: lerp_channel(from.a, to.a, t),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = from as f64 + (to as f64 - from as f64) * t;
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
