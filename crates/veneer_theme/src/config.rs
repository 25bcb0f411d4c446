//! Startup theme overrides
//!
//! Optional TOML configuration that forces the startup accent color and/or
//! mode, overriding whatever the OS reports. Absence of the file (or of a
//! field) means "use the OS values".
//!
//! ```toml
//! # veneer.toml
//! accent = "#0078D4"
//! mode = "dark"
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::accent::AccentTable;
use crate::context::{ThemeContext, ThemeMode};

/// Errors from parsing theme override configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Not valid TOML, or unknown fields/types
    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Accent color is not a `#RRGGBB` string
    #[error("invalid accent color {0:?}, expected \"#RRGGBB\"")]
    InvalidAccent(String),

    /// Mode is not "light" or "dark"
    #[error("invalid mode {0:?}, expected \"light\" or \"dark\"")]
    InvalidMode(String),
}

/// Parsed override file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    /// Accent base color as `#RRGGBB`; substituted into both base slots
    /// of the accent table.
    pub accent: Option<String>,
    /// Forced mode: "light" or "dark".
    pub mode: Option<String>,
}

impl ThemeOverrides {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// The forced mode, if any.
    pub fn mode(&self) -> Result<Option<ThemeMode>, ConfigError> {
        match self.mode.as_deref() {
            None => Ok(None),
            Some("light") => Ok(Some(ThemeMode::Light)),
            Some("dark") => Ok(Some(ThemeMode::Dark)),
            Some(other) => Err(ConfigError::InvalidMode(other.to_owned())),
        }
    }

    /// An accent table with the override color in both base slots, if an
    /// accent override is present.
    pub fn accent_table(&self) -> Result<Option<AccentTable>, ConfigError> {
        let Some(accent) = self.accent.as_deref() else {
            return Ok(None);
        };
        let triplet = parse_hex_triplet(accent)
            .ok_or_else(|| ConfigError::InvalidAccent(accent.to_owned()))?;

        let mut bytes = *AccentTable::default().as_bytes();
        bytes[4..7].copy_from_slice(&triplet);
        bytes[16..19].copy_from_slice(&triplet);
        Ok(AccentTable::from_bytes(&bytes))
    }

    /// Apply the overrides to a context at startup.
    pub fn apply(&self, ctx: &ThemeContext) -> Result<(), ConfigError> {
        if let Some(table) = self.accent_table()? {
            ctx.set_accent(table);
        }
        if let Some(mode) = self.mode()? {
            ctx.set_dark_mode(mode.is_dark());
        }
        Ok(())
    }
}

fn parse_hex_triplet(input: &str) -> Option<[u8; 3]> {
    let hex = input.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some([(value >> 16) as u8, (value >> 8) as u8, value as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accent::SemanticRole;
    use veneer_core::Color;

    #[test]
    fn parses_full_override() {
        let overrides = ThemeOverrides::from_toml_str(
            r##"
            accent = "#FF6600"
            mode = "dark"
            "##,
        )
        .unwrap();

        assert_eq!(overrides.mode().unwrap(), Some(ThemeMode::Dark));
        let table = overrides.accent_table().unwrap().unwrap();
        assert_eq!(table.base(ThemeMode::Dark), [0xFF, 0x66, 0x00]);
        assert_eq!(table.base(ThemeMode::Light), [0xFF, 0x66, 0x00]);
    }

    #[test]
    fn empty_config_overrides_nothing() {
        let overrides = ThemeOverrides::from_toml_str("").unwrap();
        assert_eq!(overrides.mode().unwrap(), None);
        assert!(overrides.accent_table().unwrap().is_none());
    }

    #[test]
    fn rejects_malformed_accent() {
        let overrides = ThemeOverrides {
            accent: Some("not-a-color".into()),
            mode: None,
        };
        assert!(matches!(
            overrides.accent_table(),
            Err(ConfigError::InvalidAccent(_))
        ));
    }

    #[test]
    fn rejects_unknown_mode() {
        let overrides = ThemeOverrides {
            accent: None,
            mode: Some("dusk".into()),
        };
        assert!(matches!(overrides.mode(), Err(ConfigError::InvalidMode(_))));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(ThemeOverrides::from_toml_str("accent_color = \"#000000\"").is_err());
    }

    #[test]
    fn apply_updates_context() {
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);
        let overrides = ThemeOverrides::from_toml_str(
            r##"
            accent = "#102030"
            mode = "dark"
            "##,
        )
        .unwrap();

        overrides.apply(&ctx).unwrap();
        assert!(ctx.is_dark_mode());
        assert_eq!(
            ctx.current_palette().get(SemanticRole::Idle),
            Color::rgb(0x10, 0x20, 0x30)
        );
    }
}
