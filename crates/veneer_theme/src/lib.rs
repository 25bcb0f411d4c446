//! Veneer Theme System
//!
//! Palette derivation and theme state for the widget toolkit.
//!
//! # Overview
//!
//! - **Accent palettes**: every interactive color is a deterministic
//!   function of a 3-byte OS accent base and the light/dark mode
//! - **Theme context**: the single source of truth for mode and palettes,
//!   with two distinct change broadcasts (mode flips vs. any color change)
//! - **Config overrides**: optional TOML overrides for startup accent/mode
//!
//! # Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use veneer_theme::{SemanticRole, ThemeContext, ThemeMode};
//!
//! let ctx = Rc::new(ThemeContext::with_defaults(ThemeMode::Light));
//! let idle = ctx.current_palette().get(SemanticRole::Idle);
//! assert_eq!(idle, ctx.palette(ThemeMode::Light).get(SemanticRole::Idle));
//! ```
//!
//! The context is deliberately `!Send`: all theme mutation happens on the
//! UI thread. Cross-thread OS notifications are marshaled by
//! `veneer_platform` before they touch this crate.

pub mod accent;
pub mod config;
pub mod context;

pub use accent::{AccentTable, Palette, SemanticRole};
pub use config::{ConfigError, ThemeOverrides};
pub use context::{Subscription, ThemeContext, ThemeMode};
