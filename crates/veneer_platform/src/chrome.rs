//! Window chrome theming
//!
//! Keeps the non-client area (title bar, window border) in step with the
//! app theme where the OS can do it. Support is uneven across OS
//! versions, so implementations report a [`ChromeCompat`] level and the
//! sync helper degrades gracefully: chrome failures never break in-app
//! theming.

use veneer_core::Color;
use veneer_theme::{SemanticRole, ThemeContext};

use crate::error::Result;

// Caption backgrounds match the stock window surface per mode.
const DARK_CAPTION: Color = Color::from_hex(0x202020);
const LIGHT_CAPTION: Color = Color::from_hex(0xF3F3F3);

/// Opaque OS window identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// How much of the chrome the running OS lets us theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeCompat {
    /// No chrome control at all.
    None,
    /// Dark/light title bar only, no custom colors.
    DarkModeOnly,
    /// Dark mode flag plus caption and border colors.
    Full,
}

/// OS-specific chrome backend.
pub trait WindowChrome {
    fn compat(&self) -> ChromeCompat;

    /// Switch the title bar between the OS dark and light rendering.
    fn apply_window_theme(&self, window: WindowHandle, dark: bool) -> Result<()>;

    /// Set the title bar background color.
    fn set_caption_color(&self, window: WindowHandle, color: Color) -> Result<()>;

    /// Set the window border color.
    fn set_border_color(&self, window: WindowHandle, color: Color) -> Result<()>;
}

/// Backend for platforms without chrome control. Every call succeeds
/// and does nothing, so callers need no platform branching.
pub struct NoopChrome;

impl WindowChrome for NoopChrome {
    fn compat(&self) -> ChromeCompat {
        ChromeCompat::None
    }

    fn apply_window_theme(&self, _window: WindowHandle, _dark: bool) -> Result<()> {
        Ok(())
    }

    fn set_caption_color(&self, _window: WindowHandle, _color: Color) -> Result<()> {
        Ok(())
    }

    fn set_border_color(&self, _window: WindowHandle, _color: Color) -> Result<()> {
        Ok(())
    }
}

/// Push the current theme into a window's chrome, best effort.
///
/// Applies whatever the backend's compat level allows. Failures are
/// logged at debug and swallowed; the window keeps its previous chrome.
pub fn sync_window_chrome(
    chrome: &dyn WindowChrome,
    window: WindowHandle,
    ctx: &ThemeContext,
) {
    let compat = chrome.compat();
    if compat == ChromeCompat::None {
        return;
    }

    let dark = ctx.is_dark_mode();
    if let Err(error) = chrome.apply_window_theme(window, dark) {
        tracing::debug!(?window, %error, "window theme flag not applied");
    }

    if compat == ChromeCompat::Full {
        let caption = if dark { DARK_CAPTION } else { LIGHT_CAPTION };
        if let Err(error) = chrome.set_caption_color(window, caption) {
            tracing::debug!(?window, %error, "caption color not applied");
        }

        let border = ctx.current_palette().get(SemanticRole::IdleBorder);
        if let Err(error) = chrome.set_border_color(window, border) {
            tracing::debug!(?window, %error, "border color not applied");
        }
    }
}
