//! Veneer OS Bridge
//!
//! The only place where the toolkit touches anything outside the UI
//! thread, in both directions:
//!
//! - **Inbound**: accent/theme change notifications arrive from OS
//!   watchers on arbitrary threads and are marshaled onto the UI thread
//!   before they reach the theme context (hard invariant, see
//!   [`bridge`]).
//! - **Outbound**: window chrome calls (dark-mode flag, caption/border
//!   colors) are best-effort and degrade silently on unsupported OS
//!   versions (see [`chrome`]).
//!
//! Every failure here is non-fatal: a dead watcher means "no live
//! updates", a rejected chrome call means "stock chrome". The widget core
//! never sees an error from this crate.

pub mod bridge;
pub mod chrome;
pub mod error;

pub use bridge::{bridge_channel, BridgeEvent, BridgePump, OsBridge};
pub use chrome::{sync_window_chrome, ChromeCompat, NoopChrome, WindowChrome, WindowHandle};
pub use error::{PlatformError, Result};
