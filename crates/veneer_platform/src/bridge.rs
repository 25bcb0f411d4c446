//! Inbound OS notification marshaling
//!
//! OS watchers (registry watchers, settings daemons) deliver accent and
//! theme changes on whatever thread they like. The theme context is
//! UI-thread-affine, so notifications cross over through a channel:
//! watchers hold a cloneable [`OsBridge`] sender, and the UI thread drains
//! the matching [`BridgePump`] once per frame, applying the events to the
//! context there. The context types being `!Send` makes skipping this
//! marshaling impossible rather than merely discouraged.
//!
//! Payload validation happens at this boundary: a malformed accent table
//! is rejected with a warning and the previous palette stays live.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use veneer_theme::{AccentTable, ThemeContext};

use crate::error::PlatformError;

/// A theme-affecting OS notification, as delivered by a watcher.
#[derive(Clone, Debug)]
pub enum BridgeEvent {
    /// The raw accent table payload; validated on the UI thread.
    AccentChanged(Vec<u8>),
    /// The OS reports whether apps should use the light theme.
    ThemeChanged { is_light: bool },
}

/// Sender half, handed to OS watchers. Cloneable and `Send`.
#[derive(Clone)]
pub struct OsBridge {
    tx: Sender<BridgeEvent>,
}

impl OsBridge {
    /// Called by an accent watcher with the raw OS payload.
    pub fn on_accent_changed(&self, payload: &[u8]) {
        // A disconnected receiver means the UI is shutting down.
        let _ = self.tx.send(BridgeEvent::AccentChanged(payload.to_vec()));
    }

    /// Called by a theme watcher with the OS light-theme flag.
    pub fn on_theme_changed(&self, is_light: bool) {
        let _ = self.tx.send(BridgeEvent::ThemeChanged { is_light });
    }

    /// Record that a watcher could not be established. Non-fatal by
    /// contract: theming stays functional, it just stops live-updating.
    pub fn subscription_failed(&self, source: &str, error: &PlatformError) {
        tracing::warn!(source, %error, "live theme updates unavailable");
    }
}

/// Receiver half, owned by the UI thread.
pub struct BridgePump {
    rx: Receiver<BridgeEvent>,
}

impl BridgePump {
    /// Drain all pending notifications into the theme context. Returns
    /// the number of events that actually changed state (and therefore
    /// broadcast to widgets).
    pub fn apply_pending(&self, ctx: &ThemeContext) -> usize {
        let mut applied = 0;

        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    if self.apply(ctx, event) {
                        applied += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        applied
    }

    fn apply(&self, ctx: &ThemeContext, event: BridgeEvent) -> bool {
        match event {
            BridgeEvent::AccentChanged(payload) => match AccentTable::from_bytes(&payload) {
                Some(table) => ctx.set_accent(table),
                None => {
                    let error = PlatformError::MalformedPayload {
                        expected: veneer_theme::accent::ACCENT_TABLE_LEN,
                        got: payload.len(),
                    };
                    tracing::warn!(%error, "rejected accent update");
                    false
                }
            },
            BridgeEvent::ThemeChanged { is_light } => {
                let was_dark = ctx.is_dark_mode();
                ctx.set_dark_mode(!is_light);
                was_dark == is_light
            }
        }
    }
}

/// Create a connected bridge pair.
pub fn bridge_channel() -> (OsBridge, BridgePump) {
    let (tx, rx) = channel();
    (OsBridge { tx }, BridgePump { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_theme::ThemeMode;

    #[test]
    fn theme_event_flips_mode() {
        let (bridge, pump) = bridge_channel();
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);

        bridge.on_theme_changed(false);
        assert_eq!(pump.apply_pending(&ctx), 1);
        assert!(ctx.is_dark_mode());
    }

    #[test]
    fn redundant_theme_event_applies_nothing() {
        let (bridge, pump) = bridge_channel();
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);

        bridge.on_theme_changed(true);
        assert_eq!(pump.apply_pending(&ctx), 0);
        assert!(!ctx.is_dark_mode());
    }

    #[test]
    fn malformed_accent_is_rejected_and_palette_retained() {
        let (bridge, pump) = bridge_channel();
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);
        let before = ctx.current_palette();

        bridge.on_accent_changed(&[1, 2, 3]); // wrong length
        assert_eq!(pump.apply_pending(&ctx), 0);
        assert_eq!(ctx.current_palette(), before);
    }

    #[test]
    fn valid_accent_is_applied() {
        let (bridge, pump) = bridge_channel();
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);
        let before = ctx.current_palette();

        let mut payload = *AccentTable::default().as_bytes();
        payload[16] = 0x80;
        bridge.on_accent_changed(&payload);

        assert_eq!(pump.apply_pending(&ctx), 1);
        assert_ne!(ctx.current_palette(), before);
    }

    #[test]
    fn events_cross_threads_before_application() {
        let (bridge, pump) = bridge_channel();
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);

        let handle = std::thread::spawn(move || {
            bridge.on_theme_changed(false);
            bridge.on_accent_changed(&[0u8; 7]);
        });
        handle.join().unwrap();

        // Applied on this (the "UI") thread only.
        assert_eq!(pump.apply_pending(&ctx), 1);
        assert!(ctx.is_dark_mode());
    }

    #[test]
    fn watcher_failure_is_nonfatal() {
        let (bridge, pump) = bridge_channel();
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);

        let error = PlatformError::Subscription("registry watcher unavailable".into());
        bridge.subscription_failed("accent", &error);

        // Theming stays functional without live updates.
        assert_eq!(pump.apply_pending(&ctx), 0);
        assert_eq!(ctx.current_palette(), ctx.palette(ThemeMode::Light));
    }

    #[test]
    fn unchanged_accent_does_not_count_as_applied() {
        let (bridge, pump) = bridge_channel();
        let ctx = ThemeContext::with_defaults(ThemeMode::Light);

        bridge.on_accent_changed(AccentTable::default().as_bytes());
        assert_eq!(pump.apply_pending(&ctx), 0);
    }
}
