//! Theme context: mode flag, derived palettes, change broadcast
//!
//! `ThemeContext` is the single source of truth every widget reads. It is
//! created once at application start and shared by `Rc`; there is no
//! ambient global. All mutation happens on the UI thread; the type is
//! `!Send` by construction (`Cell`/`RefCell`), which makes violating the
//! thread discipline a compile error rather than undefined behavior.
//!
//! Two broadcast channels exist because mode and accent change
//! independently:
//!
//! - `theme_changed` fires only on a dark/light flip
//! - `palette_changed` fires on any color-affecting change (mode flip or
//!   accent update), and is what widgets subscribe to

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::accent::{AccentTable, Palette};

/// System-wide light/dark display preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

new_key_type! {
    /// Key for a registered observer
    pub struct ObserverId;
}

/// The broadcast channel an observer is registered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Theme,
    Palette,
}

type Observer = Rc<dyn Fn()>;

/// Process-wide theme state: mode, accent table, and the palettes derived
/// from them for both modes.
pub struct ThemeContext {
    mode: Cell<ThemeMode>,
    accent: Cell<AccentTable>,
    dark_palette: Cell<Palette>,
    light_palette: Cell<Palette>,
    theme_observers: RefCell<SlotMap<ObserverId, Observer>>,
    palette_observers: RefCell<SlotMap<ObserverId, Observer>>,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode, accent: AccentTable) -> Self {
        Self {
            mode: Cell::new(mode),
            accent: Cell::new(accent),
            dark_palette: Cell::new(Palette::derive_from_table(&accent, ThemeMode::Dark)),
            light_palette: Cell::new(Palette::derive_from_table(&accent, ThemeMode::Light)),
            theme_observers: RefCell::new(SlotMap::with_key()),
            palette_observers: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Context seeded with the default Windows accent table.
    pub fn with_defaults(mode: ThemeMode) -> Self {
        Self::new(mode, AccentTable::default())
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode.get().is_dark()
    }

    /// Flip the mode. On an actual change, notifies `theme_changed`
    /// subscribers first, then `palette_changed` subscribers, both
    /// synchronously on the calling (UI) thread.
    pub fn set_dark_mode(&self, dark: bool) {
        let new_mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
        if self.mode.get() == new_mode {
            return;
        }

        tracing::debug!(?new_mode, "theme mode changed");
        self.mode.set(new_mode);

        self.notify(Channel::Theme);
        self.notify(Channel::Palette);
    }

    pub fn accent(&self) -> AccentTable {
        self.accent.get()
    }

    /// Install a new accent table and recompute both palettes. An
    /// unchanged table is dropped without broadcasting. Returns whether
    /// the update was applied.
    pub fn set_accent(&self, accent: AccentTable) -> bool {
        if self.accent.get() == accent {
            return false;
        }

        self.accent.set(accent);
        self.dark_palette
            .set(Palette::derive_from_table(&accent, ThemeMode::Dark));
        self.light_palette
            .set(Palette::derive_from_table(&accent, ThemeMode::Light));

        tracing::debug!("accent palette changed");
        self.notify(Channel::Palette);
        true
    }

    /// The derived palette for a specific mode.
    pub fn palette(&self, mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Dark => self.dark_palette.get(),
            ThemeMode::Light => self.light_palette.get(),
        }
    }

    /// The derived palette for the current mode.
    pub fn current_palette(&self) -> Palette {
        self.palette(self.mode.get())
    }

    /// Subscribe to dark/light mode flips.
    pub fn subscribe_theme(self: &Rc<Self>, observer: impl Fn() + 'static) -> Subscription {
        let id = self.theme_observers.borrow_mut().insert(Rc::new(observer));
        Subscription {
            context: Rc::downgrade(self),
            id,
            channel: Channel::Theme,
        }
    }

    /// Subscribe to any color-affecting change (mode flip or accent
    /// update). This is the channel widgets use.
    pub fn subscribe_palette(self: &Rc<Self>, observer: impl Fn() + 'static) -> Subscription {
        let id = self.palette_observers.borrow_mut().insert(Rc::new(observer));
        Subscription {
            context: Rc::downgrade(self),
            id,
            channel: Channel::Palette,
        }
    }

    fn notify(&self, channel: Channel) {
        // Snapshot before invoking so an observer may subscribe or drop
        // its subscription without re-entrant borrow panics.
        let observers: Vec<Observer> = match channel {
            Channel::Theme => self.theme_observers.borrow().values().cloned().collect(),
            Channel::Palette => self.palette_observers.borrow().values().cloned().collect(),
        };
        for observer in observers {
            observer();
        }
    }

    fn unsubscribe(&self, channel: Channel, id: ObserverId) {
        match channel {
            Channel::Theme => self.theme_observers.borrow_mut().remove(id),
            Channel::Palette => self.palette_observers.borrow_mut().remove(id),
        };
    }

    #[cfg(test)]
    fn observer_count(&self) -> usize {
        self.theme_observers.borrow().len() + self.palette_observers.borrow().len()
    }
}

/// Guard for a registered observer; unsubscribes on drop so a destroyed
/// widget can never be called back.
pub struct Subscription {
    context: Weak<ThemeContext>,
    id: ObserverId,
    channel: Channel,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(context) = self.context.upgrade() {
            context.unsubscribe(self.channel, self.id);
        }
    }
}
