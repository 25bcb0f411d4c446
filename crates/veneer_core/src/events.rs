//! Input event model
//!
//! A small pointer/keyboard event vocabulary, enough to drive the widget
//! state machines. Host toolkits translate their native events into this.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const KEY_DOWN: EventType = 20;
    pub const KEY_UP: EventType = 21;
}

/// An input event with associated data.
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
}

impl Event {
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y },
        }
    }

    /// Keyboard event. `origin_self` is true when the event originated on
    /// the widget itself rather than bubbling up from a descendant.
    pub fn key(event_type: EventType, key: KeyCode, origin_self: bool) -> Self {
        Self {
            event_type,
            data: EventData::Key { key, origin_self },
        }
    }
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer { x: f32, y: f32 },
    Key { key: KeyCode, origin_self: bool },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
}
