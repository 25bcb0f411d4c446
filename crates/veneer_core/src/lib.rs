//! Veneer Core Runtime
//!
//! Foundational primitives for the Veneer themed-widget toolkit:
//!
//! - **Color**: 8-bit RGBA value type with correctly-rounded channel lerp
//! - **Events**: pointer/keyboard input model shared by every widget
//! - **State Machines**: flat interaction state machines for widget visuals
//!
//! Everything in this crate is UI-thread-affine by design: nothing here is
//! `Send`, nothing locks, and all mutation is synchronous.

pub mod color;
pub mod events;
pub mod fsm;

pub use color::Color;
pub use events::{event_types, Event, EventData, EventType, KeyCode};
pub use fsm::{DispatchOutcome, StateId, StateMachine, StateMachineBuilder, Transition};
