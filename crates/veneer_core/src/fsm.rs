//! Interaction state machine runtime
//!
//! Flat state machines for widget interaction states. Supports guarded
//! transitions, entry/exit actions, and transition actions. Dispatching an
//! event with no matching transition is a no-op by contract.
//!
//! All state lives on the UI thread; actions are plain `FnMut` closures
//! with no `Send` requirement.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::EventType;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool>;

/// An action function executed during transitions
pub type Action = Box<dyn FnMut()>;

/// A transition in the state machine
pub struct Transition {
    pub from_state: StateId,
    pub event: EventType,
    pub to_state: StateId,
    pub guard: Option<Guard>,
    pub actions: SmallVec<[Action; 2]>,
}

impl Transition {
    /// Create a simple transition without guard or actions
    pub fn new(from: StateId, event: EventType, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn() -> bool + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Add an action to execute during transition
    pub fn with_action<F: FnMut() + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder {
    initial_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
}

impl StateMachineBuilder {
    pub fn new(initial_state: StateId) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: StateId, event: EventType, to: StateId) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + 'static>(mut self, state: StateId, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + 'static>(mut self, state: StateId, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
        }
    }
}

/// Result of dispatching an event to a state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub from: StateId,
    pub to: StateId,
}

impl DispatchOutcome {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// A flat state machine over widget interaction states.
pub struct StateMachine {
    current_state: StateId,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<StateId, Vec<Action>>,
    exit_callbacks: FxHashMap<StateId, Vec<Action>>,
}

impl StateMachine {
    pub fn builder(initial_state: StateId) -> StateMachineBuilder {
        StateMachineBuilder::new(initial_state)
    }

    pub fn current(&self) -> StateId {
        self.current_state
    }

    /// Dispatch an event. Returns the (from, to) pair; if no transition
    /// matched (or its guard rejected), `from == to` and nothing ran.
    pub fn dispatch(&mut self, event: EventType) -> DispatchOutcome {
        let from = self.current_state;

        let matched = self.transitions.iter_mut().find(|t| {
            t.from_state == from
                && t.event == event
                && t.guard.as_ref().map_or(true, |g| g())
        });

        let Some(transition) = matched else {
            return DispatchOutcome { from, to: from };
        };

        let to = transition.to_state;
        tracing::trace!(from, to, event, "state transition");
        for action in transition.actions.iter_mut() {
            action();
        }

        self.enter(to);
        DispatchOutcome { from, to }
    }

    /// Force the machine into a state without an input event. Used for
    /// control-path changes (enable/disable) that are API calls rather
    /// than input events; entry/exit actions still run.
    pub fn force_state(&mut self, state: StateId) -> DispatchOutcome {
        let from = self.current_state;
        if from == state {
            return DispatchOutcome { from, to: from };
        }
        self.enter(state);
        DispatchOutcome { from, to: state }
    }

    fn enter(&mut self, state: StateId) {
        if let Some(actions) = self.exit_callbacks.get_mut(&self.current_state) {
            for action in actions.iter_mut() {
                action();
            }
        }

        self.current_state = state;

        if let Some(actions) = self.entry_callbacks.get_mut(&state) {
            for action in actions.iter_mut() {
                action();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const A: StateId = 0;
    const B: StateId = 1;

    const GO: EventType = 100;
    const STOP: EventType = 101;

    #[test]
    fn dispatch_follows_transitions() {
        let mut fsm = StateMachine::builder(A).on(A, GO, B).on(B, STOP, A).build();

        assert_eq!(fsm.current(), A);
        assert!(fsm.dispatch(GO).changed());
        assert_eq!(fsm.current(), B);
        assert!(fsm.dispatch(STOP).changed());
        assert_eq!(fsm.current(), A);
    }

    #[test]
    fn undefined_pairs_are_noops() {
        let mut fsm = StateMachine::builder(A).on(A, GO, B).build();

        let outcome = fsm.dispatch(STOP);
        assert!(!outcome.changed());
        assert_eq!(fsm.current(), A);

        // Unknown event in a reachable state is also a no-op.
        fsm.dispatch(GO);
        assert!(!fsm.dispatch(GO).changed());
    }

    #[test]
    fn guard_rejects_transition() {
        let allow = Rc::new(Cell::new(false));
        let allow_clone = allow.clone();

        let mut fsm = StateMachine::builder(A)
            .transition(Transition::new(A, GO, B).with_guard(move || allow_clone.get()))
            .build();

        assert!(!fsm.dispatch(GO).changed());
        allow.set(true);
        assert!(fsm.dispatch(GO).changed());
    }

    #[test]
    fn entry_exit_actions_run_on_force() {
        let entered = Rc::new(Cell::new(0u32));
        let entered_clone = entered.clone();

        let mut fsm = StateMachine::builder(A)
            .on_enter(B, move || entered_clone.set(entered_clone.get() + 1))
            .build();

        fsm.force_state(B);
        assert_eq!(entered.get(), 1);

        // Forcing the current state again does nothing.
        fsm.force_state(B);
        assert_eq!(entered.get(), 1);
    }
}
