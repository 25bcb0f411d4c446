//! Generic themed interactive surface
//!
//! Every control shares the same interaction machinery: a flat state
//! machine over idle/hovered/pressed/disabled and a stack of animated
//! color layers (fill, border, glyph, ...). [`InteractiveSurface`] owns
//! both; the control supplies a target table mapping (state, checked) to
//! the colors each layer should head toward, and the surface animates
//! toward them with the press duration on press and the long duration
//! everywhere else.
//!
//! Enable/disable is a control-path change, not an input event: the
//! machine is forced into or out of `DISABLED`, and a disabled surface
//! ignores input entirely. Space-key press/release mirrors pointer
//! press/release but only when the key event originated on the widget
//! itself, not when bubbling up from a descendant.

use std::cell::Cell;
use std::rc::Rc;

use smallvec::SmallVec;

use veneer_animation::{AnimatedBrush, LONG_MS, SHORT_MS};
use veneer_core::events::{event_types, Event, EventData, KeyCode};
use veneer_core::fsm::{StateId, StateMachine};
use veneer_core::Color;
use veneer_theme::{Subscription, ThemeContext};

/// Interaction states shared by every control.
pub mod states {
    use veneer_core::fsm::StateId;

    pub const IDLE: StateId = 0;
    pub const HOVERED: StateId = 1;
    pub const PRESSED: StateId = 2;
    pub const DISABLED: StateId = 3;
}

/// Target colors for one state, one entry per layer.
pub type LayerColors = SmallVec<[Color; 4]>;

/// Per-control target table: (context, state, checked) -> layer targets.
pub type TargetTable = Box<dyn Fn(&ThemeContext, StateId, bool) -> LayerColors>;

/// What an input event did to the surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceResponse {
    /// A complete press/release cycle finished on the widget.
    pub clicked: bool,
    /// The interaction state changed.
    pub state_changed: bool,
}

/// An interaction state machine bound to animated color layers.
pub struct InteractiveSurface {
    context: Rc<ThemeContext>,
    machine: StateMachine,
    layers: SmallVec<[AnimatedBrush; 4]>,
    table: TargetTable,
    checked: bool,
    enabled: bool,
    release_pending: bool,
    theme_dirty: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl InteractiveSurface {
    /// The layer count is fixed by the table's output for the idle state.
    pub fn new(context: Rc<ThemeContext>, table: TargetTable) -> Self {
        let theme_dirty = Rc::new(Cell::new(false));
        let dirty = theme_dirty.clone();
        let subscription = context.subscribe_palette(move || dirty.set(true));

        let layers = table(&context, states::IDLE, false)
            .into_iter()
            .map(AnimatedBrush::new)
            .collect();

        let machine = StateMachine::builder(states::IDLE)
            .on(states::IDLE, event_types::POINTER_ENTER, states::HOVERED)
            .on(states::HOVERED, event_types::POINTER_DOWN, states::PRESSED)
            .on(states::PRESSED, event_types::POINTER_UP, states::HOVERED)
            .on(states::PRESSED, event_types::POINTER_LEAVE, states::IDLE)
            .on(states::HOVERED, event_types::POINTER_LEAVE, states::IDLE)
            .build();

        Self {
            context,
            machine,
            layers,
            table,
            checked: false,
            enabled: true,
            release_pending: false,
            theme_dirty,
            _subscription: subscription,
        }
    }

    pub fn context(&self) -> &Rc<ThemeContext> {
        &self.context
    }

    pub fn state(&self) -> StateId {
        self.machine.current()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Currently rendered color of a layer.
    pub fn layer_color(&self, index: usize) -> Color {
        self.layers[index].color()
    }

    /// The color a layer is heading toward.
    pub fn layer_target(&self, index: usize) -> Color {
        self.layers[index].target()
    }

    /// Flip the checked axis, animating onto the other palette branch.
    /// Event policy (coupled vs decoupled) is the owning control's job.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked == checked {
            return;
        }
        self.checked = checked;
        self.retarget(LONG_MS);
    }

    /// Enable or disable the surface. Disabling from any state animates
    /// to the disabled colors and makes the surface inert; enabling
    /// returns to idle regardless of where the pointer is.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.release_pending = false;

        let target = if enabled { states::IDLE } else { states::DISABLED };
        if self.machine.force_state(target).changed() {
            self.retarget(LONG_MS);
        }
    }

    /// Feed one input event through the state machine. Undefined
    /// (state, event) pairs are no-ops; a disabled surface ignores input.
    pub fn handle_event(&mut self, event: &Event) -> SurfaceResponse {
        let mut response = SurfaceResponse::default();
        if !self.enabled {
            return response;
        }

        if matches!(
            event.event_type,
            event_types::KEY_DOWN | event_types::KEY_UP
        ) {
            return self.handle_key(event);
        }

        let outcome = self.machine.dispatch(event.event_type);
        if !outcome.changed() {
            return response;
        }
        response.state_changed = true;
        tracing::trace!(from = outcome.from, to = outcome.to, "surface transition");

        match (outcome.from, outcome.to) {
            (states::HOVERED, states::PRESSED) => {
                self.release_pending = true;
                self.retarget(SHORT_MS);
            }
            (states::PRESSED, states::HOVERED) => {
                if self.release_pending {
                    self.release_pending = false;
                    response.clicked = true;
                }
                self.retarget(LONG_MS);
            }
            (states::PRESSED, states::IDLE) => {
                // Drag-out: pending release is discarded without a click.
                self.release_pending = false;
                self.retarget(LONG_MS);
            }
            _ => self.retarget(LONG_MS),
        }

        response
    }

    fn handle_key(&mut self, event: &Event) -> SurfaceResponse {
        let mut response = SurfaceResponse::default();

        let (key, origin_self) = match &event.data {
            EventData::Key { key, origin_self } => (*key, *origin_self),
            _ => return response,
        };
        if key != KeyCode::SPACE || !origin_self {
            return response;
        }

        match event.event_type {
            event_types::KEY_DOWN => {
                if self.machine.force_state(states::PRESSED).changed() {
                    self.release_pending = true;
                    self.retarget(SHORT_MS);
                    response.state_changed = true;
                }
            }
            event_types::KEY_UP => {
                let outcome = self.machine.force_state(states::IDLE);
                if self.release_pending {
                    self.release_pending = false;
                    response.clicked = true;
                }
                if outcome.changed() {
                    self.retarget(LONG_MS);
                    response.state_changed = true;
                }
            }
            _ => {}
        }

        response
    }

    /// Advance all layer transitions. Applies any pending theme change
    /// first, re-targeting from the currently rendered colors so the
    /// switch is continuous. Returns true while any layer is animating.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        if self.theme_dirty.take() {
            self.retarget(LONG_MS);
        }

        let mut animating = false;
        for layer in self.layers.iter_mut() {
            animating |= layer.tick(dt_ms);
        }
        animating
    }

    fn retarget(&mut self, duration_ms: f32) {
        let targets = (self.table)(&self.context, self.machine.current(), self.checked);
        for (layer, target) in self.layers.iter_mut().zip(targets) {
            layer.animate_to(target, duration_ms);
        }
    }
}
