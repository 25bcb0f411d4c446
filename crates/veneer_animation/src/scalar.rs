//! Interruptible scalar transitions
//!
//! [`AnimatedScalar`] mirrors the brush-transition contract for f32
//! geometry: toggle indicator offsets, progress indicator widths. Unlike
//! brushes, scalar transitions take an easing curve (the original controls
//! snap their indicators with a decelerating curve).

use crate::easing::Easing;

#[derive(Clone, Copy, Debug)]
struct ScalarTransition {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl ScalarTransition {
    fn sample(&self) -> f32 {
        if self.elapsed_ms >= self.duration_ms {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * t
    }
}

/// An f32 value with at most one active transition.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedScalar {
    value: f32,
    transition: Option<ScalarTransition>,
}

impl AnimatedScalar {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            transition: None,
        }
    }

    /// The currently rendered value.
    pub fn value(&self) -> f32 {
        match &self.transition {
            Some(t) => t.sample(),
            None => self.value,
        }
    }

    pub fn target(&self) -> f32 {
        match &self.transition {
            Some(t) => t.to,
            None => self.value,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jump immediately, cancelling any transition. Used while dragging,
    /// where the pointer position is authoritative.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.transition = None;
    }

    /// Transition toward `target` from the currently rendered value.
    pub fn animate_to(&mut self, target: f32, duration_ms: f32, easing: Easing) {
        let from = self.value();

        if duration_ms <= 0.0 || from == target {
            self.set(target);
            return;
        }

        self.transition = Some(ScalarTransition {
            from,
            to: target,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
        });
    }

    /// Advance by `dt_ms`. Returns true while a transition is still active.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(transition) = &mut self.transition else {
            return false;
        };

        transition.elapsed_ms += dt_ms;

        if transition.elapsed_ms >= transition.duration_ms {
            self.value = transition.to;
            self.transition = None;
            return false;
        }

        true
    }
}
