//! Interruptible brush-color transitions
//!
//! An [`AnimatedBrush`] is a solid color bound to one visual property of
//! one layer. Retargeting captures the *currently rendered* color as the
//! new start value, so a hover-in interrupted by a press never snaps.

use veneer_core::Color;

/// Duration for press feedback transitions, in milliseconds.
pub const SHORT_MS: f32 = 24.0;

/// Duration for hover/idle/disable transitions, in milliseconds.
pub const LONG_MS: f32 = 48.0;

/// An in-flight color blend.
#[derive(Clone, Copy, Debug)]
struct ColorTransition {
    from: Color,
    to: Color,
    duration_ms: f32,
    elapsed_ms: f32,
}

impl ColorTransition {
    fn sample(&self) -> Color {
        if self.elapsed_ms >= self.duration_ms {
            return self.to;
        }
        Color::lerp(self.from, self.to, self.elapsed_ms / self.duration_ms)
    }

    fn finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// A solid color with at most one active transition. Starting a new
/// transition supersedes the in-flight one; nothing is queued.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedBrush {
    value: Color,
    transition: Option<ColorTransition>,
}

impl AnimatedBrush {
    pub fn new(initial: Color) -> Self {
        Self {
            value: initial,
            transition: None,
        }
    }

    /// The currently rendered color.
    pub fn color(&self) -> Color {
        match &self.transition {
            Some(t) => t.sample(),
            None => self.value,
        }
    }

    /// The color this brush is heading toward (its resting value if no
    /// transition is active).
    pub fn target(&self) -> Color {
        match &self.transition {
            Some(t) => t.to,
            None => self.value,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jump to a color immediately, cancelling any transition.
    pub fn set(&mut self, color: Color) {
        self.value = color;
        self.transition = None;
    }

    /// Blend toward `target` over `duration_ms`. The start color is the
    /// currently rendered color, which makes mid-flight redirects
    /// continuous by construction.
    pub fn animate_to(&mut self, target: Color, duration_ms: f32) {
        let from = self.color();

        if duration_ms <= 0.0 || from == target {
            self.set(target);
            return;
        }

        tracing::trace!(?from, ?target, duration_ms, "brush transition started");
        self.transition = Some(ColorTransition {
            from,
            to: target,
            duration_ms,
            elapsed_ms: 0.0,
        });
    }

    /// Advance by `dt_ms`. Returns true while a transition is still active.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(transition) = &mut self.transition else {
            return false;
        };

        transition.elapsed_ms += dt_ms;

        if transition.finished() {
            self.value = transition.to;
            self.transition = None;
            return false;
        }

        true
    }
}
