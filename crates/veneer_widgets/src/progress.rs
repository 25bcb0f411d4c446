//! Themed progress bar
//!
//! Two modes. Determinate: the indicator width animates to
//! `value / maximum * (track_width + 2.0)` with a decelerating curve
//! whenever value, maximum, or track width changes. Indeterminate: the
//! indicator sweeps the track on a forever-repeating four-keyframe loop,
//! unrelated to value.
//!
//! No interaction states; the only theme coupling is the rail and
//! indicator brushes, re-targeted on palette broadcasts like every other
//! widget.

use std::cell::Cell;
use std::rc::Rc;

use veneer_animation::{
    AnimatedBrush, AnimatedScalar, Easing, Keyframe, KeyframeTrack, LONG_MS,
};
use veneer_core::Color;
use veneer_theme::{Subscription, ThemeContext};

/// Duration of the determinate width animation.
const RESIZE_MS: f32 = 320.0;

/// One full indeterminate sweep.
const SWEEP_MS: f32 = 1000.0;

/// A themed progress bar.
pub struct ProgressBar {
    context: Rc<ThemeContext>,
    value: f32,
    maximum: f32,
    track_width: f32,
    indeterminate: bool,
    width: AnimatedScalar,
    sweep: KeyframeTrack,
    rail_brush: AnimatedBrush,
    indicator_brush: AnimatedBrush,
    theme_dirty: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl ProgressBar {
    pub fn new(context: Rc<ThemeContext>, track_width: f32) -> Self {
        let theme_dirty = Rc::new(Cell::new(false));
        let dirty = theme_dirty.clone();
        let subscription = context.subscribe_palette(move || dirty.set(true));

        let palette = context.current_palette();
        let sweep = KeyframeTrack::new(
            SWEEP_MS,
            vec![
                Keyframe::linear(0.0, 0.0),
                Keyframe::linear(0.25, 0.35),
                Keyframe::linear(0.75, 0.65),
                Keyframe::linear(1.0, 1.0),
            ],
        )
        .looping();

        Self {
            context,
            value: 0.0,
            maximum: 100.0,
            track_width,
            indeterminate: false,
            width: AnimatedScalar::new(0.0),
            sweep,
            rail_brush: AnimatedBrush::new(palette.disabled),
            indicator_brush: AnimatedBrush::new(palette.idle),
            theme_dirty,
            _subscription: subscription,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    pub fn set_value(&mut self, value: f32) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.retarget_width();
    }

    pub fn set_maximum(&mut self, maximum: f32) {
        if self.maximum == maximum {
            return;
        }
        self.maximum = maximum;
        self.retarget_width();
    }

    pub fn set_track_width(&mut self, track_width: f32) {
        if self.track_width == track_width {
            return;
        }
        self.track_width = track_width;
        self.retarget_width();
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        if self.indeterminate == indeterminate {
            return;
        }
        self.indeterminate = indeterminate;
        if indeterminate {
            self.sweep.start();
        } else {
            self.sweep.stop();
            self.retarget_width();
        }
    }

    /// Currently rendered indicator width (determinate mode).
    pub fn indicator_width(&self) -> f32 {
        self.width.value()
    }

    /// Normalized sweep position in [0, 1] (indeterminate mode).
    pub fn sweep_position(&self) -> f32 {
        self.sweep.value()
    }

    pub fn rail_color(&self) -> Color {
        self.rail_brush.color()
    }

    pub fn indicator_color(&self) -> Color {
        self.indicator_brush.color()
    }

    /// Advance width, sweep, and brush transitions. Returns true while
    /// anything is animating.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        if self.theme_dirty.take() {
            let palette = self.context.current_palette();
            self.rail_brush.animate_to(palette.disabled, LONG_MS);
            self.indicator_brush.animate_to(palette.idle, LONG_MS);
        }

        let mut animating = self.width.tick(dt_ms);
        animating |= self.rail_brush.tick(dt_ms);
        animating |= self.indicator_brush.tick(dt_ms);

        self.sweep.tick(dt_ms);
        animating || self.sweep.is_playing()
    }

    fn retarget_width(&mut self) {
        self.width
            .animate_to(self.target_width(), RESIZE_MS, Easing::EaseOut);
    }

    fn target_width(&self) -> f32 {
        if self.maximum <= 0.0 {
            return 0.0;
        }
        let ratio = (self.value / self.maximum).clamp(0.0, 1.0);
        ratio * (self.track_width + 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_theme::ThemeMode;

    fn bar(track_width: f32) -> ProgressBar {
        let ctx = Rc::new(ThemeContext::with_defaults(ThemeMode::Light));
        ProgressBar::new(ctx, track_width)
    }

    #[test]
    fn half_progress_width_includes_overhang() {
        let mut bar = bar(200.0);
        bar.set_value(50.0);
        bar.update(RESIZE_MS);
        assert_eq!(bar.indicator_width(), 101.0);
    }

    #[test]
    fn nonpositive_maximum_collapses_to_zero() {
        let mut bar = bar(200.0);
        bar.set_value(50.0);
        bar.update(RESIZE_MS);

        bar.set_maximum(0.0);
        bar.update(RESIZE_MS);
        assert_eq!(bar.indicator_width(), 0.0);
    }

    #[test]
    fn value_beyond_maximum_is_clamped() {
        let mut bar = bar(100.0);
        bar.set_value(250.0);
        bar.update(RESIZE_MS);
        assert_eq!(bar.indicator_width(), 102.0);
    }

    #[test]
    fn indeterminate_sweep_loops() {
        let mut bar = bar(200.0);
        bar.set_indeterminate(true);
        assert_eq!(bar.sweep_position(), 0.0);

        // Keeps reporting animation across loop boundaries.
        assert!(bar.update(SWEEP_MS * 1.5));
        assert!(bar.is_indeterminate());
        assert!(bar.sweep_position() > 0.0);

        bar.set_indeterminate(false);
        bar.update(RESIZE_MS);
        assert!(!bar.update(16.0));
    }

    #[test]
    fn width_change_is_animated_not_instant() {
        let mut bar = bar(200.0);
        bar.set_value(100.0);
        assert!(bar.indicator_width() < 202.0);

        bar.update(RESIZE_MS / 2.0);
        let mid = bar.indicator_width();
        assert!(mid > 0.0 && mid < 202.0);

        bar.update(RESIZE_MS);
        assert_eq!(bar.indicator_width(), 202.0);
    }

    #[test]
    fn theme_change_retargets_brushes() {
        let mut bar = bar(200.0);
        let light_indicator = bar.indicator_color();

        bar.context.set_dark_mode(true);
        while bar.update(16.0) {}

        let dark_palette = bar.context.current_palette();
        assert_ne!(bar.indicator_color(), light_indicator);
        assert_eq!(bar.indicator_color(), dark_palette.idle);
        assert_eq!(bar.rail_color(), dark_palette.disabled);
    }
}
