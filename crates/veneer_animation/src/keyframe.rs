//! Keyframe tracks
//!
//! A looping, tick-driven track over a set of (time, value) stops. The
//! indeterminate progress sweep is a four-stop track repeated forever.

use crate::easing::Easing;

/// A single keyframe in a track
#[derive(Clone, Copy, Debug)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Target value at this keyframe
    pub value: f32,
    /// Easing function used when transitioning TO this keyframe
    pub easing: Easing,
}

impl Keyframe {
    pub fn linear(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            easing: Easing::Linear,
        }
    }
}

/// A keyframe-based animation track.
#[derive(Clone, Debug)]
pub struct KeyframeTrack {
    duration_ms: f32,
    keyframes: Vec<Keyframe>,
    current_time: f32,
    playing: bool,
    looping: bool,
}

impl KeyframeTrack {
    /// Keyframes must be sorted by time; the first should sit at 0.0 and
    /// the last at 1.0 for a well-formed track.
    pub fn new(duration_ms: f32, keyframes: Vec<Keyframe>) -> Self {
        Self {
            duration_ms,
            keyframes,
            current_time: 0.0,
            playing: false,
            looping: false,
        }
    }

    /// Repeat forever instead of holding the final value.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        (self.current_time / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        if self.keyframes.is_empty() {
            return 0.0;
        }

        let progress = self.progress();

        // Find surrounding keyframes
        let mut prev_kf = &self.keyframes[0];
        let mut next_kf = &self.keyframes[0];

        for kf in &self.keyframes {
            if kf.time <= progress {
                prev_kf = kf;
            }
            if kf.time >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.time - next_kf.time).abs() < f32::EPSILON {
            return prev_kf.value;
        }

        let local_progress = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        let eased = next_kf.easing.apply(local_progress);

        prev_kf.value + (next_kf.value - prev_kf.value) * eased
    }

    /// Advance the track by delta time (in milliseconds).
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms {
            if self.looping {
                // Wrap, preserving the overshoot so loop speed is stable.
                self.current_time %= self.duration_ms.max(f32::EPSILON);
            } else {
                self.current_time = self.duration_ms;
                self.playing = false;
            }
        }
    }
}
