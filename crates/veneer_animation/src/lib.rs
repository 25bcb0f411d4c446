//! Veneer Animation System
//!
//! Tick-driven, interruptible value transitions for widget visuals.
//!
//! # Features
//!
//! - **Brush transitions**: per-channel linear color blends that can be
//!   redirected mid-flight with no visual snap
//! - **Scalar transitions**: the same contract for f32 geometry, with easing
//! - **Keyframe tracks**: looping multi-stop tracks (indeterminate sweeps)
//!
//! Nothing here owns a clock: the host render loop ticks everything with a
//! millisecond delta, and a finished transition holds its target exactly.

pub mod brush;
pub mod easing;
pub mod keyframe;
pub mod scalar;

pub use brush::{AnimatedBrush, LONG_MS, SHORT_MS};
pub use easing::Easing;
pub use keyframe::{Keyframe, KeyframeTrack};
pub use scalar::AnimatedScalar;
