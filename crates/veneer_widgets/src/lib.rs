//! Veneer Widgets
//!
//! Accent-themed interactive controls built on one shared foundation,
//! [`InteractiveSurface`]: a flat interaction state machine (idle, hovered,
//! pressed, disabled) bound to a stack of animated color layers. Each
//! control supplies a per-state layer-target table; the surface owns the
//! transitions between them.
//!
//! Controls:
//!
//! - [`Button`]: accent (`Primary`) or neutral (`Secondary`) fill, click
//!   plus preview-click callbacks
//! - [`Checkbox`]: adds an orthogonal checked axis with its own palette
//!   branch
//! - [`ToggleSwitch`]: checkbox semantics plus direct-manipulation drag of
//!   the indicator
//! - [`ProgressBar`]: determinate width animation or an endless
//!   four-keyframe indeterminate sweep
//!
//! All widgets hold an `Rc<ThemeContext>` and re-target their in-flight
//! transitions from the currently rendered colors whenever the theme
//! broadcasts a change, so a mode flip mid-hover never snaps.

pub mod button;
pub mod checkbox;
pub mod progress;
pub mod surface;
pub mod toggle;

pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
pub use progress::ProgressBar;
pub use surface::{states, InteractiveSurface, LayerColors, SurfaceResponse};
pub use toggle::{ToggleSwitch, TRACK_MAX, TRACK_MIN};
