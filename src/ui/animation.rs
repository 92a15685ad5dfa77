//! Animation system for Rebound
//!
//! Two layers:
//!
//! - [`Curve`]: pure functions from elapsed time to progress (linear,
//!   ease-out, damped spring)
//! - [`Tween`]: an `f32` that transitions between targets along a curve,
//!   with optional start delay and logical-completion detection
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::ui::animation::{Curve, Tween};
//!
//! let mut opacity = Tween::new(0.0);
//! opacity.go_after(1.0, Curve::ease_out(duration), delay, now);
//! let value = opacity.value(now);
//! ```

mod curve;
mod tween;

pub use curve::Curve;
pub use tween::Tween;
