//! Interpolation curves
//!
//! A curve maps the time elapsed since a transition started to a progress
//! value, where `0.0` is the start value and `1.0` the target. Springs may
//! overshoot past `1.0` before they settle.
//!
//! ## Spring parameters
//!
//! Springs are described by a perceptual duration `d` and a bounce `b`
//! (0 = critically damped, towards 1 = very springy), with unit mass:
//!
//! ```text
//! stiffness = (2π / d)²
//! damping   = 4π (1 - b) / d
//! ```
//!
//! Positions come from the analytical solution of the damped oscillator,
//! not from frame-by-frame integration, so a curve can be sampled at any
//! instant.

use std::f32::consts::PI;

use iced::time::Duration;

/// Bounce of the bouncy preset before any extra bounce is added
const BOUNCY_BASE_BOUNCE: f32 = 0.3;

/// Envelope amplitude below which a spring is considered at rest
const SETTLE_EPSILON: f32 = 0.001;

/// Interpolation curve with its duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Constant speed
    Linear(Duration),
    /// Starts fast and decelerates: cubic-bezier(0, 0, 0.58, 1)
    EaseOut(Duration),
    /// Damped spring, may overshoot
    Spring(Spring),
}

impl Curve {
    pub fn linear(duration: Duration) -> Self {
        Self::Linear(duration)
    }

    pub fn ease_out(duration: Duration) -> Self {
        Self::EaseOut(duration)
    }

    /// Spring with the bouncy preset's base bounce plus `extra_bounce`
    pub fn bouncy(duration: Duration, extra_bounce: f32) -> Self {
        Self::Spring(Spring::new(duration, BOUNCY_BASE_BOUNCE + extra_bounce))
    }

    /// Logical duration; once elapsed the transition counts as complete
    pub fn duration(&self) -> Duration {
        match self {
            Self::Linear(duration) | Self::EaseOut(duration) => *duration,
            Self::Spring(spring) => spring.duration(),
        }
    }

    /// Time until the curve stops moving
    ///
    /// Equal to [`Curve::duration`] except for springs, which keep ringing
    /// after their perceptual duration.
    pub fn settling_duration(&self) -> Duration {
        match self {
            Self::Linear(duration) | Self::EaseOut(duration) => *duration,
            Self::Spring(spring) => spring.settling_duration(),
        }
    }

    /// Progress at `elapsed` since the start of the transition
    pub fn progress(&self, elapsed: Duration) -> f32 {
        match self {
            Self::Linear(duration) => fraction(elapsed, *duration),
            Self::EaseOut(duration) => cubic_bezier(fraction(elapsed, *duration), 0.0, 0.0, 0.58, 1.0),
            Self::Spring(spring) => spring.position(elapsed),
        }
    }
}

/// Normalized time in `[0, 1]`; zero-length curves jump straight to the end
fn fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// CSS-style cubic-bezier easing with P0 = (0, 0) and P3 = (1, 1)
///
/// Finds the curve parameter whose x matches `x` by bisection (x is
/// monotonic for control points inside the unit square), then returns y.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);

    let bezier = |t: f32, p1: f32, p2: f32| -> f32 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
    };

    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..24 {
        t = (low + high) / 2.0;
        if bezier(t, x1, x2) < x {
            low = t;
        } else {
            high = t;
        }
    }

    bezier(t, y1, y2)
}

/// Damped spring with unit mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    duration: Duration,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// Spring from a perceptual duration and a bounce in `[0, 1)`
    pub fn new(duration: Duration, bounce: f32) -> Self {
        let seconds = duration.as_secs_f32().max(f32::EPSILON);
        let bounce = bounce.clamp(0.0, 0.99);

        Self {
            duration,
            stiffness: (2.0 * PI / seconds).powi(2),
            damping: 4.0 * PI * (1.0 - bounce) / seconds,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[cfg(test)]
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    #[cfg(test)]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Overdamped condition: `1.0 <= damping / (2.0 * sqrt(stiffness))`
    ///
    /// Critical damping is folded into the overdamped branch, with a little
    /// slack so rounding never feeds a negative root to the underdamped one.
    pub fn is_overdamped(&self) -> bool {
        1.0 - 1e-4 <= self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Time after which the oscillation envelope drops below `SETTLE_EPSILON`
    pub fn settling_duration(&self) -> Duration {
        let decay = -SETTLE_EPSILON.ln();
        let seconds = if self.is_overdamped() {
            // (1 + ωt)·e^(-ωt) decays slower than the bare exponential
            1.5 * decay / self.stiffness.sqrt()
        } else {
            2.0 * decay / self.damping
        };

        Duration::from_secs_f32(seconds).max(self.duration)
    }

    /// Position of a unit step from 0 to 1 starting at rest
    pub fn position(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.settling_duration() {
            return 1.0;
        }

        let t = elapsed.as_secs_f32();
        let delta = 1.0;

        if self.is_overdamped() {
            let angular_frequency = -self.stiffness.sqrt();
            let leftover = -angular_frequency * delta;
            1.0 - (delta + t * leftover) * (t * angular_frequency).exp()
        } else {
            let damping_frequency = (4.0 * self.stiffness - self.damping.powi(2)).sqrt();
            let leftover = self.damping * delta / damping_frequency;
            let dfm = 0.5 * damping_frequency;
            let dm = -0.5 * self.damping;
            1.0 - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * (t * dm).exp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_linear_endpoints() {
        let curve = Curve::linear(ms(100));
        assert_eq!(curve.progress(ms(0)), 0.0);
        assert!((curve.progress(ms(50)) - 0.5).abs() < 1e-4);
        assert_eq!(curve.progress(ms(100)), 1.0);
        assert_eq!(curve.progress(ms(500)), 1.0);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        assert_eq!(Curve::linear(Duration::ZERO).progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_ease_out_front_loaded() {
        let curve = Curve::ease_out(ms(220));
        assert!(curve.progress(ms(0)).abs() < 1e-4);
        assert!(curve.progress(ms(110)) > 0.5, "ease-out should be past halfway at half time");
        assert!((curve.progress(ms(220)) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_ease_out_monotonic() {
        let curve = Curve::ease_out(ms(220));
        let mut previous = 0.0;
        for step in 0..=22 {
            let value = curve.progress(ms(step * 10));
            assert!(value + 1e-5 >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_bouncy_spring_params() {
        let Curve::Spring(spring) = Curve::bouncy(ms(400), 0.2) else {
            panic!("bouncy should build a spring");
        };
        // bounce 0.5 over 0.4s
        assert!((spring.stiffness() - (2.0 * PI / 0.4).powi(2)).abs() < 0.01);
        assert!((spring.damping() - 4.0 * PI * 0.5 / 0.4).abs() < 0.01);
        assert!(!spring.is_overdamped());
    }

    #[test]
    fn test_bouncy_spring_overshoots_then_settles() {
        let curve = Curve::bouncy(ms(400), 0.2);
        assert_eq!(curve.progress(ms(0)), 0.0);

        let peak = (0..40)
            .map(|step| curve.progress(ms(step * 10)))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "bouncy spring should overshoot, peak = {}", peak);

        let settled = curve.settling_duration();
        assert!(settled > curve.duration());
        assert_eq!(curve.progress(settled), 1.0);
    }

    #[test]
    fn test_zero_bounce_spring_does_not_overshoot() {
        let curve = Curve::Spring(Spring::new(ms(400), 0.0));
        for step in 0..100 {
            assert!(curve.progress(ms(step * 10)) <= 1.0 + 1e-4);
        }
    }
}
