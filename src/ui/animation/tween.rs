//! Time-based tween with delay and retargeting
//!
//! A [`Tween`] never advances on its own: every query takes the instant to
//! sample at, so the same state can be rendered, ticked and tested against
//! explicit timestamps.

use iced::time::{Duration, Instant};

use super::Curve;

/// A single animated `f32` value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Value the current transition starts from, unless a lead runs into it
    from: f32,
    /// Value the current transition heads to
    to: f32,
    curve: Curve,
    /// Time before the curve begins; the lead keeps running meanwhile
    delay: Duration,
    /// When the current transition was scheduled; `None` once settled
    started_at: Option<Instant>,
    /// Transition that was in flight when a delayed one was scheduled
    lead: Option<Lead>,
}

/// An undelayed transition evaluated while a delayed one waits
#[derive(Debug, Clone, Copy, PartialEq)]
struct Lead {
    from: f32,
    to: f32,
    curve: Curve,
    started_at: Instant,
}

impl Lead {
    fn value(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.from + (self.to - self.from) * self.curve.progress(elapsed)
    }
}

impl Tween {
    /// Create a tween resting at `value`
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            curve: Curve::linear(Duration::ZERO),
            delay: Duration::ZERO,
            started_at: None,
            lead: None,
        }
    }

    /// Animate towards `target`, starting from the value at `now`
    pub fn go(&mut self, target: f32, curve: Curve, now: Instant) {
        self.go_after(target, curve, Duration::ZERO, now);
    }

    /// Like [`Tween::go`], but the curve begins after `delay`
    ///
    /// A transition already in flight keeps running through the delay, and
    /// the new curve starts from wherever it got to.
    pub fn go_after(&mut self, target: f32, curve: Curve, delay: Duration, now: Instant) {
        let lead = if delay.is_zero() {
            None
        } else {
            self.running_at(now)
        };

        self.from = self.value(now);
        self.to = target;
        self.curve = curve;
        self.delay = delay;
        self.started_at = Some(now);
        self.lead = lead;
    }

    /// Interpolated value at `now`
    pub fn value(&self, now: Instant) -> f32 {
        let Some(elapsed) = self.elapsed(now) else {
            return self.to;
        };

        if elapsed < self.delay {
            return self.lead.map_or(self.from, |lead| lead.value(now));
        }

        let from = self.start_value();
        let progress = self.curve.progress(elapsed - self.delay);
        from + (self.to - from) * progress
    }

    /// Value the tween is heading to
    #[cfg(test)]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the transition has logically completed at `now`
    ///
    /// Springs complete after their perceptual duration even though they may
    /// still be settling; see [`Tween::is_animating`].
    pub fn is_complete(&self, now: Instant) -> bool {
        self.elapsed(now)
            .is_none_or(|elapsed| elapsed >= self.delay + self.curve.duration())
    }

    /// Whether the value still changes after `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.elapsed(now)
            .is_some_and(|elapsed| elapsed < self.delay + self.curve.settling_duration())
    }

    /// Drop a finished transition so the tween rests exactly on its target
    pub fn cleanup_completed(&mut self, now: Instant) {
        if self.started_at.is_some() && !self.is_animating(now) {
            self.from = self.to;
            self.started_at = None;
            self.lead = None;
        }
    }

    /// Value the curve starts from once the delay is over
    fn start_value(&self) -> f32 {
        match (self.lead, self.started_at) {
            (Some(lead), Some(started_at)) => lead.value(started_at + self.delay),
            _ => self.from,
        }
    }

    /// The transition visibly moving the value at `now`, if any
    fn running_at(&self, now: Instant) -> Option<Lead> {
        let elapsed = self.elapsed(now)?;

        if elapsed < self.delay {
            return self.lead;
        }

        Some(Lead {
            from: self.start_value(),
            to: self.to,
            curve: self.curve,
            started_at: self.started_at? + self.delay,
        })
    }

    fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.started_at
            .map(|started_at| now.saturating_duration_since(started_at))
    }
}
