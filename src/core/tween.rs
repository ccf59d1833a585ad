//! Time-boxed property transitions.
//!
//! A [`Tweened`] value owns its current value plus at most one in-flight
//! segment and one chained follow-up. Starting a new transition replaces both,
//! so the newest caller always wins the trajectory.

use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-out: fast start, decelerating into the target.
    #[default]
    Power2Out,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// Values that can be interpolated by a tween.
pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment<T> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

#[derive(Clone, Copy, Debug)]
struct Followup<T> {
    to: T,
    duration: f32,
    easing: Easing,
}

#[derive(Clone, Debug)]
pub struct Tweened<T: Lerp> {
    value: T,
    active: Option<Segment<T>>,
    then: Option<Followup<T>>,
}

impl<T: Lerp> Tweened<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            active: None,
            then: None,
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Jump to `value`, dropping any in-flight or chained transition.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.active = None;
        self.then = None;
    }

    pub fn animate_to(&mut self, target: T, duration: f32, easing: Easing) {
        self.then = None;
        self.start(target, duration, easing);
    }

    /// Animate to `target`, then immediately continue towards `then_target`.
    pub fn animate_to_then(
        &mut self,
        target: T,
        duration: f32,
        then_target: T,
        then_duration: f32,
        easing: Easing,
    ) {
        self.start(target, duration, easing);
        let followup = Followup {
            to: then_target,
            duration: then_duration,
            easing,
        };
        if self.active.is_some() {
            self.then = Some(followup);
        } else {
            self.then = None;
            self.start(followup.to, followup.duration, followup.easing);
        }
    }

    fn start(&mut self, target: T, duration: f32, easing: Easing) {
        if duration <= 0.0 || !duration.is_finite() {
            self.value = target;
            self.active = None;
            return;
        }
        self.active = Some(Segment {
            from: self.value,
            to: target,
            duration,
            elapsed: 0.0,
            easing,
        });
    }

    /// Advance by `dt` seconds. Time left over after a segment completes
    /// carries into the chained segment. Returns whether still animating.
    pub fn advance(&mut self, dt: f32) -> bool {
        let mut remaining = dt.max(0.0);
        while let Some(seg) = self.active.as_mut() {
            let rest = seg.duration - seg.elapsed;
            if remaining >= rest {
                remaining -= rest;
                self.value = seg.to;
                self.active = None;
                if let Some(next) = self.then.take() {
                    self.start(next.to, next.duration, next.easing);
                    continue;
                }
                break;
            }
            seg.elapsed += remaining;
            let eased = seg.easing.apply(seg.elapsed / seg.duration);
            self.value = seg.from.lerp_to(seg.to, eased);
            break;
        }
        self.active.is_some()
    }
}
