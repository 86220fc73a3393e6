use std::time::Duration;

use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::slide()
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// 300ms ease-out, the settle used by every carousel.
    pub fn slide() -> Self {
        Self::tween(Duration::from_millis(300), Easing::EaseOut)
    }

    /// Hero crossfade.
    pub fn fade() -> Self {
        Self::tween(Duration::from_millis(1000), Easing::EaseInOut)
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// A value easing from where it was toward its latest target. Time is
/// passed in, so callers decide which clock drives it.
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate + Clone + PartialEq> {
    from: T,
    to: T,
    current: T,
    spec: AnimationSpec,
    started: Option<Instant>,
}

impl<T: Interpolate + Clone + PartialEq> Tween<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            from: initial.clone(),
            to: initial.clone(),
            current: initial,
            spec,
            started: None,
        }
    }

    /// Starts easing toward `target` from the current value. Same target is a no-op.
    pub fn retarget(&mut self, target: T, now: Instant) {
        if self.to == target {
            return;
        }
        self.from = self.current.clone();
        self.to = target;
        self.started = Some(now);
    }

    /// Jumps straight to `value` and stops any running transition.
    pub fn snap(&mut self, value: T) {
        self.from = value.clone();
        self.to = value.clone();
        self.current = value;
        self.started = None;
    }

    pub fn sample(&mut self, now: Instant) -> T {
        if let Some(start) = self.started {
            let elapsed = now.saturating_duration_since(start);
            if elapsed >= self.spec.duration || self.spec.duration.is_zero() {
                self.current = self.to.clone();
                self.started = None;
            } else {
                let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
                let eased = self.spec.easing.interpolate(t);
                self.current = self.from.interpolate(&self.to, eased);
            }
        }
        self.current.clone()
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}
