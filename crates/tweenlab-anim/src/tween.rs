//! Retargetable tweened values.

use tweenlab_core::ClockTime;

use crate::easing::Easing;

/// Values the driver can interpolate linearly.
pub trait Animatable: Copy {
    /// Interpolate from `self` toward `to` by eased progress `t`.
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Animatable for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Animatable for (f64, f64) {
    fn lerp(self, to: Self, t: f64) -> Self {
        (self.0.lerp(to.0, t), self.1.lerp(to.1, t))
    }
}

impl Animatable for ClockTime {
    /// Clock readings interpolate over their total-seconds representation,
    /// so a tween sweeps the hands through every in-between position.
    fn lerp(self, to: Self, t: f64) -> Self {
        ClockTime::from_seconds(self.total_seconds().lerp(to.total_seconds(), t))
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition<T> {
    from: T,
    to: T,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

/// A mutable observed value with at most one in-flight transition.
///
/// Scenes never mutate state mid-frame; they call [`Tween::retarget`] from
/// input handling and read [`Tween::value_at`] while rendering. Retargeting
/// mid-flight starts the new transition from the current interpolated value,
/// so the motion stays continuous.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Animatable> {
    current: T,
    transition: Option<Transition<T>>,
}

impl<T: Animatable> Tween<T> {
    /// A settled tween holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            transition: None,
        }
    }

    /// The value the tween is heading toward (or resting at).
    pub fn target(&self) -> T {
        match self.transition {
            Some(tr) => tr.to,
            None => self.current,
        }
    }

    /// Start a transition toward `to`, beginning at the value currently on
    /// screen. A zero duration snaps immediately.
    pub fn retarget(&mut self, to: T, duration_ms: u64, easing: Easing, now_ms: u64) {
        let from = self.value_at(now_ms);
        self.current = from;
        if duration_ms == 0 {
            self.current = to;
            self.transition = None;
            return;
        }
        self.transition = Some(Transition {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
            easing,
        });
    }

    /// Evaluate the tween at `now_ms`, settling any finished transition.
    pub fn value_at(&mut self, now_ms: u64) -> T {
        let Some(tr) = self.transition else {
            return self.current;
        };
        let elapsed = now_ms.saturating_sub(tr.start_ms);
        if elapsed >= tr.duration_ms {
            self.current = tr.to;
            self.transition = None;
            return tr.to;
        }
        let t = tr.easing.apply(elapsed as f64 / tr.duration_ms as f64);
        tr.from.lerp(tr.to, t)
    }

    /// Whether the tween has reached its target.
    pub fn is_settled(&self, now_ms: u64) -> bool {
        match self.transition {
            None => true,
            Some(tr) => now_ms.saturating_sub(tr.start_ms) >= tr.duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_tween_is_settled_at_its_value() {
        let mut tween = Tween::new(4.0);
        assert!(tween.is_settled(0));
        assert_eq!(tween.value_at(12345), 4.0);
    }

    #[test]
    fn linear_transitions_interpolate_by_elapsed_time() {
        let mut tween = Tween::new(0.0);
        tween.retarget(10.0, 1000, Easing::Linear, 0);
        assert_eq!(tween.value_at(0), 0.0);
        assert_eq!(tween.value_at(250), 2.5);
        assert_eq!(tween.value_at(500), 5.0);
        assert_eq!(tween.value_at(1000), 10.0);
        assert!(tween.is_settled(1000));
    }

    #[test]
    fn retargeting_mid_flight_starts_from_the_screen_value() {
        let mut tween = Tween::new(0.0);
        tween.retarget(10.0, 1000, Easing::Linear, 0);
        // half way there, head back to zero
        tween.retarget(0.0, 1000, Easing::Linear, 500);
        assert_eq!(tween.value_at(500), 5.0);
        assert_eq!(tween.value_at(1000), 2.5);
        assert_eq!(tween.value_at(1500), 0.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tween = Tween::new(1.0);
        tween.retarget(7.0, 0, Easing::EaseInOut, 100);
        assert!(tween.is_settled(100));
        assert_eq!(tween.value_at(100), 7.0);
    }

    #[test]
    fn values_after_the_deadline_rest_at_the_target() {
        let mut tween = Tween::new(3.0);
        tween.retarget(30.0, 200, Easing::EaseInOut, 0);
        assert_eq!(tween.value_at(5000), 30.0);
        assert_eq!(tween.target(), 30.0);
    }

    #[test]
    fn pairs_interpolate_componentwise() {
        let mut tween = Tween::new((4.0, 1.0));
        tween.retarget((30.0, 0.5), 1000, Easing::Linear, 0);
        let (sides, scale) = tween.value_at(500);
        assert_eq!(sides, 17.0);
        assert_eq!(scale, 0.75);
    }

    #[test]
    fn clock_times_sweep_through_whole_minutes() {
        let mut tween = Tween::new(ClockTime::new(9, 51, 45.0));
        tween.retarget(ClockTime::new(9, 52, 15.0), 1000, Easing::Linear, 0);
        // 30 seconds of travel; half way lands on 9:52:00
        assert_eq!(tween.value_at(500), ClockTime::new(9, 52, 0.0));
    }
}
