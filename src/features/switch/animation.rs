//! Progress stroke animation
//!
//! [`AnimationSpec`] describes one pass of the indicator stroke: which end
//! of the stroke moves, for how long and along which timing curve.
//! [`ProgressAnimation`] is the attached, endlessly repeating instance the
//! state machine owns while a press is held.

use std::time::{Duration, Instant};

/// Direction of the indicator animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Stroke grows from nothing to a full circle
    #[default]
    Loading,
    /// Full stroke retracts until nothing is left
    Deloading,
}

impl Direction {
    pub fn from_deloading(is_deloading: bool) -> Self {
        if is_deloading {
            Direction::Deloading
        } else {
            Direction::Loading
        }
    }
}

/// Animated stroke property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeProperty {
    StrokeStart,
    StrokeEnd,
}

impl StrokeProperty {
    pub fn key_path(&self) -> &'static str {
        match self {
            StrokeProperty::StrokeStart => "strokeStart",
            StrokeProperty::StrokeEnd => "strokeEnd",
        }
    }
}

/// Visible portion of a closed stroke, as fractions of its length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeTrim {
    pub start: f32,
    pub end: f32,
}

impl StrokeTrim {
    pub const FULL: StrokeTrim = StrokeTrim {
        start: 0.0,
        end: 1.0,
    };

    pub const NONE: StrokeTrim = StrokeTrim {
        start: 0.0,
        end: 0.0,
    };

    pub fn visible_fraction(&self) -> f32 {
        (self.end - self.start).clamp(0.0, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.visible_fraction() <= f32::EPSILON
    }
}

/// Cubic Bézier timing curve through (0, 0) and (1, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingCurve {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl TimingCurve {
    pub const LINEAR: TimingCurve = TimingCurve::new(0.0, 0.0, 1.0, 1.0);
    pub const EASE_IN_EASE_OUT: TimingCurve = TimingCurve::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    /// Eased progress for linear progress `t` in 0..=1
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        // x(s) is monotonic for control points inside the unit square
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        let mut s = t;
        for _ in 0..32 {
            let x = Self::bezier(self.x1, self.x2, s);
            if (x - t).abs() < 1e-6 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }

        Self::bezier(self.y1, self.y2, s)
    }
}

/// One pass of the indicator stroke animation
///
/// Immutable once built; a new spec is made for every press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    direction: Direction,
    duration: Duration,
    curve: TimingCurve,
}

impl AnimationSpec {
    pub fn new(direction: Direction, duration: Duration) -> Self {
        Self {
            direction,
            duration,
            curve: TimingCurve::EASE_IN_EASE_OUT,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn curve(&self) -> TimingCurve {
        self.curve
    }

    /// Stroke property this animation drives
    pub fn property(&self) -> StrokeProperty {
        match self.direction {
            Direction::Loading => StrokeProperty::StrokeEnd,
            Direction::Deloading => StrokeProperty::StrokeStart,
        }
    }

    pub fn from_value(&self) -> f32 {
        0.0
    }

    pub fn to_value(&self) -> f32 {
        1.0
    }

    /// Animated property value `elapsed` into a single pass
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to_value();
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = self.curve.apply(t);
        self.from_value() + (self.to_value() - self.from_value()) * eased
    }

    /// Visible stroke `elapsed` into a single pass
    pub fn trim_at(&self, elapsed: Duration) -> StrokeTrim {
        let value = self.value_at(elapsed);
        match self.property() {
            StrokeProperty::StrokeEnd => StrokeTrim {
                start: 0.0,
                end: value,
            },
            StrokeProperty::StrokeStart => StrokeTrim {
                start: value,
                end: 1.0,
            },
        }
    }
}

/// An [`AnimationSpec`] attached to the indicator, repeating until removed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    spec: AnimationSpec,
    started_at: Instant,
}

impl ProgressAnimation {
    pub fn start(spec: AnimationSpec, now: Instant) -> Self {
        Self {
            spec,
            started_at: now,
        }
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Completed passes at `now`
    pub fn cycles(&self, now: Instant) -> u32 {
        let duration = self.spec.duration();
        if duration.is_zero() {
            return 0;
        }
        (self.elapsed(now).as_secs_f64() / duration.as_secs_f64()).floor() as u32
    }

    /// Visible stroke at `now`, wrapping back to the first frame after every pass
    pub fn sample(&self, now: Instant) -> StrokeTrim {
        let duration = self.spec.duration();
        if duration.is_zero() {
            return self.spec.trim_at(Duration::ZERO);
        }
        let elapsed = self.elapsed(now).as_secs_f64() % duration.as_secs_f64();
        self.spec.trim_at(Duration::from_secs_f64(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn loading_drives_stroke_end() {
        let spec = AnimationSpec::new(Direction::Loading, Duration::from_secs(1));
        assert_eq!(spec.property(), StrokeProperty::StrokeEnd);
        assert_eq!(spec.property().key_path(), "strokeEnd");
        assert_eq!(spec.trim_at(Duration::ZERO), StrokeTrim::NONE);
        assert_eq!(spec.trim_at(Duration::from_secs(1)), StrokeTrim::FULL);
    }

    #[test]
    fn deloading_drives_stroke_start() {
        let spec = AnimationSpec::new(Direction::Deloading, Duration::from_secs(1));
        assert_eq!(spec.property().key_path(), "strokeStart");
        assert_eq!(spec.trim_at(Duration::ZERO), StrokeTrim::FULL);

        let done = spec.trim_at(Duration::from_secs(1));
        assert!(done.is_empty());
    }

    #[test]
    fn ease_in_ease_out_is_symmetric() {
        let curve = TimingCurve::EASE_IN_EASE_OUT;
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
        assert!(approx(curve.apply(0.5), 0.5));
        for t in [0.1, 0.2, 0.3, 0.4] {
            assert!(approx(curve.apply(t) + curve.apply(1.0 - t), 1.0));
        }
        // slow start
        assert!(curve.apply(0.1) < 0.1);
    }

    #[test]
    fn linear_curve_is_identity() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx(TimingCurve::LINEAR.apply(t), t));
        }
    }

    #[test]
    fn value_is_clamped_past_duration() {
        let spec = AnimationSpec::new(Direction::Loading, Duration::from_millis(500));
        assert_eq!(spec.value_at(Duration::from_secs(3)), 1.0);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let spec = AnimationSpec::new(Direction::Loading, Duration::ZERO);
        assert_eq!(spec.value_at(Duration::ZERO), 1.0);
    }

    #[test]
    fn attached_animation_repeats() {
        let start = Instant::now();
        let spec = AnimationSpec::new(Direction::Loading, Duration::from_secs(1));
        let animation = ProgressAnimation::start(spec, start);

        let first = animation.sample(start + Duration::from_millis(250));
        let second = animation.sample(start + Duration::from_millis(1250));
        assert!(approx(first.end, second.end));
        assert_eq!(animation.cycles(start + Duration::from_millis(2500)), 2);
    }

    #[test]
    fn sampling_before_start_shows_first_frame() {
        let start = Instant::now();
        let spec = AnimationSpec::new(Direction::Loading, Duration::from_secs(1));
        let animation = ProgressAnimation::start(spec, start + Duration::from_secs(1));
        assert_eq!(animation.sample(start), StrokeTrim::NONE);
    }
}
