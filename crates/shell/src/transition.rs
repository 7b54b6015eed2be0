//! Highlight transitions
//!
//! Eased fades for hover highlights, advanced once per frame.

/// Frame length assumed by [`Fade::tick`], matches the shell loop sleep
pub const FRAME_MS: f32 = 16.0;

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingFunction {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

/// Apply easing function to a progress value (0.0 to 1.0)
pub fn apply_easing(t: f32, timing: TimingFunction) -> f32 {
    match timing {
        TimingFunction::Linear => t.clamp(0.0, 1.0),
        TimingFunction::Ease => cubic_bezier(t, 0.25, 0.1, 0.25, 1.0),
        TimingFunction::EaseIn => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
        TimingFunction::EaseOut => cubic_bezier(t, 0.0, 0.0, 0.58, 1.0),
        TimingFunction::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
        TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
    }
}

/// Calculate cubic bezier curve value at time t
/// Uses binary search to find the x parameter, then evaluates y
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut low = 0.0_f32;
    let mut high = 1.0_f32;

    // 16 iterations gives us good precision
    for _ in 0..16 {
        let mid = (low + high) / 2.0;
        if bezier_point(mid, x1, x2) < t {
            low = mid;
        } else {
            high = mid;
        }
    }

    bezier_point((low + high) / 2.0, y1, y2)
}

/// B(t) = 3(1-t)^2*t*p1 + 3(1-t)*t^2*p2 + t^3
fn bezier_point(t: f32, p1: f32, p2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

/// A value easing towards a target
///
/// Retargeting mid-flight starts the new fade from wherever the old one
/// currently is, so quick enter/leave sequences don't jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    start: f32,
    end: f32,
    elapsed_ms: f32,
    duration_ms: f32,
    timing: TimingFunction,
}

impl Fade {
    /// A fade resting at `value`
    pub fn new(value: f32, duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            start: value,
            end: value,
            elapsed_ms: duration_ms,
            duration_ms,
            timing,
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.end;
        }
        let progress = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * apply_easing(progress, self.timing)
    }

    pub fn target(&self) -> f32 {
        self.end
    }

    /// Start easing towards `target` from the current value
    pub fn retarget(&mut self, target: f32) {
        if target == self.end {
            return;
        }
        self.start = self.value();
        self.end = target;
        self.elapsed_ms = 0.0;
    }

    /// Advance by `delta_ms`
    pub fn advance(&mut self, delta_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms.max(0.0));
    }

    /// Advance by one frame
    pub fn tick(&mut self) {
        self.advance(FRAME_MS);
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        assert_eq!(apply_easing(0.0, TimingFunction::Linear), 0.0);
        assert_eq!(apply_easing(0.5, TimingFunction::Linear), 0.5);
        assert_eq!(apply_easing(1.0, TimingFunction::Linear), 1.0);
    }

    #[test]
    fn test_ease_easing() {
        let start = apply_easing(0.0, TimingFunction::Ease);
        let mid = apply_easing(0.5, TimingFunction::Ease);
        let end = apply_easing(1.0, TimingFunction::Ease);

        assert!(start.abs() < 0.001);
        assert!((end - 1.0).abs() < 0.001);
        assert!(mid > 0.5);
    }

    #[test]
    fn test_ease_in_and_out() {
        assert!(apply_easing(0.5, TimingFunction::EaseIn) < 0.5);
        assert!(apply_easing(0.5, TimingFunction::EaseOut) > 0.5);
    }

    #[test]
    fn test_fade_reaches_target() {
        let mut fade = Fade::new(0.0, 100.0, TimingFunction::Linear);
        assert!(fade.is_complete());

        fade.retarget(1.0);
        assert_eq!(fade.value(), 0.0);

        fade.advance(50.0);
        assert!((fade.value() - 0.5).abs() < 0.001);

        fade.advance(500.0);
        assert!(fade.is_complete());
        assert_eq!(fade.value(), 1.0);
    }

    #[test]
    fn test_fade_retarget_mid_flight() {
        let mut fade = Fade::new(0.0, 100.0, TimingFunction::Linear);
        fade.retarget(1.0);
        fade.advance(25.0);

        fade.retarget(0.0);
        assert!((fade.value() - 0.25).abs() < 0.001);
        assert_eq!(fade.target(), 0.0);

        fade.advance(100.0);
        assert_eq!(fade.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut fade = Fade::new(0.0, 0.0, TimingFunction::Ease);
        fade.retarget(1.0);
        assert_eq!(fade.value(), 1.0);
        fade.tick();
        assert!(fade.is_complete());
    }
}
