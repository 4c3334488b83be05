//! Hover glow using iced_anim
//!
//! Eases a 0..1 highlight in while the pointer is over the switch and back
//! out when it leaves.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover animation duration (150ms for snappy feel)
const HOVER_DURATION: Duration = Duration::from_millis(150);

/// Peak opacity of the highlight overlay
pub const GLOW_ALPHA: f32 = 0.08;

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

#[derive(Debug)]
pub struct HoverGlow {
    animation: Animated<f32>,
    hovered: bool,
}

impl Default for HoverGlow {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverGlow {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, hover_easing()),
            hovered: false,
        }
    }

    /// Pointer entered or left the switch
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.animation.update(if hovered { 1.0 } else { 0.0 }.into());
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        (*self.animation.value()).clamp(0.0, 1.0)
    }

    /// Overlay opacity for the current progress
    pub fn alpha(&self) -> f32 {
        self.progress() * GLOW_ALPHA
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        let glow = HoverGlow::new();
        assert_eq!(glow.progress(), 0.0);
        assert_eq!(glow.alpha(), 0.0);
        assert!(!glow.is_hovered());
    }

    #[test]
    fn hover_starts_animation() {
        let mut glow = HoverGlow::new();
        glow.set_hovered(true);
        assert!(glow.is_hovered());
        // Target is 1.0
        assert!(glow.is_animating() || glow.progress() > 0.0);
    }

    #[test]
    fn repeated_hover_is_ignored() {
        let mut glow = HoverGlow::new();
        glow.set_hovered(false);
        assert!(!glow.is_animating());
    }

    #[test]
    fn progress_stays_in_range() {
        let mut glow = HoverGlow::new();
        glow.set_hovered(true);
        glow.tick(Instant::now() + Duration::from_secs(1));
        assert!((0.0..=1.0).contains(&glow.progress()));
    }
}
