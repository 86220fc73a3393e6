use brace_core::{AnimationSpec, Tween};
use web_time::Instant;

use crate::carousel::CarouselController;
use crate::visual::SlideVisual;

struct SlideTweens {
    translate: Tween<f32>,
    scale: Tween<f32>,
    opacity: Tween<f32>,
}

/// Eases slides toward their resting visual state after an index change.
///
/// While a drag is live the slides follow the finger exactly; once released
/// they settle over `AnimationSpec::slide()`.
pub struct SlideTransitions {
    slides: Vec<SlideTweens>,
}

impl SlideTransitions {
    pub fn new(carousel: &CarouselController) -> Self {
        Self::with_spec(carousel, AnimationSpec::slide())
    }

    pub fn with_spec(carousel: &CarouselController, spec: AnimationSpec) -> Self {
        let slides = carousel
            .visuals()
            .into_iter()
            .map(|v| SlideTweens {
                translate: Tween::new(v.translate_percent, spec),
                scale: Tween::new(v.scale, spec),
                opacity: Tween::new(v.opacity, spec),
            })
            .collect();
        Self { slides }
    }

    pub fn is_animating(&self) -> bool {
        self.slides
            .iter()
            .any(|s| s.translate.is_running() || s.scale.is_running() || s.opacity.is_running())
    }

    /// Visuals to draw at `now`.
    pub fn frame(&mut self, carousel: &CarouselController, now: Instant) -> Vec<SlideVisual> {
        let dragging = carousel.is_dragging();
        carousel
            .visuals()
            .into_iter()
            .zip(self.slides.iter_mut())
            .map(|(target, t)| {
                if dragging {
                    t.translate.snap(target.translate_percent);
                    t.scale.snap(target.scale);
                    t.opacity.snap(target.opacity);
                    return target;
                }
                t.translate.retarget(target.translate_percent, now);
                t.scale.retarget(target.scale, now);
                t.opacity.retarget(target.opacity, now);
                SlideVisual {
                    translate_percent: t.translate.sample(now),
                    scale: t.scale.sample(now),
                    opacity: t.opacity.sample(now),
                    ..target
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselConfig;
    use brace_core::{Clock, ManualClock, Vec2};
    use std::time::Duration;

    #[test]
    fn settles_in_300ms() {
        let clock = ManualClock::new();
        let mut c = CarouselController::new(CarouselConfig::new(3)).unwrap();
        let mut anim = SlideTransitions::new(&c);

        c.next();
        let f = anim.frame(&c, clock.now());
        assert_eq!(f[0].translate_percent, 0.0);
        assert!(anim.is_animating());

        clock.advance(Duration::from_millis(150));
        let f = anim.frame(&c, clock.now());
        assert!(f[1].translate_percent > 0.0 && f[1].translate_percent < 50.0);

        clock.advance(Duration::from_millis(150));
        let f = anim.frame(&c, clock.now());
        assert_eq!(f[0].translate_percent, -100.0);
        assert_eq!(f[1].translate_percent, 0.0);
        assert_eq!(f[1].scale, 1.0);
        assert!(!anim.is_animating());
    }

    #[test]
    fn drag_is_followed_without_easing() {
        let clock = ManualClock::new();
        let mut c = CarouselController::new(CarouselConfig::new(3)).unwrap();
        c.set_container_width(200.0);
        let mut anim = SlideTransitions::new(&c);

        c.on_gesture_start(Vec2::ZERO);
        c.on_gesture_move(Vec2::new(-50.0, 0.0));
        let f = anim.frame(&c, clock.now());
        assert_eq!(f[0].translate_percent, -25.0);
        assert!(!anim.is_animating());
    }
}
