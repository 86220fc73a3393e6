use std::time::Duration;

use brace_core::{AnimationSpec, Clock, Result, SharedClock};
use brace_ui::{Autoplay, CarouselConfig, Controls, IndexChange, SlideVisual};
use web_time::Instant;

use crate::content::{HERO_SLIDES, HeroSlide, MONTHLY_PRICE, PRICE, PRICING_PERKS};
use crate::section::{CarouselSection, SlideContent};

pub fn hero_config() -> CarouselConfig {
    CarouselConfig::new(HERO_SLIDES.len())
        .inactive_scale(1.0)
        .inactive_opacity(0.0)
}

fn hero_slide(s: &HeroSlide) -> SlideContent {
    SlideContent {
        heading: s.title.to_string(),
        lines: vec![s.subtitle.to_string()],
        embed: None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingBadge {
    pub price: &'static str,
    pub monthly: &'static str,
    pub perks: [&'static str; 3],
}

impl Default for PricingBadge {
    fn default() -> Self {
        Self {
            price: PRICE,
            monthly: MONTHLY_PRICE,
            perks: PRICING_PERKS,
        }
    }
}

/// Timer-only carousel: no swipe, no controls, crossfades every interval
/// and wraps around. Built inside a scope, the timer stops with it.
pub struct HeroRotator {
    slides: CarouselSection<HeroSlide>,
    autoplay: Autoplay,
    clock: SharedClock,
    badge: PricingBadge,
}

impl HeroRotator {
    pub fn new(interval: Duration, clock: SharedClock) -> Result<Self> {
        let slides = CarouselSection::new("Hero", &HERO_SLIDES, hero_config(), Controls::empty(), hero_slide)?
            .with_transition(AnimationSpec::fade());
        Ok(Self {
            slides,
            autoplay: Autoplay::new(interval, clock.clone()),
            clock,
            badge: PricingBadge::default(),
        })
    }

    pub fn tick(&mut self) -> Option<IndexChange> {
        self.autoplay.tick(self.slides.controller_mut())
    }

    pub fn current(&self) -> usize {
        self.slides.current()
    }

    pub fn active_slide(&self) -> Option<&'static HeroSlide> {
        self.slides.active_item()
    }

    pub fn badge(&self) -> &PricingBadge {
        &self.badge
    }

    pub fn is_rotating(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn stop(&self) {
        self.autoplay.stop();
    }

    pub fn frame(&mut self) -> Vec<SlideVisual> {
        let now: Instant = self.clock.now();
        self.slides.frame(now)
    }

    pub fn slides(&self) -> &CarouselSection<HeroSlide> {
        &self.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brace_core::input::PointerEvent;
    use brace_core::{ManualClock, Scope};
    use brace_ui::HERO_INTERVAL;

    #[test]
    fn rotates_every_interval_and_wraps() {
        let clock = ManualClock::new();
        let mut hero = HeroRotator::new(HERO_INTERVAL, clock.shared()).unwrap();
        let mut seen = vec![hero.current()];
        for _ in 0..3 {
            clock.advance(HERO_INTERVAL);
            hero.tick();
            seen.push(hero.current());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
        assert_eq!(hero.active_slide().map(|s| s.title), Some("Keep on Living. Ditch the Crutches."));
    }

    #[test]
    fn ignores_touch() {
        let clock = ManualClock::new();
        let mut hero = HeroRotator::new(HERO_INTERVAL, clock.shared()).unwrap();
        hero.slides.pointer(&PointerEvent::touch_down(1, 300.0, 10.0));
        hero.slides.pointer(&PointerEvent::touch_move(1, 0.0, 10.0));
        hero.slides.pointer(&PointerEvent::touch_up(1, 0.0, 10.0));
        assert_eq!(hero.current(), 0);
        assert!(!hero.slides().carousel().is_dragging());
    }

    #[test]
    fn crossfades_over_a_second() {
        let clock = ManualClock::new();
        let mut hero = HeroRotator::new(Duration::from_secs(15), clock.shared()).unwrap();
        clock.advance(Duration::from_secs(15));
        hero.tick();
        let f = hero.frame();
        assert_eq!(f[1].opacity, 0.0);
        clock.advance(Duration::from_millis(500));
        let f = hero.frame();
        assert!((f[1].opacity - 0.5).abs() < 1e-4);
        clock.advance(Duration::from_millis(500));
        let f = hero.frame();
        assert_eq!((f[0].opacity, f[1].opacity), (0.0, 1.0));
    }

    #[test]
    fn teardown_stops_rotation() {
        let clock = ManualClock::new();
        let scope = Scope::new();
        let mut hero = scope
            .run(|| HeroRotator::new(HERO_INTERVAL, clock.shared()))
            .unwrap();
        scope.dispose();
        assert!(!hero.is_rotating());
        clock.advance(HERO_INTERVAL * 4);
        assert_eq!(hero.tick(), None);
        assert_eq!(hero.current(), 0);
    }
}
