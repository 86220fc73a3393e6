use smallvec::SmallVec;

use crate::carousel::CarouselController;

/// Per-slide render state, derived from the controller on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideVisual {
    pub index: usize,
    /// `index - current`
    pub relative: isize,
    pub active: bool,
    /// Only the active slide and its direct neighbours are ever drawn.
    pub renderable: bool,
    /// Only the active slide receives pointer input.
    pub interactive: bool,
    pub translate_percent: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl CarouselController {
    /// Live drag expressed as a percentage of the container width.
    pub fn drag_percent(&self) -> f32 {
        let width = self.container_width();
        if !self.is_dragging() || width <= 0.0 {
            return 0.0;
        }
        self.live_offset() / width * 100.0
    }

    pub fn slide_visual(&self, index: usize) -> SlideVisual {
        let cfg = self.config();
        let relative = index as isize - self.current() as isize;
        let active = relative == 0;
        let renderable = relative.abs() <= 1;
        let (scale, base_opacity) = if active {
            (1.0, 1.0)
        } else {
            (cfg.inactive_scale, cfg.inactive_opacity)
        };
        SlideVisual {
            index,
            relative,
            active,
            renderable,
            interactive: active,
            translate_percent: relative as f32 * 100.0 + self.drag_percent(),
            scale,
            opacity: if renderable { base_opacity } else { 0.0 },
            z_index: if active { 2 } else { 1 },
        }
    }

    /// Visual state for every slide, in order.
    pub fn visuals(&self) -> Vec<SlideVisual> {
        (0..self.slide_count()).map(|i| self.slide_visual(i)).collect()
    }

    /// The (at most three) slides that need drawing: previous, active, next.
    pub fn renderable_window(&self) -> SmallVec<[SlideVisual; 3]> {
        let cur = self.current();
        let lo = cur.saturating_sub(1);
        let hi = (cur + 1).min(self.slide_count() - 1);
        (lo..=hi).map(|i| self.slide_visual(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::carousel::{CarouselConfig, CarouselController};
    use brace_core::Vec2;

    #[test]
    fn only_neighbours_are_renderable() {
        for n in 3..8usize {
            let mut c = CarouselController::new(CarouselConfig::new(n)).unwrap();
            for cur in 0..n {
                c.go_to(cur as isize);
                let visible: Vec<usize> = c
                    .visuals()
                    .iter()
                    .filter(|v| v.renderable)
                    .map(|v| v.index)
                    .collect();
                let expected: Vec<usize> = (cur.saturating_sub(1)..=(cur + 1).min(n - 1)).collect();
                assert_eq!(visible, expected, "n={n} cur={cur}");
                assert_eq!(c.renderable_window().len(), expected.len());
                assert!(c.visuals().iter().filter(|v| !v.renderable).all(|v| v.opacity == 0.0));
                assert_eq!(c.visuals().iter().filter(|v| v.interactive).count(), 1);
            }
        }
    }

    #[test]
    fn inactive_slides_use_configured_look() {
        let mut c = CarouselController::new(
            CarouselConfig::new(4).inactive_scale(0.75).inactive_opacity(0.2),
        )
        .unwrap();
        c.go_to(1);
        let v = c.visuals();
        assert_eq!((v[1].scale, v[1].opacity, v[1].z_index), (1.0, 1.0, 2));
        assert_eq!((v[0].scale, v[0].opacity, v[0].z_index), (0.75, 0.2, 1));
        assert_eq!(v[2].translate_percent, 100.0);
        assert_eq!(v[0].translate_percent, -100.0);
        assert_eq!(v[3].opacity, 0.0);
    }

    #[test]
    fn drag_shifts_every_slide_by_container_fraction() {
        let mut c = CarouselController::new(CarouselConfig::new(3)).unwrap();
        c.go_to(1);
        c.set_container_width(400.0);
        c.on_gesture_start(Vec2::ZERO);
        c.on_gesture_move(Vec2::new(-100.0, 0.0));
        let v = c.visuals();
        assert!((v[1].translate_percent + 25.0).abs() < 1e-4);
        assert!((v[2].translate_percent - 75.0).abs() < 1e-4);

        // -100 px is past the threshold: the next slide settles in place.
        c.on_gesture_end();
        assert_eq!(c.current(), 2);
        assert_eq!(c.slide_visual(2).translate_percent, 0.0);
        assert_eq!(c.slide_visual(1).translate_percent, -100.0);

        // A short drag springs back with no residual offset.
        c.on_gesture_start(Vec2::ZERO);
        c.on_gesture_move(Vec2::new(20.0, 0.0));
        assert!((c.slide_visual(2).translate_percent - 5.0).abs() < 1e-4);
        assert_eq!(c.on_gesture_end(), None);
        assert_eq!(c.slide_visual(2).translate_percent, 0.0);
    }

    #[test]
    fn unknown_width_contributes_no_drag() {
        let mut c = CarouselController::new(CarouselConfig::new(3)).unwrap();
        c.on_gesture_start(Vec2::ZERO);
        c.on_gesture_move(Vec2::new(-100.0, 0.0));
        assert_eq!(c.drag_percent(), 0.0);
        assert_eq!(c.slide_visual(0).translate_percent, 0.0);
    }
}
