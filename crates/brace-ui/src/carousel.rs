//! # Carousel controller
//!
//! One parameterised state machine behind every swipeable strip on the
//! landing pages (reviews, patient videos, how-it-works steps, comparison
//! tables) and, in a timer-only configuration, the hero rotator.
//!
//! ```text
//! Idle ──start──▶ Dragging(undecided) ──move > slop──▶ Dragging(horizontal) ──end──▶ Idle
//!                        │                                     (snap ±1 if |offset| > threshold)
//!                        └──move > slop, mostly vertical──▶ Idle   (native scroll takes over)
//! ```
//!
//! The controller owns only the cursor and the live drag session. Visual
//! state per slide is derived on demand (see `visual.rs`), and the cursor is
//! published through a `Signal<usize>` so hosts can react to index changes
//! (captions, tab labels, embedded players) without polling.

use brace_core::{Error, Result, Signal, Vec2, signal};

/// Minimum `|offset|` (px) a released horizontal drag needs to change slides.
pub const DRAG_THRESHOLD_PX: f32 = 50.0;
/// Damping applied when dragging past the first or last slide.
pub const EDGE_RESISTANCE: f32 = 0.3;
/// Movement (px) on either axis before a gesture commits to an axis.
pub const AXIS_SLOP_PX: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub slide_count: usize,
    pub resistance: f32,
    pub threshold_px: f32,
    pub inactive_scale: f32,
    pub inactive_opacity: f32,
    /// When false every move is treated as horizontal (single-axis strips).
    pub detect_vertical_axis: bool,
    pub axis_slop_px: f32,
}

impl CarouselConfig {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            resistance: EDGE_RESISTANCE,
            threshold_px: DRAG_THRESHOLD_PX,
            inactive_scale: 0.85,
            inactive_opacity: 0.4,
            detect_vertical_axis: true,
            axis_slop_px: AXIS_SLOP_PX,
        }
    }

    pub fn inactive_scale(mut self, scale: f32) -> Self {
        self.inactive_scale = scale;
        self
    }

    pub fn inactive_opacity(mut self, opacity: f32) -> Self {
        self.inactive_opacity = opacity;
        self
    }

    pub fn detect_vertical_axis(mut self, detect: bool) -> Self {
        self.detect_vertical_axis = detect;
        self
    }

    pub fn resistance(mut self, factor: f32) -> Self {
        self.resistance = factor;
        self
    }

    pub fn threshold(mut self, px: f32) -> Self {
        self.threshold_px = px;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.slide_count == 0 {
            return Err(Error::EmptySlideSet);
        }
        let checks = [
            ("resistance", self.resistance, (0.0..=1.0).contains(&self.resistance)),
            ("threshold_px", self.threshold_px, self.threshold_px >= 0.0),
            ("inactive_scale", self.inactive_scale, self.inactive_scale > 0.0),
            (
                "inactive_opacity",
                self.inactive_opacity,
                (0.0..=1.0).contains(&self.inactive_opacity),
            ),
            ("axis_slop_px", self.axis_slop_px, self.axis_slop_px >= 0.0),
        ];
        for (field, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(Error::InvalidTuning { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Undecided,
    Horizontal,
    Vertical,
}

/// Present only between gesture start and gesture end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub origin: Vec2,
    pub axis: Axis,
    /// Signed horizontal delta after edge resistance.
    pub live_offset: f32,
}

/// What the host should do with the platform's native pan/scroll for the
/// event that produced this response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureResponse {
    /// No session; the event is not ours.
    Ignored,
    /// Session open, axis not decided yet.
    Pending,
    /// The carousel owns horizontal motion; suppress native scrolling.
    Capture,
    /// The gesture turned vertical; the session is gone and native scroll proceeds.
    Release,
}

impl GestureResponse {
    pub fn suppress_native_scroll(self) -> bool {
        matches!(self, GestureResponse::Capture)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
}

pub struct CarouselController {
    config: CarouselConfig,
    index: Signal<usize>,
    session: Option<DragSession>,
    container_width: f32,
}

impl std::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("index", &self.current())
            .field("slide_count", &self.config.slide_count)
            .field("session", &self.session)
            .finish()
    }
}

impl CarouselController {
    pub fn new(config: CarouselConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            index: signal(0),
            session: None,
            container_width: 0.0,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn slide_count(&self) -> usize {
        self.config.slide_count
    }

    pub fn current(&self) -> usize {
        self.index.get()
    }

    /// Cursor as an observable; subscribers see every committed index change.
    pub fn index_signal(&self) -> &Signal<usize> {
        &self.index
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn live_offset(&self) -> f32 {
        self.session.map(|s| s.live_offset).unwrap_or(0.0)
    }

    pub fn set_container_width(&mut self, width: f32) {
        if !width.is_finite() || width < 0.0 {
            log::warn!("carousel: ignoring container width {width}");
            return;
        }
        if width == 0.0 {
            log::warn!("carousel: zero container width, drags will not move slides");
        }
        self.container_width = width;
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn is_first(&self) -> bool {
        self.current() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current() + 1 >= self.config.slide_count
    }

    pub fn on_gesture_start(&mut self, at: Vec2) -> GestureResponse {
        let axis = if self.config.detect_vertical_axis {
            Axis::Undecided
        } else {
            Axis::Horizontal
        };
        self.session = Some(DragSession {
            origin: at,
            axis,
            live_offset: 0.0,
        });
        match axis {
            Axis::Horizontal => GestureResponse::Capture,
            _ => GestureResponse::Pending,
        }
    }

    pub fn on_gesture_move(&mut self, at: Vec2) -> GestureResponse {
        let Some(mut session) = self.session else {
            return GestureResponse::Ignored;
        };
        let d = at - session.origin;

        if session.axis == Axis::Undecided {
            let slop = self.config.axis_slop_px;
            if d.x.abs() <= slop && d.y.abs() <= slop {
                return GestureResponse::Pending;
            }
            session.axis = if d.x.abs() > d.y.abs() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            log::debug!("carousel: axis resolved {:?} (dx={}, dy={})", session.axis, d.x, d.y);
        }

        if session.axis == Axis::Vertical {
            // Cede the whole gesture to native scrolling.
            self.session = None;
            return GestureResponse::Release;
        }

        session.live_offset = self.resist(d.x);
        self.session = Some(session);
        GestureResponse::Capture
    }

    /// Ends the gesture. Snaps at most one slide, and only for a horizontal
    /// drag past the threshold.
    pub fn on_gesture_end(&mut self) -> Option<IndexChange> {
        let session = self.session.take()?;
        if session.axis != Axis::Horizontal {
            return None;
        }
        let offset = session.live_offset;
        if offset.abs() <= self.config.threshold_px {
            return None;
        }
        let cur = self.current();
        let target = if offset < 0.0 {
            (cur + 1).min(self.config.slide_count - 1)
        } else {
            cur.saturating_sub(1)
        };
        self.commit(target)
    }

    pub fn next(&mut self) -> Option<IndexChange> {
        if self.navigation_blocked() || self.is_last() {
            return None;
        }
        self.commit(self.current() + 1)
    }

    pub fn previous(&mut self) -> Option<IndexChange> {
        if self.navigation_blocked() || self.is_first() {
            return None;
        }
        self.commit(self.current() - 1)
    }

    /// Direct jump used by dots, tabs and external links; clamps into range.
    pub fn go_to(&mut self, index: isize) -> Option<IndexChange> {
        if self.navigation_blocked() {
            return None;
        }
        let last = (self.config.slide_count - 1) as isize;
        self.commit(index.clamp(0, last) as usize)
    }

    /// Timer step for rotators: last slide wraps to the first.
    pub fn advance_wrapping(&mut self) -> Option<IndexChange> {
        if self.navigation_blocked() {
            return None;
        }
        let next = (self.current() + 1) % self.config.slide_count;
        self.commit(next)
    }

    fn navigation_blocked(&self) -> bool {
        if self.session.is_some() {
            log::debug!("carousel: navigation ignored during an active gesture");
            return true;
        }
        false
    }

    fn resist(&self, dx: f32) -> f32 {
        let at_first_pulling_right = self.is_first() && dx > 0.0;
        let at_last_pulling_left = self.is_last() && dx < 0.0;
        if at_first_pulling_right || at_last_pulling_left {
            dx * self.config.resistance
        } else {
            dx
        }
    }

    fn commit(&mut self, to: usize) -> Option<IndexChange> {
        let from = self.current();
        if to == from {
            return None;
        }
        // Gesture end takes the session before committing; navigation is
        // blocked while one is open.
        debug_assert!(self.session.is_none());
        log::debug!("carousel: index {from} -> {to}");
        self.index.set(to);
        Some(IndexChange { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> CarouselController {
        CarouselController::new(CarouselConfig::new(n)).unwrap()
    }

    fn drag(c: &mut CarouselController, dx: f32) -> Option<IndexChange> {
        c.on_gesture_start(Vec2::new(200.0, 100.0));
        c.on_gesture_move(Vec2::new(200.0 + dx, 100.0));
        c.on_gesture_end()
    }

    #[test]
    fn rejects_empty_slide_set() {
        assert_eq!(
            CarouselController::new(CarouselConfig::new(0)).unwrap_err(),
            Error::EmptySlideSet
        );
        assert!(matches!(
            CarouselController::new(CarouselConfig::new(3).resistance(1.5)),
            Err(Error::InvalidTuning { field: "resistance", .. })
        ));
    }

    #[test]
    fn go_to_clamps_into_range() {
        let mut c = carousel(4);
        c.go_to(-5);
        assert_eq!(c.current(), 0);
        c.go_to(99);
        assert_eq!(c.current(), 3);
        assert_eq!(c.go_to(2), Some(IndexChange { from: 3, to: 2 }));
        assert_eq!(c.go_to(2), None);
    }

    #[test]
    fn short_drag_never_changes_index() {
        let mut c = carousel(4);
        c.go_to(1);
        for dx in [-50.0, -20.0, 0.0, 30.0, 50.0] {
            assert_eq!(drag(&mut c, dx), None);
            assert_eq!(c.current(), 1);
        }
    }

    #[test]
    fn long_drag_moves_exactly_one_slide() {
        let mut c = carousel(4);
        c.go_to(1);
        assert_eq!(drag(&mut c, -120.0), Some(IndexChange { from: 1, to: 2 }));
        assert_eq!(drag(&mut c, -900.0), Some(IndexChange { from: 2, to: 3 }));
        assert_eq!(drag(&mut c, 400.0), Some(IndexChange { from: 3, to: 2 }));
    }

    #[test]
    fn edge_resistance_damps_overscroll() {
        let mut c = carousel(4);
        c.on_gesture_start(Vec2::new(0.0, 0.0));
        assert_eq!(c.on_gesture_move(Vec2::new(100.0, 0.0)), GestureResponse::Capture);
        assert!((c.live_offset() - 30.0).abs() < 1e-4);
        // Pulling left from the first slide is not overscroll.
        c.on_gesture_move(Vec2::new(-100.0, 0.0));
        assert!((c.live_offset() + 100.0).abs() < 1e-4);
        c.on_gesture_end();

        c.go_to(3);
        c.on_gesture_start(Vec2::new(0.0, 0.0));
        c.on_gesture_move(Vec2::new(-100.0, 0.0));
        assert!((c.live_offset() + 30.0).abs() < 1e-4);
    }

    #[test]
    fn damped_edge_drag_cannot_pass_the_boundary() {
        let mut c = carousel(3);
        // 150 * 0.3 = 45 < threshold, and even past it index 0 has no predecessor.
        assert_eq!(drag(&mut c, 150.0), None);
        assert_eq!(drag(&mut c, 1000.0), None);
        assert_eq!(c.current(), 0);

        c.go_to(2);
        assert_eq!(drag(&mut c, -150.0), None);
        assert_eq!(drag(&mut c, -1000.0), None);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn committed_swipe_leaves_no_drag_offset() {
        let mut c = carousel(3);
        c.set_container_width(400.0);
        assert_eq!(drag(&mut c, -120.0), Some(IndexChange { from: 0, to: 1 }));
        assert!(!c.is_dragging());
        assert_eq!(c.live_offset(), 0.0);
        assert_eq!(c.drag_percent(), 0.0);
    }

    #[test]
    fn zero_container_width_is_kept() {
        let mut c = carousel(3);
        c.set_container_width(400.0);
        c.set_container_width(0.0);
        assert_eq!(c.container_width(), 0.0);
        c.set_container_width(f32::NAN);
        c.set_container_width(-5.0);
        assert_eq!(c.container_width(), 0.0);

        c.on_gesture_start(Vec2::ZERO);
        c.on_gesture_move(Vec2::new(-30.0, 0.0));
        assert_eq!(c.live_offset(), -30.0);
        assert_eq!(c.drag_percent(), 0.0);
    }

    #[test]
    fn axis_stays_undecided_within_slop() {
        let mut c = carousel(3);
        c.on_gesture_start(Vec2::new(10.0, 10.0));
        assert_eq!(c.on_gesture_move(Vec2::new(14.0, 15.0)), GestureResponse::Pending);
        assert_eq!(c.session().map(|s| s.axis), Some(Axis::Undecided));
        assert_eq!(c.live_offset(), 0.0);
    }

    #[test]
    fn vertical_gesture_cancels_session() {
        let mut c = carousel(3);
        c.on_gesture_start(Vec2::new(10.0, 10.0));
        assert_eq!(c.on_gesture_move(Vec2::new(14.0, 60.0)), GestureResponse::Release);
        assert!(!c.is_dragging());
        // The rest of the gesture is not ours.
        assert_eq!(c.on_gesture_move(Vec2::new(-200.0, 80.0)), GestureResponse::Ignored);
        assert_eq!(c.on_gesture_end(), None);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn diagonal_tie_resolves_vertical() {
        let mut c = carousel(3);
        c.on_gesture_start(Vec2::ZERO);
        assert_eq!(c.on_gesture_move(Vec2::new(8.0, 8.0)), GestureResponse::Release);
    }

    #[test]
    fn single_axis_treats_every_move_as_horizontal() {
        let mut c = CarouselController::new(CarouselConfig::new(3).detect_vertical_axis(false)).unwrap();
        assert_eq!(c.on_gesture_start(Vec2::ZERO), GestureResponse::Capture);
        assert_eq!(c.on_gesture_move(Vec2::new(-60.0, 300.0)), GestureResponse::Capture);
        assert_eq!(c.on_gesture_end(), Some(IndexChange { from: 0, to: 1 }));
    }

    #[test]
    fn offset_tracks_cursor_not_accumulated_motion() {
        let mut c = carousel(3);
        c.go_to(1);
        c.on_gesture_start(Vec2::ZERO);
        c.on_gesture_move(Vec2::new(-80.0, 0.0));
        c.on_gesture_move(Vec2::new(40.0, 0.0));
        assert_eq!(c.live_offset(), 40.0);
        assert_eq!(c.on_gesture_end(), None);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn single_slide_is_inert() {
        let mut c = carousel(1);
        assert_eq!(c.next(), None);
        assert_eq!(c.previous(), None);
        assert_eq!(c.advance_wrapping(), None);
        assert_eq!(drag(&mut c, -500.0), None);
        assert_eq!(drag(&mut c, 500.0), None);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn arrows_are_noops_at_boundaries() {
        let mut c = carousel(2);
        assert_eq!(c.previous(), None);
        assert_eq!(c.next(), Some(IndexChange { from: 0, to: 1 }));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn navigation_waits_for_gesture_end() {
        let mut c = carousel(4);
        c.on_gesture_start(Vec2::ZERO);
        assert_eq!(c.go_to(3), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.current(), 0);
        c.on_gesture_end();
        assert_eq!(c.go_to(3), Some(IndexChange { from: 0, to: 3 }));
    }

    #[test]
    fn wrapping_advance_cycles() {
        let mut c = carousel(3);
        let seen: Vec<usize> = (0..4).filter_map(|_| c.advance_wrapping()).map(|ch| ch.to).collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn index_signal_reports_changes() {
        let mut c = carousel(3);
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        c.index_signal().subscribe({
            let log = log.clone();
            move |i| log.borrow_mut().push(*i)
        });
        c.next();
        c.go_to(0);
        c.go_to(0);
        assert_eq!(*log.borrow(), vec![1, 0]);
    }
}
