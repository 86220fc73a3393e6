use bitflags::bitflags;
use smallvec::SmallVec;

use crate::carousel::{CarouselController, IndexChange};

bitflags! {
    /// Which navigation affordances a host shows next to its slides.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Controls: u8 {
        const SWIPE  = 1 << 0;
        const DOTS   = 1 << 1;
        const ARROWS = 1 << 2;
        const TABS   = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Pagination and arrow state for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerState {
    pub controls: Controls,
    pub dots: SmallVec<[Dot; 6]>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerAction {
    Previous,
    Next,
    Dot(usize),
    Tab(usize),
}

impl PagerState {
    pub fn of(carousel: &CarouselController, controls: Controls) -> Self {
        let current = carousel.current();
        let dots = if controls.intersects(Controls::DOTS | Controls::TABS) {
            (0..carousel.slide_count())
                .map(|index| Dot {
                    index,
                    active: index == current,
                })
                .collect()
        } else {
            SmallVec::new()
        };
        let arrows = controls.contains(Controls::ARROWS);
        PagerState {
            controls,
            dots,
            prev_enabled: arrows && !carousel.is_first(),
            next_enabled: arrows && !carousel.is_last(),
        }
    }
}

/// Applies a control press. Presses on controls the host doesn't show are
/// dropped.
pub fn apply(
    carousel: &mut CarouselController,
    controls: Controls,
    action: PagerAction,
) -> Option<IndexChange> {
    match action {
        PagerAction::Previous if controls.contains(Controls::ARROWS) => carousel.previous(),
        PagerAction::Next if controls.contains(Controls::ARROWS) => carousel.next(),
        PagerAction::Dot(i) if controls.contains(Controls::DOTS) => carousel.go_to(target(i)),
        PagerAction::Tab(i) if controls.contains(Controls::TABS) => carousel.go_to(target(i)),
        _ => {
            log::debug!("pager: {action:?} not available with {controls:?}");
            None
        }
    }
}

// Out-of-range presses clamp to the last slide rather than wrapping negative.
fn target(i: usize) -> isize {
    isize::try_from(i).unwrap_or(isize::MAX)
}
