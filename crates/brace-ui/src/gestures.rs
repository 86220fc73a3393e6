use brace_core::input::{PointerButton, PointerEvent, PointerEventKind, PointerId, PointerKind};

use crate::carousel::{CarouselController, GestureResponse, IndexChange};

/// Result of feeding one pointer event to a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerOutcome {
    pub response: GestureResponse,
    pub change: Option<IndexChange>,
}

impl PointerOutcome {
    const IGNORED: PointerOutcome = PointerOutcome {
        response: GestureResponse::Ignored,
        change: None,
    };
}

/// Routes raw pointer events into a carousel's gesture session. Tracks the
/// pointer that started the gesture; other pointers are ignored until it
/// lifts.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeGestures {
    active: Option<PointerId>,
    accept_mouse: bool,
}

impl SwipeGestures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mouse drags also swipe (desktop previews). Touch and pen always do.
    pub fn with_mouse(mut self, accept: bool) -> Self {
        self.accept_mouse = accept;
        self
    }

    pub fn tracking(&self) -> Option<PointerId> {
        self.active
    }

    pub fn handle(&mut self, carousel: &mut CarouselController, ev: &PointerEvent) -> PointerOutcome {
        if ev.kind == PointerKind::Mouse && !self.accept_mouse {
            return PointerOutcome::IGNORED;
        }
        match ev.event {
            PointerEventKind::Down(PointerButton::Primary) => {
                if self.active.is_some() {
                    return PointerOutcome::IGNORED;
                }
                self.active = Some(ev.id);
                PointerOutcome {
                    response: carousel.on_gesture_start(ev.position),
                    change: None,
                }
            }
            PointerEventKind::Move if self.active == Some(ev.id) => PointerOutcome {
                response: carousel.on_gesture_move(ev.position),
                change: None,
            },
            // A cancelled touch ends the session the same way a lift does.
            PointerEventKind::Up(PointerButton::Primary) | PointerEventKind::Cancel
                if self.active == Some(ev.id) =>
            {
                self.active = None;
                PointerOutcome {
                    response: GestureResponse::Ignored,
                    change: carousel.on_gesture_end(),
                }
            }
            _ => PointerOutcome::IGNORED,
        }
    }
}
