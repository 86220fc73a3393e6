use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn touch(id: u64, event: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            id: PointerId(id),
            kind: PointerKind::Touch,
            event,
            position: Vec2::new(x, y),
        }
    }

    pub fn touch_down(id: u64, x: f32, y: f32) -> Self {
        Self::touch(id, PointerEventKind::Down(PointerButton::Primary), x, y)
    }

    pub fn touch_move(id: u64, x: f32, y: f32) -> Self {
        Self::touch(id, PointerEventKind::Move, x, y)
    }

    pub fn touch_up(id: u64, x: f32, y: f32) -> Self {
        Self::touch(id, PointerEventKind::Up(PointerButton::Primary), x, y)
    }

    pub fn mouse(event: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Mouse,
            event,
            position: Vec2::new(x, y),
        }
    }
}
