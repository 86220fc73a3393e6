//! Carousels: gesture state machine, derived slide visuals, pager controls,
//! timers and embedded players.

pub mod anim;
pub mod autoplay;
pub mod carousel;
pub mod embed;
pub mod gestures;
pub mod pager;
pub mod visual;

pub use anim::SlideTransitions;
pub use autoplay::{Autoplay, HERO_INTERVAL};
pub use carousel::{
    AXIS_SLOP_PX, Axis, CarouselConfig, CarouselController, DRAG_THRESHOLD_PX, DragSession,
    EDGE_RESISTANCE, GestureResponse, IndexChange,
};
pub use embed::{EmbedId, EmbedPlayer, EmbedTracker};
pub use gestures::{PointerOutcome, SwipeGestures};
pub use pager::{Controls, Dot, PagerAction, PagerState};
pub use visual::SlideVisual;
