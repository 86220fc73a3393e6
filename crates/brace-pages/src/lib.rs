//! Landing page hosts: every carousel instantiation, the hero, the size
//! calculator surfaces, dialogs, and the two page layouts.

pub mod content;
pub mod faq;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod modal;
pub mod order;
pub mod quiz;
pub mod section;
pub mod sections;

pub use faq::QuickAnswers;
pub use gallery::{PAGE_VERSIONS, PageVersion, Route};
pub use hero::{HeroRotator, PricingBadge};
pub use layout::{HybridPage, ModalPage, PageContext, PageEffect};
pub use modal::{Dialog, DialogHandle, ModalHost, ModalKind, ProgressStep};
pub use order::{OrderSection, SharedResolver, SizePanel, SizingGuide, shared_resolver};
pub use quiz::Quiz;
pub use section::{CarouselSection, SectionView, SharedPlayer, SlideContent};
pub use sections::Placement;
