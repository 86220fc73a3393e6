//! Whole-page compositions.
//!
//! The hybrid page shows its carousels inline and keeps the quiz, quick
//! answers, order and sizing flows in dialogs. The modal page keeps almost
//! everything in dialogs behind CTA buttons and a sticky footer; its dialog
//! carousels are built when the dialog opens and torn down when it closes.

use std::time::Duration;

use brace_core::{Result, Scope, SharedClock};
use brace_sizing::OrderRedirect;

use crate::content::{Comparison, Review, Step, Video};
use crate::faq::QuickAnswers;
use crate::hero::HeroRotator;
use crate::modal::{ModalHost, ModalKind};
use crate::order::{OrderSection, SharedResolver, SizePanel, SizingGuide};
use crate::quiz::Quiz;
use crate::section::{CarouselSection, SharedPlayer};
use crate::sections::{self, Placement};

/// What the outer shell must do after a page action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEffect {
    None,
    ScrollToOrder,
    Opened(ModalKind),
    Redirect(OrderRedirect),
    OpenUrl(&'static str),
}

/// Collaborators every page needs.
#[derive(Clone)]
pub struct PageContext {
    pub resolver: SharedResolver,
    pub clock: SharedClock,
    pub player: SharedPlayer,
    pub hero_interval: Duration,
}

fn redirect(order: Option<OrderRedirect>) -> PageEffect {
    order.map(PageEffect::Redirect).unwrap_or(PageEffect::None)
}

pub struct HybridPage {
    scope: Scope,
    pub hero: HeroRotator,
    pub videos: CarouselSection<Video>,
    pub how_it_works: CarouselSection<Step>,
    pub comparison: CarouselSection<Comparison>,
    pub reviews: CarouselSection<Review>,
    pub order: OrderSection,
    pub sizing: SizingGuide,
    pub modals: ModalHost,
    pub quiz: Quiz,
    pub faq: QuickAnswers,
}

impl HybridPage {
    pub fn new(ctx: &PageContext) -> Result<Self> {
        let scope = Scope::new();
        let (hero, videos) = scope.run(|| -> Result<_> {
            Ok((
                HeroRotator::new(ctx.hero_interval, ctx.clock.clone())?,
                sections::videos(Placement::Inline, ctx.player.clone())?,
            ))
        })?;
        Ok(Self {
            scope,
            hero,
            videos,
            how_it_works: sections::how_it_works(Placement::Inline)?,
            comparison: sections::comparison(Placement::Inline)?,
            reviews: sections::reviews()?,
            order: OrderSection::new(ctx.resolver.clone()),
            sizing: SizingGuide::new(ctx.resolver.clone()),
            modals: ModalHost::new(),
            quiz: Quiz::new(),
            faq: QuickAnswers::new(),
        })
    }

    pub fn tick(&mut self) {
        self.hero.tick();
    }

    /// The hero's pricing badge scrolls to the inline order section.
    pub fn pricing_clicked(&self) -> PageEffect {
        PageEffect::ScrollToOrder
    }

    pub fn open(&mut self, kind: ModalKind) -> PageEffect {
        self.close_dialog();
        self.modals.open(kind);
        if kind == ModalKind::SizingGuide {
            self.sizing.on_open();
        }
        PageEffect::Opened(kind)
    }

    pub fn close_dialog(&mut self) {
        if let Some(kind) = self.modals.close() {
            match kind {
                ModalKind::Quiz => self.quiz.reset(),
                ModalKind::QuickAnswers => self.faq.collapse(),
                _ => {}
            }
        }
    }

    /// "Order now" from the quiz or quick answers.
    pub fn continue_to_order(&mut self) -> PageEffect {
        self.open(ModalKind::Order)
    }

    /// "Go to order" from the sizing guide.
    pub fn sizing_go_to_order(&mut self) -> PageEffect {
        self.close_dialog();
        PageEffect::ScrollToOrder
    }

    pub fn add_to_cart(&self) -> PageEffect {
        redirect(self.order.add_to_cart())
    }

    pub fn teardown(&mut self) {
        self.close_dialog();
        self.scope.dispose();
    }
}

pub struct ModalPage {
    scope: Scope,
    player: SharedPlayer,
    pub hero: HeroRotator,
    pub reviews: CarouselSection<Review>,
    pub modals: ModalHost,
    pub quiz: Quiz,
    pub faq: QuickAnswers,
    pub order: SizePanel,
    pub videos: Option<CarouselSection<Video>>,
    pub comparison: Option<CarouselSection<Comparison>>,
    pub how_it_works: Option<CarouselSection<Step>>,
}

impl ModalPage {
    pub fn new(ctx: &PageContext) -> Result<Self> {
        let scope = Scope::new();
        let hero = scope.run(|| HeroRotator::new(ctx.hero_interval, ctx.clock.clone()))?;
        let order = SizePanel::new(ctx.resolver.clone());
        order.restore();
        Ok(Self {
            scope,
            player: ctx.player.clone(),
            hero,
            reviews: sections::reviews()?,
            modals: ModalHost::new(),
            quiz: Quiz::new(),
            faq: QuickAnswers::new(),
            order,
            videos: None,
            comparison: None,
            how_it_works: None,
        })
    }

    pub fn tick(&mut self) {
        self.hero.tick();
    }

    /// The hero's pricing badge opens the order dialog.
    pub fn pricing_clicked(&mut self) -> Result<PageEffect> {
        self.open(ModalKind::Order)
    }

    pub fn open(&mut self, kind: ModalKind) -> Result<PageEffect> {
        self.close_dialog();
        let scope = self.modals.open(kind);
        let player = self.player.clone();
        scope.run(|| -> Result<()> {
            match kind {
                ModalKind::Video => self.videos = Some(sections::videos(Placement::Modal, player)?),
                ModalKind::Comparison => self.comparison = Some(sections::comparison(Placement::Modal)?),
                ModalKind::HowItWorks => {
                    self.how_it_works = Some(sections::how_it_works(Placement::Modal)?)
                }
                ModalKind::Order => {
                    self.order.restore();
                }
                _ => {}
            }
            Ok(())
        })?;
        Ok(PageEffect::Opened(kind))
    }

    pub fn close_dialog(&mut self) {
        let Some(kind) = self.modals.close() else {
            return;
        };
        match kind {
            ModalKind::Quiz => self.quiz.reset(),
            ModalKind::QuickAnswers => self.faq.collapse(),
            ModalKind::Video => self.videos = None,
            ModalKind::Comparison => self.comparison = None,
            ModalKind::HowItWorks => self.how_it_works = None,
            ModalKind::Order | ModalKind::SizingGuide => {}
        }
    }

    pub fn continue_to_order(&mut self) -> Result<PageEffect> {
        self.open(ModalKind::Order)
    }

    pub fn add_to_cart(&self) -> PageEffect {
        redirect(self.order.add_to_cart())
    }

    pub fn full_faq(&self) -> PageEffect {
        PageEffect::OpenUrl(self.faq.full_faq_url())
    }

    pub fn teardown(&mut self) {
        self.close_dialog();
        self.scope.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::shared_resolver;
    use crate::quiz::{Balance, KneeBend, Question};
    use brace_core::ManualClock;
    use brace_sizing::{CartEndpoint, Field, MemoryStore};
    use brace_ui::{EmbedId, EmbedPlayer, HERO_INTERVAL, PagerAction};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Player {
        live: Option<String>,
    }

    impl EmbedPlayer for Player {
        fn mount(&mut self, _slide: usize, embed: &EmbedId) {
            self.live = Some(embed.to_string());
        }
        fn unmount(&mut self, _slide: usize, _embed: &EmbedId) {
            self.live = None;
        }
    }

    fn context(clock: &ManualClock, player: Rc<RefCell<Player>>) -> PageContext {
        PageContext {
            resolver: shared_resolver(Box::new(MemoryStore::new()), CartEndpoint::default()),
            clock: clock.shared(),
            player,
            hero_interval: HERO_INTERVAL,
        }
    }

    #[test]
    fn hybrid_order_flow() {
        let clock = ManualClock::new();
        let player = Rc::new(RefCell::new(Player::default()));
        let mut page = HybridPage::new(&context(&clock, player.clone())).unwrap();
        assert_eq!(player.borrow().live.as_deref(), Some("rM1DegIynKM"));
        assert_eq!(page.pricing_clicked(), PageEffect::ScrollToOrder);

        page.open(ModalKind::SizingGuide);
        page.sizing.input(Field::A, "18");
        page.sizing.input(Field::B, "20");
        assert_eq!(page.sizing_go_to_order(), PageEffect::ScrollToOrder);
        assert_eq!(page.modals.current(), None);

        match page.add_to_cart() {
            PageEffect::Redirect(r) => assert!(r.url.ends_with("/34867137085605:1")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn hybrid_quiz_resets_when_continuing_to_order() {
        let clock = ManualClock::new();
        let mut page =
            HybridPage::new(&context(&clock, Rc::new(RefCell::new(Player::default())))).unwrap();
        page.open(ModalKind::Quiz);
        page.quiz.select_injury(Some(0));
        page.quiz.answer_balance(Balance::Good);
        page.quiz.answer_knee(KneeBend::CanBend);
        assert_eq!(page.continue_to_order(), PageEffect::Opened(ModalKind::Order));
        assert_eq!(page.quiz.question(), Some(Question::Injury));
        assert_eq!(page.add_to_cart(), PageEffect::None);
    }

    #[test]
    fn hybrid_teardown_stops_hero_and_player() {
        let clock = ManualClock::new();
        let player = Rc::new(RefCell::new(Player::default()));
        let mut page = HybridPage::new(&context(&clock, player.clone())).unwrap();
        page.teardown();
        assert_eq!(player.borrow().live, None);
        clock.advance(HERO_INTERVAL);
        page.tick();
        assert_eq!(page.hero.current(), 0);
    }

    #[test]
    fn modal_video_dialog_owns_its_player() {
        let clock = ManualClock::new();
        let player = Rc::new(RefCell::new(Player::default()));
        let mut page = ModalPage::new(&context(&clock, player.clone())).unwrap();
        assert_eq!(player.borrow().live, None);

        page.open(ModalKind::Video).unwrap();
        assert_eq!(player.borrow().live.as_deref(), Some("rM1DegIynKM"));
        if let Some(v) = page.videos.as_mut() {
            v.press(PagerAction::Next);
        }
        assert_eq!(player.borrow().live.as_deref(), Some("ZKAAO9KCbYU"));

        // Opening another dialog closes the video one.
        page.open(ModalKind::Comparison).unwrap();
        assert_eq!(player.borrow().live, None);
        assert!(page.videos.is_none());
        assert!(page.comparison.is_some());
    }

    #[test]
    fn modal_pricing_opens_order() {
        let clock = ManualClock::new();
        let mut page =
            ModalPage::new(&context(&clock, Rc::new(RefCell::new(Player::default())))).unwrap();
        assert_eq!(
            page.pricing_clicked().unwrap(),
            PageEffect::Opened(ModalKind::Order)
        );
        page.order.input(Field::A, "22");
        page.order.input(Field::B, "28");
        assert!(matches!(page.add_to_cart(), PageEffect::Redirect(_)));
        assert_eq!(
            page.full_faq(),
            PageEffect::OpenUrl("https://www.freedomleg.com/pages/frequently-asked-questions")
        );
    }
}
