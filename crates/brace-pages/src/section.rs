use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use brace_core::input::PointerEvent;
use brace_core::{AnimationSpec, Dispose, Result, Signal, effect, on_unmount, signal};
use brace_ui::{
    CarouselConfig, CarouselController, Controls, EmbedId, EmbedPlayer, EmbedTracker, IndexChange,
    PagerAction, PagerState, PointerOutcome, SlideTransitions, SlideVisual, SwipeGestures,
};
use smallvec::SmallVec;
use web_time::Instant;

pub type SharedPlayer = Rc<RefCell<dyn EmbedPlayer>>;

/// What a host draws inside one slide.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideContent {
    pub heading: String,
    pub lines: Vec<String>,
    pub embed: Option<EmbedId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlideView {
    pub visual: SlideVisual,
    pub content: SlideContent,
    /// Player URL, present only on the active slide.
    pub embed_src: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    pub title: &'static str,
    pub current: usize,
    pub slide_count: usize,
    pub slides: SmallVec<[SlideView; 3]>,
    pub pager: PagerState,
    pub caption: Option<String>,
}

impl fmt::Display for SectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}/{})", self.title, self.current + 1, self.slide_count)?;
        for s in &self.slides {
            let marker = if s.visual.active { '>' } else { ' ' };
            writeln!(
                f,
                "{marker} {} | x {:.0}% | scale {:.2} | opacity {:.2}",
                s.content.heading, s.visual.translate_percent, s.visual.scale, s.visual.opacity
            )?;
            if let Some(src) = &s.embed_src {
                writeln!(f, "  embed {src}")?;
            }
        }
        if !self.pager.dots.is_empty() {
            let dots: String = self
                .pager
                .dots
                .iter()
                .map(|d| if d.active { '●' } else { '○' })
                .collect();
            write!(f, "dots {dots}")?;
        }
        if self.pager.controls.contains(Controls::ARROWS) {
            let on = |b: bool| if b { "on" } else { "off" };
            write!(
                f,
                " | prev {} | next {}",
                on(self.pager.prev_enabled),
                on(self.pager.next_enabled)
            )?;
        }
        if let Some(c) = &self.caption {
            write!(f, "\ncaption {c}")?;
        }
        Ok(())
    }
}

/// One carousel on the page: the shared controller plus the host's slide
/// renderer, controls and index-driven side effects (captions, players).
///
/// Side effects subscribe to the controller's index signal. They register
/// with the current `Scope` when built inside one and are torn down when
/// that scope is disposed or the section is dropped.
pub struct CarouselSection<T: 'static> {
    title: &'static str,
    items: &'static [T],
    carousel: CarouselController,
    gestures: SwipeGestures,
    controls: Controls,
    render: fn(&T) -> SlideContent,
    caption: Signal<Option<String>>,
    embeds: Option<Rc<RefCell<EmbedTracker>>>,
    transitions: SlideTransitions,
    cleanups: Vec<Dispose>,
}

impl<T: 'static> CarouselSection<T> {
    pub fn new(
        title: &'static str,
        items: &'static [T],
        config: CarouselConfig,
        controls: Controls,
        render: fn(&T) -> SlideContent,
    ) -> Result<Self> {
        let carousel = CarouselController::new(CarouselConfig {
            slide_count: items.len(),
            ..config
        })?;
        let transitions = SlideTransitions::new(&carousel);
        Ok(Self {
            title,
            items,
            carousel,
            gestures: SwipeGestures::new(),
            controls,
            render,
            caption: signal(None),
            embeds: None,
            transitions,
            cleanups: Vec::new(),
        })
    }

    /// Text shown outside the slide list for the active slide (a step label,
    /// a tab name).
    pub fn with_caption(mut self, caption: fn(&T) -> String) -> Self {
        let items = self.items;
        self.caption.set(items.get(self.carousel.current()).map(caption));

        let sig = self.caption.clone();
        let index = self.carousel.index_signal().clone();
        let id = index.subscribe(move |i| sig.set(items.get(*i).map(caption)));
        self.cleanups.push(effect(move || {
            on_unmount(move || {
                index.unsubscribe(id);
            })
        }));
        self
    }

    /// Mounts the active slide's embed in `player` and keeps it in step with
    /// the index.
    pub fn with_player(mut self, player: SharedPlayer) -> Self {
        let render = self.render;
        let tracker = Rc::new(RefCell::new(EmbedTracker::new(
            self.items.iter().map(|t| render(t).embed).collect(),
        )));
        tracker
            .borrow_mut()
            .sync(self.carousel.current(), &mut *player.borrow_mut());

        let index = self.carousel.index_signal().clone();
        let id = index.subscribe({
            let tracker = tracker.clone();
            let player = player.clone();
            move |i| tracker.borrow_mut().sync(*i, &mut *player.borrow_mut())
        });
        self.cleanups.push(effect({
            let tracker = tracker.clone();
            move || {
                on_unmount(move || {
                    index.unsubscribe(id);
                    tracker.borrow_mut().unmount_all(&mut *player.borrow_mut());
                })
            }
        }));
        self.embeds = Some(tracker);
        self
    }

    pub fn with_transition(mut self, spec: AnimationSpec) -> Self {
        self.transitions = SlideTransitions::with_spec(&self.carousel, spec);
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    pub fn active_item(&self) -> Option<&'static T> {
        self.items.get(self.carousel.current())
    }

    pub fn caption(&self) -> Option<String> {
        self.caption.get()
    }

    pub fn mounted_embed(&self) -> Option<usize> {
        self.embeds.as_ref().and_then(|t| t.borrow().mounted())
    }

    pub fn resize(&mut self, width: f32) {
        self.carousel.set_container_width(width);
    }

    /// Feeds a pointer event; ignored entirely when the host has no swipe.
    pub fn pointer(&mut self, ev: &PointerEvent) -> PointerOutcome {
        if !self.controls.contains(Controls::SWIPE) {
            return PointerOutcome {
                response: brace_ui::GestureResponse::Ignored,
                change: None,
            };
        }
        self.gestures.handle(&mut self.carousel, ev)
    }

    pub fn press(&mut self, action: PagerAction) -> Option<IndexChange> {
        brace_ui::pager::apply(&mut self.carousel, self.controls, action)
    }

    /// Timer-driven step, for rotators.
    pub fn advance_wrapping(&mut self) -> Option<IndexChange> {
        self.carousel.advance_wrapping()
    }

    pub fn controller_mut(&mut self) -> &mut CarouselController {
        &mut self.carousel
    }

    /// Eased per-slide visuals for the frame at `now`.
    pub fn frame(&mut self, now: Instant) -> Vec<SlideVisual> {
        self.transitions.frame(&self.carousel, now)
    }

    pub fn view(&self) -> SectionView {
        let slides = self
            .carousel
            .renderable_window()
            .into_iter()
            .filter_map(|visual| {
                let item = self.items.get(visual.index)?;
                let content = (self.render)(item);
                let embed_src = match &content.embed {
                    Some(e) if visual.active && self.embeds.is_some() => Some(e.src()),
                    _ => None,
                };
                Some(SlideView {
                    visual,
                    content,
                    embed_src,
                })
            })
            .collect();
        SectionView {
            title: self.title,
            current: self.carousel.current(),
            slide_count: self.carousel.slide_count(),
            slides,
            pager: PagerState::of(&self.carousel, self.controls),
            caption: self.caption.get(),
        }
    }
}

impl<T: 'static> Drop for CarouselSection<T> {
    fn drop(&mut self) {
        for d in &self.cleanups {
            d.run();
        }
    }
}
