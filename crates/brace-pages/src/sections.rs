//! The carousel hosts on the landing pages, each a tuned `CarouselSection`.

use brace_core::Result;
use brace_ui::{CarouselConfig, Controls, EmbedId};

use crate::content::{COMPARISONS, Comparison, REVIEWS, Review, STEPS, Step, VIDEOS, Video};
use crate::section::{CarouselSection, SharedPlayer, SlideContent};

/// Where a host sits: inline on the page or inside a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Inline,
    Modal,
}

pub fn reviews_config() -> CarouselConfig {
    CarouselConfig::new(REVIEWS.len())
}

pub fn videos_config() -> CarouselConfig {
    CarouselConfig::new(VIDEOS.len())
        .inactive_scale(0.75)
        .inactive_opacity(0.3)
        .detect_vertical_axis(false)
}

pub fn how_it_works_config() -> CarouselConfig {
    CarouselConfig::new(STEPS.len())
        .inactive_scale(0.75)
        .inactive_opacity(0.3)
}

pub fn comparison_config() -> CarouselConfig {
    CarouselConfig::new(COMPARISONS.len())
        .inactive_scale(0.75)
        .inactive_opacity(0.2)
        .detect_vertical_axis(false)
}

fn review_slide(r: &Review) -> SlideContent {
    SlideContent {
        heading: r.author.to_string(),
        lines: vec![r.quote.to_string()],
        embed: None,
    }
}

fn video_slide(v: &Video) -> SlideContent {
    SlideContent {
        heading: v.tagline.to_string(),
        lines: Vec::new(),
        embed: Some(EmbedId::new(v.video_id)),
    }
}

fn step_slide(s: &Step) -> SlideContent {
    SlideContent {
        heading: s.label.to_string(),
        lines: vec![s.description.to_string()],
        embed: None,
    }
}

fn step_slide_compact(s: &Step) -> SlideContent {
    SlideContent {
        heading: s.label.to_string(),
        lines: vec![s.short_description.to_string()],
        embed: None,
    }
}

fn comparison_slide(c: &Comparison) -> SlideContent {
    SlideContent {
        heading: format!("Freedom Leg vs {}", c.name),
        lines: c
            .rows
            .iter()
            .map(|[feature, other, ours]| format!("{feature}: {other} / {ours}"))
            .collect(),
        embed: None,
    }
}

pub fn reviews() -> Result<CarouselSection<Review>> {
    CarouselSection::new(
        "Customer Reviews",
        &REVIEWS,
        reviews_config(),
        Controls::SWIPE | Controls::DOTS,
        review_slide,
    )
}

pub fn videos(placement: Placement, player: SharedPlayer) -> Result<CarouselSection<Video>> {
    let title = match placement {
        Placement::Inline => "Real Patients, Real Results",
        Placement::Modal => "Patient Videos",
    };
    Ok(CarouselSection::new(
        title,
        &VIDEOS,
        videos_config(),
        Controls::SWIPE | Controls::ARROWS | Controls::DOTS,
        video_slide,
    )?
    .with_player(player))
}

pub fn how_it_works(placement: Placement) -> Result<CarouselSection<Step>> {
    let render = match placement {
        Placement::Inline => step_slide,
        Placement::Modal => step_slide_compact,
    };
    Ok(CarouselSection::new(
        "How It Works",
        &STEPS,
        how_it_works_config(),
        Controls::SWIPE | Controls::ARROWS | Controls::DOTS,
        render,
    )?
    .with_caption(|s| s.label.to_string()))
}

pub fn comparison(placement: Placement) -> Result<CarouselSection<Comparison>> {
    let controls = match placement {
        Placement::Inline => Controls::SWIPE | Controls::TABS | Controls::DOTS,
        Placement::Modal => Controls::SWIPE | Controls::TABS | Controls::DOTS | Controls::ARROWS,
    };
    Ok(CarouselSection::new(
        "Compare Your Options",
        &COMPARISONS,
        comparison_config(),
        controls,
        comparison_slide,
    )?
    .with_caption(|c| c.name.to_string()))
}
