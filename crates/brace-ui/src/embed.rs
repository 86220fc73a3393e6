//! Embedded video players for carousels whose slides carry a video.
//!
//! Only the active slide may hold a live player. Switching slides unmounts
//! the old one (which stops playback) before mounting the new one.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmbedId(pub String);

impl EmbedId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Player URL with controls enabled.
    pub fn src(&self) -> String {
        format!("https://youtube.com/embed/{}?controls=1", self.0)
    }
}

impl fmt::Display for EmbedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host side of an embedded player (an iframe on the web).
pub trait EmbedPlayer {
    fn mount(&mut self, slide: usize, embed: &EmbedId);
    fn unmount(&mut self, slide: usize, embed: &EmbedId);
}

#[derive(Clone, Debug, Default)]
pub struct EmbedTracker {
    embeds: Vec<Option<EmbedId>>,
    mounted: Option<usize>,
}

impl EmbedTracker {
    pub fn new(embeds: Vec<Option<EmbedId>>) -> Self {
        Self {
            embeds,
            mounted: None,
        }
    }

    pub fn mounted(&self) -> Option<usize> {
        self.mounted
    }

    pub fn embed(&self, slide: usize) -> Option<&EmbedId> {
        self.embeds.get(slide).and_then(Option::as_ref)
    }

    /// Brings the live player in line with the active slide.
    pub fn sync(&mut self, active: usize, player: &mut dyn EmbedPlayer) {
        if self.mounted == Some(active) {
            return;
        }
        self.unmount_all(player);
        if let Some(embed) = self.embeds.get(active).and_then(Option::as_ref) {
            log::debug!("embed: mounting {embed} on slide {active}");
            player.mount(active, embed);
            self.mounted = Some(active);
        }
    }

    pub fn unmount_all(&mut self, player: &mut dyn EmbedPlayer) {
        if let Some(slide) = self.mounted.take()
            && let Some(embed) = self.embeds.get(slide).and_then(Option::as_ref)
        {
            player.unmount(slide, embed);
        }
    }
}
