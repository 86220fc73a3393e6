use crate::content::{FAQ_PAGE_URL, FAQS, Faq};

/// Accordion of quick answers. At most one entry is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuickAnswers {
    open: Option<usize>,
}

impl QuickAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &'static [Faq] {
        &FAQS
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, i: usize) -> bool {
        self.open == Some(i)
    }

    /// Opens `i` (closing any other), or closes it if it was open.
    pub fn toggle(&mut self, i: usize) {
        if i >= FAQS.len() {
            return;
        }
        self.open = if self.open == Some(i) { None } else { Some(i) };
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }

    pub fn full_faq_url(&self) -> &'static str {
        FAQ_PAGE_URL
    }
}
