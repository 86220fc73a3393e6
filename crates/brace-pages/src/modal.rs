use std::cell::RefCell;
use std::rc::Rc;

use brace_core::Scope;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModalKind {
    Quiz,
    QuickAnswers,
    Order,
    SizingGuide,
    Video,
    Comparison,
    HowItWorks,
}

impl ModalKind {
    pub fn progress(self) -> Option<ProgressStep> {
        match self {
            ModalKind::Quiz => Some(ProgressStep::Explore),
            ModalKind::Video | ModalKind::HowItWorks => Some(ProgressStep::Learn),
            ModalKind::Comparison => Some(ProgressStep::Compare),
            ModalKind::Order => Some(ProgressStep::Order),
            ModalKind::QuickAnswers | ModalKind::SizingGuide => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProgressStep {
    Explore,
    Learn,
    Compare,
    Order,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

impl ProgressStep {
    pub const ALL: [ProgressStep; 4] = [
        ProgressStep::Explore,
        ProgressStep::Learn,
        ProgressStep::Compare,
        ProgressStep::Order,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgressStep::Explore => "Explore",
            ProgressStep::Learn => "Learn",
            ProgressStep::Compare => "Compare",
            ProgressStep::Order => "Order",
        }
    }

    /// The step bar as drawn with `self` highlighted.
    pub fn indicator(self) -> [(ProgressStep, StepState); 4] {
        Self::ALL.map(|s| {
            let state = match s.cmp(&self) {
                std::cmp::Ordering::Less => StepState::Done,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            };
            (s, state)
        })
    }
}

/// What a dialog needs from its container.
pub trait DialogHandle {
    fn is_open(&self) -> bool;
    fn close(&mut self);
}

#[derive(Default)]
struct HostState {
    open: Option<(ModalKind, Scope)>,
}

/// Owns the single open dialog. Each dialog gets a fresh `Scope` for as
/// long as it is open; timers and players started inside it stop on close.
#[derive(Clone, Default)]
pub struct ModalHost {
    inner: Rc<RefCell<HostState>>,
}

impl std::fmt::Debug for ModalHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalHost")
            .field("open", &self.current())
            .finish()
    }
}

impl ModalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `kind`, closing whatever was open. Returns the dialog's scope;
    /// build the dialog's content inside it with `Scope::run`.
    pub fn open(&self, kind: ModalKind) -> Scope {
        self.close();
        let scope = Scope::new();
        self.inner.borrow_mut().open = Some((kind, scope.clone()));
        log::debug!("modal: open {kind:?}");
        scope
    }

    pub fn close(&self) -> Option<ModalKind> {
        let closed = self.inner.borrow_mut().open.take();
        // Dispose outside the borrow; cleanups may touch the host.
        closed.map(|(kind, scope)| {
            scope.dispose();
            log::debug!("modal: closed {kind:?}");
            kind
        })
    }

    pub fn current(&self) -> Option<ModalKind> {
        self.inner.borrow().open.as_ref().map(|(k, _)| *k)
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.current() == Some(kind)
    }

    pub fn scope(&self) -> Option<Scope> {
        self.inner.borrow().open.as_ref().map(|(_, s)| s.clone())
    }

    pub fn progress(&self) -> Option<ProgressStep> {
        self.current().and_then(ModalKind::progress)
    }

    pub fn dialog(&self, kind: ModalKind) -> Dialog {
        Dialog {
            host: self.clone(),
            kind,
        }
    }
}

/// A handle one dialog uses to query and dismiss itself.
#[derive(Clone, Debug)]
pub struct Dialog {
    host: ModalHost,
    kind: ModalKind,
}

impl Dialog {
    pub fn kind(&self) -> ModalKind {
        self.kind
    }
}

impl DialogHandle for Dialog {
    fn is_open(&self) -> bool {
        self.host.is_open(self.kind)
    }

    fn close(&mut self) {
        if self.is_open() {
            self.host.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brace_core::{effect, on_unmount};
    use std::cell::Cell;

    #[test]
    fn one_dialog_at_a_time() {
        let host = ModalHost::new();
        host.open(ModalKind::Quiz);
        host.open(ModalKind::Order);
        assert_eq!(host.current(), Some(ModalKind::Order));
        assert_eq!(host.progress(), Some(ProgressStep::Order));

        let mut stale = host.dialog(ModalKind::Quiz);
        assert!(!stale.is_open());
        stale.close();
        assert!(host.is_open(ModalKind::Order));

        let mut order = host.dialog(ModalKind::Order);
        order.close();
        assert_eq!(host.current(), None);
    }

    #[test]
    fn closing_disposes_the_dialog_scope() {
        let host = ModalHost::new();
        let stopped = Rc::new(Cell::new(0));
        let scope = host.open(ModalKind::Video);
        scope.run(|| {
            let stopped = stopped.clone();
            effect(move || on_unmount(move || stopped.set(stopped.get() + 1)))
        });
        host.open(ModalKind::Order);
        assert_eq!(stopped.get(), 1);
        assert!(scope.is_disposed());
        host.close();
        assert_eq!(stopped.get(), 1);
    }

    #[test]
    fn indicator_marks_progress() {
        let bar = ProgressStep::Compare.indicator();
        assert_eq!(
            bar.map(|(_, s)| s),
            [StepState::Done, StepState::Done, StepState::Current, StepState::Upcoming]
        );
        assert_eq!(ModalKind::SizingGuide.progress(), None);
    }
}
