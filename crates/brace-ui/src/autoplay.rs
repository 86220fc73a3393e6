use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use brace_core::{Dispose, SharedClock, effect, on_unmount};
use web_time::Instant;

use crate::carousel::{CarouselController, IndexChange};

/// Hero rotation period.
pub const HERO_INTERVAL: Duration = Duration::from_secs(15);

/// Periodic wrapping advance for timer-driven carousels.
///
/// Created inside a `Scope`, the timer stops when that scope is disposed.
/// Hosts call `tick` from their frame loop; every elapsed interval advances
/// one slide.
pub struct Autoplay {
    interval: Duration,
    clock: SharedClock,
    last: Cell<Instant>,
    running: Rc<Cell<bool>>,
    stop: Dispose,
}

impl Autoplay {
    pub fn new(interval: Duration, clock: SharedClock) -> Self {
        let running = Rc::new(Cell::new(true));
        let stop = effect({
            let running = running.clone();
            move || on_unmount(move || running.set(false))
        });
        let last = Cell::new(clock.now());
        Self {
            interval,
            clock,
            last,
            running,
            stop,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.stop.run();
    }

    /// Time until the next advance, or `None` once stopped.
    pub fn remaining(&self) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        let elapsed = self.clock.now().saturating_duration_since(self.last.get());
        Some(self.interval.saturating_sub(elapsed))
    }

    pub fn tick(&self, carousel: &mut CarouselController) -> Option<IndexChange> {
        if !self.is_running() || self.interval.is_zero() {
            return None;
        }
        let now = self.clock.now();
        let mut change: Option<IndexChange> = None;
        while now.saturating_duration_since(self.last.get()) >= self.interval {
            self.last.set(self.last.get() + self.interval);
            match carousel.advance_wrapping() {
                Some(step) => {
                    change = Some(IndexChange {
                        from: change.map(|c| c.from).unwrap_or(step.from),
                        to: step.to,
                    });
                }
                // Held by a gesture; try again next interval.
                None => {
                    self.last.set(now);
                    break;
                }
            }
        }
        change
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop.run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselConfig;
    use brace_core::{ManualClock, Scope, Vec2};

    fn hero() -> CarouselController {
        CarouselController::new(CarouselConfig::new(3).inactive_scale(1.0).inactive_opacity(0.0)).unwrap()
    }

    #[test]
    fn advances_once_per_interval_and_wraps() {
        let clock = ManualClock::new();
        let auto = Autoplay::new(HERO_INTERVAL, clock.shared());
        let mut c = hero();

        clock.advance(Duration::from_secs(14));
        assert_eq!(auto.tick(&mut c), None);
        clock.advance(Duration::from_secs(1));
        assert_eq!(auto.tick(&mut c), Some(IndexChange { from: 0, to: 1 }));

        clock.advance(Duration::from_secs(30));
        assert_eq!(auto.tick(&mut c), Some(IndexChange { from: 1, to: 0 }));
        assert_eq!(c.current(), 0);
        assert_eq!(auto.remaining(), Some(HERO_INTERVAL));
    }

    #[test]
    fn scope_dispose_stops_timer() {
        let clock = ManualClock::new();
        let scope = Scope::new();
        let auto = scope.run(|| Autoplay::new(HERO_INTERVAL, clock.shared()));
        let mut c = hero();

        scope.dispose();
        assert!(!auto.is_running());
        clock.advance(Duration::from_secs(60));
        assert_eq!(auto.tick(&mut c), None);
        assert_eq!(auto.remaining(), None);
    }

    #[test]
    fn gesture_holds_the_rotation() {
        let clock = ManualClock::new();
        let auto = Autoplay::new(HERO_INTERVAL, clock.shared());
        let mut c = hero();

        c.on_gesture_start(Vec2::ZERO);
        clock.advance(HERO_INTERVAL);
        assert_eq!(auto.tick(&mut c), None);
        c.on_gesture_end();

        clock.advance(HERO_INTERVAL);
        assert_eq!(auto.tick(&mut c), Some(IndexChange { from: 0, to: 1 }));
    }
}
