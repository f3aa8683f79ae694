use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the instants recorded by tic and toc.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The instant a timestamp holds before it is first written, the Unix epoch.
pub fn unset() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to, or by a fixed step per read.
///
/// Clones share the same instant, so a caller can keep a handle and
/// advance the clock owned by a timer set. Every read returns the
/// current instant, then moves it forward by `step`.
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Rc<Cell<DateTime<Utc>>>,
    step: Duration,
}

impl ManualClock {
    pub fn ticking(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            instant: Rc::new(Cell::new(start)),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let current = self.instant.get();
        self.instant.set(current + self.step);
        current
    }
}
