use chrono::{DateTime, Duration, Utc};

use super::timing::Timing;
use crate::lib::clock::{unset, Clock, SystemClock};
use crate::lib::error::AppError;

const PATH: &str = "models/indexed_timing";
const FN_TIC: &str = "tic";
const FN_TOC: &str = "toc";
const FN_DURATION: &str = "duration";

/// A fixed number of timers addressed by position.
///
/// Start, end and duration live in three parallel vectors of the length
/// given at construction.
pub struct IndexedTiming<C: Clock = SystemClock> {
    pub(crate) ts: Vec<DateTime<Utc>>,
    pub(crate) te: Vec<DateTime<Utc>>,
    pub(crate) td: Vec<Duration>,
    pub(crate) length: usize,
    clock: C,
}

impl IndexedTiming {
    pub fn new(n: usize) -> Self {
        Self::with_clock(n, SystemClock)
    }
}

impl<C: Clock> IndexedTiming<C> {
    pub fn with_clock(n: usize, clock: C) -> Self {
        Self {
            ts: vec![unset(); n],
            te: vec![unset(); n],
            td: vec![Duration::zero(); n],
            length: n,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Start the ith timer.
    pub fn tic(&mut self, i: usize) -> Result<(), AppError> {
        if i >= self.ts.len() {
            return Err(self.out_of_range(FN_TIC, i));
        }
        self.ts[i] = self.clock.now();
        Ok(())
    }

    /// Stop the ith timer.
    pub fn toc(&mut self, i: usize) -> Result<(), AppError> {
        if i >= self.te.len() {
            return Err(self.out_of_range(FN_TOC, i));
        }
        self.te[i] = self.clock.now();
        Ok(())
    }

    /// Duration of the ith timer as of the last resolve.
    pub fn duration(&self, i: usize) -> Result<Duration, AppError> {
        self.td
            .get(i)
            .copied()
            .ok_or_else(|| self.out_of_range(FN_DURATION, i))
    }

    fn out_of_range(&self, method: &str, i: usize) -> AppError {
        let msg = format!("index {} out of range for {} timers", i, self.length);
        AppError::new(PATH, method, "00", &msg)
    }
}

impl<C: Clock> Timing for IndexedTiming<C> {
    // unset timestamps are not guarded, they resolve to a meaningless value
    fn resolve(&mut self) {
        for ((d, start), end) in self.td.iter_mut().zip(&self.ts).zip(&self.te) {
            *d = end.signed_duration_since(*start);
        }
    }

    fn durations(&self) -> Vec<(String, Duration)> {
        self.td
            .iter()
            .enumerate()
            .map(|(i, d)| (i.to_string(), *d))
            .collect()
    }
}
