use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use super::timing::Timing;
use crate::lib::clock::{Clock, SystemClock};
use crate::lib::format::fmt_duration;

/// Timers addressed by name, created on first use.
///
/// Backed by hash maps, so every renderer emits entries in an
/// unspecified order that may differ between two sets holding the
/// same keys.
pub struct KeyedTiming<C: Clock = SystemClock> {
    pub(crate) ts: HashMap<String, DateTime<Utc>>,
    pub(crate) te: HashMap<String, DateTime<Utc>>,
    pub(crate) td: HashMap<String, Duration>,
    clock: C,
}

impl KeyedTiming {
    pub fn new(hint: usize) -> Self {
        Self::with_clock(hint, SystemClock)
    }
}

impl<C: Clock> KeyedTiming<C> {
    pub fn with_clock(hint: usize, clock: C) -> Self {
        Self {
            ts: HashMap::with_capacity(hint),
            te: HashMap::with_capacity(hint),
            td: HashMap::with_capacity(hint),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.td.len()
    }

    pub fn is_empty(&self) -> bool {
        self.td.is_empty()
    }

    pub fn tic(&mut self, key: &str) {
        let now = self.clock.now();
        self.ts.insert(key.to_owned(), now);
        self.track(key);
    }

    pub fn toc(&mut self, key: &str) {
        let now = self.clock.now();
        self.te.insert(key.to_owned(), now);
        self.track(key);
    }

    pub fn duration(&self, key: &str) -> Option<Duration> {
        self.td.get(key).copied()
    }

    fn track(&mut self, key: &str) {
        if !self.td.contains_key(key) {
            self.td.insert(key.to_owned(), Duration::zero());
        }
    }
}

impl<C: Clock> Timing for KeyedTiming<C> {
    fn resolve(&mut self) {
        for (key, d) in self.td.iter_mut() {
            *d = match (self.ts.get(key), self.te.get(key)) {
                (Some(start), Some(end)) => end.signed_duration_since(*start),
                // a missing side counts as no time spent
                _ => Duration::zero(),
            };
        }
    }

    fn durations(&self) -> Vec<(String, Duration)> {
        self.td.iter().map(|(k, d)| (k.clone(), *d)).collect()
    }

    fn render_embedded(&self) -> String {
        self.td
            .iter()
            .map(|(k, d)| format!("{}:{}", k, fmt_duration(d)))
            .collect::<Vec<String>>()
            .join(" ")
    }
}
