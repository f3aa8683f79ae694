use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::fs;

use crate::lib::clock::{unset, ManualClock};
use crate::models::indexed_timing::IndexedTiming;
use crate::models::keyed_timing::KeyedTiming;

pub const DUMMY_LEN: usize = 5;

pub struct TestHelper;

impl TestHelper {
    pub fn cleanup(working_dir: &str) {
        let _ = fs::remove_dir_all(working_dir);
    }

    /// 2023-11-14T22:13:20Z, far enough from the unset instant to tell them apart.
    pub fn origin() -> DateTime<Utc> {
        unset() + Duration::seconds(1_700_000_000)
    }

    /// A clock that moves one second forward on every read.
    pub fn ticking_clock() -> ManualClock {
        ManualClock::ticking(Self::origin(), Duration::seconds(1))
    }

    /// Known durations of i seconds in slot i. Timestamps are left unset,
    /// so this set is only good for the renderers.
    pub fn dummy_indexed() -> IndexedTiming {
        let mut tg = IndexedTiming::new(DUMMY_LEN);
        for i in 0..DUMMY_LEN {
            tg.td[i] = Duration::seconds(i as i64);
        }
        tg
    }

    /// Keyed twin of `dummy_indexed`, key `k<i>` holding i seconds.
    pub fn dummy_keyed() -> KeyedTiming {
        let mut tg = KeyedTiming::new(DUMMY_LEN);
        for i in 0..DUMMY_LEN {
            tg.td.insert(format!("k{}", i), Duration::seconds(i as i64));
        }
        tg
    }

    pub fn pieces(rendered: &str, sep: &str) -> HashSet<String> {
        rendered
            .split(sep)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}
