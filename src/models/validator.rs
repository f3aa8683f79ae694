use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use super::indexed_timing::IndexedTiming;
use super::keyed_timing::KeyedTiming;
use crate::lib::clock::Clock;
use crate::lib::error::AppError;

const PATH: &str = "models/validator";
const FN_VALIDATE: &str = "validate";

const MSG_TIME_TRAVEL: &str = "time travel detected";

/// Checks that a timer set is well formed, not that its numbers are
/// right. Timer sets never call this themselves.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

impl<C: Clock> Validate for IndexedTiming<C> {
    fn validate(&self) -> Result<(), AppError> {
        if self.length != self.ts.len() {
            return Err(AppError::new(PATH, FN_VALIDATE, "00", "ts is wrong length"));
        }
        if self.length != self.te.len() {
            return Err(AppError::new(PATH, FN_VALIDATE, "01", "te is wrong length"));
        }
        if self.length != self.td.len() {
            return Err(AppError::new(PATH, FN_VALIDATE, "02", "td is wrong length"));
        }

        if self
            .ts
            .iter()
            .zip(&self.te)
            .any(|(start, end)| time_travel(start, end))
        {
            return Err(AppError::new(PATH, FN_VALIDATE, "03", MSG_TIME_TRAVEL));
        }

        Ok(())
    }
}

impl<C: Clock> Validate for KeyedTiming<C> {
    fn validate(&self) -> Result<(), AppError> {
        if untracked(&self.ts, &self.td) {
            return Err(AppError::new(PATH, FN_VALIDATE, "10", "ts is wrong length"));
        }
        if untracked(&self.te, &self.td) {
            return Err(AppError::new(PATH, FN_VALIDATE, "11", "te is wrong length"));
        }

        for (key, end) in &self.te {
            if let Some(start) = self.ts.get(key) {
                if time_travel(start, end) {
                    return Err(AppError::new(PATH, FN_VALIDATE, "12", MSG_TIME_TRAVEL));
                }
            }
        }

        Ok(())
    }
}

fn time_travel(start: &DateTime<Utc>, end: &DateTime<Utc>) -> bool {
    end.signed_duration_since(*start) < Duration::zero()
}

// a timestamp whose key has no duration slot
fn untracked(stamps: &HashMap<String, DateTime<Utc>>, td: &HashMap<String, Duration>) -> bool {
    stamps.keys().any(|k| !td.contains_key(k))
}
