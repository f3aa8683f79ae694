use chrono::Duration;
use rust_decimal::Decimal;

use super::constants::{
    NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_SEC, SECS_PER_HOUR, SECS_PER_MIN,
};

const MICRO_SCALE: u32 = 3;
const MILLI_SCALE: u32 = 6;
const SEC_SCALE: u32 = 9;

/// Signed nanoseconds in `d`, saturating at the `i64` bounds.
pub fn duration_nanos(d: &Duration) -> i64 {
    match d.num_nanoseconds() {
        Some(nanos) => nanos,
        None if *d < Duration::zero() => i64::MIN,
        None => i64::MAX,
    }
}

/// Exact decimal seconds in `d`, trailing zeros trimmed.
pub fn duration_seconds(d: &Duration) -> Decimal {
    Decimal::new(duration_nanos(d), SEC_SCALE).normalize()
}

/// Human form of a duration: `0`, `42ns`, `1.5µs`, `250ms`, `1.5s`,
/// `1m30s`, `1h0m0s`. Negative durations carry a leading `-`.
pub fn fmt_duration(d: &Duration) -> String {
    let nanos = duration_nanos(d);
    if nanos == 0 {
        return "0".to_string();
    }

    let sign = if nanos < 0 { "-" } else { "" };
    let abs = nanos.unsigned_abs();

    if abs < NANOS_PER_MICRO {
        return format!("{}{}ns", sign, abs);
    }
    if abs < NANOS_PER_MILLI {
        return format!("{}{}µs", sign, fraction(abs, MICRO_SCALE));
    }
    if abs < NANOS_PER_SEC {
        return format!("{}{}ms", sign, fraction(abs, MILLI_SCALE));
    }

    let secs = abs / NANOS_PER_SEC;
    let hours = secs / SECS_PER_HOUR;
    let mins = secs % SECS_PER_HOUR / SECS_PER_MIN;
    let rem = (secs % SECS_PER_MIN) * NANOS_PER_SEC + abs % NANOS_PER_SEC;
    let secs_part = fraction(rem, SEC_SCALE);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, mins, secs_part)
    } else if mins > 0 {
        format!("{}{}m{}s", sign, mins, secs_part)
    } else {
        format!("{}{}s", sign, secs_part)
    }
}

// callers keep value below one minute of nanoseconds, well inside i64
fn fraction(value: u64, scale: u32) -> Decimal {
    Decimal::new(value as i64, scale).normalize()
}
