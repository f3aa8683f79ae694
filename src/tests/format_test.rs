use chrono::Duration;
use rust_decimal::Decimal;

use crate::lib::format::{duration_nanos, duration_seconds, fmt_duration};

#[test]
fn fmt_duration_zero_test() {
    assert_eq!(fmt_duration(&Duration::zero()), "0");
}

#[test]
fn fmt_duration_sub_second_test() {
    assert_eq!(fmt_duration(&Duration::nanoseconds(42)), "42ns");
    assert_eq!(fmt_duration(&Duration::nanoseconds(1_500)), "1.5µs");
    assert_eq!(fmt_duration(&Duration::nanoseconds(1_234_567)), "1.234567ms");
    assert_eq!(fmt_duration(&Duration::milliseconds(250)), "250ms");
}

#[test]
fn fmt_duration_seconds_and_up_test() {
    assert_eq!(fmt_duration(&Duration::seconds(1)), "1s");
    assert_eq!(fmt_duration(&Duration::milliseconds(1_500)), "1.5s");
    assert_eq!(fmt_duration(&Duration::seconds(60)), "1m0s");
    assert_eq!(fmt_duration(&Duration::seconds(90)), "1m30s");
    assert_eq!(fmt_duration(&Duration::seconds(3_600)), "1h0m0s");
    assert_eq!(fmt_duration(&Duration::milliseconds(3_723_500)), "1h2m3.5s");
}

#[test]
fn fmt_duration_negative_test() {
    assert_eq!(fmt_duration(&Duration::seconds(-2)), "-2s");
    assert_eq!(fmt_duration(&Duration::nanoseconds(-7)), "-7ns");
}

#[test]
fn duration_nanos_test() {
    assert_eq!(duration_nanos(&Duration::seconds(3)), 3_000_000_000);
    assert_eq!(duration_nanos(&Duration::nanoseconds(-5)), -5);

    // past ~292 years nanoseconds no longer fit
    assert_eq!(duration_nanos(&Duration::days(365 * 300)), i64::MAX);
    assert_eq!(duration_nanos(&Duration::days(-365 * 300)), i64::MIN);
}

#[test]
fn duration_seconds_test() {
    assert_eq!(duration_seconds(&Duration::milliseconds(1_500)), Decimal::new(15, 1));
    assert_eq!(duration_seconds(&Duration::zero()), Decimal::new(0, 0));
    assert_eq!(duration_seconds(&Duration::nanoseconds(1)).to_string(), "0.000000001");
}
