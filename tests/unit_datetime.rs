#![allow(missing_docs)]

use logidoc::logix::{AtomicKind, AtomicValue, LogixError, Radix};

#[test]
fn microsecond_fixture_round_trips() {
	let value = AtomicValue::Lint(1_638_277_952_000_000);
	let text = Radix::DateTime.format(&value).unwrap();
	assert_eq!(text, "DT#2021-11-30-13:12:32.000_000Z");
	assert_eq!(Radix::DateTime.parse(AtomicKind::Lint, &text).unwrap(), value);
}

#[test]
fn fraction_splits_at_the_three_digit_boundary() {
	// 123456 microseconds.
	let value = AtomicValue::Lint(1_638_277_952_123_456);
	let text = Radix::DateTime.format(&value).unwrap();
	assert_eq!(text, "DT#2021-11-30-13:12:32.123_456Z");
}

#[test]
fn nanosecond_radix_carries_nine_fraction_digits() {
	let value = AtomicValue::Lint(1_638_277_952_123_456_789);
	let text = Radix::DateTimeNs.format(&value).unwrap();
	assert_eq!(text, "DT#2021-11-30-13:12:32.123_456_789Z");
	assert_eq!(Radix::DateTimeNs.parse(AtomicKind::Lint, &text).unwrap(), value);
}

#[test]
fn prefix_and_field_widths_are_mandatory() {
	for bad in [
		"2021-11-30-13:12:32.000_000Z",
		"D#2021-11-30-13:12:32.000_000Z",
		"DT#2021-11-30-13:12:32.000_000",
		"DT#2021-11-30-13:12:32.0000_00Z",
		"DT#2021-11-30T13:12:32.000_000Z",
		"DT#2021-11-3-13:12:32.000_000Z",
		"DT#2021-11-30-13:12:32.000_000Z ",
	] {
		let err = Radix::DateTime.parse(AtomicKind::Lint, bad).unwrap_err();
		assert!(matches!(err, LogixError::Format { .. }), "{bad}");
	}
}

#[test]
fn only_the_lint_kind_may_carry_timestamps() {
	for kind in [AtomicKind::Bool, AtomicKind::Sint, AtomicKind::Int, AtomicKind::Dint, AtomicKind::Real] {
		let err = Radix::DateTime.parse(kind, "DT#1970-01-01-00:00:00.000_000Z").unwrap_err();
		assert!(matches!(err, LogixError::Unsupported { .. }), "{kind}");
	}
}

#[test]
fn impossible_calendar_dates_are_format_errors() {
	for bad in ["DT#2021-02-30-00:00:00.000_000Z", "DT#2021-13-01-00:00:00.000_000Z", "DT#2021-01-01-24:00:00.000_000Z"] {
		let err = Radix::DateTime.parse(AtomicKind::Lint, bad).unwrap_err();
		assert!(matches!(err, LogixError::Format { .. }), "{bad}");
	}
}
