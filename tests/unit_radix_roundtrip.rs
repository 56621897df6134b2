#![allow(missing_docs)]

use logidoc::logix::{AtomicKind, AtomicValue, LogixError, Radix};

const INTEGER_KINDS: [AtomicKind; 5] = [
	AtomicKind::Bool,
	AtomicKind::Sint,
	AtomicKind::Int,
	AtomicKind::Dint,
	AtomicKind::Lint,
];

fn integer_samples(kind: AtomicKind) -> Vec<i128> {
	let (min, max) = kind.integer_range().expect("integer kind");
	if kind == AtomicKind::Bool {
		vec![0, 1]
	} else {
		vec![0, min, max, -5]
	}
}

fn assert_round_trip(radix: Radix, value: AtomicValue) {
	let text = radix.format(&value).expect("format succeeds");
	let back = radix.parse(value.kind(), &text).expect("parse succeeds");
	assert_eq!(back, value, "{radix} round trip through {text}");
}

#[test]
fn integer_radixes_round_trip_across_the_domain() {
	for kind in INTEGER_KINDS {
		for radix in [Radix::Decimal, Radix::Binary, Radix::Octal, Radix::Hex, Radix::UseTypeStyle] {
			for sample in integer_samples(kind) {
				assert_round_trip(radix, AtomicValue::from_integer(kind, sample).expect("in domain"));
			}
		}
	}
}

#[test]
fn ascii_round_trips_every_integer_byte_width() {
	for kind in [AtomicKind::Sint, AtomicKind::Int, AtomicKind::Dint, AtomicKind::Lint] {
		for sample in integer_samples(kind) {
			assert_round_trip(Radix::Ascii, AtomicValue::from_integer(kind, sample).expect("in domain"));
		}
	}
}

#[test]
fn float_radixes_round_trip_extremes() {
	for sample in [0.0_f32, -0.0, 1123.0, -1.5, f32::MAX, f32::MIN, f32::MIN_POSITIVE] {
		for radix in [Radix::Float, Radix::Exponential, Radix::UseTypeStyle] {
			assert_round_trip(radix, AtomicValue::Real(sample));
		}
	}
	for sample in [0.0_f64, -2.5e100, f64::MAX, f64::MIN_POSITIVE] {
		for radix in [Radix::Float, Radix::Exponential, Radix::UseTypeStyle] {
			assert_round_trip(radix, AtomicValue::Lreal(sample));
		}
	}
}

#[test]
fn timestamp_radixes_round_trip_in_window_values() {
	for sample in [0_i64, 1, -1, 1_638_277_952_000_000, -86_400_000_000] {
		assert_round_trip(Radix::DateTime, AtomicValue::Lint(sample));
		assert_round_trip(Radix::DateTimeNs, AtomicValue::Lint(sample));
	}
}

#[test]
fn wire_fixtures_match_bit_exactly() {
	assert_eq!(Radix::Ascii.format(&AtomicValue::Sint(20)).unwrap(), "'$14'");
	assert_eq!(Radix::Ascii.parse(AtomicKind::Sint, "'$14'").unwrap(), AtomicValue::Sint(20));
	assert_eq!(Radix::Ascii.format(&AtomicValue::Dint(123_456)).unwrap(), "'$00$01$E2@'");
	assert_eq!(Radix::Hex.format(&AtomicValue::Dint(1_234_567)).unwrap(), "16#0012_d687");
	assert_eq!(Radix::Exponential.format(&AtomicValue::Real(0.0)).unwrap(), "0.00000000e+000");
	assert_eq!(Radix::Exponential.format(&AtomicValue::Real(1123.0)).unwrap(), "1.12300000e+003");
	assert_eq!(
		Radix::DateTime.format(&AtomicValue::Lint(1_638_277_952_000_000)).unwrap(),
		"DT#2021-11-30-13:12:32.000_000Z"
	);
	assert_eq!(
		Radix::DateTime.parse(AtomicKind::Lint, "DT#2021-11-30-13:12:32.000_000Z").unwrap(),
		AtomicValue::Lint(1_638_277_952_000_000)
	);
	assert_eq!(Radix::Binary.format(&AtomicValue::Sint(20)).unwrap(), "2#0001_0100");
}

#[test]
fn hex_with_more_groups_than_the_kind_is_out_of_range() {
	// Nine 4-digit groups against the 64-bit kind.
	let text = format!("16#{}", ["0000"; 9].join("_"));
	let err = Radix::Hex.parse(AtomicKind::Lint, &text).unwrap_err();
	assert!(matches!(err, LogixError::Range { .. }));
}

#[test]
fn invalid_pairings_are_rejected_up_front() {
	let cases: [(Radix, AtomicValue); 5] = [
		(Radix::Exponential, AtomicValue::Dint(1)),
		(Radix::Decimal, AtomicValue::Real(1.0)),
		(Radix::Ascii, AtomicValue::Bool(true)),
		(Radix::DateTime, AtomicValue::Dint(0)),
		(Radix::Binary, AtomicValue::Lreal(0.0)),
	];
	for (radix, value) in cases {
		let err = radix.format(&value).unwrap_err();
		assert!(matches!(err, LogixError::Unsupported { .. }), "{radix}");
		let err = radix.parse(value.kind(), "0").unwrap_err();
		assert!(matches!(err, LogixError::Unsupported { .. }), "{radix}");
	}
}
