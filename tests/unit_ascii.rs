#![allow(missing_docs)]

use logidoc::logix::{AtomicKind, AtomicValue, LogixError, Radix};

#[test]
fn printable_bytes_pass_through_verbatim() {
	// 0x4142 is "AB".
	assert_eq!(Radix::Ascii.format(&AtomicValue::Int(0x4142)).unwrap(), "'AB'");
	assert_eq!(Radix::Ascii.parse(AtomicKind::Int, "'AB'").unwrap(), AtomicValue::Int(0x4142));
}

#[test]
fn dollar_and_quote_are_escaped() {
	assert_eq!(Radix::Ascii.format(&AtomicValue::Sint(b'$' as i8)).unwrap(), "'$$'");
	assert_eq!(Radix::Ascii.format(&AtomicValue::Sint(b'\'' as i8)).unwrap(), "'$''");
	assert_eq!(Radix::Ascii.parse(AtomicKind::Sint, "'$$'").unwrap(), AtomicValue::Sint(b'$' as i8));
}

#[test]
fn named_escapes_take_precedence_over_hex() {
	let tab = Radix::Ascii.format(&AtomicValue::Sint(0x09)).unwrap();
	assert_eq!(tab, "'$t'");
	// The `$09` spelling still decodes to the same byte.
	assert_eq!(Radix::Ascii.parse(AtomicKind::Sint, "'$09'").unwrap(), AtomicValue::Sint(0x09));
}

#[test]
fn decoded_length_must_match_the_kind_byte_width() {
	// Two decoded bytes against a one-byte kind.
	let err = Radix::Ascii.parse(AtomicKind::Sint, "'AB'").unwrap_err();
	assert!(matches!(err, LogixError::Range { .. }));
	// One decoded byte against a four-byte kind.
	let err = Radix::Ascii.parse(AtomicKind::Dint, "'A'").unwrap_err();
	assert!(matches!(err, LogixError::Range { .. }));
}

#[test]
fn malformed_literals_are_format_errors() {
	for bad in ["A", "'A", "A'", "'$'", "'$q0'", "'$1'", "''''"] {
		let err = Radix::Ascii.parse(AtomicKind::Sint, bad).unwrap_err();
		assert!(matches!(err, LogixError::Format { .. }), "{bad}");
	}
}

#[test]
fn negative_values_render_their_twos_complement_bytes() {
	// -1 as a SINT is the single byte 0xFF.
	assert_eq!(Radix::Ascii.format(&AtomicValue::Sint(-1)).unwrap(), "'$FF'");
	assert_eq!(Radix::Ascii.parse(AtomicKind::Sint, "'$FF'").unwrap(), AtomicValue::Sint(-1));
}
