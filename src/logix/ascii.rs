use crate::logix::{AtomicKind, AtomicValue, LogixError, Radix, Result};

// Named escapes, in precedence over `$xx` hex escapes.
const TAB: u8 = 0x09;
const LINE_FEED: u8 = 0x0a;
const FORM_FEED: u8 = 0x0c;
const CARRIAGE_RETURN: u8 = 0x0d;

/// Render the value's big-endian byte image as one single-quoted string.
///
/// Printable bytes (32..=126) pass through verbatim except `$` and `'`,
/// which escape to `$$` and `$'`; tab, line feed, form feed, and carriage
/// return use their named escapes; every other byte becomes `$XX`
/// uppercase hex.
pub(crate) fn format(value: &AtomicValue) -> String {
	let bytes = value.be_bytes();
	let mut out = String::with_capacity(bytes.len() * 3 + 2);
	out.push('\'');
	for byte in bytes {
		match byte {
			TAB => out.push_str("$t"),
			LINE_FEED => out.push_str("$l"),
			FORM_FEED => out.push_str("$p"),
			CARRIAGE_RETURN => out.push_str("$r"),
			b'$' => out.push_str("$$"),
			b'\'' => out.push_str("$'"),
			32..=126 => out.push(byte as char),
			other => out.push_str(&format!("${other:02X}")),
		}
	}
	out.push('\'');
	out
}

/// Decode a single-quoted byte string into the kind's value.
///
/// Grammar violations (missing quotes, stray quote or non-printable byte,
/// truncated or unknown escape) are format errors; a decoded byte count
/// different from the kind's byte width is a range error.
pub(crate) fn parse(kind: AtomicKind, text: &str) -> Result<AtomicValue> {
	let bad = || LogixError::format(Radix::Ascii, text);

	let inner = text
		.strip_prefix('\'')
		.and_then(|rest| rest.strip_suffix('\''))
		.ok_or_else(bad)?;

	let mut bytes = Vec::with_capacity(kind.byte_width());
	let mut chars = inner.bytes();
	while let Some(byte) = chars.next() {
		let decoded = match byte {
			b'$' => match chars.next().ok_or_else(bad)? {
				b't' => TAB,
				b'l' => LINE_FEED,
				b'p' => FORM_FEED,
				b'r' => CARRIAGE_RETURN,
				b'$' => b'$',
				b'\'' => b'\'',
				high => {
					let low = chars.next().ok_or_else(bad)?;
					let high = (high as char).to_digit(16).ok_or_else(bad)?;
					let low = (low as char).to_digit(16).ok_or_else(bad)?;
					(high * 16 + low) as u8
				}
			},
			// A raw quote can only be the closing delimiter; inside the
			// literal it must arrive escaped.
			b'\'' => return Err(bad()),
			// Anything outside the printable range must arrive escaped.
			32..=126 => byte,
			_ => return Err(bad()),
		};
		bytes.push(decoded);
	}

	if bytes.len() != kind.byte_width() {
		return Err(LogixError::range(kind, text));
	}

	let mut bits = 0_u64;
	for byte in bytes {
		bits = (bits << 8) | u64::from(byte);
	}
	Ok(AtomicValue::from_bits(kind, bits))
}

#[cfg(test)]
mod tests {
	use super::{format, parse};
	use crate::logix::{AtomicKind, AtomicValue, LogixError};

	#[test]
	fn control_bytes_use_named_escapes() {
		assert_eq!(format(&AtomicValue::Sint(0x09)), "'$t'");
		assert_eq!(format(&AtomicValue::Sint(0x0d)), "'$r'");
		assert_eq!(format(&AtomicValue::Sint(b'$' as i8)), "'$$'");
		assert_eq!(format(&AtomicValue::Sint(b'\'' as i8)), "'$''");
	}

	#[test]
	fn named_escapes_round_trip() {
		for value in [0x09_i8, 0x0a, 0x0c, 0x0d, b'$' as i8, b'\'' as i8] {
			let text = format(&AtomicValue::Sint(value));
			assert_eq!(parse(AtomicKind::Sint, &text).unwrap(), AtomicValue::Sint(value));
		}
	}

	#[test]
	fn unterminated_literal_is_a_format_error() {
		assert!(matches!(parse(AtomicKind::Sint, "'A").unwrap_err(), LogixError::Format { .. }));
		assert!(matches!(parse(AtomicKind::Sint, "A'").unwrap_err(), LogixError::Format { .. }));
		assert!(matches!(parse(AtomicKind::Sint, "'$'").unwrap_err(), LogixError::Format { .. }));
	}

	#[test]
	fn unknown_escape_is_a_format_error() {
		assert!(matches!(parse(AtomicKind::Sint, "'$q0'").unwrap_err(), LogixError::Format { .. }));
	}
}
