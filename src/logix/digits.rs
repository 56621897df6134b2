use crate::logix::{AtomicKind, AtomicValue, LogixError, Radix, Result};

/// Fixed parameters of one positional base encoding.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseSpec {
	/// Literal prefix, e.g. `16#`.
	pub prefix: &'static str,
	/// Bits consumed per digit (1, 3, or 4).
	pub bits_per_digit: u32,
	/// Digits per `_`-separated cluster, counted from the right.
	pub group: usize,
	/// Radix tag used in errors.
	pub radix: Radix,
}

/// `2#` full-width bit string, `_` every 4 bits.
pub(crate) const BINARY: BaseSpec = BaseSpec {
	prefix: "2#",
	bits_per_digit: 1,
	group: 4,
	radix: Radix::Binary,
};

/// `8#` fixed-width octal, `_` every 3 digits.
pub(crate) const OCTAL: BaseSpec = BaseSpec {
	prefix: "8#",
	bits_per_digit: 3,
	group: 3,
	radix: Radix::Octal,
};

/// `16#` fixed-width lowercase hex, `_` every 4 digits.
pub(crate) const HEX: BaseSpec = BaseSpec {
	prefix: "16#",
	bits_per_digit: 4,
	group: 4,
	radix: Radix::Hex,
};

impl BaseSpec {
	/// Digit count that covers the kind's full bit width.
	fn digit_count(self, kind: AtomicKind) -> usize {
		kind.bit_width().div_ceil(self.bits_per_digit) as usize
	}
}

fn width_mask(bits: u32) -> u128 {
	if bits >= 64 { u128::from(u64::MAX) } else { (1_u128 << bits) - 1 }
}

fn digit_char(digit: u64) -> char {
	// Lowercase, matching the wire fixtures (`16#0012_d687`).
	char::from_digit(digit as u32, 16).unwrap_or('0').to_ascii_lowercase()
}

/// Render the value's two's-complement pattern in the given base, padded
/// to the kind's full width and clustered from the right.
pub(crate) fn format(spec: BaseSpec, value: &AtomicValue) -> String {
	let kind = value.kind();
	let count = spec.digit_count(kind);
	let bits = value.bits();
	let digit_mask = (1_u64 << spec.bits_per_digit) - 1;

	let mut out = String::with_capacity(spec.prefix.len() + count * 2);
	out.push_str(spec.prefix);
	for idx in 0..count {
		let remaining = count - idx;
		if idx > 0 && remaining % spec.group == 0 {
			out.push('_');
		}
		let shift = (remaining as u32 - 1) * spec.bits_per_digit;
		// The top cluster of an octal rendering covers more bits than the
		// kind stores; the excess reads as zero because `bits()` is
		// zero-extended.
		let digit = if shift >= 64 { 0 } else { (bits >> shift) & digit_mask };
		out.push(digit_char(digit));
	}
	out
}

/// Decode a base literal back into the kind's two's-complement value.
///
/// Binary and octal demand the exact digit count the kind formats with
/// (anything else is a grammar error); hex accepts shorter literals but
/// rejects longer ones as a range violation, and either way a decoded
/// pattern wider than the kind is out of range.
pub(crate) fn parse(spec: BaseSpec, kind: AtomicKind, text: &str) -> Result<AtomicValue> {
	let Some(body) = text.strip_prefix(spec.prefix) else {
		return Err(LogixError::format(spec.radix, text));
	};

	let base = 1_u32 << spec.bits_per_digit;
	let expected = spec.digit_count(kind);
	let mut digits = 0_usize;
	let mut bits = 0_u128;
	for ch in body.chars() {
		if ch == '_' {
			continue;
		}
		let Some(digit) = ch.to_digit(base) else {
			return Err(LogixError::format(spec.radix, text));
		};
		digits += 1;
		if digits > expected {
			// Hex treats extra digits as a width overflow; binary and
			// octal demand the exact count as part of their grammar.
			return Err(match spec.radix {
				Radix::Hex => LogixError::range(kind, text),
				_ => LogixError::format(spec.radix, text),
			});
		}
		bits = (bits << spec.bits_per_digit) | u128::from(digit);
	}

	if digits == 0 || (spec.radix != Radix::Hex && digits != expected) {
		return Err(LogixError::format(spec.radix, text));
	}

	if bits > width_mask(kind.bit_width()) {
		return Err(LogixError::range(kind, text));
	}
	Ok(AtomicValue::from_bits(kind, bits as u64))
}
