use std::fmt;

use serde::Serialize;

use crate::logix::{AtomicKind, AtomicValue, LogixError, Result, ascii, datetime, digits};

/// Named text encoding styles for atomic values.
///
/// The variant set is the whole radix registry: every instance is a
/// process-wide constant with no per-value state, [`Radix::ALL`] is the
/// registry table and [`Radix::by_name`] the lookup the document layer
/// uses when reading value attributes. `Null` is reserved for non-atomic
/// members and supports no operation; `Unicode` is carried for name
/// round-tripping but its encoding is not specified by any known fixture,
/// so its codec is likewise rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Radix {
	/// Placeholder for non-atomic members; formats and parses nothing.
	Null,
	/// Plain base-10 with optional leading `-`.
	Decimal,
	/// `2#` full-width two's-complement bit string.
	Binary,
	/// `8#` fixed-width octal digits.
	Octal,
	/// `16#` fixed-width lowercase hex digits.
	Hex,
	/// Normalized scientific notation for float kinds.
	Exponential,
	/// Plain decimal with a fractional part for float kinds.
	Float,
	/// Single-quoted big-endian byte string with `$` escapes.
	Ascii,
	/// Reserved name; encoding not yet specified.
	Unicode,
	/// `DT#` timestamp over 64-bit signed microseconds since the epoch.
	DateTime,
	/// `DT#` timestamp over 64-bit signed nanoseconds since the epoch.
	DateTimeNs,
	/// Resolves to the value kind's default radix before delegating.
	UseTypeStyle,
}

impl Radix {
	/// Every radix, in declaration order. This is the whole registry.
	pub const ALL: [Radix; 12] = [
		Radix::Null,
		Radix::Decimal,
		Radix::Binary,
		Radix::Octal,
		Radix::Hex,
		Radix::Exponential,
		Radix::Float,
		Radix::Ascii,
		Radix::Unicode,
		Radix::DateTime,
		Radix::DateTimeNs,
		Radix::UseTypeStyle,
	];

	/// Canonical radix name.
	pub fn name(self) -> &'static str {
		match self {
			Radix::Null => "Null",
			Radix::Decimal => "Decimal",
			Radix::Binary => "Binary",
			Radix::Octal => "Octal",
			Radix::Hex => "Hex",
			Radix::Exponential => "Exponential",
			Radix::Float => "Float",
			Radix::Ascii => "Ascii",
			Radix::Unicode => "Unicode",
			Radix::DateTime => "DateTime",
			Radix::DateTimeNs => "DateTimeNs",
			Radix::UseTypeStyle => "UseTypeStyle",
		}
	}

	/// Look up a radix by name, case-insensitively.
	///
	/// The slash spellings used by project file attributes (`Date/Time`,
	/// `Date/Time (ns)`) are accepted as aliases.
	pub fn by_name(name: &str) -> Option<Radix> {
		if let Some(found) = Radix::ALL.into_iter().find(|radix| radix.name().eq_ignore_ascii_case(name)) {
			return Some(found);
		}
		match name {
			"Date/Time" => Some(Radix::DateTime),
			"Date/Time (ns)" => Some(Radix::DateTimeNs),
			_ => None,
		}
	}

	/// Default display radix for a kind (`Float` for float kinds,
	/// `Decimal` for everything else).
	pub fn default_for(kind: AtomicKind) -> Radix {
		if kind.is_float() { Radix::Float } else { Radix::Decimal }
	}

	/// Whether this radix accepts values of the given kind.
	pub fn supports(self, kind: AtomicKind) -> bool {
		match self {
			Radix::Null | Radix::Unicode => false,
			Radix::Decimal | Radix::Binary | Radix::Octal | Radix::Hex => !kind.is_float(),
			Radix::Exponential | Radix::Float => kind.is_float(),
			Radix::Ascii => matches!(kind, AtomicKind::Sint | AtomicKind::Int | AtomicKind::Dint | AtomicKind::Lint),
			Radix::DateTime | Radix::DateTimeNs => kind == AtomicKind::Lint,
			Radix::UseTypeStyle => true,
		}
	}

	/// Render the value in this radix's canonical text form.
	///
	/// Never truncates: a pairing this radix does not accept, or a value
	/// the wire form cannot carry (a timestamp outside four year digits),
	/// is an error.
	pub fn format(self, value: &AtomicValue) -> Result<String> {
		let kind = value.kind();
		if !self.supports(kind) {
			return Err(LogixError::unsupported_pairing(self, kind));
		}
		match self {
			Radix::UseTypeStyle => Radix::default_for(kind).format(value),
			Radix::Decimal => Ok(integer_text(value)),
			Radix::Binary => Ok(digits::format(digits::BINARY, value)),
			Radix::Octal => Ok(digits::format(digits::OCTAL, value)),
			Radix::Hex => Ok(digits::format(digits::HEX, value)),
			Radix::Exponential => Ok(exponential_text(value)),
			Radix::Float => Ok(float_text(value)),
			Radix::Ascii => Ok(ascii::format(value)),
			Radix::DateTime => {
				let AtomicValue::Lint(raw) = value else {
					return Err(LogixError::unsupported_pairing(self, kind));
				};
				datetime::format_micros(*raw)
			}
			Radix::DateTimeNs => {
				let AtomicValue::Lint(raw) = value else {
					return Err(LogixError::unsupported_pairing(self, kind));
				};
				datetime::format_nanos(*raw)
			}
			Radix::Null | Radix::Unicode => Err(LogixError::unsupported_pairing(self, kind)),
		}
	}

	/// Parse text in this radix back into a value of the target kind.
	pub fn parse(self, kind: AtomicKind, text: &str) -> Result<AtomicValue> {
		if !self.supports(kind) {
			return Err(LogixError::unsupported_pairing(self, kind));
		}
		match self {
			Radix::UseTypeStyle => Radix::default_for(kind).parse(kind, text),
			Radix::Decimal => parse_integer(kind, text),
			Radix::Binary => digits::parse(digits::BINARY, kind, text),
			Radix::Octal => digits::parse(digits::OCTAL, kind, text),
			Radix::Hex => digits::parse(digits::HEX, kind, text),
			Radix::Exponential | Radix::Float => parse_float(self, kind, text),
			Radix::Ascii => ascii::parse(kind, text),
			Radix::DateTime => datetime::parse_micros(text),
			Radix::DateTimeNs => datetime::parse_nanos(text),
			Radix::Null | Radix::Unicode => Err(LogixError::unsupported_pairing(self, kind)),
		}
	}
}

impl fmt::Display for Radix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

fn integer_text(value: &AtomicValue) -> String {
	// Bool renders as 1/0; `supports` keeps floats out of this path.
	value.as_integer().unwrap_or_default().to_string()
}

fn parse_integer(kind: AtomicKind, text: &str) -> Result<AtomicValue> {
	let body = text.strip_prefix('-').unwrap_or(text);
	if body.is_empty() || !body.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(LogixError::format(Radix::Decimal, text));
	}
	// Grammar is valid here, so a parse failure can only be overflow.
	let raw: i128 = text.parse().map_err(|_| LogixError::range(kind, text))?;
	AtomicValue::from_integer(kind, raw)
}

/// Shortest decimal that round-trips, always with a fractional part.
pub(crate) fn float_text_f32(value: f32) -> String {
	let mut out = format!("{value}");
	if value.is_finite() && !out.contains('.') {
		out.push_str(".0");
	}
	out
}

/// See [`float_text_f32`].
pub(crate) fn float_text_f64(value: f64) -> String {
	let mut out = format!("{value}");
	if value.is_finite() && !out.contains('.') {
		out.push_str(".0");
	}
	out
}

fn float_text(value: &AtomicValue) -> String {
	match value {
		AtomicValue::Real(v) => float_text_f32(*v),
		AtomicValue::Lreal(v) => float_text_f64(*v),
		_ => String::new(),
	}
}

// Mantissa precision per kind: 9 significant digits recover any f32, 17
// recover any f64.
fn exponential_text(value: &AtomicValue) -> String {
	let raw = match value {
		AtomicValue::Real(v) => format!("{v:.8e}"),
		AtomicValue::Lreal(v) => format!("{v:.16e}"),
		_ => String::new(),
	};
	// Rust renders the exponent bare (`1.12300000e3`); the wire form wants
	// a sign and three digits.
	match raw.split_once('e') {
		Some((mantissa, exponent)) => {
			let exponent: i32 = exponent.parse().unwrap_or_default();
			let sign = if exponent < 0 { '-' } else { '+' };
			format!("{mantissa}e{sign}{:03}", exponent.unsigned_abs())
		}
		None => raw,
	}
}

fn parse_float(radix: Radix, kind: AtomicKind, text: &str) -> Result<AtomicValue> {
	// f32/f64 parsing saturates overflow to infinity, so an infinity that
	// the text did not spell out is a domain violation, not a grammar one.
	let spelled_infinite = text.to_ascii_lowercase().contains("inf");
	match kind {
		AtomicKind::Real => {
			let parsed: f32 = text.parse().map_err(|_| LogixError::format(radix, text))?;
			if parsed.is_infinite() && !spelled_infinite {
				return Err(LogixError::range(kind, text));
			}
			Ok(AtomicValue::Real(parsed))
		}
		AtomicKind::Lreal => {
			let parsed: f64 = text.parse().map_err(|_| LogixError::format(radix, text))?;
			if parsed.is_infinite() && !spelled_infinite {
				return Err(LogixError::range(kind, text));
			}
			Ok(AtomicValue::Lreal(parsed))
		}
		other => Err(LogixError::unsupported_pairing(radix, other)),
	}
}
