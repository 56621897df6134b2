use std::fmt;

use serde::Serialize;

use crate::logix::{LogixError, Result};

/// Fixed-width scalar kinds carried by the file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AtomicKind {
	/// Single bit.
	Bool,
	/// 8-bit signed integer.
	Sint,
	/// 16-bit signed integer.
	Int,
	/// 32-bit signed integer.
	Dint,
	/// 64-bit signed integer.
	Lint,
	/// 32-bit IEEE-754 float.
	Real,
	/// 64-bit IEEE-754 float.
	Lreal,
}

impl AtomicKind {
	/// Every atomic kind, in declaration order.
	pub const ALL: [AtomicKind; 7] = [
		AtomicKind::Bool,
		AtomicKind::Sint,
		AtomicKind::Int,
		AtomicKind::Dint,
		AtomicKind::Lint,
		AtomicKind::Real,
		AtomicKind::Lreal,
	];

	/// Canonical type name as it appears in the file format.
	pub fn name(self) -> &'static str {
		match self {
			AtomicKind::Bool => "BOOL",
			AtomicKind::Sint => "SINT",
			AtomicKind::Int => "INT",
			AtomicKind::Dint => "DINT",
			AtomicKind::Lint => "LINT",
			AtomicKind::Real => "REAL",
			AtomicKind::Lreal => "LREAL",
		}
	}

	/// Look up a kind by its canonical name, case-insensitively.
	pub fn by_name(name: &str) -> Option<AtomicKind> {
		AtomicKind::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
	}

	/// Stored width in bits (1/8/16/32/64).
	pub fn bit_width(self) -> u32 {
		match self {
			AtomicKind::Bool => 1,
			AtomicKind::Sint => 8,
			AtomicKind::Int => 16,
			AtomicKind::Dint | AtomicKind::Real => 32,
			AtomicKind::Lint | AtomicKind::Lreal => 64,
		}
	}

	/// Stored width in whole bytes (a Bool occupies one byte).
	pub fn byte_width(self) -> usize {
		match self {
			AtomicKind::Bool | AtomicKind::Sint => 1,
			AtomicKind::Int => 2,
			AtomicKind::Dint | AtomicKind::Real => 4,
			AtomicKind::Lint | AtomicKind::Lreal => 8,
		}
	}

	/// Whether the kind is interpreted as an IEEE float.
	pub fn is_float(self) -> bool {
		matches!(self, AtomicKind::Real | AtomicKind::Lreal)
	}

	/// Inclusive signed integer domain, `None` for float kinds.
	pub fn integer_range(self) -> Option<(i128, i128)> {
		match self {
			AtomicKind::Bool => Some((0, 1)),
			AtomicKind::Sint => Some((i128::from(i8::MIN), i128::from(i8::MAX))),
			AtomicKind::Int => Some((i128::from(i16::MIN), i128::from(i16::MAX))),
			AtomicKind::Dint => Some((i128::from(i32::MIN), i128::from(i32::MAX))),
			AtomicKind::Lint => Some((i128::from(i64::MIN), i128::from(i64::MAX))),
			AtomicKind::Real | AtomicKind::Lreal => None,
		}
	}
}

impl fmt::Display for AtomicKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// One scalar value tagged with its kind.
///
/// Values have plain value semantics: they are freely copied and carry no
/// shared state. The stored width is fixed by the kind at construction and
/// never changes afterwards.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum AtomicValue {
	/// Single bit.
	Bool(bool),
	/// 8-bit signed integer.
	Sint(i8),
	/// 16-bit signed integer.
	Int(i16),
	/// 32-bit signed integer.
	Dint(i32),
	/// 64-bit signed integer.
	Lint(i64),
	/// 32-bit IEEE-754 float.
	Real(f32),
	/// 64-bit IEEE-754 float.
	Lreal(f64),
}

impl AtomicValue {
	/// Canonical zero value for a kind.
	pub fn default_for(kind: AtomicKind) -> AtomicValue {
		match kind {
			AtomicKind::Bool => AtomicValue::Bool(false),
			AtomicKind::Sint => AtomicValue::Sint(0),
			AtomicKind::Int => AtomicValue::Int(0),
			AtomicKind::Dint => AtomicValue::Dint(0),
			AtomicKind::Lint => AtomicValue::Lint(0),
			AtomicKind::Real => AtomicValue::Real(0.0),
			AtomicKind::Lreal => AtomicValue::Lreal(0.0),
		}
	}

	/// Construct from a signed integer, rejecting values outside the kind's
	/// domain and float kinds (use [`AtomicValue::from_float`] for those).
	pub fn from_integer(kind: AtomicKind, value: i128) -> Result<AtomicValue> {
		let unsupported = || LogixError::Unsupported {
			detail: format!("{kind} does not take integer assignment"),
		};
		let Some((min, max)) = kind.integer_range() else {
			return Err(unsupported());
		};
		if value < min || value > max {
			return Err(LogixError::range(kind, value.to_string()));
		}
		match kind {
			AtomicKind::Bool => Ok(AtomicValue::Bool(value != 0)),
			AtomicKind::Sint => Ok(AtomicValue::Sint(value as i8)),
			AtomicKind::Int => Ok(AtomicValue::Int(value as i16)),
			AtomicKind::Dint => Ok(AtomicValue::Dint(value as i32)),
			AtomicKind::Lint => Ok(AtomicValue::Lint(value as i64)),
			AtomicKind::Real | AtomicKind::Lreal => Err(unsupported()),
		}
	}

	/// Construct from a float, rejecting integer kinds and finite values
	/// whose magnitude cannot be stored in the kind.
	pub fn from_float(kind: AtomicKind, value: f64) -> Result<AtomicValue> {
		match kind {
			AtomicKind::Real => {
				if value.is_finite() && value.abs() > f64::from(f32::MAX) {
					return Err(LogixError::range(kind, value.to_string()));
				}
				Ok(AtomicValue::Real(value as f32))
			}
			AtomicKind::Lreal => Ok(AtomicValue::Lreal(value)),
			other => Err(LogixError::Unsupported {
				detail: format!("{other} does not take float assignment"),
			}),
		}
	}

	/// Reinterpret a raw bit pattern as a value of the kind.
	///
	/// Bits above the kind's width are ignored; integer kinds read the
	/// pattern as two's complement.
	pub fn from_bits(kind: AtomicKind, bits: u64) -> AtomicValue {
		match kind {
			AtomicKind::Bool => AtomicValue::Bool(bits & 1 != 0),
			AtomicKind::Sint => AtomicValue::Sint(bits as u8 as i8),
			AtomicKind::Int => AtomicValue::Int(bits as u16 as i16),
			AtomicKind::Dint => AtomicValue::Dint(bits as u32 as i32),
			AtomicKind::Lint => AtomicValue::Lint(bits as i64),
			AtomicKind::Real => AtomicValue::Real(f32::from_bits(bits as u32)),
			AtomicKind::Lreal => AtomicValue::Lreal(f64::from_bits(bits)),
		}
	}

	/// Kind tag of this value.
	pub fn kind(&self) -> AtomicKind {
		match self {
			AtomicValue::Bool(_) => AtomicKind::Bool,
			AtomicValue::Sint(_) => AtomicKind::Sint,
			AtomicValue::Int(_) => AtomicKind::Int,
			AtomicValue::Dint(_) => AtomicKind::Dint,
			AtomicValue::Lint(_) => AtomicKind::Lint,
			AtomicValue::Real(_) => AtomicKind::Real,
			AtomicValue::Lreal(_) => AtomicKind::Lreal,
		}
	}

	/// Two's-complement bit pattern zero-extended to 64 bits.
	///
	/// Float kinds yield their IEEE bit pattern.
	pub fn bits(&self) -> u64 {
		match self {
			AtomicValue::Bool(b) => u64::from(*b),
			AtomicValue::Sint(v) => u64::from(*v as u8),
			AtomicValue::Int(v) => u64::from(*v as u16),
			AtomicValue::Dint(v) => u64::from(*v as u32),
			AtomicValue::Lint(v) => *v as u64,
			AtomicValue::Real(v) => u64::from(v.to_bits()),
			AtomicValue::Lreal(v) => v.to_bits(),
		}
	}

	/// Big-endian byte image sized to the kind's byte width.
	pub fn be_bytes(&self) -> Vec<u8> {
		let width = self.kind().byte_width();
		let bits = self.bits();
		(0..width).map(|idx| (bits >> ((width - 1 - idx) * 8)) as u8).collect()
	}

	/// Signed numeric interpretation, `None` for float kinds.
	pub fn as_integer(&self) -> Option<i128> {
		match self {
			AtomicValue::Bool(b) => Some(i128::from(*b)),
			AtomicValue::Sint(v) => Some(i128::from(*v)),
			AtomicValue::Int(v) => Some(i128::from(*v)),
			AtomicValue::Dint(v) => Some(i128::from(*v)),
			AtomicValue::Lint(v) => Some(i128::from(*v)),
			AtomicValue::Real(_) | AtomicValue::Lreal(_) => None,
		}
	}
}

// Equality is by kind plus exact bit pattern, so float values compare by
// their IEEE bits (-0.0 != 0.0, NaN payloads are preserved and equal to
// themselves).
impl PartialEq for AtomicValue {
	fn eq(&self, other: &Self) -> bool {
		self.kind() == other.kind() && self.bits() == other.bits()
	}
}

impl Eq for AtomicValue {}

impl std::hash::Hash for AtomicValue {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.kind().hash(state);
		self.bits().hash(state);
	}
}

impl fmt::Display for AtomicValue {
	/// Renders with the kind's default radix style.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AtomicValue::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
			AtomicValue::Sint(v) => write!(f, "{v}"),
			AtomicValue::Int(v) => write!(f, "{v}"),
			AtomicValue::Dint(v) => write!(f, "{v}"),
			AtomicValue::Lint(v) => write!(f, "{v}"),
			AtomicValue::Real(v) => f.write_str(&crate::logix::radix::float_text_f32(*v)),
			AtomicValue::Lreal(v) => f.write_str(&crate::logix::radix::float_text_f64(*v)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{AtomicKind, AtomicValue};

	#[test]
	fn integer_construction_is_range_checked() {
		assert_eq!(AtomicValue::from_integer(AtomicKind::Sint, 127).unwrap(), AtomicValue::Sint(127));
		assert!(AtomicValue::from_integer(AtomicKind::Sint, 128).is_err());
		assert!(AtomicValue::from_integer(AtomicKind::Bool, 2).is_err());
		assert!(AtomicValue::from_integer(AtomicKind::Real, 1).is_err());
	}

	#[test]
	fn float_construction_rejects_overflow() {
		assert!(AtomicValue::from_float(AtomicKind::Real, 1e39).is_err());
		assert!(AtomicValue::from_float(AtomicKind::Lreal, 1e39).is_ok());
		assert!(AtomicValue::from_float(AtomicKind::Dint, 1.0).is_err());
	}

	#[test]
	fn equality_is_bit_exact() {
		assert_ne!(AtomicValue::Real(0.0), AtomicValue::Real(-0.0));
		assert_eq!(AtomicValue::Real(1.5), AtomicValue::Real(1.5));
		assert_ne!(AtomicValue::Dint(0), AtomicValue::Lint(0));
	}

	#[test]
	fn negative_values_zero_extend_to_their_own_width() {
		assert_eq!(AtomicValue::Sint(-1).bits(), 0xff);
		assert_eq!(AtomicValue::Int(-1).bits(), 0xffff);
		assert_eq!(AtomicValue::Dint(-2).bits(), 0xffff_fffe);
	}

	#[test]
	fn big_endian_bytes_are_sized_to_the_kind() {
		assert_eq!(AtomicValue::Dint(123_456).be_bytes(), vec![0x00, 0x01, 0xe2, 0x40]);
		assert_eq!(AtomicValue::Sint(20).be_bytes(), vec![0x14]);
	}
}
