use thiserror::Error;

use crate::logix::{AtomicKind, Radix};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, LogixError>;

/// Errors produced while encoding, decoding, and mutating project values.
///
/// Every error is raised synchronously at the point of violation and
/// returned to the immediate caller; this crate never retries, logs, or
/// falls back on an alternate behavior. Structural mutation errors leave
/// the structure exactly as it was before the call.
#[derive(Debug, Error)]
pub enum LogixError {
	/// Text does not match the grammar the radix requires.
	#[error("invalid {radix} text: {text}")]
	Format {
		/// Radix whose grammar was violated.
		radix: Radix,
		/// Offending input text.
		text: String,
	},
	/// Decoded or assigned value falls outside the kind's declared domain,
	/// including a wrong total digit or byte count.
	#[error("out of range for {kind}: {text}")]
	Range {
		/// Target atomic kind.
		kind: AtomicKind,
		/// Offending value or input text.
		text: String,
	},
	/// Radix/kind pairing is invalid, or the operation is not defined for
	/// the target (any Null or Unicode codec call, mutating the fixed
	/// member pair of a string-family structure).
	#[error("unsupported operation: {detail}")]
	Unsupported {
		/// Human-readable description of the rejected operation.
		detail: String,
	},
	/// A member with the requested name already exists on the structure.
	#[error("duplicate member {member} on {type_name}")]
	DuplicateMember {
		/// Owning structure type name.
		type_name: String,
		/// Colliding member name.
		member: String,
	},
	/// A member's data type is the structure that would own it.
	#[error("type {type_name} cannot contain a member of its own type")]
	CircularReference {
		/// Structure type name that referenced itself.
		type_name: String,
	},
	/// No member with the requested name exists on the structure.
	#[error("member {member} not found on {type_name}")]
	MemberNotFound {
		/// Owning structure type name.
		type_name: String,
		/// Requested member name.
		member: String,
	},
}

impl LogixError {
	/// Shorthand for the codec pairing rejection.
	pub(crate) fn unsupported_pairing(radix: Radix, kind: AtomicKind) -> Self {
		Self::Unsupported {
			detail: format!("radix {radix} does not accept {kind}"),
		}
	}

	/// Shorthand for a grammar violation.
	pub(crate) fn format(radix: Radix, text: &str) -> Self {
		Self::Format {
			radix,
			text: text.to_owned(),
		}
	}

	/// Shorthand for a domain violation.
	pub(crate) fn range(kind: AtomicKind, text: impl Into<String>) -> Self {
		Self::Range {
			kind,
			text: text.into(),
		}
	}
}
