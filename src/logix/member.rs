use serde::Serialize;

use crate::logix::{AtomicKind, Radix, TypeRegistry};

/// Reference from a member to its data-type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
	/// Built-in fixed-width scalar kind.
	Atomic(AtomicKind),
	/// Named composite type, resolved against a [`TypeRegistry`].
	Named(Box<str>),
}

impl TypeRef {
	/// Named reference from any string-ish input.
	pub fn named(name: &str) -> TypeRef {
		TypeRef::Named(name.into())
	}

	/// Type name as written in the file format.
	pub fn name(&self) -> &str {
		match self {
			TypeRef::Atomic(kind) => kind.name(),
			TypeRef::Named(name) => name,
		}
	}

	/// Default radix for members of this type (`Null` for composites).
	pub fn default_radix(&self) -> Radix {
		match self {
			TypeRef::Atomic(kind) => Radix::default_for(*kind),
			TypeRef::Named(_) => Radix::Null,
		}
	}
}

/// External access restriction carried on members and tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ExternalAccess {
	/// Readable and writable from outside the controller.
	#[default]
	ReadWrite,
	/// Readable only.
	ReadOnly,
	/// Not externally visible.
	None,
}

impl ExternalAccess {
	/// Attribute text as written in the file format.
	pub fn name(self) -> &'static str {
		match self {
			ExternalAccess::ReadWrite => "Read/Write",
			ExternalAccess::ReadOnly => "Read Only",
			ExternalAccess::None => "None",
		}
	}

	/// Look up an access level by its attribute text.
	pub fn by_name(name: &str) -> Option<ExternalAccess> {
		match name {
			"Read/Write" => Some(ExternalAccess::ReadWrite),
			"Read Only" => Some(ExternalAccess::ReadOnly),
			"None" => Some(ExternalAccess::None),
			_ => None,
		}
	}
}

/// Structural shape of a member, derived on demand from its type
/// reference and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemberKind {
	/// Scalar atomic value.
	Value,
	/// Any member with declared dimensions, whatever the element type.
	Array,
	/// String-family composite.
	String,
	/// General composite.
	Structure,
	/// Type reference that the registry cannot resolve.
	Unknown,
}

/// One named, typed element of a structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
	/// Member name, unique within the owning structure.
	pub name: Box<str>,
	/// Referenced data-type definition.
	pub data_type: TypeRef,
	/// Array dimensions; empty means scalar.
	pub dimensions: Vec<u32>,
	/// Radix used when the member's value is written as text.
	pub radix: Radix,
	/// External access restriction.
	pub external_access: ExternalAccess,
	/// Optional free-form description.
	pub description: Option<Box<str>>,
}

impl Member {
	/// Scalar member with the type's default radix.
	pub fn new(name: &str, data_type: TypeRef) -> Member {
		let radix = data_type.default_radix();
		Member {
			name: name.into(),
			data_type,
			dimensions: Vec::new(),
			radix,
			external_access: ExternalAccess::default(),
			description: None,
		}
	}

	/// Scalar member of an atomic kind.
	pub fn atomic(name: &str, kind: AtomicKind) -> Member {
		Member::new(name, TypeRef::Atomic(kind))
	}

	/// Same member with the given dimensions.
	pub fn with_dimensions(mut self, dimensions: Vec<u32>) -> Member {
		self.dimensions = dimensions;
		self
	}

	/// Same member with an explicit radix.
	pub fn with_radix(mut self, radix: Radix) -> Member {
		self.radix = radix;
		self
	}

	/// Structural classification against the given registry.
	///
	/// Computed fresh on every call so it stays consistent when the
	/// dimensions or type reference change after construction.
	pub fn kind(&self, registry: &TypeRegistry) -> MemberKind {
		if !self.dimensions.is_empty() {
			return MemberKind::Array;
		}
		match &self.data_type {
			TypeRef::Atomic(_) => MemberKind::Value,
			TypeRef::Named(name) => match registry.get(name) {
				Some(definition) if definition.is_string() => MemberKind::String,
				Some(_) => MemberKind::Structure,
				None => MemberKind::Unknown,
			},
		}
	}
}
