use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::logix::{AtomicKind, LogixError, Member, Radix, Result, TypeRef};

/// Family a composite data type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeFamily {
	/// Ordinary user-defined structure.
	General,
	/// Fixed two-member string shape (`LEN` + `DATA`).
	String,
}

/// Named, ordered collection of members defining a composite shape.
///
/// Member order is semantically significant: the document layer emits and
/// consumes structural elements in declaration order, and this type never
/// reorders them. All mutations are atomic; a failed call leaves the
/// member list exactly as it was.
#[derive(Debug, Clone, Serialize)]
pub struct StructureType {
	name: Box<str>,
	family: TypeFamily,
	members: Vec<Member>,
}

/// Name of the synthesized string length member.
pub const STRING_LEN_MEMBER: &str = "LEN";
/// Name of the synthesized string data member.
pub const STRING_DATA_MEMBER: &str = "DATA";

impl StructureType {
	/// Empty general-family structure.
	pub fn new(name: &str) -> StructureType {
		StructureType {
			name: name.into(),
			family: TypeFamily::General,
			members: Vec::new(),
		}
	}

	/// String-family structure of the given character capacity.
	///
	/// The two members are synthesized here and can only be replaced
	/// through [`StructureType::set_string_length`], never individually.
	pub fn string_type(name: &str, length: u32) -> StructureType {
		StructureType {
			name: name.into(),
			family: TypeFamily::String,
			members: vec![
				Member::atomic(STRING_LEN_MEMBER, AtomicKind::Dint),
				string_data_member(length),
			],
		}
	}

	/// Type name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Family tag.
	pub fn family(&self) -> TypeFamily {
		self.family
	}

	/// Whether this type belongs to the string family.
	pub fn is_string(&self) -> bool {
		self.family == TypeFamily::String
	}

	/// Members in declaration order.
	pub fn members(&self) -> &[Member] {
		&self.members
	}

	/// Look up a member by name.
	pub fn member(&self, name: &str) -> Option<&Member> {
		self.members.iter().find(|member| member.name.as_ref() == name)
	}

	/// Append a member, rejecting duplicates and direct self-reference.
	pub fn add_member(&mut self, member: Member) -> Result<()> {
		self.require_general("add a member to")?;
		if self.member(&member.name).is_some() {
			return Err(LogixError::DuplicateMember {
				type_name: self.name.to_string(),
				member: member.name.to_string(),
			});
		}
		if matches!(&member.data_type, TypeRef::Named(name) if *name == self.name) {
			return Err(LogixError::CircularReference {
				type_name: self.name.to_string(),
			});
		}
		self.members.push(member);
		Ok(())
	}

	/// Remove a member by name, returning it.
	pub fn remove_member(&mut self, name: &str) -> Result<Member> {
		self.require_general("remove a member from")?;
		let index = self.member_index(name)?;
		Ok(self.members.remove(index))
	}

	/// Rename a member, rejecting collisions with existing names.
	pub fn rename_member(&mut self, old: &str, new: &str) -> Result<()> {
		self.require_general("rename a member of")?;
		let index = self.member_index(old)?;
		if old != new && self.member(new).is_some() {
			return Err(LogixError::DuplicateMember {
				type_name: self.name.to_string(),
				member: new.to_string(),
			});
		}
		self.members[index].name = new.into();
		Ok(())
	}

	/// Declared character capacity of a string-family type.
	pub fn string_length(&self) -> Option<u32> {
		if !self.is_string() {
			return None;
		}
		self.member(STRING_DATA_MEMBER).and_then(|data| data.dimensions.first().copied())
	}

	/// Regenerate the string data member at a new capacity.
	///
	/// Only the `DATA` member is replaced; `LEN` keeps its identity and
	/// position.
	pub fn set_string_length(&mut self, length: u32) -> Result<()> {
		if !self.is_string() {
			return Err(LogixError::Unsupported {
				detail: format!("cannot set a string length on general type {}", self.name),
			});
		}
		if length == 0 {
			return Err(LogixError::Unsupported {
				detail: format!("string type {} needs a non-zero length", self.name),
			});
		}
		let index = self.member_index(STRING_DATA_MEMBER)?;
		self.members[index] = string_data_member(length);
		Ok(())
	}

	/// Distinct transitive closure of named types referenced by members.
	///
	/// Names missing from the registry are still reported; that is how a
	/// caller detects that a structure (directly or transitively) leans on
	/// an unresolved placeholder. Cycles through the registry terminate.
	pub fn dependent_types(&self, registry: &TypeRegistry) -> BTreeSet<Box<str>> {
		let mut out = BTreeSet::new();
		let mut pending: Vec<Box<str>> = self.named_references().collect();
		while let Some(name) = pending.pop() {
			if !out.insert(name.clone()) {
				continue;
			}
			if let Some(definition) = registry.get(&name) {
				pending.extend(definition.named_references());
			}
		}
		out
	}

	fn named_references(&self) -> impl Iterator<Item = Box<str>> + '_ {
		self.members.iter().filter_map(|member| match &member.data_type {
			TypeRef::Named(name) => Some(name.clone()),
			TypeRef::Atomic(_) => None,
		})
	}

	fn member_index(&self, name: &str) -> Result<usize> {
		self.members
			.iter()
			.position(|member| member.name.as_ref() == name)
			.ok_or_else(|| LogixError::MemberNotFound {
				type_name: self.name.to_string(),
				member: name.to_string(),
			})
	}

	fn require_general(&self, action: &str) -> Result<()> {
		if self.is_string() {
			return Err(LogixError::Unsupported {
				detail: format!("cannot {action} string type {}; regenerate it via a length change", self.name),
			});
		}
		Ok(())
	}
}

fn string_data_member(length: u32) -> Member {
	Member::atomic(STRING_DATA_MEMBER, AtomicKind::Sint)
		.with_dimensions(vec![length])
		.with_radix(Radix::Ascii)
}

/// Process-wide table of composite type definitions, keyed by name.
///
/// Iteration order is the name order, so consumers that walk the registry
/// produce deterministic output.
#[derive(Debug, Default, Serialize)]
pub struct TypeRegistry {
	types: BTreeMap<Box<str>, StructureType>,
}

impl TypeRegistry {
	/// Register a definition, replacing any previous one of the same name.
	pub fn insert(&mut self, definition: StructureType) -> Option<StructureType> {
		self.types.insert(definition.name.clone(), definition)
	}

	/// Look up a definition by name.
	pub fn get(&self, name: &str) -> Option<&StructureType> {
		self.types.get(name)
	}

	/// Mutable lookup, for callers applying a structural edit.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut StructureType> {
		self.types.get_mut(name)
	}

	/// Whether a definition with the given name exists.
	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	/// Definitions in name order.
	pub fn iter(&self) -> impl Iterator<Item = &StructureType> {
		self.types.values()
	}

	/// Number of registered definitions.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}
