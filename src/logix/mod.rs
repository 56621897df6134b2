mod ascii;
mod atomic;
mod datetime;
mod digits;
mod error;
mod member;
mod path;
mod radix;
mod structure;

/// Atomic kind and value types.
pub use atomic::{AtomicKind, AtomicValue};
/// Error and result aliases.
pub use error::{LogixError, Result};
/// Member, classification, and type-reference types.
pub use member::{ExternalAccess, Member, MemberKind, TypeRef};
/// Tag member tree and canonical path composition.
pub use path::{NodeId, PathNode, PathStep, TagTree};
/// Radix registry and codec entry point.
pub use radix::Radix;
/// Composite type definitions and the type registry.
pub use structure::{STRING_DATA_MEMBER, STRING_LEN_MEMBER, StructureType, TypeFamily, TypeRegistry};
