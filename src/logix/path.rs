use serde::Serialize;

use crate::logix::{TypeRef, TypeRegistry};

// Instantiation bound; deeper nesting than this only arises from a cyclic
// registry, which has no finite member tree.
const MAX_EXPAND_DEPTH: u32 = 32;

/// Handle to one node of a [`TagTree`].
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

/// One addressing step below a node's parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathStep {
	/// Named member selection, rendered `.Name` (bare name at the root).
	Member(Box<str>),
	/// Array element selection, rendered `[index]` with no separator.
	Element(u32),
	/// Bit selection inside an integer, rendered `.index`.
	Bit(u32),
}

/// One node of a tag's member tree.
///
/// Parent links are indices, so ownership runs strictly top-down; a node
/// can never keep its tree alive.
#[derive(Debug, Clone, Serialize)]
pub struct PathNode {
	/// Parent node, `None` only at the root.
	pub parent: Option<NodeId>,
	/// Step that addresses this node below its parent.
	pub step: PathStep,
}

/// Rooted member tree of one tag, with canonical path composition.
///
/// The composition rules — `.` before member and bit names, nothing
/// before `[`— chain at any depth without ever producing two consecutive
/// separators, which is the invariant downstream cross-reference keys
/// depend on.
#[derive(Debug, Clone, Serialize)]
pub struct TagTree {
	nodes: Vec<PathNode>,
}

impl TagTree {
	/// Root node id of every tree.
	pub const ROOT: NodeId = NodeId(0);

	/// Single-node tree whose root path is the tag name itself.
	pub fn new(tag: &str) -> TagTree {
		TagTree {
			nodes: vec![PathNode {
				parent: None,
				step: PathStep::Member(tag.into()),
			}],
		}
	}

	/// Tree with the tag's full member shape expanded: array elements per
	/// dimension, then structure members recursively per the registry.
	///
	/// Each call builds an independent copy, so two tags of the same type
	/// never share nodes. Unresolvable names expand to leaves.
	pub fn instantiate(tag: &str, data_type: &TypeRef, dimensions: &[u32], registry: &TypeRegistry) -> TagTree {
		let mut tree = TagTree::new(tag);
		tree.expand(TagTree::ROOT, data_type, dimensions, registry, 0);
		tree
	}

	/// Append a named-member node.
	pub fn add_member(&mut self, parent: NodeId, name: &str) -> NodeId {
		self.push(parent, PathStep::Member(name.into()))
	}

	/// Append an array-element node.
	pub fn add_element(&mut self, parent: NodeId, index: u32) -> NodeId {
		self.push(parent, PathStep::Element(index))
	}

	/// Append a bit node addressing one bit of an integer value.
	pub fn add_bit(&mut self, parent: NodeId, bit: u32) -> NodeId {
		self.push(parent, PathStep::Bit(bit))
	}

	/// Borrow a node record.
	pub fn node(&self, id: NodeId) -> &PathNode {
		&self.nodes[id.0]
	}

	/// Number of nodes in the tree.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Always false; a tree has at least its root.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Ids of every node, root first, in insertion order.
	pub fn ids(&self) -> impl Iterator<Item = NodeId> {
		(0..self.nodes.len()).map(NodeId)
	}

	/// Direct children of a node, in insertion order.
	pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
		self.nodes
			.iter()
			.enumerate()
			.filter(move |(_, node)| node.parent == Some(id))
			.map(|(index, _)| NodeId(index))
	}

	/// Canonical address string of a node.
	pub fn path(&self, id: NodeId) -> String {
		let mut chain = Vec::new();
		let mut cursor = Some(id);
		while let Some(current) = cursor {
			chain.push(current);
			cursor = self.nodes[current.0].parent;
		}

		let mut out = String::new();
		for current in chain.into_iter().rev() {
			match &self.nodes[current.0].step {
				PathStep::Member(name) => {
					if !out.is_empty() {
						out.push('.');
					}
					out.push_str(name);
				}
				PathStep::Element(index) => {
					out.push('[');
					out.push_str(&index.to_string());
					out.push(']');
				}
				PathStep::Bit(bit) => {
					out.push('.');
					out.push_str(&bit.to_string());
				}
			}
		}
		out
	}

	fn push(&mut self, parent: NodeId, step: PathStep) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(PathNode {
			parent: Some(parent),
			step,
		});
		id
	}

	fn expand(&mut self, parent: NodeId, data_type: &TypeRef, dimensions: &[u32], registry: &TypeRegistry, depth: u32) {
		if depth >= MAX_EXPAND_DEPTH {
			return;
		}
		if let Some((first, rest)) = dimensions.split_first() {
			for index in 0..*first {
				let element = self.add_element(parent, index);
				self.expand(element, data_type, rest, registry, depth + 1);
			}
			return;
		}
		if let TypeRef::Named(name) = data_type
			&& let Some(definition) = registry.get(name)
		{
			for member in definition.members() {
				let node = self.add_member(parent, &member.name);
				self.expand(node, &member.data_type, &member.dimensions, registry, depth + 1);
			}
		}
	}
}
