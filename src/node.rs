use std::borrow::Cow;

/// A read-only handle to one node of an externally owned tree.
///
/// Handles are expected to be cheap to produce and drop (references, [`Copy`] views or reference-counted JS objects),
/// since [`TreeWalker`](`crate::TreeWalker`) yields them by value.
///
/// The tree reachable through [`children`](`TreeNode::children`) must be finite and acyclic.
/// This isn't checked: Walking a cyclic structure doesn't terminate.
pub trait TreeNode: Sized {
	/// Iterates a node's direct children in document order.
	type Children: Iterator<Item = Self>;

	/// The node's name, like [***nodeName***](https://developer.mozilla.org/en-US/docs/Web/API/Node/nodeName).
	///
	/// Casing follows the underlying model, so compare with [`name_matches`](`TreeNode::name_matches`).
	fn name(&self) -> Cow<'_, str>;

	fn children(&self) -> Self::Children;

	/// ASCII-case-insensitive comparison of [`name`](`TreeNode::name`) with `expected`.
	#[must_use]
	fn name_matches(&self, expected: &str) -> bool {
		self.name().eq_ignore_ascii_case(expected)
	}
}
