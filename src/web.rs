use crate::TreeNode;
use core::iter::FusedIterator;
use std::borrow::Cow;
use web_sys::{Element, Node};

/// Walks [***childNodes***](https://developer.mozilla.org/en-US/docs/Web/API/Node/childNodes),
/// so text and comment nodes are included (as `#text` and `#comment`).
impl TreeNode for Node {
	type Children = ChildNodes;

	fn name(&self) -> Cow<'_, str> {
		self.node_name().into()
	}

	fn children(&self) -> Self::Children {
		ChildNodes(self.first_child())
	}
}

/// Walks [***children***](https://developer.mozilla.org/en-US/docs/Web/API/Element/children), so only elements are visited.
impl TreeNode for Element {
	type Children = ElementChildren;

	fn name(&self) -> Cow<'_, str> {
		self.tag_name().into()
	}

	fn children(&self) -> Self::Children {
		ElementChildren(self.first_element_child())
	}
}

/// Follows [***nextSibling***](https://developer.mozilla.org/en-US/docs/Web/API/Node/nextSibling) from a [`Node`]'s first child.
///
/// Siblings are read one step ahead, so the DOM must not be modified while this is in use.
#[derive(Debug, Clone)]
pub struct ChildNodes(Option<Node>);
impl Iterator for ChildNodes {
	type Item = Node;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.0.take()?;
		self.0 = current.next_sibling();
		Some(current)
	}
}
impl FusedIterator for ChildNodes {}

/// Follows [***nextElementSibling***](https://developer.mozilla.org/en-US/docs/Web/API/Element/nextElementSibling) from an [`Element`]'s first element child.
#[derive(Debug, Clone)]
pub struct ElementChildren(Option<Element>);
impl Iterator for ElementChildren {
	type Item = Element;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.0.take()?;
		self.0 = current.next_element_sibling();
		Some(current)
	}
}
impl FusedIterator for ElementChildren {}
