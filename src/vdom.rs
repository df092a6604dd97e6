//! [`TreeNode`] views of [`lignin`] VDOM trees.
//!
//! A VDOM contains fragments ([`Node::Multi`], [`Node::Keyed`], [`Node::Memoized`]) that group other nodes
//! without creating a DOM node of their own. [`VdomNode`] only represents nodes that materialise to one DOM node each,
//! so walking a VDOM yields the same names in the same order as walking the DOM it renders to.

use crate::TreeNode;
use core::{fmt, iter::FusedIterator, slice};
use lignin::{Element, Node, ReorderableFragment, ThreadSafety};
use std::borrow::Cow;
use tracing::{trace, warn};

/// A [`Node`] that materialises to exactly one DOM node: a comment, text or element.
pub struct VdomNode<'a, S: ThreadSafety> {
	node: &'a Node<'a, S>,
	kind: Kind<'a, S>,
}

enum Kind<'a, S: ThreadSafety> {
	Comment,
	Text,
	Element(&'a Element<'a, S>),
}

impl<'a, S: ThreadSafety> Clone for Kind<'a, S> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<'a, S: ThreadSafety> Copy for Kind<'a, S> {}

impl<'a, S: ThreadSafety> VdomNode<'a, S> {
	/// Returns [`None`] iff `node` is a fragment or remnant site. Use [`dom_nodes`] to flatten those.
	#[must_use]
	pub fn new(node: &'a Node<'a, S>) -> Option<Self> {
		let kind = match *node {
			Node::Comment { .. } => Kind::Comment,
			Node::Text { .. } => Kind::Text,
			Node::HtmlElement { element, .. } | Node::MathMlElement { element, .. } | Node::SvgElement { element, .. } => Kind::Element(element),
			Node::Memoized { .. } | Node::Multi(_) | Node::Keyed(_) | Node::RemnantSite(_) => return None,
		};
		Some(Self { node, kind })
	}

	#[must_use]
	pub fn node(&self) -> &'a Node<'a, S> {
		self.node
	}
}

impl<'a, S: ThreadSafety> Clone for VdomNode<'a, S> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<'a, S: ThreadSafety> Copy for VdomNode<'a, S> {}

impl<'a, S: ThreadSafety> fmt::Debug for VdomNode<'a, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("VdomNode").field(&self.name()).finish()
	}
}

impl<'a, S: ThreadSafety> TreeNode for VdomNode<'a, S> {
	type Children = DomNodes<'a, S>;

	/// The element name as given in the VDOM, or `#comment`/`#text` like in the DOM.
	fn name(&self) -> Cow<'_, str> {
		match self.kind {
			Kind::Comment => "#comment".into(),
			Kind::Text => "#text".into(),
			Kind::Element(element) => element.name.into(),
		}
	}

	fn children(&self) -> Self::Children {
		match self.kind {
			Kind::Element(element) => dom_nodes(&element.content),
			Kind::Comment | Kind::Text => DomNodes { stack: Vec::new() },
		}
	}
}

/// Lazily flattens fragments in `node`, yielding the [`VdomNode`]s it materialises to in DOM order.
///
/// If `node` already is one, it's yielded on its own.
#[must_use]
pub fn dom_nodes<'a, S: ThreadSafety>(node: &'a Node<'a, S>) -> DomNodes<'a, S> {
	DomNodes { stack: vec![Pending::One(node)] }
}

enum Pending<'a, S: ThreadSafety> {
	One(&'a Node<'a, S>),
	Multi(slice::Iter<'a, Node<'a, S>>),
	Keyed(slice::Iter<'a, ReorderableFragment<'a, S>>),
}

/// See [`dom_nodes`].
pub struct DomNodes<'a, S: ThreadSafety> {
	stack: Vec<Pending<'a, S>>,
}

impl<'a, S: ThreadSafety> Iterator for DomNodes<'a, S> {
	type Item = VdomNode<'a, S>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let node = match self.stack.last_mut()? {
				Pending::One(node) => {
					let node = *node;
					self.stack.pop();
					node
				}
				Pending::Multi(nodes) => match nodes.next() {
					Some(node) => node,
					None => {
						self.stack.pop();
						continue;
					}
				},
				Pending::Keyed(reorderable_fragments) => match reorderable_fragments.next() {
					Some(ReorderableFragment { content, .. }) => content,
					None => {
						self.stack.pop();
						continue;
					}
				},
			};

			match *node {
				Node::Comment { .. } | Node::Text { .. } | Node::HtmlElement { .. } | Node::MathMlElement { .. } | Node::SvgElement { .. } => return VdomNode::new(node),
				Node::Memoized { state_key, content } => {
					trace!(state_key, "Entering memoized.");
					self.stack.push(Pending::One(content));
				}
				Node::Multi(nodes) => self.stack.push(Pending::Multi(nodes.iter())),
				Node::Keyed(reorderable_fragments) => self.stack.push(Pending::Keyed(reorderable_fragments.iter())),
				Node::RemnantSite(_) => warn!("Skipping `RemnantSite`, which has no known DOM content."),
			}
		}
	}
}

impl<'a, S: ThreadSafety> FusedIterator for DomNodes<'a, S> {}

impl<'a, S: ThreadSafety> fmt::Debug for DomNodes<'a, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DomNodes").field("open_fragments", &self.stack.len()).finish()
	}
}
