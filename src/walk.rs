use crate::TreeNode;
use core::{fmt, iter::FusedIterator};
use tracing::{enabled, error, level_filters::STATIC_MAX_LEVEL, trace, Level};

/// Shorthand for [`TreeWalker::new`].
#[must_use]
pub fn walk<N: TreeNode>(root: N) -> TreeWalker<N> {
	TreeWalker::new(root)
}

/// Lazily enumerates a tree in pre-order, starting with its root.
///
/// Each subtree is visited completely before the next sibling's subtree begins.
/// The walker keeps one [`TreeNode::Children`] iterator per open level instead of recursing,
/// so tree depth is limited only by memory.
///
/// Nothing is mutated, so walking the same unmodified tree again yields the same sequence.
/// Dropping the walker early is fine.
pub struct TreeWalker<N: TreeNode> {
	root: Option<N>,
	stack: Vec<N::Children>,
	depth: Option<usize>,
	depth_limit: Option<usize>,
}

impl<N: TreeNode> TreeWalker<N> {
	#[must_use]
	pub fn new(root: N) -> Self {
		Self {
			root: Some(root),
			stack: Vec::new(),
			depth: None,
			depth_limit: None,
		}
	}

	/// Like [`TreeWalker::new`], but doesn't descend into nodes at `depth_limit` (where the root is at depth 0).
	///
	/// Each cut-off subtree is logged as error.
	#[must_use]
	pub fn with_depth_limit(root: N, depth_limit: usize) -> Self {
		Self {
			depth_limit: Some(depth_limit),
			..Self::new(root)
		}
	}

	/// The depth of the node yielded last, with the root at depth 0.
	///
	/// [`None`] until the first call to [`Iterator::next`].
	#[must_use]
	pub fn depth(&self) -> Option<usize> {
		self.depth
	}

	fn visit(&mut self, node: &N, depth: usize) {
		self.depth = Some(depth);
		if cfg!(feature = "dangerous-logging") {
			trace!(depth, name = %node.name(), "Visiting node.");
		} else {
			trace!(depth, "Visiting node.");
		}

		match self.depth_limit {
			Some(depth_limit) if depth >= depth_limit => {
				if STATIC_MAX_LEVEL >= Level::ERROR && enabled!(Level::ERROR) && node.children().next().is_some() {
					error!(depth, "Depth limit reached; Skipping children.");
				}
			}
			_ => self.stack.push(node.children()),
		}
	}
}

impl<N: TreeNode> Iterator for TreeWalker<N> {
	type Item = N;

	fn next(&mut self) -> Option<Self::Item> {
		if let Some(root) = self.root.take() {
			self.visit(&root, 0);
			return Some(root);
		}

		loop {
			let depth = self.stack.len();
			match self.stack.last_mut()?.next() {
				Some(child) => {
					self.visit(&child, depth);
					return Some(child);
				}
				None => {
					self.stack.pop();
				}
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match (&self.root, self.stack.is_empty()) {
			(Some(_), _) => (1, None),
			(None, true) => (0, Some(0)),
			(None, false) => (0, None),
		}
	}
}

impl<N: TreeNode> FusedIterator for TreeWalker<N> {}

impl<N: TreeNode> fmt::Debug for TreeWalker<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TreeWalker")
			.field("root_pending", &self.root.is_some())
			.field("open_levels", &self.stack.len())
			.field("depth", &self.depth)
			.field("depth_limit", &self.depth_limit)
			.finish()
	}
}
