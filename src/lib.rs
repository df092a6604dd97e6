//! Lazy pre-order traversal of externally owned trees.
//!
//! [`TreeWalker`] visits any [`TreeNode`] implementation depth-first, parent before children and siblings in order,
//! without recursing on the call stack and without collecting the result up front.
//!
//! Implementations are provided for the browser DOM ([`web_sys::Node`], [`web_sys::Element`])
//! and for [`lignin`] VDOM trees (via [`vdom::VdomNode`]).

#![doc(html_root_url = "https://docs.rs/dom-walker/0.0.1")]
#![warn(clippy::pedantic)]

pub use lignin;
pub use web_sys;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod node;
pub mod vdom;
mod walk;
mod web;

pub use node::TreeNode;
pub use walk::{walk, TreeWalker};
pub use web::{ChildNodes, ElementChildren};
