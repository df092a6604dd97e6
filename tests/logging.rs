use dom_walker::{walk, TreeNode, TreeWalker};
use std::{
	borrow::Cow,
	cell::Cell,
	fmt, iter,
	sync::{Arc, Mutex},
};
use tracing::{
	field::{Field, Visit},
	subscriber::{with_default, NoSubscriber},
	Event, Level, Subscriber,
};
use tracing_subscriber::{
	layer::{Context, Layer},
	prelude::*,
	Registry,
};

use markup_::sample;

#[derive(Debug)]
struct Captured {
	level: Level,
	target: String,
	fields: Vec<&'static str>,
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<Captured>>>);

impl Capture {
	fn walker_events(&self, level: Level) -> Vec<Vec<&'static str>> {
		self.0
			.lock()
			.unwrap()
			.iter()
			.filter(|event| event.level == level && event.target == "dom_walker::walk")
			.map(|event| event.fields.clone())
			.collect()
	}
}

struct FieldNames(Vec<&'static str>);
impl Visit for FieldNames {
	fn record_debug(&mut self, field: &Field, _: &dyn fmt::Debug) {
		self.0.push(field.name());
	}
}

impl<S: Subscriber> Layer<S> for Capture {
	fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
		let mut fields = FieldNames(vec![]);
		event.record(&mut fields);
		self.0.lock().unwrap().push(Captured {
			level: *event.metadata().level(),
			target: event.metadata().target().to_owned(),
			fields: fields.0,
		});
	}
}

fn captured<T>(f: impl FnOnce() -> T) -> (T, Capture) {
	let capture = Capture::default();
	let result = with_default(Registry::default().with(capture.clone()), f);
	(result, capture)
}

#[test]
fn one_error_per_cut_subtree() {
	let tree = sample();

	// Inner `div` and `footer` both have children below the limit.
	let (count, capture) = captured(|| TreeWalker::with_depth_limit(&tree, 1).count());
	assert_eq!(count, 3);
	assert_eq!(capture.walker_events(Level::ERROR).len(), 2);

	// Only `article` has children at depth 2.
	let (count, capture) = captured(|| TreeWalker::with_depth_limit(&tree, 2).count());
	assert_eq!(count, 6);
	let errors = capture.walker_events(Level::ERROR);
	assert_eq!(errors.len(), 1);
	assert!(errors[0].contains(&"depth"));
	assert!(!errors[0].contains(&"name"));
}

#[test]
fn no_error_for_leaves_at_the_limit() {
	let tree = sample();
	let (count, capture) = captured(|| TreeWalker::with_depth_limit(&tree, 3).count());
	assert_eq!(count, 8);
	assert!(capture.walker_events(Level::ERROR).is_empty());

	let (_, capture) = captured(|| walk(&tree).count());
	assert!(capture.walker_events(Level::ERROR).is_empty());
}

#[test]
fn one_trace_per_node() {
	let tree = sample();
	let (_, capture) = captured(|| walk(&tree).count());
	let traces = capture.walker_events(Level::TRACE);
	assert_eq!(traces.len(), 8);

	for fields in traces {
		assert!(fields.contains(&"depth"));
		assert_eq!(fields.contains(&"name"), cfg!(feature = "dangerous-logging"));
	}
}

/// Chain of nodes that counts how often its children are read.
#[derive(Clone, Copy)]
struct Counted<'a> {
	depth_left: usize,
	children_calls: &'a Cell<usize>,
}
impl<'a> TreeNode for Counted<'a> {
	type Children = iter::Take<iter::Once<Counted<'a>>>;

	fn name(&self) -> Cow<'_, str> {
		self.depth_left.to_string().into()
	}

	fn children(&self) -> Self::Children {
		self.children_calls.set(self.children_calls.get() + 1);
		let child = Counted {
			depth_left: self.depth_left.saturating_sub(1),
			..*self
		};
		iter::once(child).take(usize::from(self.depth_left > 0))
	}
}

#[test]
fn children_read_for_error_only_when_enabled() {
	let children_calls = Cell::new(0);
	let root = Counted { depth_left: 10, children_calls: &children_calls };

	let count = with_default(NoSubscriber::default(), || TreeWalker::with_depth_limit(root, 3).count());
	assert_eq!(count, 4);
	assert_eq!(children_calls.get(), 3);

	children_calls.set(0);
	let (count, capture) = captured(|| TreeWalker::with_depth_limit(root, 3).count());
	assert_eq!(count, 4);
	assert_eq!(children_calls.get(), 4);
	assert_eq!(capture.walker_events(Level::ERROR).len(), 1);
}
