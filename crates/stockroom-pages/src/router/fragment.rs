//! Location fragment backends.
//!
//! The router never touches `window.location` directly. It reads and writes
//! the fragment through a [`FragmentSource`], which also delivers change
//! notifications. [`MemoryFragment`] is the in-process backend used on native
//! targets and in tests; the browser backend lives in `router::browser`.

use super::error::RouterError;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the raw fragment (including `#`) after it changes.
pub type FragmentListener = Box<dyn Fn(&str)>;

/// A readable, writable location fragment with change notifications.
pub trait FragmentSource {
	/// Returns the raw fragment, including the leading `#`, or an empty string.
	fn fragment(&self) -> Result<String, RouterError>;

	/// Sets the fragment to `path`.
	///
	/// Implementations notify listeners asynchronously, and only if the
	/// fragment actually changed.
	fn set_fragment(&self, path: &str) -> Result<(), RouterError>;

	/// Registers a change listener for the lifetime of the source.
	fn listen(&self, listener: FragmentListener) -> Result<(), RouterError>;
}

#[derive(Default)]
struct MemoryState {
	fragment: RefCell<String>,
	pending: Cell<usize>,
	listeners: RefCell<Vec<Rc<dyn Fn(&str)>>>,
}

/// In-memory fragment backend.
///
/// Mirrors browser semantics: a write that changes the fragment queues one
/// change event, a write of the current value queues none. Queued events are
/// delivered by [`dispatch`](Self::dispatch), which stands in for the event
/// loop; like a `hashchange` handler reading `location.hash`, each event
/// carries the fragment as it is when the event is delivered. Clones share
/// the same state.
#[derive(Clone, Default)]
pub struct MemoryFragment {
	state: Rc<MemoryState>,
}

impl MemoryFragment {
	/// Creates a backend with an empty fragment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a backend whose fragment starts at `raw`.
	pub fn with_fragment(raw: &str) -> Self {
		let source = Self::new();
		*source.state.fragment.borrow_mut() = with_hash(raw);
		source
	}

	/// Simulates the user editing the address bar.
	///
	/// `raw` may include the leading `#`. Returns `true` if a change event was
	/// queued.
	pub fn set_external(&self, raw: &str) -> bool {
		self.replace(with_hash(raw))
	}

	/// Delivers queued change events to every listener, oldest first.
	///
	/// Events queued while dispatching are delivered in the same call.
	/// Returns the number of events delivered.
	pub fn dispatch(&self) -> usize {
		let mut delivered = 0;
		while self.state.pending.get() > 0 {
			self.state.pending.set(self.state.pending.get() - 1);

			let raw = self.state.fragment.borrow().clone();
			let listeners: Vec<Rc<dyn Fn(&str)>> =
				self.state.listeners.borrow().iter().map(Rc::clone).collect();
			for listener in listeners {
				listener(&raw);
			}
			delivered += 1;
		}
		delivered
	}

	/// Returns the number of queued change events.
	pub fn pending(&self) -> usize {
		self.state.pending.get()
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.state.listeners.borrow().len()
	}

	fn replace(&self, next: String) -> bool {
		let mut fragment = self.state.fragment.borrow_mut();
		if *fragment == next {
			return false;
		}
		*fragment = next;
		self.state.pending.set(self.state.pending.get() + 1);
		true
	}
}

impl FragmentSource for MemoryFragment {
	fn fragment(&self) -> Result<String, RouterError> {
		Ok(self.state.fragment.borrow().clone())
	}

	fn set_fragment(&self, path: &str) -> Result<(), RouterError> {
		self.replace(with_hash(path));
		Ok(())
	}

	fn listen(&self, listener: FragmentListener) -> Result<(), RouterError> {
		self.state.listeners.borrow_mut().push(Rc::from(listener));
		Ok(())
	}
}

impl fmt::Debug for MemoryFragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryFragment")
			.field("fragment", &self.state.fragment.borrow())
			.field("pending", &self.state.pending.get())
			.field("listeners", &self.state.listeners.borrow().len())
			.finish()
	}
}

// `location.hash = "/x"` reads back as "#/x"; an empty hash reads back as "".
fn with_hash(raw: &str) -> String {
	let path = raw.strip_prefix('#').unwrap_or(raw);
	if path.is_empty() {
		String::new()
	} else {
		format!("#{path}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn recording(source: &MemoryFragment) -> Rc<RefCell<Vec<String>>> {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		source
			.listen(Box::new(move |raw| sink.borrow_mut().push(raw.to_string())))
			.unwrap();
		seen
	}

	#[rstest]
	#[case("", "")]
	#[case("#", "")]
	#[case("/bill", "#/bill")]
	#[case("#/bill", "#/bill")]
	fn test_with_fragment(#[case] raw: &str, #[case] expected: &str) {
		let source = MemoryFragment::with_fragment(raw);
		assert_eq!(source.fragment().unwrap(), expected);
		assert_eq!(source.pending(), 0);
	}

	#[rstest]
	fn test_set_fragment_queues_event_until_dispatch() {
		let source = MemoryFragment::new();
		let seen = recording(&source);

		source.set_fragment("/bill").unwrap();

		assert_eq!(source.fragment().unwrap(), "#/bill");
		assert_eq!(source.pending(), 1);
		assert!(seen.borrow().is_empty());

		assert_eq!(source.dispatch(), 1);
		assert_eq!(*seen.borrow(), vec!["#/bill".to_string()]);
		assert_eq!(source.pending(), 0);
	}

	#[rstest]
	fn test_set_same_fragment_queues_nothing() {
		let source = MemoryFragment::with_fragment("#/bill");
		let _seen = recording(&source);

		source.set_fragment("/bill").unwrap();

		assert_eq!(source.pending(), 0);
		assert_eq!(source.dispatch(), 0);
	}

	#[rstest]
	fn test_set_external() {
		let source = MemoryFragment::with_fragment("#/bill");
		let seen = recording(&source);

		assert!(source.set_external("#/unknown"));
		assert!(!source.set_external("/unknown"));
		assert!(source.set_external(""));
		assert_eq!(source.dispatch(), 2);

		// Both events report the fragment as it is at delivery time.
		assert_eq!(*seen.borrow(), vec![String::new(), String::new()]);
	}

	#[rstest]
	fn test_event_reports_fragment_at_delivery() {
		let source = MemoryFragment::new();
		let seen = recording(&source);

		source.set_fragment("/bill").unwrap();
		source.set_external("#/role");
		source.dispatch();

		assert_eq!(
			*seen.borrow(),
			vec!["#/role".to_string(), "#/role".to_string()]
		);
	}

	#[rstest]
	fn test_listener_may_register_listener_during_dispatch() {
		let source = MemoryFragment::new();
		let registrar = source.clone();
		source
			.listen(Box::new(move |_| {
				registrar.listen(Box::new(|_| {})).unwrap();
			}))
			.unwrap();

		source.set_fragment("/staff").unwrap();

		assert_eq!(source.dispatch(), 1);
		assert_eq!(source.listener_count(), 2);
	}

	#[rstest]
	fn test_events_queued_during_dispatch_are_delivered() {
		let source = MemoryFragment::new();
		let writer = source.clone();
		source
			.listen(Box::new(move |raw| {
				if raw == "#/inbound" {
					writer.set_fragment("/outbound").unwrap();
				}
			}))
			.unwrap();
		let seen = recording(&source);

		source.set_fragment("/inbound").unwrap();

		assert_eq!(source.dispatch(), 2);
		assert_eq!(
			*seen.borrow(),
			vec!["#/inbound".to_string(), "#/outbound".to_string()]
		);
	}

	#[rstest]
	fn test_clones_share_state() {
		let source = MemoryFragment::new();
		let handle = source.clone();
		let _seen = recording(&source);

		handle.set_external("#/role");

		assert_eq!(source.fragment().unwrap(), "#/role");
		assert_eq!(source.pending(), 1);
		assert_eq!(handle.listener_count(), 1);
	}
}
