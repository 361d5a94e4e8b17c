//! Store - Observable Value with an Explicit Subscriber Registry
//!
//! `Store<T>` holds a single value and a list of subscriber callbacks. Unlike a
//! tracked signal, consumers observe it by subscribing explicitly:
//!
//! - **Notify-once-on-subscribe**: `subscribe` invokes the callback immediately
//!   with the current value.
//! - **Notify-on-set**: every `set` / `update` notifies all subscribers in
//!   registration order. `set_if_changed` only notifies for a different value.
//! - **Reentrancy**: callbacks may subscribe, unsubscribe, or set the store.
//!   Each set issued while subscribers are being notified is queued and
//!   delivered after the current pass, so every subscriber sees every value
//!   in the same order. A panicking subscriber does not wedge the store.
//!
//! ## Example
//!
//! ```ignore
//! use stockroom_pages::reactive::Store;
//!
//! let page = Store::new("/auth".to_string());
//! let subscription = page.subscribe(|path| println!("now at {path}"));
//!
//! page.set("/inventory".to_string());
//! subscription.unsubscribe();
//! ```

use core::cell::{Cell, RefCell};
use core::fmt;

use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Identifier handed out to each subscriber of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<(SubscriberId, Subscriber<T>)>>,
	next_id: Cell<u64>,
	notifying: Cell<bool>,
	pending: RefCell<VecDeque<T>>,
}

// Ends a notification run, even when a subscriber unwinds.
struct NotifyGuard<'a, T> {
	inner: &'a StoreInner<T>,
}

impl<T> Drop for NotifyGuard<'_, T> {
	fn drop(&mut self) {
		self.inner.pending.borrow_mut().clear();
		self.inner.notifying.set(false);
	}
}

/// An observable value shared between its owner and its subscribers
///
/// Cloning a `Store` yields another handle to the same value and registry.
pub struct Store<T: 'static> {
	inner: Rc<StoreInner<T>>,
}

impl<T: 'static> Clone for Store<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Clone + 'static> Store<T> {
	/// Creates a store holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(StoreInner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
				next_id: Cell::new(0),
				notifying: Cell::new(false),
				pending: RefCell::new(VecDeque::new()),
			}),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T {
		self.inner.value.borrow().clone()
	}

	/// Runs `f` against the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.value.borrow())
	}

	/// Replaces the value and notifies every subscriber.
	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Replaces the value only if it differs from the current one.
	///
	/// Returns `true` when the value changed and subscribers were notified.
	pub fn set_if_changed(&self, value: T) -> bool
	where
		T: PartialEq,
	{
		if *self.inner.value.borrow() == value {
			return false;
		}
		self.set(value);
		true
	}

	/// Mutates the value in place and notifies every subscriber.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut self.inner.value.borrow_mut());
		self.notify();
	}

	/// Registers `callback` and invokes it once with the current value.
	///
	/// The callback is then invoked after every change until the returned
	/// [`Subscription`] is unsubscribed. Dropping the subscription handle
	/// does not unsubscribe.
	pub fn subscribe<F>(&self, callback: F) -> Subscription
	where
		F: Fn(&T) + 'static,
	{
		let id = SubscriberId(self.inner.next_id.get());
		self.inner.next_id.set(id.0 + 1);

		let callback: Subscriber<T> = Rc::new(callback);
		self.inner
			.subscribers
			.borrow_mut()
			.push((id, Rc::clone(&callback)));

		let value = self.get();
		callback(&value);

		let weak: Weak<StoreInner<T>> = Rc::downgrade(&self.inner);
		Subscription {
			id,
			remove: Some(Box::new(move |id| {
				if let Some(inner) = weak.upgrade() {
					inner
						.subscribers
						.borrow_mut()
						.retain(|(existing, _)| *existing != id);
				}
			})),
		}
	}

	/// Returns the number of registered subscribers.
	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	fn notify(&self) {
		if self.inner.notifying.get() {
			let value = self.get();
			self.inner.pending.borrow_mut().push_back(value);
			return;
		}

		self.inner.notifying.set(true);
		let _guard = NotifyGuard { inner: &self.inner };

		let mut value = self.get();
		loop {
			let subscribers: Vec<Subscriber<T>> = self
				.inner
				.subscribers
				.borrow()
				.iter()
				.map(|(_, callback)| Rc::clone(callback))
				.collect();

			for callback in subscribers {
				callback(&value);
			}

			let next = self.inner.pending.borrow_mut().pop_front();
			match next {
				Some(queued) => value = queued,
				None => break,
			}
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Store<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("value", &self.inner.value.borrow())
			.field("subscribers", &self.inner.subscribers.borrow().len())
			.finish()
	}
}

/// Handle returned by [`Store::subscribe`]
pub struct Subscription {
	id: SubscriberId,
	remove: Option<Box<dyn FnOnce(SubscriberId)>>,
}

impl Subscription {
	/// Returns the identifier of the subscribed callback.
	pub fn id(&self) -> SubscriberId {
		self.id
	}

	/// Removes the callback from its store.
	///
	/// Does nothing if the store has already been dropped.
	pub fn unsubscribe(mut self) {
		if let Some(remove) = self.remove.take() {
			remove(self.id);
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription").field("id", &self.id).finish()
	}
}
