//! Core HashRouter Implementation.
//!
//! [`HashRouter`] owns the current page of the console. The page is always one
//! of the routes in its [`RouteTable`], and it is kept in step with the
//! location fragment in both directions:
//!
//! - a change of the fragment (back/forward, a typed URL, a link) is resolved
//!   against the table and published to subscribers;
//! - [`HashRouter::navigate`] writes the fragment and lets the resulting
//!   change event update the page. When the fragment already points at the
//!   target no event will fire, so the page is updated directly.

use super::config::{NotifyPolicy, RouterConfig};
use super::error::RouterError;
use super::fragment::{FragmentSource, MemoryFragment};
use super::menu::MenuItem;
use super::route::{Route, RouteTable};
use crate::reactive::{Store, Subscription};
use crate::{debug_log, warn_log};
use std::rc::Rc;

/// Outcome of [`HashRouter::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
	/// The path is not a registered route; nothing happened.
	Rejected,
	/// The fragment was rewritten; the page follows once the change event
	/// is delivered.
	FragmentUpdated,
	/// The page was set directly and subscribers were notified.
	Applied,
}

/// Hash-based router over a fixed route table.
pub struct HashRouter<S: FragmentSource = MemoryFragment> {
	table: Rc<RouteTable>,
	current: Store<String>,
	policy: NotifyPolicy,
	source: S,
}

impl<S: FragmentSource> std::fmt::Debug for HashRouter<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HashRouter")
			.field("routes_count", &self.table.len())
			.field("current_path", &self.current_path())
			.field("policy", &self.policy)
			.finish()
	}
}

impl<S: FragmentSource> HashRouter<S> {
	/// Creates a router that notifies on every update.
	pub fn new(table: RouteTable, source: S) -> Result<Self, RouterError> {
		Self::with_policy(table, source, NotifyPolicy::default())
	}

	/// Creates a router from configuration.
	pub fn from_config(config: &RouterConfig, source: S) -> Result<Self, RouterError> {
		let table = config.to_table()?;
		Self::with_policy(table, source, config.notify)
	}

	/// Creates a router with an explicit notification policy.
	///
	/// Registers the fragment listener with `source` and synchronizes the
	/// current page with the fragment.
	pub fn with_policy(
		table: RouteTable,
		source: S,
		policy: NotifyPolicy,
	) -> Result<Self, RouterError> {
		let table = Rc::new(table);
		let current = Store::new(table.default_path().to_string());

		let listener = {
			let table = Rc::clone(&table);
			let current = current.clone();
			move |raw: &str| {
				let route = table.resolve_fragment(raw);
				debug_log!("fragment {:?} resolved to {}", raw, route.path());
				apply(&current, policy, route.path());
			}
		};
		source.listen(Box::new(listener))?;

		let router = Self {
			table,
			current,
			policy,
			source,
		};
		router.sync_from_fragment();
		Ok(router)
	}

	/// Registers `callback` for the current path.
	///
	/// The callback runs once immediately with the current path, then after
	/// every update until the subscription is unsubscribed.
	pub fn subscribe<F>(&self, callback: F) -> Subscription
	where
		F: Fn(&str) + 'static,
	{
		self.current.subscribe(move |path: &String| callback(path))
	}

	/// Navigates to `path`.
	///
	/// Unknown paths are ignored. If the fragment does not already point at
	/// `path` it is rewritten and the page follows on the change event;
	/// otherwise the page is set directly.
	pub fn navigate(&self, path: &str) -> Navigation {
		let Some(route) = self.table.get(path) else {
			debug_log!("ignoring navigation to unknown path {:?}", path);
			return Navigation::Rejected;
		};

		let fragment = self.source.fragment().unwrap_or_else(|err| {
			warn_log!("{}", err);
			String::new()
		});

		if fragment != route.href() {
			match self.source.set_fragment(route.path()) {
				Ok(()) => return Navigation::FragmentUpdated,
				Err(err) => warn_log!("{}; updating {} directly", err, route.path()),
			}
		}

		apply(&self.current, self.policy, route.path());
		Navigation::Applied
	}

	/// Re-reads the fragment and updates the current page from it.
	///
	/// Read failures resolve to the default page.
	pub fn sync_from_fragment(&self) {
		let raw = self.source.fragment().unwrap_or_else(|err| {
			warn_log!("{}", err);
			String::new()
		});
		let route = self.table.resolve_fragment(&raw);
		apply(&self.current, self.policy, route.path());
	}

	/// Returns the current path.
	pub fn current_path(&self) -> String {
		self.current.get()
	}

	/// Returns the route for the current path.
	pub fn current_route(&self) -> &Route {
		self.current
			.with(|path| self.table.get(path))
			.unwrap_or_else(|| self.table.default_route())
	}

	/// Returns `true` if `path` is the current path.
	pub fn is_active(&self, path: &str) -> bool {
		self.current.with(|current| current == path)
	}

	/// Returns the route table.
	pub fn routes(&self) -> &RouteTable {
		&self.table
	}

	/// Builds the navigation menu for the current path.
	pub fn menu(&self) -> Vec<MenuItem<'_>> {
		self.current.with(|path| self.table.menu(path))
	}

	/// Returns the notification policy.
	pub fn policy(&self) -> NotifyPolicy {
		self.policy
	}

	/// Returns the fragment backend.
	pub fn source(&self) -> &S {
		&self.source
	}
}

fn apply(current: &Store<String>, policy: NotifyPolicy, path: &str) {
	match policy {
		NotifyPolicy::Always => current.set(path.to_string()),
		NotifyPolicy::OnChange => {
			current.set_if_changed(path.to_string());
		}
	}
}
