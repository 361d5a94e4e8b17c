//! Navigation menu entries derived from the route table.

use super::route::Route;

/// One entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem<'a> {
	/// The route this entry links to.
	pub route: &'a Route,
	/// Whether the route is the current page.
	pub active: bool,
}

impl<'a> MenuItem<'a> {
	/// Creates a menu entry.
	pub fn new(route: &'a Route, active: bool) -> Self {
		Self { route, active }
	}

	/// Returns the `href` attribute for the entry's link, e.g. `#/bill`.
	pub fn href(&self) -> String {
		self.route.href()
	}

	/// Returns the entry's display label.
	pub fn label(&self) -> &'a str {
		self.route.label()
	}

	/// Returns the CSS class for the entry's link.
	pub fn class(&self) -> &'static str {
		if self.active { "nav-link active" } else { "nav-link" }
	}
}
