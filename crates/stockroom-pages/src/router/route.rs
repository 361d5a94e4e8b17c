//! Route definitions and the validated route table.
//!
//! The inventory console knows a fixed set of pages. Each page is a [`Route`]
//! and the ordered list of them is a [`RouteTable`]; the order is the order
//! of the navigation menu.

use super::error::ConfigError;
use super::menu::MenuItem;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

/// Path the router falls back to for unknown or empty fragments.
pub const DEFAULT_PATH: &str = "/auth";

/// A single navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
	path: Cow<'static, str>,
	key: Cow<'static, str>,
	label: Cow<'static, str>,
}

impl Route {
	/// Creates a route from static strings.
	pub const fn from_static(path: &'static str, key: &'static str, label: &'static str) -> Self {
		Self {
			path: Cow::Borrowed(path),
			key: Cow::Borrowed(key),
			label: Cow::Borrowed(label),
		}
	}

	/// Creates a route from owned strings.
	pub fn new(path: impl Into<String>, key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			path: Cow::Owned(path.into()),
			key: Cow::Owned(key.into()),
			label: Cow::Owned(label.into()),
		}
	}

	/// Returns the path, e.g. `/inventory`.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the short identifier.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the display label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the fragment link for this route, e.g. `#/inventory`.
	pub fn href(&self) -> String {
		format!("#{}", self.path)
	}
}

/// Pages of the inventory console, in menu order.
pub static INVENTORY_ROUTES: &[Route] = &[
	Route::from_static("/auth", "auth", "登录与注册"),
	Route::from_static("/inventory", "inventory", "库存管理"),
	Route::from_static("/warehouse", "warehouse", "仓库管理"),
	Route::from_static("/staff", "staff", "库员管理"),
	Route::from_static("/supplier", "supplier", "供应商管理"),
	Route::from_static("/customer", "customer", "客户管理"),
	Route::from_static("/inbound", "inbound", "入库管理"),
	Route::from_static("/outbound", "outbound", "出库管理"),
	Route::from_static("/alerts", "alerts", "库存预警"),
	Route::from_static("/bill", "bill", "账单管理"),
	Route::from_static("/employee", "employee", "员工管理"),
	Route::from_static("/role", "role", "角色管理"),
	Route::from_static("/permission", "permission", "权限管理"),
];

/// An ordered, validated list of routes with a default path.
///
/// Invariants: at least one route, every path starts with `/`, paths and keys
/// are unique, and the default path is one of the routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
	routes: Cow<'static, [Route]>,
	default_index: usize,
}

impl Default for RouteTable {
	fn default() -> Self {
		Self::inventory()
	}
}

impl RouteTable {
	/// Builds a table from `routes`, validating it.
	pub fn new(routes: Vec<Route>, default_path: &str) -> Result<Self, ConfigError> {
		let default_index = validate(&routes, default_path)?;
		Ok(Self {
			routes: Cow::Owned(routes),
			default_index,
		})
	}

	/// Returns the inventory console table, defaulting to [`DEFAULT_PATH`].
	pub fn inventory() -> Self {
		let default_index = INVENTORY_ROUTES
			.iter()
			.position(|route| route.path() == DEFAULT_PATH)
			.unwrap_or(0);
		Self {
			routes: Cow::Borrowed(INVENTORY_ROUTES),
			default_index,
		}
	}

	/// Returns the routes in menu order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Iterates over the routes in menu order.
	pub fn iter(&self) -> std::slice::Iter<'_, Route> {
		self.routes.iter()
	}

	/// Returns the number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Always `false`; a validated table has at least one route.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Returns the route used for unknown fragments.
	pub fn default_route(&self) -> &Route {
		&self.routes[self.default_index]
	}

	/// Returns the path used for unknown fragments.
	pub fn default_path(&self) -> &str {
		self.default_route().path()
	}

	/// Looks up a route by path.
	pub fn get(&self, path: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.path() == path)
	}

	/// Looks up a route by key.
	pub fn find_by_key(&self, key: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.key() == key)
	}

	/// Returns `true` if `path` is a registered route path.
	pub fn contains(&self, path: &str) -> bool {
		self.get(path).is_some()
	}

	/// Resolves a raw location fragment to a registered route.
	///
	/// One leading `#` is stripped. Anything that is not a registered path,
	/// including the empty string, resolves to the default route.
	pub fn resolve_fragment(&self, raw: &str) -> &Route {
		let path = raw.strip_prefix('#').unwrap_or(raw);
		self.get(path).unwrap_or_else(|| self.default_route())
	}

	/// Builds the navigation menu, marking the entry for `current` active.
	pub fn menu(&self, current: &str) -> Vec<MenuItem<'_>> {
		self.routes
			.iter()
			.map(|route| MenuItem::new(route, route.path() == current))
			.collect()
	}
}

impl<'a> IntoIterator for &'a RouteTable {
	type Item = &'a Route;
	type IntoIter = std::slice::Iter<'a, Route>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

fn validate(routes: &[Route], default_path: &str) -> Result<usize, ConfigError> {
	if routes.is_empty() {
		return Err(ConfigError::EmptyRouteTable);
	}

	let mut paths = HashSet::new();
	let mut keys = HashSet::new();
	for route in routes {
		if !route.path().starts_with('/') {
			return Err(ConfigError::InvalidPath(route.path().to_string()));
		}
		if !paths.insert(route.path()) {
			return Err(ConfigError::DuplicatePath(route.path().to_string()));
		}
		if !keys.insert(route.key()) {
			return Err(ConfigError::DuplicateKey(route.key().to_string()));
		}
	}

	routes
		.iter()
		.position(|route| route.path() == default_path)
		.ok_or_else(|| ConfigError::UnknownDefault(default_path.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn small_table() -> RouteTable {
		RouteTable::new(
			vec![
				Route::new("/home", "home", "Home"),
				Route::new("/stock", "stock", "Stock"),
			],
			"/home",
		)
		.unwrap()
	}

	#[rstest]
	fn test_route_accessors() {
		let route = Route::from_static("/bill", "bill", "账单管理");
		assert_eq!(route.path(), "/bill");
		assert_eq!(route.key(), "bill");
		assert_eq!(route.label(), "账单管理");
		assert_eq!(route.href(), "#/bill");
	}

	#[rstest]
	fn test_owned_and_static_routes_compare_equal() {
		assert_eq!(
			Route::new("/bill", "bill", "账单管理"),
			Route::from_static("/bill", "bill", "账单管理")
		);
	}

	#[rstest]
	fn test_inventory_table_order() {
		let table = RouteTable::inventory();
		let keys: Vec<&str> = table.iter().map(Route::key).collect();
		assert_eq!(
			keys,
			vec![
				"auth",
				"inventory",
				"warehouse",
				"staff",
				"supplier",
				"customer",
				"inbound",
				"outbound",
				"alerts",
				"bill",
				"employee",
				"role",
				"permission",
			]
		);
		assert_eq!(table.len(), 13);
		assert!(!table.is_empty());
	}

	#[rstest]
	fn test_inventory_default_path() {
		let table = RouteTable::inventory();
		assert_eq!(table.default_path(), DEFAULT_PATH);
		assert_eq!(table.default_route().key(), "auth");
	}

	#[rstest]
	fn test_inventory_paths_are_unique_and_valid() {
		let table = RouteTable::inventory();
		let rebuilt = RouteTable::new(table.routes().to_vec(), DEFAULT_PATH);
		assert!(rebuilt.is_ok());
	}

	#[rstest]
	fn test_lookup() {
		let table = RouteTable::inventory();
		assert_eq!(table.get("/alerts").map(Route::label), Some("库存预警"));
		assert_eq!(table.find_by_key("role").map(Route::path), Some("/role"));
		assert!(table.contains("/staff"));
		assert!(!table.contains("/staff/"));
		assert!(!table.contains("staff"));
		assert!(table.get("/unknown").is_none());
	}

	#[rstest]
	#[case("#/inventory", "/inventory")]
	#[case("/inventory", "/inventory")]
	#[case("#/permission", "/permission")]
	#[case("", "/auth")]
	#[case("#", "/auth")]
	#[case("#/unknown", "/auth")]
	#[case("##/inventory", "/auth")]
	#[case("#/Inventory", "/auth")]
	#[case("#/inventory?tab=1", "/auth")]
	fn test_resolve_fragment(#[case] raw: &str, #[case] expected: &str) {
		let table = RouteTable::inventory();
		assert_eq!(table.resolve_fragment(raw).path(), expected);
	}

	#[rstest]
	fn test_resolve_fragment_custom_default() {
		let table = small_table();
		assert_eq!(table.resolve_fragment("#/nowhere").path(), "/home");
		assert_eq!(table.resolve_fragment("#/stock").path(), "/stock");
	}

	#[rstest]
	fn test_new_rejects_empty_table() {
		let result = RouteTable::new(Vec::new(), "/home");
		assert!(matches!(result, Err(ConfigError::EmptyRouteTable)));
	}

	#[rstest]
	fn test_new_rejects_path_without_slash() {
		let result = RouteTable::new(vec![Route::new("home", "home", "Home")], "home");
		assert!(matches!(result, Err(ConfigError::InvalidPath(p)) if p == "home"));
	}

	#[rstest]
	fn test_new_rejects_duplicate_path() {
		let result = RouteTable::new(
			vec![
				Route::new("/home", "home", "Home"),
				Route::new("/home", "start", "Start"),
			],
			"/home",
		);
		assert!(matches!(result, Err(ConfigError::DuplicatePath(p)) if p == "/home"));
	}

	#[rstest]
	fn test_new_rejects_duplicate_key() {
		let result = RouteTable::new(
			vec![
				Route::new("/home", "home", "Home"),
				Route::new("/start", "home", "Start"),
			],
			"/home",
		);
		assert!(matches!(result, Err(ConfigError::DuplicateKey(k)) if k == "home"));
	}

	#[rstest]
	fn test_new_rejects_unknown_default() {
		let result = RouteTable::new(vec![Route::new("/home", "home", "Home")], "/auth");
		assert!(matches!(result, Err(ConfigError::UnknownDefault(p)) if p == "/auth"));
	}

	#[rstest]
	fn test_default_is_inventory() {
		assert_eq!(RouteTable::default(), RouteTable::inventory());
	}
}
