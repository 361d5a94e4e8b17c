//! Router configuration.
//!
//! A [`RouterConfig`] describes the route table, the default page, and the
//! notification policy. It can be loaded from TOML:
//!
//! ```toml
//! default_path = "/auth"
//! notify = "on_change"
//!
//! [[routes]]
//! path = "/auth"
//! key = "auth"
//! label = "登录与注册"
//!
//! [[routes]]
//! path = "/inventory"
//! key = "inventory"
//! label = "库存管理"
//! ```

use super::error::ConfigError;
use super::route::{DEFAULT_PATH, INVENTORY_ROUTES, Route, RouteTable};
use serde::{Deserialize, Serialize};

/// When the router notifies subscribers about a path it already holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
	/// Every update notifies, even when the path is unchanged.
	#[default]
	Always,
	/// Only updates that change the path notify.
	OnChange,
}

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
	/// Path used for unknown or empty fragments.
	#[serde(default = "default_path")]
	pub default_path: String,
	/// Notification policy for unchanged paths.
	#[serde(default)]
	pub notify: NotifyPolicy,
	/// Routes in menu order.
	pub routes: Vec<Route>,
}

fn default_path() -> String {
	DEFAULT_PATH.to_string()
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			default_path: default_path(),
			notify: NotifyPolicy::default(),
			routes: INVENTORY_ROUTES.to_vec(),
		}
	}
}

impl RouterConfig {
	/// Parses a configuration from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Writes the configuration as a TOML document.
	///
	/// The output parses back with [`from_toml_str`](Self::from_toml_str).
	pub fn to_toml_string(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string(self)?)
	}

	/// Sets the notification policy.
	pub fn with_notify(mut self, notify: NotifyPolicy) -> Self {
		self.notify = notify;
		self
	}

	/// Validates the configuration into a route table.
	pub fn to_table(&self) -> Result<RouteTable, ConfigError> {
		RouteTable::new(self.routes.clone(), &self.default_path)
	}
}
