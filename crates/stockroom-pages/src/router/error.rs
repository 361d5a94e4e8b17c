//! Error types for hash routing.
//!
//! Navigation itself never fails: unknown targets are ignored and unknown
//! fragments fall back to the default page. These errors only surface when a
//! router is built from configuration or when the fragment backend misbehaves.

/// Error type for route table configuration.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The configuration could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The configuration could not be written as TOML.
	#[error("TOML serialization error: {0}")]
	TomlSerialize(#[from] toml::ser::Error),

	/// The route table has no routes.
	#[error("Route table is empty")]
	EmptyRouteTable,

	/// A route path does not start with `/`.
	#[error("Route path must start with '/': {0:?}")]
	InvalidPath(String),

	/// Two routes share a path.
	#[error("Duplicate route path: {0}")]
	DuplicatePath(String),

	/// Two routes share a key.
	#[error("Duplicate route key: {0}")]
	DuplicateKey(String),

	/// The default path is not one of the routes.
	#[error("Default path is not a registered route: {0}")]
	UnknownDefault(String),
}

/// Error type for router operations.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
	/// No browser window is available.
	#[error("Browser window is not available")]
	WindowUnavailable,

	/// Reading the location fragment failed.
	#[error("Failed to read location fragment: {0}")]
	FragmentRead(String),

	/// Writing the location fragment failed.
	#[error("Failed to write location fragment: {0}")]
	FragmentWrite(String),

	/// Registering the fragment change listener failed.
	#[error("Failed to register hashchange listener: {0}")]
	ListenerRegistration(String),

	/// The application router was used before `init_router`.
	#[error("Router not initialized. Call init_router() first.")]
	NotInitialized,

	/// The route configuration is invalid.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_config_error_display() {
		assert_eq!(
			ConfigError::DuplicatePath("/bill".to_string()).to_string(),
			"Duplicate route path: /bill"
		);
		assert_eq!(
			ConfigError::InvalidPath("bill".to_string()).to_string(),
			"Route path must start with '/': \"bill\""
		);
		assert_eq!(
			ConfigError::UnknownDefault("/home".to_string()).to_string(),
			"Default path is not a registered route: /home"
		);
	}

	#[rstest]
	fn test_router_error_display() {
		assert_eq!(
			RouterError::FragmentWrite("denied".to_string()).to_string(),
			"Failed to write location fragment: denied"
		);
		assert_eq!(
			RouterError::NotInitialized.to_string(),
			"Router not initialized. Call init_router() first."
		);
	}

	#[rstest]
	fn test_config_error_is_transparent_in_router_error() {
		let err = RouterError::from(ConfigError::EmptyRouteTable);
		assert_eq!(err.to_string(), "Route table is empty");
		assert!(matches!(
			err,
			RouterError::Config(ConfigError::EmptyRouteTable)
		));
	}
}
