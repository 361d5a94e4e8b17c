//! # Stockroom
//!
//! Browser console for the Stockroom inventory-management system.
//!
//! This facade crate re-exports the frontend crates under one name so that
//! applications depend on `stockroom-web` only.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - WASM frontend: hash router and observable stores
//! - `debug-routing` - console debug logging of route resolution (debug WASM builds)
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use stockroom::prelude::*;
//!
//! let source = MemoryFragment::new();
//! let router = HashRouter::new(RouteTable::inventory(), source.clone())?;
//!
//! let _page = router.subscribe(|path| println!("showing {path}"));
//! router.navigate("/inventory");
//! source.dispatch();
//! ```

#[cfg(feature = "pages")]
pub use stockroom_pages as pages;

#[cfg(feature = "pages")]
pub use stockroom_pages::{
	HashRouter, Navigation, NotifyPolicy, Route, RouteTable, RouterConfig, RouterError, Store,
	Subscription,
};

/// Commonly used types.
#[cfg(feature = "pages")]
pub mod prelude {
	#[cfg(target_arch = "wasm32")]
	pub use stockroom_pages::router::BrowserFragment;
	pub use stockroom_pages::router::{
		DEFAULT_PATH, FragmentSource, HashRouter, MemoryFragment, MenuItem, Navigation,
		NotifyPolicy, Route, RouteTable, RouterConfig, RouterError,
	};
	pub use stockroom_pages::{Store, Subscription};
}
