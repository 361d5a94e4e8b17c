//! Client-side hash routing.
//!
//! The console keeps its current page in the location fragment (`#/inventory`)
//! so that links, reloads, and back/forward navigation work without a server
//! round-trip. [`HashRouter`] owns the current page, restricts it to the
//! routes of a [`RouteTable`], and keeps it in step with the fragment.
//!
//! ## Example
//!
//! ```ignore
//! use stockroom_pages::router::{HashRouter, MemoryFragment, RouteTable};
//!
//! let source = MemoryFragment::new();
//! let router = HashRouter::new(RouteTable::inventory(), source.clone())?;
//!
//! let _subscription = router.subscribe(|path| println!("showing {path}"));
//! router.navigate("/inventory");
//! source.dispatch(); // deliver the queued hashchange
//! assert_eq!(router.current_path(), "/inventory");
//! ```

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod config;
pub mod core;
pub mod error;
pub mod fragment;
pub mod global;
pub mod menu;
pub mod route;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserFragment;
pub use config::{NotifyPolicy, RouterConfig};
pub use self::core::{HashRouter, Navigation};
pub use error::{ConfigError, RouterError};
pub use fragment::{FragmentListener, FragmentSource, MemoryFragment};
pub use global::{AppRouter, init_router, install_router, is_initialized, reset_router, with_router};
pub use menu::MenuItem;
pub use route::{DEFAULT_PATH, INVENTORY_ROUTES, Route, RouteTable};
