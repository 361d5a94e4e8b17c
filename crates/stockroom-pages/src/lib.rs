//! Stockroom Pages - WASM Frontend for the Stockroom Inventory Console
//!
//! Client-side building blocks of the inventory console's single-page UI.
//!
//! ## Architecture
//!
//! - [`reactive`]: observable stores with explicit subscriptions
//! - [`router`]: hash-based routing over the console's fixed page list
//! - [`logging`]: console / `tracing` logging macros
//!
//! ## Example
//!
//! ```ignore
//! use stockroom_pages::router::{self, global};
//!
//! router::init_router()?;
//! let _page = global::subscribe(|path| render_page(path))?;
//! global::navigate("/inventory")?;
//! ```
//!
//! On native targets the router runs over an in-memory fragment, which is how
//! the test suite exercises it.

#![warn(missing_docs)]

pub mod logging;
pub mod reactive;
pub mod router;

pub use reactive::{Store, Subscription};
pub use router::{
	HashRouter, Navigation, NotifyPolicy, Route, RouteTable, RouterConfig, RouterError,
};

// Logging macro backends, referenced through `$crate` by the exported macros.
#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub use tracing as __tracing;
#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub use web_sys as __web_sys;
