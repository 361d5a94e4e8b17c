//! Application router instance.
//!
//! Components of the console share one router per thread (the browser main
//! thread in practice). [`init_router`] builds it over the inventory route
//! table and the platform fragment backend; the free functions here forward
//! to it. Code that needs an isolated router, tests in particular, should
//! construct a [`HashRouter`] directly instead.

use super::core::{HashRouter, Navigation};
use super::error::RouterError;
use super::route::RouteTable;
use crate::{error_log, info_log};
use crate::reactive::Subscription;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use super::browser::BrowserFragment;
#[cfg(not(target_arch = "wasm32"))]
use super::fragment::MemoryFragment;

/// Router type installed by [`init_router`] on this platform.
#[cfg(target_arch = "wasm32")]
pub type AppRouter = HashRouter<BrowserFragment>;

/// Router type installed by [`init_router`] on this platform.
#[cfg(not(target_arch = "wasm32"))]
pub type AppRouter = HashRouter<MemoryFragment>;

thread_local! {
	static ROUTER: RefCell<Option<Rc<AppRouter>>> = const { RefCell::new(None) };
}

/// Initializes the application router over the inventory route table.
///
/// Replaces any previously installed router.
pub fn init_router() -> Result<(), RouterError> {
	let router = build_app_router()
		.inspect_err(|err| error_log!("router initialization failed: {}", err))?;
	info_log!("router initialized at {}", router.current_path());
	install_router(router);
	Ok(())
}

fn build_app_router() -> Result<AppRouter, RouterError> {
	#[cfg(target_arch = "wasm32")]
	let source = BrowserFragment::new()?;
	#[cfg(not(target_arch = "wasm32"))]
	let source = MemoryFragment::new();

	HashRouter::new(RouteTable::inventory(), source)
}

/// Installs `router` as the application router, replacing any previous one.
pub fn install_router(router: AppRouter) {
	ROUTER.with(|r| *r.borrow_mut() = Some(Rc::new(router)));
}

/// Removes the application router.
pub fn reset_router() {
	// Take the router out first so its drop runs without the cell borrowed.
	let previous = ROUTER.with(|r| r.borrow_mut().take());
	drop(previous);
}

/// Returns `true` if an application router is installed.
pub fn is_initialized() -> bool {
	ROUTER.with(|r| r.borrow().is_some())
}

/// Runs `f` with the application router.
pub fn with_router<F, R>(f: F) -> Result<R, RouterError>
where
	F: FnOnce(&AppRouter) -> R,
{
	let router = ROUTER
		.with(|r| r.borrow().clone())
		.ok_or(RouterError::NotInitialized)?;
	Ok(f(&router))
}

/// Navigates the application router to `path`.
pub fn navigate(path: &str) -> Result<Navigation, RouterError> {
	with_router(|router| router.navigate(path))
}

/// Subscribes to the application router's current path.
pub fn subscribe<F>(callback: F) -> Result<Subscription, RouterError>
where
	F: Fn(&str) + 'static,
{
	with_router(|router| router.subscribe(callback))
}

/// Returns the application router's current path.
pub fn current_path() -> Result<String, RouterError> {
	with_router(|router| router.current_path())
}
