//! Browser tests for the hash router
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/stockroom-pages

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use stockroom_pages::router::{
	BrowserFragment, FragmentSource, HashRouter, Navigation, RouteTable,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_location_hash(raw: &str) {
	web_sys::window()
		.unwrap()
		.location()
		.set_hash(raw)
		.unwrap();
}

/// Lets the browser deliver queued `hashchange` events.
async fn next_tick() {
	TimeoutFuture::new(10).await;
}

#[wasm_bindgen_test]
async fn test_initial_sync_reads_location() {
	set_location_hash("/inventory");
	next_tick().await;

	let router = HashRouter::new(RouteTable::inventory(), BrowserFragment::new().unwrap()).unwrap();

	assert_eq!(router.current_path(), "/inventory");
}

#[wasm_bindgen_test]
async fn test_navigate_updates_location_then_state() {
	set_location_hash("/auth");
	next_tick().await;

	let router = HashRouter::new(RouteTable::inventory(), BrowserFragment::new().unwrap()).unwrap();
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	let _subscription = router.subscribe(move |path| sink.borrow_mut().push(path.to_string()));

	assert_eq!(router.navigate("/bill"), Navigation::FragmentUpdated);
	assert_eq!(router.source().fragment().unwrap(), "#/bill");
	next_tick().await;

	assert_eq!(router.current_path(), "/bill");
	assert_eq!(router.navigate("/bill"), Navigation::Applied);
	assert_eq!(
		*seen.borrow(),
		vec!["/auth".to_string(), "/bill".to_string(), "/bill".to_string()]
	);
}

#[wasm_bindgen_test]
async fn test_unknown_location_falls_back_to_default() {
	set_location_hash("/staff");
	next_tick().await;

	let router = HashRouter::new(RouteTable::inventory(), BrowserFragment::new().unwrap()).unwrap();
	assert_eq!(router.current_path(), "/staff");

	set_location_hash("/unknown");
	next_tick().await;

	assert_eq!(router.current_path(), "/auth");
}

#[wasm_bindgen_test]
async fn test_dropped_router_stops_listening() {
	set_location_hash("/auth");
	next_tick().await;

	let router = HashRouter::new(RouteTable::inventory(), BrowserFragment::new().unwrap()).unwrap();
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	let _subscription = router.subscribe(move |path| sink.borrow_mut().push(path.to_string()));
	drop(router);

	set_location_hash("/role");
	next_tick().await;

	assert_eq!(*seen.borrow(), vec!["/auth".to_string()]);
}
