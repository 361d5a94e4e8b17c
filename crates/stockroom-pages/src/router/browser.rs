//! Browser fragment backend (WASM only).
//!
//! Reads and writes `window.location.hash` and listens for the `hashchange`
//! event. Listeners are removed from the window when the backend is dropped.

use super::error::RouterError;
use super::fragment::{FragmentListener, FragmentSource};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type HashChangeClosure = Closure<dyn FnMut(web_sys::Event)>;

/// Fragment backend bound to the current browser window.
pub struct BrowserFragment {
	window: web_sys::Window,
	listeners: RefCell<Vec<HashChangeClosure>>,
}

impl BrowserFragment {
	/// Binds to the global `window`.
	pub fn new() -> Result<Self, RouterError> {
		let window = web_sys::window().ok_or(RouterError::WindowUnavailable)?;
		Ok(Self {
			window,
			listeners: RefCell::new(Vec::new()),
		})
	}
}

impl FragmentSource for BrowserFragment {
	fn fragment(&self) -> Result<String, RouterError> {
		self.window
			.location()
			.hash()
			.map_err(|e| RouterError::FragmentRead(format!("{:?}", e)))
	}

	fn set_fragment(&self, path: &str) -> Result<(), RouterError> {
		self.window
			.location()
			.set_hash(path)
			.map_err(|e| RouterError::FragmentWrite(format!("{:?}", e)))
	}

	fn listen(&self, listener: FragmentListener) -> Result<(), RouterError> {
		let location = self.window.location();
		let closure: HashChangeClosure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
			let raw = location.hash().unwrap_or_default();
			listener(&raw);
		}) as Box<dyn FnMut(web_sys::Event)>);

		self.window
			.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
			.map_err(|e| RouterError::ListenerRegistration(format!("{:?}", e)))?;

		self.listeners.borrow_mut().push(closure);
		Ok(())
	}
}

impl Drop for BrowserFragment {
	fn drop(&mut self) {
		for closure in self.listeners.borrow_mut().drain(..) {
			let _ = self
				.window
				.remove_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
		}
	}
}

impl std::fmt::Debug for BrowserFragment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BrowserFragment")
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}
