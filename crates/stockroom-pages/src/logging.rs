//! Logging abstraction layer for stockroom-pages
//!
//! This module provides logging macros that work across WASM and native targets.
//! On WASM the output goes to the browser console and is compiled out of release
//! builds. On native targets the macros forward to `tracing`, so the usual
//! subscriber and level filtering apply.
//!
//! ## Macro Overview
//!
//! | Macro | WASM | Non-WASM |
//! |-------|------|----------|
//! | `debug_log!` | `console.debug` (debug builds + `debug-routing`) | `tracing::debug!` |
//! | `info_log!` | `console.info` (debug builds) | `tracing::info!` |
//! | `warn_log!` | `console.warn` (debug builds) | `tracing::warn!` |
//! | `error_log!` | `console.error` (debug builds) | `tracing::error!` |
//!
//! ## Example
//!
//! ```ignore
//! use stockroom_pages::{debug_log, warn_log};
//!
//! debug_log!("fragment {:?} resolved to {}", raw, path);
//! warn_log!("failed to write fragment: {}", err);
//! ```

/// Logs a debug message
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-routing", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(all(
	target_arch = "wasm32",
	not(all(debug_assertions, feature = "debug-routing"))
))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs a debug message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__tracing::debug!($($arg)*);
	}};
}

/// Logs an info message
///
/// # Example
///
/// ```ignore
/// info_log!("router initialized at {}", path);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// No-op info_log in release WASM builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs an info message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__tracing::info!($($arg)*);
	}};
}

/// Logs a warning message
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// No-op warn_log in release WASM builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs a warning message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__tracing::warn!($($arg)*);
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// No-op error_log in release WASM builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		let _ = format_args!($($arg)*);
	}};
}

/// Logs an error message through `tracing`
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__tracing::error!($($arg)*);
	}};
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use crate::{debug_log, error_log, info_log, warn_log};

	#[rstest]
	fn test_logging_macros_compile() {
		let path = "/inventory";
		debug_log!("Resolved fragment to {}", path);
		info_log!("Router ready at {}", path);
		warn_log!("Fragment write failed: {:?}", "denied");
		error_log!("Listener registration failed: {}", 42);
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		debug_log!("Simple debug");
		info_log!("Simple info");
		warn_log!("Simple warning");
		error_log!("Simple error");
	}
}
