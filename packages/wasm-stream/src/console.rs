//! Browser console logging.
//!
//! wasm-bindgen imports panic when called off-wasm, so native builds (and
//! the unit tests) format nothing and log nothing.

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn log(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn error(message: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(message));
}

/// `console.log` with `format!` arguments.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::console::log(&format!($($arg)*));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($arg)*);
    }};
}

/// `console.error` with `format!` arguments.
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::console::error(&format!($($arg)*));
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($arg)*);
    }};
}
