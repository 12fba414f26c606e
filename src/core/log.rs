//! Console logging
//!
//! On wasm32 messages go to the browser/devtools console via `web_sys`.
//! Native builds (tests, tooling) compile the macro down to nothing so no
//! JS import is ever called outside the browser.

/// `format!`-style logging to the JS console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::log::log_str(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
pub fn log_str(msg: &str) {
    web_sys::console::log_1(&msg.into());
}
