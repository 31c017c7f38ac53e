//! Console logging macros
//!
//! On wasm32 these write to the browser console through web_sys. Native
//! builds (cargo test) can't call JS imports, so the macros only type-check
//! their arguments there.

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => {{
        if false {
            let _ = format!($($t)*);
        }
    }};
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_warn {
    ($($t:tt)*) => {{
        if false {
            let _ = format!($($t)*);
        }
    }};
}
