/// Macros for properly formatted console logging.
/// These wrap gloo_console functions and handle formatting up front so the
/// browser console receives a single ready-made string.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::log!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::error!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}
