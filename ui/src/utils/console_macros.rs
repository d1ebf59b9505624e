/// Timestamped browser console logging.
/// Each macro formats its arguments like `format!` and prefixes the line with
/// `js_sys::Date::now()` so interleaved component logs can be ordered.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_stamped {
    ($level:ident, $msg:expr) => {
        gloo_console::$level!(format!("[{}] {}", js_sys::Date::now(), $msg))
    };
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_stamped!(info, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_stamped!(warn, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_stamped!(debug, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_stamped!(debug, format!($fmt, $($arg)*))
    };
}
