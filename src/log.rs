//! Utilities for logging messages from the library.

use once_cell::sync::Lazy;

/// Prints a message if logging is enabled for the given [`Session`](crate::session::Session).
#[doc(hidden)]
#[macro_export]
macro_rules! paint_log {
    (
        $session:expr,
        $($arg:tt)+
    ) => {
        if $session.log_enabled() {
            println!("{}", format_args!($($arg)+));
        }
    };
}

/// Whether the `SVGPAINT_LOG` environment variable is set.
///
/// The variable is only read once per process.
pub fn log_enabled() -> bool {
    static ENABLED: Lazy<bool> = Lazy::new(|| ::std::env::var_os("SVGPAINT_LOG").is_some());

    *ENABLED
}
