#[doc(hidden)]
pub use tracing as __tracing;

/// Target used for events the terminal renders as a positive result.
pub const SUCCESS_TARGET: &str = "guessr::success";

/// `info!` on the success target, so drivers can highlight it.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
