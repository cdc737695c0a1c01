// SPDX-License-Identifier: CC0-1.0

//! Error handling helpers.

/// Formats an error together with its source, or without it when the source is
/// reachable through `std::error::Error::source`.
///
/// With `std` enabled (in the *calling* crate) printing the source would duplicate
/// it for any reporter that walks the chain, so only the message is written.
///
/// # Examples
///
/// ```ignore
/// write_err!(f, "failed to read {}", path.display(); source)
/// ```
#[macro_export]
macro_rules! write_err {
    ($writer:expr, $string:literal $(, $args:expr)*; $source:expr) => {
        {
            #[cfg(feature = "std")]
            {
                let _ = &$source;   // Prevents clippy warnings.
                write!($writer, $string $(, $args)*)
            }
            #[cfg(not(feature = "std"))]
            {
                write!($writer, concat!($string, ": {}") $(, $args)*, $source)
            }
        }
    }
}
