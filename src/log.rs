//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export `tracing` macros, so shader
//! resolution and SVG output show up under `RUST_LOG=gradline=debug`.
//! Without it they expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
