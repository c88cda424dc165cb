//! Logging shims over `tracing`.
//!
//! `trace!` covers per-primitive surface output, `debug!` the resolved shape
//! and its translation, `warn!` a draw that fell back to error text. Without
//! the `tracing` feature all three expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    #[doc(hidden)]
    macro_rules! __shaper_noop_trace {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! __shaper_noop_debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! __shaper_noop_warn {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __shaper_noop_debug as debug, __shaper_noop_trace as trace, __shaper_noop_warn as warn,
};
