//! Supporting utility macros.

/// Trace when `verbose` feature enabled.
macro_rules! verbose {
    ($($tt:tt)*) => {
        #[cfg(feature = "verbose")]
        tracing::trace!($($tt)*)
    };
}

/// Create and enter `Span` when `verbose` feature enabled.
macro_rules! span {
    ($($tt:tt)*) => {
        #[cfg(feature = "verbose")]
        let s = tracing::trace_span!($($tt)*);
        #[cfg(feature = "verbose")]
        let _s = s.enter();
    };
}

/// Warn when `log` feature enabled.
macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        log::warn!($($tt)*)
    };
}

/// Implement `From<$ty>` for an error type.
macro_rules! from {
    ($target:ty, <$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for $target {
            fn from($pat: $ty) -> Self {
                $body
            }
        }
    };
}

/// Implement `Debug` as quoted `Display`.
macro_rules! debug_display {
    ($ty:ty) => {
        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "\"{self}\"")
            }
        }
    };
}

pub(crate) use verbose;
pub(crate) use span;
pub(crate) use warning;
pub(crate) use from;
pub(crate) use debug_display;
