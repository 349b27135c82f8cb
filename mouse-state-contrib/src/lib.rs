//! Systems for using mouse-state with legion.

#[cfg(feature = "tracking")]
pub mod tracking;
