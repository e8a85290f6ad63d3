//! Numeric helpers: percentage change and gap filling.

pub mod change;

pub use change::*;
