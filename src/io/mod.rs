//! Input/output helpers.
//!
//! - config file loading (`config`)
//! - report writing (`readme`)

pub mod config;
pub mod readme;

pub use config::*;
pub use readme::*;
