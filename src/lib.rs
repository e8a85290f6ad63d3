//! `finance-cat` library crate.
//!
//! The binary (`finance-cat`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable against fake providers without spawning processes
//! - formatting stays a pure, separately testable module

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod mood;
pub mod report;
