//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - configuration (`Instrument`, `RunConfig`)
//! - provider data (`PriceSample`)
//! - derived values (`ChangeResult`, `InstrumentQuote`, `MarketMood`)

pub mod types;

pub use types::*;
