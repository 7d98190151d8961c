//! CLI library components for the delegate map.

pub mod inputs;
pub mod logging;
