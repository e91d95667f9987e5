//! CLI library components for the form engine host.

pub mod fill;
pub mod logging;
pub mod store;
