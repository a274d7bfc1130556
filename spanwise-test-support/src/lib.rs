//! Shared test utilities used across spanwise crates.

pub mod property;
pub mod recording;
