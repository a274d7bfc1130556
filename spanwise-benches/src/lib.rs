//! Benchmark support crate for spanwise.
//!
//! Provides seeded graph fixtures and parameter types shared by the Criterion
//! benchmarks for the spanning tree engines and the random generator.

pub mod error;
pub mod fixture;
pub mod params;
