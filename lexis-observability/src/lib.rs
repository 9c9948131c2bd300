//! # lexis-observability
//!
//! Tracing subscriber initialisation and span macros for every pipeline stage.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
