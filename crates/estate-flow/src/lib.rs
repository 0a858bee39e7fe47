//! Step-flow wizards and financial estimation tools for the property marketplace.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
