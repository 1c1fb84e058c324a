//! Command-line interface
//!
//! Handlers are plain functions so they can be driven from tests as well as
//! from the `adf-codegen` binary.

pub mod commands;
pub mod config;
pub mod error;
