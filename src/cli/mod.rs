//! Command-line interface support for the `pgraph` binary.

pub mod commands;
