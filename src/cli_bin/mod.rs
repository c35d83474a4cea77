//! Command-line layer: argument parsing and the command that drives the library

pub mod args;
pub mod commands;
