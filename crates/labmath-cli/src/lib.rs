//! labmath-cli: command-line demos for the labmath value types.
pub mod config;
pub mod demo;
