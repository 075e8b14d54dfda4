//! Command implementations. Output goes through `tracing`.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod session;
