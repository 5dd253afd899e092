//! Playground library exports for the binary and integration tests

pub mod core;
pub mod error;
pub mod scaffold;
pub mod tui;

#[cfg(test)]
pub mod test_support;
