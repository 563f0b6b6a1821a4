//! # TD Test Utilities
//!
//! Shared testing utilities for all crates:
//! - The shipped default theme as a fixture
//! - Temporary themes roots with placeholder assets
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
