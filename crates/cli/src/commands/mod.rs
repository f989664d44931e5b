//! CLI command implementations.

pub mod conversations;
pub mod migrate;
pub mod seed;
