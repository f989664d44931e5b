//! Shopclerk Core - Shared types library.
//!
//! This crate provides common types used across all Shopclerk components:
//! - `support` - The dialogue orchestrator library
//! - `cli` - Command-line tools for schema management and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, intents, scores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
