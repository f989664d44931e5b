//! Core types for Shopclerk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod intent;
pub mod price;
pub mod sentiment;

pub use email::{Email, EmailError};
pub use id::*;
pub use intent::{Confidence, Intent};
pub use price::{CurrencyCode, Price};
pub use sentiment::Sentiment;
