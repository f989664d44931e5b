//! Shopclerk Support - rule-driven dialogue orchestration.
//!
//! This crate turns a free-text customer message (optionally tied to an
//! account email) into a deterministic support response. The flow is:
//!
//! 1. Normalize the message for classification
//! 2. Classify intent and score sentiment via the language service
//! 3. Resolve order references from the raw text and extracted entities
//! 4. Generate a response from intent, confidence, and record-store lookups
//! 5. Persist the exchange when the sender's identity resolves
//!
//! The orchestrator holds no cross-call state: durable state lives in the
//! record store, and all classification happens in the injected language
//! analyzer. A single [`orchestrator::SupportService`] may therefore be
//! shared across concurrent callers.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(async_fn_in_trait)]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod nlu;
pub mod orchestrator;
pub mod resolver;
pub mod responder;
pub mod store;

pub use error::SupportError;
pub use orchestrator::SupportService;
