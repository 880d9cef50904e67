//! Pricing Bridge Core - Shared types library.
//!
//! This crate provides the request-scoped types used by the `api` crate:
//! typed Admin API identifiers, decimal prices with tolerance matching,
//! line-item properties, and parsing of inbound checkout payloads.
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O and no HTTP
//! clients. Everything here can be unit tested without a runtime.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, properties, and line-item requests

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
