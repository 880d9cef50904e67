//! Pricing Bridge API library.
//!
//! Forwards custom-priced line items from a storefront checkout form to the
//! Shopify Admin REST API. Exposed as a library so the router can be driven
//! directly from tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod shopify;
pub mod state;
