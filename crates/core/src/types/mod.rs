//! Core types for Pricing Bridge.
//!
//! This module provides type-safe wrappers for the checkout domain.

pub mod id;
pub mod line_item;
pub mod price;
pub mod properties;

pub use id::*;
pub use line_item::{DraftOrderLine, LineItemRequest, ValidationError, VariantLine};
pub use price::{PRICE_TOLERANCE, Price, PriceError};
pub use properties::{Properties, SECTOR_KEY, TOTAL_KEY, value_to_text};
