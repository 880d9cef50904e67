//! Request forwarding services.
//!
//! Each service turns a validated line item into Admin API calls and returns
//! the platform's result. Calls run strictly in sequence with no retries.

pub mod draft_orders;
pub mod variants;

pub use draft_orders::{DRAFT_ORDER_NOTE, DRAFT_ORDER_TAGS, build_draft_order, create_draft_order};
pub use variants::{
    VariantResolution, build_variant, find_matching_variant, find_or_create_price_variant,
    variant_sku, variant_title,
};
