//! Price variant lookup and creation.
//!
//! A custom price is sold through a dedicated product variant. Before
//! creating one, the product's existing variants are searched for a price
//! within [`PRICE_TOLERANCE`](pricing_bridge_core::PRICE_TOLERANCE), so
//! repeated checkouts at the same price reuse the same variant.

use chrono::{DateTime, Utc};
use pricing_bridge_core::{Price, SECTOR_KEY, TOTAL_KEY, VariantLine};
use tracing::{info, instrument};

use crate::error::{AppError, Result};
use crate::shopify::{AdminClient, Variant, VariantInput};

/// Inventory policy for generated variants: keep selling when out of stock.
const INVENTORY_POLICY_CONTINUE: &str = "continue";

/// Outcome of [`find_or_create_price_variant`].
#[derive(Debug, Clone)]
pub struct VariantResolution {
    pub variant: Variant,
    /// Title reported to the caller.
    pub title: String,
    /// `true` when the variant was created by this call.
    pub is_new: bool,
}

/// First variant whose price is within tolerance of `price`.
#[must_use]
pub fn find_matching_variant<'a>(variants: &'a [Variant], price: &Price) -> Option<&'a Variant> {
    variants
        .iter()
        .find(|variant| variant.price().is_some_and(|p| p.matches(price)))
}

/// Variant title: `"{sector} - {total}"`, plus `" - {timestamp}"` when given.
///
/// Blank properties count as missing: `sector` is then empty and `total`
/// falls back to the line price.
#[must_use]
pub fn variant_title(line: &VariantLine, timestamp_ms: Option<i64>) -> String {
    let sector = line.properties.get_non_blank(SECTOR_KEY).unwrap_or_default();
    let total = line
        .properties
        .get_non_blank(TOTAL_KEY)
        .map_or_else(|| line.price.to_string(), str::to_string);

    match timestamp_ms {
        Some(ts) => format!("{sector} - {total} - {ts}"),
        None => format!("{sector} - {total}"),
    }
}

/// Generated SKU for a custom variant.
#[must_use]
pub fn variant_sku(timestamp_ms: i64) -> String {
    format!("CUSTOM-{timestamp_ms}")
}

/// Build the payload for a new price variant.
#[must_use]
pub fn build_variant(line: &VariantLine, timestamp_ms: i64, unique_titles: bool) -> VariantInput {
    VariantInput {
        product_id: line.product_id,
        option1: variant_title(line, unique_titles.then_some(timestamp_ms)),
        price: line.price,
        sku: variant_sku(timestamp_ms),
        inventory_management: None,
        inventory_policy: INVENTORY_POLICY_CONTINUE.to_string(),
    }
}

/// Reuse a variant priced like `line`, or create one.
///
/// # Errors
///
/// Returns `AppError::Upstream` if listing or creating variants is rejected,
/// or `AppError::Internal` if a request fails outright.
#[instrument(skip(client, line), fields(product_id = %line.product_id, price = %line.price))]
pub async fn find_or_create_price_variant(
    client: &AdminClient,
    line: &VariantLine,
    now: DateTime<Utc>,
    unique_titles: bool,
) -> Result<VariantResolution> {
    let variants = client
        .list_variants(line.product_id)
        .await
        .map_err(|e| AppError::from_shopify(e, "Failed to list variants"))?;

    if let Some(existing) = find_matching_variant(&variants, &line.price) {
        info!(variant_id = %existing.id, "Reusing existing price variant");
        return Ok(VariantResolution {
            title: existing.display_title(),
            variant: existing.clone(),
            is_new: false,
        });
    }

    let input = build_variant(line, now.timestamp_millis(), unique_titles);
    let variant = client
        .create_variant(line.product_id, &input)
        .await
        .map_err(|e| AppError::from_shopify(e, "Failed to create variant"))?;

    info!(variant_id = %variant.id, title = %input.option1, "Price variant created");

    Ok(VariantResolution {
        variant,
        title: input.option1,
        is_new: true,
    })
}
