//! Cart verification and authoritative re-pricing.

use crate::catalog::Catalog;
use crate::order::types::{CartLine, OrderLine, ValidationError, VerifiedOrder};

/// Quantity bounds for a single line.
const MIN_QUANTITY: f64 = 1.0;
const MAX_QUANTITY: f64 = 99.0;

/// Validate an untrusted cart and re-price it against the catalog.
///
/// Any single violation rejects the whole cart. Prices come exclusively from
/// the catalog; whatever the client believes an item costs is never consulted.
pub fn verify(lines: &[CartLine], catalog: &Catalog) -> Result<VerifiedOrder, ValidationError> {
    if lines.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    let mut verified = Vec::with_capacity(lines.len());
    let mut total_amount: u64 = 0;

    for line in lines {
        let raw = line.quantity;
        if raw.fract() != 0.0 || !(MIN_QUANTITY..=MAX_QUANTITY).contains(&raw) {
            return Err(ValidationError::InvalidQuantity(raw));
        }
        let quantity = raw as u32;

        let unit_price = catalog
            .price_of(&line.item_id)
            .ok_or_else(|| ValidationError::UnknownItem(line.item_id.clone()))?;

        total_amount += u64::from(unit_price) * u64::from(quantity);
        verified.push(OrderLine {
            item_id: line.item_id.clone(),
            quantity,
            unit_price,
        });
    }

    Ok(VerifiedOrder {
        lines: verified,
        total_amount,
    })
}
