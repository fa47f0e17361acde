//! Product form validation.
//!
//! Admin create/edit forms surface failures as a list of user-facing
//! messages; an empty list means the draft is acceptable.

use rust_decimal::Decimal;

use super::ProductDraft;

/// Validate a product draft, returning every user-facing problem found.
#[must_use]
pub fn validate(draft: &ProductDraft) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push("Product name is required".to_owned());
    }
    if draft.description.trim().is_empty() {
        errors.push("Product description is required".to_owned());
    }
    if draft.price <= Decimal::ZERO {
        errors.push("Valid price is required".to_owned());
    }
    if let Some(original) = draft.original_price
        && original <= draft.price
    {
        errors.push("Original price must be greater than current price".to_owned());
    }
    if draft.images.is_empty() {
        errors.push("At least one product image is required".to_owned());
    }
    if draft.sizes.is_empty() {
        errors.push("At least one size is required".to_owned());
    }
    if draft.colors.is_empty() {
        errors.push("At least one color is required".to_owned());
    }
    if !(0.0..=5.0).contains(&draft.rating) {
        errors.push("Rating must be between 0 and 5".to_owned());
    }

    errors
}
