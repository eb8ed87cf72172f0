//! Product input rules.
//!
//! Pure validation functions applied at the HTTP boundary before anything is
//! written to the `products` table.

use rust_decimal::Decimal;
use validator::ValidateUrl;

use crate::error::CoreError;

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of a product description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Maximum length of an image URL, in characters.
pub const MAX_IMAGE_URL_LEN: usize = 2048;

/// Number of decimal places the `price` column stores (`NUMERIC(10, 2)`).
pub const PRICE_SCALE: u32 = 2;

/// Largest price representable by `NUMERIC(10, 2)`.
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, PRICE_SCALE)
}

/// Validate a product name.
///
/// Rules:
/// - Must contain at least one non-whitespace character.
/// - Must not exceed [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Product name must not exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Product description must not exceed {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a product price.
///
/// Trailing zeros are ignored when checking the scale, so `9.990` is
/// accepted as `9.99`.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(CoreError::Validation(
            "Product price must not be negative".to_string(),
        ));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(CoreError::Validation(format!(
            "Product price must have at most {PRICE_SCALE} decimal places"
        )));
    }
    if price > max_price() {
        return Err(CoreError::Validation(format!(
            "Product price must not exceed {}",
            max_price()
        )));
    }
    Ok(())
}

/// Validate an image URL: an absolute `http` or `https` URL of bounded length.
pub fn validate_image_url(url: &str) -> Result<(), CoreError> {
    if url.chars().count() > MAX_IMAGE_URL_LEN {
        return Err(CoreError::Validation(format!(
            "Image URL must not exceed {MAX_IMAGE_URL_LEN} characters"
        )));
    }
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) || !url.validate_url() {
        return Err(CoreError::Validation(
            "Image URL must be an absolute http or https URL".to_string(),
        ));
    }
    Ok(())
}
