//! Draft validation
//!
//! Pure checks applied before any remote call. The first failing rule wins;
//! a passing draft is normalized into the request payload (name and link
//! trimmed, price coerced to a number).

use thiserror::Error;

use crate::types::{AccessoryDraft, AccessoryPayload};

/// A rejected draft. The `Display` text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Accessory name is required.")]
    NameRequired,

    #[error("Price must be a positive number.")]
    PriceNotPositive,

    #[error("Link must start with http:// or https://")]
    InvalidLink,
}

/// Validate a draft and build the normalized request body.
///
/// No side effects; safe to call on every keystroke if a caller wants live
/// feedback.
pub fn validate_draft(draft: &AccessoryDraft) -> Result<AccessoryPayload, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let price: f64 = draft
        .price
        .trim()
        .parse()
        .map_err(|_| ValidationError::PriceNotPositive)?;
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::PriceNotPositive);
    }

    let link = draft.link.trim();
    if !link.is_empty() && !has_http_prefix(link) {
        return Err(ValidationError::InvalidLink);
    }

    Ok(AccessoryPayload {
        name: name.to_string(),
        price,
        link: link.to_string(),
    })
}

/// `http://` or `https://` followed by at least one character.
fn has_http_prefix(link: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|prefix| link.len() > prefix.len() && link.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: &str, link: &str) -> AccessoryDraft {
        AccessoryDraft {
            name: name.to_string(),
            price: price.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = validate_draft(&draft("", "100", "")).unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let err = validate_draft(&draft("   ", "100", "")).unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = validate_draft(&draft("Helmet", "abc", "")).unwrap_err();
        assert_eq!(err, ValidationError::PriceNotPositive);
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        for price in ["0", "-1", "-0.01"] {
            let err = validate_draft(&draft("Helmet", price, "")).unwrap_err();
            assert_eq!(err, ValidationError::PriceNotPositive, "price {price}");
        }
    }

    #[test]
    fn non_finite_price_is_rejected() {
        for price in ["inf", "NaN"] {
            let err = validate_draft(&draft("Helmet", price, "")).unwrap_err();
            assert_eq!(err, ValidationError::PriceNotPositive, "price {price}");
        }
    }

    #[test]
    fn bad_link_is_rejected() {
        for link in ["ftp://x", "example.com", "http://", "https://"] {
            let err = validate_draft(&draft("Helmet", "100", link)).unwrap_err();
            assert_eq!(err, ValidationError::InvalidLink, "link {link}");
        }
    }

    #[test]
    fn valid_draft_with_empty_link_is_accepted() {
        let payload = validate_draft(&draft("Helmet", "1500", "")).unwrap();
        assert_eq!(payload.name, "Helmet");
        assert!((payload.price - 1500.0).abs() < f64::EPSILON);
        assert_eq!(payload.link, "");
    }

    #[test]
    fn normalization_trims_name_and_link() {
        let payload = validate_draft(&draft("  Helmet ", " 1500.50 ", " https://x.in ")).unwrap();
        assert_eq!(payload.name, "Helmet");
        assert!((payload.price - 1500.5).abs() < f64::EPSILON);
        assert_eq!(payload.link, "https://x.in");
    }

    #[test]
    fn first_failure_wins() {
        // Name and price are both bad; name is reported.
        let err = validate_draft(&draft("", "abc", "nope")).unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
    }
}
