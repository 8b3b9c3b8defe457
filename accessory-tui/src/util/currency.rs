//! INR amount formatting
//!
//! Indian digit grouping puts the first separator after three digits and the
//! rest after every two: 1,50,000 rather than 150,000.

use num_format::{CustomFormat, Grouping, ToFormattedString};

/// Format an amount as `₹1,50,000.00`. Paise are always shown with two
/// digits; amounts are rounded to the nearest paisa.
#[must_use]
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation)]
    let total_paise = (amount.abs() * 100.0).round() as i64;
    let rupees = total_paise / 100;
    let paise = total_paise % 100;

    let grouped = match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .build()
    {
        Ok(format) => rupees.to_formatted_string(&format),
        // Builder only fails on invalid separators; fall back to ungrouped.
        Err(_) => rupees.to_string(),
    };

    format!("{sign}₹{grouped}.{paise:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.0), "₹999.00");
    }

    #[test]
    fn thousands_group_western_style_once() {
        assert_eq!(format_inr(1500.0), "₹1,500.00");
    }

    #[test]
    fn lakhs_group_indian_style() {
        assert_eq!(format_inr(150_000.0), "₹1,50,000.00");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678.00");
    }

    #[test]
    fn paise_are_rounded_to_two_digits() {
        assert_eq!(format_inr(1500.5), "₹1,500.50");
        assert_eq!(format_inr(0.005), "₹0.01");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_inr(-1500.0), "-₹1,500.00");
    }
}
