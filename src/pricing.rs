//! Discount pricing engine.
//!
//! Pure computation over an already-resolved discount list: price each
//! discount against a base price, sort the results, and pick the single
//! lowest final price as the effective discount. The repository assembles
//! the input (product discounts, then category discounts, then brand
//! discounts); nothing here fetches data or holds state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::discount::{Discount, DiscountType};

/// A discount priced against a concrete base price. Derived at read time,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedDiscount {
    /// Whether the value is a fixed amount or a percentage.
    pub discount_type: DiscountType,
    /// Magnitude copied from the discount record.
    pub value: f64,
    /// Price after applying this discount to the base price.
    pub final_price: f64,
}

/// Result of pricing a product's discount list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectedDiscounts {
    /// Every applicable discount, priced and sorted ascending by final price.
    pub discounts: Vec<PricedDiscount>,
    /// The effective discount: the entry with the lowest final price, or
    /// `None` when no discount applies.
    pub discount: Option<PricedDiscount>,
}

/// Errors produced when validating a discount assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A candidate discount would drop the product price to zero or below.
    #[error("discount `{name}` drops the final price to {final_price}")]
    DiscountMakesPriceInvalid {
        /// Label of the offending discount.
        name: String,
        /// The computed non-positive final price.
        final_price: f64,
    },
}

/// Price a single discount against `base_price`.
///
/// No clamping is applied: a zero or negative result is returned as-is and
/// is the caller's responsibility to validate.
pub fn calculate_price(discount: &Discount, base_price: f64) -> PricedDiscount {
    let final_price = match discount.discount_type {
        DiscountType::Fixed => base_price - discount.value,
        DiscountType::Percentage => base_price - base_price * (discount.value / 100.0),
    };

    PricedDiscount {
        discount_type: discount.discount_type,
        value: discount.value,
        final_price,
    }
}

/// Price every raw discount against `base_price`, sort ascending by final
/// price and select the first entry as the effective discount.
///
/// The sort is stable, so discounts tying on final price keep their source
/// order (product, then category, then brand discounts).
pub fn select_effective_discount(raw_discounts: &[Discount], base_price: f64) -> SelectedDiscounts {
    let mut discounts: Vec<PricedDiscount> = raw_discounts
        .iter()
        .map(|discount| calculate_price(discount, base_price))
        .collect();

    discounts.sort_by(|a, b| a.final_price.total_cmp(&b.final_price));
    let discount = discounts.first().cloned();

    SelectedDiscounts {
        discounts,
        discount,
    }
}

/// Check that every candidate discount leaves the price above zero.
///
/// Each candidate is evaluated independently against the untouched
/// `base_price`; the combined effect of stacking is deliberately not
/// checked. The first offending discount aborts the whole assignment.
pub fn validate_discount_assignment(
    base_price: f64,
    candidates: &[Discount],
) -> Result<(), PricingError> {
    for candidate in candidates {
        let priced = calculate_price(candidate, base_price);
        if priced.final_price <= 0.0 {
            return Err(PricingError::DiscountMakesPriceInvalid {
                name: candidate.name.clone(),
                final_price: priced.final_price,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discount(id: i32, discount_type: DiscountType, value: f64) -> Discount {
        let now = chrono::Local::now().naive_utc();
        Discount {
            id,
            name: format!("discount-{id}"),
            discount_type,
            value,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn fixed_discount_subtracts_amount() {
        let priced = calculate_price(&discount(1, DiscountType::Fixed, 30.0), 100.0);
        assert_eq!(priced.final_price, 70.0);
        assert_eq!(priced.discount_type, DiscountType::Fixed);
        assert_eq!(priced.value, 30.0);
    }

    #[test]
    fn percentage_discount_subtracts_proportion() {
        let priced = calculate_price(&discount(1, DiscountType::Percentage, 50.0), 100.0);
        assert_eq!(priced.final_price, 50.0);

        let priced = calculate_price(&discount(2, DiscountType::Percentage, 25.0), 80.0);
        assert!((priced.final_price - 60.0).abs() < 1e-9);
    }

    #[test]
    fn calculate_price_does_not_clamp() {
        let priced = calculate_price(&discount(1, DiscountType::Fixed, 150.0), 100.0);
        assert_eq!(priced.final_price, -50.0);

        let priced = calculate_price(&discount(2, DiscountType::Percentage, 100.0), 100.0);
        assert_eq!(priced.final_price, 0.0);
    }

    #[test]
    fn selection_sorts_ascending_and_picks_lowest() {
        let raw = vec![
            discount(1, DiscountType::Fixed, 30.0),
            discount(2, DiscountType::Percentage, 50.0),
        ];

        let selected = select_effective_discount(&raw, 100.0);

        let prices: Vec<f64> = selected
            .discounts
            .iter()
            .map(|priced| priced.final_price)
            .collect();
        assert_eq!(prices, vec![50.0, 70.0]);

        let effective = selected.discount.expect("a discount should be selected");
        assert_eq!(effective.discount_type, DiscountType::Percentage);
        assert_eq!(effective.value, 50.0);
        assert_eq!(effective.final_price, 50.0);
    }

    #[test]
    fn empty_discount_list_selects_nothing() {
        let selected = select_effective_discount(&[], 50.0);
        assert!(selected.discounts.is_empty());
        assert!(selected.discount.is_none());
    }

    #[test]
    fn selection_is_idempotent() {
        let raw = vec![
            discount(1, DiscountType::Percentage, 10.0),
            discount(2, DiscountType::Fixed, 5.0),
        ];

        let first = select_effective_discount(&raw, 40.0);
        let second = select_effective_discount(&raw, 40.0);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_keep_input_order() {
        // Both reduce 100 to 40: a fixed 60 off and a 60 percent cut.
        let raw = vec![
            discount(1, DiscountType::Fixed, 60.0),
            discount(2, DiscountType::Percentage, 60.0),
        ];

        let selected = select_effective_discount(&raw, 100.0);
        assert_eq!(selected.discounts.len(), 2);
        assert_eq!(selected.discounts[0].final_price, 40.0);
        assert_eq!(selected.discounts[1].final_price, 40.0);
        assert_eq!(selected.discounts[0].discount_type, DiscountType::Fixed);
        assert_eq!(selected.discounts[1].discount_type, DiscountType::Percentage);

        let effective = selected.discount.expect("a discount should be selected");
        assert_eq!(effective.discount_type, DiscountType::Fixed);
    }

    #[test]
    fn validation_accepts_positive_final_prices() {
        let candidates = vec![
            discount(1, DiscountType::Fixed, 99.0),
            discount(2, DiscountType::Percentage, 99.0),
        ];
        assert!(validate_discount_assignment(100.0, &candidates).is_ok());
    }

    #[test]
    fn validation_rejects_non_positive_final_price() {
        let candidates = vec![discount(1, DiscountType::Fixed, 150.0)];

        let err = validate_discount_assignment(100.0, &candidates)
            .expect_err("assignment should be rejected");
        assert_eq!(
            err,
            PricingError::DiscountMakesPriceInvalid {
                name: "discount-1".to_string(),
                final_price: -50.0,
            }
        );
    }

    #[test]
    fn validation_rejects_price_reduced_to_exactly_zero() {
        let candidates = vec![discount(1, DiscountType::Percentage, 100.0)];
        assert!(validate_discount_assignment(100.0, &candidates).is_err());
    }

    #[test]
    fn validation_checks_each_candidate_against_the_base_price() {
        // Two 60-off discounts would stack below zero, but each one alone
        // leaves the price positive, so the assignment passes.
        let candidates = vec![
            discount(1, DiscountType::Fixed, 60.0),
            discount(2, DiscountType::Fixed, 60.0),
        ];
        assert!(validate_discount_assignment(100.0, &candidates).is_ok());
    }
}
