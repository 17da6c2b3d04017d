use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::discount::{DiscountType, NewDiscount, UpdateDiscount};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a discount name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the discount form helpers.
pub type DiscountFormResult<T> = Result<T, DiscountFormError>;

/// Errors that can occur while processing discount forms.
#[derive(Debug, Error)]
pub enum DiscountFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("discount name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when creating a discount in the admin back office.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = validate_magnitude))]
pub struct AddDiscountForm {
    /// Admin-facing label of the discount.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Whether the value is a fixed amount or a percentage.
    pub discount_type: DiscountType,
    /// Percentage points (0–100) or a currency amount (≥ 0).
    pub value: f64,
}

impl AddDiscountForm {
    /// Validates and sanitizes the payload into a domain `NewDiscount`.
    pub fn into_new_discount(self) -> DiscountFormResult<NewDiscount> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(DiscountFormError::EmptyName);
        }

        Ok(NewDiscount::new(
            sanitized_name,
            self.discount_type,
            self.value,
        ))
    }
}

/// Form payload emitted when editing an existing discount.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = validate_magnitude_edit))]
pub struct EditDiscountForm {
    /// Identifier of the discount being edited.
    pub discount_id: i32,
    /// Updated label of the discount.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Updated discount kind.
    pub discount_type: DiscountType,
    /// Updated magnitude.
    pub value: f64,
}

impl EditDiscountForm {
    /// Validates and sanitizes the payload into a domain `UpdateDiscount`.
    pub fn into_update_discount(self) -> DiscountFormResult<UpdateDiscount> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(DiscountFormError::EmptyName);
        }

        Ok(UpdateDiscount::new(
            sanitized_name,
            self.discount_type,
            self.value,
        ))
    }
}

fn magnitude_in_range(discount_type: DiscountType, value: f64) -> Result<(), ValidationError> {
    let valid = match discount_type {
        DiscountType::Percentage => (0.0..=100.0).contains(&value),
        DiscountType::Fixed => value >= 0.0,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("discount_value_out_of_range"))
    }
}

fn validate_magnitude(form: &AddDiscountForm) -> Result<(), ValidationError> {
    magnitude_in_range(form.discount_type, form.value)
}

fn validate_magnitude_edit(form: &EditDiscountForm) -> Result<(), ValidationError> {
    magnitude_in_range(form.discount_type, form.value)
}
