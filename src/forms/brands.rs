use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::brand::{NewBrand, UpdateBrand};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a brand name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the brand form helpers.
pub type BrandFormResult<T> = Result<T, BrandFormError>;

/// Errors that can occur while processing brand forms.
#[derive(Debug, Error)]
pub enum BrandFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("brand name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when creating a brand in the admin back office.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBrandForm {
    /// Name entered by the admin.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional logo path stored by the upload collaborator.
    pub logo: Option<String>,
}

impl AddBrandForm {
    /// Validates and sanitizes the payload into a domain `NewBrand`.
    pub fn into_new_brand(self) -> BrandFormResult<NewBrand> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(BrandFormError::EmptyName);
        }

        let mut brand = NewBrand::new(sanitized_name);
        if let Some(logo) = normalize_path(self.logo) {
            brand = brand.with_logo(logo);
        }

        Ok(brand)
    }
}

/// Form payload emitted when editing an existing brand.
#[derive(Debug, Deserialize, Validate)]
pub struct EditBrandForm {
    /// Identifier of the brand being edited.
    pub brand_id: i32,
    /// Updated name of the brand.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional logo update; `None` keeps the existing logo.
    pub logo: Option<String>,
}

impl EditBrandForm {
    /// Validates and sanitizes the payload into a domain `UpdateBrand`.
    pub fn into_update_brand(self) -> BrandFormResult<UpdateBrand> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(BrandFormError::EmptyName);
        }

        Ok(UpdateBrand::new(sanitized_name, normalize_path(self.logo)))
    }
}

fn normalize_path(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
