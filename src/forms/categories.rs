use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a category name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category forms.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when creating a category in the admin back office.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    /// Name entered by the admin.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional cover image path stored by the upload collaborator.
    pub cover: Option<String>,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        let mut category = NewCategory::new(sanitized_name);
        if let Some(cover) = normalize_path(self.cover) {
            category = category.with_cover(cover);
        }

        Ok(category)
    }
}

/// Form payload emitted when editing an existing category.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCategoryForm {
    /// Identifier of the category being edited.
    pub category_id: i32,
    /// Updated name of the category.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional cover update; `None` keeps the existing cover.
    pub cover: Option<String>,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<UpdateCategory> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(UpdateCategory::new(sanitized_name, normalize_path(self.cover)))
    }
}

fn normalize_path(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
