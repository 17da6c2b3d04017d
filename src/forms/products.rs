use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
}

/// Domain payload produced from a product form: the product itself plus the
/// full category and discount assignment sets.
#[derive(Debug, Clone)]
pub struct NewProductPayload {
    /// Product data to insert.
    pub product: NewProduct,
    /// Categories to assign; replaces the full set.
    pub categories: Vec<i32>,
    /// Discounts to assign; replaces the full set.
    pub discounts: Vec<i32>,
}

/// Domain payload produced from a product edit form.
#[derive(Debug, Clone)]
pub struct UpdateProductPayload {
    /// Identifier of the product being edited.
    pub product_id: i32,
    /// Field updates to apply.
    pub updates: UpdateProduct,
    /// Categories to assign; replaces the full set.
    pub categories: Vec<i32>,
    /// Discounts to assign; replaces the full set.
    pub discounts: Vec<i32>,
}

/// Form payload emitted when submitting the "Add product" admin form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Name entered by the admin.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional image path stored by the upload collaborator.
    pub image_src: Option<String>,
    /// Undiscounted base price.
    #[validate(range(min = 0.0))]
    pub default_price: f64,
    /// Optional owning brand.
    pub brand_id: Option<i32>,
    /// Categories to assign to the product.
    #[serde(default)]
    pub categories: Vec<i32>,
    /// Discounts to attach directly to the product.
    #[serde(default)]
    pub discounts: Vec<i32>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProductPayload`.
    pub fn into_payload(self) -> ProductFormResult<NewProductPayload> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let sanitized_description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let image_src = self
            .image_src
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        let mut product = NewProduct::new(sanitized_name, self.default_price);

        if let Some(description) = sanitized_description {
            product = product.with_description(description);
        }

        if let Some(image_src) = image_src {
            product = product.with_image_src(image_src);
        }

        if let Some(brand_id) = self.brand_id {
            product = product.with_brand_id(brand_id);
        }

        Ok(NewProductPayload {
            product,
            categories: self.categories,
            discounts: self.discounts,
        })
    }
}

/// Form payload emitted when editing an existing product.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    /// Identifier of the product being edited.
    pub product_id: i32,
    /// Optional new name.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: Option<String>,
    /// Optional description update (empty string clears the existing value).
    pub description: Option<String>,
    /// Optional image update (empty string clears the existing value).
    pub image_src: Option<String>,
    /// Optional base price update.
    #[validate(range(min = 0.0))]
    pub default_price: Option<f64>,
    /// Optional brand reassignment.
    pub brand_id: Option<i32>,
    /// Detach the product from its brand; wins over `brand_id`.
    #[serde(default)]
    pub detach_brand: bool,
    /// Categories to assign; replaces the full set.
    #[serde(default)]
    pub categories: Vec<i32>,
    /// Discounts to assign; replaces the full set.
    #[serde(default)]
    pub discounts: Vec<i32>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProductPayload`.
    pub fn into_payload(self) -> ProductFormResult<UpdateProductPayload> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(description) = self.description {
            let sanitized = sanitize_multiline_text(&description);
            if sanitized.is_empty() {
                updates = updates.description(None::<String>);
            } else {
                updates = updates.description(Some(sanitized));
            }
        }

        if let Some(image_src) = self.image_src {
            let trimmed = image_src.trim();
            if trimmed.is_empty() {
                updates = updates.image_src(None::<String>);
            } else {
                updates = updates.image_src(Some(trimmed.to_string()));
            }
        }

        if let Some(default_price) = self.default_price {
            updates = updates.default_price(default_price);
        }

        if self.detach_brand {
            updates = updates.brand_id(None);
        } else if let Some(brand_id) = self.brand_id {
            updates = updates.brand_id(Some(brand_id));
        }

        Ok(UpdateProductPayload {
            product_id: self.product_id,
            updates,
            categories: self.categories,
            discounts: self.discounts,
        })
    }
}
