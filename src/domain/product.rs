use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::discount::Discount;
use crate::pagination::Pagination;

/// Domain representation of a catalog product.
///
/// `discounts` holds the raw discount records assembled by the repository:
/// the product's own discounts, then every assigned category's, then the
/// brand's, each in retrieval order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to shoppers.
    pub description: Option<String>,
    /// Optional path or URL to the product image.
    pub image_src: Option<String>,
    /// Undiscounted base price.
    pub default_price: f64,
    /// Identifier of the owning brand, when assigned.
    pub brand_id: Option<i32>,
    /// Owning brand resolved on fetch.
    pub brand: Option<Brand>,
    /// Categories assigned to the product, resolved on fetch.
    pub categories: Vec<Category>,
    /// Raw discounts applicable to the product (own, category, brand).
    pub discounts: Vec<Discount>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to shoppers.
    pub description: Option<String>,
    /// Optional path or URL to the product image.
    pub image_src: Option<String>,
    /// Undiscounted base price.
    pub default_price: f64,
    /// Identifier of the owning brand, when assigned.
    pub brand_id: Option<i32>,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, default_price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            image_src: None,
            default_price,
            brand_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an image path to the product payload.
    pub fn with_image_src(mut self, image_src: impl Into<String>) -> Self {
        self.image_src = Some(image_src.into());
        self
    }

    /// Assign the product to a brand.
    pub fn with_brand_id(mut self, brand_id: i32) -> Self {
        self.brand_id = Some(brand_id);
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional description update, using inner `None` to clear it.
    pub description: Option<Option<String>>,
    /// Optional image update, using inner `None` to clear it.
    pub image_src: Option<Option<String>>,
    /// Optional base price update.
    pub default_price: Option<f64>,
    /// Optional brand reassignment, using inner `None` to detach the brand.
    pub brand_id: Option<Option<i32>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            image_src: None,
            default_price: None,
            brand_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the description, using `None` to clear an existing value.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    /// Update the image path, using `None` to clear an existing value.
    pub fn image_src(mut self, image_src: Option<impl Into<String>>) -> Self {
        self.image_src = Some(image_src.map(|value| value.into()));
        self
    }

    /// Update the undiscounted base price.
    pub fn default_price(mut self, default_price: f64) -> Self {
        self.default_price = Some(default_price);
        self
    }

    /// Reassign the brand, using `None` to detach the product from its brand.
    pub fn brand_id(mut self, brand_id: Option<i32>) -> Self {
        self.brand_id = Some(brand_id);
        self
    }
}

/// Query definition used to list storefront products.
///
/// Filters compose: a product matches when it satisfies every filter that is
/// set. Brand and category filters match by name, the way the storefront
/// sidebar submits them.
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
    /// Brand names to match; empty means no brand filter.
    pub brands: Vec<String>,
    /// Category names to match; empty means no category filter.
    pub categories: Vec<String>,
    /// Optional inclusive `(min, max)` bounds on the base price.
    pub price_range: Option<(f64, f64)>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListQuery {
    /// Construct a query that targets all products.
    pub fn new() -> Self {
        Self {
            search: None,
            brands: Vec::new(),
            categories: Vec::new(),
            price_range: None,
            pagination: None,
        }
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict the results to products of the named brands.
    pub fn brands(mut self, brands: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the results to products in the named categories.
    pub fn categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the results to base prices within `min..=max`.
    pub fn price_between(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some((min, max));
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
