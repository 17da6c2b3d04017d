use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::discount::Discount;
use crate::pagination::Pagination;

/// Domain representation of a product brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Unique identifier of the brand.
    pub id: i32,
    /// Human-readable name of the brand.
    pub name: String,
    /// Optional path or URL to the brand logo.
    pub logo: Option<String>,
    /// Discounts attached directly to the brand.
    pub discounts: Vec<Discount>,
    /// Timestamp for when the brand record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the brand record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new brand.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    /// Human-readable name of the brand.
    pub name: String,
    /// Optional path or URL to the brand logo.
    pub logo: Option<String>,
    /// Timestamp captured when the brand payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewBrand {
    /// Build a new brand payload with a trimmed name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self {
            name,
            logo: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a logo path to the brand payload.
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

/// Patch data applied when updating an existing brand.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBrand {
    /// Updated name of the brand.
    pub name: String,
    /// New logo value; `None` keeps the existing logo.
    pub logo: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateBrand {
    /// Build a brand update payload with the supplied values.
    pub fn new(name: impl Into<String>, logo: Option<String>) -> Self {
        Self {
            name: name.into(),
            logo,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list brands.
#[derive(Debug, Clone)]
pub struct BrandListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for BrandListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl BrandListQuery {
    /// Construct a query that targets all brands.
    pub fn new() -> Self {
        Self {
            search: None,
            pagination: None,
        }
    }

    /// Filter the results by a search term applied to the name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
