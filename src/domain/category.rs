use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::discount::Discount;
use crate::pagination::Pagination;

/// Domain representation of a product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub name: String,
    /// Optional path or URL to the category cover image.
    pub cover: Option<String>,
    /// Discounts attached directly to the category.
    pub discounts: Vec<Discount>,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Optional path or URL to the category cover image.
    pub cover: Option<String>,
    /// Timestamp captured when the category payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Build a new category payload with a trimmed name and current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self {
            name,
            cover: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Attach a cover image path to the category payload.
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategory {
    /// Updated name of the category.
    pub name: String,
    /// New cover value; `None` keeps the existing cover.
    pub cover: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateCategory {
    /// Build a category update payload with the supplied values.
    pub fn new(name: impl Into<String>, cover: Option<String>) -> Self {
        Self {
            name: name.into(),
            cover,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list categories.
#[derive(Debug, Clone)]
pub struct CategoryListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for CategoryListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryListQuery {
    /// Construct a query that targets all categories.
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
