use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Kind of price reduction a discount applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    /// Absolute amount subtracted from the base price.
    Fixed,
    /// Percentage of the base price subtracted from it.
    Percentage,
}

/// Domain representation of a discount that can be attached to products,
/// categories and brands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Unique identifier of the discount.
    pub id: i32,
    /// Admin-facing label of the discount.
    pub name: String,
    /// Whether the value is a fixed amount or a percentage.
    pub discount_type: DiscountType,
    /// Percentage points (0–100) or a currency amount (≥ 0).
    pub value: f64,
    /// Timestamp for when the discount record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the discount record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new discount.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    /// Admin-facing label of the discount.
    pub name: String,
    /// Whether the value is a fixed amount or a percentage.
    pub discount_type: DiscountType,
    /// Percentage points (0–100) or a currency amount (≥ 0).
    pub value: f64,
    /// Timestamp captured when the discount payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewDiscount {
    /// Build a new discount payload with a trimmed name and current timestamp.
    pub fn new(name: impl Into<String>, discount_type: DiscountType, value: f64) -> Self {
        let name = name.into().trim().to_string();
        Self {
            name,
            discount_type,
            value,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Patch data applied when updating an existing discount.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDiscount {
    /// Updated label of the discount.
    pub name: String,
    /// Updated discount kind.
    pub discount_type: DiscountType,
    /// Updated magnitude.
    pub value: f64,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateDiscount {
    /// Build a discount update payload with the supplied values.
    pub fn new(name: impl Into<String>, discount_type: DiscountType, value: f64) -> Self {
        Self {
            name: name.into(),
            discount_type,
            value,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list discounts in the admin back office.
#[derive(Debug, Clone)]
pub struct DiscountListQuery {
    /// Optional case-insensitive substring search applied to the name.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for DiscountListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscountListQuery {
    /// Construct a query that targets all discounts.
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
