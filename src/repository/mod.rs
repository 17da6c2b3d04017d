use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::domain::brand::{Brand, BrandListQuery, NewBrand, UpdateBrand};
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::discount::{Discount, DiscountListQuery, NewDiscount, UpdateDiscount};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};

pub mod brand;
pub mod category;
pub mod discount;
pub mod product;

#[cfg(test)]
pub mod mock;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// The in-memory store lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only operations over product records.
pub trait ProductReader {
    /// Fetch a product with its brand, categories and assembled discount
    /// list, or `None` when it does not exist.
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// List products matching `query`, returning the total match count
    /// alongside the requested page.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    /// Replace the product's full category set; no partial patch.
    fn replace_product_categories(
        &self,
        product_id: i32,
        category_ids: &[i32],
    ) -> RepositoryResult<()>;
    /// Replace the product's full discount set; no partial patch.
    fn replace_product_discounts(
        &self,
        product_id: i32,
        discount_ids: &[i32],
    ) -> RepositoryResult<()>;
}

/// Read-only operations over brand records.
pub trait BrandReader {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
    fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<(usize, Vec<Brand>)>;
}

/// Write operations over brand records.
pub trait BrandWriter {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
    fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
    /// Replace the brand's full discount set; no partial patch.
    fn replace_brand_discounts(&self, brand_id: i32, discount_ids: &[i32])
    -> RepositoryResult<()>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    /// Resolve a batch of category ids; fails with `NotFound` when any id
    /// does not exist.
    fn get_categories_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Category>>;
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    /// Replace the category's full discount set; no partial patch.
    fn replace_category_discounts(
        &self,
        category_id: i32,
        discount_ids: &[i32],
    ) -> RepositoryResult<()>;
}

/// Read-only operations over discount records.
pub trait DiscountReader {
    fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>>;
    /// Resolve a batch of discount ids; fails with `NotFound` when any id
    /// does not exist.
    fn get_discounts_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Discount>>;
    fn list_discounts(&self, query: DiscountListQuery)
    -> RepositoryResult<(usize, Vec<Discount>)>;
}

/// Write operations over discount records.
pub trait DiscountWriter {
    fn create_discount(&self, new_discount: &NewDiscount) -> RepositoryResult<Discount>;
    fn update_discount(
        &self,
        discount_id: i32,
        updates: &UpdateDiscount,
    ) -> RepositoryResult<Discount>;
    fn delete_discount(&self, discount_id: i32) -> RepositoryResult<()>;
}

/// Backing state shared by the in-memory repository.
///
/// Entity maps hold records with empty relation fields; join rows carry the
/// many-to-many assignments and are hydrated into the domain structs on read.
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub(crate) next_id: i32,
    pub(crate) products: BTreeMap<i32, Product>,
    pub(crate) brands: BTreeMap<i32, Brand>,
    pub(crate) categories: BTreeMap<i32, Category>,
    pub(crate) discounts: BTreeMap<i32, Discount>,
    /// `(product_id, category_id)` assignment rows, in insertion order.
    pub(crate) product_categories: Vec<(i32, i32)>,
    /// `(product_id, discount_id)` assignment rows, in insertion order.
    pub(crate) product_discounts: Vec<(i32, i32)>,
    /// `(category_id, discount_id)` assignment rows, in insertion order.
    pub(crate) category_discounts: Vec<(i32, i32)>,
    /// `(brand_id, discount_id)` assignment rows, in insertion order.
    pub(crate) brand_discounts: Vec<(i32, i32)>,
}

impl Store {
    pub(crate) fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
/// Thread-safe in-memory repository implementing every reader and writer
/// trait. Cheap to clone; clones share the same store.
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    /// Create a new repository with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Store>> {
        self.store.read().map_err(|_| RepositoryError::LockPoisoned)
    }

    pub(crate) fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)
    }
}

/// Slice a filtered result set down to the requested page.
pub(crate) fn paginate<T>(items: Vec<T>, pagination: Option<&crate::pagination::Pagination>) -> Vec<T> {
    match pagination {
        Some(pagination) => {
            let offset = (pagination.page.max(1) - 1) * pagination.per_page;
            items
                .into_iter()
                .skip(offset)
                .take(pagination.per_page)
                .collect()
        }
        None => items,
    }
}

/// Case-insensitive substring match used by list query search filters.
pub(crate) fn matches_search(value: &str, term: &str) -> bool {
    value.to_lowercase().contains(&term.to_lowercase())
}
