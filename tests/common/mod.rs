//! Helpers for integration tests.

use tienda_catalog::domain::brand::NewBrand;
use tienda_catalog::domain::category::NewCategory;
use tienda_catalog::domain::discount::{DiscountType, NewDiscount};
use tienda_catalog::domain::product::NewProduct;
use tienda_catalog::repository::{
    BrandWriter, CategoryWriter, DiscountWriter, InMemoryRepository, ProductWriter,
};

/// Seeded in-memory catalog used by integration tests.
pub struct TestCatalog {
    repo: InMemoryRepository,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self {
            repo: InMemoryRepository::new(),
        }
    }

    pub fn repo(&self) -> InMemoryRepository {
        self.repo.clone()
    }

    pub fn add_brand(&self, name: &str) -> i32 {
        self.repo
            .create_brand(&NewBrand::new(name))
            .expect("create brand")
            .id
    }

    pub fn add_category(&self, name: &str) -> i32 {
        self.repo
            .create_category(&NewCategory::new(name))
            .expect("create category")
            .id
    }

    pub fn add_discount(&self, name: &str, discount_type: DiscountType, value: f64) -> i32 {
        self.repo
            .create_discount(&NewDiscount::new(name, discount_type, value))
            .expect("create discount")
            .id
    }

    pub fn add_product(&self, name: &str, default_price: f64, brand_id: Option<i32>) -> i32 {
        let mut payload = NewProduct::new(name, default_price);
        if let Some(brand_id) = brand_id {
            payload = payload.with_brand_id(brand_id);
        }
        self.repo
            .create_product(&payload)
            .expect("create product")
            .id
    }
}
