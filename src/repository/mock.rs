use mockall::mock;

use super::{
    BrandReader, BrandWriter, CategoryReader, CategoryWriter, DiscountReader, DiscountWriter,
    ProductReader, ProductWriter, RepositoryResult,
};
use crate::domain::{
    brand::{Brand, BrandListQuery, NewBrand, UpdateBrand},
    category::{Category, CategoryListQuery, NewCategory, UpdateCategory},
    discount::{Discount, DiscountListQuery, NewDiscount, UpdateDiscount},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub BrandReader {}

    impl BrandReader for BrandReader {
        fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
        fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<(usize, Vec<Brand>)>;
    }
}

mock! {
    pub DiscountReader {}

    impl DiscountReader for DiscountReader {
        fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>>;
        fn get_discounts_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Discount>>;
        fn list_discounts(&self, query: DiscountListQuery) -> RepositoryResult<(usize, Vec<Discount>)>;
    }
}

// The product save flow reads categories and discounts while writing the
// product, so its mock implements every trait the service requires.
mock! {
    pub ProductSaveRepository {}

    impl ProductReader for ProductSaveRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }

    impl ProductWriter for ProductSaveRepository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
        fn replace_product_categories(&self, product_id: i32, category_ids: &[i32]) -> RepositoryResult<()>;
        fn replace_product_discounts(&self, product_id: i32, discount_ids: &[i32]) -> RepositoryResult<()>;
    }

    impl CategoryReader for ProductSaveRepository {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn get_categories_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    }

    impl DiscountReader for ProductSaveRepository {
        fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>>;
        fn get_discounts_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Discount>>;
        fn list_discounts(&self, query: DiscountListQuery) -> RepositoryResult<(usize, Vec<Discount>)>;
    }
}

mock! {
    pub BrandWriter {}

    impl BrandWriter for BrandWriter {
        fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
        fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
        fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
        fn replace_brand_discounts(&self, brand_id: i32, discount_ids: &[i32]) -> RepositoryResult<()>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
        fn replace_category_discounts(&self, category_id: i32, discount_ids: &[i32]) -> RepositoryResult<()>;
    }
}

mock! {
    pub DiscountWriter {}

    impl DiscountWriter for DiscountWriter {
        fn create_discount(&self, new_discount: &NewDiscount) -> RepositoryResult<Discount>;
        fn update_discount(&self, discount_id: i32, updates: &UpdateDiscount) -> RepositoryResult<Discount>;
        fn delete_discount(&self, discount_id: i32) -> RepositoryResult<()>;
    }
}
