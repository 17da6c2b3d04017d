use tienda_catalog::domain::discount::DiscountType;
use tienda_catalog::domain::product::ProductListQuery;
use tienda_catalog::repository::{
    BrandWriter, CategoryWriter, DiscountWriter, ProductReader, ProductWriter, RepositoryError,
};

mod common;

use common::TestCatalog;

#[test]
fn product_discounts_assemble_in_product_category_brand_order() {
    let catalog = TestCatalog::new();
    let repo = catalog.repo();

    let brand_id = catalog.add_brand("Fender");
    let category_id = catalog.add_category("Guitars");
    let product_id = catalog.add_product("Stratocaster", 1000.0, Some(brand_id));

    let brand_discount = catalog.add_discount("brand promo", DiscountType::Percentage, 5.0);
    let category_discount = catalog.add_discount("category promo", DiscountType::Fixed, 20.0);
    let own_discount = catalog.add_discount("own promo", DiscountType::Fixed, 10.0);

    repo.replace_brand_discounts(brand_id, &[brand_discount])
        .expect("assign brand discount");
    repo.replace_category_discounts(category_id, &[category_discount])
        .expect("assign category discount");
    repo.replace_product_categories(product_id, &[category_id])
        .expect("assign category");
    repo.replace_product_discounts(product_id, &[own_discount])
        .expect("assign own discount");

    let product = repo
        .get_product_by_id(product_id)
        .expect("fetch product")
        .expect("product should exist");

    let discount_ids: Vec<i32> = product.discounts.iter().map(|discount| discount.id).collect();
    assert_eq!(discount_ids, vec![own_discount, category_discount, brand_discount]);

    assert_eq!(product.brand.as_ref().map(|brand| brand.id), Some(brand_id));
    assert_eq!(product.categories.len(), 1);
    assert_eq!(product.categories[0].id, category_id);
}

#[test]
fn replacing_discounts_discards_the_previous_set() {
    let catalog = TestCatalog::new();
    let repo = catalog.repo();

    let product_id = catalog.add_product("Pedal", 50.0, None);
    let first = catalog.add_discount("first", DiscountType::Fixed, 5.0);
    let second = catalog.add_discount("second", DiscountType::Fixed, 10.0);

    repo.replace_product_discounts(product_id, &[first])
        .expect("first assignment");
    repo.replace_product_discounts(product_id, &[second])
        .expect("second assignment");

    let product = repo
        .get_product_by_id(product_id)
        .expect("fetch product")
        .expect("product should exist");

    let discount_ids: Vec<i32> = product.discounts.iter().map(|discount| discount.id).collect();
    assert_eq!(discount_ids, vec![second]);
}

#[test]
fn replacing_with_unknown_discount_fails_without_mutating() {
    let catalog = TestCatalog::new();
    let repo = catalog.repo();

    let product_id = catalog.add_product("Pedal", 50.0, None);
    let known = catalog.add_discount("known", DiscountType::Fixed, 5.0);

    repo.replace_product_discounts(product_id, &[known])
        .expect("initial assignment");

    let result = repo.replace_product_discounts(product_id, &[known, 9999]);
    assert!(matches!(result, Err(RepositoryError::NotFound)));

    let product = repo
        .get_product_by_id(product_id)
        .expect("fetch product")
        .expect("product should exist");
    assert_eq!(product.discounts.len(), 1);
    assert_eq!(product.discounts[0].id, known);
}

#[test]
fn deleting_a_discount_detaches_it_everywhere() {
    let catalog = TestCatalog::new();
    let repo = catalog.repo();

    let brand_id = catalog.add_brand("Fender");
    let category_id = catalog.add_category("Guitars");
    let product_id = catalog.add_product("Stratocaster", 1000.0, Some(brand_id));
    let discount_id = catalog.add_discount("everywhere", DiscountType::Fixed, 10.0);

    repo.replace_brand_discounts(brand_id, &[discount_id])
        .expect("assign brand discount");
    repo.replace_category_discounts(category_id, &[discount_id])
        .expect("assign category discount");
    repo.replace_product_categories(product_id, &[category_id])
        .expect("assign category");
    repo.replace_product_discounts(product_id, &[discount_id])
        .expect("assign own discount");

    repo.delete_discount(discount_id).expect("delete discount");

    let product = repo
        .get_product_by_id(product_id)
        .expect("fetch product")
        .expect("product should exist");
    assert!(product.discounts.is_empty());
}

#[test]
fn list_products_composes_filters_and_pagination() {
    let catalog = TestCatalog::new();
    let repo = catalog.repo();

    let fender = catalog.add_brand("Fender");
    let gibson = catalog.add_brand("Gibson");
    let guitars = catalog.add_category("Guitars");
    let basses = catalog.add_category("Basses");

    let strat = catalog.add_product("Stratocaster", 1200.0, Some(fender));
    let tele = catalog.add_product("Telecaster", 900.0, Some(fender));
    let les_paul = catalog.add_product("Les Paul", 2500.0, Some(gibson));
    let jazz_bass = catalog.add_product("Jazz Bass", 1100.0, Some(fender));

    repo.replace_product_categories(strat, &[guitars])
        .expect("assign category");
    repo.replace_product_categories(tele, &[guitars])
        .expect("assign category");
    repo.replace_product_categories(les_paul, &[guitars])
        .expect("assign category");
    repo.replace_product_categories(jazz_bass, &[basses])
        .expect("assign category");

    // Brand filter.
    let (total, items) = repo
        .list_products(ProductListQuery::new().brands(["Fender"]))
        .expect("list by brand");
    assert_eq!(total, 3);
    assert!(items.iter().all(|product| product.brand_id == Some(fender)));

    // Brand and category filters compose.
    let (total, items) = repo
        .list_products(ProductListQuery::new().brands(["Fender"]).categories(["Guitars"]))
        .expect("list by brand and category");
    assert_eq!(total, 2);
    let names: Vec<&str> = items.iter().map(|product| product.name.as_str()).collect();
    assert_eq!(names, vec!["Stratocaster", "Telecaster"]);

    // Price range.
    let (total, _) = repo
        .list_products(ProductListQuery::new().price_between(1000.0, 2000.0))
        .expect("list by price");
    assert_eq!(total, 2);

    // Search is case-insensitive.
    let (total, items) = repo
        .list_products(ProductListQuery::new().search("caster"))
        .expect("list by search");
    assert_eq!(total, 2);
    assert!(items.iter().all(|product| product.name.contains("caster")));

    // Pagination reports the full match count but returns one page.
    let (total, items) = repo
        .list_products(ProductListQuery::new().paginate(1, 3))
        .expect("list first page");
    assert_eq!(total, 4);
    assert_eq!(items.len(), 3);

    let (_, items) = repo
        .list_products(ProductListQuery::new().paginate(2, 3))
        .expect("list second page");
    assert_eq!(items.len(), 1);
}

#[test]
fn deleting_a_brand_detaches_its_products() {
    let catalog = TestCatalog::new();
    let repo = catalog.repo();

    let brand_id = catalog.add_brand("Fender");
    let product_id = catalog.add_product("Stratocaster", 1000.0, Some(brand_id));

    repo.delete_brand(brand_id).expect("delete brand");

    let product = repo
        .get_product_by_id(product_id)
        .expect("fetch product")
        .expect("product should exist");
    assert_eq!(product.brand_id, None);
    assert!(product.brand.is_none());
}
