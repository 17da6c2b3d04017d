use serde::{Deserialize, Serialize};

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::discount::Discount;
use crate::domain::product::{Product, ProductListQuery, UpdateProduct};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::pricing::{PricedDiscount, select_effective_discount, validate_discount_assignment};
use crate::repository::{CategoryReader, DiscountReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the storefront products listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional search string entered by the shopper.
    pub search: Option<String>,
    /// Brand names selected in the filter sidebar.
    #[serde(default)]
    pub brands: Vec<String>,
    /// Category names selected in the filter sidebar.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Optional lower bound on the base price.
    pub min_price: Option<f64>,
    /// Optional upper bound on the base price.
    pub max_price: Option<f64>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// View model of a product with its discounts priced, shaped for the API
/// response.
#[derive(Debug, Clone, Serialize)]
pub struct PricedProduct {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_src: Option<String>,
    pub default_price: f64,
    pub brand: Option<Brand>,
    pub categories: Vec<Category>,
    /// Every applicable discount, priced and sorted ascending by final price.
    pub discounts: Vec<PricedDiscount>,
    /// The effective discount shown as the primary promotional price, or
    /// `None` when no discount applies.
    pub discount: Option<PricedDiscount>,
}

impl PricedProduct {
    /// Run the pricing engine over the product's assembled discount list.
    pub fn from_product(product: Product) -> Self {
        let selected = select_effective_discount(&product.discounts, product.default_price);

        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            image_src: product.image_src,
            default_price: product.default_price,
            brand: product.brand,
            categories: product.categories,
            discounts: selected.discounts,
            discount: selected.discount,
        }
    }
}

/// Fetch a single product with its discounts priced.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<PricedProduct>
where
    R: ProductReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(PricedProduct::from_product(product))
}

/// Load a storefront page of products matching the filter sidebar selection.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Paginated<PricedProduct>>
where
    R: ProductReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = query.search.as_ref() {
        list_query = list_query.search(term);
    }

    if !query.brands.is_empty() {
        list_query = list_query.brands(query.brands.iter().cloned());
    }

    if !query.categories.is_empty() {
        list_query = list_query.categories(query.categories.iter().cloned());
    }

    if query.min_price.is_some() || query.max_price.is_some() {
        list_query = list_query.price_between(
            query.min_price.unwrap_or(0.0),
            query.max_price.unwrap_or(f64::MAX),
        );
    }

    let (total, items) = repo.list_products(list_query)?;

    let priced: Vec<PricedProduct> = items.into_iter().map(PricedProduct::from_product).collect();
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(priced, page, total_pages))
}

/// Search products by a name substring, without pagination.
pub fn search_products<R>(repo: &R, term: &str) -> ServiceResult<Vec<PricedProduct>>
where
    R: ProductReader + ?Sized,
{
    let (_, items) = repo.list_products(ProductListQuery::new().search(term))?;
    Ok(items.into_iter().map(PricedProduct::from_product).collect())
}

/// Create a product from the admin form, validating every discount it would
/// inherit before anything is persisted.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<PricedProduct>
where
    R: ProductReader + ProductWriter + CategoryReader + DiscountReader + ?Sized,
{
    let payload = form
        .into_payload()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    validate_assignment(
        repo,
        payload.product.default_price,
        &payload.categories,
        &payload.discounts,
    )?;

    let created = repo.create_product(&payload.product)?;

    if let Err(err) = attach_assignments(repo, created.id, &payload.categories, &payload.discounts)
    {
        log::error!("failed to attach assignments to product {}: {err}", created.id);
        if let Err(delete_err) = repo.delete_product(created.id) {
            log::error!(
                "failed to roll back product {} after assignment error: {delete_err}",
                created.id
            );
        }
        return Err(err);
    }

    get_product(repo, created.id)
}

/// Edit a product from the admin form, re-validating the discount
/// assignment against the (possibly updated) base price.
pub fn modify_product<R>(repo: &R, form: EditProductForm) -> ServiceResult<PricedProduct>
where
    R: ProductReader + ProductWriter + CategoryReader + DiscountReader + ?Sized,
{
    let payload = form
        .into_payload()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let existing = repo
        .get_product_by_id(payload.product_id)?
        .ok_or(ServiceError::NotFound)?;

    let base_price = payload
        .updates
        .default_price
        .unwrap_or(existing.default_price);

    validate_assignment(repo, base_price, &payload.categories, &payload.discounts)?;

    repo.update_product(payload.product_id, &payload.updates)?;

    if let Err(err) =
        attach_assignments(repo, payload.product_id, &payload.categories, &payload.discounts)
    {
        log::error!(
            "failed to attach assignments to product {}: {err}",
            payload.product_id
        );
        if let Err(restore_err) = restore_product(repo, &existing) {
            log::error!(
                "failed to restore product {} after assignment error: {restore_err}",
                payload.product_id
            );
        }
        return Err(err);
    }

    get_product(repo, payload.product_id)
}

/// Delete a product.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

/// Validate the discounts a product would carry after saving: the ones
/// attached directly, and the ones inherited from each assigned category.
/// Every candidate must leave the base price above zero; the first failure
/// aborts the save before any persistence happens.
fn validate_assignment<R>(
    repo: &R,
    base_price: f64,
    category_ids: &[i32],
    discount_ids: &[i32],
) -> ServiceResult<()>
where
    R: CategoryReader + DiscountReader + ?Sized,
{
    let discounts: Vec<Discount> = repo.get_discounts_by_ids(discount_ids)?;
    validate_discount_assignment(base_price, &discounts)?;

    let categories = repo.get_categories_by_ids(category_ids)?;
    for category in &categories {
        validate_discount_assignment(base_price, &category.discounts)?;
    }

    Ok(())
}

/// Write a pre-edit snapshot back: every product field plus both
/// assignment sets, so an aborted edit leaves nothing half-applied.
fn restore_product<R>(repo: &R, snapshot: &Product) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let updates = UpdateProduct::new()
        .name(snapshot.name.clone())
        .description(snapshot.description.clone())
        .image_src(snapshot.image_src.clone())
        .default_price(snapshot.default_price)
        .brand_id(snapshot.brand_id);
    repo.update_product(snapshot.id, &updates)?;

    let category_ids: Vec<i32> = snapshot
        .categories
        .iter()
        .map(|category| category.id)
        .collect();
    attach_assignments(repo, snapshot.id, &category_ids, &own_discount_ids(snapshot))
}

/// Recover the product's directly-attached discount ids from a hydrated
/// snapshot. The assembled list starts with the product's own discounts,
/// followed by the inherited category and brand ones.
fn own_discount_ids(product: &Product) -> Vec<i32> {
    let inherited: usize = product
        .categories
        .iter()
        .map(|category| category.discounts.len())
        .sum::<usize>()
        + product
            .brand
            .as_ref()
            .map_or(0, |brand| brand.discounts.len());

    let own_len = product.discounts.len().saturating_sub(inherited);
    product.discounts[..own_len]
        .iter()
        .map(|discount| discount.id)
        .collect()
}

fn attach_assignments<R>(
    repo: &R,
    product_id: i32,
    category_ids: &[i32],
    discount_ids: &[i32],
) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.replace_product_categories(product_id, category_ids)?;
    repo.replace_product_discounts(product_id, discount_ids)?;
    Ok(())
}
