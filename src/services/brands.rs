use crate::domain::brand::{Brand, BrandListQuery};
use crate::forms::brands::{AddBrandForm, EditBrandForm};
use crate::repository::{BrandReader, BrandWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetch a single brand with its discounts.
pub fn get_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<Brand>
where
    R: BrandReader + ?Sized,
{
    repo.get_brand_by_id(brand_id)?.ok_or(ServiceError::NotFound)
}

/// List brands, optionally filtered by a name search term.
pub fn list_brands<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Brand>>
where
    R: BrandReader + ?Sized,
{
    let mut query = BrandListQuery::new();
    if let Some(term) = search {
        query = query.search(term);
    }

    let (_, brands) = repo.list_brands(query)?;
    Ok(brands)
}

/// Create a brand from the admin form.
pub fn create_brand<R>(repo: &R, form: AddBrandForm) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    let new_brand = form
        .into_new_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_brand(&new_brand).map_err(ServiceError::from)
}

/// Edit an existing brand from the admin form.
pub fn modify_brand<R>(repo: &R, form: EditBrandForm) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    let brand_id = form.brand_id;

    let update = form
        .into_update_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_brand(brand_id, &update).map_err(ServiceError::from)
}

/// Delete a brand; its products stay in the catalog without a brand.
pub fn remove_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<()>
where
    R: BrandWriter + ?Sized,
{
    repo.delete_brand(brand_id).map_err(ServiceError::from)
}

/// Replace the brand's full discount set. Products of the brand inherit the
/// new set immediately; the next product save re-validates it.
pub fn assign_discounts<R>(repo: &R, brand_id: i32, discount_ids: &[i32]) -> ServiceResult<()>
where
    R: BrandWriter + ?Sized,
{
    repo.replace_brand_discounts(brand_id, discount_ids)
        .map_err(ServiceError::from)
}
