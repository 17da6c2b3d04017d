use crate::domain::discount::{Discount, DiscountListQuery};
use crate::forms::discounts::{AddDiscountForm, EditDiscountForm};
use crate::repository::{DiscountReader, DiscountWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetch a single discount.
pub fn get_discount<R>(repo: &R, discount_id: i32) -> ServiceResult<Discount>
where
    R: DiscountReader + ?Sized,
{
    repo.get_discount_by_id(discount_id)?
        .ok_or(ServiceError::NotFound)
}

/// List discounts, optionally filtered by a name search term.
pub fn list_discounts<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Discount>>
where
    R: DiscountReader + ?Sized,
{
    let mut query = DiscountListQuery::new();
    if let Some(term) = search {
        query = query.search(term);
    }

    let (_, discounts) = repo.list_discounts(query)?;
    Ok(discounts)
}

/// Create a discount from the admin form.
pub fn create_discount<R>(repo: &R, form: AddDiscountForm) -> ServiceResult<Discount>
where
    R: DiscountWriter + ?Sized,
{
    let new_discount = form
        .into_new_discount()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_discount(&new_discount).map_err(ServiceError::from)
}

/// Edit an existing discount from the admin form.
///
/// Products already carrying the discount are re-priced on the next read;
/// their assignments are only re-validated on their next save.
pub fn modify_discount<R>(repo: &R, form: EditDiscountForm) -> ServiceResult<Discount>
where
    R: DiscountWriter + ?Sized,
{
    let discount_id = form.discount_id;

    let update = form
        .into_update_discount()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_discount(discount_id, &update)
        .map_err(ServiceError::from)
}

/// Delete a discount, detaching it from every product, category and brand.
pub fn remove_discount<R>(repo: &R, discount_id: i32) -> ServiceResult<()>
where
    R: DiscountWriter + ?Sized,
{
    repo.delete_discount(discount_id).map_err(ServiceError::from)
}
