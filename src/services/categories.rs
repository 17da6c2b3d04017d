use crate::domain::category::{Category, CategoryListQuery};
use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetch a single category with its discounts.
pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)?
        .ok_or(ServiceError::NotFound)
}

/// List categories, optionally filtered by a name search term.
pub fn list_categories<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    let mut query = CategoryListQuery::new();
    if let Some(term) = search {
        query = query.search(term);
    }

    let (_, categories) = repo.list_categories(query)?;
    Ok(categories)
}

/// Create a category from the admin form.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category).map_err(ServiceError::from)
}

/// Edit an existing category from the admin form.
pub fn modify_category<R>(repo: &R, form: EditCategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let category_id = form.category_id;

    let update = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &update)
        .map_err(ServiceError::from)
}

/// Delete a category and detach it from every product.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id).map_err(ServiceError::from)
}

/// Replace the category's full discount set. Products in the category
/// inherit the new set immediately; the next product save re-validates it.
pub fn assign_discounts<R>(repo: &R, category_id: i32, discount_ids: &[i32]) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    repo.replace_category_discounts(category_id, discount_ids)
        .map_err(ServiceError::from)
}
