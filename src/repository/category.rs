use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::repository::discount::discounts_for;
use crate::repository::{
    CategoryReader, CategoryWriter, InMemoryRepository, RepositoryError, RepositoryResult, Store,
    matches_search, paginate,
};

/// Clone a stored category and hydrate its discount list.
pub(crate) fn hydrate_category(store: &Store, category: &Category) -> Category {
    let mut category = category.clone();
    category.discounts = discounts_for(store, &store.category_discounts, category.id);
    category
}

impl CategoryReader for InMemoryRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        let store = self.read()?;
        Ok(store
            .categories
            .get(&id)
            .map(|category| hydrate_category(&store, category)))
    }

    fn get_categories_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Category>> {
        let store = self.read()?;
        ids.iter()
            .map(|id| {
                store
                    .categories
                    .get(id)
                    .map(|category| hydrate_category(&store, category))
                    .ok_or(RepositoryError::NotFound)
            })
            .collect()
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        let store = self.read()?;

        let matches: Vec<Category> = store
            .categories
            .values()
            .filter(|category| match query.search.as_ref() {
                Some(term) => matches_search(&category.name, term),
                None => true,
            })
            .map(|category| hydrate_category(&store, category))
            .collect();

        let total = matches.len();
        Ok((total, paginate(matches, query.pagination.as_ref())))
    }
}

impl CategoryWriter for InMemoryRepository {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        let mut store = self.write()?;
        let id = store.next_id();

        let category = Category {
            id,
            name: new_category.name.clone(),
            cover: new_category.cover.clone(),
            discounts: Vec::new(),
            created_at: new_category.updated_at,
            updated_at: new_category.updated_at,
        };

        store.categories.insert(id, category.clone());
        Ok(category)
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category> {
        let mut store = self.write()?;
        let category = store
            .categories
            .get_mut(&category_id)
            .ok_or(RepositoryError::NotFound)?;

        category.name = updates.name.clone();
        if let Some(cover) = updates.cover.as_ref() {
            category.cover = Some(cover.clone());
        }
        category.updated_at = updates.updated_at;

        let category = category.clone();
        Ok(hydrate_category(&store, &category))
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        store
            .categories
            .remove(&category_id)
            .ok_or(RepositoryError::NotFound)?;

        store
            .category_discounts
            .retain(|(category, _)| *category != category_id);
        store
            .product_categories
            .retain(|(_, category)| *category != category_id);

        Ok(())
    }

    fn replace_category_discounts(
        &self,
        category_id: i32,
        discount_ids: &[i32],
    ) -> RepositoryResult<()> {
        let mut store = self.write()?;
        if !store.categories.contains_key(&category_id) {
            return Err(RepositoryError::NotFound);
        }

        if discount_ids
            .iter()
            .any(|discount_id| !store.discounts.contains_key(discount_id))
        {
            return Err(RepositoryError::NotFound);
        }

        store
            .category_discounts
            .retain(|(category, _)| *category != category_id);
        store.category_discounts.extend(
            discount_ids
                .iter()
                .map(|discount_id| (category_id, *discount_id)),
        );

        Ok(())
    }
}
