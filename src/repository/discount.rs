use crate::domain::discount::{Discount, DiscountListQuery, NewDiscount, UpdateDiscount};
use crate::repository::{
    DiscountReader, DiscountWriter, InMemoryRepository, RepositoryError, RepositoryResult, Store,
    matches_search, paginate,
};

/// Resolve the discounts assigned to `owner_id` through a join table,
/// keeping the assignment insertion order.
pub(crate) fn discounts_for(store: &Store, joins: &[(i32, i32)], owner_id: i32) -> Vec<Discount> {
    joins
        .iter()
        .filter(|(owner, _)| *owner == owner_id)
        .filter_map(|(_, discount_id)| store.discounts.get(discount_id).cloned())
        .collect()
}

impl DiscountReader for InMemoryRepository {
    fn get_discount_by_id(&self, id: i32) -> RepositoryResult<Option<Discount>> {
        let store = self.read()?;
        Ok(store.discounts.get(&id).cloned())
    }

    fn get_discounts_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Discount>> {
        let store = self.read()?;
        ids.iter()
            .map(|id| {
                store
                    .discounts
                    .get(id)
                    .cloned()
                    .ok_or(RepositoryError::NotFound)
            })
            .collect()
    }

    fn list_discounts(
        &self,
        query: DiscountListQuery,
    ) -> RepositoryResult<(usize, Vec<Discount>)> {
        let store = self.read()?;

        let matches: Vec<Discount> = store
            .discounts
            .values()
            .filter(|discount| match query.search.as_ref() {
                Some(term) => matches_search(&discount.name, term),
                None => true,
            })
            .cloned()
            .collect();

        let total = matches.len();
        Ok((total, paginate(matches, query.pagination.as_ref())))
    }
}

impl DiscountWriter for InMemoryRepository {
    fn create_discount(&self, new_discount: &NewDiscount) -> RepositoryResult<Discount> {
        let mut store = self.write()?;
        let id = store.next_id();

        let discount = Discount {
            id,
            name: new_discount.name.clone(),
            discount_type: new_discount.discount_type,
            value: new_discount.value,
            created_at: new_discount.updated_at,
            updated_at: new_discount.updated_at,
        };

        store.discounts.insert(id, discount.clone());
        Ok(discount)
    }

    fn update_discount(
        &self,
        discount_id: i32,
        updates: &UpdateDiscount,
    ) -> RepositoryResult<Discount> {
        let mut store = self.write()?;
        let discount = store
            .discounts
            .get_mut(&discount_id)
            .ok_or(RepositoryError::NotFound)?;

        discount.name = updates.name.clone();
        discount.discount_type = updates.discount_type;
        discount.value = updates.value;
        discount.updated_at = updates.updated_at;

        Ok(discount.clone())
    }

    fn delete_discount(&self, discount_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        store
            .discounts
            .remove(&discount_id)
            .ok_or(RepositoryError::NotFound)?;

        // Deleting a discount also detaches it everywhere it was assigned.
        store
            .product_discounts
            .retain(|(_, discount)| *discount != discount_id);
        store
            .category_discounts
            .retain(|(_, discount)| *discount != discount_id);
        store
            .brand_discounts
            .retain(|(_, discount)| *discount != discount_id);

        Ok(())
    }
}
