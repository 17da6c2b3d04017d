use crate::domain::brand::{Brand, BrandListQuery, NewBrand, UpdateBrand};
use crate::repository::discount::discounts_for;
use crate::repository::{
    BrandReader, BrandWriter, InMemoryRepository, RepositoryError, RepositoryResult, Store,
    matches_search, paginate,
};

/// Clone a stored brand and hydrate its discount list.
pub(crate) fn hydrate_brand(store: &Store, brand: &Brand) -> Brand {
    let mut brand = brand.clone();
    brand.discounts = discounts_for(store, &store.brand_discounts, brand.id);
    brand
}

impl BrandReader for InMemoryRepository {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>> {
        let store = self.read()?;
        Ok(store
            .brands
            .get(&id)
            .map(|brand| hydrate_brand(&store, brand)))
    }

    fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<(usize, Vec<Brand>)> {
        let store = self.read()?;

        let matches: Vec<Brand> = store
            .brands
            .values()
            .filter(|brand| match query.search.as_ref() {
                Some(term) => matches_search(&brand.name, term),
                None => true,
            })
            .map(|brand| hydrate_brand(&store, brand))
            .collect();

        let total = matches.len();
        Ok((total, paginate(matches, query.pagination.as_ref())))
    }
}

impl BrandWriter for InMemoryRepository {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand> {
        let mut store = self.write()?;
        let id = store.next_id();

        let brand = Brand {
            id,
            name: new_brand.name.clone(),
            logo: new_brand.logo.clone(),
            discounts: Vec::new(),
            created_at: new_brand.updated_at,
            updated_at: new_brand.updated_at,
        };

        store.brands.insert(id, brand.clone());
        Ok(brand)
    }

    fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand> {
        let mut store = self.write()?;
        let brand = store
            .brands
            .get_mut(&brand_id)
            .ok_or(RepositoryError::NotFound)?;

        brand.name = updates.name.clone();
        if let Some(logo) = updates.logo.as_ref() {
            brand.logo = Some(logo.clone());
        }
        brand.updated_at = updates.updated_at;

        let brand = brand.clone();
        Ok(hydrate_brand(&store, &brand))
    }

    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        store
            .brands
            .remove(&brand_id)
            .ok_or(RepositoryError::NotFound)?;

        store.brand_discounts.retain(|(brand, _)| *brand != brand_id);

        // Products of a deleted brand stay in the catalog without a brand.
        for product in store.products.values_mut() {
            if product.brand_id == Some(brand_id) {
                product.brand_id = None;
            }
        }

        Ok(())
    }

    fn replace_brand_discounts(
        &self,
        brand_id: i32,
        discount_ids: &[i32],
    ) -> RepositoryResult<()> {
        let mut store = self.write()?;
        if !store.brands.contains_key(&brand_id) {
            return Err(RepositoryError::NotFound);
        }

        if discount_ids
            .iter()
            .any(|discount_id| !store.discounts.contains_key(discount_id))
        {
            return Err(RepositoryError::NotFound);
        }

        store.brand_discounts.retain(|(brand, _)| *brand != brand_id);
        store
            .brand_discounts
            .extend(discount_ids.iter().map(|discount_id| (brand_id, *discount_id)));

        Ok(())
    }
}
