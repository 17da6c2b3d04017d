use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::repository::brand::hydrate_brand;
use crate::repository::category::hydrate_category;
use crate::repository::discount::discounts_for;
use crate::repository::{
    InMemoryRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult, Store,
    matches_search, paginate,
};

/// Clone a stored product and hydrate its relations.
///
/// The raw discount list is assembled in the order the pricing engine
/// expects: the product's own discounts, then each assigned category's,
/// then the brand's, each in assignment order.
fn hydrate_product(store: &Store, product: &Product) -> Product {
    let mut product = product.clone();

    product.categories = store
        .product_categories
        .iter()
        .filter(|(product_id, _)| *product_id == product.id)
        .filter_map(|(_, category_id)| store.categories.get(category_id))
        .map(|category| hydrate_category(store, category))
        .collect();

    product.brand = product
        .brand_id
        .and_then(|brand_id| store.brands.get(&brand_id))
        .map(|brand| hydrate_brand(store, brand));

    let mut discounts = discounts_for(store, &store.product_discounts, product.id);
    for category in &product.categories {
        discounts.extend(category.discounts.iter().cloned());
    }
    if let Some(brand) = product.brand.as_ref() {
        discounts.extend(brand.discounts.iter().cloned());
    }
    product.discounts = discounts;

    product
}

fn matches_query(store: &Store, product: &Product, query: &ProductListQuery) -> bool {
    if let Some(term) = query.search.as_ref()
        && !matches_search(&product.name, term)
    {
        return false;
    }

    if let Some((min, max)) = query.price_range
        && (product.default_price < min || product.default_price > max)
    {
        return false;
    }

    if !query.brands.is_empty() {
        let brand_name = product
            .brand_id
            .and_then(|brand_id| store.brands.get(&brand_id))
            .map(|brand| brand.name.as_str());
        match brand_name {
            Some(name) => {
                if !query.brands.iter().any(|wanted| wanted == name) {
                    return false;
                }
            }
            None => return false,
        }
    }

    if !query.categories.is_empty() {
        let has_match = store
            .product_categories
            .iter()
            .filter(|(product_id, _)| *product_id == product.id)
            .filter_map(|(_, category_id)| store.categories.get(category_id))
            .any(|category| query.categories.iter().any(|wanted| *wanted == category.name));
        if !has_match {
            return false;
        }
    }

    true
}

impl ProductReader for InMemoryRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        let store = self.read()?;
        Ok(store
            .products
            .get(&id)
            .map(|product| hydrate_product(&store, product)))
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        let store = self.read()?;

        let matches: Vec<Product> = store
            .products
            .values()
            .filter(|product| matches_query(&store, product, &query))
            .map(|product| hydrate_product(&store, product))
            .collect();

        let total = matches.len();
        Ok((total, paginate(matches, query.pagination.as_ref())))
    }
}

impl ProductWriter for InMemoryRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut store = self.write()?;

        if let Some(brand_id) = new_product.brand_id
            && !store.brands.contains_key(&brand_id)
        {
            return Err(RepositoryError::NotFound);
        }

        let id = store.next_id();
        let product = Product {
            id,
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            image_src: new_product.image_src.clone(),
            default_price: new_product.default_price,
            brand_id: new_product.brand_id,
            brand: None,
            categories: Vec::new(),
            discounts: Vec::new(),
            created_at: new_product.updated_at,
            updated_at: new_product.updated_at,
        };

        store.products.insert(id, product.clone());
        Ok(hydrate_product(&store, &product))
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        let mut store = self.write()?;

        if let Some(Some(brand_id)) = updates.brand_id
            && !store.brands.contains_key(&brand_id)
        {
            return Err(RepositoryError::NotFound);
        }

        let product = store
            .products
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = updates.name.as_ref() {
            product.name = name.clone();
        }
        if let Some(description) = updates.description.as_ref() {
            product.description = description.clone();
        }
        if let Some(image_src) = updates.image_src.as_ref() {
            product.image_src = image_src.clone();
        }
        if let Some(default_price) = updates.default_price {
            product.default_price = default_price;
        }
        if let Some(brand_id) = updates.brand_id {
            product.brand_id = brand_id;
        }
        product.updated_at = updates.updated_at;

        let product = product.clone();
        Ok(hydrate_product(&store, &product))
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        let mut store = self.write()?;
        store
            .products
            .remove(&product_id)
            .ok_or(RepositoryError::NotFound)?;

        store
            .product_categories
            .retain(|(product, _)| *product != product_id);
        store
            .product_discounts
            .retain(|(product, _)| *product != product_id);

        Ok(())
    }

    fn replace_product_categories(
        &self,
        product_id: i32,
        category_ids: &[i32],
    ) -> RepositoryResult<()> {
        let mut store = self.write()?;
        if !store.products.contains_key(&product_id) {
            return Err(RepositoryError::NotFound);
        }

        if category_ids
            .iter()
            .any(|category_id| !store.categories.contains_key(category_id))
        {
            return Err(RepositoryError::NotFound);
        }

        store
            .product_categories
            .retain(|(product, _)| *product != product_id);
        store.product_categories.extend(
            category_ids
                .iter()
                .map(|category_id| (product_id, *category_id)),
        );

        Ok(())
    }

    fn replace_product_discounts(
        &self,
        product_id: i32,
        discount_ids: &[i32],
    ) -> RepositoryResult<()> {
        let mut store = self.write()?;
        if !store.products.contains_key(&product_id) {
            return Err(RepositoryError::NotFound);
        }

        if discount_ids
            .iter()
            .any(|discount_id| !store.discounts.contains_key(discount_id))
        {
            return Err(RepositoryError::NotFound);
        }

        store
            .product_discounts
            .retain(|(product, _)| *product != product_id);
        store.product_discounts.extend(
            discount_ids
                .iter()
                .map(|discount_id| (product_id, *discount_id)),
        );

        Ok(())
    }
}
