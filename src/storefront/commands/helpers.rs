use super::Facets;
use crate::error::{Result, StoreError};
use crate::model::{Category, Product, ProductId};
use crate::store::Catalog;
use std::collections::BTreeSet;

/// Finds a category by its URL slug.
pub async fn resolve_category<C: Catalog + ?Sized>(catalog: &C, slug: &str) -> Result<Category> {
    catalog
        .categories()
        .await?
        .into_iter()
        .find(|c| c.slug == slug)
        .ok_or_else(|| StoreError::InvalidCategory(slug.to_string()))
}

pub async fn require_product<C: Catalog + ?Sized>(catalog: &C, id: ProductId) -> Result<Product> {
    catalog
        .get_by_id(id)
        .await?
        .ok_or(StoreError::NotFound(id))
}

/// Category names in first-seen order and sizes sorted, across `products`.
pub fn facets(products: &[Product]) -> Facets {
    let mut categories: Vec<String> = Vec::new();
    for name in products.iter().filter_map(|p| p.category.as_ref()) {
        if !categories.contains(name) {
            categories.push(name.clone());
        }
    }
    let sizes: BTreeSet<&String> = products.iter().flat_map(|p| p.sizes.iter()).collect();
    Facets {
        categories,
        sizes: sizes.into_iter().cloned().collect(),
    }
}
