use super::{seed, Catalog};
use crate::error::Result;
use crate::model::{Category, Product, ProductId, Voucher};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// In-memory catalog. Does NOT persist anything.
///
/// Clones are cheap: the underlying lists are shared.
#[derive(Clone)]
pub struct InMemoryCatalog {
    products: Arc<Vec<Product>>,
    categories: Arc<Vec<Category>>,
    vouchers: Arc<Vec<Voucher>>,
    latency: Duration,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl InMemoryCatalog {
    /// The catalog shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_parts(
            seed::PRODUCTS.clone(),
            seed::CATEGORIES.clone(),
            seed::VOUCHERS.clone(),
        )
    }

    pub fn from_parts(
        products: Vec<Product>,
        categories: Vec<Category>,
        vouchers: Vec<Voucher>,
    ) -> Self {
        Self {
            products: Arc::new(products),
            categories: Arc::new(categories),
            vouchers: Arc::new(vouchers),
            latency: Duration::ZERO,
        }
    }

    /// Delay applied before every read, standing in for a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn select(&self, pred: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products.iter().filter(|p| pred(p)).cloned().collect()
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.round_trip().await;
        tracing::debug!(count = self.products.len(), "listing all products");
        Ok(self.products.as_ref().clone())
    }

    async fn list_by_category(&self, name: &str) -> Result<Vec<Product>> {
        self.round_trip().await;
        let found = self.select(|p| p.category.as_deref() == Some(name));
        tracing::debug!(category = name, count = found.len(), "listing category");
        Ok(found)
    }

    async fn list_by_sub_category(&self, slug: &str) -> Result<Vec<Product>> {
        self.round_trip().await;
        let found = self.select(|p| p.sub_category.as_deref() == Some(slug));
        tracing::debug!(sub_category = slug, count = found.len(), "listing subcategory");
        Ok(found)
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        self.round_trip().await;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.round_trip().await;
        Ok(self.categories.as_ref().clone())
    }

    async fn vouchers(&self) -> Result<Vec<Voucher>> {
        self.round_trip().await;
        Ok(self.vouchers.as_ref().clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds small catalogs for tests that should not depend on the seed data.
    pub struct CatalogFixture {
        products: Vec<Product>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                products: Vec::new(),
            }
        }

        /// Adds `count` uncategorised products priced 1000, 2000, ...
        pub fn with_products(mut self, count: usize) -> Self {
            let start = self.products.len() as u32;
            for i in 0..count as u32 {
                let id = start + i + 1;
                self.products
                    .push(Product::new(id, format!("Product {}", id), u64::from(id) * 1000));
            }
            self
        }

        pub fn with_product(mut self, product: Product) -> Self {
            self.products.push(product);
            self
        }

        pub fn build(self) -> InMemoryCatalog {
            InMemoryCatalog::from_parts(self.products, seed::CATEGORIES.clone(), Vec::new())
        }
    }
}
