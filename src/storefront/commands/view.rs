use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ProductId;
use crate::store::Catalog;

use super::helpers::require_product;

/// Product detail. A missing id is `StoreError::NotFound`.
pub async fn run<C: Catalog + ?Sized>(catalog: &C, id: ProductId) -> Result<CmdResult> {
    let product = require_product(catalog, id).await?;
    Ok(CmdResult::default().with_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::memory::InMemoryCatalog;

    #[tokio::test]
    async fn shows_one_product() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, ProductId(6)).await.unwrap();
        assert_eq!(res.products.len(), 1);
        assert_eq!(res.products[0].title, "Áo khoác nữ blazer");
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let catalog = InMemoryCatalog::bundled();
        let err = run(&catalog, ProductId(404)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ProductId(404))));
        assert!(err.is_not_found());
    }
}
