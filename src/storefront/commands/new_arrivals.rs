use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Catalog;
use rand::seq::SliceRandom;
use rand::Rng;

/// A random pick of `count` products for the home page.
pub async fn run<C, R>(catalog: &C, rng: &mut R, count: usize) -> Result<CmdResult>
where
    C: Catalog + ?Sized,
    R: Rng + ?Sized,
{
    let mut products = catalog.list_all().await?;
    products.shuffle(rng);
    products.truncate(count);
    Ok(CmdResult::default().with_products(products))
}

/// A random pick of `count` products from one category (by name).
pub async fn in_category<C, R>(catalog: &C, rng: &mut R, name: &str, count: usize) -> Result<CmdResult>
where
    C: Catalog + ?Sized,
    R: Rng + ?Sized,
{
    let mut products = catalog.list_by_category(name).await?;
    products.shuffle(rng);
    products.truncate(count);
    Ok(CmdResult::default().with_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryCatalog;
    use crate::store::seed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[tokio::test]
    async fn picks_distinct_products() {
        let catalog = InMemoryCatalog::bundled();
        let mut rng = StdRng::seed_from_u64(7);
        let res = run(&catalog, &mut rng, 8).await.unwrap();
        assert_eq!(res.products.len(), 8);
        let ids: HashSet<_> = res.products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 8);
    }

    #[tokio::test]
    async fn same_seed_same_pick() {
        let catalog = InMemoryCatalog::bundled();
        let a = run(&catalog, &mut StdRng::seed_from_u64(1), 8).await.unwrap();
        let b = run(&catalog, &mut StdRng::seed_from_u64(1), 8).await.unwrap();
        assert_eq!(a.products, b.products);
    }

    #[tokio::test]
    async fn category_pick_is_capped_by_category_size() {
        let catalog = InMemoryCatalog::bundled();
        let mut rng = StdRng::seed_from_u64(3);
        let res = in_category(&catalog, &mut rng, seed::MEN, 8).await.unwrap();
        assert_eq!(res.products.len(), 7);
        assert!(res
            .products
            .iter()
            .all(|p| p.category.as_deref() == Some(seed::MEN)));
    }
}
