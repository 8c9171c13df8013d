//! # Catalog Layer
//!
//! This module defines the read-only catalog abstraction. The [`Catalog`]
//! trait lets the rest of the crate run against any product source.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryCatalog`]: serves the bundled [`seed`] data, or any
//!   product list handed to it, with an optional simulated network delay.
//!
//! ## Read semantics
//!
//! Every call hands back owned copies. Callers are free to filter, sort
//! and slice what they get without touching the source, and two identical
//! calls always return identical data.
//!
//! Lookups never fail for a missing record: `get_by_id` returns `Ok(None)`
//! and the list operations return an empty vec.

use crate::error::Result;
use crate::model::{Category, Product, ProductId, Voucher};
use async_trait::async_trait;
use std::collections::HashSet;

pub mod memory;
pub mod seed;

/// Read interface over the product catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Every product, in catalog order.
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// Products whose category name matches exactly (case-sensitive).
    async fn list_by_category(&self, name: &str) -> Result<Vec<Product>>;

    /// Products whose subcategory slug matches exactly.
    async fn list_by_sub_category(&self, slug: &str) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>>;

    async fn categories(&self) -> Result<Vec<Category>>;

    async fn vouchers(&self) -> Result<Vec<Voucher>>;
}

/// A single inconsistency found by [`check_integrity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    DuplicateId(ProductId),
    EmptyTitle(ProductId),
    MissingImage(ProductId),
    UnknownCategory { product: ProductId, category: String },
    UnknownSubCategory {
        product: ProductId,
        category: String,
        sub_category: String,
    },
    /// A subcategory was set without a category to scope it.
    OrphanSubCategory { product: ProductId, sub_category: String },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityIssue::DuplicateId(id) => write!(f, "product id {} is used more than once", id),
            IntegrityIssue::EmptyTitle(id) => write!(f, "product {} has an empty title", id),
            IntegrityIssue::MissingImage(id) => write!(f, "product {} has no images", id),
            IntegrityIssue::UnknownCategory { product, category } => {
                write!(f, "product {} references unknown category '{}'", product, category)
            }
            IntegrityIssue::UnknownSubCategory {
                product,
                category,
                sub_category,
            } => write!(
                f,
                "product {} references subcategory '{}' which is not under '{}'",
                product, sub_category, category
            ),
            IntegrityIssue::OrphanSubCategory {
                product,
                sub_category,
            } => write!(
                f,
                "product {} has subcategory '{}' but no category",
                product, sub_category
            ),
        }
    }
}

/// Report from the `check` operation.
#[derive(Debug, Default)]
pub struct IntegrityReport {
    pub products_checked: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates products against the category tree.
pub fn check_integrity(products: &[Product], categories: &[Category]) -> IntegrityReport {
    let mut report = IntegrityReport {
        products_checked: products.len(),
        issues: Vec::new(),
    };
    let mut seen = HashSet::new();

    for product in products {
        if !seen.insert(product.id) {
            report.issues.push(IntegrityIssue::DuplicateId(product.id));
        }
        if product.title.trim().is_empty() {
            report.issues.push(IntegrityIssue::EmptyTitle(product.id));
        }
        if product.images.is_empty() {
            report.issues.push(IntegrityIssue::MissingImage(product.id));
        }

        match (&product.category, &product.sub_category) {
            (Some(name), sub) => {
                let Some(category) = categories.iter().find(|c| &c.name == name) else {
                    report.issues.push(IntegrityIssue::UnknownCategory {
                        product: product.id,
                        category: name.clone(),
                    });
                    continue;
                };
                if let Some(sub) = sub {
                    if category.sub_category(sub).is_none() {
                        report.issues.push(IntegrityIssue::UnknownSubCategory {
                            product: product.id,
                            category: name.clone(),
                            sub_category: sub.clone(),
                        });
                    }
                }
            }
            (None, Some(sub)) => report.issues.push(IntegrityIssue::OrphanSubCategory {
                product: product.id,
                sub_category: sub.clone(),
            }),
            (None, None) => {}
        }
    }

    report
}
