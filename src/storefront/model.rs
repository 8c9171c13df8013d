use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(0) | Err(_) => Err(format!("Invalid product id: {}", s)),
            Ok(n) => Ok(ProductId(n)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Price in đồng; the currency has no minor unit.
    pub price: u64,
    pub images: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    /// Display name of the owning category (e.g. "NAM"), not its slug.
    pub category: Option<String>,
    /// Slug of a subcategory under `category`.
    pub sub_category: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl Product {
    pub fn new(id: u32, title: impl Into<String>, price: u64) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            price,
            images: vec![format!("/assets/product{}-1.webp", id)],
            badges: Vec::new(),
            category: None,
            sub_category: None,
            sizes: Vec::new(),
        }
    }

    pub fn in_category(mut self, category: &str, sub_category: &str) -> Self {
        self.category = Some(category.to_string());
        self.sub_category = Some(sub_category.to_string());
        self
    }

    pub fn with_sizes(mut self, sizes: &[&str]) -> Self {
        self.sizes = sizes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badges.push(badge.to_string());
        self
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: u32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub sub_categories: Vec<SubCategory>,
}

impl Category {
    pub fn sub_category(&self, slug: &str) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|sc| sc.slug == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub expires_on: NaiveDate,
    pub condition: String,
}

impl Voucher {
    /// A voucher stays usable through the whole of its expiry day.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        day <= self.expires_on
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}
