//! Navigation paths.
//!
//! Category routes are matched last: any first segment that is not a
//! reserved page name is taken as a category slug. Whether the slug exists
//! is checked when the listing is loaded, not here.

use crate::model::ProductId;
use crate::query::ListingQuery;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Product(ProductId),
    Search(ListingQuery),
    Category { slug: String, query: ListingQuery },
    SubCategory {
        slug: String,
        sub: String,
        query: ListingQuery,
    },
    Cart,
    Login,
    Register,
    NotFound(String),
}

impl Route {
    pub fn parse(raw: &str) -> Self {
        let (path, query) = match raw.split_once('?') {
            Some((p, q)) => (p, q),
            None => (raw, ""),
        };
        let query = ListingQuery::from_query_string(query);
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            [p, id] if p == "product" => match id.parse() {
                Ok(id) => Route::Product(id),
                Err(_) => Route::NotFound(path.to_string()),
            },
            [p] if p == "search" => Route::Search(query),
            [p] if p == "cart" => Route::Cart,
            [p] if p == "login" => Route::Login,
            [p] if p == "register" => Route::Register,
            [p, ..] if is_reserved(p) => Route::NotFound(path.to_string()),
            [slug] => Route::Category {
                slug: slug.clone(),
                query,
            },
            [slug, sub] => Route::SubCategory {
                slug: slug.clone(),
                sub: sub.clone(),
                query,
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Product(id) => format!("/product/{}", id),
            Route::Search(query) => with_query("/search".to_string(), query),
            Route::Category { slug, query } => {
                with_query(format!("/{}", urlencoding::encode(slug)), query)
            }
            Route::SubCategory { slug, sub, query } => with_query(
                format!("/{}/{}", urlencoding::encode(slug), urlencoding::encode(sub)),
                query,
            ),
            Route::Cart => "/cart".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn is_reserved(segment: &str) -> bool {
    matches!(segment, "product" | "search" | "cart" | "login" | "register")
}

fn with_query(path: String, query: &ListingQuery) -> String {
    let qs = query.to_query_string();
    if qs.is_empty() {
        path
    } else {
        format!("{}?{}", path, qs)
    }
}
