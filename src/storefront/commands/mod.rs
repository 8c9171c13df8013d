use crate::cart::Cart;
use crate::config::StorefrontConfig;
use crate::model::{Category, Product, User, Voucher};
use crate::pipeline::paginate::{Page, PageWindow};
use crate::store::IntegrityReport;
use serde::Serialize;

pub mod auth;
pub mod browse;
pub mod cart;
pub mod categories;
pub mod check;
pub mod config;
pub mod helpers;
pub mod new_arrivals;
pub mod search;
pub mod suggest;
pub mod view;
pub mod vouchers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Facet values offered next to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Category names, in first-seen catalog order.
    pub categories: Vec<String>,
    /// Size labels, sorted.
    pub sizes: Vec<String>,
}

/// A voucher as shown on a given day.
#[derive(Debug, Clone, Serialize)]
pub struct VoucherView {
    pub voucher: Voucher,
    pub active: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// The page of products, for listing commands.
    pub listing: Option<Page<Product>>,
    /// Pages 1 through the current one, for "load more" listings.
    pub shown: Option<Vec<Product>>,
    /// Page-number navigation, for listings that replace pages.
    pub page_window: Option<PageWindow>,
    /// Products without paging: lookups, suggestions, picks.
    pub products: Vec<Product>,
    pub facets: Option<Facets>,
    pub categories: Vec<Category>,
    pub vouchers: Vec<VoucherView>,
    #[serde(skip)]
    pub integrity: Option<IntegrityReport>,
    pub config: Option<StorefrontConfig>,
    /// Who is signed in after an auth command.
    pub user: Option<User>,
    pub cart: Option<Cart>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, page: Page<Product>) -> Self {
        self.listing = Some(page);
        self
    }

    pub fn with_shown(mut self, shown: Vec<Product>) -> Self {
        self.shown = Some(shown);
        self
    }

    pub fn with_page_window(mut self, window: Option<PageWindow>) -> Self {
        self.page_window = window;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_vouchers(mut self, vouchers: Vec<VoucherView>) -> Self {
        self.vouchers = vouchers;
        self
    }

    pub fn with_integrity(mut self, report: IntegrityReport) -> Self {
        self.integrity = Some(report);
        self
    }

    pub fn with_config(mut self, config: StorefrontConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = Some(cart);
        self
    }
}
