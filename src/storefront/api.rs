//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI goes
//! through [`StorefrontApi`]; it never touches the terminal.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Applies settings** from [`StorefrontConfig`] (page sizes, suggestion limits)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business logic belongs in `commands/*.rs`. Output formatting belongs in
//! the CLI.
//!
//! ## Generic Over Catalog and Authenticator
//!
//! `StorefrontApi<C: Catalog, A: Authenticator>` runs the same way against
//! the bundled catalog and against a test fixture. Shopper state is a
//! [`Session`] owned by the caller and passed in where an operation needs it.

use crate::auth::Authenticator;
use crate::commands;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::model::ProductId;
use crate::query::ListingQuery;
use crate::session::Session;
use crate::store::Catalog;
use chrono::NaiveDate;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Where a remote catalog would live. Nothing in this crate calls it yet.
pub const API_BASE_URL: &str = "http://localhost:8080/api";

pub struct StorefrontApi<C: Catalog, A: Authenticator> {
    catalog: C,
    auth: A,
    config: StorefrontConfig,
    home: PathBuf,
}

impl<C: Catalog, A: Authenticator> StorefrontApi<C, A> {
    pub fn new(catalog: C, auth: A, config: StorefrontConfig, home: PathBuf) -> Self {
        Self {
            catalog,
            auth,
            config,
            home,
        }
    }

    pub async fn browse(
        &self,
        slug: &str,
        sub_slug: Option<&str>,
        query: &ListingQuery,
    ) -> Result<commands::CmdResult> {
        commands::browse::run(
            &self.catalog,
            slug,
            sub_slug,
            query,
            self.config.browse_page_size,
        )
        .await
    }

    pub async fn search(&self, query: &ListingQuery) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, query, self.config.search_page_size).await
    }

    pub async fn view(&self, id: ProductId) -> Result<commands::CmdResult> {
        commands::view::run(&self.catalog, id).await
    }

    pub async fn suggest(&self, text: &str) -> Result<commands::CmdResult> {
        commands::suggest::run(
            &self.catalog,
            text,
            self.config.suggestion_min_chars,
            self.config.suggestion_limit,
        )
        .await
    }

    pub async fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.catalog).await
    }

    pub async fn new_arrivals<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<commands::CmdResult> {
        commands::new_arrivals::run(&self.catalog, rng, self.config.new_arrivals).await
    }

    pub async fn random_in_category<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        name: &str,
        count: usize,
    ) -> Result<commands::CmdResult> {
        commands::new_arrivals::in_category(&self.catalog, rng, name, count).await
    }

    pub async fn vouchers(&self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::vouchers::run(&self.catalog, today).await
    }

    pub async fn login(
        &self,
        session: &mut Session,
        identifier: &str,
        password: &str,
    ) -> Result<commands::CmdResult> {
        commands::auth::login(&self.auth, session, identifier, password).await
    }

    pub async fn register(
        &self,
        session: &mut Session,
        identifier: &str,
        password: &str,
    ) -> Result<commands::CmdResult> {
        commands::auth::register(&self.auth, session, identifier, password).await
    }

    pub fn logout(&self, session: &mut Session) -> commands::CmdResult {
        commands::auth::logout(session)
    }

    pub async fn add_to_cart(
        &self,
        session: &mut Session,
        id: ProductId,
        size: Option<&str>,
        quantity: u32,
    ) -> Result<commands::CmdResult> {
        commands::cart::add(&self.catalog, session, id, size, quantity).await
    }

    pub fn remove_from_cart(
        &self,
        session: &mut Session,
        id: ProductId,
        size: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::cart::remove(session, id, size)
    }

    pub async fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.catalog).await
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.home, action)
    }

    /// Settings in effect for this instance.
    pub fn settings(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, Facets, MessageLevel, VoucherView};
