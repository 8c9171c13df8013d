//! # Storefront Architecture
//!
//! Storefront is the **catalog and shopping logic of a clothing shop**, kept
//! apart from any page or terminal. The `storefront` binary is one client of
//! it; a web front end would be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin async facade over commands                          │
//! │  - Applies configured page sizes and limits                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - browse, search, view, suggest, auth, cart, check ...     │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                         │
//!                    ▼                         ▼
//! ┌────────────────────────────┐  ┌─────────────────────────────┐
//! │  Pipeline (pipeline/)      │  │  Catalog (store/)           │
//! │  filter → sort → paginate  │  │  Catalog trait,             │
//! │  pure and synchronous      │  │  InMemoryCatalog + seed     │
//! └────────────────────────────┘  └─────────────────────────────┘
//! ```
//!
//! ## Listing state
//!
//! A listing is fully described by a [`query::ListingQuery`]: search text,
//! category and size facets, sort key, price range and page. It round-trips
//! through a URL query string, so a listing can be bookmarked, shared, or
//! rebuilt after a reload. [`routes::Route`] maps whole paths.
//!
//! ## Shopper state
//!
//! Who is signed in, whether the auth modal is open, and the cart live in a
//! [`session::Session`] owned by the caller. Nothing in the library keeps
//! global state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`pipeline`]: Filtering, Vietnamese-aware sorting and pagination
//! - [`store`]: Catalog abstraction, in-memory source and bundled data
//! - [`query`] / [`routes`]: URL contract
//! - [`auth`]: Mock authentication behind the `Authenticator` trait
//! - [`session`] / [`cart`]: Per-shopper state
//! - [`model`]: Core data types (`Product`, `Category`, `Voucher`, `User`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod auth;
pub mod cart;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod routes;
pub mod session;
pub mod store;
