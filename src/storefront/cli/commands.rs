//! # CLI Layer
//!
//! This module is **one possible UI client** for storefront, not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Uses `std::process::exit`
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output
//!
//! Every invocation starts with a fresh [`Session`]; nothing about the
//! shopper outlives the process.

use super::render::{
    print_messages, render_categories, render_config, render_facets, render_page_footer,
    render_product_detail, render_product_list, render_vouchers,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, AccountCommands, Cli,
    Commands, ListingArgs, MiscCommands, ShopCommands,
};
use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use storefront::api::{CmdResult, ConfigAction, StorefrontApi};
use storefront::auth::MockAuthenticator;
use storefront::config::StorefrontConfig;
use storefront::error::{Result, StoreError};
use storefront::model::ProductId;
use storefront::query::ListingQuery;
use storefront::routes::Route;
use storefront::session::Session;
use storefront::store::memory::InMemoryCatalog;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "STOREFRONT_HOME";
const LOG_ENV: &str = "STOREFRONT_LOG";

struct AppContext {
    api: StorefrontApi<InMemoryCatalog, MockAuthenticator>,
    session: Session,
    json: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Shop(cmd)) => match cmd {
            ShopCommands::Browse { slug, sub, listing } => {
                handle_browse(&ctx, &slug, sub.as_deref(), &listing).await
            }
            ShopCommands::Search { terms, listing } => {
                let q = if terms.is_empty() {
                    None
                } else {
                    Some(terms.join(" "))
                };
                handle_search(&ctx, q, &listing).await
            }
            ShopCommands::View { id } => handle_view(&ctx, id).await,
            ShopCommands::Suggest { text } => handle_suggest(&ctx, &text.join(" ")).await,
            ShopCommands::New => handle_new(&ctx).await,
            ShopCommands::Categories => handle_categories(&ctx).await,
            ShopCommands::Vouchers { on } => handle_vouchers(&ctx, on).await,
        },
        Some(Commands::Account(cmd)) => match cmd {
            AccountCommands::Login {
                identifier,
                password,
            } => handle_login(&mut ctx, &identifier, &password).await,
            AccountCommands::Register {
                identifier,
                password,
            } => handle_register(&mut ctx, &identifier, &password).await,
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Check => handle_check(&ctx).await,
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Url { input } => handle_url(&ctx, &input),
            MiscCommands::Help { command } => {
                match command {
                    Some(name) => print_help_for_command(&name),
                    None => print_grouped_help(),
                }
                Ok(())
            }
        },
        None => handle_new(&ctx).await,
    }
}

/// Logs go to stderr so they never mix with results. `STOREFRONT_LOG`
/// takes any `EnvFilter` directive; `--verbose` lowers the default to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "storefront=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "storefront", "storefront")
        .ok_or_else(|| StoreError::Config("Could not determine data dir".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = home_dir()?;
    let config = StorefrontConfig::load(&home)?;
    tracing::debug!(home = %home.display(), latency_ms = config.latency_ms, "loaded config");

    let catalog = InMemoryCatalog::bundled().with_latency(config.latency());
    let auth = MockAuthenticator::new().with_latency(config.latency());
    let api = StorefrontApi::new(catalog, auth, config, home);

    Ok(AppContext {
        api,
        session: Session::new(),
        json: cli.json,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a listing result: products, paging, then facets and messages.
fn print_listing(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        return print_json(result);
    }
    if let Some(page) = &result.listing {
        let items = result.shown.as_deref().unwrap_or(page.items.as_slice());
        print!("{}", render_product_list(items));
        print!(
            "{}",
            render_page_footer(page, result.page_window.as_ref(), items.len())
        );
    }
    if let Some(facets) = &result.facets {
        print!("{}", render_facets(facets));
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_browse(
    ctx: &AppContext,
    slug: &str,
    sub: Option<&str>,
    listing: &ListingArgs,
) -> Result<()> {
    let query = listing.to_query(None, ctx.api.settings().price_ceiling);
    let result = ctx.api.browse(slug, sub, &query).await?;
    print_listing(ctx, &result)
}

async fn handle_search(ctx: &AppContext, q: Option<String>, listing: &ListingArgs) -> Result<()> {
    let query = listing.to_query(q, ctx.api.settings().price_ceiling);
    let result = ctx.api.search(&query).await?;
    print_listing(ctx, &result)
}

async fn handle_view(ctx: &AppContext, id: ProductId) -> Result<()> {
    let result = ctx.api.view(id).await?;
    if ctx.json {
        return print_json(&result.products);
    }
    for product in &result.products {
        print!("{}", render_product_detail(product));
    }
    print_messages(&result.messages);
    Ok(())
}

async fn handle_suggest(ctx: &AppContext, text: &str) -> Result<()> {
    let result = ctx.api.suggest(text).await?;
    if ctx.json {
        return print_json(&result.products);
    }
    for product in &result.products {
        println!("{}", product.title);
    }
    Ok(())
}

async fn handle_new(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.new_arrivals(&mut StdRng::from_entropy()).await?;
    if ctx.json {
        return print_json(&result.products);
    }
    print!("{}", render_product_list(&result.products));
    Ok(())
}

async fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories().await?;
    if ctx.json {
        return print_json(&result.categories);
    }
    print!("{}", render_categories(&result.categories));
    Ok(())
}

async fn handle_vouchers(ctx: &AppContext, on: Option<chrono::NaiveDate>) -> Result<()> {
    let today = on.unwrap_or_else(|| Local::now().date_naive());
    let result = ctx.api.vouchers(today).await?;
    if ctx.json {
        return print_json(&result.vouchers);
    }
    print!("{}", render_vouchers(&result.vouchers));
    print_messages(&result.messages);
    Ok(())
}

async fn handle_login(ctx: &mut AppContext, identifier: &str, password: &str) -> Result<()> {
    let result = ctx.api.login(&mut ctx.session, identifier, password).await?;
    finish_auth(ctx, &result)
}

async fn handle_register(ctx: &mut AppContext, identifier: &str, password: &str) -> Result<()> {
    let result = ctx
        .api
        .register(&mut ctx.session, identifier, password)
        .await?;
    finish_auth(ctx, &result)
}

/// A rejected attempt prints the outcome message as is on stderr and exits 1.
fn finish_auth(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        print_json(result)?;
    }
    if !ctx.session.is_signed_in() {
        for message in &result.messages {
            eprintln!("{}", message.content);
        }
        std::process::exit(1);
    }
    if !ctx.json {
        print_messages(&result.messages);
        if let Some(user) = &result.user {
            println!("Signed in as {} <{}>", user.name, user.email);
        }
    }
    Ok(())
}

async fn handle_check(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.check().await?;
    print_messages(&result.messages);
    match &result.integrity {
        Some(report) if !report.is_clean() => Err(StoreError::Api(format!(
            "{} catalog issue(s) found",
            report.issues.len()
        ))),
        _ => Ok(()),
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::List,
        (Some(key), None) => ConfigAction::Get(key),
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
    };
    let listing = matches!(action, ConfigAction::List);

    let result = ctx.api.config(action)?;
    if ctx.json {
        return print_json(&result);
    }
    if let Some(config) = result.config.as_ref().filter(|_| listing) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}

#[derive(Serialize)]
struct DecodedUrl {
    route: &'static str,
    path: String,
    query: Option<ListingQuery>,
}

fn handle_url(ctx: &AppContext, input: &str) -> Result<()> {
    let input = input.trim();
    // A bare query string has no route of its own; read it as a search.
    let route = if input.starts_with('/') {
        Route::parse(input)
    } else {
        let query = input.strip_prefix('?').unwrap_or(input);
        Route::Search(ListingQuery::decode(query, ctx.api.settings().price_ceiling))
    };

    let (kind, query) = match &route {
        Route::Home => ("home", None),
        Route::Product(_) => ("product", None),
        Route::Search(q) => ("search", Some(q.clone())),
        Route::Category { query, .. } => ("category", Some(query.clone())),
        Route::SubCategory { query, .. } => ("sub-category", Some(query.clone())),
        Route::Cart => ("cart", None),
        Route::Login => ("login", None),
        Route::Register => ("register", None),
        Route::NotFound(_) => ("not-found", None),
    };
    let decoded = DecodedUrl {
        route: kind,
        path: route.to_path(),
        query,
    };

    if ctx.json {
        return print_json(&decoded);
    }
    println!("route: {}", decoded.route);
    println!("path:  {}", decoded.path);
    if let Some(q) = &decoded.query {
        if let Some(text) = &q.q {
            println!("q:     {}", text);
        }
        if !q.categories.is_empty() {
            println!("categories: {}", q.categories.join(", "));
        }
        if !q.sizes.is_empty() {
            println!("sizes: {}", q.sizes.join(", "));
        }
        println!("sort:  {}", q.sort);
        println!("price: {} - {}", q.price.min, q.price.max);
        println!("page:  {}", q.page);
    }
    Ok(())
}
