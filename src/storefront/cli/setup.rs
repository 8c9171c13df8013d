use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use storefront::model::ProductId;
use storefront::pipeline::filter::PriceRange;
use storefront::pipeline::sort::SortKey;
use storefront::query::ListingQuery;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2025-10-01 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    bin_name = "storefront",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse and search the clothing catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Log pipeline and catalog activity to stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Shop,
    Account,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Shop => "Shop Commands:",
            CommandGroup::Account => "Account Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "browse" | "search" | "view" | "suggest" | "new" | "categories" | "vouchers" => {
                Some(CommandGroup::Shop)
            }
            "login" | "register" => Some(CommandGroup::Account),
            "check" | "config" | "url" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Shop, CommandGroup::Account, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("storefront {version}\n"));
    output.push_str("Browse and search the clothing catalog\n");
    output.push('\n');
    output.push_str("Usage: storefront [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --json       Print results as JSON\n");
    output.push_str("  -v, --verbose    Log pipeline and catalog activity to stderr\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    match command {
        Some(command) => print_help_for_command(command.name()),
        None => print_grouped_help(),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Shop(ShopCommands),

    #[command(flatten)]
    Account(AccountCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Shop(c) => match c {
                ShopCommands::Browse { .. } => "browse",
                ShopCommands::Search { .. } => "search",
                ShopCommands::View { .. } => "view",
                ShopCommands::Suggest { .. } => "suggest",
                ShopCommands::New => "new",
                ShopCommands::Categories => "categories",
                ShopCommands::Vouchers { .. } => "vouchers",
            },
            Commands::Account(c) => match c {
                AccountCommands::Login { .. } => "login",
                AccountCommands::Register { .. } => "register",
            },
            Commands::Misc(c) => match c {
                MiscCommands::Check => "check",
                MiscCommands::Config { .. } => "config",
                MiscCommands::Url { .. } => "url",
                MiscCommands::Help { .. } => "help",
            },
        }
    }
}

/// Filter, sort and paging flags shared by listing commands.
#[derive(Args, Debug, Default, Clone)]
pub struct ListingArgs {
    /// Sizes to keep, comma-separated (e.g. S,M,32)
    #[arg(long, value_delimiter = ',', help_heading = "Listing")]
    pub sizes: Vec<String>,

    /// Category names to keep, comma-separated (e.g. NAM,NỮ)
    #[arg(long, value_delimiter = ',', help_heading = "Listing")]
    pub categories: Vec<String>,

    /// default, price-asc, price-desc, name-asc, name-desc or newest
    #[arg(long, help_heading = "Listing")]
    pub sort: Option<String>,

    /// Lowest price in đồng (e.g. 200000 or 200.000)
    #[arg(long, value_name = "PRICE", help_heading = "Listing")]
    pub min_price: Option<String>,

    /// Highest price in đồng
    #[arg(long, value_name = "PRICE", help_heading = "Listing")]
    pub max_price: Option<String>,

    /// Page number, starting at 1
    #[arg(long, help_heading = "Listing")]
    pub page: Option<usize>,

    /// Start from a URL query string, then apply the other flags on top
    #[arg(long, value_name = "QUERY", help_heading = "Listing")]
    pub from_url: Option<String>,
}

impl ListingArgs {
    /// Listing state for these flags. Unusable values fall back to defaults
    /// the same way a query string does.
    pub fn to_query(&self, q: Option<String>, ceiling: u64) -> ListingQuery {
        let mut query = ListingQuery::decode(self.from_url.as_deref().unwrap_or(""), ceiling);

        if let Some(q) = q.filter(|q| !q.trim().is_empty()) {
            query.q = Some(q);
        }
        if !self.sizes.is_empty() {
            query.sizes = clean_list(&self.sizes);
        }
        if !self.categories.is_empty() {
            query.categories = clean_list(&self.categories);
        }
        if let Some(sort) = &self.sort {
            query.sort = SortKey::parse_lenient(sort);
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            let min = self
                .min_price
                .as_deref()
                .map_or(query.price.min, PriceRange::parse_min);
            let max = self
                .max_price
                .as_deref()
                .map_or(query.price.max, |raw| PriceRange::parse_max(raw, ceiling));
            query.price = PriceRange::new(min, max);
        }
        if let Some(page) = self.page {
            query = query.with_page(page);
        }
        query
    }
}

fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Subcommand, Debug)]
pub enum ShopCommands {
    /// List a category, or one of its subcategories
    #[command(alias = "b", display_order = 1)]
    Browse {
        /// Category slug (e.g. nam, be-gai)
        slug: String,

        /// Subcategory slug (e.g. ao-thun)
        sub: Option<String>,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Search the whole catalog
    #[command(alias = "s", display_order = 2)]
    Search {
        /// Search words (joined with spaces)
        #[arg(num_args = 0..)]
        terms: Vec<String>,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Show one product
    #[command(alias = "v", display_order = 3)]
    View {
        /// Product id
        id: ProductId,
    },

    /// Quick suggestions for partly typed text
    #[command(display_order = 4)]
    Suggest {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// A random pick of products
    #[command(display_order = 5)]
    New,

    /// List categories and their subcategories
    #[command(display_order = 6)]
    Categories,

    /// List vouchers and whether they can still be used
    #[command(display_order = 7)]
    Vouchers {
        /// Day to check against (YYYY-MM-DD), defaults to today
        #[arg(long, value_name = "DATE")]
        on: Option<NaiveDate>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Sign in with the demo account
    #[command(display_order = 10)]
    Login { identifier: String, password: String },

    /// Create an account
    #[command(display_order = 11)]
    Register { identifier: String, password: String },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Check the catalog for inconsistencies
    #[command(display_order = 20)]
    Check,

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (e.g., search-page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Decode a storefront path or query string
    #[command(display_order = 22)]
    Url {
        /// e.g. "/nam/ao-thun?sizes=L&sort=price-asc"
        input: String,
    },

    /// Print help for storefront or a subcommand
    #[command(display_order = 23)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
