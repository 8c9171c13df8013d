use colored::Colorize;
use storefront::api::{CmdMessage, Facets, MessageLevel, VoucherView};
use storefront::config::StorefrontConfig;
use storefront::model::{Category, Product};
use storefront::pipeline::paginate::{Page, PageWindow};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 5;
const PRICE_WIDTH: usize = 12;
const SIZES_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// "199.000 ₫": dot-grouped thousands, đồng sign after.
pub(super) fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 6);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out.push_str(" ₫");
    out
}

pub(super) fn render_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let title_width = LINE_WIDTH.saturating_sub(ID_WIDTH + PRICE_WIDTH + SIZES_WIDTH + 4);
    let mut out = String::new();
    for product in products {
        let id = format!("{:>width$}", product.id.to_string(), width = ID_WIDTH);
        let title = pad_to_width(&truncate_to_width(&product.title, title_width), title_width);
        let price = format!("{:>width$}", format_price(product.price), width = PRICE_WIDTH);
        let sizes = truncate_to_width(&product.sizes.join(" "), SIZES_WIDTH);
        out.push_str(&format!(
            "{}  {} {}  {}\n",
            id.yellow(),
            title,
            price.bold(),
            sizes.dimmed()
        ));
    }
    out
}

pub(super) fn render_product_detail(product: &Product) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        format!("#{}", product.id).yellow(),
        product.title.bold()
    ));
    out.push_str("--------------------------------\n");
    out.push_str(&format!("Price:    {}\n", format_price(product.price)));
    if let Some(category) = &product.category {
        let sub = product
            .sub_category
            .as_deref()
            .map(|s| format!(" / {}", s))
            .unwrap_or_default();
        out.push_str(&format!("Category: {}{}\n", category, sub));
    }
    if !product.sizes.is_empty() {
        out.push_str(&format!("Sizes:    {}\n", product.sizes.join(", ")));
    }
    if !product.badges.is_empty() {
        out.push_str(&format!("Badges:   {}\n", product.badges.join(", ").green()));
    }
    for image in &product.images {
        out.push_str(&format!("Image:    {}\n", image.dimmed()));
    }
    out
}

/// Page footer: numbered pages when a window is given, otherwise how many of
/// the matches are on screen.
pub(super) fn render_page_footer(
    page: &Page<Product>,
    window: Option<&PageWindow>,
    shown: usize,
) -> String {
    match window {
        Some(window) => {
            let mut parts = Vec::new();
            if window.has_prev {
                parts.push("‹".to_string());
            }
            for n in &window.pages {
                if *n == window.current {
                    parts.push(format!("[{}]", n));
                } else {
                    parts.push(n.to_string());
                }
            }
            if window.has_next {
                parts.push("›".to_string());
            }
            format!(
                "Page {} of {}  {}\n",
                window.current,
                window.total_pages,
                parts.join(" ")
            )
        }
        None if page.total_count == 0 => String::new(),
        None => format!(
            "{} of {} shown{}\n",
            shown,
            page.total_count,
            if page.has_more {
                format!(", next: --page {}", page.page + 1)
            } else {
                String::new()
            }
        ),
    }
}

pub(super) fn render_facets(facets: &Facets) -> String {
    let mut out = String::new();
    if !facets.categories.is_empty() {
        out.push_str(&format!("Categories: {}\n", facets.categories.join(", ")));
    }
    if !facets.sizes.is_empty() {
        out.push_str(&format!("Sizes:      {}\n", facets.sizes.join(", ")));
    }
    out
}

pub(super) fn render_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        out.push_str(&format!("{} ({})\n", category.name.bold(), category.slug));
        for sub in &category.sub_categories {
            out.push_str(&format!("  {} ({})\n", sub.name, sub.slug.dimmed()));
        }
    }
    out
}

pub(super) fn render_vouchers(vouchers: &[VoucherView]) -> String {
    if vouchers.is_empty() {
        return "No vouchers.\n".to_string();
    }
    let mut out = String::new();
    for view in vouchers {
        let v = &view.voucher;
        let status = if view.active {
            "active".green()
        } else {
            "expired".red()
        };
        out.push_str(&format!("{}  [{}]\n", v.title.bold(), status));
        out.push_str(&format!("  {}\n", v.description));
        out.push_str(&format!(
            "  {}  (until {})\n",
            v.condition.dimmed(),
            v.expires_on.format("%d/%m/%Y")
        ));
    }
    out
}

pub(super) fn render_config(config: &StorefrontConfig) -> String {
    StorefrontConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
