use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::model::ProductId;
use crate::session::Session;
use crate::store::Catalog;

use super::helpers::require_product;

/// Puts a product in the session's cart.
///
/// Products that come in sizes need one of them; `None` picks the first.
/// A size the product does not offer is rejected with an error message and
/// the cart is left as it was.
pub async fn add<C: Catalog + ?Sized>(
    catalog: &C,
    session: &mut Session,
    id: ProductId,
    size: Option<&str>,
    quantity: u32,
) -> Result<CmdResult> {
    let product = require_product(catalog, id).await?;

    let size = match (size, product.sizes.first()) {
        (_, None) => None,
        (None, Some(first)) => Some(first.clone()),
        (Some(wanted), Some(_)) if product.has_size(wanted) => Some(wanted.to_string()),
        (Some(wanted), Some(_)) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!(
                "Size {} is not available for {} (available: {})",
                wanted,
                product.title,
                product.sizes.join(", ")
            )));
            return Ok(result.with_cart(session.cart.clone()));
        }
    };

    let line = session.cart.add(&product, size, quantity);
    let label = match &line.size {
        Some(size) => format!("{} ({})", line.title, size),
        None => line.title.clone(),
    };
    let content = format!("{} in cart: {}", line.quantity, label);
    tracing::debug!(product = %id, quantity, "added to cart");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(content));
    Ok(result.with_cart(session.cart.clone()))
}

/// Removes a cart line. A line that is not there is `NotFound`.
pub fn remove(session: &mut Session, id: ProductId, size: Option<&str>) -> Result<CmdResult> {
    if !session.cart.remove(id, size) {
        return Err(StoreError::NotFound(id));
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed product {} from cart.", id)));
    Ok(result.with_cart(session.cart.clone()))
}
