use crate::model::{Product, ProductId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub size: Option<String>,
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// The shopper's cart. Lines are keyed by product and size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `product` in `size`, merging with an existing line.
    /// Title and price are captured as they are now.
    pub fn add(&mut self, product: &Product, size: Option<String>, quantity: u32) -> &CartLine {
        let quantity = quantity.max(1);
        let pos = self
            .lines
            .iter()
            .position(|l| l.product_id == product.id && l.size == size);

        let idx = match pos {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(quantity);
                idx
            }
            None => {
                self.lines.push(CartLine {
                    product_id: product.id,
                    title: product.title.clone(),
                    size,
                    unit_price: product.price,
                    quantity,
                });
                self.lines.len() - 1
            }
        };
        &self.lines[idx]
    }

    /// Sets the quantity of a line; zero removes it. Returns false if no
    /// such line exists.
    pub fn set_quantity(&mut self, product_id: ProductId, size: Option<&str>, quantity: u32) -> bool {
        let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id && l.size.as_deref() == size)
        else {
            return false;
        };
        if quantity == 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity = quantity;
        }
        true
    }

    pub fn remove(&mut self, product_id: ProductId, size: Option<&str>) -> bool {
        self.set_quantity(product_id, size, 0)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |n, l| n.saturating_add(l.quantity))
    }

    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, l| total.saturating_add(l.line_total()))
    }
}
