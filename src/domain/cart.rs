use crate::error::CartError;

use super::{Price, Product};

/// One occurrence of a product in the cart. Holds a copy of the product,
/// so the same id may appear any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product: Product,
}

impl CartEntry {
    pub fn price(&self) -> Price {
        self.product.price
    }
}

/// Ordered sequence of selected products. Insertion order is significant:
/// entries are addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of `product`. Refused if the total would no longer
    /// fit in a `Price`, so [`Cart::total`] can never overflow.
    pub fn push(&mut self, product: Product) -> Result<(), CartError> {
        if self.total().checked_add(product.price).is_none() {
            return Err(CartError::TotalOverflow(product.id));
        }
        self.entries.push(CartEntry { product });
        Ok(())
    }

    /// Removes the entry at `index`, shifting later entries left.
    pub fn remove_at(&mut self, index: usize) -> Result<CartEntry, CartError> {
        if index >= self.entries.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Sum of all entry prices, recomputed on every call.
    pub fn total(&self) -> Price {
        self.entries.iter().map(CartEntry::price).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Everything a renderer needs to draw the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub count: usize,
    pub items: Vec<CartEntry>,
    pub total: Price,
    pub visible: bool,
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub total: Price,
    pub item_count: usize,
}
