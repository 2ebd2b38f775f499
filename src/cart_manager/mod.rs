//! The stateful half of the storefront: the cart plus its open/closed flag.
//!
//! Every operation is a pure state transition that either succeeds and
//! returns the new [`CartView`], or fails with a [`CartError`] and leaves
//! the state exactly as it was. Rendering is someone else's job.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::domain::{Cart, CartView, Price, Product, ProductId, Receipt};
use crate::error::CartError;

pub struct CartManager {
    catalog: Arc<Catalog>,
    cart: Cart,
    visible: bool,
}

impl CartManager {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            visible: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products(&self) -> Vec<Product> {
        self.catalog.list().to_vec()
    }

    /// Appends a copy of the catalog product with `product_id`. Refused when
    /// the id is unknown or the cart total would overflow.
    pub fn add(&mut self, product_id: ProductId) -> Result<CartView, CartError> {
        let product = self
            .catalog
            .find_by_id(product_id)
            .cloned()
            .ok_or(CartError::NotFound(product_id))?;
        self.cart.push(product)?;
        Ok(self.view())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<CartView, CartError> {
        self.cart.remove_at(index)?;
        Ok(self.view())
    }

    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Flips the cart view between open and closed, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Finalizes a non-empty cart: reports its total, empties it, and closes
    /// the cart view.
    pub fn checkout(&mut self) -> Result<Receipt, CartError> {
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let receipt = Receipt {
            total: self.cart.total(),
            item_count: self.cart.len(),
        };
        self.cart.clear();
        self.visible = false;
        Ok(receipt)
    }

    pub fn view(&self) -> CartView {
        CartView {
            count: self.cart.len(),
            items: self.cart.entries().to_vec(),
            total: self.cart.total(),
            visible: self.visible,
        }
    }
}
