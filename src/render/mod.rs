//! The rendering collaborator: whatever draws the storefront.
//!
//! The storefront service owns exactly one [`Renderer`] and calls it after
//! every user action. Implementations only draw; they never hold cart state
//! of their own beyond what they were last told.

mod terminal;
#[cfg(test)]
pub mod recording;

pub use terminal::TerminalRenderer;

use crate::domain::{CartEntry, CartView, Price, Product};

pub trait Renderer: Send + 'static {
    fn display_catalog(&mut self, products: &[Product]);
    fn display_cart_count(&mut self, count: usize);
    fn display_cart_items(&mut self, entries: &[CartEntry]);
    fn display_cart_total(&mut self, total: Price);
    fn display_cart_visibility(&mut self, visible: bool);
    fn show_message(&mut self, text: &str);

    /// Republishes the derived cart state: count, items, then total.
    fn refresh(&mut self, view: &CartView) {
        self.display_cart_count(view.count);
        self.display_cart_items(&view.items);
        self.display_cart_total(view.total);
    }
}
