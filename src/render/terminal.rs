use std::io::{self, Stdout, Write};

use rust_decimal::Decimal;
use tracing::warn;

use super::Renderer;
use crate::domain::{CartEntry, MoneyFormat, Price, Product};

/// Line-oriented renderer. The cart panel is only drawn while the cart is
/// open; the item count is always shown.
pub struct TerminalRenderer<W: Write> {
    out: W,
    money: MoneyFormat,
    visible: bool,
    items: Vec<CartEntry>,
    total: Price,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(money: MoneyFormat) -> Self {
        Self::new(io::stdout(), money)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, money: MoneyFormat) -> Self {
        Self {
            out,
            money,
            visible: false,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn draw_cart(&mut self) {
        let mut panel = String::from("--- Cart ---");
        if self.items.is_empty() {
            panel.push_str("\n  (empty)");
        }
        for (index, entry) in self.items.iter().enumerate() {
            panel.push_str(&format!(
                "\n  [{index}] {}  {}",
                entry.product.name,
                self.money.format(entry.price())
            ));
        }
        panel.push_str(&format!("\nTotal: {}", self.money.format(self.total)));
        self.emit(&panel);
    }
}

impl<W: Write + Send + 'static> Renderer for TerminalRenderer<W> {
    fn display_catalog(&mut self, products: &[Product]) {
        let mut listing = String::from("Catalog:");
        for product in products {
            listing.push_str(&format!(
                "\n  #{} {}  {}",
                product.id,
                product.name,
                self.money.format(product.price)
            ));
        }
        self.emit(&listing);
    }

    fn display_cart_count(&mut self, count: usize) {
        self.emit(&format!("Cart ({count})"));
    }

    fn display_cart_items(&mut self, entries: &[CartEntry]) {
        self.items = entries.to_vec();
    }

    fn display_cart_total(&mut self, total: Price) {
        self.total = total;
        if self.visible {
            self.draw_cart();
        }
    }

    fn display_cart_visibility(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.draw_cart();
        } else {
            self.emit("Cart closed.");
        }
    }

    fn show_message(&mut self, text: &str) {
        self.emit(&format!(">> {text}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn renderer() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new(), MoneyFormat::default())
    }

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn lists_catalog_with_formatted_prices() {
        let mut r = renderer();
        r.display_catalog(&[Product::new(3, "Phone Gamma Lite", dec!(899.90))]);
        assert_eq!(output(r), "Catalog:\n  #3 Phone Gamma Lite  R$ 899,90\n");
    }

    #[test]
    fn closed_cart_shows_only_the_count() {
        let mut r = renderer();
        r.display_cart_count(1);
        r.display_cart_items(&[CartEntry {
            product: Product::new(1, "SmartPhone Alpha", dec!(1200)),
        }]);
        r.display_cart_total(dec!(1200));
        assert_eq!(output(r), "Cart (1)\n");
    }

    #[test]
    fn open_cart_draws_the_panel() {
        let mut r = renderer();
        r.display_cart_items(&[CartEntry {
            product: Product::new(1, "SmartPhone Alpha", dec!(1200)),
        }]);
        r.display_cart_total(dec!(1200));
        r.display_cart_visibility(true);

        let text = output(r);
        assert!(text.contains("  [0] SmartPhone Alpha  R$ 1200,00"));
        assert!(text.ends_with("Total: R$ 1200,00\n"));
    }

    #[test]
    fn messages_are_prefixed() {
        let mut r = renderer();
        r.show_message("Your cart is empty!");
        r.display_cart_visibility(false);
        assert_eq!(output(r), ">> Your cart is empty!\nCart closed.\n");
    }
}
