//! Read-only product catalog.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Product, ProductId};
use crate::error::CatalogError;

/// Fixed, ordered list of purchasable products. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The phone lineup the storefront ships with.
    pub fn phones() -> Self {
        Self {
            products: vec![
                Product::new(1, "SmartPhone Alpha", dec!(1200.00)),
                Product::new(2, "Celular Beta Pro", dec!(2500.00)),
                Product::new(3, "Phone Gamma Lite", dec!(899.90)),
                Product::new(4, "Ultra Phone X", dec!(4500.00)),
                Product::new(5, "Foldable Z", dec!(6200.00)),
                Product::new(6, "Mini Phone S", dec!(1500.00)),
            ],
        }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::phones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones_are_listed_in_order() {
        let catalog = Catalog::phones();
        let ids: Vec<ProductId> = catalog.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(Catalog::new(catalog.list().to_vec()).is_ok());
    }

    #[test]
    fn finds_known_ids_only() {
        let catalog = Catalog::phones();
        let gamma = catalog.find_by_id(3).unwrap();
        assert_eq!(gamma.name, "Phone Gamma Lite");
        assert_eq!(gamma.price, dec!(899.90));
        assert!(catalog.find_by_id(42).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            Product::new(7, "A", dec!(1)),
            Product::new(7, "B", dec!(2)),
        ]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId(7));
    }

    #[test]
    fn rejects_negative_prices() {
        let result = Catalog::new(vec![Product::new(1, "Broken", dec!(-0.01))]);
        assert_eq!(result.unwrap_err(), CatalogError::NegativePrice(1));
    }
}
