use thiserror::Error;

use crate::domain::ProductId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("No cart item at position {index} (cart has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Cart total would be too large to add product {0}")]
    TotalOverflow(ProductId),
    #[error("Your cart is empty!")]
    EmptyCart,
    #[error("Storefront service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
    #[error("Negative price for product {0}")]
    NegativePrice(ProductId),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Not a valid number: {0}")]
    InvalidNumber(String),
}
