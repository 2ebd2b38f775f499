use tokio::sync::oneshot;

use crate::domain::{CartView, Price, Product, ProductId, Receipt};
use crate::error::CartError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the storefront service. The four user actions come
/// first, followed by read-only queries. Each carries a oneshot channel for
/// its reply.
#[derive(Debug)]
pub enum StorefrontRequest {
    AddToCart {
        product_id: ProductId,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    RemoveFromCart {
        index: usize,
        respond_to: ServiceResponse<CartView, CartError>,
    },
    ToggleCart {
        respond_to: ServiceResponse<bool, CartError>,
    },
    Checkout {
        respond_to: ServiceResponse<Receipt, CartError>,
    },
    ListCatalog {
        respond_to: ServiceResponse<Vec<Product>, CartError>,
    },
    ShowCatalog {
        respond_to: ServiceResponse<(), CartError>,
    },
    GetCart {
        respond_to: ServiceResponse<CartView, CartError>,
    },
    GetTotal {
        respond_to: ServiceResponse<Price, CartError>,
    },
    Shutdown,
}
