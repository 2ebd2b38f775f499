use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{CartView, Price, Product, ProductId, Receipt};
use crate::error::CartError;
use crate::messages::StorefrontRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// Channel failures surface as [`CartError::ServiceUnavailable`].
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, CartError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|e| CartError::ServiceUnavailable(e.to_string()))?;

                response
                    .await
                    .map_err(|e| CartError::ServiceUnavailable(e.to_string()))?
            }
        }
    };
}

/// Handle to the storefront service. Cheap to clone; every clone talks to
/// the same cart.
#[derive(Clone)]
pub struct StorefrontClient {
    sender: mpsc::Sender<StorefrontRequest>,
}

impl StorefrontClient {
    pub fn new(sender: mpsc::Sender<StorefrontRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(StorefrontRequest::Shutdown)
            .await
            .map_err(|e| CartError::ServiceUnavailable(e.to_string()))?;
        Ok(())
    }
}

// User actions
client_method!(StorefrontClient => fn add_to_cart(product_id: ProductId) -> CartView as StorefrontRequest::AddToCart);
client_method!(StorefrontClient => fn remove_from_cart(index: usize) -> CartView as StorefrontRequest::RemoveFromCart);
client_method!(StorefrontClient => fn toggle_cart() -> bool as StorefrontRequest::ToggleCart);
client_method!(StorefrontClient => fn checkout() -> Receipt as StorefrontRequest::Checkout);

// Queries
client_method!(StorefrontClient => fn list_catalog() -> Vec<Product> as StorefrontRequest::ListCatalog);
client_method!(StorefrontClient => fn show_catalog() -> () as StorefrontRequest::ShowCatalog);
client_method!(StorefrontClient => fn get_cart() -> CartView as StorefrontRequest::GetCart);
client_method!(StorefrontClient => fn total() -> Price as StorefrontRequest::GetTotal);
