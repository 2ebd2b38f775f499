use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::cart_manager::CartManager;
use crate::clients::StorefrontClient;
use crate::domain::{CartView, MoneyFormat, Price, ProductId, Receipt};
use crate::error::CartError;
use crate::messages::{ServiceResponse, StorefrontRequest};
use crate::render::Renderer;

// =============================================================================
// STOREFRONT SERVICE
// =============================================================================

/// Owns the cart and the renderer. Requests are drained one at a time, so
/// each user action runs to completion before the next one starts.
///
/// After every action the service pushes the resulting state to the
/// renderer; rejected actions are shown as a message instead and leave the
/// cart untouched.
pub struct StorefrontService {
    receiver: mpsc::Receiver<StorefrontRequest>,
    manager: CartManager,
    renderer: Box<dyn Renderer>,
    money: MoneyFormat,
}

impl StorefrontService {
    pub fn new(
        buffer_size: usize,
        manager: CartManager,
        renderer: Box<dyn Renderer>,
        money: MoneyFormat,
    ) -> (Self, StorefrontClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            manager,
            renderer,
            money,
        };
        let client = StorefrontClient::new(sender);
        (service, client)
    }

    #[instrument(name = "storefront_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.manager.catalog().len(), "StorefrontService starting");
        self.render_initial();

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StorefrontRequest::AddToCart {
                    product_id,
                    respond_to,
                } => {
                    self.handle_add_to_cart(product_id, respond_to);
                }
                StorefrontRequest::RemoveFromCart { index, respond_to } => {
                    self.handle_remove_from_cart(index, respond_to);
                }
                StorefrontRequest::ToggleCart { respond_to } => {
                    self.handle_toggle_cart(respond_to);
                }
                StorefrontRequest::Checkout { respond_to } => {
                    self.handle_checkout(respond_to);
                }
                StorefrontRequest::ListCatalog { respond_to } => {
                    let _ = respond_to.send(Ok(self.manager.products()));
                }
                StorefrontRequest::ShowCatalog { respond_to } => {
                    self.renderer.display_catalog(self.manager.catalog().list());
                    let _ = respond_to.send(Ok(()));
                }
                StorefrontRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(Ok(self.manager.view()));
                }
                StorefrontRequest::GetTotal { respond_to } => {
                    let _ = respond_to.send(Ok(self.manager.total()));
                }
                StorefrontRequest::Shutdown => {
                    info!("StorefrontService shutting down");
                    break;
                }
            }
        }

        info!("StorefrontService stopped");
    }

    fn render_initial(&mut self) {
        let view = self.manager.view();
        self.renderer.display_catalog(self.manager.catalog().list());
        self.renderer.refresh(&view);
        self.renderer.display_cart_visibility(view.visible);
    }

    /// Shows a rejected action to the user. Nothing needs undoing since
    /// failed operations never touch the cart.
    fn reject(&mut self, error: &CartError) {
        warn!(error = %error, "Action rejected");
        self.renderer.show_message(&error.to_string());
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_add_to_cart(
        &mut self,
        product_id: ProductId,
        respond_to: ServiceResponse<CartView, CartError>,
    ) {
        debug!("Processing add_to_cart request");

        let result = self.manager.add(product_id);
        match &result {
            Ok(view) => {
                info!(count = view.count, total = %view.total, "Product added to cart");
                self.renderer.refresh(view);
            }
            Err(e) => self.reject(e),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(index = %index), skip(self, respond_to))]
    fn handle_remove_from_cart(
        &mut self,
        index: usize,
        respond_to: ServiceResponse<CartView, CartError>,
    ) {
        debug!("Processing remove_from_cart request");

        let result = self.manager.remove_at(index);
        match &result {
            Ok(view) => {
                info!(count = view.count, total = %view.total, "Cart entry removed");
                self.renderer.refresh(view);
            }
            Err(e) => self.reject(e),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_toggle_cart(&mut self, respond_to: ServiceResponse<bool, CartError>) {
        debug!("Processing toggle_cart request");

        let visible = self.manager.toggle();
        debug!(visible, "Cart visibility changed");
        self.renderer.display_cart_visibility(visible);

        let _ = respond_to.send(Ok(visible));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_checkout(&mut self, respond_to: ServiceResponse<Receipt, CartError>) {
        debug!("Processing checkout request");

        let result = self.manager.checkout();
        match &result {
            Ok(receipt) => {
                info!(
                    items = receipt.item_count,
                    total = %receipt.total,
                    "Checkout completed"
                );
                let message = self.checkout_message(receipt.total);
                let view = self.manager.view();
                self.renderer.show_message(&message);
                self.renderer.display_cart_visibility(false);
                self.renderer.refresh(&view);
            }
            Err(e) => self.reject(e),
        }

        let _ = respond_to.send(result);
    }

    fn checkout_message(&self, total: Price) -> String {
        format!("Purchase complete! Total: {}", self.money.format(total))
    }
}
