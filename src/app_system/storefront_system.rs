use std::sync::Arc;

use tracing::{error, info, instrument};

use super::StorefrontConfig;
use crate::actors::StorefrontService;
use crate::cart_manager::CartManager;
use crate::catalog::Catalog;
use crate::clients::StorefrontClient;
use crate::error::CartError;
use crate::render::Renderer;

/// Starts the storefront service for one session and hands out its client.
///
/// The cart lives inside the service task; the only way to reach it is
/// through [`StorefrontSystem::client`].
pub struct StorefrontSystem {
    pub client: StorefrontClient,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Create and start the storefront. Must be called inside a tokio runtime.
    #[instrument(name = "storefront_system", skip_all)]
    pub fn new(config: &StorefrontConfig, catalog: Catalog, renderer: impl Renderer) -> Self {
        info!(
            products = catalog.len(),
            channel_capacity = config.channel_capacity,
            "Starting storefront"
        );

        let manager = CartManager::new(Arc::new(catalog));
        let (service, client) = StorefrontService::new(
            config.channel_capacity,
            manager,
            Box::new(renderer),
            config.money.clone(),
        );
        let handle = tokio::spawn(service.run());

        Self { client, handle }
    }

    /// Stops the service and waits for it to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down storefront");

        if let Err(e) = self.client.shutdown().await {
            error!(error = %e, "Shutdown request failed");
        }

        self.handle.await.map_err(|e| {
            error!(error = ?e, "Service shutdown error");
            CartError::ServiceUnavailable(e.to_string())
        })?;

        info!("Storefront shutdown complete");
        Ok(())
    }
}
