//! # Storefront
//!
//! A small shop front: a fixed product catalog, an in-memory cart, and a
//! checkout that only confirms the total.
//!
//! ## Pieces
//!
//! - **Domain types** - Plain data with no service concerns → [`domain::Product`], [`domain::Cart`], [`domain::CartView`]
//! - **Catalog** - Read-only product list, resolved by id → [`catalog::Catalog`]
//! - **Cart manager** - Pure state transitions returning the new view or a typed error → [`cart_manager::CartManager`]
//! - **Service** - Single task that owns the cart and the renderer and handles one user action at a time → [`actors::StorefrontService`]
//! - **Client** - Cloneable handle with macro-generated, traced methods → [`clients::StorefrontClient`]
//! - **Renderer** - The UI collaborator the service draws through → [`render::Renderer`]
//! - **System** - Startup, configuration, tracing, and shutdown → [`app_system::StorefrontSystem`]
//!
//! ## Example
//!
//! ```no_run
//! use storefront::app_system::{StorefrontConfig, StorefrontSystem};
//! use storefront::catalog::Catalog;
//! use storefront::render::TerminalRenderer;
//!
//! # async fn demo() -> Result<(), storefront::error::CartError> {
//! let config = StorefrontConfig::default();
//! let renderer = TerminalRenderer::stdout(config.money.clone());
//! let system = StorefrontSystem::new(&config, Catalog::phones(), renderer);
//!
//! system.client.add_to_cart(1).await?;
//! system.client.add_to_cart(3).await?;
//! system.client.remove_from_cart(0).await?;
//! let receipt = system.client.checkout().await?;
//! assert_eq!(receipt.item_count, 1);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actors;
pub mod app_system;
pub mod cart_manager;
pub mod catalog;
pub mod clients;
pub mod domain;
pub mod error;
pub mod input;
pub mod messages;
pub mod render;

#[cfg(test)]
mod integration_tests;
