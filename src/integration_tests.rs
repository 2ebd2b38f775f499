#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::app_system::{StorefrontConfig, StorefrontSystem};
    use crate::catalog::Catalog;
    use crate::domain::{MoneyFormat, Product};
    use crate::error::CartError;
    use crate::render::recording::{RecordingRenderer, RenderEvent};

    fn start(renderer: &RecordingRenderer) -> StorefrontSystem {
        StorefrontSystem::new(
            &StorefrontConfig::default(),
            Catalog::phones(),
            renderer.clone(),
        )
    }

    #[tokio::test]
    async fn add_remove_checkout_session() {
        let renderer = RecordingRenderer::new();
        let system = start(&renderer);
        let client = system.client.clone();

        client.add_to_cart(1).await.unwrap();
        client.add_to_cart(3).await.unwrap();
        assert_eq!(client.total().await.unwrap(), dec!(2099.90));

        let view = client.remove_from_cart(0).await.unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].product.name, "Phone Gamma Lite");
        assert_eq!(client.total().await.unwrap(), dec!(899.90));

        let receipt = client.checkout().await.unwrap();
        assert_eq!(receipt.total, dec!(899.90));
        assert_eq!(client.total().await.unwrap(), Decimal::ZERO);
        assert_eq!(client.get_cart().await.unwrap().count, 0);

        assert_eq!(
            renderer.messages(),
            vec!["Purchase complete! Total: R$ 899,90".to_string()]
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn empty_checkout_reports_no_total() {
        let renderer = RecordingRenderer::new();
        let system = start(&renderer);

        assert_eq!(system.client.checkout().await, Err(CartError::EmptyCart));
        assert_eq!(system.client.total().await, Ok(Decimal::ZERO));
        assert_eq!(renderer.messages(), vec!["Your cart is empty!".to_string()]);
        assert!(!renderer
            .events()
            .iter()
            .any(|event| matches!(event, RenderEvent::Total(total) if *total != Decimal::ZERO)));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn total_is_stable_without_mutation() {
        let renderer = RecordingRenderer::new();
        let system = start(&renderer);

        system.client.add_to_cart(5).await.unwrap();
        let first = system.client.total().await.unwrap();
        let second = system.client.total().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, dec!(6200.00));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn actions_from_many_clients_are_serialized() {
        let renderer = RecordingRenderer::new();
        let system = start(&renderer);

        let mut tasks = Vec::new();
        for id in 1..=6u32 {
            let client = system.client.clone();
            tasks.push(tokio::spawn(async move {
                for _ in 0..5 {
                    client.add_to_cart(id).await.unwrap();
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let view = system.client.get_cart().await.unwrap();
        assert_eq!(view.count, 30);
        // 5 x (1200 + 2500 + 899.90 + 4500 + 6200 + 1500)
        assert_eq!(view.total, dec!(83999.50));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn custom_catalog_and_currency() {
        let renderer = RecordingRenderer::new();
        let catalog = Catalog::new(vec![
            Product::new(10, "Case", dec!(19.99)),
            Product::new(11, "Charger", dec!(49.50)),
        ])
        .unwrap();
        let config = StorefrontConfig {
            money: MoneyFormat::new("US$", '.'),
            ..StorefrontConfig::default()
        };
        let system = StorefrontSystem::new(&config, catalog, renderer.clone());

        system.client.add_to_cart(10).await.unwrap();
        system.client.add_to_cart(11).await.unwrap();
        assert_eq!(system.client.add_to_cart(1).await, Err(CartError::NotFound(1)));
        system.client.checkout().await.unwrap();

        assert_eq!(
            renderer.messages(),
            vec![
                "Product not found: 1".to_string(),
                "Purchase complete! Total: US$ 69.49".to_string(),
            ]
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn client_fails_cleanly_after_shutdown() {
        let renderer = RecordingRenderer::new();
        let system = start(&renderer);
        let client = system.client.clone();

        system.shutdown().await.unwrap();

        assert!(matches!(
            client.add_to_cart(1).await,
            Err(CartError::ServiceUnavailable(_))
        ));
    }
}
