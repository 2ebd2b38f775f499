use tokio::io::BufReader;
use tracing::{debug, info};

use storefront::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem};
use storefront::catalog::Catalog;
use storefront::clients::StorefrontClient;
use storefront::error::CartError;
use storefront::input::{read_line, Command, HELP};
use storefront::render::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront session");

    let renderer = TerminalRenderer::stdout(config.money.clone());
    let system = StorefrontSystem::new(&config, Catalog::phones(), renderer);
    println!("{HELP}");

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();
    while let Some(line) = read_line(&mut stdin, &mut buf).await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!(">> {e}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        dispatch(&system.client, command).await?;
    }

    system.shutdown().await?;
    info!("Session ended");
    Ok(())
}

/// Forwards one user action to the service. Rejected actions were already
/// shown to the user by the service; only a dead service is fatal.
async fn dispatch(client: &StorefrontClient, command: Command) -> Result<(), CartError> {
    let result = match command {
        Command::Catalog => client.show_catalog().await,
        Command::Add(product_id) => client.add_to_cart(product_id).await.map(|_| ()),
        Command::Remove(index) => client.remove_from_cart(index).await.map(|_| ()),
        Command::ToggleCart => client.toggle_cart().await.map(|_| ()),
        Command::Checkout => client.checkout().await.map(|receipt| {
            debug!(total = %receipt.total, "Checkout finished");
        }),
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Quit => Ok(()),
    };

    match result {
        Err(e @ CartError::ServiceUnavailable(_)) => Err(e),
        Err(e) => {
            debug!(error = %e, "Command rejected");
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}
