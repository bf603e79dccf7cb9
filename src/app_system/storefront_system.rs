use std::sync::Arc;

use tracing::{error, info};

use crate::cart_actor;
use crate::clients::CartClient;
use crate::config::Config;
use crate::domain::Catalog;

/// The application system: the shared catalog plus the cart actor.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        info!(
            products = catalog.products().len(),
            categories = catalog.categories().len(),
            "Starting storefront system"
        );
        let catalog = Arc::new(catalog);

        let (cart_actor, cart_client) = cart_actor::new(config.mailbox_capacity, catalog);
        let cart_handle = tokio::spawn(cart_actor.run());

        Self {
            cart_client,
            handles: vec![cart_handle],
        }
    }

    /// Drops the clients, which closes the mailboxes, and waits for the actors to finish.
    ///
    /// Clones of the clients held elsewhere keep their actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
