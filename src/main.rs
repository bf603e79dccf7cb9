mod domain;
mod clients;
mod config;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod cart_actor;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{StorefrontSystem, setup_tracing};
use crate::config::Config;
use crate::domain::{format_inr, Catalog};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config);
    config.log_loaded();

    info!("Starting storefront");

    let system = StorefrontSystem::new(&config, Catalog::grocery());
    let carts = system.cart_client.clone();

    for category in carts.catalog().categories() {
        let names: Vec<&str> = carts.catalog().in_category(category).map(|p| p.name.as_str()).collect();
        info!(category = %category, products = ?names, "Catalog category");
    }

    let span = tracing::info_span!("shopping_session", shopper = "Asha");
    let cart_id = async {
        let cart_id = carts.open_cart("Asha".to_string()).await.map_err(|e| e.to_string())?;

        for product_id in [1, 3, 1, 5] {
            carts.add_item(cart_id.clone(), product_id).await.map_err(|e| e.to_string())?;
        }
        carts.decrement_item(cart_id.clone(), 5).await.map_err(|e| e.to_string())?;
        carts.increment_item(cart_id.clone(), 3).await.map_err(|e| e.to_string())?;

        if let Err(e) = carts.add_item(cart_id.clone(), 42).await {
            warn!(error = %e, "Add to cart refused");
        }

        let count = carts.count(cart_id.clone()).await.map_err(|e| e.to_string())?;
        info!(count, "Cart badge updated");

        let summary = carts.summary(cart_id.clone()).await.map_err(|e| e.to_string())?;
        for line in &summary.lines {
            info!(
                product = %line.product.name,
                price = %format_inr(line.product.price),
                quantity = line.quantity,
                subtotal = %format_inr(line.subtotal),
                "Cart line"
            );
        }
        info!(count = summary.count, total = %format_inr(summary.total), "Cart summary");

        Ok::<String, String>(cart_id)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    async {
        match carts.checkout(cart_id.clone()).await {
            Ok(receipt) => info!(
                cart_id = %receipt.cart_id,
                total = %format_inr(receipt.summary.total),
                "Checkout complete"
            ),
            Err(e) => error!(error = %e, "Checkout failed"),
        }

        // The cart is empty now, so a second checkout is refused.
        if let Err(e) = carts.checkout(cart_id.clone()).await {
            warn!(error = %e, "Checkout refused");
        }
    }
    .instrument(span)
    .await;

    carts.close_cart(cart_id).await.map_err(|e| e.to_string())?;
    drop(carts);

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
