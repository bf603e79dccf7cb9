use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::cart_actor::{CartAction, CartActionResult, CartError, CheckoutOutcome};
use crate::domain::{Cart, CartCreate, CartSummary, Catalog, Ledger, ProductId, Receipt};

/// Client for interacting with the Cart actor.
///
/// The actor only knows about ledgers. This client prices them against the
/// shared catalog and refuses products the catalog does not carry.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    catalog: Arc<Catalog>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, catalog: Arc<Catalog>) -> Self {
        Self { inner, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[instrument(skip(self))]
    pub async fn open_cart(&self, shopper: String) -> Result<String, CartError> {
        debug!("Sending request");
        let id = self.inner.create(CartCreate { shopper }).await?;
        info!(cart_id = %id, "Cart opened");
        Ok(id)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn get_cart(&self, id: String) -> Result<Option<Cart>, CartError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn close_cart(&self, id: String) -> Result<(), CartError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn list_carts(&self) -> Result<Vec<Cart>, CartError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    /// Adds one unit of a catalog product to the cart.
    ///
    /// # Errors
    /// [`CartError::UnknownProduct`] if the catalog does not carry `product_id`.
    /// The cart is not touched in that case.
    #[instrument(skip(self))]
    pub async fn add_item(&self, cart_id: String, product_id: ProductId) -> Result<Ledger, CartError> {
        let Some(product) = self.catalog.find(product_id) else {
            warn!("Product not in catalog");
            return Err(CartError::UnknownProduct(product_id));
        };
        debug!(product_name = %product.name, "Sending request");

        match self.inner.perform_action(cart_id, CartAction::Add(product_id)).await? {
            CartActionResult::Add(ledger) => Ok(ledger),
            _ => Err(CartError::ActorCommunicationError("Unexpected result".to_string())),
        }
    }

    /// The drawer's "+" button. Same as [`CartClient::add_item`].
    pub async fn increment_item(&self, cart_id: String, product_id: ProductId) -> Result<Ledger, CartError> {
        self.add_item(cart_id, product_id).await
    }

    /// Removes one unit. Products that are not in the cart are ignored.
    #[instrument(skip(self))]
    pub async fn decrement_item(&self, cart_id: String, product_id: ProductId) -> Result<Ledger, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::Decrement(product_id)).await? {
            CartActionResult::Decrement(ledger) => Ok(ledger),
            _ => Err(CartError::ActorCommunicationError("Unexpected result".to_string())),
        }
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn clear_cart(&self, cart_id: String) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::Clear).await? {
            CartActionResult::Clear(_) => Ok(()),
            _ => Err(CartError::ActorCommunicationError("Unexpected result".to_string())),
        }
    }

    #[instrument(skip(self))]
    pub async fn count(&self, cart_id: String) -> Result<u64, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart_id, CartAction::Count).await? {
            CartActionResult::Count(count) => Ok(count),
            _ => Err(CartError::ActorCommunicationError("Unexpected result".to_string())),
        }
    }

    /// Prices the current contents of the cart.
    #[instrument(skip(self))]
    pub async fn summary(&self, cart_id: String) -> Result<CartSummary, CartError> {
        debug!("Sending request");
        let cart = self
            .inner
            .get(cart_id.clone())
            .await?
            .ok_or(CartError::NotFound(cart_id))?;
        Ok(cart.ledger.summary(&self.catalog)?)
    }

    /// Prices the cart, then empties it and returns what was in it.
    ///
    /// The cart is emptied only once pricing has succeeded, and only if it
    /// still holds the ledger that was priced.
    ///
    /// # Errors
    /// - [`CartError::EmptyCart`] if there is nothing to check out
    /// - [`CartError::UnknownProduct`] / [`CartError::PriceOverflow`] if the cart cannot be priced
    /// - [`CartError::CheckoutConflict`] if the cart changed after pricing
    ///
    /// In every error case the cart is left as it was.
    #[instrument(skip(self))]
    pub async fn checkout(&self, cart_id: String) -> Result<Receipt, CartError> {
        info!("Processing checkout request (Client Side)");

        // Step 1: Snapshot the cart
        let cart = self
            .inner
            .get(cart_id.clone())
            .await?
            .ok_or_else(|| CartError::NotFound(cart_id.clone()))?;
        if cart.ledger.is_empty() {
            warn!("Checkout attempted on empty cart");
            return Err(CartError::EmptyCart(cart_id));
        }

        // Step 2: Price the snapshot
        let summary = cart.ledger.summary(&self.catalog).map_err(|e| {
            error!(error = %e, "Cart could not be priced");
            CartError::from(e)
        })?;

        // Step 3: Empty the cart if it still matches what was priced
        match self.inner.perform_action(cart_id.clone(), CartAction::Checkout(cart.ledger)).await? {
            CartActionResult::Checkout(CheckoutOutcome::Completed) => {
                info!(count = summary.count, total = summary.total, "Order placed successfully");
                Ok(Receipt { cart_id, summary })
            }
            CartActionResult::Checkout(CheckoutOutcome::Empty) => {
                warn!("Cart emptied before checkout completed");
                Err(CartError::EmptyCart(cart_id))
            }
            CartActionResult::Checkout(CheckoutOutcome::Changed(current)) => {
                warn!(count = current.count(), "Cart changed after pricing");
                Err(CartError::CheckoutConflict(cart_id))
            }
            _ => Err(CartError::ActorCommunicationError("Unexpected result".to_string())),
        }
    }
}
