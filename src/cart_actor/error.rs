use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{PricingError, ProductId};

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("Cart total overflows at product {0}")]
    PriceOverflow(ProductId),
    #[error("Cart is empty: {0}")]
    EmptyCart(String),
    #[error("Cart changed during checkout: {0}")]
    CheckoutConflict(String),
    #[error("Cart not found: {0}")]
    NotFound(String),
    #[error("Cart request rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<PricingError> for CartError {
    fn from(e: PricingError) -> Self {
        match e {
            PricingError::UnknownProduct(id) => CartError::UnknownProduct(id),
            PricingError::Overflow(id) => CartError::PriceOverflow(id),
        }
    }
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            FrameworkError::Rejected(reason) => CartError::Rejected(reason),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
