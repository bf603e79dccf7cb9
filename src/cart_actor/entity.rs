use tracing::debug;

use crate::actor_framework::Entity;
use crate::domain::{Cart, CartCreate, Ledger};
use super::actions::{CartAction, CartActionResult, CheckoutOutcome};

impl Entity for Cart {
    type Id = String;
    type CreateParams = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;

    fn id(&self) -> &String {
        &self.id
    }

    /// Opens an empty cart for the shopper.
    fn from_create_params(id: String, params: CartCreate) -> Result<Self, String> {
        if params.shopper.trim().is_empty() {
            return Err("Shopper name must not be empty".to_string());
        }
        Ok(Self {
            id,
            shopper: params.shopper,
            ledger: Ledger::new(),
        })
    }

    /// Applies a ledger operation.
    ///
    /// # Actions
    /// - `Add(id)` / `Decrement(id)` / `Clear`: mutate the ledger and return it
    /// - `Count`: returns the number of units
    /// - `Checkout(expected)`: clears the ledger only if it equals `expected`
    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        debug!(cart_id = %self.id, shopper = %self.shopper, ?action, "Applying cart action");
        let result = match action {
            CartAction::Add(id) => {
                self.ledger.add(id);
                CartActionResult::Add(self.ledger.clone())
            }
            CartAction::Decrement(id) => {
                self.ledger.decrement(id);
                CartActionResult::Decrement(self.ledger.clone())
            }
            CartAction::Clear => {
                self.ledger.clear();
                CartActionResult::Clear(self.ledger.clone())
            }
            CartAction::Count => CartActionResult::Count(self.ledger.count()),
            CartAction::Checkout(expected) => {
                let outcome = if self.ledger.is_empty() {
                    CheckoutOutcome::Empty
                } else if self.ledger != expected {
                    CheckoutOutcome::Changed(self.ledger.clone())
                } else {
                    self.ledger.clear();
                    CheckoutOutcome::Completed
                };
                CartActionResult::Checkout(outcome)
            }
        };
        Ok(result)
    }
}
