use crate::domain::{Ledger, ProductId};

/// Custom actions for Cart entities.
///
/// Each action is applied to the cart's ledger inside the actor, so a
/// sequence of actions on one cart is never interleaved.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds one unit of the product.
    Add(ProductId),
    /// Removes one unit of the product, dropping it from the cart at zero.
    Decrement(ProductId),
    /// Empties the cart.
    Clear,
    /// Reads the number of units in the cart.
    Count,
    /// Empties the cart, provided it still holds exactly the ledger the
    /// caller priced. Otherwise the cart is left untouched.
    Checkout(Ledger),
}

/// How a checkout request was settled by the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The cart held the priced ledger and is now empty.
    Completed,
    /// There was nothing to check out.
    Empty,
    /// The cart was modified after pricing. Carries its current contents.
    Changed(Ledger),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    Add(Ledger),
    Decrement(Ledger),
    Clear(Ledger),
    Count(u64),
    Checkout(CheckoutOutcome),
}
