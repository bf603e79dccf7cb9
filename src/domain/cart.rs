use indexmap::IndexMap;
use thiserror::Error;

use super::product::{Catalog, Product, ProductId};

/// Reasons a ledger cannot be priced against a catalog.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("Price overflow at product {0}")]
    Overflow(ProductId),
}

/// The id→quantity mapping behind a cart.
///
/// Entries keep the order in which products were first added. A present
/// entry always has a quantity of at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: IndexMap<ProductId, u32>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the quantity for `id`, inserting it at 1 if absent.
    pub fn add(&mut self, id: ProductId) {
        let quantity = self.entries.entry(id).or_insert(0);
        *quantity = quantity.saturating_add(1);
    }

    /// Decrements the quantity for `id`, dropping the entry when it reaches zero.
    /// Absent ids are ignored.
    pub fn decrement(&mut self, id: ProductId) {
        match self.entries.get_mut(&id) {
            Some(quantity) if *quantity > 1 => *quantity -= 1,
            Some(_) => {
                self.entries.shift_remove(&id);
            }
            None => {}
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of all quantities.
    pub fn count(&self) -> u64 {
        self.entries.values().map(|&q| u64::from(q)).sum()
    }

    /// Sum of price × quantity over every entry.
    ///
    /// # Errors
    /// [`PricingError::UnknownProduct`] if an entry has no catalog product,
    /// [`PricingError::Overflow`] if the sum does not fit in a `u64`.
    pub fn total(&self, catalog: &Catalog) -> Result<u64, PricingError> {
        let mut total: u64 = 0;
        for (&id, &quantity) in &self.entries {
            let product = catalog.find(id).ok_or(PricingError::UnknownProduct(id))?;
            total = line_subtotal(product, quantity)?
                .checked_add(total)
                .ok_or(PricingError::Overflow(id))?;
        }
        Ok(total)
    }

    #[allow(dead_code)]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.entries.get(&id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.entries.iter().map(|(&id, &quantity)| (id, quantity))
    }

    /// Resolves every entry against the catalog, in insertion order.
    pub fn lines(&self, catalog: &Catalog) -> Result<Vec<CartLine>, PricingError> {
        self.entries()
            .map(|(id, quantity)| {
                let product = catalog.find(id).ok_or(PricingError::UnknownProduct(id))?;
                CartLine::new(product.clone(), quantity)
            })
            .collect::<Result<Vec<_>, PricingError>>()
    }

    pub fn summary(&self, catalog: &Catalog) -> Result<CartSummary, PricingError> {
        Ok(CartSummary {
            count: self.count(),
            total: self.total(catalog)?,
            lines: self.lines(catalog)?,
        })
    }
}

fn line_subtotal(product: &Product, quantity: u32) -> Result<u64, PricingError> {
    product
        .price
        .checked_mul(u64::from(quantity))
        .ok_or(PricingError::Overflow(product.id))
}

/// A shopper's cart as stored by the cart actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: String,
    pub shopper: String,
    pub ledger: Ledger,
}

/// Payload for opening a new cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub shopper: String,
}

/// A ledger entry priced against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: u64,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Result<Self, PricingError> {
        let subtotal = line_subtotal(&product, quantity)?;
        Ok(Self {
            product,
            quantity,
            subtotal,
        })
    }
}

/// Everything the cart drawer shows: badge count, total and line items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSummary {
    pub count: u64,
    pub total: u64,
    pub lines: Vec<CartLine>,
}

/// What a shopper paid for at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub cart_id: String,
    pub summary: CartSummary,
}

/// Formats a whole-rupee amount, e.g. `₹129`.
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", amount)
}
