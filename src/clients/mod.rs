//! Typed clients over the generic resource actors.

mod cart_client;

pub use cart_client::*;
