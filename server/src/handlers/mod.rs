//! Request handlers for catalog operations.

mod products;

pub use products::*;
