//! Core types for the product carousel.
//!
//! This module provides type-safe wrappers for the carousel's domain concepts.

pub mod favorites;
pub mod id;
pub mod price;
pub mod product;

pub use favorites::FavoriteSet;
pub use id::ProductId;
pub use price::{CurrencyCode, Price, PriceError};
pub use product::Product;
