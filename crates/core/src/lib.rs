//! Carousel Core - Shared types library.
//!
//! This crate provides the types shared by every carousel component:
//! - `carousel` - The carousel state machine (store, normalizer, controller)
//! - `cli` - Command-line driver for the carousel
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, products, and the favorite set

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
