//! Solestore Core - Shared domain library.
//!
//! This crate provides the domain types and logic used across all Solestore
//! components:
//! - `storefront` - Public-facing catalog and cart API
//! - `admin` - Internal back-office for products and orders
//!
//! # Architecture
//!
//! The core crate contains the in-memory stores and the pure logic that
//! operates on them - no I/O, no HTTP. All data lives in process-local
//! mock stores seeded from a fixed dataset; there is no real persistence.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money, and status enums
//! - [`catalog`] - Product catalog store, filter/sort/paginate pipeline
//! - [`cart`] - Cart state and its transitions
//! - [`orders`] - Order store and status mutation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod types;

pub use types::*;
