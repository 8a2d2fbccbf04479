//! # stockroom
//! Core of the inventory tracker: the product record and its two shapes,
//! the remote access client for the products resource, the list presentation
//! engine and the session coordinator that owns the in-memory collection.
//!
//! ## Example
//! ```rust
//! use stockroom::view::{ListView, SortField, StockStatus};
//!
//! assert_eq!(StockStatus::of(0), StockStatus::OutOfStock);
//! assert_eq!(StockStatus::of(3), StockStatus::LowStock);
//!
//! let mut view = ListView::new();
//! view.sort_on(SortField::Count);
//! view.sort_on(SortField::Count); // same field again flips the direction
//! ```

/// Module for the product record shapes and validation.
pub mod models;

/// Module for the wire envelope and the remote access client.
pub mod api;

/// Module for the list presentation engine.
pub mod view;

/// Module for the session coordinator and the confirmation gate.
pub mod session;

pub use api::{Envelope, HttpProductsApi, ProductsApi};
pub use models::{Product, ProductInput, StoredProduct};
pub use session::{ConfirmationGate, Session, SessionCommand, SessionState};
pub use view::{ListView, SortDirection, SortField, StockStatus};
