//! This crate contains the storefront's platform-independent domain: prices,
//! the cart contract and its in-memory store, the catalog, checkout hand-off
//! and store preferences.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod currency;
pub mod memory_cart;
pub mod prefs;
pub mod price;

pub use cart::CartError;
pub use cart::CartLineItem;
pub use cart::CartStore;
pub use cart::ItemId;
pub use memory_cart::InMemoryCart;
pub use price::Price;
