//! Catalog domain module.
//!
//! Categories own ordered lists of products. Everything here is deterministic,
//! in-memory domain logic (no IO, no HTTP, no storage); the one interactive
//! step, confirming a price drop, is injected through [`ConfirmPriceDrop`].

pub mod category;
pub mod confirm;
pub mod price;
pub mod product;
pub mod record;
pub mod registry;

pub use category::{Category, Restock};
pub use confirm::{AssumeNo, AssumeYes, ConfirmFn, ConfirmPriceDrop, confirm_with};
pub use price::Price;
pub use product::{LawnGrassSpec, PriceUpdate, Product, ProductKind, SmartphoneSpec};
pub use record::ProductRecord;
pub use registry::CatalogRegistry;
