//! Shared types and pure logic for the product catalog site.
//!
//! Everything here is platform independent: the frontend crate compiles it
//! to wasm, the unit tests run it natively.

pub mod domain;
pub mod enums;
pub mod error;
pub mod shared;

pub use error::CatalogError;
