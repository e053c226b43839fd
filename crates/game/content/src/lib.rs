//! Ingredient catalog data and its loaders.
//!
//! `picnic-content` owns the validated [`Catalog`] the search runs against
//! and, behind the `loaders` feature, the RON readers that build one from a
//! file or from the built-in ingredient set shipped with the crate.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, CatalogError};

#[cfg(feature = "loaders")]
pub use loaders::IngredientLoader;
