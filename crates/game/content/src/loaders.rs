//! Ingredient catalog loaders for RON files.

use std::path::Path;

use picnic_core::Ingredient;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Ingredient catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCatalog {
    pub ingredients: Vec<Ingredient>,
}

/// Loader for ingredient catalogs from RON files.
pub struct IngredientLoader;

impl IngredientLoader {
    /// Load a validated catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an IngredientCatalog
    ///
    /// # Returns
    ///
    /// Returns a validated [`Catalog`].
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// The ingredient set shipped with the crate.
    pub fn builtin() -> LoadResult<Catalog> {
        Self::parse(include_str!("../assets/ingredients.ron"))
    }

    fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: IngredientCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ingredient catalog RON: {}", e))?;
        Catalog::new(catalog.ingredients).map_err(Into::into)
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use picnic_core::{Category, EffectKind, Role, Taste};

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = IngredientLoader::builtin().unwrap();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.fillings().count(), 8);
        assert_eq!(catalog.condiments().count(), 10);
        assert_eq!(catalog.iter().filter(|ing| ing.is_special).count(), 5);
    }

    #[test]
    fn builtin_entries_carry_expected_vectors() {
        let catalog = IngredientLoader::builtin().unwrap();

        let sausage = catalog.get("Smoked Chili Sausage").unwrap();
        assert_eq!(sausage.role, Role::Filling);
        assert_eq!(sausage.pieces, 4);
        assert_eq!(sausage.strength[EffectKind::Lure], 12);
        assert_eq!(sausage.category[Category::Fire], 60);
        assert_eq!(sausage.taste[Taste::Spicy], 10);

        let herb = catalog.get("Gleaming Herb").unwrap();
        assert!(herb.is_special);
        assert_eq!(herb.strength[EffectKind::Crest], 400);
        assert_eq!(herb.strength[EffectKind::Radiant], 250);
        assert_eq!(herb.category[Category::Normal], 250);
        assert_eq!(herb.category[Category::Fairy], 250);
        assert_eq!(herb.taste[Taste::Sweet], 500);
    }

    #[test]
    fn parse_rejects_duplicate_names() {
        let text = r#"
            IngredientCatalog(
                ingredients: [
                    (name: "Sea Salt", role: Condiment, pieces: 1),
                    (name: "Sea Salt", role: Condiment, pieces: 1),
                ],
            )
        "#;
        assert!(IngredientLoader::parse(text).is_err());
    }
}
