//! Validated ingredient catalog.

use std::collections::HashMap;

use picnic_core::{Ingredient, MAX_PIECES, Role};

/// Catalog construction failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate ingredient name: {0}")]
    DuplicateName(String),
    #[error("ingredient {0} has zero pieces")]
    ZeroPieces(String),
    #[error("ingredient {0} exceeds the piece cap on its own")]
    TooManyPieces(String),
    #[error("special ingredient {0} must be a condiment")]
    SpecialFilling(String),
}

/// An immutable, name-indexed set of ingredients.
///
/// Every search borrows the catalog; nothing ever mutates it after
/// construction, so one catalog can serve any number of searches.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names, entries whose piece
    /// count is zero or breaks the per-name cap on first use, and
    /// special-boost ingredients outside the condiment role.
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(ingredients.len());
        for (i, ingredient) in ingredients.iter().enumerate() {
            if ingredient.pieces == 0 {
                return Err(CatalogError::ZeroPieces(ingredient.name.clone()));
            }
            if ingredient.pieces > MAX_PIECES {
                return Err(CatalogError::TooManyPieces(ingredient.name.clone()));
            }
            if ingredient.is_special && ingredient.role != Role::Condiment {
                return Err(CatalogError::SpecialFilling(ingredient.name.clone()));
            }
            if by_name.insert(ingredient.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(ingredient.name.clone()));
            }
        }
        Ok(Self { ingredients, by_name })
    }

    /// The full ingredient list, in catalog order.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Looks an ingredient up by name.
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.by_name.get(name).map(|&i| &self.ingredients[i])
    }

    /// All ingredients in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    /// Ingredients usable in the filling role.
    pub fn fillings(&self) -> impl Iterator<Item = &Ingredient> {
        self.iter().filter(|ing| ing.is_filling())
    }

    /// Ingredients usable in the condiment role.
    pub fn condiments(&self) -> impl Iterator<Item = &Ingredient> {
        self.iter().filter(|ing| ing.is_condiment())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picnic_core::{CategoryVector, StrengthVector, TasteVector};

    fn ingredient(name: &str, role: Role, pieces: u32, is_special: bool) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            role,
            pieces,
            is_special,
            strength: StrengthVector::ZERO,
            category: CategoryVector::ZERO,
            taste: TasteVector::ZERO,
        }
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::new(vec![
            ingredient("Sea Salt", Role::Condiment, 1, false),
            ingredient("Hearth Loaf", Role::Filling, 3, false),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Sea Salt").unwrap().role, Role::Condiment);
        assert!(catalog.get("Moon Cheese").is_none());
        assert_eq!(catalog.fillings().count(), 1);
    }

    #[test]
    fn rejects_invalid_entries() {
        let dup = Catalog::new(vec![
            ingredient("Sea Salt", Role::Condiment, 1, false),
            ingredient("Sea Salt", Role::Condiment, 1, false),
        ]);
        assert!(matches!(dup, Err(CatalogError::DuplicateName(_))));

        let zero = Catalog::new(vec![ingredient("Sea Salt", Role::Condiment, 0, false)]);
        assert!(matches!(zero, Err(CatalogError::ZeroPieces(_))));

        // A single use must stay within the per-name piece cap.
        let oversized = Catalog::new(vec![ingredient("Hearth Loaf", Role::Filling, 13, false)]);
        assert!(matches!(oversized, Err(CatalogError::TooManyPieces(_))));
        let at_cap = Catalog::new(vec![ingredient("Hearth Loaf", Role::Filling, 12, false)]);
        assert!(at_cap.is_ok());

        let special = Catalog::new(vec![ingredient("Gleaming Herb", Role::Filling, 1, true)]);
        assert!(matches!(special, Err(CatalogError::SpecialFilling(_))));
    }
}
