//! Ingredient, request, and recipe data model.

use crate::kinds::{Category, EffectKind, kind_has_category};
use crate::vector::{CategoryVector, StrengthVector, TasteVector};

/// Hard capacity limits for a single recipe.
pub const MAX_FILLINGS: usize = 6;
/// Maximum number of condiments in a single recipe.
pub const MAX_CONDIMENTS: usize = 4;
/// Maximum total pieces of any single named ingredient.
pub const MAX_PIECES: u32 = 12;

/// The two ingredient roles, each with its own capacity limit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Filling,
    Condiment,
}

/// One catalog entry. Immutable; the search never mutates the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ingredient {
    /// Unique key within the catalog.
    pub name: String,
    pub role: Role,
    /// Pieces added per use; counts toward the 12-piece cap.
    pub pieces: u32,
    /// Special-boost herbs carry the rare `Crest`/`Radiant` strengths and
    /// are subject to per-request count limits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_special: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strength: StrengthVector,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: CategoryVector,
    #[cfg_attr(feature = "serde", serde(default))]
    pub taste: TasteVector,
}

impl Ingredient {
    pub fn is_filling(&self) -> bool {
        self.role == Role::Filling
    }

    pub fn is_condiment(&self) -> bool {
        self.role == Role::Condiment
    }
}

/// The caller's target effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestedEffect {
    pub kind: EffectKind,
    /// Ignored when [`kind_has_category`] is false for `kind`.
    pub category: Category,
    /// Strength level, 1 through 3.
    pub level: u8,
}

/// A discrete effect produced by an ingredient combination.
///
/// `category` is `None` exactly for category-less kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealizedEffect {
    pub kind: EffectKind,
    pub category: Option<Category>,
    pub level: u8,
}

/// A successful search result: the chosen ingredients plus the accumulated
/// vectors and the effects they realize.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub fillings: Vec<Ingredient>,
    pub condiments: Vec<Ingredient>,
    pub strength: StrengthVector,
    pub category: CategoryVector,
    pub taste: TasteVector,
    pub effects: Vec<RealizedEffect>,
}

impl Recipe {
    /// Total ingredient count, both roles.
    pub fn ingredient_count(&self) -> usize {
        self.fillings.len() + self.condiments.len()
    }

    /// Number of special-boost herbs used.
    pub fn special_count(&self) -> usize {
        self.fillings
            .iter()
            .chain(self.condiments.iter())
            .filter(|ing| ing.is_special)
            .count()
    }

    /// All ingredients in selection order, fillings first.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.fillings.iter().chain(self.condiments.iter())
    }
}

/// Fail-fast validation of a requested-effect list.
///
/// A request is expressible when every level is in 1..=3, no kind repeats,
/// and at most three effects are requested (the evaluator never emits more
/// than three). Category needs no validation: every category is reachable,
/// and category-less kinds ignore it.
pub fn requested_effects_valid(requested: &[RequestedEffect]) -> bool {
    if requested.is_empty() || requested.len() > 3 {
        return false;
    }
    if requested.iter().any(|r| r.level < 1 || r.level > 3) {
        return false;
    }
    for (i, a) in requested.iter().enumerate() {
        for b in &requested[i + 1..] {
            if a.kind == b.kind {
                return false;
            }
        }
    }
    true
}

/// Whether a realized effect satisfies a request.
///
/// Kind must match exactly; category must match unless the kind is
/// category-less; level is an "at least" match, not exact.
pub fn effect_satisfies(effect: &RealizedEffect, requested: &RequestedEffect) -> bool {
    effect.kind == requested.kind
        && (!kind_has_category(requested.kind) || effect.category == Some(requested.category))
        && effect.level >= requested.level
}
