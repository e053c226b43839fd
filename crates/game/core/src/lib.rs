//! Deterministic recipe mechanics shared across the search and tools.
//!
//! `picnic-core` defines the canonical cooking rules: the fixed enumerations
//! (effect kinds, elemental categories, tastes), the typed fixed-length
//! vectors accumulated over a recipe, the taste-dominance engine, and the
//! effect evaluator that turns accumulated vectors into ranked realized
//! effects. Everything here is a pure function of its inputs (no I/O, no
//! globals), so independent searches can share the same catalog safely.
pub mod effects;
pub mod ingredient;
pub mod kinds;
pub mod taste;
pub mod vector;

pub use effects::{
    AllocationPattern, CategoryRank, KindRank, LEVEL_THRESHOLDS, MAX_REALIZED_EFFECTS,
    TASTE_BOOST, boost_strength_vector, effects_match, evaluate_effects, level_for_amount,
    level_threshold, rank_categories, rank_strengths,
};
pub use ingredient::{
    Ingredient, MAX_CONDIMENTS, MAX_FILLINGS, MAX_PIECES, Recipe, RealizedEffect,
    RequestedEffect, Role, effect_satisfies, requested_effects_valid,
};
pub use kinds::{Category, EffectKind, Taste, kind_has_category};
pub use taste::{
    TasteCache, TasteRank, boosted_kind_from_ranking, rank_tastes, relative_taste_vector,
};
pub use vector::{CategoryVector, StrengthVector, TasteVector};
