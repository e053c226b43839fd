//! Ingredient scoring for one search step.
//!
//! Every catalog ingredient is scored by how much progress it makes toward
//! the chosen target vectors, as a weighted sum of cosine-like products
//! between its contribution vectors and the remaining deltas. The weights
//! model urgency against remaining capacity: a unit of category progress
//! costs far less from a filling slot than strength progress does, so
//! category and level deltas dominate early.

use std::collections::HashSet;

use strum::{EnumCount, IntoEnumIterator};
use tracing::debug;

use picnic_core::vector::{diff, dot, norm, positive_part};
use picnic_core::{
    Category, CategoryVector, EffectKind, Ingredient, RequestedEffect, StrengthVector, TasteCache,
    TasteVector, rank_categories, rank_strengths, relative_taste_vector,
};

use crate::target::{
    PlacementConfig, permute_config_sets, target_category_vector, target_level_vector,
    target_strength_vector,
};

/// Candidates must score within this fraction of the best score.
pub const CANDIDATE_SCORE_THRESHOLD: f64 = 0.2;
/// The builder branches over at most this many candidates per step.
pub const MAX_CANDIDATES: usize = 3;
/// Flat bonus for plain condiments; they are scarce and cheap.
pub const CONDIMENT_BONUS: f64 = 0.4;

// Per-slot capacity costs of one unit of progress.
const STRENGTH_PER_FILLING: f64 = 21.0;
const STRENGTH_PER_CONDIMENT: f64 = 21.0;
const CATEGORY_PER_FILLING: f64 = 36.0;
const CATEGORY_PER_CONDIMENT: f64 = 4.0;

/// One scoring request from the builder.
pub struct CandidateQuery<'a> {
    pub requested: &'a [RequestedEffect],
    pub config_lists: &'a [Vec<PlacementConfig>],
    /// Current strength vector with the taste-dominance bonus applied.
    pub boosted_strength: &'a StrengthVector,
    pub category: &'a CategoryVector,
    pub taste: &'a TasteVector,
    pub check_strength: bool,
    pub check_category: bool,
    pub check_level: bool,
    pub remaining_fillings: usize,
    pub remaining_condiments: usize,
    pub allow_special: bool,
    /// Names barred from selection, e.g. piece-cap reached.
    pub skip: &'a HashSet<String>,
}

/// Floor-clamps positive components to zero.
fn base_vector<const N: usize>(current: &[f64; N]) -> [f64; N] {
    let mut out = *current;
    for value in &mut out {
        if *value >= 0.0 {
            *value = 0.0;
        }
    }
    out
}

/// Delta norm measured from the floor-clamped current vector, so a current
/// state already past the target still yields a nonzero reference.
fn base_delta<const N: usize>(target: &[f64; N], current: &[f64; N]) -> f64 {
    norm(&diff(target, &base_vector(current)))
}

/// Weight of the strength dimension: urgency over remaining capacity.
pub fn strength_score_weight<const N: usize>(
    target: &[f64; N],
    delta: &[f64; N],
    current: &[f64; N],
    remaining_fillings: usize,
    remaining_condiments: usize,
) -> f64 {
    let capacity = STRENGTH_PER_FILLING * remaining_fillings as f64
        + STRENGTH_PER_CONDIMENT * remaining_condiments as f64;
    let urgency = norm(delta) / capacity;
    urgency / base_delta(target, current).max(100.0)
}

/// Weight of the category and level dimensions.
pub fn category_score_weight<const N: usize>(
    target: &[f64; N],
    delta: &[f64; N],
    current: &[f64; N],
    remaining_fillings: usize,
    remaining_condiments: usize,
) -> f64 {
    let reference = base_delta(target, current);
    if reference == 0.0 {
        return 0.0;
    }
    let capacity = CATEGORY_PER_FILLING * remaining_fillings as f64
        + CATEGORY_PER_CONDIMENT * remaining_condiments as f64;
    norm(delta) / (reference * capacity)
}

struct ChosenTargets {
    set: Vec<PlacementConfig>,
    target_category: CategoryVector,
    target_level: CategoryVector,
    delta_category: [f64; Category::COUNT],
    delta_level: [f64; Category::COUNT],
    category_norm: f64,
    level_norm: f64,
    worst: f64,
}

/// Scores the catalog against `query` and returns the indices of the top
/// candidates, best first.
///
/// Empty when no placement-config set is satisfiable from the current
/// state or every ingredient is excluded.
pub fn select_candidates(
    ingredients: &[Ingredient],
    query: &CandidateQuery<'_>,
    taste_cache: &mut TasteCache,
) -> Vec<usize> {
    let ranked_categories = rank_categories(query.category);
    let ranked_kinds = rank_strengths(query.boosted_strength);
    let current_category = query.category.to_f64();

    // Try every placement-config set and keep the one needing the least
    // additional work on the worse of its category/level deltas.
    let mut chosen: Option<ChosenTargets> = None;
    for set in permute_config_sets(query.config_lists) {
        let target_category = if query.check_category {
            match target_category_vector(
                query.requested,
                &set,
                &ranked_categories,
                query.category,
                false,
            ) {
                Some(target) => target,
                None => continue,
            }
        } else {
            *query.category
        };
        let target_level =
            target_level_vector(query.requested, &set, &ranked_categories, query.category);
        let delta_category = diff(&target_category.to_f64(), &current_category);
        let delta_level = diff(&target_level.to_f64(), &current_category);
        let category_norm = norm(&delta_category);
        let level_norm = norm(&delta_level);
        let worst = category_norm.max(level_norm);
        if chosen.as_ref().is_none_or(|c| worst < c.worst) {
            chosen = Some(ChosenTargets {
                set,
                target_category,
                target_level,
                delta_category,
                delta_level,
                category_norm,
                level_norm,
                worst,
            });
        }
    }
    let Some(mut chosen) = chosen else {
        debug!("no satisfiable placement-config set from this state");
        return Vec::new();
    };

    let target_strength = target_strength_vector(
        query.requested,
        &chosen.set,
        &ranked_kinds,
        query.boosted_strength,
    );
    let current_strength = query.boosted_strength.to_f64();
    let delta_strength = diff(&target_strength.to_f64(), &current_strength);
    let strength_norm = norm(&delta_strength);

    let mut category_weight = if query.check_category {
        category_score_weight(
            &chosen.target_category.to_f64(),
            &chosen.delta_category,
            &current_category,
            query.remaining_fillings,
            query.remaining_condiments,
        )
    } else {
        0.0
    };
    let level_weight = if query.check_level {
        category_score_weight(
            &chosen.target_level.to_f64(),
            &chosen.delta_level,
            &current_category,
            query.remaining_fillings,
            query.remaining_condiments,
        )
    } else {
        0.0
    };
    let strength_weight = if query.check_strength {
        strength_score_weight(
            &target_strength.to_f64(),
            &delta_strength,
            &current_strength,
            query.remaining_fillings,
            query.remaining_condiments,
        )
    } else {
        0.0
    };

    // Forced to pick an ingredient while every dimension reads satisfied:
    // synthesize a category delta so the choice stays directed.
    if chosen.category_norm == 0.0 && category_weight == 0.0 && strength_weight == 0.0 {
        if let Some(forced) = target_category_vector(
            query.requested,
            &chosen.set,
            &ranked_categories,
            query.category,
            true,
        ) {
            chosen.delta_category = diff(&forced.to_f64(), &current_category);
            chosen.category_norm = norm(&chosen.delta_category);
            chosen.target_category = forced;
            category_weight = 1.0;
        }
    }

    debug!(
        strength_weight,
        category_weight, level_weight, "scoring catalog against chosen placement"
    );

    let requested_kinds: Vec<EffectKind> =
        query.requested.iter().map(|req| req.kind).collect();
    let mut scored: Vec<(usize, f64)> = Vec::with_capacity(ingredients.len());
    let mut best = f64::NEG_INFINITY;
    for (index, ingredient) in ingredients.iter().enumerate() {
        if (query.remaining_fillings == 0 && ingredient.is_filling())
            || (query.remaining_condiments == 0 && ingredient.is_condiment())
            || (!query.allow_special && ingredient.is_special)
            || query.skip.contains(&ingredient.name)
        {
            continue;
        }

        let relative = relative_taste_vector(taste_cache, query.taste, &ingredient.taste);
        let mut boosted = ingredient.strength.to_f64();
        for (i, kind) in EffectKind::iter().enumerate() {
            // Taste shifts only matter for requested kinds, except that a
            // hurtful shift always counts against the ingredient.
            if requested_kinds.contains(&kind) || relative[i] < 0.0 {
                boosted[i] += relative[i];
            }
        }

        let n1 = strength_norm * norm(&positive_part(&boosted)).sqrt();
        let strength_product = if query.check_strength && n1 != 0.0 {
            dot(&boosted, &delta_strength) / n1
        } else {
            0.0
        };

        let ingredient_category = ingredient.category.to_f64();
        let n2 = norm(&positive_part(&ingredient_category)).sqrt() * chosen.category_norm;
        let category_product = if query.check_category && n2 != 0.0 {
            dot(&ingredient_category, &chosen.delta_category) / n2
        } else {
            0.0
        };

        let level_product = if chosen.level_norm != 0.0 {
            dot(&ingredient_category, &chosen.delta_level) / chosen.level_norm
        } else {
            0.0
        };

        let bonus = if ingredient.is_condiment() && !ingredient.is_special {
            CONDIMENT_BONUS
        } else {
            0.0
        };
        let score = (strength_product * strength_weight
            + category_product * category_weight
            + level_product * level_weight)
            * (1.0 + bonus);
        best = best.max(score);
        scored.push((index, score));
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    let min_score = best - CANDIDATE_SCORE_THRESHOLD * best.abs();
    scored
        .into_iter()
        .filter(|&(_, score)| score >= min_score)
        .take(MAX_CANDIDATES)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn category_progress_outweighs_strength_early() {
        // From an empty state, a full level-3 category delta must carry
        // more weight than a single unit of strength.
        let current_category = [0.0; Category::COUNT];
        let mut target_category = current_category;
        target_category[Category::Fire as usize] = 380.0;
        let delta_category = diff(&target_category, &current_category);

        let current_strength = [0.0; EffectKind::COUNT];
        let mut target_strength = current_strength;
        target_strength[EffectKind::Lure as usize] = 1.0;
        let delta_strength = diff(&target_strength, &current_strength);

        let category =
            category_score_weight(&target_category, &delta_category, &current_category, 6, 4);
        let strength =
            strength_score_weight(&target_strength, &delta_strength, &current_strength, 6, 4);
        assert!(category > strength);
    }

    #[test]
    fn base_delta_ignores_current_surplus() {
        let current = [250.0, -10.0];
        let target = [180.0, 0.0];
        // Surplus on the first axis is clamped out of the reference.
        assert_eq!(base_delta(&target, &current), norm(&[180.0, 10.0]));
    }
}
