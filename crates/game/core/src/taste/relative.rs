//! Relative taste vectors.
//!
//! For a given accumulated taste state, each ingredient gets a per-kind
//! score in `[-100, 100]` describing how adding it moves the taste ranking
//! relative to that kind's boost: positive pushes the kind's primary tastes
//! toward the top (or defends them there), negative hands the ranking to a
//! competing taste.

use std::collections::HashMap;

use strum::{EnumCount, IntoEnumIterator};

use crate::kinds::{EffectKind, Taste};
use crate::taste::{TasteRank, primary_tastes, rank_tastes, secondary_tastes};
use crate::vector::TasteVector;

/// Memoized taste rankings, keyed by the accumulated taste state.
///
/// The search re-ranks the same handful of states thousands of times;
/// callers own the cache and pass it down so nothing global is needed.
pub type TasteCache = HashMap<TasteVector, Vec<TasteRank>>;

/// Sum, scale by 100, clamp to `[-100, 100]`.
fn sum_scale_clamp(n1: f64, n2: f64) -> f64 {
    100.0 * (n1 + n2).min(1.0).max(-1.0)
}

/// Scores `ingredient` against the accumulated `current` taste state,
/// one component per effect kind.
///
/// Three regimes per kind: nothing ranked yet (pure offense), a competing
/// taste on top (offense toward first place, or damage control), or a
/// primary taste already on top (defense of first and second place). The
/// herb-only kinds have no taste affinity and always score zero.
pub fn relative_taste_vector(
    cache: &mut TasteCache,
    current: &TasteVector,
    ingredient: &TasteVector,
) -> [f64; EffectKind::COUNT] {
    let ranked = cache.entry(*current).or_insert_with(|| rank_tastes(current));
    let highest = ranked[0].amount as f64;
    let highest_taste = ranked[0].taste;
    let second_highest = ranked[1].amount as f64;

    let cur = |taste: Taste| current[taste] as f64;
    let ing = |taste: Taste| ingredient[taste] as f64;

    let mut out = [0.0; EffectKind::COUNT];
    for (i, kind) in EffectKind::iter().enumerate() {
        let primary = primary_tastes(kind);
        let secondary = secondary_tastes(kind);
        if primary.is_empty() {
            continue;
        }
        let num_primary = primary.len() as f64;
        let num_secondary = secondary.len() as f64;
        let num_total = num_primary + num_secondary;

        let non_primary: Vec<Taste> =
            Taste::iter().filter(|t| !primary.contains(t)).collect();
        let other: Vec<Taste> = non_primary
            .iter()
            .copied()
            .filter(|t| !secondary.contains(t))
            .collect();

        if highest == 0.0 {
            // Clean slate: push any affine taste up, penalized by whatever
            // the ingredient gives the unrelated tastes.
            let highest_for_other = other
                .iter()
                .filter(|&&t| cur(t) >= highest)
                .map(|&t| ing(t))
                .fold(f64::NEG_INFINITY, f64::max);
            let toward = |t: &Taste| {
                let boost = ing(*t);
                (boost - highest_for_other / 2.0) / boost.max(1.0)
            };
            let best_primary = primary.iter().map(toward).fold(f64::NEG_INFINITY, f64::max);
            let best_secondary =
                secondary.iter().map(toward).fold(f64::NEG_INFINITY, f64::max);
            out[i] = sum_scale_clamp(
                num_secondary * best_primary / num_total,
                num_primary * best_secondary / num_total,
            );
            continue;
        }

        let primary_on_top = primary.contains(&highest_taste);
        if !primary_on_top {
            // A competing taste holds first place. Primaries attack the top;
            // what the secondaries do depends on whether one of them is tied
            // for first (a tie is not yet a win).
            let secondary_tied_for_first =
                secondary.iter().any(|&t| cur(t) >= highest);
            let others_below_highest: Vec<Taste> = other
                .iter()
                .copied()
                .filter(|&t| cur(t) < highest)
                .collect();
            let boost_for_nonprimary_leader = non_primary
                .iter()
                .filter(|&&t| cur(t) >= highest)
                .map(|&t| ing(t))
                .fold(f64::NEG_INFINITY, f64::max);

            let best_primary = primary
                .iter()
                .map(|&t| {
                    let boost = ing(t);
                    let current_boost = cur(t);
                    let target_highest = (current_boost + 1.0).max(highest);
                    (boost - boost_for_nonprimary_leader)
                        / (target_highest - current_boost).max(boost).max(1.0)
                })
                .fold(f64::NEG_INFINITY, f64::max);

            if !secondary_tied_for_first {
                let others_boost = others_below_highest
                    .iter()
                    .map(|&t| ing(t))
                    .fold(f64::NEG_INFINITY, f64::max);
                let best_secondary = secondary
                    .iter()
                    .map(|&t| {
                        let boost = ing(t);
                        (boost - others_boost)
                            / (highest - cur(t)).max(boost).max(1.0)
                    })
                    .fold(f64::NEG_INFINITY, f64::max);
                out[i] = sum_scale_clamp(
                    num_secondary * best_primary / num_total,
                    num_primary * best_secondary / num_total,
                );
            } else {
                let other_to_highest = others_below_highest
                    .iter()
                    .map(|&t| {
                        let boost = ing(t);
                        boost / (highest - cur(t)).max(boost).max(1.0)
                    })
                    .fold(f64::NEG_INFINITY, f64::max);
                out[i] = sum_scale_clamp(
                    num_secondary * best_primary / num_total,
                    num_primary * -other_to_highest / num_total,
                );
            }
            continue;
        }

        // A primary taste already leads. Everything below is damage control:
        // how much does the ingredient feed the challengers?
        let secondary_in_second =
            secondary.iter().any(|&t| cur(t) == second_highest);
        let non_primaries_to_first = non_primary
            .iter()
            .filter(|&&t| cur(t) >= second_highest)
            .map(|&t| {
                let boost = ing(t);
                boost / (highest - cur(t)).max(boost).max(1.0)
            })
            .fold(0.0, f64::max);
        let others_to_second = other
            .iter()
            .filter(|&&t| cur(t) < second_highest)
            .map(|&t| {
                let boost = ing(t);
                boost / (second_highest - cur(t)).max(boost).max(1.0)
            })
            .fold(0.0, f64::max);

        if second_highest == 0.0 || !secondary_in_second {
            let secondaries_to_second = secondary
                .iter()
                .filter(|&&t| cur(t) < second_highest)
                .map(|&t| {
                    let boost = ing(t);
                    boost / (second_highest - cur(t)).max(boost).max(1.0)
                })
                .fold(0.0, f64::max);
            out[i] = sum_scale_clamp(
                num_secondary * -non_primaries_to_first / num_total,
                num_primary * secondaries_to_second - others_to_second / num_total,
            );
        } else {
            out[i] = sum_scale_clamp(
                num_secondary * -non_primaries_to_first / num_total,
                num_primary * -others_to_second / num_total,
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taste(pairs: &[(Taste, i32)]) -> TasteVector {
        pairs.iter().copied().collect()
    }

    #[test]
    fn herb_kinds_always_score_zero() {
        let mut cache = TasteCache::new();
        let ingredient = taste(&[(Taste::Sweet, 16)]);
        let v = relative_taste_vector(&mut cache, &TasteVector::ZERO, &ingredient);
        assert_eq!(v[EffectKind::Crest as usize], 0.0);
        assert_eq!(v[EffectKind::Radiant as usize], 0.0);
    }

    #[test]
    fn clean_slate_favors_affine_tastes() {
        let mut cache = TasteCache::new();
        let ingredient = taste(&[(Taste::Sweet, 16)]);
        let v = relative_taste_vector(&mut cache, &TasteVector::ZERO, &ingredient);
        // Sweet is Brood's only primary: 2/3 of a full push.
        assert!((v[EffectKind::Brood as usize] - 200.0 / 3.0).abs() < 1e-9);
        // Sweet is unrelated to Titan and drags every Titan taste down.
        assert_eq!(v[EffectKind::Titan as usize], -100.0);
    }

    #[test]
    fn leading_primary_is_defended() {
        let mut cache = TasteCache::new();
        let current = taste(&[(Taste::Salty, 20), (Taste::Sweet, 4)]);
        let salt = taste(&[(Taste::Salty, 16)]);
        let v = relative_taste_vector(&mut cache, &current, &salt);
        // Salty already leads for Lure and more salt threatens nothing.
        assert!(v[EffectKind::Lure as usize] >= 0.0);
        let bitter = taste(&[(Taste::Bitter, 16)]);
        let v = relative_taste_vector(&mut cache, &current, &bitter);
        // Bitter feeds a Lure challenger from below second place.
        assert!(v[EffectKind::Lure as usize] < 0.0);
    }

    #[test]
    fn repeated_scoring_is_bit_identical() {
        let current = taste(&[(Taste::Salty, 20), (Taste::Sweet, 4)]);
        let ingredient = taste(&[(Taste::Bitter, 12), (Taste::Spicy, 4)]);
        let mut cache = TasteCache::new();
        let first = relative_taste_vector(&mut cache, &current, &ingredient);
        let warm = relative_taste_vector(&mut cache, &current, &ingredient);
        let fresh = relative_taste_vector(&mut TasteCache::new(), &current, &ingredient);
        // Same inputs, same bits, cached or not.
        assert_eq!(first.map(f64::to_bits), warm.map(f64::to_bits));
        assert_eq!(first.map(f64::to_bits), fresh.map(f64::to_bits));
    }

    #[test]
    fn rankings_are_memoized_per_state() {
        let mut cache = TasteCache::new();
        let current = taste(&[(Taste::Spicy, 10)]);
        let ingredient = taste(&[(Taste::Spicy, 14)]);
        relative_taste_vector(&mut cache, &current, &ingredient);
        relative_taste_vector(&mut cache, &current, &ingredient);
        assert_eq!(cache.len(), 1);
    }
}
