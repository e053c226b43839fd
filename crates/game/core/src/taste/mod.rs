//! Taste ranking and the dominance rules that pick the boosted kind.
//!
//! A recipe's accumulated taste vector is ranked and its two strongest
//! tastes decide which effect kind receives the flat strength boost. Each
//! kind also carries primary and secondary taste affinities, used by the
//! relative-taste heuristic in [`relative`] to estimate how an ingredient
//! shifts the dominance outcome.

mod relative;

pub use relative::{TasteCache, relative_taste_vector};

use strum::IntoEnumIterator;

use crate::kinds::{EffectKind, Taste};
use crate::vector::TasteVector;

/// One entry of a ranked taste vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TasteRank {
    pub taste: Taste,
    pub amount: i32,
}

/// Ranks all five tastes by amount, descending. Ties break toward the
/// earlier [`Taste`] variant.
pub fn rank_tastes(tastes: &TasteVector) -> Vec<TasteRank> {
    let mut ranked: Vec<TasteRank> = Taste::iter()
        .map(|taste| TasteRank { taste, amount: tastes[taste] })
        .collect();
    ranked.sort_by_key(|rank| std::cmp::Reverse(rank.amount));
    ranked
}

/// The kind favored by a (strongest, second-strongest) taste pair.
pub fn dominant_kind(first: Taste, second: Taste) -> EffectKind {
    use EffectKind::*;
    use Taste::*;
    match (first, second) {
        (Sweet, Sour) => Snare,
        (Sweet, Spicy) => Rally,
        (Sweet, _) => Brood,
        (Salty, Bitter) => Wisdom,
        (Salty, _) => Lure,
        (Sour, Sweet) => Snare,
        (Sour, _) => Shrink,
        (Bitter, Salty) => Wisdom,
        (Bitter, _) => Forage,
        (Spicy, Sweet) => Rally,
        (Spicy, _) => Titan,
    }
}

/// The kind boosted by a ranked taste vector, if any.
///
/// No boost applies while the strongest taste is not positive. When only
/// one taste is positive it plays both roles in the dominance pair.
pub fn boosted_kind_from_ranking(ranked: &[TasteRank]) -> Option<EffectKind> {
    let first = ranked.first()?;
    if first.amount <= 0 {
        return None;
    }
    let second = match ranked.get(1) {
        Some(rank) if rank.amount > 0 => rank.taste,
        _ => first.taste,
    };
    Some(dominant_kind(first.taste, second))
}

/// Tastes that must lead the ranking for a kind's boost to hold.
///
/// When a kind lists more than one, the list is a subset of its
/// secondary tastes. The two herb-only kinds have no taste affinity.
pub fn primary_tastes(kind: EffectKind) -> &'static [Taste] {
    use Taste::*;
    match kind {
        EffectKind::Brood => &[Sweet],
        EffectKind::Titan => &[Spicy],
        EffectKind::Shrink => &[Sour],
        EffectKind::Forage => &[Bitter],
        EffectKind::Lure => &[Salty],
        EffectKind::Wisdom => &[Bitter, Salty],
        EffectKind::Snare => &[Sweet, Sour],
        EffectKind::Rally => &[Sweet, Spicy],
        EffectKind::Crest | EffectKind::Radiant => &[],
    }
}

/// Tastes that support a kind from second place.
pub fn secondary_tastes(kind: EffectKind) -> &'static [Taste] {
    use Taste::*;
    match kind {
        EffectKind::Brood => &[Salty, Bitter],
        EffectKind::Titan => &[Salty, Bitter, Sour],
        EffectKind::Shrink => &[Salty, Bitter, Spicy],
        EffectKind::Forage => &[Spicy, Sour, Sweet],
        EffectKind::Lure => &[Sweet, Spicy, Sour],
        EffectKind::Wisdom => &[Salty, Bitter],
        EffectKind::Snare => &[Sour, Sweet],
        EffectKind::Rally => &[Spicy, Sweet],
        EffectKind::Crest | EffectKind::Radiant => &[],
    }
}
