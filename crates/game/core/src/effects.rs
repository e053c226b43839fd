//! The effect evaluator: accumulated vectors in, realized effects out.
//!
//! Evaluation is a pipeline: boost the strength vector by the taste
//! dominance winner, rank kinds and categories, pick a category allocation
//! pattern from the top two category amounts, then materialize up to three
//! effects with levels read off the allocated category amounts.

use strum::IntoEnumIterator;

use crate::ingredient::{RealizedEffect, RequestedEffect, effect_satisfies};
use crate::kinds::{Category, EffectKind, kind_has_category};
use crate::taste::{boosted_kind_from_ranking, rank_tastes};
use crate::vector::{CategoryVector, StrengthVector, TasteVector};

/// Flat strength bonus granted to the taste-dominant kind.
pub const TASTE_BOOST: i32 = 100;

/// A finished recipe never realizes more than three effects.
pub const MAX_REALIZED_EFFECTS: usize = 3;

/// Minimum category amount for levels 1, 2, and 3.
pub const LEVEL_THRESHOLDS: [i32; 3] = [1, 180, 380];

/// One entry of a ranked strength vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindRank {
    pub kind: EffectKind,
    pub amount: i32,
}

/// One entry of a ranked category vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryRank {
    pub category: Category,
    pub amount: i32,
}

/// How the ranked categories are dealt out to the three effect slots.
///
/// `slots()[i]` is the category rank index effect slot `i` draws its
/// category and level from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocationPattern {
    /// Balanced top: each slot gets a different category.
    Split,
    /// Dominant top category: it covers the first two slots.
    LeadDouble,
    /// Overwhelming top category: it covers all three slots.
    LeadTriple,
}

impl AllocationPattern {
    /// Chooses the pattern from the top two category amounts.
    pub fn from_amounts(first: i32, second: i32) -> Self {
        if first >= 480 {
            AllocationPattern::LeadTriple
        } else if first >= 280 || first - second > 105 {
            AllocationPattern::LeadDouble
        } else {
            AllocationPattern::Split
        }
    }

    /// Category rank index per effect slot.
    pub fn slots(self) -> [usize; 3] {
        match self {
            AllocationPattern::Split => [0, 2, 1],
            AllocationPattern::LeadDouble => [0, 0, 2],
            AllocationPattern::LeadTriple => [0, 0, 0],
        }
    }
}

/// Applies the taste-dominance bonus for `boosted`, if any.
pub fn boost_strength_vector(
    strength: &StrengthVector,
    boosted: Option<EffectKind>,
) -> StrengthVector {
    let mut out = *strength;
    if let Some(kind) = boosted {
        out[kind] += TASTE_BOOST;
    }
    out
}

/// Ranks kinds with positive strength, descending. Ties break toward the
/// earlier variant.
pub fn rank_strengths(strength: &StrengthVector) -> Vec<KindRank> {
    let mut ranked: Vec<KindRank> = EffectKind::iter()
        .map(|kind| KindRank { kind, amount: strength[kind] })
        .filter(|rank| rank.amount > 0)
        .collect();
    ranked.sort_by_key(|rank| std::cmp::Reverse(rank.amount));
    ranked
}

/// Ranks categories with positive amounts, descending. Ties break toward
/// the earlier variant.
pub fn rank_categories(amounts: &CategoryVector) -> Vec<CategoryRank> {
    let mut ranked: Vec<CategoryRank> = Category::iter()
        .map(|category| CategoryRank { category, amount: amounts[category] })
        .filter(|rank| rank.amount > 0)
        .collect();
    ranked.sort_by_key(|rank| std::cmp::Reverse(rank.amount));
    ranked
}

/// Strength level earned by a category amount.
pub fn level_for_amount(amount: i32) -> u8 {
    if amount >= LEVEL_THRESHOLDS[2] {
        3
    } else if amount >= LEVEL_THRESHOLDS[1] {
        2
    } else {
        1
    }
}

/// Minimum category amount needed for `level`.
pub fn level_threshold(level: u8) -> i32 {
    LEVEL_THRESHOLDS[(level as usize).saturating_sub(1).min(2)]
}

/// Evaluates the accumulated vectors of a recipe into its realized effects.
///
/// Up to [`MAX_REALIZED_EFFECTS`] effects materialize, strongest kind
/// first. A slot only materializes when a category rank exists at its
/// allocated index; category-less kinds still draw their level from that
/// rank but realize with no category.
pub fn evaluate_effects(
    strength: &StrengthVector,
    category: &CategoryVector,
    taste: &TasteVector,
) -> Vec<RealizedEffect> {
    let ranked_tastes = rank_tastes(taste);
    let boosted = boosted_kind_from_ranking(&ranked_tastes);
    let boosted_strength = boost_strength_vector(strength, boosted);
    let kind_ranks = rank_strengths(&boosted_strength);
    let category_ranks = rank_categories(category);

    let first = category_ranks.first().map_or(0, |r| r.amount);
    let second = category_ranks.get(1).map_or(0, |r| r.amount);
    let pattern = AllocationPattern::from_amounts(first, second);
    let slots = pattern.slots();

    let mut effects = Vec::with_capacity(MAX_REALIZED_EFFECTS);
    for (slot, rank) in kind_ranks.iter().take(MAX_REALIZED_EFFECTS).enumerate() {
        let Some(category_rank) = category_ranks.get(slots[slot]) else {
            continue;
        };
        effects.push(RealizedEffect {
            kind: rank.kind,
            category: kind_has_category(rank.kind).then_some(category_rank.category),
            level: level_for_amount(category_rank.amount),
        });
    }
    effects
}

/// Whether every requested effect is satisfied by some realized effect.
pub fn effects_match(effects: &[RealizedEffect], requested: &[RequestedEffect]) -> bool {
    requested
        .iter()
        .all(|req| effects.iter().any(|effect| effect_satisfies(effect, req)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::Taste;

    #[test]
    fn pattern_selection_thresholds() {
        assert_eq!(AllocationPattern::from_amounts(480, 0), AllocationPattern::LeadTriple);
        assert_eq!(AllocationPattern::from_amounts(280, 270), AllocationPattern::LeadDouble);
        assert_eq!(AllocationPattern::from_amounts(200, 90), AllocationPattern::LeadDouble);
        assert_eq!(AllocationPattern::from_amounts(200, 100), AllocationPattern::Split);
    }

    #[test]
    fn levels_follow_thresholds() {
        assert_eq!(level_for_amount(1), 1);
        assert_eq!(level_for_amount(179), 1);
        assert_eq!(level_for_amount(180), 2);
        assert_eq!(level_for_amount(379), 2);
        assert_eq!(level_for_amount(380), 3);
        assert_eq!(level_threshold(1), 1);
        assert_eq!(level_threshold(3), 380);
    }

    #[test]
    fn ranking_skips_non_positive_amounts() {
        let strength: StrengthVector =
            [(EffectKind::Lure, 36), (EffectKind::Titan, 8)].into_iter().collect();
        let ranked = rank_strengths(&strength);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].kind, EffectKind::Lure);
    }

    #[test]
    fn taste_boost_can_reorder_kinds() {
        // Three chili sausages and a fire oil: spicy overtakes salty, so the
        // dominance boost lands on Titan and pushes it past Lure.
        let strength: StrengthVector = [
            (EffectKind::Lure, 36),
            (EffectKind::Titan, 8),
            (EffectKind::Rally, 4),
        ]
        .into_iter()
        .collect();
        let category: CategoryVector = [(Category::Fire, 188)].into_iter().collect();
        let taste: TasteVector =
            [(Taste::Salty, 30), (Taste::Spicy, 46)].into_iter().collect();

        let effects = evaluate_effects(&strength, &category, &taste);
        assert_eq!(
            effects,
            vec![
                RealizedEffect {
                    kind: EffectKind::Titan,
                    category: Some(Category::Fire),
                    level: 2,
                },
                RealizedEffect {
                    kind: EffectKind::Lure,
                    category: Some(Category::Fire),
                    level: 2,
                },
            ]
        );

        let requested = RequestedEffect {
            kind: EffectKind::Lure,
            category: Category::Fire,
            level: 2,
        };
        assert!(effects_match(&effects, &[requested]));
    }

    #[test]
    fn category_less_kind_realizes_without_category() {
        // Four hearth loaves and a sea salt.
        let strength: StrengthVector = [
            (EffectKind::Brood, 60),
            (EffectKind::Lure, 8),
            (EffectKind::Wisdom, 4),
        ]
        .into_iter()
        .collect();
        let category: CategoryVector =
            [(Category::Normal, 200), (Category::Steel, 4)].into_iter().collect();
        let taste: TasteVector =
            [(Taste::Sweet, 32), (Taste::Salty, 24)].into_iter().collect();

        let effects = evaluate_effects(&strength, &category, &taste);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].kind, EffectKind::Brood);
        assert_eq!(effects[0].category, None);
        assert_eq!(effects[0].level, 2);
    }

    #[test]
    fn overwhelming_category_covers_all_slots() {
        // Two herbs and a root jerky: every category sits at 500, ground at
        // 600, so the lead category owns all three slots at level 3.
        let strength: StrengthVector = [
            (EffectKind::Crest, 800),
            (EffectKind::Radiant, 500),
            (EffectKind::Snare, 12),
        ]
        .into_iter()
        .collect();
        let mut category = CategoryVector::ZERO;
        for c in Category::iter() {
            category[c] = 500;
        }
        category[Category::Ground] = 600;
        let taste: TasteVector =
            [(Taste::Sweet, 500), (Taste::Salty, 512)].into_iter().collect();

        let effects = evaluate_effects(&strength, &category, &taste);
        assert!(effects.contains(&RealizedEffect {
            kind: EffectKind::Radiant,
            category: Some(Category::Ground),
            level: 3,
        }));
        assert!(effects.iter().all(|e| e.level == 3));
    }

    #[test]
    fn evaluation_is_repeatable() {
        let strength: StrengthVector =
            [(EffectKind::Lure, 36), (EffectKind::Titan, 8)].into_iter().collect();
        let category: CategoryVector = [(Category::Fire, 188)].into_iter().collect();
        let taste: TasteVector =
            [(Taste::Salty, 30), (Taste::Spicy, 46)].into_iter().collect();
        let first = evaluate_effects(&strength, &category, &taste);
        let second = evaluate_effects(&strength, &category, &taste);
        assert_eq!(first, second);
    }

    #[test]
    fn no_effects_from_empty_vectors() {
        let effects =
            evaluate_effects(&StrengthVector::ZERO, &CategoryVector::ZERO, &TasteVector::ZERO);
        assert!(effects.is_empty());
    }
}
