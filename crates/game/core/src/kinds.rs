//! Fixed enumerations for effect kinds, elemental categories, and tastes.
//!
//! Every accumulated vector in the game is indexed positionally by one of
//! these enumerations; dimensionality is fixed at compile time and never
//! varies at runtime. Declaration order is the canonical order: ranking
//! ties always break toward the earlier variant, never arbitrarily.

/// Effect kinds a finished recipe can produce.
///
/// `Radiant` and `Crest` are the rare kinds that only special-boost herbs
/// supply; `Brood` is the one kind whose realized effect carries no
/// elemental category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EffectKind {
    /// Hatching-related effect (category-less).
    Brood,
    /// Capture-related effect.
    Snare,
    /// Experience-related effect.
    Wisdom,
    /// Item-find effect.
    Forage,
    /// Group-battle effect.
    Rally,
    /// Large-size effect.
    Titan,
    /// Small-size effect.
    Shrink,
    /// Wild-encounter effect.
    Lure,
    /// Title effect; requires one special-boost herb.
    Crest,
    /// Radiant effect, the strongest kind; requires two special-boost herbs.
    Radiant,
}

/// Elemental categories a realized effect can be bound to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

/// Taste dimensions accumulated from ingredient flavor profiles.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Taste {
    Sweet,
    Salty,
    Sour,
    Bitter,
    Spicy,
}

/// Whether a kind's realized effect is bound to an elemental category.
///
/// `Brood` effects apply regardless of category; a requested category is
/// ignored both when matching and when steering the search toward it.
pub fn kind_has_category(kind: EffectKind) -> bool {
    kind != EffectKind::Brood
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn enumeration_sizes_are_fixed() {
        assert_eq!(EffectKind::COUNT, 10);
        assert_eq!(Category::COUNT, 18);
        assert_eq!(Taste::COUNT, 5);
    }

    #[test]
    fn declaration_order_is_canonical_order() {
        let kinds: Vec<EffectKind> = EffectKind::iter().collect();
        assert_eq!(kinds[0], EffectKind::Brood);
        assert_eq!(kinds[9], EffectKind::Radiant);
        assert!(EffectKind::Brood < EffectKind::Radiant);
        assert!(Category::Normal < Category::Fairy);
    }

    #[test]
    fn only_brood_is_category_less() {
        for kind in EffectKind::iter() {
            assert_eq!(kind_has_category(kind), kind != EffectKind::Brood);
        }
    }
}
