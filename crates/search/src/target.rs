//! Placement configurations and the target vectors they imply.
//!
//! A placement configuration pins down where a requested effect must land
//! in the evaluator's ranked output: which strength rank the kind must
//! reach, and which category rank its category and level are drawn from
//! under a given allocation pattern. Target vectors run the evaluator in
//! reverse: the smallest accumulated amounts that would put the request in
//! its slot, starting from the current state and only ever raising values.

use picnic_core::{
    AllocationPattern, Category, CategoryRank, CategoryVector, EffectKind, KindRank,
    MAX_REALIZED_EFFECTS, RealizedEffect, RequestedEffect, StrengthVector, kind_has_category,
    level_threshold,
};

/// Where a requested effect must land in the evaluator's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementConfig {
    pub pattern: AllocationPattern,
    /// Strength rank the requested kind must reach.
    pub effect_slot: usize,
    /// Category rank index the slot draws its category and level from.
    pub category_slot: usize,
}

/// Strength ranks a kind can occupy given the special-boost herb count.
///
/// Herbs dominate the leading ranks: with two herbs the `Crest` strength
/// always outranks `Radiant`, so `Radiant` can only ever realize from the
/// second slot, and ordinary kinds are pushed below every herb-held slot.
fn effect_slots(kind: EffectKind, num_special: usize) -> Vec<usize> {
    match kind {
        EffectKind::Radiant if num_special >= 2 => vec![1],
        EffectKind::Radiant => Vec::new(),
        EffectKind::Crest if num_special >= 1 => vec![0],
        EffectKind::Crest => Vec::new(),
        _ => (num_special..MAX_REALIZED_EFFECTS).collect(),
    }
}

/// Enumerates viable placements per requested effect.
///
/// Level-3 requests exclude the [`AllocationPattern::Split`] pattern: a
/// level-3 amount at a non-leading category rank would force the leading
/// rank past the threshold that selects a different pattern.
pub fn placement_configs(
    requested: &[RequestedEffect],
    num_special: usize,
) -> Vec<Vec<PlacementConfig>> {
    requested
        .iter()
        .map(|req| {
            let mut configs = Vec::new();
            for pattern in [
                AllocationPattern::Split,
                AllocationPattern::LeadDouble,
                AllocationPattern::LeadTriple,
            ] {
                if req.level >= 3 && pattern == AllocationPattern::Split {
                    continue;
                }
                for effect_slot in effect_slots(req.kind, num_special) {
                    configs.push(PlacementConfig {
                        pattern,
                        effect_slot,
                        category_slot: pattern.slots()[effect_slot],
                    });
                }
            }
            configs
        })
        .collect()
}

/// Cartesian product of per-effect config lists, keeping only structurally
/// possible combinations: one shared pattern, distinct effect slots.
pub fn permute_config_sets(config_lists: &[Vec<PlacementConfig>]) -> Vec<Vec<PlacementConfig>> {
    let mut sets: Vec<Vec<PlacementConfig>> = vec![Vec::new()];
    for list in config_lists {
        let mut next = Vec::new();
        for set in &sets {
            for config in list {
                let compatible = set
                    .iter()
                    .all(|c| c.pattern == config.pattern && c.effect_slot != config.effect_slot);
                if compatible {
                    let mut extended = set.clone();
                    extended.push(*config);
                    next.push(extended);
                }
            }
        }
        sets = next;
    }
    sets
}

/// The realized effect currently occupying a config's slot, if any.
pub fn select_effect_at_slot(
    effects: &[RealizedEffect],
    config: &PlacementConfig,
) -> Option<RealizedEffect> {
    effects.get(config.effect_slot).copied()
}

/// Category a placement steers toward. Category-less kinds anchor on
/// whatever currently holds their category rank.
fn anchor_category(
    req: &RequestedEffect,
    config: &PlacementConfig,
    ranked: &[CategoryRank],
) -> Category {
    if kind_has_category(req.kind) {
        req.category
    } else {
        ranked
            .get(config.category_slot)
            .map_or(Category::Normal, |rank| rank.category)
    }
}

/// Smallest category vector that places every request's category at its
/// allocated rank with enough amount for its level.
///
/// Amounts are only raised, never lowered. Returns `None` when the config
/// set is unsatisfiable from the current state: two requests claiming one
/// rank with different categories, or a lower rank that cannot stay below
/// a higher one. With `force_diff` the result is guaranteed to differ from
/// `current` so a delta always exists.
pub fn target_category_vector(
    requested: &[RequestedEffect],
    config_set: &[PlacementConfig],
    ranked: &[CategoryRank],
    current: &CategoryVector,
    force_diff: bool,
) -> Option<CategoryVector> {
    let mut assignments: Vec<(usize, Category, i32)> = Vec::new();
    for (req, config) in requested.iter().zip(config_set) {
        let category = anchor_category(req, config, ranked);
        let mut floor = level_threshold(req.level);
        if config.pattern == AllocationPattern::LeadTriple && config.category_slot == 0 {
            // The pattern itself requires this much on the leading rank.
            floor = floor.max(480);
        }
        match assignments.iter_mut().find(|(slot, ..)| *slot == config.category_slot) {
            Some((_, existing, merged)) => {
                if *existing != category {
                    return None;
                }
                *merged = (*merged).max(floor);
            }
            None => assignments.push((config.category_slot, category, floor)),
        }
    }
    assignments.sort_by_key(|&(slot, ..)| slot);

    let claimed: Vec<Category> = assignments.iter().map(|&(_, category, _)| category).collect();
    let rivals: Vec<CategoryRank> = ranked
        .iter()
        .filter(|rank| !claimed.contains(&rank.category))
        .copied()
        .collect();

    let mut target = *current;
    let mut above: Option<(Category, i32)> = None;
    for (index, &(slot, category, floor)) in assignments.iter().enumerate() {
        // Ranks below this slot not claimed by us get filled by the
        // strongest rivals; we must stay ahead of the next one.
        let open_below = slot - index;
        let rank_floor = rivals
            .get(open_below)
            .map_or(1, |rival| rival.amount + i32::from(rival.category < category));
        let amount = target[category].max(floor).max(rank_floor).max(1);
        if let Some((above_category, above_amount)) = above {
            if amount > above_amount || (amount == above_amount && category < above_category) {
                return None;
            }
        }
        target[category] = amount;
        above = Some((category, amount));
    }

    if force_diff && target == *current {
        if let Some(&(_, category, _)) = assignments.first() {
            target[category] += 1;
        }
    }
    Some(target)
}

/// Category amounts needed for each request's level, ranking ignored.
pub fn target_level_vector(
    requested: &[RequestedEffect],
    config_set: &[PlacementConfig],
    ranked: &[CategoryRank],
    current: &CategoryVector,
) -> CategoryVector {
    let mut target = *current;
    for (req, config) in requested.iter().zip(config_set) {
        let category = anchor_category(req, config, ranked);
        let floor = level_threshold(req.level);
        if target[category] < floor {
            target[category] = floor;
        }
    }
    target
}

/// Smallest strength vector that ranks every requested kind at its effect
/// slot, given the current (taste-boosted) standings.
pub fn target_strength_vector(
    requested: &[RequestedEffect],
    config_set: &[PlacementConfig],
    ranked: &[KindRank],
    current: &StrengthVector,
) -> StrengthVector {
    let claimed: Vec<EffectKind> = requested.iter().map(|req| req.kind).collect();
    let rivals: Vec<KindRank> = ranked
        .iter()
        .filter(|rank| !claimed.contains(&rank.kind))
        .copied()
        .collect();

    let mut order: Vec<(usize, EffectKind)> = requested
        .iter()
        .zip(config_set)
        .map(|(req, config)| (config.effect_slot, req.kind))
        .collect();
    order.sort_by_key(|&(slot, _)| slot);

    let mut target = *current;
    for (index, &(slot, kind)) in order.iter().enumerate() {
        let open_below = slot - index;
        let needed = rivals
            .get(open_below)
            .map_or(1, |rival| rival.amount + i32::from(rival.kind < kind))
            .max(1);
        if target[kind] < needed {
            target[kind] = needed;
        }
    }
    target
}
