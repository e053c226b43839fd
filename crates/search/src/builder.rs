//! Recursive, memoized backtracking search.

use std::collections::HashSet;

use tracing::debug;

use picnic_core::{
    CategoryVector, EffectKind, Ingredient, MAX_CONDIMENTS, MAX_FILLINGS, MAX_PIECES, Recipe,
    RealizedEffect, RequestedEffect, StrengthVector, TasteCache, TasteVector,
    boost_strength_vector, boosted_kind_from_ranking, effects_match, evaluate_effects,
    kind_has_category, rank_tastes, requested_effects_valid,
};

use crate::score::{CandidateQuery, select_candidates};
use crate::target::{PlacementConfig, placement_configs, select_effect_at_slot};

/// Result of one top-level search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Recipe),
    /// The requested effect is not expressible; no search was attempted.
    InvalidRequest,
    /// The search space was exhausted without a match.
    Exhausted,
    /// The step budget ran out first; a recipe may still exist.
    BudgetSpent,
}

impl SearchOutcome {
    pub fn into_recipe(self) -> Option<Recipe> {
        match self {
            SearchOutcome::Found(recipe) => Some(recipe),
            _ => None,
        }
    }
}

/// Special-boost herbs a request calls for: two for the strongest kind,
/// one for the secondary herb kind or any level-3 target.
pub fn special_target_for(requested: &RequestedEffect) -> usize {
    match requested.kind {
        EffectKind::Radiant => 2,
        EffectKind::Crest => 1,
        _ if requested.level >= 3 => 1,
        _ => 0,
    }
}

/// Per-invocation bookkeeping shared down the recursion.
struct SearchContext {
    visited: HashSet<String>,
    taste_cache: TasteCache,
    steps: u64,
    budget: Option<u64>,
    budget_spent: bool,
}

impl SearchContext {
    fn spend_step(&mut self) -> bool {
        self.steps += 1;
        if let Some(budget) = self.budget {
            if self.steps > budget {
                self.budget_spent = true;
                return true;
            }
        }
        false
    }

    /// Marks the node's ingredient multiset visited; false if already seen.
    fn mark_visited(&mut self, node: &SearchNode, ingredients: &[Ingredient]) -> bool {
        let mut names: Vec<&str> = node
            .fillings
            .iter()
            .chain(&node.condiments)
            .map(|&index| ingredients[index].name.as_str())
            .collect();
        names.sort_unstable();
        self.visited.insert(names.join(","))
    }
}

/// One node of the search tree. Children derive a fresh copy; nothing is
/// mutated in place across branches.
#[derive(Clone, Default)]
struct SearchNode {
    fillings: Vec<usize>,
    condiments: Vec<usize>,
    skip: HashSet<String>,
    strength: StrengthVector,
    category: CategoryVector,
    taste: TasteVector,
    boosted: Option<EffectKind>,
    effects: Vec<RealizedEffect>,
    found: bool,
    allow_special: bool,
}

/// Depth-first recipe search over a borrowed catalog.
///
/// The catalog is never mutated; independent searches over the same slice
/// are safe to run in parallel, each owning its own visited set and cache.
pub struct RecipeSearch<'a> {
    ingredients: &'a [Ingredient],
    step_budget: Option<u64>,
}

impl<'a> RecipeSearch<'a> {
    pub fn new(ingredients: &'a [Ingredient]) -> Self {
        Self { ingredients, step_budget: None }
    }

    /// Caps the number of search-tree nodes expanded. Without a budget the
    /// search runs until the (bounded, but possibly large) tree is spent.
    pub fn with_step_budget(mut self, steps: u64) -> Self {
        self.step_budget = Some(steps);
        self
    }

    /// First-found recipe realizing `requested`, or `None`. "No recipe" is
    /// an expected outcome, not an error; use [`RecipeSearch::search`] to
    /// distinguish exhaustion from a spent budget.
    pub fn make_recipe_for_effect(&self, requested: &RequestedEffect) -> Option<Recipe> {
        self.search(requested).into_recipe()
    }

    pub fn search(&self, requested: &RequestedEffect) -> SearchOutcome {
        if !requested_effects_valid(std::slice::from_ref(requested)) {
            return SearchOutcome::InvalidRequest;
        }
        let num_special = special_target_for(requested);
        let configs = placement_configs(std::slice::from_ref(requested), num_special)
            .into_iter()
            .next()
            .unwrap_or_default();
        if configs.is_empty() {
            return SearchOutcome::Exhausted;
        }
        debug!(
            kind = %requested.kind,
            category = %requested.category,
            level = requested.level,
            num_special,
            "starting recipe search"
        );

        let mut ctx = SearchContext {
            visited: HashSet::new(),
            taste_cache: TasteCache::new(),
            steps: 0,
            budget: self.step_budget,
            budget_spent: false,
        };
        let root = SearchNode { allow_special: num_special > 0, ..SearchNode::default() };
        match self.recurse(&mut ctx, requested, &configs, num_special, &root) {
            Some(recipe) => SearchOutcome::Found(recipe),
            None if ctx.budget_spent => SearchOutcome::BudgetSpent,
            None => SearchOutcome::Exhausted,
        }
    }

    fn recurse(
        &self,
        ctx: &mut SearchContext,
        target: &RequestedEffect,
        configs: &[PlacementConfig],
        num_special: usize,
        node: &SearchNode,
    ) -> Option<Recipe> {
        if ctx.spend_step() {
            return None;
        }
        if node.fillings.len() >= MAX_FILLINGS && node.condiments.len() >= MAX_CONDIMENTS {
            return None;
        }
        if !ctx.mark_visited(node, self.ingredients) {
            return None;
        }

        let boosted_strength = boost_strength_vector(&node.strength, node.boosted);
        let candidate_effects: Vec<Option<RealizedEffect>> = configs
            .iter()
            .map(|config| select_effect_at_slot(&node.effects, config))
            .collect();
        let condiments_allowed = !node.found || node.condiments.is_empty();

        // Among the slots our placements watch, prefer one already related
        // to the target; its gaps decide which dimensions still need work.
        let selected = if candidate_effects.len() > 1 {
            candidate_effects
                .iter()
                .flatten()
                .find(|effect| {
                    effect.kind == target.kind
                        || effect.category == Some(target.category)
                        || effect.level >= target.level
                })
                .copied()
        } else {
            None
        }
        .or_else(|| candidate_effects.first().copied().flatten());

        let check_strength = (node.found && condiments_allowed)
            || (node.found
                && target.kind != EffectKind::Radiant
                && target.kind != EffectKind::Crest)
            || selected.is_none_or(|effect| effect.kind != target.kind);
        let check_category = node.found
            || (kind_has_category(target.kind)
                && selected.is_none_or(|effect| effect.category != Some(target.category)));
        let check_level = selected.is_none_or(|effect| effect.level < target.level);
        let remaining_fillings = if !node.found || node.fillings.is_empty() {
            MAX_FILLINGS - node.fillings.len()
        } else {
            0
        };
        let remaining_condiments = if condiments_allowed {
            MAX_CONDIMENTS - node.condiments.len()
        } else {
            0
        };

        let config_lists = [configs.to_vec()];
        let query = CandidateQuery {
            requested: std::slice::from_ref(target),
            config_lists: &config_lists,
            boosted_strength: &boosted_strength,
            category: &node.category,
            taste: &node.taste,
            check_strength,
            check_category,
            check_level,
            remaining_fillings,
            remaining_condiments,
            allow_special: node.allow_special,
            skip: &node.skip,
        };
        let candidates = select_candidates(self.ingredients, &query, &mut ctx.taste_cache);

        let mut completed: Vec<Recipe> = Vec::new();
        for &index in &candidates {
            let ingredient = &self.ingredients[index];
            let mut child = node.clone();
            if ingredient.is_filling() {
                child.fillings.push(index);
            } else {
                child.condiments.push(index);
            }
            let uses = child
                .fillings
                .iter()
                .chain(&child.condiments)
                .filter(|&&i| i == index)
                .count() as u32;
            if uses * ingredient.pieces + ingredient.pieces > MAX_PIECES {
                child.skip.insert(ingredient.name.clone());
            }

            child.strength = node.strength.add(&ingredient.strength);
            child.category = node.category.add(&ingredient.category);
            child.taste = node.taste.add(&ingredient.taste);
            child.boosted = boosted_kind_from_ranking(&rank_tastes(&child.taste));
            child.effects = evaluate_effects(&child.strength, &child.category, &child.taste);
            child.found = effects_match(&child.effects, std::slice::from_ref(target));

            if child.found && !child.fillings.is_empty() && !child.condiments.is_empty() {
                debug!(
                    ingredient = %ingredient.name,
                    fillings = child.fillings.len(),
                    condiments = child.condiments.len(),
                    "target effect realized"
                );
                completed.push(self.build_recipe(&child));
                continue;
            }

            let specials = child
                .condiments
                .iter()
                .filter(|&&i| self.ingredients[i].is_special)
                .count();
            child.allow_special = node.allow_special && specials < num_special;
            if let Some(recipe) = self.recurse(ctx, target, configs, num_special, &child) {
                completed.push(recipe);
            }
        }

        // Join rule: strongly prefer fewer fillings, weakly fewer condiments.
        completed
            .into_iter()
            .min_by_key(|recipe| 10 * recipe.fillings.len() + recipe.condiments.len())
    }

    fn build_recipe(&self, node: &SearchNode) -> Recipe {
        Recipe {
            fillings: node
                .fillings
                .iter()
                .map(|&index| self.ingredients[index].clone())
                .collect(),
            condiments: node
                .condiments
                .iter()
                .map(|&index| self.ingredients[index].clone())
                .collect(),
            strength: node.strength,
            category: node.category,
            taste: node.taste,
            effects: node.effects.clone(),
        }
    }
}
