//! Seam for the alternate multi-effect solve mode.
//!
//! Multi-effect requests can be handed to an external optimizer instead of
//! the backtracking builder. The solver is a black box behind this trait:
//! it receives the requested effects and answers either with per-ingredient
//! counts or with an infeasibility signal. The single-effect builder never
//! goes through here.

use std::collections::BTreeMap;

use picnic_core::RequestedEffect;

/// A multi-effect request in solver form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverModel {
    pub requested: Vec<RequestedEffect>,
}

/// Solver verdict.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverOutcome {
    /// No ingredient assignment can realize the requested effects.
    Infeasible,
    /// Non-negative ingredient counts by name, plus the objective reached.
    Assignment {
        counts: BTreeMap<String, u32>,
        objective: f64,
    },
}

/// An external solver capable of answering a [`SolverModel`].
pub trait RecipeSolver {
    fn solve(&self, model: &SolverModel) -> SolverOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use picnic_core::{Category, EffectKind};

    struct FixedSolver(SolverOutcome);

    impl RecipeSolver for FixedSolver {
        fn solve(&self, _model: &SolverModel) -> SolverOutcome {
            self.0.clone()
        }
    }

    #[test]
    fn solver_contract_round_trips() {
        let model = SolverModel {
            requested: vec![RequestedEffect {
                kind: EffectKind::Lure,
                category: Category::Fire,
                level: 2,
            }],
        };
        let solver = FixedSolver(SolverOutcome::Assignment {
            counts: BTreeMap::from([("Sea Salt".to_string(), 2)]),
            objective: 1.5,
        });
        match solver.solve(&model) {
            SolverOutcome::Assignment { counts, .. } => {
                assert_eq!(counts.get("Sea Salt"), Some(&2));
            }
            SolverOutcome::Infeasible => panic!("expected an assignment"),
        }
        assert_eq!(FixedSolver(SolverOutcome::Infeasible).solve(&model), SolverOutcome::Infeasible);
    }
}
