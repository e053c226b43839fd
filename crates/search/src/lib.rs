//! Heuristic recipe search.
//!
//! Given an immutable ingredient catalog and a requested effect, the search
//! assembles a short ingredient sequence whose realized effects include the
//! request. It is a depth-first, memoized backtracking search guided by the
//! candidate scorer in [`score`]: at every step the scorer ranks the whole
//! catalog against target vectors derived from a placement configuration
//! ([`target`]) and the builder ([`builder`]) branches over the top few.
//!
//! The multi-effect solver seam lives in [`solver`]; the single-effect
//! builder never calls it.

pub mod builder;
pub mod score;
pub mod solver;
pub mod target;

pub use builder::{RecipeSearch, SearchOutcome};
pub use solver::{RecipeSolver, SolverModel, SolverOutcome};
pub use target::PlacementConfig;
