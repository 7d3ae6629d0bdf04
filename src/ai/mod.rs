//! Computer players: the agent interface, the line heuristic, the one-ply
//! decision policy and a random fallback.

mod agent;
pub mod heuristic;
mod policy;
mod random;

pub use agent::Agent;
pub use heuristic::{LineHeuristic, MoveEvaluator};
pub use policy::HeuristicAgent;
pub use random::RandomAgent;
