use tracing::debug;

use super::agent::Agent;
use super::heuristic::{LineHeuristic, MoveEvaluator};
use super::random::RandomAgent;
use crate::game::{find_winner, legal_factors, Board, GameState, Player, FACTORS};

/// One-ply computer player. In priority order it takes an immediate win,
/// blocks the opponent's immediate win, plays the best heuristic score, and
/// only then falls back to a random legal factor.
pub struct HeuristicAgent {
    evaluator: Box<dyn MoveEvaluator>,
    fallback: RandomAgent,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            evaluator: Box::new(LineHeuristic),
            fallback: RandomAgent::new(),
        }
    }

    /// Deterministic fallback choices, for tests and reproducible games
    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            evaluator: Box::new(LineHeuristic),
            fallback: RandomAgent::with_seed(seed),
        }
    }

    pub fn with_evaluator(evaluator: Box<dyn MoveEvaluator>, fallback: RandomAgent) -> Self {
        HeuristicAgent {
            evaluator,
            fallback,
        }
    }

    fn wins(board: &mut Board, product: u32, player: Player) -> bool {
        board
            .probe(product, player, |b, _| find_winner(b) == Some(player))
            .unwrap_or(false)
    }

    /// First legal factor that wins on the spot
    fn winning_factor(board: &mut Board, state: &GameState, legal: &[u8], me: Player) -> Option<u8> {
        legal
            .iter()
            .copied()
            .find(|&f| Self::wins(board, state.product_for(f), me))
    }

    /// Factor that takes the product the opponent would win with next
    fn blocking_factor(board: &mut Board, state: &GameState, legal: &[u8], me: Player) -> Option<u8> {
        let opponent = me.other();
        for their_factor in FACTORS {
            let threat = state.product_for(their_factor);
            if !board.is_legal(threat) || !Self::wins(board, threat, opponent) {
                continue;
            }
            if let Some(&f) = legal.iter().find(|&&f| state.product_for(f) == threat) {
                return Some(f);
            }
        }
        None
    }

    /// Highest score wins; ties keep the lower factor
    fn best_scored(&self, board: &mut Board, state: &GameState, legal: &[u8], me: Player) -> Option<u8> {
        let mut best = None;
        let mut best_score = i32::MIN;
        for &f in legal {
            let score = self.evaluator.evaluate(board, state.product_for(f), me);
            if score > best_score {
                best_score = score;
                best = Some(f);
            }
        }
        best
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn choose_factor(&mut self, board: &mut Board, state: &GameState) -> Option<u8> {
        let me = state.turn();
        let legal = legal_factors(board, state.active_factor());
        if legal.is_empty() {
            return None;
        }

        if let Some(f) = Self::winning_factor(board, state, &legal, me) {
            debug!(factor = f, "taking winning factor");
            return Some(f);
        }
        if let Some(f) = Self::blocking_factor(board, state, &legal, me) {
            debug!(factor = f, "blocking opponent win");
            return Some(f);
        }
        if let Some(f) = self.best_scored(board, state, &legal, me) {
            debug!(factor = f, "best heuristic factor");
            return Some(f);
        }
        let f = self.fallback.pick(&legal);
        debug!(factor = ?f, "random fallback factor");
        f
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
