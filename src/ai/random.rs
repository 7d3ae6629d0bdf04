use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::{legal_factors, Board, GameState};

/// An agent that selects uniformly at random from legal factors.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform pick from an already computed legal set
    pub fn pick(&mut self, legal: &[u8]) -> Option<u8> {
        legal.choose(&mut self.rng).copied()
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_factor(&mut self, board: &mut Board, state: &GameState) -> Option<u8> {
        let legal = legal_factors(board, state.active_factor());
        self.pick(&legal)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_random_agent_selects_legal_factor() {
        let mut agent = RandomAgent::with_seed(11);
        let mut board = Board::new();
        board.claim(12, Player::Human).unwrap();
        board.claim(24, Player::Computer).unwrap();
        let state = GameState::new(4, Player::Computer).unwrap();
        let legal = legal_factors(&board, 4);

        for _ in 0..100 {
            let factor = agent.choose_factor(&mut board, &state).unwrap();
            assert!(legal.contains(&factor), "Factor {} is not legal", factor);
        }
    }

    #[test]
    fn test_random_agent_covers_all_choices() {
        let mut agent = RandomAgent::with_seed(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(agent.pick(&[2, 4, 8]).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_random_agent_with_nothing_legal() {
        let mut agent = RandomAgent::with_seed(0);
        assert_eq!(agent.pick(&[]), None);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
