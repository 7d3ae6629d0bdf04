use crate::game::{Board, GameState};

/// Universal interface for computer players.
pub trait Agent {
    /// Choose a factor for the player whose turn it is in `state`, or `None`
    /// when no factor is legal. The board is lent mutably so the agent can
    /// probe hypothetical claims; it must be left as it was found.
    fn choose_factor(&mut self, board: &mut Board, state: &GameState) -> Option<u8>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
