use std::ops::RangeInclusive;

use rand::Rng;

use super::{Board, Player};

/// Factors a player may choose from.
pub const FACTORS: RangeInclusive<u8> = 1..=9;

/// Whose turn it is and the factor they must multiply by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    active_factor: u8,
    turn: Player,
}

impl GameState {
    /// Build a state, rejecting an active factor outside 1..=9
    pub fn new(active_factor: u8, turn: Player) -> Option<Self> {
        FACTORS
            .contains(&active_factor)
            .then_some(GameState { active_factor, turn })
    }

    /// Random active factor and random first player
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let active_factor = rng.random_range(FACTORS);
        let turn = if rng.random_bool(0.5) {
            Player::Human
        } else {
            Player::Computer
        };
        GameState { active_factor, turn }
    }

    pub fn active_factor(&self) -> u8 {
        self.active_factor
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub(crate) fn set_active_factor(&mut self, factor: u8) {
        debug_assert!(FACTORS.contains(&factor));
        self.active_factor = factor;
    }

    pub(crate) fn swap_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// Product targeted by choosing `factor` now
    pub fn product_for(&self, factor: u8) -> u32 {
        product(factor, self.active_factor)
    }
}

pub fn product(factor: u8, active_factor: u8) -> u32 {
    u32::from(factor) * u32::from(active_factor)
}

/// Factors whose product is still free on the board, ascending.
pub fn legal_factors(board: &Board, active_factor: u8) -> Vec<u8> {
    FACTORS
        .filter(|&f| board.is_legal(product(f, active_factor)))
        .collect()
}
