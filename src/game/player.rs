use super::board::Owner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Convert player to the ownership marker it leaves on a cell
    pub fn to_owner(self) -> Owner {
        match self {
            Player::Human => Owner::Human,
            Player::Computer => Owner::Computer,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Computer => "Computer",
        }
    }

    /// Single-letter tag drawn on owned cells
    pub fn tag(self) -> char {
        match self {
            Player::Human => 'H',
            Player::Computer => 'C',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Computer);
        assert_eq!(Player::Computer.other(), Player::Human);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Human.name(), "Human");
        assert_eq!(Player::Computer.name(), "Computer");
    }

    #[test]
    fn test_owner_roundtrip() {
        for player in [Player::Human, Player::Computer] {
            assert_eq!(player.to_owner().player(), Some(player));
        }
    }
}
