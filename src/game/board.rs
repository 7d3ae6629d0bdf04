use super::Player;

pub const BOARD_SIZE: usize = 6;

/// Products printed on the board, row-major. Every value is a product of two
/// factors in 1..=9 and no value repeats.
pub const PRODUCTS: [u32; BOARD_SIZE * BOARD_SIZE] = [
    1, 2, 3, 4, 5, 6, //
    7, 8, 9, 10, 12, 14, //
    15, 16, 18, 20, 21, 24, //
    25, 27, 28, 30, 32, 35, //
    36, 40, 42, 45, 48, 49, //
    54, 56, 63, 64, 72, 81,
];

/// Who holds a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Empty,
    Human,
    Computer,
}

impl Owner {
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Empty => None,
            Owner::Human => Some(Player::Human),
            Owner::Computer => Some(Player::Computer),
        }
    }

    /// Numeric code used by the save format.
    pub fn code(self) -> u8 {
        match self {
            Owner::Empty => 0,
            Owner::Human => 1,
            Owner::Computer => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Owner> {
        match code {
            0 => Some(Owner::Empty),
            1 => Some(Owner::Human),
            2 => Some(Owner::Computer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: u32,
    pub owner: Owner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Move `steps` times along (dr, dc), or `None` if that leaves the board.
    pub fn offset(self, dr: isize, dc: isize, steps: isize) -> Option<Position> {
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        let size = BOARD_SIZE as isize;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /// True for the central 2x2 block.
    pub fn is_center(self) -> bool {
        let lo = BOARD_SIZE / 2 - 1;
        let hi = BOARD_SIZE / 2;
        (lo..=hi).contains(&self.row) && (lo..=hi).contains(&self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no free cell holds product {0}")]
    ProductUnavailable(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with the fixed product layout and no owners
    pub fn new() -> Self {
        let mut cells = [[Cell {
            value: 0,
            owner: Owner::Empty,
        }; BOARD_SIZE]; BOARD_SIZE];
        for (i, &value) in PRODUCTS.iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE].value = value;
        }
        Board { cells }
    }

    /// Rebuild a board from an ownership grid (values always come from the
    /// fixed layout)
    pub fn from_owners(owners: [[Owner; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (row, line) in owners.iter().enumerate() {
            for (col, &owner) in line.iter().enumerate() {
                board.cells[row][col].owner = owner;
            }
        }
        board
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn owner(&self, pos: Position) -> Owner {
        self.cells[pos.row][pos.col].owner
    }

    pub fn value(&self, pos: Position) -> u32 {
        self.cells[pos.row][pos.col].value
    }

    pub fn owners(&self) -> [[Owner; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(|cell| cell.owner))
    }

    /// Where a product sits, owned or not
    pub fn position_of(&self, product: u32) -> Option<Position> {
        self.positions()
            .find(|&pos| self.value(pos) == product)
    }

    /// First unowned cell holding `product`, in row-major scan order
    pub fn find_free(&self, product: u32) -> Option<Position> {
        self.positions()
            .find(|&pos| self.value(pos) == product && self.owner(pos) == Owner::Empty)
    }

    /// A product is legal while some unowned cell still holds it
    pub fn is_legal(&self, product: u32) -> bool {
        self.find_free(product).is_some()
    }

    /// Mark the cell holding `product` for `player`
    pub fn claim(&mut self, product: u32, player: Player) -> Result<Position, BoardError> {
        let pos = self
            .find_free(product)
            .ok_or(BoardError::ProductUnavailable(product))?;
        self.cells[pos.row][pos.col].owner = player.to_owner();
        Ok(pos)
    }

    /// Claim `product` for `player` just long enough to run `check` against the
    /// hypothetical board, then clear the cell again. Returns `None` when the
    /// product has no free cell.
    pub fn probe<R>(
        &mut self,
        product: u32,
        player: Player,
        check: impl FnOnce(&Board, Position) -> R,
    ) -> Option<R> {
        let pos = self.find_free(product)?;
        self.cells[pos.row][pos.col].owner = player.to_owner();
        let result = check(self, pos);
        self.cells[pos.row][pos.col].owner = Owner::Empty;
        Some(result)
    }

    /// Clear every owner; values stay in place
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.owner = Owner::Empty;
            }
        }
    }

    /// Check if every cell has been claimed
    pub fn is_full(&self) -> bool {
        self.positions().all(|pos| self.owner(pos) != Owner::Empty)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
