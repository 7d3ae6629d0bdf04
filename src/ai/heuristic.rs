use crate::game::{Board, Owner, Player, Position, DIRECTIONS, WIN_LENGTH};

/// Completes a line of four.
pub const WIN_SCORE: i32 = 10_000;
/// Three in a line with room on both sides.
pub const OPEN_THREE_BOTH: i32 = 500;
/// Three in a line with room on one side.
pub const OPEN_THREE_ONE: i32 = 100;
/// Two in a line with room on both sides.
pub const OPEN_TWO: i32 = 50;
/// Claiming one of the four central cells.
pub const CENTER_BONUS: i32 = 2;
/// Score of a product with no free cell.
pub const ILLEGAL: i32 = i32::MIN;

/// Trait for scoring a candidate claim from a player's perspective.
pub trait MoveEvaluator: Send {
    /// Score claiming `product` for `player`. The board is probed and restored.
    fn evaluate(&self, board: &mut Board, product: u32, player: Player) -> i32;
}

/// Default evaluator: scores the lines running through the claimed cell.
pub struct LineHeuristic;

/// What one sense of an axis scan found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reach {
    consecutive: usize,
    open: bool,
}

impl LineHeuristic {
    fn score_axis(consecutive: usize, open_ends: usize) -> i32 {
        if consecutive >= WIN_LENGTH {
            WIN_SCORE
        } else if consecutive == 3 && open_ends >= 1 {
            if open_ends == 2 {
                OPEN_THREE_BOTH
            } else {
                OPEN_THREE_ONE
            }
        } else if consecutive == 2 && open_ends == 2 {
            OPEN_TWO
        } else {
            0
        }
    }

    /// Walk up to three cells from `origin` along (dr, dc). Stops at the edge,
    /// at an opponent cell, or at the first empty cell (which counts as open).
    fn reach(board: &Board, origin: Position, dr: isize, dc: isize, player: Player) -> Reach {
        let own = player.to_owner();
        let mut consecutive = 0;
        for k in 1..WIN_LENGTH as isize {
            let Some(pos) = origin.offset(dr, dc, k) else {
                break;
            };
            match board.owner(pos) {
                o if o == own => consecutive += 1,
                Owner::Empty => {
                    return Reach {
                        consecutive,
                        open: true,
                    }
                }
                _ => break,
            }
        }
        Reach {
            consecutive,
            open: false,
        }
    }

    fn score_at(board: &Board, origin: Position, player: Player) -> i32 {
        let mut score = 0;
        for &(dr, dc) in &DIRECTIONS {
            let forward = Self::reach(board, origin, dr, dc, player);
            let backward = Self::reach(board, origin, -dr, -dc, player);
            let consecutive = forward.consecutive + backward.consecutive + 1;
            let open_ends = usize::from(forward.open) + usize::from(backward.open);
            score += Self::score_axis(consecutive, open_ends);
        }
        if origin.is_center() {
            score += CENTER_BONUS;
        }
        score
    }
}

impl MoveEvaluator for LineHeuristic {
    fn evaluate(&self, board: &mut Board, product: u32, player: Player) -> i32 {
        board
            .probe(product, player, |b, origin| Self::score_at(b, origin, player))
            .unwrap_or(ILLEGAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(human: &[u32], computer: &[u32]) -> Board {
        let mut board = Board::new();
        for &p in human {
            board.claim(p, Player::Human).unwrap();
        }
        for &p in computer {
            board.claim(p, Player::Computer).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_scores_only_center() {
        let mut board = Board::new();
        let h = LineHeuristic;
        assert_eq!(h.evaluate(&mut board, 1, Player::Computer), 0);
        assert_eq!(h.evaluate(&mut board, 28, Player::Computer), CENTER_BONUS);
        assert_eq!(h.evaluate(&mut board, 30, Player::Human), CENTER_BONUS);
    }

    #[test]
    fn illegal_product_scores_sentinel() {
        let mut board = board_with(&[28], &[]);
        let h = LineHeuristic;
        assert_eq!(h.evaluate(&mut board, 28, Player::Computer), ILLEGAL);
        assert_eq!(h.evaluate(&mut board, 11, Player::Computer), ILLEGAL);
    }

    #[test]
    fn open_two_scores() {
        // Computer on 16 (2,1); 18 (2,2) makes an open two, plus center
        let mut board = board_with(&[], &[16]);
        let score = LineHeuristic.evaluate(&mut board, 18, Player::Computer);
        assert_eq!(score, OPEN_TWO + CENTER_BONUS);
    }

    #[test]
    fn three_against_the_edge_has_one_open_end() {
        // 15 16 at the left edge of row 2, then 18
        let mut board = board_with(&[], &[15, 16]);
        let score = LineHeuristic.evaluate(&mut board, 18, Player::Computer);
        assert_eq!(score, OPEN_THREE_ONE + CENTER_BONUS);
    }

    #[test]
    fn open_three_both_ends() {
        // 16 18 then 20: 15 and 21 both empty
        let mut board = board_with(&[], &[16, 18]);
        let score = LineHeuristic.evaluate(&mut board, 20, Player::Computer);
        assert_eq!(score, OPEN_THREE_BOTH + CENTER_BONUS);
    }

    #[test]
    fn opponent_closes_an_end() {
        let mut board = board_with(&[21], &[16, 18]);
        let score = LineHeuristic.evaluate(&mut board, 20, Player::Computer);
        assert_eq!(score, OPEN_THREE_ONE + CENTER_BONUS);
    }

    #[test]
    fn completing_four_scores_win() {
        let mut board = board_with(&[], &[15, 16, 18]);
        let score = LineHeuristic.evaluate(&mut board, 20, Player::Computer);
        assert_eq!(score, WIN_SCORE + CENTER_BONUS);
    }

    #[test]
    fn diagonal_lines_count() {
        // (0,0) 1 and (1,1) 8, then (2,2) 18: down-right diagonal, (3,3) open,
        // top-left is the edge
        let mut board = board_with(&[], &[1, 8]);
        let score = LineHeuristic.evaluate(&mut board, 18, Player::Computer);
        assert_eq!(score, OPEN_THREE_ONE + CENTER_BONUS);
    }

    #[test]
    fn scan_stops_at_first_gap() {
        // 21 sits beyond the empty 20 and is not counted
        let mut with_far = board_with(&[], &[16, 21]);
        let mut without = board_with(&[], &[16]);
        let a = LineHeuristic.evaluate(&mut with_far, 18, Player::Computer);
        let b = LineHeuristic.evaluate(&mut without, 18, Player::Computer);
        assert_eq!(a, b);
        assert_eq!(a, OPEN_TWO + CENTER_BONUS);
    }

    #[test]
    fn evaluation_is_player_relative() {
        let mut board = board_with(&[15, 16], &[]);
        assert_eq!(
            LineHeuristic.evaluate(&mut board, 18, Player::Human),
            OPEN_THREE_ONE + CENTER_BONUS
        );
        assert_eq!(
            LineHeuristic.evaluate(&mut board, 18, Player::Computer),
            CENTER_BONUS
        );
    }

    #[test]
    fn evaluation_leaves_board_untouched() {
        let mut board = board_with(&[1, 30, 49], &[8, 18, 64]);
        let before = board.clone();
        for product in crate::game::PRODUCTS {
            LineHeuristic.evaluate(&mut board, product, Player::Computer);
            LineHeuristic.evaluate(&mut board, product, Player::Human);
        }
        assert_eq!(board, before);
    }
}
