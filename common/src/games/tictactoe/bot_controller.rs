use crate::games::SessionRng;
use super::board::Board;

/// Uniform pick among the empty cells; `None` once the board is full.
pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.get_available_moves())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::parse_board;

    #[test]
    fn test_random_move_targets_empty_cell() {
        let board = parse_board("XO./OX./...");
        let mut rng = SessionRng::new(7);

        for _ in 0..50 {
            let index = calculate_random_move(&board, &mut rng).unwrap();
            assert!(board.is_cell_empty(index));
        }
    }

    #[test]
    fn test_random_move_on_full_board_is_none() {
        let board = parse_board("XOX/XOO/OXX");
        let mut rng = SessionRng::new(7);

        assert_eq!(calculate_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_always_chosen() {
        let board = parse_board("XOX/XO./OXO");
        let mut rng = SessionRng::new(3);

        assert_eq!(calculate_random_move(&board, &mut rng), Some(5));
    }

    #[test]
    fn test_every_empty_cell_can_be_chosen() {
        let board = parse_board("X.O/.../...");
        let mut rng = SessionRng::new(11);
        let mut seen = [false; 9];

        for _ in 0..500 {
            seen[calculate_random_move(&board, &mut rng).unwrap()] = true;
        }

        for index in board.get_available_moves() {
            assert!(seen[index], "cell {} never chosen", index);
        }
    }
}
