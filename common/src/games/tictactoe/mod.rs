mod board;
mod bot_controller;
mod engine;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::calculate_random_move;
pub use engine::TicTacToeEngine;
pub use game_state::{MoveRejection, TicTacToeGameState, compute_status};
pub use types::{GamePhase, GameStatus, Mark, Mode, Position, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line};
