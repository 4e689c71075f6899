use std::fmt;

use super::board::{Board, CELL_COUNT};
use super::types::{GamePhase, GameStatus, Mark, Mode, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// Why a move left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfRange(usize),
    SymbolsNotSelected,
    GameOver,
    CellOccupied(usize),
    AiTurn,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange(index) => write!(
                f,
                "Cell index {} is out of range 0..={}",
                index,
                CELL_COUNT - 1
            ),
            MoveRejection::SymbolsNotSelected => write!(f, "Symbols are not selected yet"),
            MoveRejection::GameOver => write!(f, "Game is already over"),
            MoveRejection::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            MoveRejection::AiTurn => write!(f, "It is the AI's turn"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub first_player_turn: bool,
    pub is_over: bool,
    pub mode: Mode,
    pub player_symbol: Option<Mark>,
    pub ai_symbol: Option<Mark>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl TicTacToeGameState {
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            first_player_turn: true,
            is_over: false,
            mode,
            player_symbol: None,
            ai_symbol: None,
        }
    }

    pub fn symbols_selected(&self) -> bool {
        self.player_symbol.is_some() && self.ai_symbol.is_some()
    }

    /// The first player always plays `player_symbol`, in both modes.
    pub fn current_mark(&self) -> Option<Mark> {
        if self.first_player_turn {
            self.player_symbol
        } else {
            self.ai_symbol
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode == Mode::VersusAi && !self.first_player_turn
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::from_winner(mark)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_over {
            GamePhase::GameOver
        } else if !self.symbols_selected() {
            GamePhase::SelectingSymbol
        } else if self.is_ai_turn() {
            GamePhase::AiTurn
        } else {
            GamePhase::HumanTurn
        }
    }

    /// Places the side-to-move's mark, then ends the game or passes the turn.
    /// Turn ownership (human vs AI) is the caller's concern.
    pub(crate) fn place_mark(&mut self, index: usize) -> Result<Mark, MoveRejection> {
        if index >= CELL_COUNT {
            return Err(MoveRejection::OutOfRange(index));
        }
        if self.is_over {
            return Err(MoveRejection::GameOver);
        }
        let Some(mark) = self.current_mark() else {
            return Err(MoveRejection::SymbolsNotSelected);
        };
        if !self.board.is_cell_empty(index) {
            return Err(MoveRejection::CellOccupied(index));
        }

        self.board.place(index, mark);

        if self.winner().is_some() || self.board.is_full() {
            self.is_over = true;
        } else {
            self.first_player_turn = !self.first_player_turn;
        }

        Ok(mark)
    }

    pub(crate) fn assign_symbols(&mut self, player_symbol: Mark) {
        self.player_symbol = Some(player_symbol);
        self.ai_symbol = Some(player_symbol.opponent());
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}

/// Status line for renderers. Derived from the state on every call.
pub fn compute_status(state: &TicTacToeGameState) -> String {
    if let Some(mark) = state.winner() {
        return format!("Winner: {}", mark);
    }
    if state.board.is_full() {
        return "Draw!".to_string();
    }
    match state.current_mark() {
        Some(mark) => format!("Next player: {}", mark),
        None => "Choose your symbol".to_string(),
    }
}
