use crate::games::SessionRng;
use crate::log;
use super::bot_controller::calculate_random_move;
use super::game_state::{MoveRejection, TicTacToeGameState, compute_status};
use super::types::{Mark, Mode};

/// Owns one game session and performs every state transition. The AI reply in
/// `VersusAi` mode happens inside the call that hands the turn to the AI.
pub struct TicTacToeEngine {
    state: TicTacToeGameState,
    rng: SessionRng,
}

impl TicTacToeEngine {
    pub fn new(rng: SessionRng) -> Self {
        Self::with_mode(Mode::default(), rng)
    }

    pub fn with_mode(mode: Mode, rng: SessionRng) -> Self {
        log!("[seed:{}] New session in {} mode", rng.seed(), mode);
        Self {
            state: TicTacToeGameState::new(mode),
            rng,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn status(&self) -> String {
        compute_status(&self.state)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// One-shot: ignored once symbols are assigned, until the next reset.
    pub fn select_symbol(&mut self, mark: Mark) -> &TicTacToeGameState {
        if self.state.symbols_selected() {
            log!(
                "[seed:{}] Ignoring symbol {}: symbols already selected",
                self.rng.seed(),
                mark
            );
            return &self.state;
        }

        self.state.assign_symbols(mark);
        log!(
            "[seed:{}] Player plays {}, opponent plays {}",
            self.rng.seed(),
            mark,
            mark.opponent()
        );
        &self.state
    }

    pub fn select_mode(&mut self, mode: Mode) -> &TicTacToeGameState {
        if self.state.mode != mode {
            log!("[seed:{}] Mode changed to {}", self.rng.seed(), mode);
        }
        self.state.mode = mode;
        self.play_ai_turn();
        &self.state
    }

    /// `Err` only for indices outside the board. Moves that break the rules
    /// leave the state untouched and still return `Ok`.
    pub fn apply_move(&mut self, index: usize) -> Result<&TicTacToeGameState, String> {
        if self.state.is_ai_turn() && !self.state.is_over && index < self.state.board.cells().len() {
            self.log_rejection(index, MoveRejection::AiTurn);
            return Ok(&self.state);
        }

        match self.state.place_mark(index) {
            Ok(mark) => {
                log!("[seed:{}] {} placed at {}", self.rng.seed(), mark, index);
                self.log_if_finished();
                self.play_ai_turn();
                Ok(&self.state)
            }
            Err(rejection @ MoveRejection::OutOfRange(_)) => Err(rejection.to_string()),
            Err(rejection) => {
                self.log_rejection(index, rejection);
                Ok(&self.state)
            }
        }
    }

    /// Clears the board and both symbols. The mode survives.
    pub fn reset_game(&mut self) -> &TicTacToeGameState {
        self.state.reset();
        log!("[seed:{}] Game reset", self.rng.seed());
        &self.state
    }

    fn play_ai_turn(&mut self) {
        if self.state.is_over || !self.state.is_ai_turn() || !self.state.symbols_selected() {
            return;
        }

        let Some(index) = calculate_random_move(&self.state.board, &mut self.rng) else {
            return;
        };

        match self.state.place_mark(index) {
            Ok(mark) => {
                log!("[seed:{}] AI placed {} at {}", self.rng.seed(), mark, index);
                self.log_if_finished();
            }
            Err(e) => {
                log!("[seed:{}] AI failed to place mark at {}: {}", self.rng.seed(), index, e);
            }
        }
    }

    fn log_rejection(&self, index: usize, rejection: MoveRejection) {
        log!("[seed:{}] Ignoring move at {}: {}", self.rng.seed(), index, rejection);
    }

    fn log_if_finished(&self) {
        if self.state.is_over {
            log!("[seed:{}] Game over: {}", self.rng.seed(), self.status());
        }
    }
}
