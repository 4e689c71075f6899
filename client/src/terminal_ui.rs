use std::io::{self, BufRead, Write};

use common::games::tictactoe::{
    BOARD_SIZE, GamePhase, Mark, TicTacToeEngine, TicTacToeGameState,
};
use common::log;

use crate::command::{ClientCommand, HELP_TEXT, parse_command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Draws the 3x3 grid. Empty cells show their 1-based number, cells of the
/// winning line are bracketed.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let mut rows = Vec::with_capacity(BOARD_SIZE);

    for y in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|x| {
                let index = y * BOARD_SIZE + x;
                match state.board.get(index) {
                    Some(mark) if winning_line.is_some_and(|line| line.contains(index)) => {
                        format!("[{}]", mark)
                    }
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", index + 1),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn render_screen(engine: &TicTacToeEngine) -> String {
    let state = engine.state();
    if state.phase() == GamePhase::SelectingSymbol {
        return format!("Mode: {}\nChoose your symbol: X or O", state.mode);
    }

    format!(
        "{}\n{}\nMode: {}",
        render_board(state),
        engine.status(),
        state.mode
    )
}

/// Line-oriented front end: reads commands, forwards them to the engine and
/// redraws after each one.
pub struct TerminalShell {
    engine: TicTacToeEngine,
    preferred_symbol: Option<Mark>,
}

impl TerminalShell {
    pub fn new(engine: TicTacToeEngine, preferred_symbol: Option<Mark>) -> Self {
        let mut shell = Self {
            engine,
            preferred_symbol,
        };
        shell.apply_preferred_symbol();
        shell
    }

    pub fn engine(&self) -> &TicTacToeEngine {
        &self.engine
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", render_screen(&self.engine))?;

        for line in input.lines() {
            let line = line?;
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(output, "{}", message)?;
                    continue;
                }
            };

            if self.execute(command, &mut output)? == Flow::Quit {
                break;
            }
        }

        writeln!(output, "Bye!")?;
        output.flush()
    }

    fn execute<W: Write>(&mut self, command: ClientCommand, output: &mut W) -> io::Result<Flow> {
        match command {
            ClientCommand::ChooseSymbol(mark) => {
                self.engine.select_symbol(mark);
            }
            ClientCommand::PlaceMark { index } => {
                if let Err(e) = self.engine.apply_move(index) {
                    log!("Rejected cell {}: {}", index + 1, e);
                    writeln!(output, "{}", e)?;
                    return Ok(Flow::Continue);
                }
            }
            ClientCommand::SelectMode(mode) => {
                self.engine.select_mode(mode);
            }
            ClientCommand::Restart => {
                self.engine.reset_game();
                self.apply_preferred_symbol();
            }
            ClientCommand::Show => {}
            ClientCommand::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                return Ok(Flow::Continue);
            }
            ClientCommand::Quit => return Ok(Flow::Quit),
        }

        writeln!(output, "{}", render_screen(&self.engine))?;
        Ok(Flow::Continue)
    }

    fn apply_preferred_symbol(&mut self) {
        if let Some(mark) = self.preferred_symbol {
            self.engine.select_symbol(mark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::Mode;

    fn run_script(shell: &mut TerminalShell, script: &str) -> String {
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn two_player_shell() -> TerminalShell {
        TerminalShell::new(
            TicTacToeEngine::with_mode(Mode::TwoPlayer, SessionRng::new(1)),
            None,
        )
    }

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let engine = TicTacToeEngine::new(SessionRng::new(1));

        let board = render_board(engine.state());

        assert_eq!(
            board,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_starts_on_symbol_prompt() {
        let mut shell = two_player_shell();

        let output = run_script(&mut shell, "");

        assert!(output.starts_with("Mode: Two Player\nChoose your symbol: X or O"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_winning_game_highlights_line() {
        let mut shell = two_player_shell();

        let output = run_script(&mut shell, "x\n1\n5\n2\n6\n3\nquit\n");

        assert!(output.contains("[X]|[X]|[X]"));
        assert!(output.contains("Winner: X"));
        assert!(shell.engine().state().is_over);
    }

    #[test]
    fn test_draw_game() {
        let mut shell = two_player_shell();

        let output = run_script(&mut shell, "x\n1\n2\n3\n5\n4\n6\n8\n7\n9\n");

        assert!(output.contains("Draw!"));
    }

    #[test]
    fn test_row_column_input_places_mark() {
        let mut shell = two_player_shell();

        run_script(&mut shell, "o\n2 2\n");

        assert_eq!(shell.engine().state().board.get(4), Some(Mark::O));
    }

    #[test]
    fn test_out_of_range_cell_reports_error() {
        let mut shell = two_player_shell();

        let output = run_script(&mut shell, "x\n10\n");

        assert!(output.contains("out of range"));
        assert!(shell.engine().state().board.is_clear());
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let mut shell = two_player_shell();

        let output = run_script(&mut shell, "dance\n");

        assert!(output.contains("Unknown command 'dance'"));
    }

    #[test]
    fn test_ai_reply_is_rendered() {
        let mut shell = TerminalShell::new(
            TicTacToeEngine::with_mode(Mode::VersusAi, SessionRng::new(8)),
            Some(Mark::X),
        );

        let output = run_script(&mut shell, "5\n");

        let state = shell.engine().state();
        assert_eq!(state.board.count(Mark::O), 1);
        assert!(output.contains("Next player: X"));
        assert!(output.contains("Mode: Play with AI"));
    }

    #[test]
    fn test_restart_reapplies_preferred_symbol() {
        let mut shell = TerminalShell::new(
            TicTacToeEngine::with_mode(Mode::TwoPlayer, SessionRng::new(1)),
            Some(Mark::O),
        );

        run_script(&mut shell, "1\nrestart\n");

        let state = shell.engine().state();
        assert!(state.board.is_clear());
        assert_eq!(state.player_symbol, Some(Mark::O));
    }

    #[test]
    fn test_restart_without_preference_asks_again() {
        let mut shell = two_player_shell();

        let output = run_script(&mut shell, "x\n1\nrestart\n");

        assert_eq!(shell.engine().state().player_symbol, None);
        assert!(output.trim_end().ends_with("Choose your symbol: X or O\nBye!"));
    }

    #[test]
    fn test_help_lists_commands() {
        let mut shell = two_player_shell();

        let output = run_script(&mut shell, "help\n");

        assert!(output.contains("mode two|ai"));
    }
}
