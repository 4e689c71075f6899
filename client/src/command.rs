use common::games::tictactoe::{Mark, Mode, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    ChooseSymbol(Mark),
    PlaceMark { index: usize },
    SelectMode(Mode),
    Restart,
    Show,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  x | o         choose your symbol
  1-9           place a mark (cells numbered left to right, top to bottom)
  <row> <col>   place a mark by row and column, both 1-3
  mode two|ai   switch between two players and playing with the AI
  restart       start over and choose a symbol again
  show          draw the board again
  help          show this text
  quit          leave the game";

/// Cell numbers are 1-based for players and 0-based for the engine. Numbers
/// past 9 are passed through so the engine can reject them.
pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let line = line.trim().to_ascii_lowercase();
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] | ["show"] | ["board"] => Ok(ClientCommand::Show),
        ["help"] | ["?"] => Ok(ClientCommand::Help),
        ["quit"] | ["exit"] | ["q"] => Ok(ClientCommand::Quit),
        ["restart"] | ["reset"] | ["new"] => Ok(ClientCommand::Restart),
        ["mode", mode] => Ok(ClientCommand::SelectMode(mode.parse()?)),
        [word] if *word == "x" || *word == "o" => Ok(ClientCommand::ChooseSymbol(word.parse()?)),
        [cell] => {
            let number = parse_number(cell)?;
            if number == 0 {
                return Err("Cells are numbered from 1 to 9".to_string());
            }
            Ok(ClientCommand::PlaceMark { index: number - 1 })
        }
        [row, col] => {
            let (row, col) = (parse_number(row)?, parse_number(col)?);
            if row == 0 || col == 0 {
                return Err("Rows and columns are numbered from 1 to 3".to_string());
            }
            Position::new(col - 1, row - 1)
                .to_index()
                .map(|index| ClientCommand::PlaceMark { index })
                .ok_or_else(|| "Rows and columns are numbered from 1 to 3".to_string())
        }
        _ => Err(format!("Unknown command '{}', type 'help' for the list", line)),
    }
}

fn parse_number(word: &str) -> Result<usize, String> {
    word.parse::<usize>()
        .map_err(|_| format!("Unknown command '{}', type 'help' for the list", word))
}
