// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! Text forms of squares, moves and boards as typed and shown at the
//! console.

use thiserror::Error;

use crate::{Board, Mask, Move, Rank, Square};

pub const HELP_MESSAGE: &str = "\
Welcome to Chess!

Enter a move as the square to move from and the square to move to,
separated by a single space, e.g. 'e2 e4'. Files run a-h from left to
right and ranks 1-8 from bottom to top.

To castle, move the king two squares towards the rook (e.g. 'e1 g1').
To capture en passant, move the pawn diagonally onto the square the
opposing pawn skipped over.

h or H: print this help message
q or Q: quit the game";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Not a square: {0:?}")]
    InvalidSquare(String),
    #[error("Not a move: {0:?} (expecting e.g. \"e2 e4\")")]
    InvalidMove(String),
}

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Move(Move),
}

pub fn parse_square(text: &str) -> Result<Square, NotationError> {
    Square::try_from_string(text).ok_or_else(|| NotationError::InvalidSquare(text.to_string()))
}

/// Parses `"<from> <to>"`, e.g. `"e2 e4"`. Exactly one space separates
/// the two squares.
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let invalid = || NotationError::InvalidMove(text.to_string());
    let (from, to) = text.split_once(' ').ok_or_else(invalid)?;
    let from = parse_square(from).map_err(|_| invalid())?;
    let to = parse_square(to).map_err(|_| invalid())?;
    Ok(Move::new(from, to))
}

pub fn parse_command(line: &str) -> Result<Command, NotationError> {
    match line.trim() {
        "" | "h" | "H" => Ok(Command::Help),
        "q" | "Q" => Ok(Command::Quit),
        text => parse_move(text).map(Command::Move),
    }
}

/// The board as rows of piece symbols (`.` for empty), each followed by
/// its rank number, then the file letters.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for (row, squares) in board.rows().enumerate() {
        let symbols: String = squares
            .iter()
            .map(|contents| contents.map_or('.', |material| material.symbol()))
            .collect();
        out.push_str(&format!("{}  {}\n", symbols, Rank::from_index(row)));
    }
    out.push_str("\nabcdefgh\n");
    out
}

/// Squares in a mask, space separated, e.g. `"e3 e4"`.
pub fn render_squares(mask: Mask) -> String {
    mask.iter()
        .map(|square| square.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use Square::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("e2 e4"), Ok(Move::new(E2, E4)));
        assert_eq!(parse_move("a8 h1"), Ok(Move::new(A8, H1)));
        assert!(parse_move("e2e4").is_err());
        assert!(parse_move("e2  e4").is_err());
        assert!(parse_move("e2 e9").is_err());
        assert!(parse_move("z2 e4").is_err());
        assert!(parse_move("").is_err());
    }
    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("h\n"), Ok(Command::Help));
        assert_eq!(parse_command("H"), Ok(Command::Help));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("g1 f3\n"), Ok(Command::Move(Move::new(G1, F3))));
        assert_eq!(
            parse_command("help"),
            Err(NotationError::InvalidMove("help".to_string()))
        );
        assert_eq!(parse_command(""), Ok(Command::Help));
        assert_eq!(parse_command("  \n"), Ok(Command::Help));
    }
    #[test]
    fn test_render_start() {
        let expected = "\
rnbqkbnr  8
pppppppp  7
........  6
........  5
........  4
........  3
PPPPPPPP  2
RNBQKBNR  1

abcdefgh
";
        assert_eq!(render(&Board::standard()), expected);
    }
    #[test]
    fn test_render_squares() {
        assert_eq!(render_squares(Mask::from_squares([E4, E3])), "e4 e3");
        assert_eq!(render_squares(Mask::empty()), "");
    }
}
