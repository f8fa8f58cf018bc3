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

//! Interactive two player game over a line based text stream.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use super::notation::{parse_command, render, render_squares, Command, HELP_MESSAGE};
use super::{Game, MoveError, Submitted};
use crate::config::Config;
use crate::{Move, Outcome, Promotion, Turn};

const PROMOTION_PROMPT: &str = "What piece would you like (q, n, r, b)? ";

/// Plays a game reading commands from `input` and writing the board and
/// prompts to `output`. Returns when the game ends, the player quits or
/// `input` is exhausted.
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &Config) -> Result<()> {
    Console {
        input,
        output,
        config,
        game: Game::new(),
    }
    .play()
}

struct Console<'a, R, W> {
    input: R,
    output: W,
    config: &'a Config,
    game: Game,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    fn play(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", render(self.game.board()))?;
            let outcome = self.game.outcome();
            if outcome != Outcome::Ongoing {
                writeln!(self.output, "\n{}", outcome)?;
            }
            if outcome.is_terminal() {
                info!(%outcome, "game over");
                return Ok(());
            }

            let Some(line) = self.prompt(&format!("\n{}'s move: ", self.game.turn()))? else {
                debug!("input closed");
                return Ok(());
            };
            match parse_command(&line) {
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_MESSAGE)?,
                Ok(Command::Quit) => {
                    if self.confirm_quit()? {
                        info!("player quit");
                        return Ok(());
                    }
                }
                Ok(Command::Move(mv)) => {
                    if !self.play_move(mv)? {
                        return Ok(());
                    }
                }
                Err(err) => {
                    debug!(%err, "unreadable command");
                    self.invalid_move()?;
                }
            }
        }
    }

    /// Returns false if input ran out while a promotion was outstanding.
    fn play_move(&mut self, mv: Move) -> Result<bool> {
        match self.game.submit_move(mv) {
            Ok(Submitted::Played) => Ok(true),
            Ok(Submitted::AwaitingPromotion) => self.choose_promotion(),
            Err(err) => match err.downcast_ref::<MoveError>() {
                Some(MoveError::IllegalMove) => {
                    self.invalid_move()?;
                    if self.config.hints {
                        self.hint(mv)?;
                    }
                    Ok(true)
                }
                _ => Err(err),
            },
        }
    }

    fn choose_promotion(&mut self) -> Result<bool> {
        let mut prompt = PROMOTION_PROMPT.to_string();
        loop {
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(false);
            };
            match line.parse::<Promotion>() {
                Ok(choice) => {
                    self.game.promote(choice)?;
                    return Ok(true);
                }
                Err(err) => {
                    debug!(%err, "bad promotion choice");
                    prompt = format!("Not a valid piece. {}", PROMOTION_PROMPT);
                }
            }
        }
    }

    fn confirm_quit(&mut self) -> Result<bool> {
        if !self.config.confirm_quit {
            return Ok(true);
        }
        Ok(matches!(
            self.prompt("Are you sure you want to quit? ")?.as_deref().map(str::trim),
            Some("y" | "Y") | None
        ))
    }

    fn invalid_move(&mut self) -> Result<()> {
        writeln!(self.output, "Invalid move\n")?;
        Ok(())
    }

    fn hint(&mut self, mv: Move) -> Result<()> {
        let state = self.game.state();
        let own_piece = state.board()[mv.from].map(|material| material.color());
        if own_piece != Some(state.turn()) {
            return Ok(());
        }
        let destinations = state.legal_destinations(mv.from);
        if destinations.is_empty() {
            writeln!(self.output, "No legal moves from {}", mv.from)?;
        } else {
            writeln!(
                self.output,
                "Legal moves from {}: {}",
                mv.from,
                render_squares(destinations)
            )?;
        }
        Ok(())
    }

    /// Writes `prompt` and reads one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(input: &str, config: &Config) -> String {
        let mut output = Vec::new();
        run(Cursor::new(input.as_bytes()), &mut output, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_fools_mate_transcript() {
        let out = transcript("f2 f3\ne7 e5\ng2 g4\nd8 h4\n", &Config::default());
        assert!(out.contains("\nWhite's move: "));
        assert!(out.contains("\nBlack's move: "));
        assert!(out.ends_with("\nCheckmate\n"));
        assert!(!out.contains("Invalid move"));
    }
    #[test]
    fn test_invalid_moves_reprompt() {
        let out = transcript("e2 e5\nnonsense\ne2 e4\n", &Config::default());
        assert_eq!(out.matches("Invalid move\n\n").count(), 2);
        assert_eq!(out.matches("White's move: ").count(), 3);
        assert!(out.contains("Black's move: "));
    }
    #[test]
    fn test_help() {
        let out = transcript("h\n", &Config::default());
        assert!(out.contains(HELP_MESSAGE));
    }
    #[test]
    fn test_quit_confirmation() {
        let out = transcript("q\nn\nq\ny\ne2 e4\n", &Config::default());
        assert_eq!(out.matches("Are you sure you want to quit? ").count(), 2);
        assert!(!out.contains("Black's move: "));
    }
    #[test]
    fn test_quit_without_confirmation() {
        let config = Config {
            confirm_quit: false,
            ..Config::default()
        };
        let out = transcript("Q\n", &config);
        assert!(!out.contains("Are you sure"));
    }
    #[test]
    fn test_hints() {
        let config = Config {
            hints: true,
            ..Config::default()
        };
        let out = transcript("e2 e5\nb1 b3\n", &config);
        assert!(out.contains("Legal moves from e2: e4 e3\n"));
        assert!(out.contains("Legal moves from b1: a3 c3\n"));
    }
    #[test]
    fn test_blank_line_prints_help() {
        let out = transcript("\n", &Config::default());
        assert!(out.contains(HELP_MESSAGE));
        assert!(!out.contains("Invalid move"));
    }

    const PAWN_TO_A8: &str =
        "a2 a4\nh7 h6\na4 a5\nh6 h5\na5 a6\nh5 h4\na6 b7\nh4 h3\nb7 a8\n";

    #[test]
    fn test_promotion_reprompts_until_valid() {
        let input = format!("{}k\nq\n", PAWN_TO_A8);
        let out = transcript(&input, &Config::default());
        let reprompt = format!("{0}Not a valid piece. {0}", PROMOTION_PROMPT);
        assert!(out.contains(&reprompt));
        assert_eq!(out.matches(PROMOTION_PROMPT).count(), 2);
        assert!(out.contains("Qnbqkbnr  8\n"));
        assert!(out.ends_with("Black's move: \n"));
        assert!(!out.contains("Invalid move"));
    }
    #[test]
    fn test_input_ends_during_promotion() {
        let out = transcript(PAWN_TO_A8, &Config::default());
        assert!(out.ends_with(&format!("{}\n", PROMOTION_PROMPT)));
        assert!(!out.contains("Qnbqkbnr"));
    }
    #[test]
    fn test_end_of_input() {
        let out = transcript("", &Config::default());
        assert!(out.starts_with("rnbqkbnr  8\n"));
        assert!(out.ends_with("White's move: \n"));
    }
}
