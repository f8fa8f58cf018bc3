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

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info};

use crate::{Board, Color, GameState, Move, Outcome, PendingPromotion, Promotion, Transition, Turn};

pub mod console;
pub mod notation;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Not a legal move")]
    IllegalMove,
    #[error("A promotion choice is required before the next move")]
    PromotionPending,
    #[error("No pawn is waiting to be promoted")]
    NoPromotionPending,
    #[error("The game is over")]
    GameOver,
}
use MoveError::*;

/// What `Game::submit_move` did with an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// The turn passed to the other side.
    Played,
    /// The move was made but a promotion piece must be chosen.
    AwaitingPromotion,
}

/// A game played from the standard starting position, holding the
/// authoritative `GameState` between turns.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    pending: Option<PendingPromotion>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            pending: None,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board to show: includes an unpromoted pawn while a promotion
    /// choice is outstanding.
    pub fn board(&self) -> &Board {
        match &self.pending {
            Some(pending) => pending.board(),
            None => self.state.board(),
        }
    }

    #[inline]
    pub fn awaiting_promotion(&self) -> bool {
        self.pending.is_some()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn submit_move(&mut self, mv: Move) -> Result<Submitted> {
        if self.pending.is_some() {
            return Err(PromotionPending.into());
        }
        if self.state.outcome().is_terminal() {
            return Err(GameOver.into());
        }
        if !self.state.is_legal(mv) {
            debug!(%mv, turn = %self.state.turn(), "illegal move");
            return Err(IllegalMove.into());
        }
        match self.state.apply_move(mv) {
            Transition::Complete(next) => {
                self.state = next;
                self.log_outcome();
                Ok(Submitted::Played)
            }
            Transition::Promotion(pending) => {
                self.pending = Some(pending);
                Ok(Submitted::AwaitingPromotion)
            }
        }
    }

    pub fn promote(&mut self, choice: Promotion) -> Result<()> {
        let pending = self.pending.take().ok_or(NoPromotionPending)?;
        self.state = pending.resolve(choice);
        self.log_outcome();
        Ok(())
    }

    fn log_outcome(&self) {
        match self.state.outcome() {
            Outcome::Checkmate { winner } => info!(%winner, "checkmate"),
            Outcome::Stalemate => info!("stalemate"),
            _ => {}
        }
    }
}

impl Turn for Game {
    fn turn(&self) -> Color {
        match &self.pending {
            Some(pending) => pending.color(),
            None => self.state.turn(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use Square::*;

    #[test]
    fn test_submit_legal_move() {
        let mut game = Game::new();
        let result = game.submit_move(Move::new(E2, E4)).unwrap();
        assert_eq!(result, Submitted::Played);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.state().en_passant(), Some(E3));
    }
    #[test]
    fn test_submit_illegal_move() {
        let mut game = Game::new();
        let err = game.submit_move(Move::new(E2, E5)).unwrap_err();
        assert_eq!(err.downcast_ref::<MoveError>(), Some(&MoveError::IllegalMove));
        assert_eq!(game.state(), &GameState::new());
    }
    #[test]
    fn test_promotion_blocks_next_move() {
        let board = Board::empty()
            .place(E1, Some(Material::WK))
            .place(H8, Some(Material::BK))
            .place(B7, Some(Material::WP));
        let mut game = Game::from_state(GameState::from_parts(
            board,
            Color::White,
            Pair::default(),
            None,
        ));
        let result = game.submit_move(Move::new(B7, B8)).unwrap();
        assert_eq!(result, Submitted::AwaitingPromotion);
        assert!(game.awaiting_promotion());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.board()[B8], Some(Material::WP));

        let err = game.submit_move(Move::new(H8, H7)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoveError>(),
            Some(&MoveError::PromotionPending)
        );

        game.promote(Promotion::Queen).unwrap();
        assert!(!game.awaiting_promotion());
        assert_eq!(game.board()[B8], Some(Material::WQ));
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.outcome(), Outcome::Check { side: Color::Black });
    }
    #[test]
    fn test_promote_without_pawn() {
        let mut game = Game::new();
        let err = game.promote(Promotion::Queen).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoveError>(),
            Some(&MoveError::NoPromotionPending)
        );
    }
    #[test]
    fn test_no_moves_after_mate() {
        let mut game = Game::new();
        for (from, to) in [(F2, F3), (E7, E5), (G2, G4), (D8, H4)] {
            game.submit_move(Move::new(from, to)).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Checkmate { winner: Color::Black });
        let err = game.submit_move(Move::new(A2, A3)).unwrap_err();
        assert_eq!(err.downcast_ref::<MoveError>(), Some(&MoveError::GameOver));
    }
}
