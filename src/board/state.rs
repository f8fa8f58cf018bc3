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

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::attacks::is_in_check;
use super::castling::{update_castling_rights, CastlingRights};
use super::en_passant::update_en_passant_target;
use super::grid::Board;
use super::material::{Color, Pair};
use super::moves::{candidates, is_legal, legal_destinations, resulting_board, Move};
use super::promotion::{promote, promotion_square, Promotion};
use super::square::{Mask, Square};
use super::Turn;

/// Everything needed to decide what may happen next: the board, whose
/// turn it is, and the castling and en passant bookkeeping carried
/// between turns.
///
/// A `GameState` is never modified in place. `apply_move` returns the
/// following state and leaves `self` as it was.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    turn: Color,
    castling: Pair<CastlingRights>,
    en_passant: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl Turn for GameState {
    #[inline]
    fn turn(&self) -> Color {
        self.turn
    }
}

impl GameState {
    /// The starting position, white to move.
    pub fn new() -> Self {
        Self::from_parts(Board::standard(), Color::White, Pair::default(), None)
    }

    pub fn from_parts(
        board: Board,
        turn: Color,
        castling: Pair<CastlingRights>,
        en_passant: Option<Square>,
    ) -> Self {
        Self {
            board,
            turn,
            castling,
            en_passant,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn castling(&self, color: Color) -> CastlingRights {
        self.castling[color]
    }
    #[inline]
    pub fn castling_rights(&self) -> Pair<CastlingRights> {
        self.castling
    }
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        is_legal(mv, self)
    }

    pub fn legal_destinations(&self, from: Square) -> Mask {
        legal_destinations(self, from)
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.turn)
    }

    /// Whether the side to move has at least one legal move.
    pub fn can_move(&self) -> bool {
        self.board.pieces(self.turn).any(|(from, _)| {
            candidates(self, from)
                .iter()
                .any(|to| self.is_legal(Move::new(from, to)))
        })
    }

    pub fn outcome(&self) -> Outcome {
        match (self.is_check(), self.can_move()) {
            (true, false) => Outcome::Checkmate {
                winner: !self.turn,
            },
            (true, true) => Outcome::Check { side: self.turn },
            (false, false) => Outcome::Stalemate,
            (false, true) => Outcome::Ongoing,
        }
    }

    /// Plays `mv`, which must already have been found legal.
    ///
    /// A pawn reaching its last rank yields `Transition::Promotion`; the
    /// turn is only complete once a piece has been chosen for it.
    ///
    /// # Panics
    ///
    /// Panics if `mv.from` does not hold a piece of the side to move.
    pub fn apply_move(&self, mv: Move) -> Transition {
        assert!(
            self.board[mv.from].is_some_and(|material| material.color() == self.turn),
            "apply_move: no {} piece on {}",
            self.turn,
            mv.from
        );
        debug_assert!(self.is_legal(mv), "apply_move: {mv} is not legal");

        let next = Self {
            board: resulting_board(mv, self),
            turn: !self.turn,
            castling: update_castling_rights(mv, &self.board, self.castling),
            en_passant: update_en_passant_target(mv, &self.board),
        };
        debug!(%mv, turn = %self.turn, en_passant = ?next.en_passant, "applied move");
        match promotion_square(mv, &self.board) {
            Some(square) => Transition::Promotion(PendingPromotion { next, square }),
            None => Transition::Complete(next),
        }
    }
}

/// The result of `GameState::apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Complete(GameState),
    Promotion(PendingPromotion),
}

impl Transition {
    /// The next state, unless a promotion choice is still outstanding.
    pub fn complete(self) -> Option<GameState> {
        match self {
            Transition::Complete(state) => Some(state),
            Transition::Promotion(_) => None,
        }
    }
}

/// A move that put a pawn on its last rank, waiting for the piece it
/// turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    next: GameState,
    square: Square,
}

impl PendingPromotion {
    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }
    /// The color of the promoting pawn.
    #[inline]
    pub fn color(&self) -> Color {
        !self.next.turn
    }
    /// The board with the pawn still unpromoted.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.next.board
    }

    pub fn resolve(self, choice: Promotion) -> GameState {
        debug!(square = %self.square, %choice, "promoted");
        GameState {
            board: promote(&self.next.board, self.square, choice),
            ..self.next
        }
    }
}

/// Where the game stands for the side about to move.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Check { side: Color },
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Checkmate { .. } | Outcome::Stalemate)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => Ok(()),
            Outcome::Check { side } => write!(f, "{} is in check", side),
            Outcome::Checkmate { .. } => write!(f, "Checkmate"),
            Outcome::Stalemate => write!(f, "Stalemate"),
        }
    }
}

#[cfg(test)]
impl GameState {
    pub fn set_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }
    pub fn set_turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }
    pub fn set_en_passant(mut self, value: Option<Square>) -> Self {
        self.en_passant = value;
        self
    }
    pub fn set_castling(mut self, color: Color, rights: CastlingRights) -> Self {
        self.castling[color] = rights;
        self
    }
}
