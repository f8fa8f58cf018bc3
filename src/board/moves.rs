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
use tracing::trace;

use super::attacks::is_in_check;
use super::castling::{castle_destinations, is_valid_castle, perform_castle};
use super::en_passant::{is_valid_en_passant, perform_en_passant};
use super::geometry::reachable;
use super::grid::Board;
use super::square::{Mask, Square};
use super::state::GameState;
use super::Turn;

/// A request to move whatever stands on `from` to `to`. Castling is
/// written as the king's two-square move and en passant as the pawn's
/// diagonal step; neither is flagged on the move itself.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Whether `mv` is legal for the side to move in `state`.
pub fn is_legal(mv: Move, state: &GameState) -> bool {
    let board = state.board();
    let turn = state.turn();
    if mv.from == mv.to {
        return false;
    }
    let Some(material) = board.contents(mv.from) else {
        return false;
    };
    if material.color() != turn {
        return false;
    }
    if let Some(target) = board.contents(mv.to) {
        if target.color() == turn || target.piece().is_king() {
            return false;
        }
    }
    let special = is_valid_castle(mv, state) || is_valid_en_passant(mv, state);
    if !special && !reachable(board, mv.from).contains(mv.to) {
        trace!(%mv, "rejected: not reachable");
        return false;
    }
    if is_in_check(&resulting_board(mv, state), turn) {
        trace!(%mv, "rejected: leaves king in check");
        return false;
    }
    true
}

/// The board after `mv`, including the second square touched by a
/// castle or an en passant capture. Promotion is not applied.
pub fn resulting_board(mv: Move, state: &GameState) -> Board {
    let board = state.board();
    if is_valid_castle(mv, state) {
        perform_castle(mv, board)
    } else if is_valid_en_passant(mv, state) {
        perform_en_passant(mv, board)
    } else {
        board.relocate(mv)
    }
}

/// Every square the piece on `from` could be moved to without breaking
/// a rule. Empty unless the piece belongs to the side to move.
pub fn legal_destinations(state: &GameState, from: Square) -> Mask {
    let mut mask = Mask::empty();
    for to in candidates(state, from).iter() {
        if is_legal(Move::new(from, to), state) {
            mask |= to;
        }
    }
    mask
}

/// Destinations worth testing for the piece on `from`: its movement
/// pattern plus any castling or en passant squares.
pub(super) fn candidates(state: &GameState, from: Square) -> Mask {
    let board = state.board();
    let mut mask = reachable(board, from);
    if let Some(material) = board.contents(from) {
        if material.piece().is_king() {
            mask |= castle_destinations(material.color());
        }
        if let (true, Some(target)) = (material.piece().is_pawn(), state.en_passant()) {
            mask |= target;
        }
    }
    mask
}
