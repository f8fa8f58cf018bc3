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

use strum::IntoEnumIterator;

use super::geometry::{pawn_attacks, KING_MOVES, KNIGHT_MOVES};
use super::grid::{slide, Board};
use super::material::{Color, Piece};
use super::square::{Direction, Mask, Square};

use Piece::*;

/// Squares attacked by the piece on `from`, including squares held by
/// its own side. Pawns attack diagonally only.
pub fn attacked_from(board: &Board, from: Square) -> Mask {
    let Some(material) = board.contents(from) else {
        return Mask::empty();
    };
    match material.piece() {
        King => KING_MOVES[from],
        Knight => KNIGHT_MOVES[from],
        Bishop => slide(board, from, Direction::diagonals()),
        Rook => slide(board, from, Direction::horizontals()),
        Queen => slide(board, from, Direction::iter()),
        Pawn => pawn_attacks(from, material.color()),
    }
}

#[inline]
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .pieces(by)
        .any(|(from, _)| attacked_from(board, from).contains(square))
}

/// Whether `color`'s king is attacked. A board without that king is
/// never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king(color)
        .is_some_and(|king| is_attacked(board, king, !color))
}
