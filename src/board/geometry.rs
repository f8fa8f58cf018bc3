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

//! Movement patterns of the individual pieces.
//!
//! `reachable` answers "where could this piece go" from its movement
//! pattern alone. It knows nothing about whose turn it is, checks,
//! castling or en passant; those are layered on top by `moves`.

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use super::grid::{slide, Board};
use super::material::{Color, Piece};
use super::square::{Direction, Mask, Offset, Rank, Square};

use Color::*;
use Piece::*;

/// Squares the piece on `from` can reach by its movement pattern,
/// ignoring check. Squares held by its own side are never included.
pub fn reachable(board: &Board, from: Square) -> Mask {
    let Some(material) = board.contents(from) else {
        return Mask::empty();
    };
    let color = material.color();
    let ours = board.occupied_by(color);
    let theirs = board.occupied_by(!color);
    let destinations = match material.piece() {
        King => KING_MOVES[from],
        Knight => KNIGHT_MOVES[from],
        Bishop => slide(board, from, Direction::diagonals()),
        Rook => slide(board, from, Direction::horizontals()),
        Queen => slide(board, from, Direction::iter()),
        Pawn => pawn_advances(board, from, color) | (pawn_attacks(from, color) & theirs),
    };
    destinations & !ours
}

/// Diagonal squares a pawn of `color` on `from` attacks.
#[inline]
pub fn pawn_attacks(from: Square, color: Color) -> Mask {
    match color {
        White => WHITE_PAWN_ATTACKS[from],
        Black => BLACK_PAWN_ATTACKS[from],
    }
}

fn pawn_advances(board: &Board, from: Square, color: Color) -> Mask {
    let mut mask = Mask::empty();
    let forward = color.forward();
    let Some(single) = from + forward else {
        return mask;
    };
    if !board.is_vacant(single) {
        return mask;
    }
    mask |= single;
    if from.rank() == Rank::pawn_rank(color) {
        if let Some(double) = single + forward {
            if board.is_vacant(double) {
                mask |= double;
            }
        }
    }
    mask
}

pub(super) static KING_MOVES: Lazy<[Mask; 64]> = Lazy::new(|| {
    let mut array = [Mask::default(); 64];
    for square in Square::iter() {
        array[square] = Mask::from_squares(Direction::iter().filter_map(|dir| square + dir));
    }
    array
});

pub(super) static KNIGHT_MOVES: Lazy<[Mask; 64]> = Lazy::new(|| {
    const OFFSETS: [Offset; 8] = [
        Offset::new(-2, -1),
        Offset::new(-2, 1),
        Offset::new(2, -1),
        Offset::new(2, 1),
        Offset::new(-1, -2),
        Offset::new(-1, 2),
        Offset::new(1, -2),
        Offset::new(1, 2),
    ];
    let mut array = [Mask::default(); 64];
    for square in Square::iter() {
        array[square] =
            Mask::from_squares(OFFSETS.into_iter().filter_map(|offset| square + offset));
    }
    array
});

static WHITE_PAWN_ATTACKS: Lazy<[Mask; 64]> = Lazy::new(|| {
    const OFFSETS: [Offset; 2] = [Offset::new(-1, -1), Offset::new(1, -1)];
    pawn_attack_table(OFFSETS)
});

static BLACK_PAWN_ATTACKS: Lazy<[Mask; 64]> = Lazy::new(|| {
    const OFFSETS: [Offset; 2] = [Offset::new(-1, 1), Offset::new(1, 1)];
    pawn_attack_table(OFFSETS)
});

fn pawn_attack_table(offsets: [Offset; 2]) -> [Mask; 64] {
    let mut array = [Mask::default(); 64];
    for square in Square::iter() {
        array[square] =
            Mask::from_squares(offsets.into_iter().filter_map(|offset| square + offset));
    }
    array
}
