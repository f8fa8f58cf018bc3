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

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use strum::IntoEnumIterator;

use super::material::{Color, Material, Piece};
use super::moves::Move;
use super::square::{Direction, File, Mask, Offset, Rank, Square};

use Piece::*;

const BACK_RANK: [Piece; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

/// The contents of all 64 squares, row 0 (black's back rank) first.
///
/// A `Board` is a plain value: every update returns a new board and
/// leaves the original untouched, so a board can be copied freely to
/// try out a move and then thrown away.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([[Option<Material>; 8]; 8]);

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self([[None; 8]; 8])
    }

    /// The starting layout of a standard game.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in Color::iter() {
            let back_rank = Rank::back_rank(color);
            let pawn_rank = Rank::pawn_rank(color);
            for (file, piece) in File::iter().zip(BACK_RANK) {
                board = board
                    .place(Square::new(file, back_rank), Some(Material::new(color, piece)))
                    .place(Square::new(file, pawn_rank), Some(Material::new(color, Pawn)));
            }
        }
        board
    }

    #[inline]
    pub fn contents(&self, square: Square) -> Option<Material> {
        self.0[square.row()][square.col()]
    }

    /// Returns a copy of this board with `square` holding `contents`.
    #[must_use]
    pub fn place(&self, square: Square, contents: Option<Material>) -> Self {
        let mut board = *self;
        board.0[square.row()][square.col()] = contents;
        board
    }

    /// Returns a copy of this board with `square` emptied.
    #[must_use]
    #[inline]
    pub fn clear(&self, square: Square) -> Self {
        self.place(square, None)
    }

    /// Moves whatever stands on `mv.from` to `mv.to`, replacing anything
    /// there. No rules are checked.
    #[must_use]
    pub fn relocate(&self, mv: Move) -> Self {
        let material = self.contents(mv.from);
        self.place(mv.to, material).clear(mv.from)
    }

    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        self.contents(square).is_none()
    }

    pub fn occupied_by(&self, color: Color) -> Mask {
        Mask::from_squares(self.pieces(color).map(|(square, _)| square))
    }

    pub fn occupied(&self) -> Mask {
        self.occupied_by(Color::White) | self.occupied_by(Color::Black)
    }

    /// All of `color`'s pieces, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Material)> + '_ {
        Square::iter().filter_map(move |square| match self.contents(square) {
            Some(material) if material.color() == color => Some((square, material)),
            _ => None,
        })
    }

    pub fn king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, material)| material.piece().is_king())
            .map(|(square, _)| square)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Material>; 8]> {
        self.0.iter()
    }
}

impl Index<Square> for Board {
    type Output = Option<Material>;
    #[inline]
    fn index(&self, index: Square) -> &Self::Output {
        &self.0[index.row()][index.col()]
    }
}

/// Squares strictly between `from` and `to` when they share a rank, file
/// or diagonal; empty otherwise.
#[inline]
pub fn between(from: Square, to: Square) -> Mask {
    SQUARES_BETWEEN[from.to_index() * 64 + to.to_index()]
}

static SQUARES_BETWEEN: Lazy<Vec<Mask>> = Lazy::new(|| {
    fn squares_between(start: Square, end: Square) -> Mask {
        let mut mask = Mask::empty();
        let offset = end - start;
        let aligned = offset.x == 0 || offset.y == 0 || offset.x.abs() == offset.y.abs();
        if start == end || !aligned {
            return mask;
        }
        let step = Offset::new(offset.x.signum(), offset.y.signum());
        let mut next = start + step;
        while let Some(square) = next {
            if square == end {
                break;
            }
            mask |= square;
            next = square + step;
        }
        mask
    }

    let mut table = vec![Mask::empty(); 64 * 64];
    for start in Square::iter() {
        for end in Square::iter() {
            table[start.to_index() * 64 + end.to_index()] = squares_between(start, end);
        }
    }
    table
});

/// Walks from `from` in each direction, collecting squares up to and
/// including the first occupied one.
pub(super) fn slide<I>(board: &Board, from: Square, directions: I) -> Mask
where
    I: IntoIterator<Item = Direction>,
{
    let mut mask = Mask::empty();
    for dir in directions {
        let mut next = from + dir;
        while let Some(square) = next {
            mask |= square;
            if !board.is_vacant(square) {
                break;
            }
            next = square + dir;
        }
    }
    mask
}
