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
use std::str::FromStr;
use strum_macros::EnumIter;
use thiserror::Error;

use super::grid::Board;
use super::material::{Material, Piece};
use super::moves::Move;
use super::square::{Rank, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    #[error("Not a valid piece: {0:?}")]
    InvalidChoice(String),
}

/// The pieces a pawn may be promoted to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl From<Promotion> for Piece {
    fn from(value: Promotion) -> Self {
        match value {
            Promotion::Queen => Piece::Queen,
            Promotion::Rook => Piece::Rook,
            Promotion::Bishop => Piece::Bishop,
            Promotion::Knight => Piece::Knight,
        }
    }
}

impl FromStr for Promotion {
    type Err = PromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "q" | "Q" => Ok(Promotion::Queen),
            "r" | "R" => Ok(Promotion::Rook),
            "b" | "B" => Ok(Promotion::Bishop),
            "n" | "N" => Ok(Promotion::Knight),
            other => Err(PromotionError::InvalidChoice(other.to_string())),
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Promotion::Queen => "q",
            Promotion::Rook => "r",
            Promotion::Bishop => "b",
            Promotion::Knight => "n",
        };
        write!(f, "{}", s)
    }
}

/// The square where a pawn must be promoted after `mv`, if any. `board`
/// is the board before `mv`.
pub fn promotion_square(mv: Move, board: &Board) -> Option<Square> {
    let material = board[mv.from]?;
    if material.piece().is_pawn() && mv.to.rank() == Rank::promotion_rank(material.color()) {
        Some(mv.to)
    } else {
        None
    }
}

/// Replaces the pawn on `square` with `choice`, keeping its color.
///
/// # Panics
///
/// Panics if there is no pawn on `square`.
pub fn promote(board: &Board, square: Square, choice: Promotion) -> Board {
    let pawn = match board[square] {
        Some(material) if material.piece().is_pawn() => material,
        other => panic!("promote: expected a pawn on {square}, found {other:?}"),
    };
    board.place(square, Some(Material::new(pawn.color(), choice.into())))
}
