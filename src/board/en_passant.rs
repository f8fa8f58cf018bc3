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

use super::grid::{between, Board};
use super::material::{Material, Piece};
use super::moves::Move;
use super::square::{Rank, Square};
use super::state::GameState;
use super::Turn;

/// The square holding the pawn taken by an en passant capture: same
/// file as the destination, same rank as the capturing pawn.
#[inline]
pub fn captured_square(mv: Move) -> Square {
    Square::new(mv.to.file(), mv.from.rank())
}

pub fn is_valid_en_passant(mv: Move, state: &GameState) -> bool {
    let color = state.turn();
    let board = state.board();
    if state.en_passant() != Some(mv.to) {
        return false;
    }
    if board[mv.from] != Some(Material::new(color, Piece::Pawn)) || !board.is_vacant(mv.to) {
        return false;
    }
    let offset = mv.to - mv.from;
    if offset.y != color.forward().y || offset.x.abs() != 1 {
        return false;
    }
    board[captured_square(mv)] == Some(Material::new(!color, Piece::Pawn))
}

/// Moves the capturing pawn and removes the pawn it passed.
///
/// # Panics
///
/// Panics if there is no pawn on `mv.from`.
pub fn perform_en_passant(mv: Move, board: &Board) -> Board {
    assert!(
        board[mv.from].is_some_and(|material| material.piece().is_pawn()),
        "perform_en_passant: no pawn on {}",
        mv.from
    );
    board.relocate(mv).clear(captured_square(mv))
}

/// The square skipped by a pawn advancing two squares from its starting
/// rank, or `None` for any other move. `board` is the board before `mv`.
pub fn update_en_passant_target(mv: Move, board: &Board) -> Option<Square> {
    let material = board[mv.from]?;
    if !material.piece().is_pawn() || mv.from.rank() != Rank::pawn_rank(material.color()) {
        return None;
    }
    let offset = mv.to - mv.from;
    if offset.x != 0 || offset.y != 2 * material.color().forward().y {
        return None;
    }
    between(mv.from, mv.to).iter().next()
}

#[cfg(test)]
mod tests {
    use crate::*;
    use Color::*;
    use Square::*;

    #[test]
    fn test_double_advance_sets_target() {
        let board = Board::standard();
        assert_eq!(update_en_passant_target(Move::new(E2, E4), &board), Some(E3));
        assert_eq!(update_en_passant_target(Move::new(D7, D5), &board), Some(D6));
    }
    #[test]
    fn test_other_moves_clear_target() {
        let board = Board::standard();
        assert_eq!(update_en_passant_target(Move::new(E2, E3), &board), None);
        assert_eq!(update_en_passant_target(Move::new(G1, F3), &board), None);
        let board = board.relocate(Move::new(E2, E3));
        assert_eq!(update_en_passant_target(Move::new(E3, E5), &board), None);
    }
    #[test]
    fn test_white_en_passant() {
        let board = Board::standard()
            .place(B5, Some(Material::BP))
            .clear(B7)
            .place(A5, Some(Material::WP))
            .clear(A2);
        let state = GameState::default().set_board(board).set_en_passant(Some(B6));
        let mv = Move::new(A5, B6);
        assert!(is_valid_en_passant(mv, &state));
        assert!(is_legal(mv, &state));
        let board = perform_en_passant(mv, state.board());
        assert_eq!(board[B6], Some(Material::WP));
        assert_eq!(board[B5], None);
        assert_eq!(board[A5], None);
    }
    #[test]
    fn test_black_en_passant() {
        let board = Board::standard()
            .place(B4, Some(Material::WP))
            .clear(B2)
            .place(A4, Some(Material::BP))
            .clear(A7);
        let state = GameState::default()
            .set_board(board)
            .set_turn(Black)
            .set_en_passant(Some(B3));
        let mv = Move::new(A4, B3);
        assert!(is_valid_en_passant(mv, &state));
        let board = perform_en_passant(mv, state.board());
        assert_eq!(board[B3], Some(Material::BP));
        assert_eq!(board[B4], None);
        assert_eq!(board[A4], None);
    }
    #[test]
    fn test_en_passant_needs_target() {
        let board = Board::standard()
            .place(B5, Some(Material::BP))
            .place(A5, Some(Material::WP));
        let state = GameState::default().set_board(board);
        assert!(!is_valid_en_passant(Move::new(A5, B6), &state));
        assert!(!is_legal(Move::new(A5, B6), &state));
    }
    #[test]
    fn test_en_passant_wrong_direction() {
        let board = Board::empty()
            .place(E1, Some(Material::WK))
            .place(E8, Some(Material::BK))
            .place(A5, Some(Material::WP))
            .place(B5, Some(Material::BP));
        let state = GameState::default().set_board(board).set_en_passant(Some(B4));
        assert!(!is_valid_en_passant(Move::new(A5, B4), &state));
    }
    #[test]
    fn test_en_passant_only_by_pawns() {
        let board = Board::empty()
            .place(E1, Some(Material::WK))
            .place(E8, Some(Material::BK))
            .place(A5, Some(Material::WN))
            .place(B5, Some(Material::BP));
        let state = GameState::default().set_board(board).set_en_passant(Some(B6));
        assert!(!is_valid_en_passant(Move::new(A5, B6), &state));
    }
    #[test]
    fn test_en_passant_exposing_king() {
        let board = Board::empty()
            .place(A5, Some(Material::WK))
            .place(B5, Some(Material::WP))
            .place(C5, Some(Material::BP))
            .place(H5, Some(Material::BR))
            .place(E8, Some(Material::BK));
        let state = GameState::default().set_board(board).set_en_passant(Some(C6));
        let mv = Move::new(B5, C6);
        assert!(is_valid_en_passant(mv, &state));
        assert!(!is_legal(mv, &state));
    }
}
