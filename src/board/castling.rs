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
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::attacks::is_attacked;
use super::grid::{between, Board};
use super::material::{Color, Material, Pair, Piece};
use super::moves::Move;
use super::square::{File, Mask, Rank, Square};
use super::state::GameState;
use super::Turn;

use File::*;

/// Which of a side's pieces have left their starting squares. Each flag
/// only ever goes from `false` to `true`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    king_moved: bool,
    kingside_rook_moved: bool,
    queenside_rook_moved: bool,
}

impl CastlingRights {
    pub const fn new(king_moved: bool, kingside_rook_moved: bool, queenside_rook_moved: bool) -> Self {
        Self {
            king_moved,
            kingside_rook_moved,
            queenside_rook_moved,
        }
    }
    #[inline]
    pub fn king_moved(&self) -> bool {
        self.king_moved
    }
    #[inline]
    pub fn kingside_rook_moved(&self) -> bool {
        self.kingside_rook_moved
    }
    #[inline]
    pub fn queenside_rook_moved(&self) -> bool {
        self.queenside_rook_moved
    }
    #[inline]
    pub fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.kingside_rook_moved,
            CastleSide::Queenside => self.queenside_rook_moved,
        }
    }
    #[inline]
    pub fn can_castle(&self, side: CastleSide) -> bool {
        !self.king_moved && !self.rook_moved(side)
    }

    /// Records that `square` was left or entered during a move made
    /// on `color`'s home squares.
    fn touch(&mut self, color: Color, square: Square) {
        if square == king_home(color) {
            self.king_moved = true;
        }
        if square == CastleSide::Kingside.rook_src(color) {
            self.kingside_rook_moved = true;
        }
        if square == CastleSide::Queenside.rook_src(color) {
            self.queenside_rook_moved = true;
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    pub fn king_dest(&self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => FileG,
            CastleSide::Queenside => FileC,
        };
        Square::new(file, Rank::back_rank(color))
    }
    #[inline]
    pub fn rook_src(&self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => FileH,
            CastleSide::Queenside => FileA,
        };
        Square::new(file, Rank::back_rank(color))
    }
    /// The square the king passes over, where the rook ends up.
    #[inline]
    pub fn rook_dest(&self, color: Color) -> Square {
        let file = match self {
            CastleSide::Kingside => FileF,
            CastleSide::Queenside => FileD,
        };
        Square::new(file, Rank::back_rank(color))
    }

    /// The side castled on if `mv` is `color`'s king moving two files
    /// from its home square.
    pub fn from_move(mv: Move, color: Color) -> Option<Self> {
        if mv.from != king_home(color) {
            return None;
        }
        CastleSide::iter().find(|side| side.king_dest(color) == mv.to)
    }
}

#[inline]
pub fn king_home(color: Color) -> Square {
    Square::new(FileE, Rank::back_rank(color))
}

/// Both squares `color`'s king lands on when castling.
pub fn castle_destinations(color: Color) -> Mask {
    Mask::from_squares(CastleSide::iter().map(|side| side.king_dest(color)))
}

/// Whether `mv` is a castle the side to move is allowed to make.
pub fn is_valid_castle(mv: Move, state: &GameState) -> bool {
    let color = state.turn();
    let board = state.board();
    let Some(side) = CastleSide::from_move(mv, color) else {
        return false;
    };
    if !state.castling(color).can_castle(side) {
        return false;
    }
    let rook_src = side.rook_src(color);
    if board[mv.from] != Some(Material::new(color, Piece::King))
        || board[rook_src] != Some(Material::new(color, Piece::Rook))
    {
        return false;
    }
    let blocking_lane = between(mv.from, rook_src);
    if !(blocking_lane & board.occupied()).is_empty() {
        return false;
    }
    let attacking_lane = between(mv.from, mv.to) | mv.from | mv.to;
    !attacking_lane
        .iter()
        .any(|square| is_attacked(board, square, !color))
}

/// Moves the king two files and its rook to the square the king passed
/// over, in a single board update.
///
/// # Panics
///
/// Panics if `mv` is not a king's castling move on `board`.
pub fn perform_castle(mv: Move, board: &Board) -> Board {
    let king = board[mv.from].expect("perform_castle: no king on origin square");
    let color = king.color();
    let side = CastleSide::from_move(mv, color).expect("perform_castle: not a castling move");
    let rook_src = side.rook_src(color);
    let rook = board[rook_src];
    board
        .clear(mv.from)
        .clear(rook_src)
        .place(mv.to, Some(king))
        .place(side.rook_dest(color), rook)
}

/// Castling rights after `mv`: a king or rook leaving its home square,
/// or being captured there, loses the matching right for good. `board`
/// is the board before `mv`.
pub fn update_castling_rights(
    mv: Move,
    board: &Board,
    rights: Pair<CastlingRights>,
) -> Pair<CastlingRights> {
    let mut rights = rights;
    let king_moving = board[mv.from].is_some_and(|material| material.piece().is_king());
    for color in Color::iter() {
        let flags = &mut rights[color];
        flags.touch(color, mv.from);
        flags.touch(color, mv.to);
        if let (true, Some(side)) = (king_moving, CastleSide::from_move(mv, color)) {
            flags.touch(color, side.rook_src(color));
        }
    }
    rights
}

#[cfg(test)]
mod tests {
    use crate::*;
    use Color::*;
    use Square::*;

    fn castle_ready() -> GameState {
        let board = Board::standard()
            .clear(B1)
            .clear(C1)
            .clear(D1)
            .clear(F1)
            .clear(G1);
        GameState::default().set_board(board)
    }

    #[test]
    fn test_short_castle() {
        let state = castle_ready();
        let mv = Move::new(E1, G1);
        assert!(is_valid_castle(mv, &state));
        assert!(is_legal(mv, &state));
        let board = perform_castle(mv, state.board());
        assert_eq!(board[G1], Some(Material::WK));
        assert_eq!(board[F1], Some(Material::WR));
        assert_eq!(board[E1], None);
        assert_eq!(board[H1], None);
    }
    #[test]
    fn test_long_castle() {
        let state = castle_ready();
        let mv = Move::new(E1, C1);
        assert!(is_valid_castle(mv, &state));
        let board = perform_castle(mv, state.board());
        assert_eq!(board[C1], Some(Material::WK));
        assert_eq!(board[D1], Some(Material::WR));
        assert_eq!(board[E1], None);
        assert_eq!(board[A1], None);
    }
    #[test]
    fn test_black_castle() {
        let board = Board::standard().clear(F8).clear(G8);
        let state = GameState::default().set_board(board).set_turn(Black);
        let mv = Move::new(E8, G8);
        assert!(is_valid_castle(mv, &state));
        let board = perform_castle(mv, state.board());
        assert_eq!(board[G8], Some(Material::BK));
        assert_eq!(board[F8], Some(Material::BR));
    }
    #[test]
    fn test_castle_wrong_turn() {
        let board = Board::standard().clear(F8).clear(G8);
        let state = GameState::default().set_board(board);
        assert!(!is_valid_castle(Move::new(E8, G8), &state));
    }
    #[test]
    fn test_castle_lane_blocked() {
        let state = GameState::default().set_board(Board::standard().clear(G1));
        assert!(!is_valid_castle(Move::new(E1, G1), &state));
        let state = GameState::default().set_board(Board::standard().clear(C1).clear(D1));
        assert!(!is_valid_castle(Move::new(E1, C1), &state));
    }
    #[test]
    fn test_castle_rights_lost() {
        let state = castle_ready().set_castling(White, CastlingRights::new(false, true, false));
        assert!(!is_valid_castle(Move::new(E1, G1), &state));
        assert!(is_valid_castle(Move::new(E1, C1), &state));
        let state = castle_ready().set_castling(White, CastlingRights::new(true, false, false));
        assert!(!is_valid_castle(Move::new(E1, G1), &state));
        assert!(!is_valid_castle(Move::new(E1, C1), &state));
    }
    #[test]
    fn test_castle_through_attack() {
        let state = castle_ready();
        let state = state.set_board(state.board().clear(F2).place(F4, Some(Material::BR)));
        assert!(!is_valid_castle(Move::new(E1, G1), &state));
        assert!(is_valid_castle(Move::new(E1, C1), &state));
    }
    #[test]
    fn test_castle_out_of_check() {
        let state = castle_ready();
        let state = state.set_board(state.board().clear(E2).place(E5, Some(Material::BR)));
        assert!(!is_valid_castle(Move::new(E1, G1), &state));
        assert!(!is_valid_castle(Move::new(E1, C1), &state));
    }
    #[test]
    fn test_castle_into_check() {
        let state = castle_ready();
        let state = state.set_board(state.board().clear(G2).place(G4, Some(Material::BR)));
        assert!(!is_valid_castle(Move::new(E1, G1), &state));
    }
    #[test]
    fn test_long_castle_allowed_when_b1_attacked() {
        let state = castle_ready();
        let state = state.set_board(state.board().place(B2, Some(Material::BR)));
        assert!(is_valid_castle(Move::new(E1, C1), &state));
    }
    #[test]
    fn test_castle_needs_rook() {
        let state = castle_ready();
        let state = state.set_board(state.board().clear(H1));
        assert!(!is_valid_castle(Move::new(E1, G1), &state));
    }
    #[test]
    fn test_king_move_clears_rights() {
        let rights = update_castling_rights(Move::new(E1, E2), &Board::standard(), Pair::default());
        assert!(rights[White].king_moved());
        assert!(!rights[White].can_castle(CastleSide::Kingside));
        assert!(!rights[White].can_castle(CastleSide::Queenside));
        assert_eq!(rights[Black], CastlingRights::default());
    }
    #[test]
    fn test_rook_move_clears_one_side() {
        let rights = update_castling_rights(Move::new(A8, A6), &Board::standard(), Pair::default());
        assert!(rights[Black].queenside_rook_moved());
        assert!(!rights[Black].kingside_rook_moved());
        assert!(rights[Black].can_castle(CastleSide::Kingside));
        assert!(!rights[Black].can_castle(CastleSide::Queenside));
    }
    #[test]
    fn test_rook_capture_clears_right() {
        let rights = update_castling_rights(Move::new(B7, H1), &Board::standard(), Pair::default());
        assert!(rights[White].kingside_rook_moved());
        assert!(!rights[White].king_moved());
    }
    #[test]
    fn test_castle_clears_king_and_rook() {
        let rights = update_castling_rights(Move::new(E1, C1), &Board::standard(), Pair::default());
        assert!(rights[White].king_moved());
        assert!(rights[White].queenside_rook_moved());
        assert!(!rights[White].kingside_rook_moved());
    }
    #[test]
    fn test_only_king_moves_mark_rook() {
        let board = Board::empty()
            .place(E1, Some(Material::WQ))
            .place(A1, Some(Material::WR))
            .place(H1, Some(Material::WR));
        let rights = update_castling_rights(Move::new(E1, C1), &board, Pair::default());
        assert!(!rights[White].queenside_rook_moved());
        let rights = update_castling_rights(Move::new(E1, G1), &board, Pair::default());
        assert!(!rights[White].kingside_rook_moved());
    }
    #[test]
    fn test_rights_are_monotonic() {
        let lost = Pair::new(CastlingRights::new(true, true, true), CastlingRights::default());
        let rights = update_castling_rights(Move::new(G1, F3), &Board::standard(), lost);
        assert_eq!(rights[White], CastlingRights::new(true, true, true));
    }
}
