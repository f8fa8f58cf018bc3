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

//! Chess rules for a two player game
//!
//! This module decides whether a proposed move is legal and works out
//! the game state that follows it. The following rules are supported:
//!
//! [x] Standard piece movement
//! [x] Moves may not leave the mover's own king in check
//! [x] Castling (king side and queen side)
//! [x] En passant
//! [x] Promotion to queen, rook, bishop or knight
//! [x] Check, checkmate and stalemate detection
//! [ ] Three-fold repetition
//! [ ] Fifty-move rule
//!
//! Some of the key abstractions include:
//!
//! * A `Square` identifies one of the 64 squares. Squares are numbered
//!   row-major from black's back rank: `A8` is row 0 / column 0 and
//!   `H1` is row 7 / column 7. `Square::at` converts raw coordinates
//!   and rejects anything off the board.
//!
//! * A `Mask` is a set of squares packed into a `u64`, used for move
//!   destinations and attack sets.
//!
//! * `Material` is a `Piece` of a specific `Color`. A square's contents
//!   are an `Option<Material>`.
//!
//! * A `Board` is an 8-by-8 grid of square contents. It is a `Copy`
//!   value and every update (`place`, `clear`, `relocate`) returns a
//!   new board, so trying out a move never disturbs the original.
//!
//! * A `Move` is just a pair of squares. Whether it is a castle or an
//!   en passant capture is worked out from the board and the state.
//!
//! * A `GameState` bundles the board with whose turn it is, the
//!   `CastlingRights` of both sides and the en passant target square.
//!   `GameState::apply_move` returns a `Transition`: either the next
//!   state, or a `PendingPromotion` that must be resolved with a
//!   `Promotion` choice before the turn is over.
//!
//! * `reachable` (movement patterns) and `is_in_check` (attack
//!   detection) are the building blocks `is_legal` is composed from.
//!

mod attacks;
mod castling;
mod en_passant;
mod geometry;
mod grid;
mod material;
mod moves;
mod promotion;
mod square;
mod state;

pub use attacks::*;
pub use castling::*;
pub use en_passant::*;
pub use geometry::*;
pub use grid::*;
pub use material::*;
pub use moves::*;
pub use promotion::*;
pub use square::*;
pub use state::*;

pub trait Turn {
    fn turn(&self) -> Color;
}
