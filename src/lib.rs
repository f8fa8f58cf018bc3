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

//! A two player chess game played at a text console.
//!
//! `board` holds the rules: move legality, special moves and the state
//! transition that follows each move. `game` wraps a `GameState` into a
//! session and drives it from a line based console.

pub mod board;
pub mod config;
pub mod game;

pub use board::*;
pub use game::*;
