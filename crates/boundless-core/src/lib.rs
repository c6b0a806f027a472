//! Core types for chess on an unbounded board.
//!
//! This crate provides the fundamental value types used across the engine:
//! - [`Coord`] for squares on the unbounded board, with `"x,y"` key notation
//! - [`EnPassant`] for en passant capture state
//! - [`Attacker`] for pieces delivering check
//!
//! With the `serde` feature enabled, all types implement `Serialize` and
//! `Deserialize` for game persistence.

mod attack;
mod coord;
mod enpassant;

pub use attack::Attacker;
pub use coord::{Coord, CoordParseError};
pub use enpassant::EnPassant;
