//! Move state-change journal for chess on an unbounded board.
//!
//! This crate provides:
//! - [`StateChange`] / [`MoveState`] - per-move records of derived state
//!   transitions, partitioned into local and global categories
//! - [`record`] - the recording layer move construction feeds with
//!   computed before/after values
//! - [`apply_move`] / [`apply_change`] - the replay engine that walks a
//!   move's records forward or backward
//! - [`GameState`] - the shared struct owning the tracked fields
//! - [`MoveHistory`] - committed moves plus a view cursor over them
//!
//! # Architecture
//!
//! As a move is constructed, move generation records every derived state
//! transition it computes on the move's journal. *Local* changes (check,
//! attackers) are intrinsic to the resulting position: they are applied
//! immediately and replayed on every traversal of the move. *Global*
//! changes (en passant, special rights, move-rule counter) are properties
//! of the game's timeline: they are only replayed when the move is
//! committed to the game or removed from it, so merely viewing a past
//! position can never corrupt timeline state.
//!
//! # Example
//!
//! ```
//! use boundless_core::Coord;
//! use boundless_journal::{
//!     apply_move, record_check, record_move_rule, GameState, Move, Scope,
//! };
//!
//! let mut state = GameState::new();
//! let mut mov = Move::new(Coord::new(4, 1), Coord::new(4, 3));
//!
//! // Move construction records what it computed; check applies at once.
//! record_check(&mut mov, None, Some(vec![Coord::new(4, 5)]), &mut state);
//! record_move_rule(&mut mov, 0, 1);
//! assert!(state.is_check());
//! assert_eq!(state.move_rule, 0);
//!
//! // Scrubbing backward restores position-intrinsic state only.
//! apply_move(&mut state, &mov, false, Scope::Local);
//! assert!(!state.is_check());
//!
//! // Committing the move for real also moves the timeline state.
//! apply_move(&mut state, &mov, true, Scope::Global);
//! assert_eq!(state.move_rule, 1);
//! ```

mod change;
mod gamestate;
mod history;
mod mov;
pub mod record;
pub mod replay;

pub use change::{MoveState, StateChange};
pub use gamestate::{GameState, SpecialRights};
pub use history::{HistoryError, MoveHistory};
pub use mov::Move;
pub use record::{
    record_attackers, record_check, record_en_passant, record_move_rule, record_special_right,
};
pub use replay::{apply_change, apply_move, Scope};
