//! Replay engine: applies a move's recorded changes to the game state.

use crate::{GameState, Move, StateChange};

/// Which record categories a traversal replays.
///
/// `Local` is for navigation that merely views a position: scrubbing
/// history or walking a simulated line. Only position-intrinsic state
/// moves; en passant, special rights, and the move-rule counter are left
/// alone because they belong to the timeline shared by every view of the
/// game. `Global` additionally replays those records and is reserved for
/// the two commit points: advancing the real game by one move, and
/// unwinding a move that is being removed from its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Local,
    Global,
}

/// Replays every change recorded on `mov` against `state`.
///
/// Records are processed in insertion order regardless of direction:
/// `forward` selects which side of each record is written, never the order
/// records are visited in.
pub fn apply_move(state: &mut GameState, mov: &Move, forward: bool, scope: Scope) {
    for change in &mov.state.local {
        apply_change(state, change, forward);
    }
    if scope == Scope::Global {
        for change in &mov.state.global {
            apply_change(state, change, forward);
        }
    }
}

/// Writes one side of a single record into the game state.
pub fn apply_change(state: &mut GameState, change: &StateChange, forward: bool) {
    match change {
        StateChange::Check { current, future } => {
            state.in_check = if forward { future.clone() } else { current.clone() };
        }
        StateChange::Attackers { current, future } => {
            state.attackers = if forward { future.clone() } else { current.clone() };
        }
        StateChange::EnPassant { current, future } => {
            state.en_passant = if forward { *future } else { *current };
        }
        StateChange::SpecialRight {
            square,
            current,
            future,
        } => {
            let held = if forward { *future } else { *current };
            if held {
                state.special_rights.grant(*square);
            } else {
                state.special_rights.revoke(*square);
            }
        }
        StateChange::MoveRule { current, future } => {
            state.move_rule = if forward { *future } else { *current };
        }
    }
}
