//! Recording layer: builds a move's state-change journal.
//!
//! Move construction calls these as each consequence of the move is
//! computed. Local kinds (check, attackers) describe the resulting
//! position itself and are applied to the game state immediately; global
//! kinds describe timeline state and stay queued until the move is
//! actually committed.

use boundless_core::{Attacker, Coord, EnPassant};

use crate::replay::apply_change;
use crate::{GameState, Move, StateChange};

/// Records the check transition and applies it immediately.
///
/// Check is recomputed for every move, so the transition is recorded even
/// when both sides are equal.
pub fn record_check(
    mov: &mut Move,
    current: Option<Vec<Coord>>,
    future: Option<Vec<Coord>>,
    state: &mut GameState,
) {
    let change = StateChange::Check { current, future };
    apply_change(state, &change, true);
    mov.state.local.push(change);
}

/// Records the attacker-list transition and applies it immediately.
pub fn record_attackers(
    mov: &mut Move,
    current: Vec<Attacker>,
    future: Vec<Attacker>,
    state: &mut GameState,
) {
    let change = StateChange::Attackers { current, future };
    apply_change(state, &change, true);
    mov.state.local.push(change);
}

/// Records an en passant transition, coalescing repeated writes.
///
/// A move's global records hold at most one en passant entry: a second
/// write keeps the first entry's `current` and replaces its `future`. If
/// the write (or the coalesced result) has equal sides the entry is elided
/// outright, so the intermediate value is never observable afterwards.
pub fn record_en_passant(mov: &mut Move, current: Option<EnPassant>, future: Option<EnPassant>) {
    if current == future {
        return;
    }

    let existing = mov
        .state
        .global
        .iter()
        .position(|change| matches!(change, StateChange::EnPassant { .. }));

    match existing {
        Some(index) => {
            let coalesced_away = matches!(
                &mov.state.global[index],
                StateChange::EnPassant { current: first, .. } if *first == future
            );
            if coalesced_away {
                // The move ended up not changing en passant at all.
                mov.state.global.remove(index);
            } else if let StateChange::EnPassant { future: merged, .. } =
                &mut mov.state.global[index]
            {
                *merged = future;
            }
        }
        None => mov.state.global.push(StateChange::EnPassant { current, future }),
    }
}

/// Records a special-right transition for one square.
///
/// Each square's transition is its own record; writes to different squares
/// within a move are never merged.
pub fn record_special_right(mov: &mut Move, square: Coord, current: bool, future: bool) {
    if current == future {
        return;
    }
    mov.state.global.push(StateChange::SpecialRight {
        square,
        current,
        future,
    });
}

/// Records a move-rule counter transition.
pub fn record_move_rule(mov: &mut Move, current: u32, future: u32) {
    if current == future {
        return;
    }
    mov.state.global.push(StateChange::MoveRule { current, future });
}
