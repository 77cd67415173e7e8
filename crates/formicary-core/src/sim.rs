//! Turn-by-turn ant movement under per-turn tunnel locks.
//!
//! Each turn visits every unfinished ant in id order and advances it one
//! room along its route unless the tunnel it needs was already claimed
//! this turn. Locks clear between turns and every ant owns a private
//! route, so the lowest unfinished ant always advances and the loop
//! terminates. A turn with no moves while ants remain unfinished means a
//! route stops short of the end; that run fails instead of spinning.
//!
//! Ants are numbered for display in the order they first manage to move,
//! not in id order. The move log reports display numbers only.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::assign::Assignment;
use crate::error::SolveError;
use crate::farm::RoomId;
use crate::routes::Route;

/// How tunnel locks are keyed.
///
/// `Directed` treats the two directions of a tunnel independently, so two
/// ants may cross the same tunnel in opposite directions within one turn.
/// That is the reference rule. `Undirected` locks the tunnel as a whole.
/// The rules disagree only when routes share a tunnel, which combinations
/// produced by this crate never do; hand-built assignments can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TunnelRule {
    #[default]
    Directed,
    Undirected,
}

impl TunnelRule {
    fn lock_key(self, from: RoomId, to: RoomId) -> (RoomId, RoomId) {
        match self {
            TunnelRule::Directed => (from, to),
            TunnelRule::Undirected => (from.min(to), from.max(to)),
        }
    }
}

/// Simulation rules, kept apart from `SolveOptions` so the simulator can
/// run standalone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimRules {
    pub tunnel_rule: TunnelRule,
}

/// One ant arriving in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Display number, handed out at first movement.
    pub ant: usize,
    /// Room the ant moved into.
    pub room: RoomId,
}

/// All moves of one discrete step, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub moves: Vec<Move>,
}

/// Per-ant state. Rebuilt for every simulation; one combination means one
/// independent ant population.
struct AntState {
    route: usize,
    at: RoomId,
    display: Option<usize>,
    finished: bool,
}

/// Replay an assignment and return the move log.
///
/// `set_routes` holds the combination's routes; `assignment.route_of[k]`
/// picks the route of ant `k + 1`. Every ant stands in `start` before the
/// first turn and finishes on reaching `end`. Routes must run from
/// `start` to `end`; anything [`find_routes`](crate::routes::find_routes)
/// returns qualifies.
///
/// Fails with [`SolveError::AntOffRoute`] when an ant's current room is
/// missing from its route, meaning the assignment and route list do not
/// belong together, and with [`SolveError::NoMovesPossible`] when a turn
/// passes without a single move while ants remain unfinished, meaning
/// some route never reaches `end`.
pub fn simulate(
    set_routes: &[&Route],
    assignment: &Assignment,
    start: RoomId,
    end: RoomId,
    rules: SimRules,
) -> Result<Vec<Turn>, SolveError> {
    let mut ants: Vec<AntState> = assignment
        .route_of
        .iter()
        .map(|&route| AntState {
            route,
            at: start,
            display: None,
            finished: false,
        })
        .collect();

    let mut turns = Vec::new();
    let mut next_display = 1;

    loop {
        let mut locked: HashSet<(RoomId, RoomId)> = HashSet::new();
        let mut moves = Vec::new();
        let mut all_finished = true;

        for (id, ant) in ants.iter_mut().enumerate() {
            if ant.finished {
                continue;
            }
            let off_route = SolveError::AntOffRoute {
                ant: id + 1,
                room: ant.at,
            };
            let route = set_routes.get(ant.route).copied().ok_or(off_route.clone())?;
            let here = route.position_of(ant.at).ok_or(off_route)?;

            if here + 1 < route.len() {
                let next = route.rooms()[here + 1];
                if locked.insert(rules.tunnel_rule.lock_key(ant.at, next)) {
                    ant.at = next;
                    let display = *ant.display.get_or_insert_with(|| {
                        let n = next_display;
                        next_display += 1;
                        n
                    });
                    moves.push(Move { ant: display, room: next });
                    if next == end {
                        ant.finished = true;
                    }
                }
                // A held lock just means waiting; locks clear next turn.
            }

            if !ant.finished {
                all_finished = false;
            }
        }

        if !moves.is_empty() {
            turns.push(Turn { moves });
        } else if !all_finished {
            // Every unfinished ant is parked at the tail of a route that
            // stops short of `end`. Locks cannot cause this: a blocked ant
            // means some other ant moved this turn.
            return Err(SolveError::NoMovesPossible);
        }
        if all_finished {
            break;
        }
    }

    Ok(turns)
}
