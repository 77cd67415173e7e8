//! Drives the full search: routes, combinations, assignment, simulation.
//!
//! Every combination is scored by simulating it and counting turns; the
//! first combination to reach the minimum wins. Scoring runs sequentially
//! by default. With [`SolveOptions::parallel`] combinations are scored on
//! rayon's pool instead, and the winner is still chosen by a scan in
//! enumeration order, so both modes return identical solutions.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assign::assign_ants;
use crate::disjoint::{disjoint_route_sets_with_limit, RouteSet};
use crate::error::SolveError;
use crate::farm::Farm;
use crate::routes::{find_routes, Route};
use crate::sim::{simulate, SimRules, Turn};

/// Knobs for a solve run. `Default` is the reference behavior: directed
/// tunnel locks, sequential scoring, unbounded search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveOptions {
    pub rules: SimRules,
    /// Score combinations on rayon's thread pool.
    pub parallel: bool,
    /// Stop combination enumeration after this many. The answer degrades
    /// to "best of the first N" but stays deterministic.
    pub max_route_sets: Option<usize>,
}

/// Search size counters, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    pub routes_found: usize,
    pub sets_evaluated: usize,
}

/// A winning move plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Move log of the fastest combination, one entry per turn.
    pub turns: Vec<Turn>,
    /// Routes of the winning combination, in combination order.
    pub routes: Vec<Route>,
    pub stats: SolveStats,
}

impl Solution {
    /// Turns needed to bring every ant home.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}

/// Solve with default options.
pub fn solve(farm: &Farm, start: &str, end: &str, ants: usize) -> Result<Solution, SolveError> {
    solve_with(farm, start, end, ants, &SolveOptions::default())
}

/// Solve with explicit options.
///
/// Degenerate input (zero ants, unknown room names, start equal to end)
/// fails with [`SolveError::NoMovesPossible`]; an end room no route
/// reaches fails with [`SolveError::Disconnected`].
pub fn solve_with(
    farm: &Farm,
    start: &str,
    end: &str,
    ants: usize,
    options: &SolveOptions,
) -> Result<Solution, SolveError> {
    let (start, end) = match (farm.room_id(start), farm.room_id(end)) {
        (Some(s), Some(e)) if s != e && ants > 0 => (s, e),
        _ => return Err(SolveError::NoMovesPossible),
    };

    let routes = find_routes(farm, start, end);
    if routes.is_empty() {
        return Err(SolveError::Disconnected);
    }

    let sets = disjoint_route_sets_with_limit(farm, &routes, options.max_route_sets);
    if sets.is_empty() {
        return Err(SolveError::Disconnected);
    }

    // Scoring a set only reads shared data, which is what makes the
    // parallel arm safe without any locking.
    let score = |set: &RouteSet| -> Result<usize, SolveError> {
        let set_routes = set.routes(&routes);
        let assignment = assign_ants(&set_routes, ants);
        let turns = simulate(&set_routes, &assignment, start, end, options.rules)?;
        Ok(turns.len())
    };

    let scores: Vec<Result<usize, SolveError>> = if options.parallel {
        sets.par_iter().map(score).collect()
    } else {
        sets.iter().map(score).collect()
    };

    // Winner scan in enumeration order: keeps ties deterministic in both
    // modes and reports the same failure a sequential run would hit first.
    let mut winner: Option<(usize, usize)> = None;
    for (i, scored) in scores.into_iter().enumerate() {
        let turn_count = scored?;
        if winner.map_or(true, |(_, best)| turn_count < best) {
            winner = Some((i, turn_count));
        }
    }
    let (winner, _) = winner.ok_or(SolveError::Disconnected)?;

    // Re-simulate the winner to materialize its log. Cheaper than keeping
    // every candidate's log alive through an exponential search.
    let set_routes = sets[winner].routes(&routes);
    let assignment = assign_ants(&set_routes, ants);
    let turns = simulate(&set_routes, &assignment, start, end, options.rules)?;

    Ok(Solution {
        turns,
        routes: set_routes.into_iter().cloned().collect(),
        stats: SolveStats {
            routes_found: routes.len(),
            sets_evaluated: sets.len(),
        },
    })
}
