//! Greedy assignment of ants to the routes of one combination.
//!
//! Ants are placed one at a time in id order. Each ant takes the route
//! minimizing route length plus ants already on it, which estimates the
//! turn that ant would finish on if nothing blocked. Ties go to the
//! earliest route in the combination. The rule is deliberately local: it
//! never looks across combinations, and the driver depends on its exact
//! scoring and tie-break to reproduce known outputs, so neither may
//! change.

use serde::{Deserialize, Serialize};

use crate::routes::Route;

/// Which route each ant walks, by position in the combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// `route_of[k]` is the combination index of the route for ant `k + 1`.
    pub route_of: Vec<usize>,
}

impl Assignment {
    /// Number of ants assigned.
    pub fn ant_count(&self) -> usize {
        self.route_of.len()
    }

    /// Ants per combination route.
    pub fn count_per_route(&self, route_count: usize) -> Vec<usize> {
        let mut counts = vec![0; route_count];
        for &r in &self.route_of {
            counts[r] += 1;
        }
        counts
    }
}

/// Assign `ant_count` ants across the routes of one combination.
///
/// `set_routes` holds the combination's routes in combination order and
/// must not be empty.
pub fn assign_ants(set_routes: &[&Route], ant_count: usize) -> Assignment {
    debug_assert!(!set_routes.is_empty());

    let mut counts = vec![0usize; set_routes.len()];
    let mut route_of = Vec::with_capacity(ant_count);

    for _ant in 0..ant_count {
        let mut best = 0;
        let mut best_score = usize::MAX;
        for (i, route) in set_routes.iter().enumerate() {
            // Rooms on the route plus ants queued for it. Strictly
            // smaller wins, so the earliest route keeps ties.
            let score = route.len() + counts[i];
            if score < best_score {
                best_score = score;
                best = i;
            }
        }
        counts[best] += 1;
        route_of.push(best);
    }

    Assignment { route_of }
}
