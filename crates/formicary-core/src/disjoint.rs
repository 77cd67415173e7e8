//! Combinations of routes that can be walked at the same time.
//!
//! Two routes conflict when they share an intermediate room; sharing the
//! start and end is expected of every route. The generator records every
//! combination of pairwise compatible routes, of every size, in a fixed
//! order: it scans route indices left to right and only recurses
//! rightward, so each combination is recorded the moment it is formed,
//! before any of its extensions.
//!
//! The combination count is exponential in the route count in the worst
//! case. That is inherent to the exhaustive search, not a bug; keep farms
//! small or pass a limit.

use serde::{Deserialize, Serialize};

use crate::farm::Farm;
use crate::routes::Route;

/// A set of mutually compatible routes, stored as ascending indices into
/// the route list it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSet {
    indices: Vec<usize>,
}

impl RouteSet {
    /// Indices into the originating route list, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of routes in the set.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the set against the route list it was generated from.
    pub fn routes<'a>(&self, routes: &'a [Route]) -> Vec<&'a Route> {
        self.indices.iter().map(|&i| &routes[i]).collect()
    }
}

/// Enumerate every combination of intermediate-room-disjoint routes.
pub fn disjoint_route_sets(farm: &Farm, routes: &[Route]) -> Vec<RouteSet> {
    disjoint_route_sets_with_limit(farm, routes, None)
}

/// Enumerate combinations, stopping once `limit` of them are recorded.
///
/// The limit only truncates: the result is always the first `limit`
/// combinations the unbounded search would produce, in the same order.
pub fn disjoint_route_sets_with_limit(
    farm: &Farm,
    routes: &[Route],
    limit: Option<usize>,
) -> Vec<RouteSet> {
    let mut sets = Vec::new();
    let mut taken = vec![false; farm.room_count()];
    let mut current = Vec::new();
    extend(routes, 0, &mut taken, &mut current, &mut sets, limit);
    sets
}

/// Grow `current` with every compatible route at index `from` or later,
/// recording each grown combination before recursing past it.
///
/// `taken` marks the intermediate rooms of the routes in `current`; a
/// candidate is compatible iff none of its intermediates is marked, which
/// is the pairwise intersection test folded into one pass.
fn extend(
    routes: &[Route],
    from: usize,
    taken: &mut [bool],
    current: &mut Vec<usize>,
    sets: &mut Vec<RouteSet>,
    limit: Option<usize>,
) {
    for j in from..routes.len() {
        if let Some(cap) = limit {
            if sets.len() >= cap {
                return;
            }
        }
        if conflicts(&routes[j], taken) {
            continue;
        }
        mark(&routes[j], taken, true);
        current.push(j);
        sets.push(RouteSet {
            indices: current.clone(),
        });
        extend(routes, j + 1, taken, current, sets, limit);
        current.pop();
        mark(&routes[j], taken, false);
    }
}

fn conflicts(route: &Route, taken: &[bool]) -> bool {
    route.intermediates().iter().any(|&r| taken[r])
}

fn mark(route: &Route, taken: &mut [bool], value: bool) {
    for &r in route.intermediates() {
        taken[r] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::find_routes;

    fn indices_of(sets: &[RouteSet]) -> Vec<Vec<usize>> {
        sets.iter().map(|s| s.indices().to_vec()).collect()
    }

    fn diamond() -> (Farm, Vec<Route>) {
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let a = farm.add_room("a");
        let b = farm.add_room("b");
        let end = farm.add_room("end");
        farm.add_tunnel(start, a);
        farm.add_tunnel(start, b);
        farm.add_tunnel(a, end);
        farm.add_tunnel(b, end);
        let routes = find_routes(&farm, start, end);
        (farm, routes)
    }

    /// Three parallel two-hop lanes, all mutually disjoint.
    fn triple_lanes() -> (Farm, Vec<Route>) {
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let lanes: Vec<_> = ["a", "b", "c"].iter().map(|n| farm.add_room(*n)).collect();
        let end = farm.add_room("end");
        for &mid in &lanes {
            farm.add_tunnel(start, mid);
            farm.add_tunnel(mid, end);
        }
        let routes = find_routes(&farm, start, end);
        (farm, routes)
    }

    #[test]
    fn test_single_route_single_set() {
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let end = farm.add_room("end");
        farm.add_tunnel(start, end);
        let routes = find_routes(&farm, start, end);
        let sets = disjoint_route_sets(&farm, &routes);
        assert_eq!(indices_of(&sets), vec![vec![0]]);
    }

    #[test]
    fn test_disjoint_pair_recorded_with_prefixes() {
        let (farm, routes) = diamond();
        let sets = disjoint_route_sets(&farm, &routes);
        assert_eq!(indices_of(&sets), vec![vec![0], vec![0, 1], vec![1]]);
    }

    #[test]
    fn test_overlapping_routes_never_pair() {
        // Both routes pass through m
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let m = farm.add_room("m");
        let a = farm.add_room("a");
        let end = farm.add_room("end");
        farm.add_tunnel(start, m);
        farm.add_tunnel(m, end);
        farm.add_tunnel(start, a);
        farm.add_tunnel(a, m);
        let routes = find_routes(&farm, start, end);
        assert_eq!(routes.len(), 2);
        let sets = disjoint_route_sets(&farm, &routes);
        assert_eq!(indices_of(&sets), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_every_subset_of_mutually_disjoint_routes() {
        let (farm, routes) = triple_lanes();
        assert_eq!(routes.len(), 3);
        let sets = disjoint_route_sets(&farm, &routes);
        assert_eq!(
            indices_of(&sets),
            vec![
                vec![0],
                vec![0, 1],
                vec![0, 1, 2],
                vec![0, 2],
                vec![1],
                vec![1, 2],
                vec![2],
            ]
        );
    }

    #[test]
    fn test_direct_route_compatible_with_all() {
        // A direct start-end tunnel has no intermediates to conflict on
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let a = farm.add_room("a");
        let end = farm.add_room("end");
        farm.add_tunnel(start, end);
        farm.add_tunnel(start, a);
        farm.add_tunnel(a, end);
        let routes = find_routes(&farm, start, end);
        assert_eq!(routes.len(), 2);
        let sets = disjoint_route_sets(&farm, &routes);
        assert!(indices_of(&sets).contains(&vec![0, 1]));
    }

    #[test]
    fn test_limit_truncates_in_order() {
        let (farm, routes) = triple_lanes();
        let sets = disjoint_route_sets_with_limit(&farm, &routes, Some(3));
        assert_eq!(
            indices_of(&sets),
            vec![vec![0], vec![0, 1], vec![0, 1, 2]]
        );
    }

    #[test]
    fn test_limit_zero_yields_nothing() {
        let (farm, routes) = triple_lanes();
        assert!(disjoint_route_sets_with_limit(&farm, &routes, Some(0)).is_empty());
    }

    #[test]
    fn test_routes_resolution_preserves_order() {
        let (farm, routes) = diamond();
        let sets = disjoint_route_sets(&farm, &routes);
        let pair = &sets[1];
        let resolved = pair.routes(&routes);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0], &routes[0]);
        assert_eq!(resolved[1], &routes[1]);
    }

    #[test]
    fn test_no_routes_no_sets() {
        let farm = Farm::new();
        assert!(disjoint_route_sets(&farm, &[]).is_empty());
    }
}
