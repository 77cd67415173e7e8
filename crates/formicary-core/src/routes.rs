//! Exhaustive enumeration of simple routes between two rooms.
//!
//! Depth-first search over the farm's ordered adjacency. Every branch
//! shares one trail that is pushed on entry and popped on exit; only
//! completed routes are copied out. Routes therefore come out in a fixed
//! order that follows neighbor insertion order, and downstream tie-breaks
//! rely on it.

use serde::{Deserialize, Serialize};

use crate::farm::{Farm, RoomId};

/// A simple route from start to end. Immutable once found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    rooms: Vec<RoomId>,
}

impl Route {
    pub(crate) fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    /// All rooms in walking order, start and end included.
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms on the route.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms excluding start and end. Route compatibility is judged on
    /// these alone; endpoints are shared by every route.
    pub fn intermediates(&self) -> &[RoomId] {
        if self.rooms.len() <= 2 {
            &[]
        } else {
            &self.rooms[1..self.rooms.len() - 1]
        }
    }

    /// Index of `room` on the route, if present.
    pub fn position_of(&self, room: RoomId) -> Option<usize> {
        self.rooms.iter().position(|&r| r == room)
    }
}

/// Enumerate every simple route from `start` to `end`.
///
/// An empty result means the rooms are not connected; that is a value,
/// not an error. Calling with `start == end` is an input-contract
/// violation the driver rejects before getting here.
pub fn find_routes(farm: &Farm, start: RoomId, end: RoomId) -> Vec<Route> {
    let mut found = Vec::new();
    let mut visited = vec![false; farm.room_count()];
    let mut trail = Vec::new();
    walk(farm, start, end, &mut visited, &mut trail, &mut found);
    found
}

fn walk(
    farm: &Farm,
    room: RoomId,
    end: RoomId,
    visited: &mut [bool],
    trail: &mut Vec<RoomId>,
    found: &mut Vec<Route>,
) {
    visited[room] = true;
    trail.push(room);

    if room == end {
        // Reaching the end closes the route; nothing continues through it.
        found.push(Route::new(trail.clone()));
    } else {
        for &next in farm.neighbors(room) {
            if !visited[next] {
                walk(farm, next, end, visited, trail, found);
            }
        }
    }

    trail.pop();
    visited[room] = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn diamond() -> (Farm, [RoomId; 4]) {
        //      a
        //    /   \
        // start   end
        //    \   /
        //      b
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let a = farm.add_room("a");
        let b = farm.add_room("b");
        let end = farm.add_room("end");
        farm.add_tunnel(start, a);
        farm.add_tunnel(start, b);
        farm.add_tunnel(a, end);
        farm.add_tunnel(b, end);
        (farm, [start, a, b, end])
    }

    #[test]
    fn test_single_tunnel() {
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let end = farm.add_room("end");
        farm.add_tunnel(start, end);
        let routes = find_routes(&farm, start, end);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].rooms(), &[start, end]);
    }

    #[test]
    fn test_diamond_two_routes_in_neighbor_order() {
        let (farm, [start, a, b, end]) = diamond();
        let routes = find_routes(&farm, start, end);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].rooms(), &[start, a, end]);
        assert_eq!(routes[1].rooms(), &[start, b, end]);
    }

    #[test]
    fn test_routes_are_simple() {
        // Dense little farm with cycles
        let mut farm = Farm::new();
        let ids: Vec<_> = ["start", "x", "y", "z", "end"]
            .iter()
            .map(|n| farm.add_room(*n))
            .collect();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                farm.add_tunnel(ids[i], ids[j]);
            }
        }
        let routes = find_routes(&farm, ids[0], ids[4]);
        assert!(!routes.is_empty());
        for route in &routes {
            let unique: HashSet<_> = route.rooms().iter().collect();
            assert_eq!(unique.len(), route.len(), "repeated room in {:?}", route);
            assert_eq!(route.rooms()[0], ids[0]);
            assert_eq!(*route.rooms().last().unwrap(), ids[4]);
        }
    }

    #[test]
    fn test_disconnected_returns_empty() {
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let a = farm.add_room("a");
        let end = farm.add_room("end");
        let b = farm.add_room("b");
        farm.add_tunnel(start, a);
        farm.add_tunnel(end, b);
        assert!(find_routes(&farm, start, end).is_empty());
    }

    #[test]
    fn test_no_route_continues_through_end() {
        // start-end direct, plus start-b-end; nothing walks past end
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let end = farm.add_room("end");
        let b = farm.add_room("b");
        farm.add_tunnel(start, end);
        farm.add_tunnel(end, b);
        farm.add_tunnel(b, start);
        let routes = find_routes(&farm, start, end);
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| *r.rooms().last().unwrap() == end));
        assert!(routes.iter().all(|r| r.len() <= 3));
    }

    #[test]
    fn test_dead_end_branch_dropped() {
        let mut farm = Farm::new();
        let start = farm.add_room("start");
        let a = farm.add_room("a");
        let cul = farm.add_room("cul");
        let end = farm.add_room("end");
        farm.add_tunnel(start, a);
        farm.add_tunnel(a, cul);
        farm.add_tunnel(a, end);
        let routes = find_routes(&farm, start, end);
        assert_eq!(routes.len(), 1);
        assert!(!routes[0].rooms().contains(&cul));
    }

    #[test]
    fn test_enumeration_is_stable() {
        let (farm, [start, _, _, end]) = diamond();
        let first = find_routes(&farm, start, end);
        let second = find_routes(&farm, start, end);
        assert_eq!(first, second);
    }

    #[test]
    fn test_intermediates() {
        let direct = Route::new(vec![0, 3]);
        assert!(direct.intermediates().is_empty());
        let via = Route::new(vec![0, 1, 2, 3]);
        assert_eq!(via.intermediates(), &[1, 2]);
    }

    #[test]
    fn test_position_of() {
        let route = Route::new(vec![4, 7, 2]);
        assert_eq!(route.position_of(7), Some(1));
        assert_eq!(route.position_of(9), None);
    }
}
