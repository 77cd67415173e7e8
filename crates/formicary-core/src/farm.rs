//! Rooms and tunnels: the ant farm graph.
//!
//! Adjacency is kept as insertion-ordered neighbor lists, never a hash
//! map, so every walk over the farm visits neighbors in the same order on
//! every run. Route enumeration order, and with it which of several
//! equally fast plans wins, depends on that order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Dense room index, assigned in insertion order by [`Farm::add_room`].
pub type RoomId = usize;

/// A room in the farm. Coordinates are display metadata only; no part of
/// the solver reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub pos: Option<(i32, i32)>,
}

/// Undirected room/tunnel graph with reproducible neighbor order.
///
/// Tunnels are stored symmetrically. The caller owns input validation:
/// self-loops and duplicate tunnels are not re-checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Farm {
    rooms: Vec<Room>,
    /// room -> neighbors, in tunnel insertion order
    adjacency: Vec<Vec<RoomId>>,
    /// name -> id. Lookup only, never iterated, so hash order cannot leak
    /// into enumeration order.
    index: HashMap<String, RoomId>,
}

impl Farm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its id.
    pub fn add_room(&mut self, name: impl Into<String>) -> RoomId {
        self.insert_room(Room {
            name: name.into(),
            pos: None,
        })
    }

    /// Add a room with coordinates.
    pub fn add_room_at(&mut self, name: impl Into<String>, x: i32, y: i32) -> RoomId {
        self.insert_room(Room {
            name: name.into(),
            pos: Some((x, y)),
        })
    }

    fn insert_room(&mut self, room: Room) -> RoomId {
        let id = self.rooms.len();
        self.index.insert(room.name.clone(), id);
        self.rooms.push(room);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two rooms. The tunnel is stored in both directions.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) {
        debug_assert_ne!(a, b, "self-loop tunnel");
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Look up a room id by name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    /// Room name, for rendering move logs.
    pub fn room_name(&self, id: RoomId) -> &str {
        &self.rooms[id].name
    }

    /// Neighbors of a room, in tunnel insertion order.
    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        &self.adjacency[id]
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of tunnels. Each tunnel is stored twice internally.
    pub fn tunnel_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rooms_assigns_sequential_ids() {
        let mut farm = Farm::new();
        let a = farm.add_room("a");
        let b = farm.add_room("b");
        let c = farm.add_room("c");
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(farm.room_count(), 3);
        assert_eq!(farm.room_id("b"), Some(b));
        assert_eq!(farm.room_name(c), "c");
    }

    #[test]
    fn test_unknown_name() {
        let mut farm = Farm::new();
        farm.add_room("a");
        assert_eq!(farm.room_id("nope"), None);
    }

    #[test]
    fn test_tunnels_stored_symmetrically() {
        let mut farm = Farm::new();
        let a = farm.add_room("a");
        let b = farm.add_room("b");
        farm.add_tunnel(a, b);
        assert_eq!(farm.neighbors(a), &[b]);
        assert_eq!(farm.neighbors(b), &[a]);
        assert_eq!(farm.tunnel_count(), 1);
    }

    #[test]
    fn test_neighbor_order_is_insertion_order() {
        let mut farm = Farm::new();
        let hub = farm.add_room("hub");
        let a = farm.add_room("a");
        let b = farm.add_room("b");
        let c = farm.add_room("c");
        farm.add_tunnel(hub, b);
        farm.add_tunnel(hub, a);
        farm.add_tunnel(hub, c);
        assert_eq!(farm.neighbors(hub), &[b, a, c]);
    }

    #[test]
    fn test_room_metadata() {
        let mut farm = Farm::new();
        let plain = farm.add_room("plain");
        let placed = farm.add_room_at("placed", 3, 4);
        assert_eq!(farm.room(plain).pos, None);
        assert_eq!(farm.room(placed).pos, Some((3, 4)));
    }
}
