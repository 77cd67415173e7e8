//! Seeded random farm generation.
//!
//! Builds connected farms for tests, sweeps, and benches. A random
//! spanning tree guarantees connectivity, then extra tunnels add
//! alternative routes. The same seed always produces the same farm.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::farm::{Farm, RoomId};

/// Parameters for [`generate_farm`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmConfig {
    /// Total rooms, start and end included. Clamped to at least 2.
    pub rooms: usize,
    /// Tunnels added on top of the spanning tree.
    pub extra_tunnels: usize,
    pub seed: u64,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            rooms: 8,
            extra_tunnels: 4,
            seed: 42,
        }
    }
}

/// A generated farm with its endpoints.
#[derive(Debug, Clone)]
pub struct GeneratedFarm {
    pub farm: Farm,
    pub start: RoomId,
    pub end: RoomId,
}

/// Generate a connected farm from `config`.
///
/// Rooms are named `r0..rN`; `r0` is the start and the last room the end.
/// Every room after the first gets a tunnel to a random earlier room,
/// which keeps the farm connected without any reachability check. Extra
/// tunnels are then drawn at random, skipping self-loops and tunnels that
/// already exist.
pub fn generate_farm(config: &FarmConfig) -> GeneratedFarm {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let rooms = config.rooms.max(2);

    let mut farm = Farm::new();
    for i in 0..rooms {
        let x = rng.gen_range(0..100);
        let y = rng.gen_range(0..100);
        farm.add_room_at(format!("r{}", i), x, y);
    }

    let mut seen: HashSet<(RoomId, RoomId)> = HashSet::new();
    for room in 1..rooms {
        let earlier = rng.gen_range(0..room);
        farm.add_tunnel(earlier, room);
        seen.insert((earlier, room));
    }

    // Rejection sampling with a bounded number of draws; dense configs
    // simply end up with fewer extras than asked for.
    let mut added = 0;
    let mut attempts = 0;
    while added < config.extra_tunnels && attempts < config.extra_tunnels * 20 {
        attempts += 1;
        let a = rng.gen_range(0..rooms);
        let b = rng.gen_range(0..rooms);
        if a == b {
            continue;
        }
        let key = (a.min(b), a.max(b));
        if seen.insert(key) {
            farm.add_tunnel(key.0, key.1);
            added += 1;
        }
    }

    GeneratedFarm {
        farm,
        start: 0,
        end: rooms - 1,
    }
}
