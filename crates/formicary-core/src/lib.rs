//! Formicary Core - Ant Farm Routing Solver
//!
//! Moves a colony of ants from a start room to an end room through a
//! tunnel network in as few turns as possible. The solver enumerates every
//! simple route, every combination of routes that can be walked at the
//! same time, and simulates each candidate turn by turn to pick the
//! fastest plan.
//!
//! The crate is pure computation: it takes an already-validated farm plus
//! endpoints and an ant count, and returns a move log or a typed error.
//! Reading map files, validating input syntax, and printing results belong
//! to the caller.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`farm`] | Room and tunnel graph with insertion-ordered adjacency |
//! | [`routes`] | Exhaustive simple-route enumeration (depth-first) |
//! | [`disjoint`] | Combinations of routes sharing no intermediate room |
//! | [`assign`] | Greedy length-aware ant-to-route assignment |
//! | [`sim`] | Turn-by-turn movement under per-turn tunnel locks |
//! | [`solver`] | Driver: scores every combination, keeps the fastest |
//! | [`error`] | Failure taxonomy for the solve pipeline |
//! | [`generation`] | Seeded random farm generation for tests and benches |
//!
//! # Example
//!
//! ```rust
//! use formicary_core::prelude::*;
//!
//! let mut farm = Farm::new();
//! let start = farm.add_room("start");
//! let mid = farm.add_room("mid");
//! let end = farm.add_room("end");
//! farm.add_tunnel(start, mid);
//! farm.add_tunnel(mid, end);
//!
//! let solution = solve(&farm, "start", "end", 3).unwrap();
//! assert_eq!(solution.turn_count(), 4);
//! ```

pub mod assign;
pub mod disjoint;
pub mod error;
pub mod farm;
pub mod generation;
pub mod routes;
pub mod sim;
pub mod solver;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::assign::{assign_ants, Assignment};
    pub use crate::disjoint::{disjoint_route_sets, disjoint_route_sets_with_limit, RouteSet};
    pub use crate::error::SolveError;
    pub use crate::farm::{Farm, Room, RoomId};
    pub use crate::generation::{generate_farm, FarmConfig, GeneratedFarm};
    pub use crate::routes::{find_routes, Route};
    pub use crate::sim::{simulate, Move, SimRules, Turn, TunnelRule};
    pub use crate::solver::{solve, solve_with, Solution, SolveOptions, SolveStats};
}
