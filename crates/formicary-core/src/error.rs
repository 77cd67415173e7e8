//! Failure taxonomy for the solve pipeline.

use crate::farm::RoomId;

/// Errors the solver can return. Bad input surfaces as a value, never a
/// panic, and nothing here is transient: retrying the same call gives the
/// same answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No route exists between the start and end rooms.
    Disconnected,
    /// Degenerate input: zero ants, an unknown room name, or start equal
    /// to end. Callers are expected to reject these before solving; the
    /// solver re-checks and fails fast. The simulator also returns this
    /// when a turn passes without any move while ants remain unfinished,
    /// which means an assigned route stops short of the end room.
    NoMovesPossible,
    /// An ant's current room is not on its assigned route. The assignment
    /// and route list fed to the simulator do not belong together; this is
    /// an internal consistency failure, not a property of the farm.
    AntOffRoute { ant: usize, room: RoomId },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::Disconnected => write!(f, "no route from start to end"),
            SolveError::NoMovesPossible => {
                write!(f, "no moves possible for the given farm and ant count")
            }
            SolveError::AntOffRoute { ant, room } => {
                write!(f, "ant {} is off its assigned route (in room {})", ant, room)
            }
        }
    }
}

impl std::error::Error for SolveError {}
