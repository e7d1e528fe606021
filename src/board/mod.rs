//! Board model: cells, bounding rectangles, snapshots, and the live board.

pub mod coordinate;
pub mod snapshot;
pub mod live;

pub use coordinate::{Boundaries, Coordinate};
pub use snapshot::BoardSnapshot;
pub use live::{Board, GameController, SharedBoard};
