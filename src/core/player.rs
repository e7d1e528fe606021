//! Seats at the table.
//!
//! Players are identified by the seat they sit in, counted from 0 in turn
//! order. Anything held per player (hands, scores) lives in a `SeatMap`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Largest table a `u8` seat number can address.
const MAX_SEATS: usize = u8::MAX as usize;

/// Seat number, 0-based, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Who plays after this seat at a table of `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Seats of a table with `player_count` players, in turn order.
    ///
    /// ```
    /// use qwirkle_player::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::all(3).map(PlayerId::index).collect();
    /// assert_eq!(order, [0, 1, 2]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_SEATS) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Who is taking a turn: seat plus the name announced on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerInfo {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for PlayerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// One value per seat, indexed by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    seats: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Fill every seat of a `player_count` table from `init`.
    pub fn from_fn(player_count: usize, init: impl FnMut(PlayerId) -> T) -> Self {
        assert!(
            (1..=MAX_SEATS).contains(&player_count),
            "A table seats 1 to {MAX_SEATS} players"
        );
        Self {
            seats: PlayerId::all(player_count).map(init).collect(),
        }
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(player_count, |_| T::default())
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Seats in turn order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.seats.len()).zip(&self.seats)
    }
}

impl<T> Index<PlayerId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: PlayerId) -> &T {
        &self.seats[seat.index()]
    }
}

impl<T> IndexMut<PlayerId> for SeatMap<T> {
    fn index_mut(&mut self, seat: PlayerId) -> &mut T {
        &mut self.seats[seat.index()]
    }
}
