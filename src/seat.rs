use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of the table. Doubles as the turn marker.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Interactive player.
    Human,
    /// Automated player.
    Computer,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    #[inline]
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    /// Position of the seat in per-seat arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::Human => "Player",
            Seat::Computer => "Computer",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
