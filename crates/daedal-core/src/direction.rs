//! Cardinal movement actions.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal moves labelling a grid transition.
///
/// [`Direction::ALL`] lists the variants in the canonical expansion order
/// used when enumerating neighbors: alphabetical by name. The order matters
/// for determinism — it decides which of several equal-length solutions a
/// search returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    Left,
    Right,
    Up,
}

impl Direction {
    /// All directions, in canonical (alphabetical) expansion order.
    pub const ALL: [Direction; 4] = [Self::Down, Self::Left, Self::Right, Self::Up];

    /// The unit offset this move applies to a position.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
            Self::Up => Point::new(0, -1),
        }
    }

    /// Lowercase name of the direction.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
