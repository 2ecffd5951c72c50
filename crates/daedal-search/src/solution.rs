//! The trace produced by a successful solve.

use daedal_core::{Direction, Point};

/// The result of one successful solve.
///
/// `actions` and `cells` are parallel sequences in start-to-goal order,
/// excluding the start cell itself; both are empty when start equals goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub(crate) actions: Vec<Direction>,
    pub(crate) cells: Vec<Point>,
    pub(crate) num_explored: usize,
}

impl Solution {
    /// The moves taken, in order.
    #[inline]
    pub fn actions(&self) -> &[Direction] {
        &self.actions
    }

    /// The cells stepped onto, in order. The last cell is the goal.
    #[inline]
    pub fn path_cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of states dequeued during the solve, including the goal's
    /// own dequeue.
    #[inline]
    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    /// Path length in moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the path is empty (start equals goal).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_round_trip() {
        let sol = Solution {
            actions: vec![Direction::Down, Direction::Right],
            cells: vec![Point::new(0, 1), Point::new(1, 1)],
            num_explored: 3,
        };
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(sol, back);
    }
}
