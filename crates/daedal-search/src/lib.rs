//! Graph-search strategies for daedal mazes.
//!
//! A [`Solver`] runs one of three frontier-management strategies over the
//! state space of a [`Maze`](daedal_core::Maze):
//!
//! - [`Strategy::Bfs`] — FIFO frontier, returns a shortest path
//! - [`Strategy::Dfs`] — LIFO frontier, returns the first path found
//! - [`Strategy::AStar`] — min-priority frontier keyed by
//!   `cost + manhattan(state, goal)`, returns a shortest path
//!
//! All three share the same explore/expand loop and differ only in how the
//! frontier is popped and pushed. Solves are deterministic: neighbor
//! expansion uses a fixed order and the priority queue breaks ties by
//! insertion order.
//!
//! The solver owns its internal buffers (node arena, frontier, explored
//! map) and reuses them across solves, so repeated queries incur few
//! allocations after warm-up.

mod distance;
mod solution;
mod solver;
mod strategy;

pub use distance::manhattan;
pub use solution::Solution;
pub use solver::{NoSolutionError, Solver};
pub use strategy::{ParseStrategyError, Strategy};
