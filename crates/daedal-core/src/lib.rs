//! Core types for the daedal maze solver.
//!
//! This crate holds everything a search strategy needs to traverse a maze,
//! and nothing about how the traversal is done:
//!
//! - [`Point`] — integer grid coordinates
//! - [`Direction`] — the four cardinal actions, in their canonical order
//! - [`Maze`] — an immutable wall grid with a unique start and goal,
//!   parsed from plain text
//!
//! The maze text format: each line is a grid row, `'A'` marks the start,
//! `'B'` the goal, `' '` open floor, and any other character a wall. Lines
//! may have different lengths; columns beyond a line's own end read as
//! walls.

mod direction;
mod geom;
mod maze;

pub use direction::Direction;
pub use geom::Point;
pub use maze::{FLOOR, GOAL, Maze, MazeError, START};
