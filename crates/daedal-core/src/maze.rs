//! The maze grid model, parsed from plain text.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::direction::Direction;
use crate::geom::Point;

/// Character marking the start cell in maze text.
pub const START: char = 'A';
/// Character marking the goal cell in maze text.
pub const GOAL: char = 'B';
/// Character marking open floor in maze text.
pub const FLOOR: char = ' ';

/// An immutable rectangular maze with a unique start and goal.
///
/// Construction validates the marker invariants; after that the maze is
/// read-only and freely shareable across solves.
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    /// Row-major wall matrix, `true` = impassable.
    walls: Vec<bool>,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Parse a maze from its textual description.
    ///
    /// Each line is one row; the width is the length of the longest line.
    /// `'A'` marks the start, `'B'` the goal, `' '` open floor; any other
    /// character — including the absence of one on a short line — is a
    /// wall. Fails unless the text contains exactly one start marker and
    /// exactly one goal marker.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len() as i32;
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as i32;

        let mut walls = Vec::with_capacity((width * height) as usize);
        let mut start = None;
        let mut starts = 0;
        let mut goal = None;
        let mut goals = 0;

        for (y, line) in lines.iter().enumerate() {
            let mut chars = line.chars();
            for x in 0..width {
                let p = Point::new(x, y as i32);
                match chars.next() {
                    Some(START) => {
                        starts += 1;
                        start = Some(p);
                        walls.push(false);
                    }
                    Some(GOAL) => {
                        goals += 1;
                        goal = Some(p);
                        walls.push(false);
                    }
                    Some(FLOOR) => walls.push(false),
                    // Any other character, or a column past the end of a
                    // short line, reads as a wall.
                    Some(_) | None => walls.push(true),
                }
            }
        }

        let Some(start) = start.filter(|_| starts == 1) else {
            return Err(MazeError::StartMarkers(starts));
        };
        let Some(goal) = goal.filter(|_| goals == 1) else {
            return Err(MazeError::GoalMarkers(goals));
        };

        Ok(Self {
            width,
            height,
            walls,
            start,
            goal,
        })
    }

    /// Read a maze description from a file and parse it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Build a maze directly from a row-major wall matrix.
    ///
    /// Unlike [`parse`](Self::parse), this places no constraint on `start`
    /// and `goal` beyond passability — in particular they may coincide,
    /// which no parseable text can express.
    pub fn from_walls(width: i32, height: i32, walls: Vec<bool>, start: Point, goal: Point) -> Self {
        debug_assert_eq!(walls.len(), (width * height) as usize);
        Self {
            width,
            height,
            walls,
            start,
            goal,
        }
    }

    /// Width of the maze in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the maze in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies within the maze bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Whether `p` is impassable. Out-of-range positions count as walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        if !self.contains(p) {
            return true;
        }
        self.walls[(p.y * self.width + p.x) as usize]
    }

    /// The row-major wall matrix, for rendering.
    #[inline]
    pub fn walls(&self) -> &[bool] {
        &self.walls
    }

    /// Append the legal moves from `p` into `buf`, in [`Direction::ALL`]
    /// order. A move is legal when the target cell is in bounds and not a
    /// wall. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<(Direction, Point)>) {
        for dir in Direction::ALL {
            let q = p + dir.delta();
            if !self.is_wall(q) {
                buf.push((dir, q));
            }
        }
    }
}

/// Errors that can occur when loading or parsing a maze.
#[derive(Debug)]
pub enum MazeError {
    /// Reading the source file failed.
    Io(io::Error),
    /// The text did not contain exactly one start marker.
    StartMarkers(usize),
    /// The text did not contain exactly one goal marker.
    GoalMarkers(usize),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "error reading maze: {err}"),
            Self::StartMarkers(n) => {
                write!(f, "maze must have exactly one start marker, found {n}")
            }
            Self::GoalMarkers(n) => {
                write!(f, "maze must have exactly one goal marker, found {n}")
            }
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
