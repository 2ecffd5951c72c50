//! The search engine: one explore/expand loop, three frontiers.

use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use daedal_core::{Direction, Maze, Point};

use crate::distance::manhattan;
use crate::solution::Solution;
use crate::strategy::Strategy;

/// Arena-stored search node. Parents are arena indices, so the node set
/// forms a tree that is dropped wholesale at the start of the next solve.
#[derive(Clone, Copy)]
struct Node {
    state: Point,
    parent: usize,
    action: Option<Direction>,
    cost: i32,
}

/// Parent index marking the root node.
const NO_PARENT: usize = usize::MAX;

/// Priority-queue entry for the informed strategy, ordered by `f` with the
/// insertion sequence number as tie-breaker so equal keys pop FIFO.
#[derive(Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: i32,
    seq: u64,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f first;
        // among equal f, the earliest insertion wins.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs searches over a [`Maze`] and keeps the most recent [`Solution`].
///
/// All solve-local state (node arena, frontier, explored map) lives here
/// and is reused across calls. A failed solve leaves the previously stored
/// solution untouched.
pub struct Solver {
    nodes: Vec<Node>,
    /// Shared FIFO/LIFO frontier: bfs pops the front, dfs the back.
    queue: VecDeque<usize>,
    /// Min-priority frontier for the informed strategy.
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
    explored: Vec<bool>,
    /// Scratch buffer for neighbor queries.
    nbuf: Vec<(Direction, Point)>,
    solution: Option<Solution>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver with empty caches.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            queue: VecDeque::new(),
            heap: BinaryHeap::new(),
            seq: 0,
            explored: Vec::new(),
            nbuf: Vec::with_capacity(4),
            solution: None,
        }
    }

    /// Run `strategy` over `maze` from start to goal.
    ///
    /// Returns the freshly stored [`Solution`], or [`NoSolutionError`] if
    /// the frontier was exhausted without reaching the goal. The solve is
    /// synchronous and runs to completion; exhaustion is bounded by the
    /// grid size since explored states are never re-expanded.
    pub fn solve(&mut self, maze: &Maze, strategy: Strategy) -> Result<&Solution, NoSolutionError> {
        self.nodes.clear();
        self.queue.clear();
        self.heap.clear();
        self.seq = 0;
        self.explored.clear();
        self.explored
            .resize((maze.width() * maze.height()) as usize, false);

        let mut num_explored = 0usize;

        self.nodes.push(Node {
            state: maze.start(),
            parent: NO_PARENT,
            action: None,
            cost: 0,
        });
        self.push_frontier(strategy, 0, maze.goal());

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.pop_frontier(strategy) else {
                break 'search None;
            };
            num_explored += 1;

            let node = self.nodes[ci];
            if node.state == maze.goal() {
                break 'search Some(ci);
            }
            self.explored[flat(maze, node.state)] = true;

            nbuf.clear();
            maze.neighbors(node.state, &mut nbuf);
            for &(action, state) in nbuf.iter() {
                if self.explored[flat(maze, state)] {
                    continue;
                }
                self.nodes.push(Node {
                    state,
                    parent: ci,
                    action: Some(action),
                    cost: node.cost + 1,
                });
                self.push_frontier(strategy, self.nodes.len() - 1, maze.goal());
            }
        };

        self.nbuf = nbuf;

        let Some(goal_idx) = found else {
            return Err(NoSolutionError);
        };

        // Walk parent links back to the root, then reverse into
        // start-to-goal order. The root contributes nothing.
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        loop {
            let node = &self.nodes[ci];
            let Some(action) = node.action else {
                break;
            };
            actions.push(action);
            cells.push(node.state);
            ci = node.parent;
        }
        actions.reverse();
        cells.reverse();

        Ok(self.solution.insert(Solution {
            actions,
            cells,
            num_explored,
        }))
    }

    /// The most recent successful solve's trace, if any.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    fn pop_frontier(&mut self, strategy: Strategy) -> Option<usize> {
        match strategy {
            Strategy::Bfs => self.queue.pop_front(),
            Strategy::Dfs => self.queue.pop_back(),
            Strategy::AStar => self.heap.pop().map(|e| e.idx),
        }
    }

    fn push_frontier(&mut self, strategy: Strategy, idx: usize, goal: Point) {
        match strategy {
            Strategy::Bfs | Strategy::Dfs => self.queue.push_back(idx),
            Strategy::AStar => {
                let node = &self.nodes[idx];
                self.heap.push(OpenEntry {
                    f: node.cost + manhattan(node.state, goal),
                    seq: self.seq,
                    idx,
                });
                self.seq += 1;
            }
        }
    }
}

#[inline]
fn flat(maze: &Maze, p: Point) -> usize {
    (p.y * maze.width() + p.x) as usize
}

/// Error returned when the frontier empties without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSolutionError;

impl fmt::Display for NoSolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("maze has no solution: the goal is unreachable from the start")
    }
}

impl std::error::Error for NoSolutionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// 3x3 with a two-cell wall in the middle row; the only path runs
    /// down the left column and along the bottom: 4 steps.
    const SMALL: &str = "A  \n ##\n  B";

    fn maze(text: &str) -> Maze {
        Maze::parse(text).unwrap()
    }

    fn assert_contiguous(maze: &Maze, sol: &Solution) {
        let mut prev = maze.start();
        let mut seen = HashSet::new();
        for &cell in sol.path_cells() {
            let d = cell - prev;
            assert_eq!(d.x.abs() + d.y.abs(), 1, "non-adjacent step to {cell}");
            assert!(!maze.is_wall(cell), "path crosses wall at {cell}");
            assert!(seen.insert(cell), "repeated cell {cell}");
            prev = cell;
        }
    }

    #[test]
    fn bfs_finds_shortest_path() {
        let maze = maze(SMALL);
        let mut solver = Solver::new();
        let sol = solver.solve(&maze, Strategy::Bfs).unwrap();
        assert_eq!(sol.len(), 4);
        assert_eq!(
            sol.actions(),
            &[
                Direction::Down,
                Direction::Down,
                Direction::Right,
                Direction::Right,
            ]
        );
        assert_eq!(
            sol.path_cells(),
            &[
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn all_strategies_reach_the_goal() {
        let maze = maze(SMALL);
        let mut solver = Solver::new();
        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::AStar] {
            let sol = solver.solve(&maze, strategy).unwrap();
            assert_eq!(sol.path_cells().last(), Some(&maze.goal()), "{strategy}");
            assert_contiguous(&maze, sol);
        }
    }

    #[test]
    fn bfs_and_astar_agree_on_shortest_length() {
        // Open 4x4 grid: plenty of equal-length paths.
        let maze = maze("A   \n    \n    \n   B");
        let mut solver = Solver::new();
        let bfs_len = solver.solve(&maze, Strategy::Bfs).unwrap().len();
        let astar_len = solver.solve(&maze, Strategy::AStar).unwrap().len();
        assert_eq!(bfs_len, 6);
        assert_eq!(astar_len, 6);
    }

    #[test]
    fn dfs_is_no_shorter_than_bfs() {
        let maze = maze("A   \n ## \n    \n   B");
        let mut solver = Solver::new();
        let bfs_len = solver.solve(&maze, Strategy::Bfs).unwrap().len();
        let dfs = solver.solve(&maze, Strategy::Dfs).unwrap();
        assert!(dfs.len() >= bfs_len);
        assert_contiguous(&maze, dfs);
    }

    #[test]
    fn num_explored_counts_every_dequeue() {
        // Two-cell corridor: the root dequeue plus the goal dequeue.
        let maze = maze("AB");
        let mut solver = Solver::new();
        let sol = solver.solve(&maze, Strategy::Bfs).unwrap();
        assert_eq!(sol.num_explored(), 2);
        assert_eq!(sol.len(), 1);
        assert_eq!(sol.actions(), &[Direction::Right]);
    }

    #[test]
    fn explored_counts_match_hand_simulation() {
        // On SMALL, every strategy dequeues all seven reachable states,
        // the goal last.
        let maze = maze(SMALL);
        let mut solver = Solver::new();
        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::AStar] {
            let sol = solver.solve(&maze, strategy).unwrap();
            assert_eq!(sol.num_explored(), 7, "{strategy}");
        }
    }

    #[test]
    fn start_equals_goal_yields_empty_trace() {
        let maze = Maze::from_walls(2, 2, vec![false; 4], Point::ZERO, Point::ZERO);
        let mut solver = Solver::new();
        let sol = solver.solve(&maze, Strategy::AStar).unwrap();
        assert!(sol.is_empty());
        assert!(sol.path_cells().is_empty());
        assert_eq!(sol.num_explored(), 1);
    }

    #[test]
    fn disconnected_goal_exhausts_frontier() {
        let maze = maze("A#B");
        let mut solver = Solver::new();
        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::AStar] {
            assert!(
                matches!(solver.solve(&maze, strategy), Err(NoSolutionError)),
                "{strategy}"
            );
        }
    }

    #[test]
    fn failed_solve_preserves_previous_solution() {
        let mut solver = Solver::new();
        let solvable = maze(SMALL);
        let len = solver.solve(&solvable, Strategy::Bfs).unwrap().len();

        let walled = maze("A#B");
        assert!(solver.solve(&walled, Strategy::Bfs).is_err());
        let kept = solver.solution().unwrap();
        assert_eq!(kept.len(), len);
        assert_eq!(kept.path_cells().last(), Some(&solvable.goal()));
    }

    #[test]
    fn astar_ties_break_by_insertion_order() {
        // Open 3x3: several f-equal frontiers exist; the solve must be
        // reproducible run to run.
        let maze = maze("A  \n   \n  B");
        let mut solver = Solver::new();
        let first = solver.solve(&maze, Strategy::AStar).unwrap().clone();
        let second = solver.solve(&maze, Strategy::AStar).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn solver_reuse_across_mazes() {
        let mut solver = Solver::new();
        let a = maze("A B");
        let b = maze(SMALL);
        assert_eq!(solver.solve(&a, Strategy::Bfs).unwrap().len(), 2);
        assert_eq!(solver.solve(&b, Strategy::Bfs).unwrap().len(), 4);
        assert_eq!(solver.solve(&a, Strategy::Dfs).unwrap().len(), 2);
    }
}
