//! ANSI rendering of a maze and its solution overlay.

use std::collections::HashSet;
use std::fmt::Write;

use crossterm::style::Stylize;

use daedal_core::{Maze, Point};
use daedal_search::Solution;

enum Role {
    Wall,
    Start,
    Goal,
    Path,
}

/// Draw the maze as one string, one row per line: walls as filled blocks,
/// start and goal as their markers, solution cells as `*`. With `color`
/// set, cells are styled with ANSI escapes via crossterm.
pub fn render(maze: &Maze, solution: Option<&Solution>, color: bool) -> String {
    let path: HashSet<Point> = solution
        .map(|s| s.path_cells().iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let p = Point::new(x, y);
            if p == maze.start() {
                cell(&mut out, 'A', color, Role::Start);
            } else if p == maze.goal() {
                cell(&mut out, 'B', color, Role::Goal);
            } else if maze.is_wall(p) {
                cell(&mut out, '█', color, Role::Wall);
            } else if path.contains(&p) {
                cell(&mut out, '*', color, Role::Path);
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

fn cell(out: &mut String, ch: char, color: bool, role: Role) {
    if !color {
        out.push(ch);
        return;
    }
    let styled = match role {
        Role::Wall => ch.dark_grey(),
        Role::Start => ch.green().bold(),
        Role::Goal => ch.red().bold(),
        Role::Path => ch.yellow(),
    };
    let _ = write!(out, "{styled}");
}
