//! Strategy selection.

use std::fmt;
use std::str::FromStr;

/// A frontier-management strategy.
///
/// "Heuristic Search" and "Optimal Path" in user-facing menus are both
/// aliases for [`AStar`](Self::AStar): Manhattan-guided search over a
/// uniform-cost 4-connected grid already returns a shortest path, so no
/// distinct algorithm exists behind the second name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search: FIFO frontier, shortest path guaranteed.
    Bfs,
    /// Depth-first search: LIFO frontier, no optimality guarantee.
    Dfs,
    /// Cost + Manhattan-heuristic informed search, shortest path guaranteed.
    AStar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::AStar => "a-star",
        })
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" | "a-star" | "a_star" | "heuristic" | "optimal" => Ok(Self::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy \"{}\": expected bfs, dfs, a-star, heuristic, or optimal",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::Dfs);
        assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("a_star".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("heuristic".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("optimal".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert!("dijkstra".parse::<Strategy>().is_err());
    }

    #[test]
    fn parse_error_lists_every_accepted_name() {
        let err = "dijkstra".parse::<Strategy>().unwrap_err();
        let msg = err.to_string();
        for name in ["bfs", "dfs", "a-star", "heuristic", "optimal"] {
            assert!(msg.contains(name), "missing {name} in {msg:?}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for s in [Strategy::Bfs, Strategy::Dfs, Strategy::AStar] {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }
}
