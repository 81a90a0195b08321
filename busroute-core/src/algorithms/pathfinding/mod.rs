//! This module contains pathfinding algorithms over weighted graphs.

mod dijkstra;
pub use self::dijkstra::*;
