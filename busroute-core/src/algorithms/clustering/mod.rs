//! This module contains clustering algorithms.

mod kmeans;
pub use self::kmeans::*;
