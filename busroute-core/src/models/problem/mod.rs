//! Problem domain models.

mod costs;
pub use self::costs::*;

mod graph;
pub use self::graph::*;

mod stops;
pub use self::stops::*;
