//! Common models.

mod domain;
pub use self::domain::*;

mod primitives;
pub use self::primitives::*;
