use crate::utils::Float;

/// Represents a travel cost.
pub type Cost = Float;

/// Represents a distance.
pub type Distance = Float;

/// Represents a demand weight.
pub type Weight = Float;
