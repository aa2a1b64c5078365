#![warn(missing_docs)]
//! Directional block placement, orientation state, and collision shapes.
//!
//! The crate models the full lifecycle of a directional block: resolving
//! its orientation from a placement action, deriving its collision volumes,
//! and encoding it into the legacy variant format shared with the world
//! save and the network layer.

pub mod facing;
pub mod properties;
pub mod registry;
pub mod stairs;

// Re-export commonly used types
pub use facing::{Face, Facing, FacingError};
pub use properties::{BlockProperties, ToolType};
pub use registry::{all_wood_stairs, StairRegistry};
pub use stairs::{EncodedVariant, PlacementContext, StairProperties, WoodKind, WoodStairs};
