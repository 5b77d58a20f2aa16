//! Animation model: leaf parameter animations, vector aggregates, and
//! composable groups

pub mod group;
pub mod parameter;
pub mod vector;

pub use group::{AnimationGroup, Entry};
pub use parameter::{ParameterAnimation, ScalarAnimation, ScalarCfg, Schedule, StateAnimation};
pub use vector::{VectorAnimation, VectorCfg};
