//! Target handles, parameter identifiers, and the host-document boundary.
//!
//! The core never owns scene objects. Targets are named by opaque string
//! handles, and every read and write goes through the `DocumentContext`
//! trait, passed explicitly into constructors and drivers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TimingError;
use crate::time::AnimationTime;
use crate::value::Value;

/// Opaque handle naming one host object (small string key). The host owns
/// the object itself.
pub type TargetHandle = String;

/// Axis selector for vector parameter decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Path suffix of the per-axis sub-parameter
    #[inline]
    pub fn suffix(&self) -> &'static str {
        match self {
            Axis::X => ".x",
            Axis::Y => ".y",
            Axis::Z => ".z",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Canonical path of an animatable parameter on a target
/// (e.g. `"position"`, `"opacity"`, `"position.x"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamId(String);

impl ParamId {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the per-axis sub-parameter of a vector parameter.
    #[inline]
    pub fn component(&self, axis: Axis) -> ParamId {
        ParamId(format!("{}{}", self.0, axis.suffix()))
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParamId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// The host-document boundary.
///
/// Reads happen at authoring time (baseline resolution), writes at
/// execution time, and the clock belongs to the playback driver. The
/// host creates the underlying track/curve on the first keyframe write.
pub trait DocumentContext {
    /// Read the current value of a parameter on a target.
    fn current_value(&self, target: &TargetHandle, param: &ParamId)
        -> Result<Value, TimingError>;

    /// Write one keyframe sample on a parameter's track.
    fn write_keyframe(
        &mut self,
        target: &TargetHandle,
        param: &ParamId,
        value: Value,
        at: AnimationTime,
    ) -> Result<(), TimingError>;

    /// Current position of the timeline cursor.
    fn current_time(&self) -> AnimationTime;

    /// Advance the timeline cursor.
    fn advance_time(&mut self, by: AnimationTime);

    /// Duration of one frame at the document's frame rate.
    fn frame_duration(&self) -> AnimationTime;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_component_paths() {
        let param = ParamId::new("position");
        assert_eq!(param.component(Axis::X).as_str(), "position.x");
        assert_eq!(param.component(Axis::Y).as_str(), "position.y");
        assert_eq!(param.component(Axis::Z).as_str(), "position.z");
    }

    #[test]
    fn test_axis_order() {
        let indices: Vec<usize> = Axis::ALL.iter().map(|a| a.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
