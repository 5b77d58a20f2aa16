//! Vector animations: a convenience aggregate over three per-axis scalar
//! animations, unpacked before execution.

use serde::{Deserialize, Serialize};

use crate::animation::parameter::ScalarAnimation;
use crate::error::TimingError;
use crate::interval::RelativeInterval;
use crate::target::{Axis, DocumentContext, ParamId, TargetHandle};
use crate::value::{Value, Vector3};

/// Construction options for a vector animation, shared by all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorCfg {
    pub relative_start: f64,
    pub relative_stop: f64,
    /// Interpret the vector as a delta against the current value.
    pub relative: bool,
    /// Apply the delta componentwise-multiplicatively instead of additively.
    pub multiplicative: bool,
}

impl Default for VectorCfg {
    fn default() -> Self {
        Self {
            relative_start: 0.0,
            relative_stop: 1.0,
            relative: false,
            multiplicative: false,
        }
    }
}

/// The evolution of a 3-component vector parameter, decomposed at
/// construction into one scalar animation per axis.
///
/// This object never survives group flattening; only its components do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorAnimation {
    target: TargetHandle,
    param: ParamId,
    components: [ScalarAnimation; 3],
}

impl VectorAnimation {
    /// Create a vector animation against the host document.
    ///
    /// Reads the current vector value of `param`, resolves the per-axis
    /// final values once (relative/multiplicative applied here), and
    /// builds three scalar animations on the derived `.x`/`.y`/`.z`
    /// sub-parameters sharing the same interval.
    pub fn new(
        ctx: &dyn DocumentContext,
        target: TargetHandle,
        param: ParamId,
        vector: Vector3,
        cfg: VectorCfg,
    ) -> Result<Self, TimingError> {
        let current = ctx.current_value(&target, &param)?;
        let base = current.as_vector3().ok_or_else(|| TimingError::UnknownValueType {
            param: param.to_string(),
            reason: format!("vector animation over {} value", current.kind()),
        })?;

        let finals = if cfg.relative {
            if cfg.multiplicative {
                base.scale_componentwise(vector)
            } else {
                base + vector
            }
        } else {
            vector
        };

        let initials = base.as_array();
        let finals = finals.as_array();
        let component = |axis: Axis| -> Result<ScalarAnimation, TimingError> {
            ScalarAnimation::from_values(
                target.clone(),
                param.component(axis),
                Value::Float(initials[axis.index()]),
                Value::Float(finals[axis.index()]),
                cfg.relative_start,
                cfg.relative_stop,
            )
        };
        let components = [component(Axis::X)?, component(Axis::Y)?, component(Axis::Z)?];

        Ok(Self {
            target,
            param,
            components,
        })
    }

    #[inline]
    pub fn target(&self) -> &TargetHandle {
        &self.target
    }

    /// Base parameter the components were derived from.
    #[inline]
    pub fn param(&self) -> &ParamId {
        &self.param
    }

    /// Component animations in axis order (x, y, z).
    #[inline]
    pub fn components(&self) -> &[ScalarAnimation; 3] {
        &self.components
    }

    /// Unpack into the per-axis animations, consuming the aggregate.
    #[inline]
    pub fn into_components(self) -> [ScalarAnimation; 3] {
        self.components
    }

    /// Remap all three components into an enclosing sub-interval.
    pub fn rescale_by(&mut self, interval: &RelativeInterval) {
        for component in &mut self.components {
            component.rescale_by(interval);
        }
    }
}
