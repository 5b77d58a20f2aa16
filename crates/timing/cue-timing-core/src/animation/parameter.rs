//! Leaf parameter animations: one scalar or state parameter evolving over
//! a relative interval.
//!
//! Lifecycle: authored with relative times only, optionally rescaled into
//! enclosing group windows, resolved to an absolute schedule exactly once
//! at play time, then executed against the host.

use serde::{Deserialize, Serialize};

use crate::error::TimingError;
use crate::interval::RelativeInterval;
use crate::target::{DocumentContext, ParamId, TargetHandle};
use crate::time::AnimationTime;
use crate::value::Value;

/// Resolved absolute schedule of a leaf animation.
///
/// Ordering is deliberately not enforced: pulse-style authoring may put
/// the stop ahead of the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub start: AnimationTime,
    pub stop: AnimationTime,
}

/// Construction options for a scalar animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarCfg {
    /// Starting value; read from the host when omitted.
    pub value_initial: Option<Value>,
    pub relative_start: f64,
    pub relative_stop: f64,
    /// Interpret the final value as a delta against the current value,
    /// resolved once at construction.
    pub relative: bool,
    /// Apply the delta multiplicatively instead of additively.
    pub multiplicative: bool,
}

impl Default for ScalarCfg {
    fn default() -> Self {
        Self {
            value_initial: None,
            relative_start: 0.0,
            relative_stop: 1.0,
            relative: false,
            multiplicative: false,
        }
    }
}

/// One scalar parameter evolving between two values over a relative
/// interval, written as an interpolated curve segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarAnimation {
    target: TargetHandle,
    param: ParamId,
    value_initial: Value,
    value_final: Value,
    relative_start: f64,
    relative_stop: f64,
    schedule: Option<Schedule>,
}

impl ScalarAnimation {
    /// Create a scalar animation against the host document.
    ///
    /// An omitted initial value is read from the host; a `relative` final
    /// value is resolved against the live current value here, not at
    /// execution time, so relative animations must be constructed in
    /// authoring order.
    pub fn new(
        ctx: &dyn DocumentContext,
        target: TargetHandle,
        param: ParamId,
        value_final: Value,
        cfg: ScalarCfg,
    ) -> Result<Self, TimingError> {
        let value_initial = match cfg.value_initial {
            Some(value) => value,
            None => ctx.current_value(&target, &param)?,
        };
        if !value_initial.is_numeric() {
            return Err(TimingError::UnknownValueType {
                param: param.to_string(),
                reason: format!("scalar animation over {} value", value_initial.kind()),
            });
        }

        let value_final = if cfg.relative {
            let base = ctx.current_value(&target, &param)?;
            if cfg.multiplicative {
                base.try_mul(&value_final)?
            } else {
                base.try_add(&value_final)?
            }
        } else {
            value_final
        };
        if value_final.kind() != value_initial.kind() {
            return Err(TimingError::ValueTypeMismatch {
                expected: value_initial.kind(),
                actual: value_final.kind(),
            });
        }

        Ok(Self {
            target,
            param,
            value_initial,
            value_final,
            relative_start: cfg.relative_start,
            relative_stop: cfg.relative_stop,
            schedule: None,
        })
    }

    /// Create a scalar animation from fully resolved values, without
    /// consulting the host. Used by vector decomposition and tests.
    pub fn from_values(
        target: TargetHandle,
        param: ParamId,
        value_initial: Value,
        value_final: Value,
        relative_start: f64,
        relative_stop: f64,
    ) -> Result<Self, TimingError> {
        if !value_initial.is_numeric() {
            return Err(TimingError::UnknownValueType {
                param: param.to_string(),
                reason: format!("scalar animation over {} value", value_initial.kind()),
            });
        }
        if value_final.kind() != value_initial.kind() {
            return Err(TimingError::ValueTypeMismatch {
                expected: value_initial.kind(),
                actual: value_final.kind(),
            });
        }
        Ok(Self {
            target,
            param,
            value_initial,
            value_final,
            relative_start,
            relative_stop,
            schedule: None,
        })
    }

    #[inline]
    pub fn target(&self) -> &TargetHandle {
        &self.target
    }

    #[inline]
    pub fn param(&self) -> &ParamId {
        &self.param
    }

    #[inline]
    pub fn value_initial(&self) -> Value {
        self.value_initial
    }

    #[inline]
    pub fn value_final(&self) -> Value {
        self.value_final
    }

    #[inline]
    pub fn relative_start(&self) -> f64 {
        self.relative_start
    }

    #[inline]
    pub fn relative_stop(&self) -> f64 {
        self.relative_stop
    }

    #[inline]
    pub fn schedule(&self) -> Option<Schedule> {
        self.schedule
    }

    /// Remap both relative endpoints into an enclosing sub-interval.
    /// Applying this at each nesting level composes affinely.
    pub fn rescale_by(&mut self, interval: &RelativeInterval) {
        self.relative_start = interval.remap_point(self.relative_start);
        self.relative_stop = interval.remap_point(self.relative_stop);
    }

    /// Resolve the absolute schedule from a run time and a timeline origin.
    /// The last call before `execute` wins.
    pub fn scale_to_absolute(
        &mut self,
        run_time: AnimationTime,
        origin: AnimationTime,
    ) -> Result<(), TimingError> {
        let start = origin + run_time.scale_by(self.relative_start)?;
        let stop = origin + run_time.scale_by(self.relative_stop)?;
        self.schedule = Some(Schedule { start, stop });
        Ok(())
    }

    /// Write both keyframe samples through the host.
    ///
    /// The final sample lands one frame before the nominal stop so the
    /// final value holds at the stop frame under discrete sampling.
    pub fn execute(&self, ctx: &mut dyn DocumentContext) -> Result<(), TimingError> {
        let schedule = self.schedule.ok_or_else(|| TimingError::UnscaledExecution {
            target: self.target.clone(),
            param: self.param.to_string(),
        })?;
        ctx.write_keyframe(&self.target, &self.param, self.value_initial, schedule.start)?;
        let last = schedule.stop - ctx.frame_duration();
        ctx.write_keyframe(&self.target, &self.param, self.value_final, last)
    }

    /// Difference between final and initial value, for authoring-time
    /// chaining.
    pub fn delta(&self) -> Result<Value, TimingError> {
        self.value_final.try_sub(&self.value_initial)
    }
}

/// A discrete state change on one parameter: a single sample at one
/// relative instant, no interpolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateAnimation {
    target: TargetHandle,
    param: ParamId,
    value: Value,
    relative_start: f64,
    scheduled_at: Option<AnimationTime>,
}

impl StateAnimation {
    #[inline]
    pub fn new(target: TargetHandle, param: ParamId, value: Value, relative_start: f64) -> Self {
        Self {
            target,
            param,
            value,
            relative_start,
            scheduled_at: None,
        }
    }

    #[inline]
    pub fn target(&self) -> &TargetHandle {
        &self.target
    }

    #[inline]
    pub fn param(&self) -> &ParamId {
        &self.param
    }

    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }

    #[inline]
    pub fn relative_start(&self) -> f64 {
        self.relative_start
    }

    #[inline]
    pub fn scheduled_at(&self) -> Option<AnimationTime> {
        self.scheduled_at
    }

    /// Remap the instant into an enclosing sub-interval.
    pub fn rescale_by(&mut self, interval: &RelativeInterval) {
        self.relative_start = interval.remap_point(self.relative_start);
    }

    pub fn scale_to_absolute(
        &mut self,
        run_time: AnimationTime,
        origin: AnimationTime,
    ) -> Result<(), TimingError> {
        self.scheduled_at = Some(origin + run_time.scale_by(self.relative_start)?);
        Ok(())
    }

    /// Write the single state sample through the host.
    pub fn execute(&self, ctx: &mut dyn DocumentContext) -> Result<(), TimingError> {
        let at = self.scheduled_at.ok_or_else(|| TimingError::UnscaledExecution {
            target: self.target.clone(),
            param: self.param.to_string(),
        })?;
        ctx.write_keyframe(&self.target, &self.param, self.value, at)
    }
}

/// A leaf animation as stored in a flattened group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterAnimation {
    Scalar(ScalarAnimation),
    State(StateAnimation),
}

impl ParameterAnimation {
    #[inline]
    pub fn target(&self) -> &TargetHandle {
        match self {
            Self::Scalar(a) => a.target(),
            Self::State(a) => a.target(),
        }
    }

    #[inline]
    pub fn param(&self) -> &ParamId {
        match self {
            Self::Scalar(a) => a.param(),
            Self::State(a) => a.param(),
        }
    }

    #[inline]
    pub fn relative_start(&self) -> f64 {
        match self {
            Self::Scalar(a) => a.relative_start(),
            Self::State(a) => a.relative_start(),
        }
    }

    /// Stop for sequencing purposes. A state toggle has no stop of its
    /// own; its end is its own instant.
    #[inline]
    pub fn effective_stop(&self) -> f64 {
        match self {
            Self::Scalar(a) => a.relative_stop(),
            Self::State(a) => a.relative_start(),
        }
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        match self {
            Self::Scalar(a) => a.schedule().is_some(),
            Self::State(a) => a.scheduled_at().is_some(),
        }
    }

    pub fn rescale_by(&mut self, interval: &RelativeInterval) {
        match self {
            Self::Scalar(a) => a.rescale_by(interval),
            Self::State(a) => a.rescale_by(interval),
        }
    }

    pub fn scale_to_absolute(
        &mut self,
        run_time: AnimationTime,
        origin: AnimationTime,
    ) -> Result<(), TimingError> {
        match self {
            Self::Scalar(a) => a.scale_to_absolute(run_time, origin),
            Self::State(a) => a.scale_to_absolute(run_time, origin),
        }
    }

    pub fn execute(&self, ctx: &mut dyn DocumentContext) -> Result<(), TimingError> {
        match self {
            Self::Scalar(a) => a.execute(ctx),
            Self::State(a) => a.execute(ctx),
        }
    }
}

impl From<ScalarAnimation> for ParameterAnimation {
    fn from(animation: ScalarAnimation) -> Self {
        Self::Scalar(animation)
    }
}

impl From<StateAnimation> for ParameterAnimation {
    fn from(animation: StateAnimation) -> Self {
        Self::State(animation)
    }
}
