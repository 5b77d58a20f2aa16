//! Test fixtures for cue-timing-core: an in-memory host document and
//! simple animatable scene objects.
//!
//! `MockDocument` implements the `DocumentContext` boundary with plain
//! maps and a recorded keyframe log, so timing behavior can be asserted
//! without a live host.

use std::collections::HashMap;

use serde::Serialize;

use cue_timing_core::{
    Animatable, AnimationGroup, AnimationTime, DocumentContext, Entry, ParamId, ScalarAnimation,
    ScalarCfg, StateAnimation, TargetHandle, TimingError, Value, VectorAnimation, VectorCfg, Verb,
    Vector3,
};

/// One keyframe write observed by the mock host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedKeyframe {
    pub target: TargetHandle,
    pub param: String,
    pub value: Value,
    pub time: AnimationTime,
}

/// In-memory host document: parameter store, keyframe log, timeline
/// cursor, and frame rate.
#[derive(Debug)]
pub struct MockDocument {
    params: HashMap<(TargetHandle, String), Value>,
    keyframes: Vec<RecordedKeyframe>,
    time: AnimationTime,
    frame: AnimationTime,
}

impl MockDocument {
    /// New document at t=0 with a 30 fps frame duration.
    pub fn new() -> Self {
        Self {
            params: HashMap::new(),
            keyframes: Vec::new(),
            time: AnimationTime::zero(),
            frame: AnimationTime::from_nanos(33_333_333),
        }
    }

    pub fn with_frame_duration(mut self, frame: AnimationTime) -> Self {
        self.frame = frame;
        self
    }

    /// Seed one parameter value.
    pub fn with_param(mut self, target: &str, param: &str, value: Value) -> Self {
        self.set_param(target, param, value);
        self
    }

    /// Seed the standard parameter set of a scene object: position,
    /// rotation, scale, opacity, visibility.
    pub fn with_object(self, target: &str) -> Self {
        self.with_param(target, "position", Value::Vector3(Vector3::zero()))
            .with_param(target, "rotation", Value::Vector3(Vector3::zero()))
            .with_param(target, "scale", Value::Vector3(Vector3::one()))
            .with_param(target, "opacity", Value::Float(1.0))
            .with_param(target, "visible", Value::Bool(true))
    }

    pub fn set_param(&mut self, target: &str, param: &str, value: Value) {
        self.params
            .insert((target.to_string(), param.to_string()), value);
    }

    pub fn param(&self, target: &str, param: &str) -> Option<Value> {
        self.params.get(&(target.to_string(), param.to_string())).copied()
    }

    /// All recorded keyframes, in write order.
    pub fn keyframes(&self) -> &[RecordedKeyframe] {
        &self.keyframes
    }

    /// Recorded keyframes for one parameter, in write order.
    pub fn keyframes_for(&self, target: &str, param: &str) -> Vec<&RecordedKeyframe> {
        self.keyframes
            .iter()
            .filter(|k| k.target == target && k.param == param)
            .collect()
    }

    /// Pretty-printed keyframe log for debugging failed assertions.
    pub fn dump_keyframes(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.keyframes)?)
    }
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentContext for MockDocument {
    fn current_value(
        &self,
        target: &TargetHandle,
        param: &ParamId,
    ) -> Result<Value, TimingError> {
        self.params
            .get(&(target.clone(), param.as_str().to_string()))
            .copied()
            .ok_or_else(|| TimingError::host(format!("no such parameter {target}.{param}")))
    }

    fn write_keyframe(
        &mut self,
        target: &TargetHandle,
        param: &ParamId,
        value: Value,
        at: AnimationTime,
    ) -> Result<(), TimingError> {
        self.keyframes.push(RecordedKeyframe {
            target: target.clone(),
            param: param.as_str().to_string(),
            value,
            time: at,
        });
        // the last written sample becomes the parameter's current value
        self.params
            .insert((target.clone(), param.as_str().to_string()), value);
        Ok(())
    }

    fn current_time(&self) -> AnimationTime {
        self.time
    }

    fn advance_time(&mut self, by: AnimationTime) {
        self.time += by;
    }

    fn frame_duration(&self) -> AnimationTime {
        self.frame
    }
}

/// A fixture scene object supporting the full verb set.
#[derive(Debug, Clone)]
pub struct FixtureObject {
    handle: TargetHandle,
}

impl FixtureObject {
    pub fn new(handle: &str) -> Self {
        Self {
            handle: handle.to_string(),
        }
    }
}

impl Animatable for FixtureObject {
    fn handle(&self) -> &TargetHandle {
        &self.handle
    }

    fn animation_for(
        &self,
        ctx: &dyn DocumentContext,
        verb: &Verb,
    ) -> Result<Entry, TimingError> {
        let opacity = ParamId::new("opacity");
        let visible = ParamId::new("visible");
        match verb {
            Verb::Create => {
                let show = StateAnimation::new(
                    self.handle.clone(),
                    visible,
                    Value::Bool(true),
                    0.0,
                );
                let fade = ScalarAnimation::new(
                    ctx,
                    self.handle.clone(),
                    opacity,
                    Value::Float(1.0),
                    ScalarCfg {
                        value_initial: Some(Value::Float(0.0)),
                        ..ScalarCfg::default()
                    },
                )?;
                Ok(AnimationGroup::new(vec![show.into(), fade.into()]).into())
            }
            Verb::Destroy => {
                let fade = ScalarAnimation::new(
                    ctx,
                    self.handle.clone(),
                    opacity,
                    Value::Float(0.0),
                    ScalarCfg::default(),
                )?;
                let hide = StateAnimation::new(
                    self.handle.clone(),
                    visible,
                    Value::Bool(false),
                    1.0,
                );
                Ok(AnimationGroup::new(vec![fade.into(), hide.into()]).into())
            }
            Verb::MoveBy(delta) => Ok(VectorAnimation::new(
                ctx,
                self.handle.clone(),
                ParamId::new("position"),
                *delta,
                VectorCfg {
                    relative: true,
                    ..VectorCfg::default()
                },
            )?
            .into()),
            Verb::MoveTo(position) => Ok(VectorAnimation::new(
                ctx,
                self.handle.clone(),
                ParamId::new("position"),
                *position,
                VectorCfg::default(),
            )?
            .into()),
            Verb::RotateBy(delta) => Ok(VectorAnimation::new(
                ctx,
                self.handle.clone(),
                ParamId::new("rotation"),
                *delta,
                VectorCfg {
                    relative: true,
                    ..VectorCfg::default()
                },
            )?
            .into()),
            Verb::ScaleBy(factor) => Ok(VectorAnimation::new(
                ctx,
                self.handle.clone(),
                ParamId::new("scale"),
                *factor,
                VectorCfg {
                    relative: true,
                    multiplicative: true,
                    ..VectorCfg::default()
                },
            )?
            .into()),
            Verb::FadeIn => Ok(ScalarAnimation::new(
                ctx,
                self.handle.clone(),
                opacity,
                Value::Float(1.0),
                ScalarCfg {
                    value_initial: Some(Value::Float(0.0)),
                    ..ScalarCfg::default()
                },
            )?
            .into()),
            Verb::FadeOut => Ok(ScalarAnimation::new(
                ctx,
                self.handle.clone(),
                opacity,
                Value::Float(0.0),
                ScalarCfg::default(),
            )?
            .into()),
            Verb::Show => Ok(StateAnimation::new(
                self.handle.clone(),
                visible,
                Value::Bool(true),
                0.0,
            )
            .into()),
            Verb::Hide => Ok(StateAnimation::new(
                self.handle.clone(),
                visible,
                Value::Bool(false),
                0.0,
            )
            .into()),
            _ => Err(self.unsupported(verb)),
        }
    }
}

/// A fixture object that can only be toggled, never moved or faded.
/// Used to exercise the `VerbUnsupported` path.
#[derive(Debug, Clone)]
pub struct PinnedObject {
    handle: TargetHandle,
}

impl PinnedObject {
    pub fn new(handle: &str) -> Self {
        Self {
            handle: handle.to_string(),
        }
    }
}

impl Animatable for PinnedObject {
    fn handle(&self) -> &TargetHandle {
        &self.handle
    }

    fn animation_for(
        &self,
        _ctx: &dyn DocumentContext,
        verb: &Verb,
    ) -> Result<Entry, TimingError> {
        match verb {
            Verb::Show => Ok(StateAnimation::new(
                self.handle.clone(),
                ParamId::new("visible"),
                Value::Bool(true),
                0.0,
            )
            .into()),
            Verb::Hide => Ok(StateAnimation::new(
                self.handle.clone(),
                ParamId::new("visible"),
                Value::Bool(false),
                0.0,
            )
            .into()),
            _ => Err(self.unsupported(verb)),
        }
    }
}
