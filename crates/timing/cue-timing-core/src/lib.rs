//! Cue Timing Core
//!
//! Host-agnostic timing and composition engine for declarative keyframe
//! animation authoring. Animations are authored with relative timing on
//! `[0, 1]`, composed into arbitrarily nested ordered groups, then
//! resolved to absolute document time by a playback driver and
//! materialized as keyframes through a narrow host-document interface.

pub mod animation;
pub mod animator;
pub mod error;
pub mod interval;
pub mod player;
pub mod target;
pub mod time;
pub mod value;

// Re-export common types for convenience
pub use animation::{
    AnimationGroup, Entry, ParameterAnimation, ScalarAnimation, ScalarCfg, Schedule,
    StateAnimation, VectorAnimation, VectorCfg,
};
pub use animator::{Animatable, Animator, Verb};
pub use error::TimingError;
pub use interval::RelativeInterval;
pub use player::{DriverConfig, PlaybackDriver};
pub use target::{Axis, DocumentContext, ParamId, TargetHandle};
pub use time::AnimationTime;
pub use value::{Value, ValueKind, Vector3};

/// Timing core result type
pub type Result<T> = core::result::Result<T, TimingError>;
