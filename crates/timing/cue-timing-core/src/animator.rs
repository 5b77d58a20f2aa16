//! Animators: mapping one verb across a set of targets onto a rescaled
//! animation group.
//!
//! The two-phase contract lives here: per-object animations are always
//! collected un-rescaled, authored on local `[0, 1]` time, and the whole
//! group is rescaled once into the animator's window. Only the enclosing
//! animator or group decides where in the timeline the work lands.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::animation::group::{AnimationGroup, Entry};
use crate::error::TimingError;
use crate::interval::RelativeInterval;
use crate::target::{DocumentContext, TargetHandle};
use crate::value::Vector3;

/// An animation verb, resolved against a target's capability interface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Verb {
    Create,
    Destroy,
    MoveBy(Vector3),
    MoveTo(Vector3),
    RotateBy(Vector3),
    ScaleBy(Vector3),
    FadeIn,
    FadeOut,
    Show,
    Hide,
}

impl Verb {
    /// Get the name of this verb
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Destroy => "destroy",
            Self::MoveBy(_) => "move_by",
            Self::MoveTo(_) => "move_to",
            Self::RotateBy(_) => "rotate_by",
            Self::ScaleBy(_) => "scale_by",
            Self::FadeIn => "fade_in",
            Self::FadeOut => "fade_out",
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability interface implemented by each animatable target type.
///
/// Implementations build the un-rescaled entry realizing a verb on their
/// object, and answer `VerbUnsupported` for verbs they cannot realize.
pub trait Animatable {
    /// Handle of the underlying host object.
    fn handle(&self) -> &TargetHandle;

    /// Build the animation entry realizing `verb` on this target,
    /// authored on local `[0, 1]` time.
    fn animation_for(&self, ctx: &dyn DocumentContext, verb: &Verb)
        -> Result<Entry, TimingError>;

    /// Standard rejection for verbs this target does not implement.
    fn unsupported(&self, verb: &Verb) -> TimingError {
        TimingError::VerbUnsupported {
            verb: verb.name().to_string(),
            target: self.handle().clone(),
        }
    }
}

/// Maps one verb across a set of targets and lands the result on a
/// configured window of the enclosing timeline.
#[derive(Debug, Clone)]
pub struct Animator {
    verb: Verb,
    window: RelativeInterval,
    category: Option<String>,
}

impl Animator {
    #[inline]
    pub fn new(verb: Verb, window: RelativeInterval) -> Self {
        Self {
            verb,
            window,
            category: None,
        }
    }

    /// Attach a category tag to the groups this animator produces.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    #[inline]
    pub fn window(&self) -> &RelativeInterval {
        &self.window
    }

    /// Resolve the verb across all targets and rescale the collected
    /// group into this animator's window.
    pub fn apply(
        &self,
        ctx: &dyn DocumentContext,
        targets: &[&dyn Animatable],
    ) -> Result<AnimationGroup, TimingError> {
        // phase 1: collect, un-rescaled
        let mut entries = Vec::with_capacity(targets.len());
        for target in targets {
            entries.push(target.animation_for(ctx, &self.verb)?);
        }
        let mut group = AnimationGroup::new(entries);
        if let Some(category) = &self.category {
            group = group.with_category(category.clone());
        }

        // phase 2: rescale once, as a whole
        group.rescale_by(&self.window);
        debug!(
            "animator {}: {} leaf animations over {} targets on [{}, {}]",
            self.verb,
            group.len(),
            targets.len(),
            self.window.start(),
            self.window.stop()
        );
        Ok(group)
    }
}
