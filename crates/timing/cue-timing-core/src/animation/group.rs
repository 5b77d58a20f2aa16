//! Composable animation groups: nesting, flattening, rescaling, and
//! aggregate run-time queries.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::animation::parameter::{ParameterAnimation, ScalarAnimation, StateAnimation};
use crate::animation::vector::VectorAnimation;
use crate::error::TimingError;
use crate::interval::RelativeInterval;
use crate::target::{DocumentContext, TargetHandle};
use crate::time::AnimationTime;

/// One authoring-time entry of an animation group, resolved once at the
/// API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    Animation(ParameterAnimation),
    Vector(VectorAnimation),
    Group(AnimationGroup),
    /// Any entry paired with the relative sub-interval it should occupy
    /// inside the enclosing group.
    Windowed(Box<Entry>, RelativeInterval),
}

impl Entry {
    /// Pair this entry with the relative sub-interval it should occupy.
    pub fn windowed(self, interval: RelativeInterval) -> Entry {
        Entry::Windowed(Box::new(self), interval)
    }
}

impl From<ParameterAnimation> for Entry {
    fn from(animation: ParameterAnimation) -> Self {
        Entry::Animation(animation)
    }
}

impl From<ScalarAnimation> for Entry {
    fn from(animation: ScalarAnimation) -> Self {
        Entry::Animation(animation.into())
    }
}

impl From<StateAnimation> for Entry {
    fn from(animation: StateAnimation) -> Self {
        Entry::Animation(animation.into())
    }
}

impl From<VectorAnimation> for Entry {
    fn from(animation: VectorAnimation) -> Self {
        Entry::Vector(animation)
    }
}

impl From<AnimationGroup> for Entry {
    fn from(group: AnimationGroup) -> Self {
        Entry::Group(group)
    }
}

/// An ordered, flattened collection of leaf animations.
///
/// Construction rescales windowed entries and fully flattens nested
/// groups and vector animations; afterwards the group holds only
/// `ParameterAnimation`s, in insertion order, depth-first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationGroup {
    animations: Vec<ParameterAnimation>,
    category: Option<String>,
}

impl AnimationGroup {
    /// Build a group from authoring-time entries.
    ///
    /// Windowed entries are rescaled into their sub-interval (recursing
    /// into nested groups), then everything is flattened to a single
    /// ordered leaf list. Flattening is idempotent: regrouping a flat
    /// group changes neither content nor order.
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut animations = Vec::new();
        for entry in entries {
            Self::flatten_into(entry, &mut animations);
        }
        trace!("flattened group down to {} leaf animations", animations.len());
        Self {
            animations,
            category: None,
        }
    }

    fn flatten_into(entry: Entry, out: &mut Vec<ParameterAnimation>) {
        match entry {
            Entry::Animation(animation) => out.push(animation),
            Entry::Vector(vector) => {
                out.extend(vector.into_components().map(ParameterAnimation::Scalar))
            }
            // nested groups are flat already
            Entry::Group(group) => out.extend(group.animations),
            Entry::Windowed(inner, interval) => {
                let mark = out.len();
                Self::flatten_into(*inner, out);
                for animation in &mut out[mark..] {
                    animation.rescale_by(&interval);
                }
            }
        }
    }

    /// Attach a free-form classification tag, opaque to the core.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The flattened leaf animations, in execution order.
    #[inline]
    pub fn animations(&self) -> &[ParameterAnimation] {
        &self.animations
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ParameterAnimation> {
        self.animations.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Remap every contained leaf into an enclosing sub-interval. Used
    /// when this group is nested one level deeper.
    pub fn rescale_by(&mut self, interval: &RelativeInterval) {
        for animation in &mut self.animations {
            animation.rescale_by(interval);
        }
    }

    /// Resolve every leaf's absolute schedule from a run time and origin.
    pub fn scale_to_absolute(
        &mut self,
        run_time: AnimationTime,
        origin: AnimationTime,
    ) -> Result<(), TimingError> {
        for animation in &mut self.animations {
            animation.scale_to_absolute(run_time, origin)?;
        }
        Ok(())
    }

    /// Execute every leaf in list order.
    ///
    /// List order determines host write order; when two animations touch
    /// the same parameter at the same frame, the host's last-write-wins
    /// tie-breaking applies. Partial writes before a failure are not
    /// rolled back.
    pub fn execute(&self, ctx: &mut dyn DocumentContext) -> Result<(), TimingError> {
        for animation in &self.animations {
            animation.execute(ctx)?;
        }
        Ok(())
    }

    /// Smallest relative start over all leaves.
    pub fn earliest_start(&self) -> Result<f64, TimingError> {
        if self.animations.is_empty() {
            return Err(TimingError::EmptyGroup);
        }
        Ok(self
            .animations
            .iter()
            .map(|a| a.relative_start())
            .fold(f64::INFINITY, f64::min))
    }

    /// Largest relative stop over all leaves; a state toggle contributes
    /// its own instant.
    pub fn latest_stop(&self) -> Result<f64, TimingError> {
        if self.animations.is_empty() {
            return Err(TimingError::EmptyGroup);
        }
        Ok(self
            .animations
            .iter()
            .map(|a| a.effective_stop())
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// Relative span this group consumes, for placing it inside another
    /// group's window.
    pub fn total_run_time(&self) -> Result<(f64, f64), TimingError> {
        Ok((self.earliest_start()?, self.latest_stop()?))
    }

    /// Targets touched by this group, first-touch order, deduplicated.
    pub fn targets(&self) -> Vec<TargetHandle> {
        let mut seen: Vec<TargetHandle> = Vec::new();
        for animation in &self.animations {
            if !seen.iter().any(|t| t == animation.target()) {
                seen.push(animation.target().clone());
            }
        }
        seen
    }
}

impl IntoIterator for AnimationGroup {
    type Item = ParameterAnimation;
    type IntoIter = std::vec::IntoIter<ParameterAnimation>;

    fn into_iter(self) -> Self::IntoIter {
        self.animations.into_iter()
    }
}
