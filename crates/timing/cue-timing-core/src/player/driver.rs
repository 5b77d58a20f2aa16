//! The playback driver owns the host document handle for the duration of
//! a session and turns composed, relative-time trees into keyframes.

use log::debug;

use crate::animation::group::{AnimationGroup, Entry};
use crate::error::TimingError;
use crate::player::config::DriverConfig;
use crate::target::DocumentContext;
use crate::time::AnimationTime;

/// Drives composed animation trees against a host document.
///
/// One `play` call: wrap the submitted entries in a group, resolve every
/// leaf to absolute time with the current timeline cursor as origin,
/// execute all keyframe writes, then advance the cursor by the run time.
/// Timing resolution is pure; all side effects happen in execution.
#[derive(Debug)]
pub struct PlaybackDriver<D: DocumentContext> {
    doc: D,
    cfg: DriverConfig,
}

impl<D: DocumentContext> PlaybackDriver<D> {
    #[inline]
    pub fn new(doc: D) -> Self {
        Self::with_config(doc, DriverConfig::default())
    }

    #[inline]
    pub fn with_config(doc: D, cfg: DriverConfig) -> Self {
        Self { doc, cfg }
    }

    #[inline]
    pub fn document(&self) -> &D {
        &self.doc
    }

    #[inline]
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    #[inline]
    pub fn into_document(self) -> D {
        self.doc
    }

    /// Play the submitted entries over `run_time`.
    ///
    /// Keyframes written before a failure are not rolled back; callers
    /// wanting atomicity must validate the whole tree before playing.
    pub fn play(&mut self, entries: Vec<Entry>, run_time: AnimationTime) -> Result<(), TimingError> {
        if run_time == AnimationTime::zero() {
            return Err(TimingError::InvalidRunTime { seconds: 0.0 });
        }

        let mut group = AnimationGroup::new(entries);
        let origin = self.doc.current_time();
        group.scale_to_absolute(run_time, origin)?;
        debug!(
            "play: {} leaf animations over {}s from t={}s",
            group.len(),
            run_time.as_seconds(),
            origin.as_seconds()
        );

        group.execute(&mut self.doc)?;
        self.doc.advance_time(run_time);
        Ok(())
    }

    /// Apply the submitted entries as an instantaneous state change: a
    /// minimal snap spanning `snap_frames` frames (two by default).
    pub fn set(&mut self, entries: Vec<Entry>) -> Result<(), TimingError> {
        let run_time = self
            .doc
            .frame_duration()
            .scale_by(self.cfg.snap_frames as f64)?;
        self.play(entries, run_time)
    }
}
