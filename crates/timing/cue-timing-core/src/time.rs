//! Absolute time on the host document's timeline.
//!
//! Relative times stay plain `f64` fractions until a run time is known;
//! only resolved, absolute instants use `AnimationTime`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TimingError;

/// A moment (or duration) on the host timeline, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize, Default)]
pub struct AnimationTime(u64);

impl AnimationTime {
    /// Create animation time from nanoseconds
    #[inline]
    pub fn from_nanos(nanoseconds: u64) -> Self {
        Self(nanoseconds)
    }

    /// Create animation time from milliseconds
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, TimingError> {
        Self::from_seconds(milliseconds / 1000.0)
    }

    /// Create animation time from seconds
    #[inline]
    pub fn from_seconds(seconds: f64) -> Result<Self, TimingError> {
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(TimingError::InvalidTime { seconds });
        }
        let nanos = (seconds * 1_000_000_000.0).round() as u64;
        Ok(Self(nanos))
    }

    /// Zero time
    #[inline]
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get time in seconds
    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Get time in milliseconds
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Get time in nanoseconds
    #[inline]
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Scale this time by a non-negative factor.
    ///
    /// This is how a relative fraction becomes an absolute offset: the
    /// run time scaled by the fraction.
    #[inline]
    pub fn scale_by(&self, factor: f64) -> Result<Self, TimingError> {
        Self::from_seconds(self.as_seconds() * factor)
    }

    /// Get the difference between two times
    #[inline]
    pub fn duration_since(&self, earlier: AnimationTime) -> Result<AnimationTime, TimingError> {
        if self.0 < earlier.0 {
            return Err(TimingError::InvalidTime {
                seconds: (self.0 as f64 - earlier.0 as f64) / 1_000_000_000.0,
            });
        }
        Ok(AnimationTime(self.0 - earlier.0))
    }
}

impl std::ops::Add for AnimationTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for AnimationTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Sub for AnimationTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::ops::SubAssign for AnimationTime {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl From<Duration> for AnimationTime {
    fn from(duration: Duration) -> Self {
        AnimationTime::from_nanos(duration.as_nanos() as u64)
    }
}

impl From<AnimationTime> for Duration {
    fn from(time: AnimationTime) -> Self {
        Duration::from_nanos(time.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_time() {
        let time1 = AnimationTime::from_seconds(1.5).unwrap();
        let time2 = AnimationTime::from_seconds(2.0).unwrap();

        assert_eq!(time1.as_seconds(), 1.5);
        assert_eq!(time1.as_millis(), 1500.0);

        let sum = time1 + time2;
        assert_eq!(sum.as_seconds(), 3.5);

        let diff = time2.duration_since(time1).unwrap();
        assert_eq!(diff.as_seconds(), 0.5);
    }

    #[test]
    fn test_invalid_time() {
        assert!(AnimationTime::from_seconds(-1.0).is_err());
        assert!(AnimationTime::from_seconds(f64::NAN).is_err());
        assert!(AnimationTime::from_seconds(f64::INFINITY).is_err());
    }

    #[test]
    fn test_scale_by() {
        let run_time = AnimationTime::from_seconds(4.0).unwrap();
        assert_eq!(run_time.scale_by(0.25).unwrap().as_seconds(), 1.0);
        assert_eq!(run_time.scale_by(0.75).unwrap().as_seconds(), 3.0);
        assert!(run_time.scale_by(-0.5).is_err());
        assert!(run_time.scale_by(f64::NAN).is_err());
    }

    #[test]
    fn test_saturating_sub() {
        let short = AnimationTime::from_seconds(0.01).unwrap();
        let frame = AnimationTime::from_seconds(1.0 / 30.0).unwrap();
        assert_eq!(short - frame, AnimationTime::zero());
    }
}
