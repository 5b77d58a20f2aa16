//! Relative-time interval algebra.
//!
//! Every animation is authored on `[0, 1]` local time. Nesting it inside a
//! group assigns it a sub-interval of the enclosing unit interval, and the
//! remapping is a plain affine map, so nested rescales compose exactly.

use serde::{Deserialize, Serialize};

use crate::error::TimingError;

/// A sub-interval of an enclosing unit of relative time.
///
/// `stop >= start` is required; reversed intervals have no playback
/// semantics and are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeInterval {
    start: f64,
    stop: f64,
}

impl RelativeInterval {
    /// The whole enclosing interval.
    pub const UNIT: Self = Self {
        start: 0.0,
        stop: 1.0,
    };

    /// Create a new interval
    #[inline]
    pub fn new(start: f64, stop: f64) -> Result<Self, TimingError> {
        if !start.is_finite() || !stop.is_finite() || stop < start {
            return Err(TimingError::InvalidInterval { start, stop });
        }
        Ok(Self { start, stop })
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.stop - self.start
    }

    /// Affine map of a point on the local unit interval into this one.
    #[inline]
    pub fn remap_point(&self, t: f64) -> f64 {
        self.start + self.span() * t
    }

    /// Compose with an interval nested inside this one.
    ///
    /// Remapping a point through the result equals remapping it through
    /// `inner` first and `self` second.
    #[inline]
    pub fn remap(&self, inner: &RelativeInterval) -> RelativeInterval {
        RelativeInterval {
            start: self.remap_point(inner.start),
            stop: self.remap_point(inner.stop),
        }
    }
}

impl Default for RelativeInterval {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<(f64, f64)> for RelativeInterval {
    type Error = TimingError;

    fn try_from((start, stop): (f64, f64)) -> Result<Self, TimingError> {
        Self::new(start, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let interval = RelativeInterval::new(0.2, 0.8).unwrap();
        assert_eq!(interval.start(), 0.2);
        assert_eq!(interval.stop(), 0.8);
        assert!((interval.span() - 0.6).abs() < 1e-12);

        assert!(RelativeInterval::new(0.8, 0.2).is_err());
        assert!(RelativeInterval::new(f64::NAN, 1.0).is_err());
        assert!(RelativeInterval::new(0.0, f64::INFINITY).is_err());

        // zero-width windows are valid: they pin everything to one instant
        assert!(RelativeInterval::new(0.5, 0.5).is_ok());
    }

    #[test]
    fn test_remap_point() {
        let interval = RelativeInterval::new(0.2, 0.8).unwrap();
        assert!((interval.remap_point(0.0) - 0.2).abs() < 1e-12);
        assert!((interval.remap_point(1.0) - 0.8).abs() < 1e-12);
        assert!((interval.remap_point(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_affine_composition() {
        // outer-to-inner application equals the single composed map
        let i1 = RelativeInterval::new(0.2, 0.8).unwrap();
        let i2 = RelativeInterval::new(0.0, 0.5).unwrap();
        let composed = i2.remap(&i1);
        assert!((composed.start() - 0.1).abs() < 1e-12);
        assert!((composed.stop() - 0.4).abs() < 1e-12);

        for t in [0.0, 0.25, 0.5, 1.0] {
            let stepwise = i2.remap_point(i1.remap_point(t));
            let direct = composed.remap_point(t);
            assert!((stepwise - direct).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unit_is_identity() {
        let interval = RelativeInterval::new(0.3, 0.7).unwrap();
        let remapped = RelativeInterval::UNIT.remap(&interval);
        assert_eq!(remapped, interval);
    }
}
