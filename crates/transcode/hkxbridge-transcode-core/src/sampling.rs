//! Sampling-rate reconciliation between the host timeline and the canonical
//! rate expected by the converter.

use crate::error::TranscodeError;

/// Canonical sampling rate (frames per second) of the external format.
pub const SAMPLING_RATE: f32 = 30.0;

/// Fixed-cadence sample clock over a host frame interval. When the host rate
/// differs from the canonical rate the interval is resampled at fractional
/// host frames; the mismatch is recoverable and only logged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleClock {
    start: f32,
    end: f32,
    step: f32,
    count: u32,
}

impl SampleClock {
    pub fn new(frame_start: u32, frame_end: u32, host_rate: f32) -> Result<Self, TranscodeError> {
        if frame_end <= frame_start {
            return Err(TranscodeError::EmptyInterval {
                start: frame_start,
                end: frame_end,
            });
        }

        let step = host_rate / SAMPLING_RATE;
        let mut steps = (frame_end - frame_start) as f32;
        if host_rate != SAMPLING_RATE {
            steps = (steps / step).round();
            log::warn!(
                "host frame rate {host_rate} fps differs from the canonical {SAMPLING_RATE} fps; \
                 resampling at the nearest possible rate"
            );
        }

        Ok(Self {
            start: frame_start as f32,
            end: frame_end as f32,
            step,
            count: steps as u32 + 1,
        })
    }

    /// Number of samples, inclusive of both interval ends.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Host frame (possibly fractional) for sample `i`.
    #[inline]
    pub fn frame_at(&self, i: u32) -> f32 {
        self.start + i as f32 * self.step
    }

    /// Remap a host marker frame onto the sampled-index timeline, or None
    /// when the marker lies outside the interval.
    pub fn remap_marker(&self, frame: f32) -> Option<f32> {
        if frame >= self.start && frame <= self.end {
            Some((frame - self.start) / self.step + 1.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_rate_samples_every_frame() {
        let clock = SampleClock::new(10, 40, SAMPLING_RATE).unwrap();
        assert_eq!(clock.count(), 31);
        assert_eq!(clock.frame_at(0), 10.0);
        assert_eq!(clock.frame_at(30), 40.0);
    }

    #[test]
    fn mismatched_rate_resamples_at_fractional_frames() {
        let clock = SampleClock::new(0, 60, 60.0).unwrap();
        assert_eq!(clock.count(), 31);
        assert_eq!(clock.frame_at(1), 2.0);
        assert_eq!(clock.frame_at(30), 60.0);
    }

    #[test]
    fn marker_remap_counts_from_interval_start() {
        let clock = SampleClock::new(10, 40, SAMPLING_RATE).unwrap();
        assert_eq!(clock.remap_marker(25.0), Some(16.0));
        assert_eq!(clock.remap_marker(5.0), None);
        assert_eq!(clock.remap_marker(45.0), None);
    }

    #[test]
    fn empty_interval_is_rejected() {
        assert!(matches!(
            SampleClock::new(5, 5, SAMPLING_RATE),
            Err(TranscodeError::EmptyInterval { start: 5, end: 5 })
        ));
    }
}
