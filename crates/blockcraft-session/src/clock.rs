/// Turns animation-frame timestamps into integration steps.
///
/// Deltas are clamped to `max_delta` so a long pause (a backgrounded tab)
/// does not produce one huge physics step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_delta: f32,
    last_timestamp_ms: Option<f64>,
    clamped_frames: u64,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            max_delta,
            last_timestamp_ms: None,
            clamped_frames: 0,
        }
    }

    /// Clamp a raw delta in seconds into `[0, max_delta]`.
    pub fn clamp(&mut self, raw_seconds: f32) -> f32 {
        if raw_seconds.is_nan() || raw_seconds <= 0.0 {
            return 0.0;
        }
        if raw_seconds > self.max_delta {
            self.clamped_frames += 1;
            log::warn!(
                "Frame delta {:.3}s clamped to {:.3}s",
                raw_seconds,
                self.max_delta
            );
            return self.max_delta;
        }
        raw_seconds
    }

    /// Step from a millisecond timestamp. The first call returns 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let raw = match self.last_timestamp_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        self.clamp(raw)
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// How many frames have been clamped so far.
    pub fn clamped_frames(&self) -> u64 {
        self.clamped_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_delta_passes_through() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.clamp(0.016), 0.016);
        assert_eq!(clock.clamped_frames(), 0);
    }

    #[test]
    fn test_large_delta_clamped() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.clamp(5.0), 0.1);
        assert_eq!(clock.clamped_frames(), 1);
    }

    #[test]
    fn test_negative_and_nan_become_zero() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.clamp(-1.0), 0.0);
        assert_eq!(clock.clamp(f32::NAN), 0.0);
    }

    #[test]
    fn test_advance_from_timestamps() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(1000.0), 0.0);
        let dt = clock.advance(1020.0);
        assert!((dt - 0.02).abs() < 1e-6);
        // Tab came back after ten seconds.
        assert_eq!(clock.advance(11020.0), 0.1);
    }
}
