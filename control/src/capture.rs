//! Edge-driven pulse width capture
//!
//! Tracks the HIGH phase of one PWM input. A rising edge starts a
//! measurement, the following falling edge completes it. A falling edge with
//! no measurement in progress is ignored.

/// Logic transition seen on a capture input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// Capture state of one PWM input
#[derive(Debug, Default)]
pub struct PulseCapture {
    /// Timestamp of the pending rising edge, `None` when idle
    rise_at_us: Option<u64>,
}

impl PulseCapture {
    pub const fn new() -> Self {
        Self { rise_at_us: None }
    }

    /// Feeds one edge observed at `now_us`
    ///
    /// Returns the completed HIGH-phase width on a falling edge that closes a
    /// measurement. Widths that do not fit in 16 bits saturate.
    pub fn on_edge(&mut self, edge: Edge, now_us: u64) -> Option<u16> {
        match edge {
            Edge::Rising => {
                self.rise_at_us = Some(now_us);
                None
            }
            Edge::Falling => {
                let rise_at_us = self.rise_at_us.take()?;
                let width_us = now_us.saturating_sub(rise_at_us);
                Some(u16::try_from(width_us).unwrap_or(u16::MAX))
            }
        }
    }

    /// Whether a rising edge is waiting for its falling edge
    pub fn in_progress(&self) -> bool {
        self.rise_at_us.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_then_falling_measures_width() {
        let mut capture = PulseCapture::new();
        assert_eq!(capture.on_edge(Edge::Rising, 10_000), None);
        assert!(capture.in_progress());
        assert_eq!(capture.on_edge(Edge::Falling, 11_600), Some(1600));
        assert!(!capture.in_progress());
    }

    #[test]
    fn test_spurious_falling_edge_ignored() {
        let mut capture = PulseCapture::new();
        assert_eq!(capture.on_edge(Edge::Falling, 500), None);

        capture.on_edge(Edge::Rising, 1_000);
        capture.on_edge(Edge::Falling, 2_500);
        // second falling edge without a new rise
        assert_eq!(capture.on_edge(Edge::Falling, 3_000), None);
    }

    #[test]
    fn test_rise_at_time_zero_counts() {
        let mut capture = PulseCapture::new();
        capture.on_edge(Edge::Rising, 0);
        assert_eq!(capture.on_edge(Edge::Falling, 1_400), Some(1400));
    }

    #[test]
    fn test_repeated_rise_restarts_measurement() {
        let mut capture = PulseCapture::new();
        capture.on_edge(Edge::Rising, 1_000);
        capture.on_edge(Edge::Rising, 5_000);
        assert_eq!(capture.on_edge(Edge::Falling, 6_500), Some(1500));
    }

    #[test]
    fn test_overlong_pulse_saturates() {
        let mut capture = PulseCapture::new();
        capture.on_edge(Edge::Rising, 0);
        assert_eq!(capture.on_edge(Edge::Falling, 1_000_000), Some(u16::MAX));
    }
}
