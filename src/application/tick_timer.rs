/// Frame-time accumulator that fires at a fixed rate.
/// At most one tick per frame, so a slow frame never triggers a burst of generations.
#[derive(Clone, Debug)]
pub struct TickTimer {
    interval: f32,
    elapsed: f32,
}

impl TickTimer {
    pub fn new(ticks_per_second: f32) -> Self {
        Self {
            interval: 1.0 / ticks_per_second.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Add a frame's duration; true when a tick is due
    pub fn advance(&mut self, delta_time: f32) -> bool {
        self.elapsed += delta_time;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_interval_elapses() {
        let mut timer = TickTimer::new(10.0);
        assert!(!timer.advance(0.05));
        assert!(timer.advance(0.06));
        assert!(!timer.advance(0.01));
    }

    #[test]
    fn test_long_frame_fires_only_once() {
        let mut timer = TickTimer::new(10.0);
        assert!(timer.advance(1.0));
        assert!(!timer.advance(0.0));
    }

    #[test]
    fn test_reset_discards_progress() {
        let mut timer = TickTimer::new(4.0);
        timer.advance(0.2);
        timer.reset();
        assert!(!timer.advance(0.2));
    }
}
