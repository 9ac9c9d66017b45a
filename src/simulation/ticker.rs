use super::phase::SimulationData;

/// Advances the simulated month on a fixed wall-clock interval while playing.
///
/// Time only accumulates while the play flag is set; on each advance the
/// accumulator restarts from zero, so any overshoot is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTicker {
    pub interval_ms: i64,
    pub elapsed_ms: i64,
    last_tick: Option<i64>,
}

impl MonthTicker {
    pub fn new(interval_ms: i64) -> Self {
        Self { interval_ms, elapsed_ms: 0, last_tick: None }
    }

    pub fn tick(&mut self, now: i64, data: &mut SimulationData) -> Option<u8> {
        let delta = self.last_tick.map_or(0, |last| (now - last).max(0));
        self.last_tick = Some(now);
        if !data.is_playing {
            return None;
        }
        self.elapsed_ms += (delta as f64 * data.speed).round() as i64;
        if self.elapsed_ms < self.interval_ms {
            return None;
        }
        self.elapsed_ms = 0;
        data.advance_month()
    }

    /// Moves the reference point without accumulating anything.
    pub fn skip(&mut self, now: i64) {
        self.last_tick = Some(now);
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn playing() -> SimulationData {
        SimulationData { is_playing: true, ..Default::default() }
    }

    #[test]
    fn advances_every_interval() {
        let mut ticker = MonthTicker::new(2000);
        let mut data = playing();
        assert_eq!(ticker.tick(0, &mut data), None);
        assert_eq!(ticker.tick(1000, &mut data), None);
        assert_eq!(ticker.tick(2000, &mut data), Some(2));
        assert_eq!(ticker.tick(3999, &mut data), None);
        assert_eq!(ticker.tick(4000, &mut data), Some(3));
    }

    #[test]
    fn overshoot_is_dropped() {
        let mut ticker = MonthTicker::new(2000);
        let mut data = playing();
        ticker.tick(0, &mut data);
        assert_eq!(ticker.tick(5000, &mut data), Some(2));
        assert_eq!(ticker.elapsed_ms, 0);
        assert_eq!(ticker.tick(6000, &mut data), None);
    }

    #[test]
    fn paused_time_does_not_count() {
        let mut ticker = MonthTicker::new(2000);
        let mut data = playing();
        ticker.tick(0, &mut data);
        ticker.tick(1500, &mut data);
        data.is_playing = false;
        assert_eq!(ticker.tick(10_000, &mut data), None);
        data.is_playing = true;
        assert_eq!(ticker.tick(10_400, &mut data), None);
        assert_eq!(ticker.tick(10_500, &mut data), Some(2));
    }

    #[test]
    fn stops_at_december() {
        let mut ticker = MonthTicker::new(10);
        let mut data = SimulationData { current_month: 12, ..playing() };
        ticker.tick(0, &mut data);
        assert_eq!(ticker.tick(10, &mut data), None);
        assert_eq!(data.current_month, 12);
    }

    #[test]
    fn speed_scales_elapsed() {
        let mut ticker = MonthTicker::new(2000);
        let mut data = SimulationData { speed: 2., ..playing() };
        ticker.tick(0, &mut data);
        assert_eq!(ticker.tick(1000, &mut data), Some(2));
    }
}
