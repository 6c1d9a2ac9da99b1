/// Fixed-rate step scheduler, fed with the clock on every frame.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f64,
    last_tick: f64,
}

impl Ticker {
    pub fn new(interval: f64, now: f64) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// True at most once per call. Ticks stay on a fixed grid of
    /// `interval`, so a late frame does not push the next tick back; when a
    /// whole interval has been missed the grid restarts at `now` instead of
    /// replaying the backlog.
    pub fn ready(&mut self, now: f64) -> bool {
        if now - self.last_tick < self.interval {
            return false;
        }
        self.last_tick += self.interval;
        if now - self.last_tick >= self.interval {
            self.last_tick = now;
        }
        true
    }

    /// Restart the interval from `now`, e.g. after the game was suspended
    pub fn reset(&mut self, now: f64) {
        self.last_tick = now;
    }
}
