/// Fixed-interval tick source with an explicit start/stop handle.
///
/// Poll-driven: the frame loop feeds elapsed wall-clock time into
/// `advance`, which reports how many whole intervals passed. Because the
/// timer only fires from `advance` on the calling thread, `stop` is
/// synchronous; once it returns, no further tick can be observed.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval_ms: f64,
    elapsed_ms: f64,
    running: bool,
}

impl TickTimer {
    /// Creates a stopped timer.
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Starts (or restarts) the timer from a zeroed accumulator.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.running = true;
    }

    /// Stops the timer. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the accumulator and returns the number of ticks that
    /// elapsed. A stalled frame can report more than one; a stopped
    /// timer always reports zero.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.running || self.interval_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let fired = (self.elapsed_ms / self.interval_ms).floor();
        self.elapsed_ms -= fired * self.interval_ms;
        fired as u32
    }
}
