/// Accumulates whole seconds from timer ticks without touching the
/// store. The accumulated time reaches the store only through the value
/// returned by [`Stopwatch::stop`]; a reset discards it, which is the
/// intended cancellation behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    accumulated_secs: u64,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// One timer tick. Ignored while stopped.
    pub fn tick(&mut self, seconds: u64) {
        if self.running {
            self.accumulated_secs += seconds;
        }
    }

    /// Stops the watch and drains the accumulation, rounded up to whole
    /// minutes. Returns zero when nothing was accumulated.
    pub fn stop(&mut self) -> u32 {
        self.running = false;
        let minutes = self.accumulated_secs.div_ceil(60);
        self.accumulated_secs = 0;
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }

    pub fn reset(&mut self) {
        self.accumulated_secs = 0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn accumulated_secs(&self) -> u64 {
        self.accumulated_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_minutes_round_up_on_stop() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick(125);
        assert_eq!(watch.stop(), 3);
    }

    #[test]
    fn stopping_idle_watch_flushes_zero() {
        let mut watch = Stopwatch::new();
        assert_eq!(watch.stop(), 0);
    }

    #[test]
    fn ticks_while_stopped_are_ignored() {
        let mut watch = Stopwatch::new();
        watch.tick(90);
        assert_eq!(watch.accumulated_secs(), 0);
    }

    #[test]
    fn reset_discards_the_accumulation() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick(500);
        watch.reset();
        assert_eq!(watch.stop(), 0);
    }

    #[test]
    fn stop_drains_the_accumulation() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick(60);
        assert_eq!(watch.stop(), 1);
        watch.start();
        assert_eq!(watch.stop(), 0);
    }
}
