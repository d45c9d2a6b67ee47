use web_time::Instant;

/// Wall-clock time of a single game, frozen once the game ends.
#[derive(Copy, Clone, Debug)]
pub struct Stopwatch {
    started_at: Instant,
    stopped_at: Option<Instant>,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub(crate) fn started_at(started_at: Instant) -> Self {
        Self {
            started_at,
            stopped_at: None,
        }
    }

    pub fn stop(&mut self) {
        self.stopped_at.get_or_insert_with(Instant::now);
    }

    pub fn is_running(&self) -> bool {
        self.stopped_at.is_none()
    }

    /// Whole seconds since start, or until stop if stopped.
    pub fn elapsed_secs(&self) -> u32 {
        let end = self.stopped_at.unwrap_or_else(Instant::now);
        let secs = end.saturating_duration_since(self.started_at).as_secs();
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    #[test]
    fn fresh_stopwatch_reads_zero() {
        let stopwatch = Stopwatch::start();
        assert!(stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_secs(), 0);
    }

    #[test]
    fn backdated_stopwatch_counts_whole_seconds() {
        let started = Instant::now()
            .checked_sub(Duration::from_millis(2500))
            .unwrap();
        let mut stopwatch = Stopwatch::started_at(started);
        stopwatch.stop();

        assert_eq!(stopwatch.elapsed_secs(), 2);
    }

    #[test]
    fn stop_freezes_reading() {
        let mut stopwatch = Stopwatch::start();
        stopwatch.stop();
        let frozen = stopwatch.stopped_at;

        stopwatch.stop();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.stopped_at, frozen);
        assert_eq!(stopwatch.elapsed_secs(), 0);
    }
}
