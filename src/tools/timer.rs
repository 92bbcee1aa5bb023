use std::time::{Duration, Instant};

use log::info;

/// Accumulates wall-clock time per named stage. Each call to mark() charges the time since
/// the previous mark to the label given.
#[derive(Debug)]
pub struct Timer {
    last: Instant,
    stages: Vec<(&'static str, Duration)>,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            stages: Vec::new(),
        }
    }

    /// Charge the time since the last mark to `stage`.
    pub fn mark(&mut self, stage: &'static str) {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        match self.stages.iter_mut().find(|(s, _)| *s == stage) {
            Some((_, total)) => *total += elapsed,
            None => self.stages.push((stage, elapsed)),
        }
    }

    /// Time charged to `stage` so far.
    pub fn elapsed(&self, stage: &str) -> Duration {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, d)| *d)
            .unwrap_or_default()
    }

    /// Time charged to all stages.
    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, d)| *d).sum()
    }

    /// Log each stage in the order first seen, then the total.
    pub fn report(&self) {
        for (stage, d) in &self.stages {
            info!("{:>20}: {:>10.3} ms", stage, d.as_secs_f64() * 1000.0);
        }
        info!("{:>20}: {:>10.3} ms", "total", self.total().as_secs_f64() * 1000.0);
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::Timer;
    use std::time::Duration;

    #[test]
    fn marks_accumulate_per_stage() {
        let mut timer = Timer::new();
        timer.mark("setup");
        std::thread::sleep(Duration::from_millis(2));
        timer.mark("mtf");
        std::thread::sleep(Duration::from_millis(2));
        timer.mark("mtf");
        assert!(timer.elapsed("mtf") >= Duration::from_millis(4));
        assert_eq!(timer.elapsed("huffman"), Duration::ZERO);
        assert!(timer.total() >= timer.elapsed("mtf"));
    }
}
