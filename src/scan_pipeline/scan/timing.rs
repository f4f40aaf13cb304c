use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug_span;

/// Wall-clock duration of each scan stage, in execution order.
///
/// Stages run through [`PipelineTimings::time`], which also enters a
/// `scan_stage` span so subscribers with span close events see the same
/// breakdown in the log.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    stages: Vec<(&'static str, Duration)>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `stage` inside a span and records how long it took. A stage that
    /// returns an error is still recorded.
    pub fn time<T>(&mut self, name: &'static str, stage: impl FnOnce() -> T) -> T {
        let _span = debug_span!("scan_stage", stage = name).entered();
        let start = Instant::now();
        let out = stage();
        self.stages.push((name, start.elapsed()));
        out
    }

    pub fn total_duration(&self) -> Duration {
        self.stages.iter().map(|(_, d)| *d).sum()
    }

    /// Summed duration of every run of `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.stages
            .iter()
            .filter(|(n, _)| *n == name)
            .map(|(_, d)| *d)
            .reduce(|a, b| a + b)
    }

    pub fn steps(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.stages.iter().copied()
    }
}

impl fmt::Display for PipelineTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_duration().as_secs_f64();
        writeln!(f, "Scan timings")?;
        for (name, duration) in &self.stages {
            let secs = duration.as_secs_f64();
            let share = if total > 0.0 { secs / total * 100.0 } else { 0.0 };
            writeln!(f, "  {:<22}{:>10.3}ms {:>5.1}%", name, secs * 1000.0, share)?;
        }
        write!(f, "  {:<22}{:>10.3}ms", "total", total * 1000.0)
    }
}
