/// Cadence of diagnostic reports, in attempts.
pub const REPORT_INTERVAL: u64 = 1000;

/// Running success/attempt counters for one species. Updated only by the
/// growth path; read-only everywhere else. No internal locking.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrowthStats {
    attempts: u64,
    successes: u64,
}

/// Snapshot handed back on every `REPORT_INTERVAL`th attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthReport {
    pub attempts: u64,
    pub successes: u64,
    pub percent: f64,
}

impl GrowthStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    #[inline]
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Success percentage over all recorded attempts.
    pub fn percent(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.successes as f64 / self.attempts as f64 * 100.0
        }
    }

    /// Count one attempt; yields a report on every `REPORT_INTERVAL`th.
    pub fn record(&mut self, success: bool) -> Option<GrowthReport> {
        self.attempts += 1;
        if success {
            self.successes += 1;
        }
        (self.attempts % REPORT_INTERVAL == 0).then(|| GrowthReport {
            attempts: self.attempts,
            successes: self.successes,
            percent: self.percent(),
        })
    }
}
