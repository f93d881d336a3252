#[derive(Debug, Clone)]
pub struct Averager {
    mean: f64,
    count: u64,
}

impl Averager {
    /// Builds new empty Averager
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
        }
    }

    /// Push new value into [Averager]. Non finite values (NaN,
    /// infinities from a malformed driver report) are dropped so a
    /// single bad sample cannot corrupt the mean.
    pub fn add(&mut self, x: f64) {
        if !x.is_finite() {
            return;
        }
        self.count += 1;
        let k = self.count as f64;
        self.mean = x / k + self.mean * (k - 1.0) / k;
    }

    /// Current mean, None when no valid sample was accumulated.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }

    /// Number of accumulated (valid) samples.
    pub fn count(&self) -> u64 {
        self.count
    }
}
