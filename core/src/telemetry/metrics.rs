use std::sync::Mutex;

/// Counts layers built and rejected by one runner.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    built: usize,
    rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                built: 0,
                rejected: 0,
            }),
        }
    }

    pub fn record_built(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.built += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    /// Returns `(built, rejected)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.built, metrics.rejected)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
