use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-endpoint request counters. Atomics only; handlers share nothing else.
pub struct Metrics {
    analyze_requests: AtomicUsize,
    search_requests: AtomicUsize,
    fetch_requests: AtomicUsize,
    rejected_requests: AtomicUsize,
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub analyze_requests: usize,
    pub search_requests: usize,
    pub fetch_requests: usize,
    pub rejected_requests: usize,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            analyze_requests: AtomicUsize::new(0),
            search_requests: AtomicUsize::new(0),
            fetch_requests: AtomicUsize::new(0),
            rejected_requests: AtomicUsize::new(0),
        })
    }

    pub fn record_analyze(&self) {
        self.analyze_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self) {
        self.search_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch(&self) {
        self.fetch_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// A request dropped by field validation before reaching a component.
    pub fn record_rejected(&self) {
        self.rejected_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            analyze_requests: self.analyze_requests.load(Ordering::Relaxed),
            search_requests: self.search_requests.load(Ordering::Relaxed),
            fetch_requests: self.fetch_requests.load(Ordering::Relaxed),
            rejected_requests: self.rejected_requests.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = Metrics::new();
        metrics.record_analyze();
        metrics.record_analyze();
        metrics.record_fetch();
        metrics.record_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.analyze_requests, 2);
        assert_eq!(snapshot.search_requests, 0);
        assert_eq!(snapshot.fetch_requests, 1);
        assert_eq!(snapshot.rejected_requests, 1);
    }
}
