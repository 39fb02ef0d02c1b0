use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct GateMetrics {
    pub raised: AtomicU64,
    pub allowed: AtomicU64,
    pub denied: AtomicU64,
    pub timed_out: AtomicU64,
    pub invalid: AtomicU64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateMetricsSnapshot {
    pub raised: u64,
    pub allowed: u64,
    pub denied: u64,
    pub timed_out: u64,
    pub invalid: u64,
}

impl GateMetrics {
    pub fn snapshot(&self) -> GateMetricsSnapshot {
        GateMetricsSnapshot {
            raised: self.raised.load(Ordering::Relaxed),
            allowed: self.allowed.load(Ordering::Relaxed),
            denied: self.denied.load(Ordering::Relaxed),
            timed_out: self.timed_out.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
        }
    }
}
