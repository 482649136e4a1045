//! Sweep counters
//!
//! Per-tick reports and cumulative totals. Failures used to vanish
//! silently; they are now counted here and readable while the sweeper runs.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Outcome of a single sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Participants found stale by the scan
    pub scanned: usize,
    /// Participants deleted, each with a departure notice
    pub evicted: usize,
    /// Stale at scan time but refreshed before the delete
    pub skipped: usize,
    /// Evictions that failed in the store
    pub failed: usize,
}

/// Snapshot of [`SweepStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepTotals {
    pub ticks: u64,
    pub evicted: u64,
    pub failed: u64,
    pub scan_failures: u64,
}

/// Cumulative counters across all ticks
#[derive(Debug, Default)]
pub struct SweepStats {
    ticks: AtomicU64,
    evicted: AtomicU64,
    failed: AtomicU64,
    scan_failures: AtomicU64,
}

impl SweepStats {
    pub fn record(&self, report: &SweepReport) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
        self.evicted.fetch_add(report.evicted as u64, Ordering::Relaxed);
        self.failed.fetch_add(report.failed as u64, Ordering::Relaxed);
    }

    pub fn record_scan_failure(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
        self.scan_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn totals(&self) -> SweepTotals {
        SweepTotals {
            ticks: self.ticks.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            scan_failures: self.scan_failures.load(Ordering::Relaxed),
        }
    }
}
