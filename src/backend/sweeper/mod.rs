//! Inactivity Sweeper
//!
//! A recurring background task that evicts participants whose last
//! heartbeat is older than the inactivity tolerance, appending a departure
//! notice (`status`, `sai da sala...`, to `Todos`) for each one.
//!
//! # Tick
//!
//! Every tick goes Idle → Scanning → Evicting → Idle:
//!
//! 1. **Scan**: fetch participants with `lastStatus < now - tolerance`
//! 2. **Evict**: for each one, delete it and append its notice in one store
//!    transaction; evictions run concurrently up to the configured bound
//! 3. **Done**: the tick ends when every eviction has finished
//!
//! An eviction that fails is logged and counted. It is not retried, it does
//! not undo evictions already done in the same tick and it never stops the
//! task.
//!
//! # Heartbeat race
//!
//! A heartbeat and an eviction for the same participant may interleave.
//! The delete is conditional on the record still being stale, so a
//! heartbeat that commits first keeps the participant; one that arrives
//! after the delete gets a 404 and the client has to join again. Which of
//! the two happens is not deterministic.
//!
//! # Lifecycle
//!
//! [`Sweeper::spawn`] starts the task on its own tokio task;
//! [`Sweeper::shutdown`] stops further ticks and waits for a tick in flight
//! to finish.

/// Sweep counters
pub mod stats;

use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::backend::store::{Store, StoreError};
use crate::shared::participant::now_millis;
use crate::shared::NewMessage;

pub use stats::{SweepReport, SweepStats, SweepTotals};

/// Timing and parallelism of the sweeper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweeperConfig {
    /// Time between two ticks
    pub interval: Duration,
    /// Heartbeat age after which a participant is evicted
    pub tolerance: Duration,
    /// Evictions run in parallel within one tick
    pub concurrency: usize,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(15_000),
            tolerance: Duration::from_millis(10_000),
            concurrency: 8,
        }
    }
}

/// Run one sweep at time `now` (Unix milliseconds)
///
/// Returns an error only when the scan itself fails; individual eviction
/// failures are reported in the returned [`SweepReport`].
pub async fn sweep_once(
    store: &Store,
    now: i64,
    tolerance: Duration,
    concurrency: usize,
) -> Result<SweepReport, StoreError> {
    let cutoff = now.saturating_sub(i64::try_from(tolerance.as_millis()).unwrap_or(i64::MAX));
    let stale = store.participants().find_stale(cutoff).await?;

    let mut report = SweepReport {
        scanned: stale.len(),
        ..SweepReport::default()
    };
    if stale.is_empty() {
        return Ok(report);
    }

    let outcomes: Vec<_> = stream::iter(stale)
        .map(|participant| async move {
            let outcome = store
                .evict(&participant.name, cutoff, &NewMessage::left(&participant.name))
                .await;
            (participant, outcome)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    for (participant, outcome) in outcomes {
        match outcome {
            Ok(Some(_)) => {
                tracing::info!(name = %participant.name, last_status = participant.last_status, "evicted inactive participant");
                report.evicted += 1;
            }
            Ok(None) => {
                tracing::debug!(name = %participant.name, "participant refreshed before eviction");
                report.skipped += 1;
            }
            Err(e) => {
                tracing::warn!(name = %participant.name, error = %e, "failed to evict participant");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

/// Handle to the running sweeper task
#[derive(Debug)]
pub struct Sweeper {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
    stats: Arc<SweepStats>,
}

impl Sweeper {
    /// Start sweeping `store` every `config.interval`
    ///
    /// The first sweep happens one full interval after spawning.
    pub fn spawn(store: Store, config: SweeperConfig) -> Self {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let stats = Arc::new(SweepStats::default());

        tracing::info!(
            interval_ms = config.interval.as_millis() as u64,
            tolerance_ms = config.tolerance.as_millis() as u64,
            concurrency = config.concurrency,
            "starting inactivity sweeper"
        );

        let handle = tokio::spawn(run(store, config, Arc::clone(&stats), shutdown_rx));

        Self {
            shutdown,
            handle,
            stats,
        }
    }

    /// Counters shared with the running task
    pub fn stats(&self) -> Arc<SweepStats> {
        Arc::clone(&self.stats)
    }

    /// Stop ticking and wait for the tick in flight, if any
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.handle.await {
            tracing::error!(error = %e, "inactivity sweeper task ended abnormally");
        }
        let totals = self.stats.totals();
        tracing::info!(
            ticks = totals.ticks,
            evicted = totals.evicted,
            failed = totals.failed,
            "inactivity sweeper stopped"
        );
    }
}

async fn run(
    store: Store,
    config: SweeperConfig,
    stats: Arc<SweepStats>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(config.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = interval.tick() => {}
        }

        match sweep_once(&store, now_millis(), config.tolerance, config.concurrency).await {
            Ok(report) => {
                stats.record(&report);
                if report.evicted > 0 || report.failed > 0 {
                    tracing::info!(
                        scanned = report.scanned,
                        evicted = report.evicted,
                        skipped = report.skipped,
                        failed = report.failed,
                        "inactivity sweep finished"
                    );
                } else {
                    tracing::trace!(scanned = report.scanned, "inactivity sweep finished");
                }
            }
            Err(e) => {
                stats.record_scan_failure();
                tracing::error!(error = %e, "inactivity sweep scan failed");
            }
        }
    }
}
