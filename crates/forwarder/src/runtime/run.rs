//! Run — the scheduling loop.
//!
//! One poll cycle runs to completion per tick; cycles never overlap and
//! there is no per-file concurrency, so deletion and re-listing cannot
//! race each other. The loop checks the shutdown future every iteration
//! and flushes the sink exactly once on the way out.

use std::future::Future;

use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use crate::conf::ForwarderConfig;
use crate::poll;
use crate::sink::{LogSink, TracingSink};

use super::stop;

/// Cycles between summary lines (~1 minute at the default 5s interval).
const SUMMARY_EVERY: u64 = 12;

/// Forward until the process receives a shutdown signal.
pub async fn run(config: ForwarderConfig) -> Result<(), Box<dyn std::error::Error>> {
    let sink = TracingSink;
    run_until(&config, &sink, stop::shutdown_signal()).await;
    Ok(())
}

/// Forward until `shutdown` resolves.
///
/// Split out from [`run`] so tests can drive the loop with a controlled
/// sink and a controlled stop condition.
pub async fn run_until<F>(config: &ForwarderConfig, sink: &dyn LogSink, shutdown: F)
where
    F: Future<Output = ()>,
{
    let mut interval = time::interval(config.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    let mut cycles: u64 = 0;
    let mut forwarded: u64 = 0;

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,
            _ = interval.tick() => {
                cycles = cycles.saturating_add(1);
                let stats = poll::run_cycle(config, sink).await;
                forwarded = forwarded.saturating_add(stats.dispatched as u64);

                if cycles % SUMMARY_EVERY == 0 {
                    info!(
                        "Poll cycle #{}: {} messages forwarded so far",
                        cycles, forwarded
                    );
                }
            }
        }
    }

    info!("Stopping after {} cycles, flushing log sink", cycles);
    sink.flush();
}
