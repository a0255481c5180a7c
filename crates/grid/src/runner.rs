//! Polling loop driving [`Program::tick`] at the configured frequency.

use std::sync::Arc;

use tokio::sync::Notify;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::host::GridTerminalSystem;
use crate::program::{Program, TickReport};

/// Run `program` against `host` until shutdown or the tick budget runs out.
///
/// `on_tick` sees every report. [`UpdateFrequency::Once`] runs a single
/// tick. Returns the number of ticks run.
///
/// [`UpdateFrequency::Once`]: crate::frequency::UpdateFrequency::Once
pub async fn run<H, F>(
    program: &mut Program,
    host: &mut H,
    shutdown: Arc<Notify>,
    mut on_tick: F,
) -> u64
where
    H: GridTerminalSystem + ?Sized,
    F: FnMut(&TickReport),
{
    let frequency = program.config().update_frequency;
    let Some(period) = frequency.period() else {
        on_tick(&program.tick(host));
        return program.ticks();
    };

    info!(?frequency, period_ms = period.as_millis() as u64, "stock board started");

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !program.finished() {
        tokio::select! {
            _ = shutdown.notified() => {
                info!("stock board received shutdown signal");
                break;
            }
            _ = ticker.tick() => {
                on_tick(&program.tick(host));
            }
        }
    }

    info!(ticks = program.ticks(), "stock board stopped");
    program.ticks()
}
