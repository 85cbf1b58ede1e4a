//! Moderator-list auto-poll background task.
//!
//! Walks the joined-channel list and requests the `/mods` list for one new
//! channel per tick, bounding the outbound request rate no matter how many
//! channels are joined. Channels already covered stay covered until the
//! owner clears them on part or disconnect.

use crate::config::AutoPollConfig;
use crate::conn::Connection;
use crate::dispatch::ModCommands;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawn the auto-poll background task.
///
/// First tick after `initial_delay_ms`, then one tick every `interval_secs`
/// for the lifetime of the session. Each tick defers to
/// [`ModCommands::auto_request_mods`], which is a no-op when the feature is
/// disabled in the settings or every joined channel has been polled.
///
/// Abort the returned handle on teardown; an in-flight tick may still
/// complete, but no further ticks fire.
pub fn spawn_autopoll<C: Connection + 'static>(
    commands: Arc<ModCommands<C>>,
    config: &AutoPollConfig,
) -> JoinHandle<()> {
    let start = tokio::time::Instant::now() + Duration::from_millis(config.initial_delay_ms);
    let period = Duration::from_secs(config.interval_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(start, period);
        // Fixed-delay pacing: a stalled task must not burst catch-up ticks,
        // each of which would poll another channel.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            commands.auto_request_mods();
        }
    })
}
