//! Moderator-list request tracking and response parsing.
//!
//! Twitch answers a `.mods` request asynchronously, so the dispatcher has to
//! remember which channels have a silent (background) request outstanding.
//! The tracker also records which channels the auto-poller already covered,
//! so each channel is polled at most once per session.

use dashmap::DashSet;

/// Channel keys are case-insensitive; everything is tracked lowercased.
fn normalize(channel: &str) -> String {
    channel.to_ascii_lowercase()
}

/// Thread-safe tracking state for moderator-list requests.
///
/// Two independent flags per channel: whether a silent request is pending,
/// and whether the channel was already auto-polled. Both sets are created
/// empty and live only for one connection; the owner clears them on
/// part/disconnect.
#[derive(Debug, Default)]
pub struct ModsTracker {
    /// Channels currently waiting for a `.mods` response that should be
    /// silent (no message output).
    silent_pending: DashSet<String>,
    /// Channels the moderator list has already been requested for.
    already_polled: DashSet<String>,
}

impl ModsTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a silent moderator-list request was sent for the channel.
    /// Idempotent.
    pub fn mark_silent_pending(&self, channel: &str) {
        self.silent_pending.insert(normalize(channel));
    }

    /// Remove the channel's pending-silent flag and report whether it was
    /// set. This is the only way the response handler learns whether a
    /// moderator-list reply should be suppressed.
    pub fn consume_silent_pending(&self, channel: &str) -> bool {
        self.silent_pending.remove(&normalize(channel)).is_some()
    }

    /// Whether any silent request is still outstanding.
    pub fn has_pending_silent(&self) -> bool {
        !self.silent_pending.is_empty()
    }

    /// Record that the channel has been auto-polled.
    pub fn mark_polled(&self, channel: &str) {
        self.already_polled.insert(normalize(channel));
    }

    /// Whether the channel has been auto-polled since the last clear.
    pub fn is_polled(&self, channel: &str) -> bool {
        self.already_polled.contains(&normalize(channel))
    }

    /// Forget that a channel was polled, or all of them when `channel` is
    /// `None`. Called on part and disconnect, since moderator state is
    /// discarded there as well.
    pub fn clear_polled(&self, channel: Option<&str>) {
        match channel {
            Some(channel) => {
                self.already_polled.remove(&normalize(channel));
            }
            None => self.already_polled.clear(),
        }
    }
}

/// Parse the moderator list as returned by Twitch Chat.
///
/// The comma-separated list starts after the first colon ("The moderators of
/// this room are: .."). Returns an empty list when there is no colon, the
/// colon starts the text, or nothing follows it.
pub fn parse_mods_list(text: &str) -> Vec<String> {
    let Some(start) = text.find(':').filter(|&i| i > 0) else {
        return Vec::new();
    };
    let rest = &text[start + 1..];
    if rest.trim().is_empty() {
        return Vec::new();
    }
    rest.split(',').map(|name| name.trim().to_string()).collect()
}
