//! External collaborator boundary.
//!
//! The command core never talks to the network itself; everything it needs
//! from the transport/connection layer is behind the [`Connection`] trait.
//! All sends are fire-and-forget: backpressure and rate limiting belong to
//! the transport.

/// Formats a duration given in seconds into a human-readable string
/// (e.g. `"1m"`, `"2h 30m"`). Injected into [`crate::ModCommands`] so the
/// timeout echo can show both raw seconds and the friendly form.
pub type DurationFormatter = fn(u64) -> String;

/// Interface to the chat connection that owns channel membership and
/// actually sends bytes.
///
/// Implementations must be safe to call concurrently from the user-input
/// path, the message-receiving path, and the auto-poll scheduler task.
pub trait Connection: Send + Sync {
    /// Whether the given channel is currently joined. With
    /// `require_message_capable` the channel must additionally allow
    /// outbound chat messages right now.
    fn is_on_channel(&self, channel: &str, require_message_capable: bool) -> bool;

    /// Send a command message to the channel. `echo` is the locally-displayed
    /// text; the transport does not print it, the caller's context does.
    fn send_chat_message(&self, channel: &str, message: &str, echo: &str);

    /// Send a message through the transport's spam-protection delay.
    /// Used only for moderator-list requests; `silent` marks the eventual
    /// response as not-for-display.
    fn send_rate_limited_message(&self, channel: &str, message: &str, silent: bool);

    /// Snapshot of the currently joined channels. May be stale by the time
    /// it is used.
    fn joined_channels(&self) -> Vec<String>;

    /// Settings flag: whether background moderator-list polling is enabled.
    fn auto_mods_request_enabled(&self) -> bool;

    /// Print an informational line to the user, scoped to a channel or
    /// global when `channel` is `None`.
    fn print_system_message(&self, channel: Option<&str>, text: &str);
}
