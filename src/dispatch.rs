//! Command dispatcher.
//!
//! Top-level entry point: receives a parsed (channel, command, parameter)
//! triple, routes it through the descriptor table, validates and formats the
//! parameter, and hands the result to the connection. Also owns the
//! moderator-list tracker and the silent-request path the auto-poller and
//! `/fixmods` share.

use crate::command::{Action, ChannelCheck, CommandSpec, Registry};
use crate::command::{format_slowmode, format_target, format_timeout};
use crate::conn::{Connection, DurationFormatter};
use crate::error::CommandError;
use crate::mods::ModsTracker;
use crate::validate::validate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Moderation command core for one chat connection.
///
/// Cheap to share behind an [`Arc`]; all methods take `&self` and the
/// tracking state is safe for concurrent use from the user-input path, the
/// message-receiving path, and the auto-poll scheduler.
pub struct ModCommands<C: Connection> {
    conn: Arc<C>,
    registry: Registry,
    tracker: ModsTracker,
    format_duration: DurationFormatter,
}

impl<C: Connection> ModCommands<C> {
    /// Create the command core for a connection. `format_duration` renders
    /// timeout durations for the echo line.
    pub fn new(conn: Arc<C>, format_duration: DurationFormatter) -> Self {
        Self {
            conn,
            registry: Registry::new(),
            tracker: ModsTracker::new(),
            format_duration,
        }
    }

    /// Dispatch a user-issued command.
    ///
    /// Returns `false` for an unknown keyword, with no side effects, so an
    /// outer layer can try other interpretations. A recognized command always
    /// returns `true`, even when its parameter was rejected (a usage hint is
    /// printed) or the channel check failed (a silent no-op).
    pub fn command(&self, channel: &str, command: &str, parameter: Option<&str>) -> bool {
        let Some(spec) = self.registry.get(command) else {
            return false;
        };
        if let Err(err) = self.run(channel, spec, parameter) {
            match err {
                CommandError::Usage { usage } => {
                    self.conn.print_system_message(None, usage);
                }
                CommandError::NotOnChannel(channel) => {
                    debug!(%channel, %command, "dropping command, not on channel");
                }
                CommandError::Internal { usage, detail } => {
                    warn!(%command, %detail, "validator and formatter disagree on accepted grammar");
                    self.conn.print_system_message(None, usage);
                }
            }
        }
        true
    }

    fn run(
        &self,
        channel: &str,
        spec: &CommandSpec,
        parameter: Option<&str>,
    ) -> Result<(), CommandError> {
        let param = match spec.rule {
            Some(rule) => {
                Some(validate(rule, parameter).ok_or(CommandError::Usage { usage: spec.usage })?)
            }
            None => parameter.map(|p| p.trim().to_string()),
        };

        let (message, echo) = match spec.action {
            Action::Fixed { message, echo } => (message.to_string(), echo.to_string()),
            Action::Target {
                command,
                echo_prefix,
                echo_suffix,
            } => {
                // rule is always present for Target, so param is too
                let param = param.as_deref().unwrap_or_default();
                format_target(command, echo_prefix, echo_suffix, param)
            }
            Action::Slowmode => {
                let time = match param.as_deref().filter(|p| !p.is_empty()) {
                    None => 0,
                    Some(raw) => raw.parse::<i64>().map_err(|_| CommandError::Usage {
                        usage: "Usage: /slow [time] (invalid time specified)",
                    })?,
                };
                format_slowmode(time)
            }
            Action::Timeout => {
                let param = param.as_deref().unwrap_or_default();
                let mut parts = param.split(' ');
                let name = parts.next().unwrap_or_default();
                let time = match parts.next() {
                    None => 0,
                    // The syntax rule only lets digits through here, so a
                    // parse failure means the rule and this code disagree.
                    Some(raw) => raw.parse::<i64>().map_err(|err| CommandError::Internal {
                        usage: "Usage: /to <nick> [time] (no valid time specified)",
                        detail: format!("time {raw:?} passed validation but: {err}"),
                    })?,
                };
                format_timeout(name, time, self.format_duration)
            }
            Action::ModsList => (".mods".to_string(), "Requesting moderator list..".to_string()),
            Action::FixMods => {
                self.check_on_channel(channel, spec.check)?;
                self.conn
                    .print_system_message(Some(channel), "Trying to fix moderators..");
                self.request_mods_silent(channel);
                return Ok(());
            }
        };

        self.check_on_channel(channel, spec.check)?;
        self.conn.send_chat_message(channel, &message, &echo);
        Ok(())
    }

    fn check_on_channel(&self, channel: &str, check: ChannelCheck) -> Result<(), CommandError> {
        let require_message_capable = matches!(check, ChannelCheck::Message);
        if self.conn.is_on_channel(channel, require_message_capable) {
            Ok(())
        } else {
            Err(CommandError::NotOnChannel(channel.to_string()))
        }
    }

    /// Request the moderator list for a channel without printing the
    /// response when it arrives. Requires channel membership only, not
    /// message capability, so it also works on read-only channels.
    pub fn request_mods_silent(&self, channel: &str) {
        if self.check_on_channel(channel, ChannelCheck::Joined).is_ok() {
            self.tracker.mark_silent_pending(channel);
            self.conn.send_rate_limited_message(channel, ".mods", true);
        }
    }

    /// One auto-poll tick: request the moderator list for the first joined
    /// channel that has not been polled yet, if the feature is enabled.
    /// At most one new channel per call.
    pub fn auto_request_mods(&self) {
        if !self.conn.auto_mods_request_enabled() {
            return;
        }
        for channel in self.conn.joined_channels() {
            if !self.tracker.is_polled(&channel) {
                info!(%channel, "auto-requesting moderator list");
                self.tracker.mark_polled(&channel);
                self.request_mods_silent(&channel);
                return;
            }
        }
    }

    /// Whether the pending moderator-list response for this channel was a
    /// silent request. Consumes the flag.
    pub fn consume_silent_pending(&self, channel: &str) -> bool {
        self.tracker.consume_silent_pending(channel)
    }

    /// Whether any silent moderator-list request is still outstanding.
    /// The message-handling layer suppresses default response output while
    /// this is true.
    pub fn has_pending_silent(&self) -> bool {
        self.tracker.has_pending_silent()
    }

    /// Forget that a channel was auto-polled (or all channels with `None`),
    /// making it eligible for polling again. Call on part and disconnect.
    pub fn clear_polled(&self, channel: Option<&str>) {
        self.tracker.clear_polled(channel);
    }
}
