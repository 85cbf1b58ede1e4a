//! # twitchcmd
//!
//! Moderation command core for a Twitch chat client.
//!
//! Translates user-issued moderation commands (`/ban`, `/timeout`, `/mod`,
//! `/slow`, `/host`, ..) into the dot-command protocol messages Twitch Chat
//! expects, validates their parameters, and tracks asynchronous server
//! responses to moderator-list requests.
//!
//! ## Features
//!
//! - Table-driven command dispatch: one [`CommandSpec`](command::CommandSpec)
//!   per keyword, looked up by exact match
//! - Regex-based parameter validation with usage hints on rejection
//! - Deduplicated, rate-limited background polling of the `/mods` list for
//!   joined channels (at most one new channel per scheduler tick)
//! - Silent-request tracking so the response handler knows whether a
//!   moderator-list reply should be printed or suppressed
//!
//! The underlying connection (membership checks, sends, settings) is an
//! external collaborator behind the [`Connection`] trait; this crate never
//! touches the network itself.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod autopoll;
pub mod command;
pub mod config;
pub mod conn;
pub mod dispatch;
pub mod error;
pub mod mods;
pub mod validate;

pub use autopoll::spawn_autopoll;
pub use config::AutoPollConfig;
pub use conn::{Connection, DurationFormatter};
pub use dispatch::ModCommands;
pub use error::CommandError;
pub use mods::{ModsTracker, parse_mods_list};
