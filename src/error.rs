//! Error taxonomy for command processing.
//!
//! All of these are user-local: the dispatcher recovers from every variant
//! itself and none of them are fatal to the process or the connection.
//! An unknown keyword is not an error at all; [`crate::ModCommands::command`]
//! signals it with `handled = false` so an outer layer can try other
//! interpretations.

use thiserror::Error;

/// Errors that can occur while processing a recognized command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Recognized command with rejected parameter syntax. Recovered by
    /// printing the usage hint.
    #[error("{usage}")]
    Usage {
        /// Full usage line, e.g. `"Usage: /ban <nick>"`.
        usage: &'static str,
    },

    /// The command was well-formed but the channel is not currently joined
    /// (or not message-capable). Dropped silently, no message sent.
    #[error("not on channel: {0}")]
    NotOnChannel(String),

    /// The validator accepted a value the formatter cannot parse. The two
    /// must agree on the accepted grammar, so this indicates a bug; it is
    /// downgraded to a usage hint and logged rather than crashing.
    #[error("internal inconsistency: {detail}")]
    Internal {
        /// Usage line to show the user after the downgrade.
        usage: &'static str,
        /// What actually failed, for diagnosis.
        detail: String,
    },
}
