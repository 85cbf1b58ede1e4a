//! Command descriptor table and protocol/echo formatting.
//!
//! One [`CommandSpec`] per keyword, looked up by exact, case-sensitive match.
//! Adding a command is a data change here, not a control-flow change in the
//! dispatcher.

use crate::conn::DurationFormatter;
use crate::validate::SyntaxRule;
use std::collections::HashMap;

/// What being "on" the channel means for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCheck {
    /// Channel must be joined and currently allow outbound chat messages.
    Message,
    /// Channel must be joined; message capability is not required.
    /// Only the silent moderator-list request path uses this.
    Joined,
}

/// What a command does once its parameter has been validated.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// No parameter; fixed protocol message and echo (`.clear`, `.slowoff`, ..).
    Fixed {
        /// Protocol message sent verbatim.
        message: &'static str,
        /// Echo shown to the user.
        echo: &'static str,
    },
    /// Single-target command: `<dot-command> <param>` with the parameter
    /// interpolated into the echo between prefix and suffix.
    Target {
        /// Dot-command without the argument, e.g. `".ban"`.
        command: &'static str,
        /// Echo text before the parameter, e.g. `"Trying to ban "`.
        echo_prefix: &'static str,
        /// Echo text after the parameter, e.g. `".."`.
        echo_suffix: &'static str,
    },
    /// `/slow [time]`: optional numeric argument.
    Slowmode,
    /// `/to <nick> [time]`: target plus optional numeric argument.
    Timeout,
    /// `/mods`: user-visible moderator-list request.
    ModsList,
    /// `/fixmods`: silent moderator-list request with an info line.
    FixMods,
}

/// Static descriptor for one command keyword.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Parameter syntax rule, or `None` when the command takes no
    /// syntax-checked parameter.
    pub rule: Option<SyntaxRule>,
    /// Full usage line printed when the parameter is rejected.
    pub usage: &'static str,
    /// Membership semantics required before sending.
    pub check: ChannelCheck,
    /// What to do once the parameter is accepted.
    pub action: Action,
}

/// Registry of command descriptors.
pub struct Registry {
    commands: HashMap<&'static str, CommandSpec>,
}

impl Registry {
    /// Create a new registry with all moderation commands registered.
    pub fn new() -> Self {
        let mut commands: HashMap<&'static str, CommandSpec> = HashMap::new();

        let timeout = CommandSpec {
            rule: Some(SyntaxRule::UsernameWithTime),
            usage: "Usage: /to <nick> [time]",
            check: ChannelCheck::Message,
            action: Action::Timeout,
        };
        commands.insert("to", timeout);
        commands.insert("timeout", timeout);

        commands.insert("ban", target(".ban", "Usage: /ban <nick>", "Trying to ban ", ".."));
        commands.insert("unban", target(".unban", "Usage: /unban <nick>", "Trying to unban ", ".."));
        commands.insert("mod", target(".mod", "Usage: /mod <nick>", "Trying to mod ", ".."));
        commands.insert("unmod", target(".unmod", "Usage: /unmod <nick>", "Trying to unmod ", ".."));

        commands.insert(
            "host",
            CommandSpec {
                rule: Some(SyntaxRule::Any),
                usage: "Usage: /host <stream>",
                check: ChannelCheck::Message,
                action: Action::Target {
                    command: ".host",
                    echo_prefix: "Trying to host ",
                    echo_suffix: "..",
                },
            },
        );
        commands.insert(
            "color",
            CommandSpec {
                rule: Some(SyntaxRule::Any),
                usage: "Usage: /color <newcolor>",
                check: ChannelCheck::Message,
                action: Action::Target {
                    command: ".color",
                    echo_prefix: "Trying to change color to ",
                    echo_suffix: "",
                },
            },
        );

        commands.insert(
            "slow",
            CommandSpec {
                rule: None,
                usage: "Usage: /slow [time]",
                check: ChannelCheck::Message,
                action: Action::Slowmode,
            },
        );
        commands.insert("slowoff", fixed(".slowoff", "Trying to turn off slowmode.."));
        commands.insert("subscribers", fixed(".subscribers", "Trying to turn on subscribers mode.."));
        commands.insert(
            "subscribersoff",
            fixed(".subscribersoff", "Trying to turn off subscribers mode.."),
        );
        commands.insert("r9k", fixed(".r9kbeta", "Trying to turn on r9k mode.."));
        commands.insert("r9koff", fixed(".r9kbetaoff", "Trying to turn r9k mode off.."));
        commands.insert("clear", fixed(".clear", "Trying to clear channel.."));
        commands.insert("unhost", fixed(".unhost", "Trying to turn off host mode.."));

        commands.insert(
            "mods",
            CommandSpec {
                rule: None,
                usage: "Usage: /mods",
                check: ChannelCheck::Message,
                action: Action::ModsList,
            },
        );
        commands.insert(
            "fixmods",
            CommandSpec {
                rule: None,
                usage: "Usage: /fixmods",
                check: ChannelCheck::Message,
                action: Action::FixMods,
            },
        );

        Self { commands }
    }

    /// Look up a command keyword. Exact match, no abbreviation.
    pub fn get(&self, keyword: &str) -> Option<&CommandSpec> {
        self.commands.get(keyword)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn fixed(message: &'static str, echo: &'static str) -> CommandSpec {
    CommandSpec {
        rule: None,
        usage: "",
        check: ChannelCheck::Message,
        action: Action::Fixed { message, echo },
    }
}

fn target(
    command: &'static str,
    usage: &'static str,
    echo_prefix: &'static str,
    echo_suffix: &'static str,
) -> CommandSpec {
    CommandSpec {
        rule: Some(SyntaxRule::Username),
        usage,
        check: ChannelCheck::Message,
        action: Action::Target {
            command,
            echo_prefix,
            echo_suffix,
        },
    }
}

/// Build the protocol message and echo for a single-target command.
pub fn format_target(
    command: &'static str,
    echo_prefix: &'static str,
    echo_suffix: &'static str,
    param: &str,
) -> (String, String) {
    (
        format!("{command} {param}"),
        format!("{echo_prefix}{param}{echo_suffix}"),
    )
}

/// Build the protocol message and echo for `/slow [time]`.
///
/// Zero or negative time turns slowmode on with the server default.
pub fn format_slowmode(time: i64) -> (String, String) {
    if time <= 0 {
        (".slow".to_string(), "Trying to turn on slowmode..".to_string())
    } else {
        (
            format!(".slow {time}"),
            format!("Trying to turn on slowmode ({time}s)"),
        )
    }
}

/// Build the protocol message and echo for `/to <nick> [time]`.
///
/// With a positive time the echo shows the raw seconds and, when it differs,
/// the human-friendly duration joined as `"<N>s/<formatted>"`.
pub fn format_timeout(name: &str, time: i64, format_duration: DurationFormatter) -> (String, String) {
    if time <= 0 {
        (
            format!(".timeout {name}"),
            format!("Trying to timeout {name}.."),
        )
    } else {
        let only_seconds = format!("{time}s");
        let formatted = format_duration(time as u64);
        let time_string = if formatted == only_seconds {
            only_seconds
        } else {
            format!("{only_seconds}/{formatted}")
        };
        (
            format!(".timeout {name} {time}"),
            format!("Trying to timeout {name} ({time_string})"),
        )
    }
}
