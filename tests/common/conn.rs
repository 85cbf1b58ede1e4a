//! Recording mock connection.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use twitchcmd::Connection;

/// One message handed to the transport (or printed) by the command core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Chat {
        channel: String,
        message: String,
        echo: String,
    },
    RateLimited {
        channel: String,
        message: String,
        silent: bool,
    },
    System {
        channel: Option<String>,
        text: String,
    },
}

/// Mock connection recording everything the command core sends.
pub struct MockConn {
    joined: Mutex<Vec<String>>,
    message_capable: AtomicBool,
    auto_mods_enabled: AtomicBool,
    sent: Mutex<Vec<Sent>>,
}

#[allow(dead_code)]
impl MockConn {
    /// A connection joined to the given channels, message-capable, with
    /// auto-polling enabled.
    pub fn joined_to(channels: &[&str]) -> Self {
        Self {
            joined: Mutex::new(channels.iter().map(|c| c.to_string()).collect()),
            message_capable: AtomicBool::new(true),
            auto_mods_enabled: AtomicBool::new(true),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn set_message_capable(&self, capable: bool) {
        self.message_capable.store(capable, Ordering::SeqCst);
    }

    pub fn set_auto_mods_enabled(&self, enabled: bool) {
        self.auto_mods_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Everything recorded so far, in order.
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn rate_limited_count(&self) -> usize {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|s| matches!(s, Sent::RateLimited { .. }))
            .count()
    }
}

impl Connection for MockConn {
    fn is_on_channel(&self, channel: &str, require_message_capable: bool) -> bool {
        let joined = self
            .joined
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.eq_ignore_ascii_case(channel));
        joined && (!require_message_capable || self.message_capable.load(Ordering::SeqCst))
    }

    fn send_chat_message(&self, channel: &str, message: &str, echo: &str) {
        self.sent.lock().unwrap().push(Sent::Chat {
            channel: channel.to_string(),
            message: message.to_string(),
            echo: echo.to_string(),
        });
    }

    fn send_rate_limited_message(&self, channel: &str, message: &str, silent: bool) {
        self.sent.lock().unwrap().push(Sent::RateLimited {
            channel: channel.to_string(),
            message: message.to_string(),
            silent,
        });
    }

    fn joined_channels(&self) -> Vec<String> {
        self.joined.lock().unwrap().clone()
    }

    fn auto_mods_request_enabled(&self) -> bool {
        self.auto_mods_enabled.load(Ordering::SeqCst)
    }

    fn print_system_message(&self, channel: Option<&str>, text: &str) {
        self.sent.lock().unwrap().push(Sent::System {
            channel: channel.map(|c| c.to_string()),
            text: text.to_string(),
        });
    }
}
