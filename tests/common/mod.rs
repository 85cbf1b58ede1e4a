//! Integration test common infrastructure.
//!
//! Provides a recording mock connection for asserting on the messages the
//! command core hands to the transport.

pub mod conn;

#[allow(unused_imports)]
pub use conn::{MockConn, Sent};
