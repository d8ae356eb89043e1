//! # Radio Transport
//!
//! The broadcast payload for wireless gates. The simulator is the transport:
//! a broadcast fans out to every gate except the sender, and receivers filter
//! on the application-level channel number carried inside the packet.

use serde::{Deserialize, Serialize};

/// Lowest selectable radio channel.
pub const MIN_CHANNEL: u8 = 1;
/// Highest selectable radio channel.
pub const MAX_CHANNEL: u8 = 10;

/// One broadcast packet on the shared radio medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioPacket {
  /// Application-level channel (1–10); receivers drop packets on other channels.
  pub channel: u8,
  /// String form of the transmitted signal.
  pub data: String,
}

impl RadioPacket {
  /// Creates a packet for a channel.
  pub fn new(channel: u8, data: impl Into<String>) -> Self {
    Self {
      channel,
      data: data.into(),
    }
  }
}

/// Advances a channel to the next one, wrapping from [`MAX_CHANNEL`] back to
/// [`MIN_CHANNEL`].
pub fn next_channel(channel: u8) -> u8 {
  (channel % MAX_CHANNEL) + MIN_CHANNEL
}
