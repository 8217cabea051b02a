use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::info;

use crate::channel::{Brightness, ChannelId, ChannelRecord, ChannelState, PowerCommand, CHANNEL_COUNT};

/// Snapshot of every channel, keyed by id in ascending order.
pub type Status = BTreeMap<ChannelId, ChannelState>;

/// The simulated relay board: a fixed table of channels shared between
/// all request handler threads.
///
/// Operations take already-validated arguments, so anything that reaches the
/// lock is guaranteed to succeed and a rejected request can't leave a channel
/// half-updated.
pub struct RelayBoard {
    channels: Mutex<[ChannelState; CHANNEL_COUNT]>,
}

impl RelayBoard {
    /// All channels start switched off with zero brightness.
    pub fn new() -> RelayBoard {
        return RelayBoard {
            channels: Mutex::new([ChannelState::default(); CHANNEL_COUNT]),
        };
    }

    // Nothing panics while the lock is held, so a poisoned table is still consistent.
    fn lock(&self) -> MutexGuard<'_, [ChannelState; CHANNEL_COUNT]> {
        return self.channels.lock().unwrap_or_else(PoisonError::into_inner);
    }

    /// Switch a channel on or off. The stored brightness is left alone.
    pub fn set_power(&self, id: ChannelId, command: PowerCommand) -> ChannelRecord {
        let record = {
            let mut channels = self.lock();
            let channel = &mut channels[id.index()];
            channel.set_power(command);
            ChannelRecord::new(id, *channel)
        };
        info!("relay {} -> {}", id, command);
        return record;
    }

    /// Set the dimming level; the channel is on exactly when it is above zero.
    pub fn set_brightness(&self, id: ChannelId, brightness: Brightness) -> ChannelRecord {
        let record = {
            let mut channels = self.lock();
            let channel = &mut channels[id.index()];
            channel.set_brightness(brightness);
            ChannelRecord::new(id, *channel)
        };
        info!("relay {} -> BRIGHTNESS {}", id, brightness);
        return record;
    }

    pub fn channel(&self, id: ChannelId) -> ChannelRecord {
        let channels = self.lock();
        return ChannelRecord::new(id, channels[id.index()]);
    }

    pub fn status(&self) -> Status {
        let channels = self.lock();
        return ChannelId::all().map(|id| (id, channels[id.index()])).collect();
    }
}

impl Default for RelayBoard {
    fn default() -> Self {
        Self::new()
    }
}
