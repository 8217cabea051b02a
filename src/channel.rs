use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidRequest;

/// Number of channels on the board. Ids run from 1 to `CHANNEL_COUNT`.
pub const CHANNEL_COUNT: usize = 4;

pub const MAX_BRIGHTNESS: u8 = 100;

/// Identifier of one of the relay channels.
/// Can only hold a value in `1..=CHANNEL_COUNT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ChannelId(u8);

impl ChannelId {
    pub fn all() -> impl Iterator<Item = ChannelId> {
        return (1..=CHANNEL_COUNT as u8).map(ChannelId);
    }

    pub fn get(self) -> u8 {
        return self.0;
    }

    pub(crate) fn index(self) -> usize {
        return usize::from(self.0 - 1);
    }
}

impl TryFrom<u8> for ChannelId {
    type Error = InvalidRequest;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if id == 0 || usize::from(id) > CHANNEL_COUNT {
            return Err(InvalidRequest::UnknownChannel(id.to_string()));
        }
        return Ok(ChannelId(id));
    }
}

impl FromStr for ChannelId {
    type Err = InvalidRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = parse_digits(s).ok_or_else(|| InvalidRequest::UnknownChannel(s.to_string()))?;
        return ChannelId::try_from(id).map_err(|_| InvalidRequest::UnknownChannel(s.to_string()));
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PowerCommand {
    On,
    Off,
}

impl PowerCommand {
    pub fn is_on(self) -> bool {
        return self == PowerCommand::On;
    }

    /// The literal used in request paths.
    pub fn as_str(self) -> &'static str {
        match self {
            PowerCommand::On => "on",
            PowerCommand::Off => "off",
        }
    }
}

// Exact, case-sensitive match. "ON" or "On" are rejected.
impl FromStr for PowerCommand {
    type Err = InvalidRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(PowerCommand::On),
            "off" => Ok(PowerCommand::Off),
            _ => Err(InvalidRequest::UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for PowerCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PowerCommand::On => write!(f, "ON"),
            PowerCommand::Off => write!(f, "OFF"),
        }
    }
}

/// Dimming level in percent, always within `0..=MAX_BRIGHTNESS`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    pub const OFF: Brightness = Brightness(0);

    /// Like `try_from`, but saturates at `MAX_BRIGHTNESS` instead of failing.
    pub fn clamped(percent: u32) -> Brightness {
        return Brightness(percent.min(u32::from(MAX_BRIGHTNESS)) as u8);
    }

    pub fn get(self) -> u8 {
        return self.0;
    }
}

impl TryFrom<u8> for Brightness {
    type Error = InvalidRequest;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        if percent > MAX_BRIGHTNESS {
            return Err(InvalidRequest::BadBrightness(percent.to_string()));
        }
        return Ok(Brightness(percent));
    }
}

// Only plain ascii digits are accepted: no sign, no fraction, no whitespace.
impl FromStr for Brightness {
    type Err = InvalidRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent = parse_digits(s).ok_or_else(|| InvalidRequest::BadBrightness(s.to_string()))?;
        return Brightness::try_from(percent).map_err(|_| InvalidRequest::BadBrightness(s.to_string()));
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// `u8::from_str` alone would also accept a leading '+'.
fn parse_digits(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    return s.parse::<u8>().ok();
}

/// Current state of a single channel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChannelState {
    pub on: bool,
    pub brightness: Brightness,
}

impl ChannelState {
    pub fn set_power(&mut self, command: PowerCommand) {
        self.on = command.is_on();
    }

    /// Also switches the channel on or off depending on whether
    /// `brightness` is above zero.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
        self.on = brightness > Brightness::OFF;
    }
}

/// A channel state together with its id, as returned by the mutating routes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelRecord {
    pub id: ChannelId,
    pub on: bool,
    pub brightness: Brightness,
}

impl ChannelRecord {
    pub fn new(id: ChannelId, state: ChannelState) -> ChannelRecord {
        return ChannelRecord {
            id,
            on: state.on,
            brightness: state.brightness,
        };
    }
}
