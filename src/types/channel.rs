use crate::types::errors::ChannelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sales medium a transaction line went through.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Serialize)]
pub enum Channel {
    #[serde(rename = "Online")]
    Online,
    #[serde(rename = "In-store")]
    InStore
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Online => "Online",
            Channel::InStore => "In-store"
        }
    }
}

impl Display for Channel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ChannelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "online" => Ok(Channel::Online),
            "in-store" | "instore" | "in store" => Ok(Channel::InStore),
            _ => Err(ChannelError::Unknown(value.trim().to_string()))
        }
    }
}

/// Channel constraint of a filter: every channel, or exactly one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Only(Channel)
}

impl ChannelFilter {
    pub fn matches(&self, channel: Channel) -> bool {
        match self {
            ChannelFilter::All => true,
            ChannelFilter::Only(selected) => *selected == channel
        }
    }
}

impl Display for ChannelFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ChannelFilter::All => formatter.write_str("All"),
            ChannelFilter::Only(channel) => Display::fmt(channel, formatter)
        }
    }
}

impl FromStr for ChannelFilter {
    type Err = ChannelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(ChannelFilter::All);
        }

        Channel::from_str(value).map(ChannelFilter::Only)
    }
}
