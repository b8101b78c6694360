use super::message::Message;
use super::null_as_empty;
use super::user::User;
use crate::api::channels::ChannelHandle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub cid: String,
    pub created_by: Option<User>,
    #[serde(default)]
    pub frozen: bool,
    pub member_count: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_message_at: Option<DateTime<Utc>>,

    /// Recent messages, moved here from the query response.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<Message>,
    /// Read cursors, moved here from the query response.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub read: Vec<ChannelRead>,
    /// Members, moved here from the query response.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<ChannelMember>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(skip)]
    pub(crate) handle: Option<ChannelHandle>,
}

impl Channel {
    /// Capability for follow-up calls on this channel. Only channels returned
    /// by [`crate::api::channels::query_channels`] carry one.
    pub fn handle(&self) -> Option<&ChannelHandle> {
        self.handle.as_ref()
    }

    /// Channel name from custom data, falling back to the cid.
    pub fn display_name(&self) -> &str {
        self.extra
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.cid)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChannelRead {
    pub user: User,
    pub last_read: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unread_messages: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChannelMember {
    pub user_id: Option<String>,
    pub user: Option<User>,
    pub role: Option<String>,
    #[serde(default)]
    pub is_moderator: bool,
    #[serde(default)]
    pub invited: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ChannelMember {
    pub fn id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
    }
}

/// One entry of the `channels` response: the channel and its state lists.
#[derive(Debug, Deserialize)]
pub struct ChannelResponseEntry {
    pub channel: Channel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<Message>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub read: Vec<ChannelRead>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<ChannelMember>,
}

#[derive(Debug, Deserialize)]
pub struct QueryChannelsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub channels: Vec<ChannelResponseEntry>,
}
