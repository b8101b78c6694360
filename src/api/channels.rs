use super::client::{ChatClient, RequestExecutor};
use super::query::{encode_payload, QueryChannelsRequest};
use crate::error::{ChatResult, RequestError};
use crate::models::channel::{Channel, QueryChannelsResponse};
use crate::models::message::{Message, SendMessageResponse};
use crate::models::query::{QueryOption, SortOption};
use reqwest::Method;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Search channels, including their recent messages, read state and members.
///
/// Each returned channel carries the `messages`, `read` and `members` of its
/// own response entry and a [`ChannelHandle`] bound to `client`. Order is the
/// server's.
pub async fn query_channels(
    client: &ChatClient,
    filter: &QueryOption,
    sort: &[SortOption],
) -> ChatResult<Vec<Channel>> {
    let query = encode_payload(&QueryChannelsRequest::new(filter, sort))?;

    let response: QueryChannelsResponse = client.make_request(Method::GET, "channels", &query, None).await?;

    let executor: Arc<dyn RequestExecutor> = Arc::new(client.clone());
    let channels: Vec<Channel> = response
        .channels
        .into_iter()
        .map(|entry| {
            let mut channel = entry.channel;
            channel.messages = entry.messages;
            channel.read = entry.read;
            channel.members = entry.members;
            channel.handle = Some(ChannelHandle::new(
                Arc::clone(&executor),
                &channel.channel_type,
                &channel.id,
            ));
            channel
        })
        .collect();

    debug!(count = channels.len(), "queried channels");
    Ok(channels)
}

/// What a queried channel may do on its own: the channel's identity plus
/// the executor that fetched it.
#[derive(Clone)]
pub struct ChannelHandle {
    executor: Arc<dyn RequestExecutor>,
    channel_type: String,
    channel_id: String,
}

impl fmt::Debug for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelHandle")
            .field("channel_type", &self.channel_type)
            .field("channel_id", &self.channel_id)
            .finish_non_exhaustive()
    }
}

impl ChannelHandle {
    pub fn new(executor: Arc<dyn RequestExecutor>, channel_type: &str, channel_id: &str) -> Self {
        Self {
            executor,
            channel_type: channel_type.to_string(),
            channel_id: channel_id.to_string(),
        }
    }

    pub fn cid(&self) -> String {
        format!("{}:{}", self.channel_type, self.channel_id)
    }

    fn path(&self, action: &str) -> String {
        format!("channels/{}/{}/{}", self.channel_type, self.channel_id, action)
    }

    /// Post a message as `user_id` and return it as stored by the server.
    pub async fn send_message(&self, text: &str, user_id: &str) -> ChatResult<Message> {
        let body = json!({
            "message": {
                "text": text,
                "user": { "id": user_id },
            }
        });
        let path = self.path("message");
        let value = self.executor.execute(Method::POST, &path, &[], Some(&body)).await?;

        let response: SendMessageResponse =
            serde_json::from_value(value).map_err(|source| RequestError::Decode { path, source })?;

        debug!(cid = %self.cid(), message_id = %response.message.id, "sent message");
        Ok(response.message)
    }

    /// Mark the channel read for `user_id`.
    pub async fn mark_read(&self, user_id: &str) -> ChatResult<()> {
        let body = json!({ "user": { "id": user_id } });
        self.executor
            .execute(Method::POST, &self.path("read"), &[], Some(&body))
            .await?;

        debug!(cid = %self.cid(), user_id, "marked read");
        Ok(())
    }
}
