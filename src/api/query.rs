//! Request envelopes for the query endpoints.
//!
//! The envelope is JSON-encoded and sent as the single `payload` query
//! parameter of a GET request.

use crate::error::{ChatError, ChatResult};
use crate::models::query::{QueryOption, SortOption};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QueryUsersRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_conditions: Option<&'a QueryOption>,

    #[serde(skip_serializing_if = "<[SortOption]>::is_empty")]
    pub sort: &'a [SortOption],
}

impl<'a> QueryUsersRequest<'a> {
    pub fn new(filter: &'a QueryOption, sort: &'a [SortOption]) -> Self {
        Self {
            filter_conditions: non_empty(filter),
            sort,
        }
    }
}

/// `state` is always requested. `watch` and `presence` are always off.
#[derive(Debug, Serialize)]
pub struct QueryChannelsRequest<'a> {
    pub watch: bool,
    pub state: bool,
    pub presence: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_conditions: Option<&'a QueryOption>,

    #[serde(skip_serializing_if = "<[SortOption]>::is_empty")]
    pub sort: &'a [SortOption],
}

impl<'a> QueryChannelsRequest<'a> {
    pub fn new(filter: &'a QueryOption, sort: &'a [SortOption]) -> Self {
        Self {
            watch: false,
            state: true,
            presence: false,
            filter_conditions: non_empty(filter),
            sort,
        }
    }
}

/// An empty filter is dropped even when sort terms are present, so
/// `filter_conditions` is never sent as `{}`.
fn non_empty(filter: &QueryOption) -> Option<&QueryOption> {
    if filter.is_empty() {
        None
    } else {
        Some(filter)
    }
}

/// Compact-encode `request` into the `payload` query parameter.
pub fn encode_payload<T: Serialize>(request: &T) -> ChatResult<Vec<(&'static str, String)>> {
    let data = serde_json::to_string(request).map_err(ChatError::Encoding)?;
    Ok(vec![("payload", data)])
}
