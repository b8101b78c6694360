use super::client::ChatClient;
use super::query::{encode_payload, QueryUsersRequest};
use crate::error::ChatResult;
use crate::models::query::{QueryOption, SortOption};
use crate::models::user::{QueryUsersResponse, User};
use reqwest::Method;
use tracing::debug;

/// Search users. Results come back in server order.
pub async fn query_users(
    client: &ChatClient,
    filter: &QueryOption,
    sort: &[SortOption],
) -> ChatResult<Vec<User>> {
    let query = encode_payload(&QueryUsersRequest::new(filter, sort))?;

    let response: QueryUsersResponse = client.make_request(Method::GET, "users", &query, None).await?;

    debug!(count = response.users.len(), "queried users");
    Ok(response.users)
}
