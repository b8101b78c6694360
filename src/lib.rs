//! Client binding for a hosted chat backend's user and channel search.
//!
//! ```no_run
//! use streamq::api::{channels, client::ChatClient};
//! use streamq::config::ClientConfig;
//! use streamq::models::query::{QueryOption, SortOption};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = ChatClient::new(&ClientConfig::from_env()?)?;
//! let filter = QueryOption::new().filter("type", "messaging").limit(10);
//! for channel in channels::query_channels(&client, &filter, &[SortOption::desc("last_message_at")]).await? {
//!     println!("{} ({} messages)", channel.cid, channel.messages.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
