pub mod channels;
pub mod client;
pub mod query;
pub mod users;
