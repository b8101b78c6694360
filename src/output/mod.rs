pub mod channel_formatter;
pub mod color;
pub mod formatter;
pub mod time;
pub mod user_formatter;
pub mod width;
