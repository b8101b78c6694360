use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use streamq::models::query::{QueryOption, SortOption};
use streamq::output::formatter::OutputFormat;

#[derive(Parser)]
#[command(name = "streamq")]
#[command(about = "Query users and channels on a hosted chat backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colorized output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Enable verbose logging (request and response details on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search users
    Users(QueryArgs),
    /// Search channels, with their recent messages, read state and members
    Channels(QueryArgs),
    /// Send a message to a channel
    Send {
        /// Channel cid (e.g., messaging:general)
        cid: String,

        /// Message text
        text: String,

        /// ID of the user the message is sent as
        #[arg(long)]
        user: String,
    },
}

#[derive(Args)]
pub struct QueryArgs {
    /// Filter conditions as a JSON object (e.g., '{"type": "messaging"}')
    #[arg(long, value_parser = parse_filter)]
    pub filter: Option<Map<String, Value>>,

    /// Sort term FIELD[:DIRECTION], direction 1/-1/asc/desc (repeatable)
    #[arg(long = "sort")]
    pub sort: Vec<SortOption>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of results to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

impl QueryArgs {
    pub fn query_option(&self) -> QueryOption {
        QueryOption {
            limit: self.limit,
            offset: self.offset,
            ..QueryOption::from(self.filter.clone().unwrap_or_default())
        }
    }
}

fn parse_filter(s: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("filter must be a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_users_query() {
        let cli = Cli::try_parse_from([
            "streamq",
            "users",
            "--filter",
            r#"{"role": "admin"}"#,
            "--sort",
            "last_active:-1",
            "--sort",
            "name",
            "--limit",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Users(args) => {
                let q = args.query_option();
                assert_eq!(q.filter.get("role"), Some(&json!("admin")));
                assert_eq!(q.limit, Some(5));
                assert_eq!(q.offset, None);
                assert_eq!(args.sort, vec![SortOption::desc("last_active"), SortOption::asc("name")]);
            }
            _ => panic!("expected users command"),
        }
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_query_option_without_flags_is_empty() {
        let cli = Cli::try_parse_from(["streamq", "channels"]).unwrap();
        match cli.command {
            Commands::Channels(args) => assert!(args.query_option().is_empty()),
            _ => panic!("expected channels command"),
        }
    }

    #[test]
    fn test_parse_filter_rejects_non_object() {
        assert!(parse_filter("[1, 2]").is_err());
        assert!(parse_filter("{not json").is_err());
        assert!(parse_filter("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "streamq",
            "--format",
            "json",
            "send",
            "messaging:general",
            "hello",
            "--user",
            "alice",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Send { cid, text, user } => {
                assert_eq!(cid, "messaging:general");
                assert_eq!(text, "hello");
                assert_eq!(user, "alice");
            }
            _ => panic!("expected send command"),
        }
    }
}
