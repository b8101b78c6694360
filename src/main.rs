mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use streamq::api::{channels, client::ChatClient, users};
use streamq::config::ClientConfig;
use streamq::models::query::QueryOption;
use streamq::output::color::ColorWriter;
use streamq::output::{channel_formatter, user_formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "streamq=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let client = ChatClient::new(&config).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Users(args) => {
            let users = users::query_users(&client, &args.query_option(), &args.sort).await?;

            match cli.format.render(&users)? {
                Some(rendered) => println!("{}", rendered),
                None => {
                    let mut writer = ColorWriter::new(cli.no_color);
                    user_formatter::format_users_list(&users, &mut writer)?;
                    print!("{}", writer.into_string()?);
                }
            }
        }
        Commands::Channels(args) => {
            let channels = channels::query_channels(&client, &args.query_option(), &args.sort).await?;

            match cli.format.render(&channels)? {
                Some(rendered) => println!("{}", rendered),
                None => {
                    let mut writer = ColorWriter::new(cli.no_color);
                    channel_formatter::format_channels_list(&channels, &mut writer)?;
                    print!("{}", writer.into_string()?);
                }
            }
        }
        Commands::Send { cid, text, user } => {
            let filter = QueryOption::new().filter("cid", cid.as_str()).limit(1);
            let found = channels::query_channels(&client, &filter, &[]).await?;

            let channel = found
                .into_iter()
                .next()
                .with_context(|| format!("Channel '{}' not found", cid))?;
            let handle = channel
                .handle()
                .with_context(|| format!("Channel '{}' cannot send messages", cid))?;

            let message = handle.send_message(&text, &user).await?;

            match cli.format.render(&message)? {
                Some(rendered) => println!("{}", rendered),
                None => {
                    let mut writer = ColorWriter::new(cli.no_color);
                    writer.print_header(&format!("Sent to {}", handle.cid()))?;
                    writer.print_field(2, "Message ID", &message.id)?;
                    print!("{}", writer.into_string()?);
                }
            }
        }
    }

    Ok(())
}
