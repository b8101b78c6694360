use crate::models::channel::Channel;
use crate::models::message::Message;
use crate::output::color::ColorWriter;
use crate::output::time::format_optional;
use crate::output::width::wrap_width;
use std::io::Result;
use termcolor::Color;
use textwrap::wrap;

const MESSAGE_INDENT: usize = 4;

pub fn format_channels_list(channels: &[Channel], writer: &mut ColorWriter) -> Result<()> {
    writer.print_header(&format!("Channels ({})", channels.len()))?;
    writer.print_separator()?;

    // Server order is kept.
    for (i, channel) in channels.iter().enumerate() {
        format_channel(channel, writer)?;

        if i < channels.len() - 1 {
            writer.writeln()?;
        }
    }

    Ok(())
}

fn format_channel(channel: &Channel, writer: &mut ColorWriter) -> Result<()> {
    writer.print_colored(channel.display_name(), Color::Cyan)?;
    if channel.display_name() != channel.cid {
        writer.write(" ")?;
        writer.print_colored(&format!("({})", channel.cid), Color::Yellow)?;
    }
    if channel.frozen {
        writer.write(" ")?;
        writer.print_colored("❄ Frozen", Color::Blue)?;
    }
    writer.writeln()?;

    let member_count = channel
        .member_count
        .map(|n| n as usize)
        .unwrap_or(channel.members.len());
    writer.print_field(2, "Members", &member_count.to_string())?;
    writer.print_field(2, "Last message", &format_optional(channel.last_message_at))?;

    if !channel.members.is_empty() {
        let names: Vec<String> = channel
            .members
            .iter()
            .filter_map(|m| {
                let id = m.id()?;
                Some(match m.role.as_deref() {
                    Some(role) if role != "member" => format!("{} ({})", id, role),
                    _ => id.to_string(),
                })
            })
            .collect();
        writer.print_field(2, "Member list", &names.join(", "))?;
    }

    if !channel.read.is_empty() {
        let unread: Vec<String> = channel
            .read
            .iter()
            .filter(|r| r.unread_messages > 0)
            .map(|r| format!("{} ({})", r.user.display_name(), r.unread_messages))
            .collect();
        if !unread.is_empty() {
            writer.print_field(2, "Unread", &unread.join(", "))?;
        }
    }

    if !channel.messages.is_empty() {
        writer.print_field(2, "Recent messages", &channel.messages.len().to_string())?;
        for message in &channel.messages {
            format_message(message, writer)?;
        }
    }

    Ok(())
}

fn format_message(message: &Message, writer: &mut ColorWriter) -> Result<()> {
    let author = message
        .user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or("unknown");

    writer.write(&" ".repeat(MESSAGE_INDENT))?;
    writer.print_bold(author)?;
    writer.write(" ")?;
    writer.print_dim(&format_optional(message.created_at))?;
    if message.reply_count > 0 {
        writer.write(" ")?;
        let replies = if message.reply_count == 1 { "reply" } else { "replies" };
        writer.print_colored(&format!("💬 {} {}", message.reply_count, replies), Color::Green)?;
    }
    writer.writeln()?;

    let indent = MESSAGE_INDENT + 2;
    for line in wrap(&message.text, wrap_width(indent)) {
        writer.write(&" ".repeat(indent))?;
        writer.write(&line)?;
        writer.writeln()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::channel::ChannelResponseEntry;

    fn channel(json: &str) -> Channel {
        let entry: ChannelResponseEntry = serde_json::from_str(json).unwrap();
        let mut channel = entry.channel;
        channel.messages = entry.messages;
        channel.read = entry.read;
        channel.members = entry.members;
        channel
    }

    #[test]
    fn test_format_channels_list() {
        let channels = vec![
            channel(
                r#"{
                    "channel": {"id": "general", "type": "messaging", "cid": "messaging:general", "name": "General"},
                    "messages": [{"id": "m1", "text": "hello there", "user": {"id": "alice", "name": "Alice"}, "reply_count": 2}],
                    "read": [{"user": {"id": "bob"}, "unread_messages": 3}],
                    "members": [{"user_id": "alice", "role": "owner"}, {"user_id": "bob", "role": "member"}]
                }"#,
            ),
            channel(r#"{"channel": {"id": "ops", "type": "team", "cid": "team:ops", "frozen": true}}"#),
        ];

        let mut writer = ColorWriter::new(true);
        format_channels_list(&channels, &mut writer).unwrap();
        let out = writer.into_string().unwrap();

        assert!(out.starts_with("Channels (2)\n"));
        assert!(out.contains("General (messaging:general)"));
        assert!(out.contains("Members: 2"));
        assert!(out.contains("Member list: alice (owner), bob"));
        assert!(out.contains("Unread: bob (3)"));
        assert!(out.contains("Alice never 💬 2 replies"));
        assert!(out.contains("      hello there"));
        assert!(out.contains("team:ops ❄ Frozen"));

        // order is preserved
        assert!(out.find("General").unwrap() < out.find("team:ops").unwrap());
    }

    #[test]
    fn test_format_empty_channels_list() {
        let mut writer = ColorWriter::new(true);
        format_channels_list(&[], &mut writer).unwrap();
        assert!(writer.into_string().unwrap().starts_with("Channels (0)"));
    }
}
