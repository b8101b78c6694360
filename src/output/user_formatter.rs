use crate::models::user::User;
use crate::output::color::ColorWriter;
use crate::output::time::format_optional;
use std::io::Result;
use termcolor::Color;

pub fn format_users_list(users: &[User], writer: &mut ColorWriter) -> Result<()> {
    writer.print_header(&format!("Users ({})", users.len()))?;
    writer.print_separator()?;

    for (i, user) in users.iter().enumerate() {
        if user.online {
            writer.print_colored("● ", Color::Green)?;
        } else {
            writer.print_dim("○ ")?;
        }
        writer.print_bold(user.display_name())?;
        if user.display_name() != user.id {
            writer.write(" ")?;
            writer.print_colored(&format!("({})", user.id), Color::Yellow)?;
        }

        let mut flags = Vec::new();
        if let Some(role) = user.role.as_deref() {
            if role != "user" {
                flags.push(role);
            }
        }
        if user.banned {
            flags.push("banned");
        }
        if !flags.is_empty() {
            writer.write(" ")?;
            writer.print_colored(&format!("[{}]", flags.join(", ")), Color::Magenta)?;
        }
        writer.writeln()?;

        writer.print_field(2, "Last active", &format_optional(user.last_active))?;

        if i < users.len() - 1 {
            writer.writeln()?;
        }
    }

    Ok(())
}
