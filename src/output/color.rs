use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Buffers styled terminal output. Styling is dropped under `--no-color`
/// or when `NO_COLOR` is set.
pub struct ColorWriter {
    buffer: Buffer,
    colors: bool,
}

impl ColorWriter {
    pub fn new(no_color: bool) -> Self {
        let colors = !no_color && std::env::var_os("NO_COLOR").is_none();
        let buffer = if colors { Buffer::ansi() } else { Buffer::no_color() };
        Self { buffer, colors }
    }

    pub fn into_string(self) -> io::Result<String> {
        String::from_utf8(self.buffer.into_inner())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn styled(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        if self.colors {
            self.buffer.set_color(spec)?;
        }
        write!(self.buffer, "{}", text)?;
        if self.colors {
            self.buffer.reset()?;
        }
        Ok(())
    }

    pub fn print_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.styled(text, ColorSpec::new().set_fg(Some(color)))
    }

    pub fn print_bold(&mut self, text: &str) -> io::Result<()> {
        self.styled(text, ColorSpec::new().set_bold(true))
    }

    pub fn print_dim(&mut self, text: &str) -> io::Result<()> {
        self.styled(text, ColorSpec::new().set_dimmed(true))
    }

    pub fn print_header(&mut self, text: &str) -> io::Result<()> {
        self.styled(text, ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        self.writeln()
    }

    /// `label: value` on its own line, indented by `indent` spaces.
    pub fn print_field(&mut self, indent: usize, label: &str, value: &str) -> io::Result<()> {
        write!(self.buffer, "{:indent$}", "", indent = indent)?;
        self.print_colored(label, Color::Blue)?;
        writeln!(self.buffer, ": {}", value)
    }

    pub fn print_separator(&mut self) -> io::Result<()> {
        self.print_dim(&"─".repeat(80))?;
        self.writeln()
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.buffer, "{}", text)
    }

    pub fn writeln(&mut self) -> io::Result<()> {
        writeln!(self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_output_is_plain() {
        let mut writer = ColorWriter::new(true);
        writer.print_header("Users (2)").unwrap();
        writer.print_field(2, "Role", "admin").unwrap();
        let out = writer.into_string().unwrap();
        assert_eq!(out, "Users (2)\n  Role: admin\n");
    }
}
