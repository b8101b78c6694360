use terminal_size::{terminal_size, Width};

const MAX_WIDTH: usize = 120;
const DEFAULT_WIDTH: usize = 80;
const MARGIN: usize = 2;

/// Wrap width for text indented by `indent` columns. Follows the terminal,
/// capped at 120 columns, 80 when there is no terminal.
pub fn wrap_width(indent: usize) -> usize {
    let base = match terminal_size() {
        Some((Width(w), _)) => (w as usize).saturating_sub(MARGIN).min(MAX_WIDTH),
        None => DEFAULT_WIDTH,
    };
    base.saturating_sub(indent).max(1)
}
