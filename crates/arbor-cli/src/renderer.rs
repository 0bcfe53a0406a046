//! Terminal rendering for Markdown output
//!
//! Rich output goes through termimad, which also lays out the effort tables.
//! Plain mode prints the Markdown unchanged; it is used for `--no-color` and
//! whenever stdout is not a terminal.

use std::io::IsTerminal;

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a renderer; rich output also requires stdout to be a terminal.
    pub fn new(color: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.code_block.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled: color && std::io::stdout().is_terminal(),
            skin,
        }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }
}
