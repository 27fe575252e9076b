//! Terminal rendering module for rich markdown output
//!
//! Plans and results are produced as markdown by the core crate. This module
//! prints them with termimad styling, or verbatim when colors are disabled.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.table.set_fg(Color::AnsiValue(250));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    ///
    /// Headers keep their hash marks. Consecutive table rows are handed to
    /// termimad as one block so the columns line up.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{markdown}")?;
            stdout.flush()?;
            return Ok(());
        }

        let mut table = String::new();
        for line in markdown.lines() {
            if line.starts_with('|') {
                table.push_str(line);
                table.push('\n');
                continue;
            }
            self.flush_table(&mut table);

            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        self.flush_table(&mut table);
        Ok(())
    }

    fn flush_table(&self, table: &mut String) {
        if !table.is_empty() {
            self.skin.print_text(table);
            table.clear();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
