//! Virtual terminal backend for rendering tests.
//!
//! Frames are serialized to ANSI with crossterm and fed through a
//! `vt100::Parser`, so assertions see what a real terminal would show.

use std::fmt::Write as _;
use std::io;

use crossterm::Command;
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::Color;

pub struct VirtualTerminal {
    parser: vt100::Parser,
    size: Size,
}

impl VirtualTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            size: Size::new(width, height),
        }
    }

    /// Whole screen as plain text, one line per row.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// Plain text of one row, trailing blanks trimmed.
    pub fn row(&self, y: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.size.width)
            .nth(usize::from(y))
            .map(|row| row.trim_end().to_string())
            .unwrap_or_default()
    }

    /// First row containing `needle`.
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.size.height).find(|&y| self.row(y).contains(needle))
    }

    /// Foreground colour at a cell, if it was set.
    #[allow(dead_code)]
    pub fn fg_at(&self, x: u16, y: u16) -> Option<vt100::Color> {
        self.parser
            .screen()
            .cell(y, x)
            .map(vt100::Cell::fgcolor)
    }

    fn feed(&mut self, command: impl Command) {
        let mut ansi = String::new();
        let _ = command.write_ansi(&mut ansi);
        self.parser.process(ansi.as_bytes());
    }
}

impl Backend for VirtualTerminal {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        use crossterm::{cursor, style};

        let mut ansi = String::new();
        let mut next_pos: Option<(u16, u16)> = None;

        for (x, y, cell) in content {
            if next_pos != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut ansi);
            }
            let _ = style::SetAttribute(style::Attribute::Reset).write_ansi(&mut ansi);
            if let Some(fg) = ansi_color(cell.fg) {
                let _ = style::SetForegroundColor(fg).write_ansi(&mut ansi);
            }
            if let Some(bg) = ansi_color(cell.bg) {
                let _ = style::SetBackgroundColor(bg).write_ansi(&mut ansi);
            }
            let _ = write!(ansi, "{}", cell.symbol());
            next_pos = Some((x + 1, y));
        }

        self.parser.process(ansi.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, col) = self.parser.screen().cursor_position();
        Ok(Position::new(col, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let pos = position.into();
        self.feed(crossterm::cursor::MoveTo(pos.x, pos.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.feed(crossterm::terminal::Clear(
            crossterm::terminal::ClearType::All,
        ));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: self.size,
            pixels: Size::new(self.size.width * 8, self.size.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn ansi_color(color: Color) -> Option<crossterm::style::Color> {
    use crossterm::style::Color as Ansi;

    Some(match color {
        Color::Reset => return None,
        Color::Black => Ansi::Black,
        Color::Red => Ansi::DarkRed,
        Color::Green => Ansi::DarkGreen,
        Color::Yellow => Ansi::DarkYellow,
        Color::Blue => Ansi::DarkBlue,
        Color::Magenta => Ansi::DarkMagenta,
        Color::Cyan => Ansi::DarkCyan,
        Color::Gray => Ansi::Grey,
        Color::DarkGray => Ansi::DarkGrey,
        Color::LightRed => Ansi::Red,
        Color::LightGreen => Ansi::Green,
        Color::LightYellow => Ansi::Yellow,
        Color::LightBlue => Ansi::Blue,
        Color::LightMagenta => Ansi::Magenta,
        Color::LightCyan => Ansi::Cyan,
        Color::White => Ansi::White,
        Color::Rgb(r, g, b) => Ansi::Rgb { r, g, b },
        Color::Indexed(i) => Ansi::AnsiValue(i),
    })
}
