use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, KeyEvent, read, poll};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::config::CELL_COLUMNS;
use crate::error::{GameError, Result};
use crate::grid::{Cell, Grid};

pub type Coords = (u16, u16);

/// Owns the terminal while the game runs. The playfield is drawn inside a
/// one-character border at the top left of the screen.
pub struct TermManager {
    grid: Grid,
    size: Coords,
    stdout: Stdout,
}

impl TermManager {
    pub fn new(grid: Grid) -> Result<Self> {
        let size = terminal::size()?;
        Ok(TermManager { grid, size, stdout: stdout() })
    }

    /// Columns and rows the bordered playfield takes up.
    pub fn playfield_size(&self) -> Coords {
        let width = self.grid.width().max(0) as u16 * CELL_COLUMNS + 2;
        let height = self.grid.height().max(0) as u16 + 2;
        (width, height)
    }

    pub fn ensure_fits(&self) -> Result<()> {
        let needed = self.playfield_size();
        if needed.0 > self.size.0 || needed.1 > self.size.1 {
            return Err(GameError::TerminalTooSmall { needed, available: self.size });
        }
        Ok(())
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Everything pressed since the last call. Never blocks.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = self.playfield_size();
        let (end_x, end_y) = (width - 1, height - 1);

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch, None)?;
            self.print_at((x, end_y), ch, None)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|', None)?;
            self.print_at((end_x, y), '|', None)?;
        }

        Ok(())
    }

    /// Paints a grid cell. Cells outside the grid, like the head of a snake
    /// that just left it, are skipped.
    pub fn fill_cell(&mut self, cell: Cell, ch: char, color: Color) -> Result<()> {
        if let Some((x, y)) = self.cell_origin(cell) {
            for dx in 0..CELL_COLUMNS {
                self.print_at((x + dx, y), ch, Some(color))?;
            }
        }
        Ok(())
    }

    pub fn clear_cell(&mut self, cell: Cell) -> Result<()> {
        if let Some((x, y)) = self.cell_origin(cell) {
            for dx in 0..CELL_COLUMNS {
                self.print_at((x + dx, y), ' ', None)?;
            }
        }
        Ok(())
    }

    pub fn draw_text(&mut self, pos: Coords, text: &str, color: Color) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(text),
            style::ResetColor
        )?;
        Ok(())
    }

    /// Boxed lines centered on the playfield.
    pub fn show_message(&mut self, lines: &[&str], color: Color) -> Result<()> {
        let (field_width, field_height) = self.playfield_size();
        let msg_height = lines.len() as u16 + 2;
        let msg_width = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) as u16 + 2;
        let top_left = (
            (field_width / 2).saturating_sub(msg_width / 2),
            (field_height / 2).saturating_sub(msg_height / 2),
        );

        let blank = " ".repeat(msg_width as usize);
        self.draw_text(top_left, &blank, color)?;
        self.draw_text((top_left.0, top_left.1 + msg_height - 1), &blank, color)?;

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.draw_text((top_left.0, top_left.1 + i as u16 + 1), &padded_line, color)?;
        }

        self.flush()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn cell_origin(&self, cell: Cell) -> Option<Coords> {
        if !self.grid.contains(cell) {
            return None;
        }
        Some((1 + cell.x as u16 * CELL_COLUMNS, 1 + cell.y as u16))
    }

    fn print_at(&mut self, pos: Coords, ch: char, color: Option<Color>) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1))?;
        match color {
            Some(color) => queue!(self.stdout, style::SetForegroundColor(color), style::Print(ch), style::ResetColor)?,
            None => queue!(self.stdout, style::Print(ch))?,
        }
        Ok(())
    }
}
