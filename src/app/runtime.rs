use std::error::Error;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{execute, queue};

use super::events::command_for;
use super::state::App;

impl App {
    /// Run the interactive loop until the user quits. The terminal is restored
    /// even when drawing fails.
    pub fn run(&mut self, poll: Duration) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        let result = self.event_loop(&mut stdout, poll);

        if let Err(err) = disable_raw_mode() {
            log::error!(target: "viewer", "failed to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(stdout, Show, LeaveAlternateScreen) {
            log::error!(target: "viewer", "failed to leave alternate screen: {}", err);
        }
        result
    }

    fn event_loop(&mut self, out: &mut Stdout, poll: Duration) -> Result<(), Box<dyn Error>> {
        loop {
            self.process_map_events();
            if self.dirty {
                self.update_light()?;
                self.draw(out)?;
            }
            if event::poll(poll)?
                && let Event::Key(key) = event::read()?
                && let Some(cmd) = command_for(key)
                && !self.apply(cmd)
            {
                log::info!(target: "viewer", "quit");
                return Ok(());
            }
        }
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        for (y, row) in self.frame().iter().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;
            for g in row {
                match g.color {
                    Some(c) => queue!(out, SetForegroundColor(c), Print(g.ch), ResetColor)?,
                    None => queue!(out, Print(g.ch))?,
                }
            }
        }
        let width = self.grid.width();
        let height = self.grid.height() as u16;
        let [first, second] = self.status_lines(width);
        queue!(
            out,
            MoveTo(0, height),
            SetAttribute(Attribute::Reverse),
            Print(first),
            SetAttribute(Attribute::Reset),
            MoveTo(0, height + 1),
            Print(second),
            MoveTo(self.observer.col as u16, self.observer.row as u16),
            Show
        )?;
        out.flush()
    }
}
