use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use umbra_grid::ascii::{FLOOR, WALL};

use super::state::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move { dr: i32, dc: i32 },
    Grow,
    Shrink,
    ToggleBlock,
    ToggleColor,
    ToggleDebug,
    Quit,
}

/// Keypad digits move like the arrows, with 7 9 1 3 for diagonals.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let mv = |dr, dc| Some(Command::Move { dr, dc });
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('7') => mv(-1, -1),
        KeyCode::Char('8') | KeyCode::Up => mv(-1, 0),
        KeyCode::Char('9') => mv(-1, 1),
        KeyCode::Char('4') | KeyCode::Left => mv(0, -1),
        KeyCode::Char('6') | KeyCode::Right => mv(0, 1),
        KeyCode::Char('1') => mv(1, -1),
        KeyCode::Char('2') | KeyCode::Down => mv(1, 0),
        KeyCode::Char('3') => mv(1, 1),
        KeyCode::Char('+') => Some(Command::Grow),
        KeyCode::Char('-') => Some(Command::Shrink),
        KeyCode::Char(' ') => Some(Command::ToggleBlock),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ToggleColor),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::ToggleDebug),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

impl App {
    pub fn blocked(&self) -> bool {
        self.grid.get(self.observer).is_some_and(|t| t.glyph == WALL)
    }

    /// Apply one command. Returns `false` when the viewer should exit.
    pub fn apply(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Move { dr, dc } => {
                let next = self.observer.offset(dr, dc);
                if self.grid.contains(next) {
                    self.observer = next;
                }
            }
            Command::Grow => self.radius = (self.radius + 1).min(self.max_radius),
            Command::Shrink => self.radius = (self.radius - 1).max(0),
            Command::ToggleBlock => {
                let blocked = self.blocked();
                if let Some(tile) = self.grid.get_mut(self.observer) {
                    tile.glyph = if blocked { FLOOR } else { WALL };
                }
            }
            Command::ToggleColor => self.color = !self.color,
            Command::ToggleDebug => self.debug = !self.debug,
            Command::Quit => return false,
        }
        log::debug!(target: "viewer", "{:?} -> observer {} radius {}", cmd, self.observer, self.radius);
        self.dirty = true;
        true
    }
}
