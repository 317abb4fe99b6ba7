use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};

use notify::{EventKind, RecursiveMode, Watcher};
use umbra_grid::Grid;

use super::init::{load_map, random_cell};
use super::state::{App, Tile};

/// Watch `path` on a background thread; each change sends on the returned channel.
pub fn spawn_map_watcher(path: PathBuf) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    spawn_watcher(path, RecursiveMode::NonRecursive, tx);
    rx
}

pub(crate) fn spawn_watcher(path: PathBuf, mode: RecursiveMode, tx: Sender<()>) {
    std::thread::spawn(move || {
        let watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => {
                        let _ = tx.send(());
                    }
                    _ => {}
                }
            }
        });
        let mut watcher = match watcher {
            Ok(w) => w,
            Err(e) => {
                log::warn!("cannot watch {}: {}", path.display(), e);
                return;
            }
        };
        if let Err(e) = watcher.watch(path.as_path(), mode) {
            log::warn!("cannot watch {}: {}", path.display(), e);
            return;
        }
        log::debug!("watching {}", path.display());
        loop {
            std::thread::sleep(std::time::Duration::from_secs(3600));
        }
    });
}

impl App {
    /// Reload the map if its file changed. Returns whether a reload happened.
    pub fn process_map_events(&mut self) -> bool {
        let Some(rx) = &self.map_event_rx else {
            return false;
        };
        if rx.try_iter().count() == 0 {
            return false;
        }
        let (w, h) = (self.grid.width(), self.grid.height());
        match load_map(self.map_path.as_deref(), w, h) {
            Ok(map) => {
                self.replace_map(&map);
                log::info!(target: "viewer", "map reloaded, observer {}", self.observer);
                true
            }
            Err(e) => {
                log::warn!(target: "viewer", "map reload failed: {}", e);
                false
            }
        }
    }

    /// Swap in a new map. Lighting history is dropped; the observer stays put
    /// unless it would fall off the new grid.
    pub fn replace_map(&mut self, map: &Grid<char>) {
        self.grid = map.map(|&ch| Tile::new(ch));
        if !self.grid.contains(self.observer) {
            self.observer = random_cell(&mut self.rng, self.grid.width(), self.grid.height());
        }
        self.dirty = true;
    }
}
