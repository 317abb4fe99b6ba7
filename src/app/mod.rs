mod events;
mod init;
mod render;
mod runtime;
mod state;
mod step;
mod watchers;

pub use state::App;
pub(crate) use watchers::spawn_watcher;
