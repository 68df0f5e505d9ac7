//! core/playback/mod.rs
//! Litania playback core module.
//!
//! The GUI never touches rodio directly. It holds a `PlaybackController` and
//! sends commands; the engine thread answers over an event channel. Play is
//! fire-and-forget from the caller's point of view, but failures come back as
//! `PlayerEvent::Error` so they are never silently dropped.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

mod engine;

pub use engine::PlaybackEngine;

#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    /// Replace whatever is playing with this clip. The previous session is
    /// torn down before the new file is opened.
    Play { path: PathBuf, volume: f32 },
    Stop,
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Started { path: PathBuf },
    Stopped,
    /// The clip played to its natural end.
    Finished,
    Error(String),
}

/// Spawns the playback thread and returns:
/// - PlaybackController (store in GUI state)
/// - Receiver<PlayerEvent> (drained by an iced subscription tick)
pub fn start_playback() -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone()) {
            Ok(e) => e,
            Err(msg) => {
                let _ = event_tx.send(PlayerEvent::Error(msg));
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController { command_tx }, event_rx)
}
