//! gui/update/playback.rs
//! GUI-playback engine bridge.
//!
//! Design goals:
//! - GUI never touches rodio directly.
//! - Playing is fire-and-forget: the command goes to the engine thread and
//!   the update returns immediately. Failures come back as events and land
//!   in the status line via TickPlayback polling.
//! - One session at a time: the engine serializes commands, so a hover-exit
//!   Stop can never race the teardown inside a Play.

use std::path::PathBuf;

use iced::Task;
use tracing::debug;

use super::super::state::{CUE_VOLUME, Litania, Message, UiCue};
use crate::core::playback::{PlayerCommand, PlayerEvent, start_playback};

fn ensure_engine(state: &mut Litania) {
    if state.playback.is_some() && state.playback_events.is_some() {
        return;
    }

    let (controller, events) = start_playback();

    state.playback = Some(controller);
    state.playback_events = Some(std::cell::RefCell::new(events));
}

pub(crate) fn drain_events(state: &mut Litania) -> Task<Message> {
    let Some(rx_cell) = state.playback_events.as_ref() else {
        return Task::none();
    };

    let mut drained: Vec<PlayerEvent> = Vec::new();
    {
        // Receiver::try_recv only needs &self, so borrow() is enough.
        let rx = rx_cell.borrow();
        while let Ok(ev) = rx.try_recv() {
            drained.push(ev);
        }
    }

    for ev in drained {
        handle_event(state, ev);
    }

    Task::none()
}

/// Ask the engine to recite a clip, replacing whatever is playing.
pub(crate) fn play(state: &mut Litania, path: PathBuf, volume: f32) -> Task<Message> {
    ensure_engine(state);

    let Some(controller) = &state.playback else {
        state.status = "Playback engine failed to initialize.".into();
        return Task::none();
    };

    controller.send(PlayerCommand::Play { path, volume });
    Task::none()
}

/// Hover cue (or the opening clip): quieter, same replacement semantics.
pub(crate) fn play_cue(state: &mut Litania, cue: UiCue) -> Task<Message> {
    play(state, cue.path(), CUE_VOLUME)
}

pub(crate) fn stop(state: &mut Litania) -> Task<Message> {
    // No engine yet means nothing is playing; don't spin one up just to stop.
    if let Some(controller) = &state.playback {
        controller.send(PlayerCommand::Stop);
    }
    Task::none()
}

fn handle_event(state: &mut Litania, event: PlayerEvent) {
    match event {
        PlayerEvent::Started { path } => debug!("recital started: {}", path.display()),
        PlayerEvent::Stopped => debug!("recital stopped"),
        PlayerEvent::Finished => debug!("recital finished"),
        PlayerEvent::Error(err) => {
            state.status = format!("Playback error: {err}");
        }
    }
}
