//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Litania, Message};

mod library;
mod playback;
mod sync;
mod util;

pub(crate) fn update(state: &mut Litania, message: Message) -> Task<Message> {
    match message {
        Message::Opened => {
            // Fire-and-forget opening clip, then read the folder.
            let cue = playback::play_cue(state, super::state::UiCue::Opening);
            Task::batch([cue, library::rescan(state)])
        }

        Message::TickPlayback => playback::drain_events(state),

        // Library
        Message::RescanFinished(result) => library::rescan_finished(state, result),
        Message::LitanyPressed(i) => library::litany_pressed(state, i),

        // Controls
        Message::RecitePressed => library::recite_pressed(state),
        Message::RandomPressed => library::random_pressed(state),
        Message::ClearPressed => library::clear_pressed(state),

        // Hover cues
        Message::HoverCue(cue) => playback::play_cue(state, cue),
        Message::HoverEnded => playback::stop(state),

        // Remote sync
        Message::RefreshPressed => sync::refresh_pressed(state),
        Message::SyncFinished(result) => sync::sync_finished(state, result),
    }
}
