//! gui/update/sync.rs
//! Refresh lifecycle: run the FTP sync off-thread, then rescan the folder.

use iced::Task;

use super::super::state::{Litania, Message};
use super::library;
use super::util::spawn_blocking;
use crate::core::sync::{SyncConfig, SyncOutcome, sync_assets};

pub(crate) fn refresh_pressed(state: &mut Litania) -> Task<Message> {
    if state.syncing {
        return Task::none();
    }

    state.syncing = true;
    state.status = "Synchronizing with the archive...".to_string();

    let cfg = SyncConfig::from_env();
    let dir = state.litanies_dir();

    Task::perform(
        spawn_blocking(move || sync_assets(&cfg, &dir)),
        Message::SyncFinished,
    )
}

pub(crate) fn sync_finished(
    state: &mut Litania,
    result: Result<SyncOutcome, String>,
) -> Task<Message> {
    state.syncing = false;

    match result {
        Ok(outcome) => {
            state.status = format!(
                "Synchronized: {} downloaded, {} already current",
                outcome.downloaded, outcome.skipped
            );
            // Pick up whatever arrived.
            library::rescan(state)
        }
        Err(e) => {
            // Local assets are untouched; say so and stop there.
            state.status = format!("Synchronization did not complete: {e}");
            Task::none()
        }
    }
}
