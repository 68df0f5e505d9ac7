//! gui/update/library.rs
//! Scan lifecycle + litany selection + the Random/Clear controls.

use iced::Task;
use rand::Rng;

use super::super::state::{LITANY_VOLUME, Litania, Message};
use super::playback;
use super::util::spawn_blocking;
use crate::core::assets;
use crate::core::types::LitanyAsset;

pub(crate) fn rescan(state: &mut Litania) -> Task<Message> {
    if state.scanning {
        return Task::none();
    }

    state.scanning = true;
    state.status = "Reading litanies...".to_string();

    let dir = state.litanies_dir();

    Task::perform(
        spawn_blocking(move || assets::scan_assets(&dir)),
        Message::RescanFinished,
    )
}

pub(crate) fn rescan_finished(
    state: &mut Litania,
    result: Result<Vec<LitanyAsset>, String>,
) -> Task<Message> {
    state.scanning = false;

    match result {
        Ok(rows) => {
            state.status = format!("Loaded {} litanies", rows.len());
            state.assets = rows;
            // New list = old index is meaningless.
            state.selected = None;
        }
        Err(e) => {
            // Keep previous list; just report.
            state.status = format!("Scan error: {e}");
        }
    }

    Task::none()
}

/// Click on a litany button: select it, show its text, recite its audio.
pub(crate) fn litany_pressed(state: &mut Litania, i: usize) -> Task<Message> {
    let Some(asset) = state.assets.get(i).cloned() else {
        return Task::none();
    };

    state.selected = Some(i);

    match assets::load_text(&asset) {
        Ok(text) => {
            state.litany_text = text;
            state.status = format!("Reciting: {}", asset.name);
        }
        // Audio can still exist without the text half; recite anyway.
        Err(e) => state.status = e,
    }

    playback::play(state, asset.audio_path(), LITANY_VOLUME)
}

/// The Recite control replays the current selection.
pub(crate) fn recite_pressed(state: &mut Litania) -> Task<Message> {
    let Some(i) = state.selected else {
        state.status = "No litany selected.".to_string();
        return Task::none();
    };
    litany_pressed(state, i)
}

pub(crate) fn random_pressed(state: &mut Litania) -> Task<Message> {
    if state.assets.is_empty() {
        state.status = "No litanies to draw from.".to_string();
        return Task::none();
    }

    let i = rand::thread_rng().gen_range(0..state.assets.len());
    let name = state.assets[i].name.clone();

    state.selected = Some(i);
    state.litany_text = format!("You recite: {name}\n\n+++ Praise the Omnissiah! +++");
    state.status = format!("Drawn by lot: {name}");

    Task::none()
}

pub(crate) fn clear_pressed(state: &mut Litania) -> Task<Message> {
    state.litany_text.clear();
    Task::none()
}
