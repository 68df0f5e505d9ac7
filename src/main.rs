//! Litania
//!
//! A small desktop app (built with the `iced` GUI library) that lists paired
//! `<name>.txt` / `<name>.mp3` litanies from a local folder, shows the text and
//! recites the audio for whichever one you press, and can refresh the folder
//! from a remote FTP archive.
//!
//! Layout:
//! - `core::*` = scanning, playback engine, sync client (no iced imports)
//! - `gui::*`  = state, update router, view, subscription
//!
//! The GUI thread never blocks: scans and syncs run on background threads and
//! come back as `Message`s; audio lives on a dedicated engine thread that is
//! told what to do over a channel.

mod core;
mod gui;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(gui::boot, gui::update, gui::view)
        .subscription(gui::subscription)
        .title("Litania")
        .run()
}
