//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Litania')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (polling playback events)

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::boot;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
