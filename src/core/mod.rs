//! core/mod.rs
//!
//! The non-GUI half of the app:
//! - Discover litany assets on disk (directory scan)
//! - Drive audio playback (engine thread owning rodio)
//! - Reconcile the local folder against the remote FTP archive
//!
//! All of this returns plain data for the GUI to render and reports failures
//! as `Result<_, String>` so messages can travel through iced tasks.

pub mod assets;
pub mod playback;
pub mod sync;
pub mod types;
