//! Core data types shared between core logic and the UI.
//!
//! These are boring bags of data on purpose: no GUI code, no filesystem IO,
//! no protocol code. Easy to display, easy to unit test.

use std::path::PathBuf;

/// One litany as discovered on disk: a base name plus the directory it lives
/// in. The text and audio files are both optional on disk; paths are derived,
/// never checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitanyAsset {
    /// Base name shared by `<name>.txt` and `<name>.mp3`.
    pub name: String,

    /// Directory the pair lives in.
    pub dir: PathBuf,
}

impl LitanyAsset {
    /// Path of the text half (`<dir>/<name>.txt`). May not exist.
    pub fn text_path(&self) -> PathBuf {
        self.dir.join(format!("{}.txt", self.name))
    }

    /// Path of the audio half (`<dir>/<name>.mp3`). May not exist.
    pub fn audio_path(&self) -> PathBuf {
        self.dir.join(format!("{}.mp3", self.name))
    }
}
