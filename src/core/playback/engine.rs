//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - at most one Sink (the current recital)
//! - command loop + a periodic tick to notice clips ending
//!
//! Emits PlayerEvent back via a channel. No Iced imports.
//!
//! Single-session invariant: `play_file` always tears the previous sink down
//! before it opens the new file, so two clips are never live at once and a
//! failed open leaves no half-initialized session behind.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use super::{PlayerCommand, PlayerEvent};

const TICK_MS: u64 = 200;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    // Current recital
    sink: Option<Sink>,
    current_path: Option<PathBuf>,

    // Event channel
    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>) -> Result<Self, String> {
        // rodio 0.21.x: build/open the default output stream via OutputStreamBuilder
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("failed to open default audio output: {e}"))?;

        Ok(Self {
            stream,
            sink: None,
            current_path: None,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            return;
                        }
                    }
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
    }

    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Play { path, volume } => {
                if let Err(e) = self.play_file(path, volume) {
                    let _ = self.event_tx.send(PlayerEvent::Error(e));
                }
            }
            PlayerCommand::Stop => {
                self.stop_internal();
                let _ = self.event_tx.send(PlayerEvent::Stopped);
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self) {
        if let Some(sink) = &self.sink {
            if sink.empty() && self.current_path.is_some() {
                debug!("recital finished: {:?}", self.current_path);
                let _ = self.event_tx.send(PlayerEvent::Finished);
                self.stop_internal();
            }
        }
    }

    fn play_file(&mut self, path: PathBuf, volume: f32) -> Result<(), String> {
        // Previous session goes first, whatever happens next. A failed open
        // below then leaves no session at all, not a half-initialized one.
        self.stop_internal();

        let decoder = open_clip(&path)?;

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(volume.clamp(0.0, 1.0));
        sink.append(decoder);
        sink.play();

        self.current_path = Some(path.clone());
        self.sink = Some(sink);

        let _ = self.event_tx.send(PlayerEvent::Started { path });

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_path = None;
    }
}

/// Open and decode one clip. Split out of `play_file` so the failure paths
/// can be exercised without an audio output device.
fn open_clip(path: &Path) -> Result<Decoder<BufReader<File>>, String> {
    let file =
        File::open(path).map_err(|e| format!("litany audio not found: {} ({e})", path.display()))?;

    Decoder::new(BufReader::new(file)).map_err(|e| format!("decode failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::mpsc;

    /// Minimal PCM wav: 16-bit mono 8 kHz, 800 silent samples.
    fn write_wav(path: &Path) {
        let sample_count: u32 = 800;
        let data_len = sample_count * 2;

        let mut bytes = Vec::with_capacity(44 + data_len as usize);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&8000u32.to_le_bytes()); // sample rate
        bytes.extend_from_slice(&16000u32.to_le_bytes()); // byte rate
        bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
        bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.resize(44 + data_len as usize, 0);

        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn open_clip_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("ghost.mp3");

        let err = open_clip(&missing).err().unwrap();
        assert!(err.contains("not found"), "got: {err}");
        assert!(err.contains("ghost.mp3"), "got: {err}");
    }

    #[test]
    fn open_clip_reports_undecodable_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let bogus = tmp.path().join("noise.mp3");
        fs::write(&bogus, b"this is not audio").unwrap();

        let err = open_clip(&bogus).err().unwrap();
        assert!(err.contains("decode failed"), "got: {err}");
    }

    #[test]
    fn open_clip_accepts_a_valid_clip() {
        let tmp = tempfile::tempdir().unwrap();
        let clip = tmp.path().join("ok.wav");
        write_wav(&clip);

        assert!(open_clip(&clip).is_ok());
    }

    #[test]
    #[ignore = "needs an audio output device"]
    fn replacing_a_recital_releases_the_previous_sink() {
        let tmp = tempfile::tempdir().unwrap();
        let first = tmp.path().join("first.wav");
        let second = tmp.path().join("second.wav");
        write_wav(&first);
        write_wav(&second);

        let (tx, _rx) = mpsc::channel();
        let mut engine = PlaybackEngine::new(tx).unwrap();

        engine.play_file(first, 1.0).unwrap();
        assert!(engine.sink.is_some());

        // The old sink is taken and dropped before the new file is opened,
        // so exactly one session exists afterwards.
        engine.play_file(second.clone(), 0.5).unwrap();
        assert!(engine.sink.is_some());
        assert_eq!(engine.current_path.as_deref(), Some(second.as_path()));
    }

    #[test]
    #[ignore = "needs an audio output device"]
    fn failed_open_leaves_no_half_initialized_session() {
        let tmp = tempfile::tempdir().unwrap();
        let clip = tmp.path().join("clip.wav");
        write_wav(&clip);

        let (tx, _rx) = mpsc::channel();
        let mut engine = PlaybackEngine::new(tx).unwrap();

        engine.play_file(clip, 1.0).unwrap();
        assert!(engine.sink.is_some());

        let err = engine
            .play_file(tmp.path().join("ghost.mp3"), 1.0)
            .unwrap_err();
        assert!(err.contains("not found"), "got: {err}");

        // The previous session was torn down and nothing replaced it.
        assert!(engine.sink.is_none());
        assert!(engine.current_path.is_none());
    }
}
