//! GUI state + messages.
//! Pure data definitions used by update/* + view.rs.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use iced::Task;

use crate::core::playback::{PlaybackController, PlayerEvent};
use crate::core::sync::SyncOutcome;
use crate::core::types::LitanyAsset;

/// Folder of `<name>.txt` / `<name>.mp3` pairs, relative to the working dir.
pub(crate) const LITANIES_DIR: &str = "litanies";

/// Folder of fixed UI cue clips (hover sounds, opening clip).
pub(crate) const CUES_DIR: &str = "cues";

/// Litanies are recited at full volume; hover cues stay in the background.
pub(crate) const LITANY_VOLUME: f32 = 1.0;
pub(crate) const CUE_VOLUME: f32 = 0.8;

/// Shown in the text panel before anything is pressed.
pub(crate) const OPENING_LITANY: &str = "+++ Litany of Activation +++\n\n\
Wake, O spirit of the machine,\n\
and sanctify this humble terminal.\n\
From the archive grant us voice,\n\
that the words may again be heard.";

/// UI event kind -> cue clip dispatch table. Hovering a control (or opening
/// the page) resolves to one fixed clip under `cues/`; the clip plays through
/// the same single-session controller as any litany.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiCue {
    Recite,
    Refresh,
    Random,
    Opening,
}

impl UiCue {
    pub(crate) fn path(self) -> PathBuf {
        let file = match self {
            UiCue::Recite => "recite.mp3",
            UiCue::Refresh => "refresh.mp3",
            UiCue::Random => "random.mp3",
            UiCue::Opening => "opening.mp3",
        };
        Path::new(CUES_DIR).join(file)
    }
}

/// App state
pub(crate) struct Litania {
    pub status: String,

    /// True while a directory scan runs in the background.
    pub scanning: bool,
    /// True while a sync runs in the background (Refresh is disabled then).
    pub syncing: bool,

    // Library
    pub assets: Vec<LitanyAsset>,
    pub selected: Option<usize>,

    // Text panel
    pub litany_text: String,

    // Playback engine handles (created lazily on first play)
    pub playback: Option<PlaybackController>,
    pub playback_events: Option<RefCell<Receiver<PlayerEvent>>>,
}

impl Default for Litania {
    fn default() -> Self {
        Self {
            status: "Press a litany to recite it.".to_string(),
            scanning: false,
            syncing: false,

            assets: Vec::new(),
            selected: None,

            litany_text: OPENING_LITANY.to_string(),

            playback: None,
            playback_events: None,
        }
    }
}

impl Litania {
    pub(crate) fn litanies_dir(&self) -> PathBuf {
        PathBuf::from(LITANIES_DIR)
    }
}

/// Initial state + boot work: show the opening litany, play the opening cue,
/// scan the folder.
pub(crate) fn boot() -> (Litania, Task<Message>) {
    (Litania::default(), Task::done(Message::Opened))
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Page just opened (sent once from boot).
    Opened,

    /// Periodic poll of the playback event channel.
    TickPlayback,

    // Library
    RescanFinished(Result<Vec<LitanyAsset>, String>),
    LitanyPressed(usize),

    // Controls
    RecitePressed,
    RandomPressed,
    ClearPressed,

    // Hover cues
    HoverCue(UiCue),
    HoverEnded,

    // Remote sync
    RefreshPressed,
    SyncFinished(Result<SyncOutcome, String>),
}
