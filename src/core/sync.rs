//! core/sync.rs
//! One-shot reconciliation of the local litany folder against a remote FTP
//! archive.
//!
//! Shape of the operation: connect -> login -> cwd -> LIST -> download the
//! entries we are missing -> QUIT. The decision loop (`sync_with`) is written
//! against the small `RemoteStore` trait so it can be exercised without a
//! live server; `suppaftp::FtpStream` provides the only real implementation.
//!
//! Rules:
//! - only plain files whose name ends in `.txt`/`.mp3` are considered;
//!   directories and symlinks in the listing are skipped
//! - a download is skipped iff a local file with the same name and the exact
//!   same byte size already exists
//! - any failure aborts the whole sync with an error; the control connection
//!   is closed on every exit path

use std::env;
use std::fs;
use std::path::Path;

use suppaftp::FtpStream;
use suppaftp::list;
use tracing::{debug, warn};

use super::assets;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 21;
const DEFAULT_USER: &str = "anonymous";
const DEFAULT_PASSWORD: &str = "anonymous";
const DEFAULT_REMOTE_DIR: &str = "litanies";

/// Where and how to reach the archive.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub remote_dir: String,
}

impl SyncConfig {
    /// Fixed endpoint with per-field environment overrides
    /// (`LITANIA_FTP_HOST`, `_PORT`, `_USER`, `_PASSWORD`, `_DIR`).
    pub fn from_env() -> Self {
        Self {
            host: env_or("LITANIA_FTP_HOST", DEFAULT_HOST),
            port: env::var("LITANIA_FTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            user: env_or("LITANIA_FTP_USER", DEFAULT_USER),
            password: env_or("LITANIA_FTP_PASSWORD", DEFAULT_PASSWORD),
            remote_dir: env_or("LITANIA_FTP_DIR", DEFAULT_REMOTE_DIR),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// What the remote listing told us about one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub size: u64,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// Counts reported back to the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub downloaded: usize,
    pub skipped: usize,
}

/// The two remote operations the reconciliation loop needs.
pub trait RemoteStore {
    fn list(&mut self) -> Result<Vec<RemoteEntry>, String>;
    fn fetch(&mut self, name: &str) -> Result<Vec<u8>, String>;
}

/// Full sync against the configured FTP archive.
///
/// An unreachable server fails the whole attempt with a connection error;
/// nothing local is touched in that case.
pub fn sync_assets(cfg: &SyncConfig, local_dir: &Path) -> Result<SyncOutcome, String> {
    let mut ftp = FtpStream::connect(format!("{}:{}", cfg.host, cfg.port))
        .map_err(|e| format!("could not reach {}:{}: {e}", cfg.host, cfg.port))?;

    let result = login_and_sync(&mut ftp, cfg, local_dir);

    // Close the control connection on every exit path.
    let _ = ftp.quit();

    result
}

fn login_and_sync(
    ftp: &mut FtpStream,
    cfg: &SyncConfig,
    local_dir: &Path,
) -> Result<SyncOutcome, String> {
    ftp.login(&cfg.user, &cfg.password)
        .map_err(|e| format!("login as {} failed: {e}", cfg.user))?;
    ftp.cwd(&cfg.remote_dir)
        .map_err(|e| format!("remote directory {} not available: {e}", cfg.remote_dir))?;

    let mut store = FtpStore { stream: ftp };
    sync_with(&mut store, local_dir)
}

/// The reconciliation loop, independent of any transport.
pub fn sync_with(store: &mut dyn RemoteStore, local_dir: &Path) -> Result<SyncOutcome, String> {
    fs::create_dir_all(local_dir).map_err(|e| format!("{}: {e}", local_dir.display()))?;

    let entries = store.list()?;
    let mut outcome = SyncOutcome::default();

    for entry in entries {
        if entry.kind != EntryKind::File {
            continue;
        }
        if !is_bare_file_name(&entry.name) {
            warn!("skipping listing entry with a path in its name: {:?}", entry.name);
            continue;
        }
        if !assets::is_litany_file(Path::new(&entry.name)) {
            continue;
        }

        if !needs_download(local_dir, &entry) {
            outcome.skipped += 1;
            continue;
        }

        let bytes = store.fetch(&entry.name)?;

        let dest = local_dir.join(&entry.name);
        fs::write(&dest, &bytes).map_err(|e| format!("{}: {e}", dest.display()))?;
        debug!("downloaded {} ({} bytes)", entry.name, bytes.len());

        outcome.downloaded += 1;
    }

    Ok(outcome)
}

/// Listing names are only trusted as bare file names. Anything carrying path
/// components (`../escaped.mp3`, `a/b.mp3`, absolute paths) would let the
/// server write outside the local directory via `local_dir.join(name)`.
fn is_bare_file_name(name: &str) -> bool {
    Path::new(name).file_name() == Some(std::ffi::OsStr::new(name))
}

/// Skip iff a local file of the same name and exact byte size exists.
fn needs_download(local_dir: &Path, entry: &RemoteEntry) -> bool {
    match fs::metadata(local_dir.join(&entry.name)) {
        Ok(meta) => !(meta.is_file() && meta.len() == entry.size),
        Err(_) => true,
    }
}

/// `RemoteStore` over a live FTP control connection.
struct FtpStore<'a> {
    stream: &'a mut FtpStream,
}

impl RemoteStore for FtpStore<'_> {
    fn list(&mut self) -> Result<Vec<RemoteEntry>, String> {
        let lines = self
            .stream
            .list(None)
            .map_err(|e| format!("remote listing failed: {e}"))?;

        let mut entries = Vec::with_capacity(lines.len());

        for line in lines {
            match list::File::try_from(line.as_str()) {
                Ok(f) => entries.push(RemoteEntry {
                    name: f.name().to_string(),
                    size: f.size() as u64,
                    kind: if f.is_directory() {
                        EntryKind::Directory
                    } else if f.is_symlink() {
                        EntryKind::Symlink
                    } else {
                        EntryKind::File
                    },
                }),
                // Some servers interleave lines we can't parse; skip them.
                Err(e) => warn!("unparsable listing line {line:?}: {e}"),
            }
        }

        Ok(entries)
    }

    fn fetch(&mut self, name: &str) -> Result<Vec<u8>, String> {
        self.stream
            .retr_as_buffer(name)
            .map(|buf| buf.into_inner())
            .map_err(|e| format!("download of {name} failed: {e}"))
    }
}
