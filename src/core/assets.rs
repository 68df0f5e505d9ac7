//! core/assets.rs
//! Litany discovery: one flat directory of `<name>.txt` / `<name>.mp3` pairs.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::types::LitanyAsset;

/// Scan the litany directory and return one asset per distinct base name.
///
/// - Creates the directory when it does not exist (empty list, not an error).
/// - Only `.txt` and `.mp3` files count; everything else is ignored.
/// - A `name.txt`/`name.mp3` pair collapses into one asset.
/// - Names come back sorted (core owns ordering, GUI shouldn't).
pub fn scan_assets(dir: &Path) -> Result<Vec<LitanyAsset>, String> {
    fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;

    let entries = fs::read_dir(dir).map_err(|e| format!("{}: {e}", dir.display()))?;

    let mut names: BTreeSet<String> = BTreeSet::new();

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if !path.is_file() || !is_litany_file(&path) {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.insert(stem.to_string());
        }
    }

    Ok(names
        .into_iter()
        .map(|name| LitanyAsset {
            name,
            dir: dir.to_path_buf(),
        })
        .collect())
}

/// Read the text half of an asset.
pub fn load_text(asset: &LitanyAsset) -> Result<String, String> {
    let path = asset.text_path();
    fs::read_to_string(&path).map_err(|e| format!("Litany text not found: {} ({e})", path.display()))
}

/// Extension rule shared with the sync client: `.txt` or `.mp3`,
/// case-insensitive.
pub(crate) fn is_litany_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(dir: &Path, name: &str, bytes: &[u8]) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(bytes).unwrap();
    }

    #[test]
    fn pairs_collapse_to_one_name_and_strangers_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        touch(dir, "activation.txt", b"rise");
        touch(dir, "activation.mp3", b"\xff\xfb");
        touch(dir, "circuit.mp3", b"\xff\xfb");
        touch(dir, "cog.txt", b"bless");
        touch(dir, "notes.doc", b"nope");
        touch(dir, "readme", b"nope");

        let assets = scan_assets(dir).unwrap();
        let names: Vec<&str> = assets.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, vec!["activation", "circuit", "cog"]);
    }

    #[test]
    fn missing_directory_is_created_and_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("litanies");

        assert!(!dir.exists());
        let assets = scan_assets(&dir).unwrap();

        assert!(assets.is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn extensions_are_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        touch(dir, "loud.MP3", b"\xff\xfb");
        touch(dir, "quiet.TXT", b"shh");

        let assets = scan_assets(dir).unwrap();
        let names: Vec<&str> = assets.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(names, vec!["loud", "quiet"]);
    }

    #[test]
    fn load_text_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();

        let asset = LitanyAsset {
            name: "ghost".to_string(),
            dir: tmp.path().to_path_buf(),
        };

        let err = load_text(&asset).unwrap_err();
        assert!(err.contains("not found"), "got: {err}");
        assert!(err.contains("ghost.txt"), "got: {err}");
    }

    #[test]
    fn paths_derive_from_name_and_dir() {
        let asset = LitanyAsset {
            name: "cog".to_string(),
            dir: Path::new("somewhere").to_path_buf(),
        };

        assert!(asset.text_path().ends_with("cog.txt"));
        assert!(asset.audio_path().ends_with("cog.mp3"));
    }
}
