use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use std::{env, fs, thread};

use anyhow::{Context, Result};

/// How often `wait_for_file` re-checks the path.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Directory the application resolves its folders against: the directory
/// containing the executable when it can be determined (the installed or
/// bundled case), otherwise the current working directory.
pub fn base_dir() -> PathBuf {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.to_path_buf();
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Absolute path of the named folder under `base_dir`, created if absent.
pub fn sub_folder(name: &str) -> Result<PathBuf> {
    sub_folder_in(&base_dir(), name)
}

fn sub_folder_in(base: &Path, name: &str) -> Result<PathBuf> {
    let folder = base.join(name);
    if !folder.exists() {
        fs::create_dir_all(&folder)
            .with_context(|| format!("creating folder {}", folder.display()))?;
    }
    folder
        .canonicalize()
        .with_context(|| format!("resolving folder {}", folder.display()))
}

/// Absolute path of `file` inside the named folder, creating the folder if
/// needed. The file itself does not have to exist.
pub fn sub_file(folder: &str, file: &str) -> Result<PathBuf> {
    Ok(sub_folder(folder)?.join(file))
}

/// Blocks until `path` exists or `timeout` elapses, polling every 0.5s.
/// Returns whether the path showed up in time.
pub fn wait_for_file(path: &Path, timeout: Duration) -> bool {
    let start = Instant::now();
    while !path.exists() {
        if start.elapsed() > timeout {
            return false;
        }
        thread::sleep(POLL_INTERVAL);
    }
    true
}

/// Regular files directly inside `folder`. Unreadable or missing folders
/// yield an empty list.
pub fn list_files(folder: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(folder) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect()
}

/// Same as `list_files` but returns file names only.
pub fn list_file_names(folder: &Path) -> Vec<String> {
    list_files(folder)
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}
