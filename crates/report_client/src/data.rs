//! Locating and loading the local records file.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;

/// File name looked up next to the client executable.
pub const DEFAULT_DATA_FILE: &str = "records.json";

/// Returns the directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf, ClientError> {
    let exe = env::current_exe().map_err(|source| ClientError::Environment {
        what: "the executable location",
        source,
    })?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without the shorthand, and all paths when no home directory is known, are returned
/// unchanged.
pub fn expand_home(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(input),
    };

    match BaseDirs::new() {
        Some(dirs) => dirs
            .home_dir()
            .join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(input),
    }
}

/// Asks on stdin for the path of the data file.
pub fn prompt_stdin(default_path: &Path) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(
        stdout,
        "Default data not found at {:?}.\nEnter full path to your JSON data file: ",
        default_path.display().to_string()
    )?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}

/// Returns `dir/records.json` when present, otherwise the path supplied by `prompt`.
///
/// `prompt` receives the default path that was not found.  Its answer is trimmed and a leading
/// `~` is expanded; the resolved path must name an existing file.
pub fn locate_data_file<F>(dir: &Path, prompt: F) -> Result<PathBuf, ClientError>
where
    F: FnOnce(&Path) -> io::Result<String>,
{
    let default_path = dir.join(DEFAULT_DATA_FILE);
    if default_path.is_file() {
        return Ok(default_path);
    }

    debug!("No data file at {}", default_path.display());
    let answer = prompt(&default_path).map_err(ClientError::Prompt)?;
    let path = expand_home(answer.trim());
    if path.is_file() {
        Ok(path)
    } else {
        Err(ClientError::DataFileNotFound(path))
    }
}

/// Reads and parses the records file.
pub fn load_records(path: &Path) -> Result<Value, ClientError> {
    let contents = fs::read_to_string(path).map_err(|source| ClientError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ClientError::Json {
        path: path.to_path_buf(),
        source,
    })
}
