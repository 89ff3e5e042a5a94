// ── Persisted session user ──
//
// One JSON document in the platform data dir. A missing file means
// nobody is signed in.

use std::path::{Path, PathBuf};

use tracing::debug;

use hostdesk_core::SessionUser;

use crate::{ConfigError, home_fallback, project_dirs};

/// Default location of `session.json`.
pub fn session_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback().join("session.json"),
        |dirs| dirs.data_dir().join("session.json"),
    )
}

pub fn load_session() -> Result<Option<SessionUser>, ConfigError> {
    load_session_at(&session_path())
}

pub fn load_session_at(path: &Path) -> Result<Option<SessionUser>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn save_session(user: &SessionUser) -> Result<(), ConfigError> {
    save_session_at(&session_path(), user)
}

pub fn save_session_at(path: &Path, user: &SessionUser) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(user)?)?;
    debug!(path = %path.display(), kind = %user.kind, "session saved");
    Ok(())
}

/// Remove the session file. Returns `false` if there was none.
pub fn clear_session() -> Result<bool, ConfigError> {
    clear_session_at(&session_path())
}

pub fn clear_session_at(path: &Path) -> Result<bool, ConfigError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
