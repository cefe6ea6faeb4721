//! # Position Persistence
//!
//! Save/load the viewer position to `~/.lectern/state.json` so a restart
//! reopens the text where it was left.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.
//! Persistence is best effort: a failed save is logged and the viewer keeps
//! running.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::display::ContextViewMode;
use crate::core::state::App;

/// What survives a restart: where the reader was and how they were viewing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ViewerState {
    pub reference: String,
    pub view_mode: ContextViewMode,
    pub updated_at: i64,
}

/// Returns `~/.lectern/`, creating it if needed.
pub fn state_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".lectern");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn state_path() -> io::Result<PathBuf> {
    Ok(state_dir()?.join("state.json"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Save the current viewer position. Failures are logged, never fatal —
/// call from the TUI on SaveState effect or quit.
pub fn save_viewer_state(app: &App) {
    let state = ViewerState {
        reference: app.current_reference(),
        view_mode: app.view_mode,
        updated_at: Utc::now().timestamp(),
    };
    let result = state_path().and_then(|path| atomic_write_json(&path, &state));
    match result {
        Ok(()) => debug!("Viewer state saved: {}", state.reference),
        Err(e) => warn!("Failed to save viewer state: {}", e),
    }
}

/// Load the saved viewer position, if any.
pub fn load_viewer_state() -> Option<ViewerState> {
    let path = match state_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("Failed to locate state file: {}", e);
            return None;
        }
    };
    if !path.exists() {
        return None;
    }
    let json = match fs::read_to_string(&path) {
        Ok(j) => j,
        Err(e) => {
            warn!("Failed to read viewer state: {}", e);
            return None;
        }
    };
    match serde_json::from_str(&json) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("Malformed viewer state, ignoring: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_state_json_round_trip() {
        let state = ViewerState {
            reference: "JHN 3:16".to_string(),
            view_mode: ContextViewMode::BySection,
            updated_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: ViewerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_atomic_write_json_replaces_file() {
        let dir = std::env::temp_dir().join(format!("lectern-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.json");

        atomic_write_json(&path, &serde_json::json!({"reference": "GEN 1:1"})).unwrap();
        atomic_write_json(&path, &serde_json::json!({"reference": "EXO 2:2"})).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("EXO 2:2"));
        assert!(!dir.join("state.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
