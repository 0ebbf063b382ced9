//! The one piece of persisted local state: the bearer token, saved as a
//! small JSON file so a CLI login can be reused across invocations.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};

use crate::auth::Session;

#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Save a session's token to a JSON file.
pub fn save_session(session: &Session, path: &str) -> Result<()> {
    let file =
        File::create(path).map_err(|e| anyhow!("Failed to create token file {}: {}", path, e))?;
    let writer = BufWriter::new(file);
    let stored = StoredToken {
        token: session.token().to_string(),
    };
    serde_json::to_writer_pretty(writer, &stored)
        .map_err(|e| anyhow!("Failed to write token to {}: {}", path, e))?;
    Ok(())
}

/// Load a previously saved session from a JSON file.
pub fn load_session(path: &str) -> Result<Session> {
    let file =
        File::open(path).map_err(|e| anyhow!("Failed to open token file {}: {}", path, e))?;
    let reader = BufReader::new(file);
    let stored: StoredToken = serde_json::from_reader(reader)
        .map_err(|e| anyhow!("Failed to parse token file {}: {}", path, e))?;
    Ok(Session::new(stored.token))
}

/// Delete the token file (logout). Missing file is fine.
pub fn clear_session(path: &str) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow!("Failed to remove token file {}: {}", path, e)),
    }
}
