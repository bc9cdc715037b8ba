//! File-backed roster: a directory of named JSON documents.
//!
//! The concrete form of the agent-repository collaborator: teams and
//! evaluator weight sets are stored one file per name and listed by
//! scanning the directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("roster io: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster document {name}: {source}")]
    Format {
        name: String,
        source: serde_json::Error,
    },

    #[error("no roster entry named {0}")]
    NotFound(String),
}

/// A directory of JSON documents keyed by name
pub struct Roster {
    dir: PathBuf,
}

impl Roster {
    /// Open (creating if needed) a roster directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, RosterError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<(), RosterError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| RosterError::Format {
            name: name.to_string(),
            source,
        })?;
        fs::write(self.path(name), json)?;
        Ok(())
    }

    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, RosterError> {
        let path = self.path(name);
        if !path.exists() {
            return Err(RosterError::NotFound(name.to_string()));
        }
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|source| RosterError::Format {
            name: name.to_string(),
            source,
        })
    }

    /// Names of every stored document, sorted
    pub fn list(&self) -> Result<Vec<String>, RosterError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Convenience so callers don't have to thread a directory through
pub fn default_dir() -> PathBuf {
    Path::new("rosters").to_path_buf()
}
