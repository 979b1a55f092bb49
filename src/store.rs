//! High-score persistence - a single durable best-score scalar
//!
//! The best score is kept as a small JSON file under the platform config
//! directory (overridable via `SUMSTACK_SCORE_PATH`). Loading degrades to
//! zero when the file is missing or unreadable; a session never depends on
//! storage working.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
struct ScoreFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    high_score: u32,
}

impl Default for ScoreFile {
    fn default() -> Self {
        Self {
            version: default_version(),
            high_score: 0,
        }
    }
}

fn default_version() -> u32 {
    1
}

/// File-backed store for the best score across sessions
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Resolve the store path from the environment
    ///
    /// `SUMSTACK_SCORE_PATH` wins when set; otherwise the file lives at
    /// `$XDG_CONFIG_HOME/sumstack/scores.json` (with a `~/.config`
    /// fallback).
    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("SUMSTACK_SCORE_PATH") {
            return Self {
                path: PathBuf::from(explicit),
            };
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("sumstack");
        path.push("scores.json");
        Self { path }
    }

    /// Use an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted best score, falling back to zero on any failure
    pub fn load(&self) -> u32 {
        let Ok(bytes) = fs::read(&self.path) else {
            return 0;
        };
        serde_json::from_slice::<ScoreFile>(&bytes)
            .map(|file| file.high_score)
            .unwrap_or(0)
    }

    /// Write the best score
    pub fn save(&self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create score directory {}", parent.display()))?;
            }
        }
        let file = ScoreFile {
            version: default_version(),
            high_score,
        };
        let text = serde_json::to_string_pretty(&file).context("encode score file")?;
        fs::write(&self.path, text)
            .with_context(|| format!("write score file {}", self.path.display()))
    }

    /// Record a session score, persisting it only when it beats the stored
    /// best. Returns the resulting best score.
    pub fn record(&self, score: u32) -> Result<u32> {
        let best = self.load();
        if score > best {
            self.save(score)?;
            Ok(score)
        } else {
            Ok(best)
        }
    }
}
