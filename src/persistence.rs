//! High score storage
//!
//! The score lives in a plain text file holding one decimal number.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score, creating the file with `0` when it is missing
    pub fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            log::debug!("creating high score file {:?}", self.path);
            self.save(0)?;
            return Ok(0);
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        text.trim()
            .parse::<u32>()
            .with_context(|| format!("High score file {:?} does not hold a number", self.path))
    }

    /// Overwrite the stored score
    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write high score to {:?}", self.path))
    }

    /// Store `score` only if it beats the current record. Returns true when it did.
    pub fn record(&self, score: u32) -> Result<bool> {
        let best = self.load()?;
        if score <= best {
            return Ok(false);
        }

        self.save(score)?;
        log::info!("new high score {} (was {})", score, best);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> HighScoreStore {
        HighScoreStore::new(dir.path().join("highscore.txt"))
    }

    #[test]
    fn test_missing_file_loads_zero_and_creates_it() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert_eq!(store.load().unwrap(), 0);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "0");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store.save(120).unwrap();
        assert_eq!(store.load().unwrap(), 120);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "120");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), " 40\n").unwrap();

        assert_eq!(store.load().unwrap(), 40);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "lots").unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_record_only_raises() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert!(store.record(50).unwrap());
        assert!(!store.record(30).unwrap());
        assert!(!store.record(50).unwrap());
        assert_eq!(store.load().unwrap(), 50);

        assert!(store.record(60).unwrap());
        assert_eq!(store.load().unwrap(), 60);
    }
}
