//! File logging for the terminal front end
//!
//! The alternate screen owns stdout and stderr while the game runs, so log
//! records go to a file or nowhere.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Install a global logger writing to `path`, truncating it first
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file).context("Failed to install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.log");

        init(&path, LevelFilter::Info).unwrap();
        log::info!("hello from the log test");
        log::debug!("filtered out");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the log test"));
        assert!(!contents.contains("filtered out"));

        // A second global logger is rejected
        let again = dir.path().join("again.log");
        assert!(init(&again, LevelFilter::Info).is_err());
    }

    #[test]
    fn test_init_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("snake.log");
        assert!(init(&path, LevelFilter::Info).is_err());
    }
}
