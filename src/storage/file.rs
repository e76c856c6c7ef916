//! File-backed classifier store.
//!
//! Each record is a JSON file `<key>.json` inside the store directory. Writes
//! go to a temporary file in the same directory which is then renamed over
//! the target, so a crash never leaves a half-written classifier behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::classifier::ClassifierRecord;
use crate::error::{Result, SpellRankError};
use crate::storage::{ClassifierStore, validate_key};

const EXTENSION: &str = "json";

/// Stores classifier records as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileClassifierStore {
    directory: PathBuf,
    pretty: bool,
}

impl FileClassifierStore {
    /// Open a store rooted at `directory`, creating it if needed.
    pub fn open<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;
        Ok(FileClassifierStore {
            directory,
            pretty: false,
        })
    }

    /// Write indented JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Directory holding the records.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the record for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.directory.join(format!("{key}.{EXTENSION}")))
    }
}

impl ClassifierStore for FileClassifierStore {
    fn load(&self, key: &str) -> Result<ClassifierRecord> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(SpellRankError::not_found(key));
        }

        let reader = BufReader::new(File::open(&path)?);
        let record: ClassifierRecord = serde_json::from_reader(reader)?;
        debug!(
            "loaded classifier '{key}' ({} classes) from {}",
            record.classes.len(),
            path.display()
        );
        Ok(record)
    }

    fn save(&self, key: &str, record: &ClassifierRecord) -> Result<()> {
        let path = self.path_for(key)?;

        let temp_file = NamedTempFile::new_in(&self.directory)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            if self.pretty {
                serde_json::to_writer_pretty(&mut writer, record)?;
            } else {
                serde_json::to_writer(&mut writer, record)?;
            }
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(&path)
            .map_err(|e| SpellRankError::Io(e.error))?;

        info!("saved classifier '{key}' to {}", path.display());
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.path_for(key).map(|p| p.exists()).unwrap_or(false)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && validate_key(stem).is_ok()
            {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
