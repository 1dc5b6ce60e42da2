use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset};
use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Storage backed by the local filesystem. Paths are used as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, data)?;
        Ok(())
    }

    fn set_file_times(&self, path: &Path, time: DateTime<FixedOffset>) -> Result<()> {
        let time = FileTime::from_unix_time(time.timestamp(), time.timestamp_subsec_nanos());
        filetime::set_file_times(path, time, time)?;
        Ok(())
    }
}
