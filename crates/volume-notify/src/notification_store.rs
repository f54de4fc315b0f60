//! Persistence of the last notification id between invocations.
//!
//! The file holds the decimal id and nothing else. Reusing the id lets the
//! next run replace the visible notification instead of stacking a new one.

use crate::{AppError, AppResult, NotificationId};

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

/// File-backed store for the last shown notification id.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    path: PathBuf,
}

impl NotificationStore {
    /// Create a store backed by `path`. Nothing is touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the last id, or `None` if there is no usable one.
    ///
    /// Missing, unreadable or corrupt files are treated as "no prior
    /// notification" and never fail. `0` is the server's "no id" value.
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn load_last_id(&self) -> Option<NotificationId> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(error = %e, "No previous notification id");
                return None;
            }
        };

        match contents.trim().parse::<u32>() {
            Ok(0) => None,
            Ok(id) => Some(NotificationId(id)),
            Err(e) => {
                debug!(error = %e, contents = %contents.trim(), "Ignoring corrupt notification id");
                None
            }
        }
    }

    /// Overwrite the file with `id`, creating it if absent.
    ///
    /// Writes to a sibling temp file then renames, so a concurrent reader
    /// sees either the old id or the new one.
    #[track_caller]
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn save_last_id(&self, id: NotificationId) -> AppResult<()> {
        let mut temp_name = self.path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        if let Err(e) = write_then_rename(&temp_path, &self.path, id) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                debug!(error = %cleanup, "No temp file to clean up");
            }
            return Err(AppError::from(e));
        }

        debug!(%id, "Notification id saved");

        Ok(())
    }
}

fn write_then_rename(temp_path: &Path, path: &Path, id: NotificationId) -> io::Result<()> {
    {
        let mut temp_file = fs::File::create(temp_path)?;
        temp_file.write_all(id.to_string().as_bytes())?;
        temp_file.sync_all()?;
    }

    fs::rename(temp_path, path)
}
