use std::fs;
use std::path::{Path, PathBuf};

use crate::user::User;

use super::error::SessionError;
use super::traits::SessionStore;

/// File name of the session record inside the store directory.
pub const SESSION_FILE: &str = "current_user.json";

/// Filesystem-backed session store.
///
/// The record lives at `{dir}/current_user.json` and is replaced atomically:
/// writes go to a temp file under `{dir}/.tmp` which is then renamed over
/// the record.
pub struct FileSessionStore {
    dir: PathBuf,
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a session store rooted at `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        fs::create_dir_all(dir.join(".tmp"))?;
        let path = dir.join(SESSION_FILE);
        Ok(Self { dir, path })
    }

    /// The file the session record is kept in.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.dir.join(".tmp").join(uuid::Uuid::new_v4().to_string())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, user: &User) -> Result<(), SessionError> {
        let data = serde_json::to_vec_pretty(user)?;

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, &data) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }

    fn load(&self) -> Result<Option<User>, SessionError> {
        match fs::read(&self.path) {
            Ok(data) => Ok(Some(serde_json::from_slice(&data)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
