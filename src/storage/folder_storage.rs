use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::traits::KeyValueStorage;


/// A storage that keeps every key in its own JSON file inside a folder
#[derive(Clone, Debug, PartialEq)]
pub struct FolderStorage {
    folder: PathBuf,
}

impl FolderStorage {
    /// Use `folder` as a backing folder. It will be created on the first write if needed.
    pub fn new(folder: &Path) -> Self {
        Self { folder: PathBuf::from(folder) }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// The file a given key is stored into
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut file_name = sanitize_filename::sanitize(key);
        if file_name.is_empty() {
            file_name = String::from("_");
        }
        self.folder.join(format!("{}.json", file_name))
    }
}

impl KeyValueStorage for FolderStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Unable to read file {:?}: {}", path, err).into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        std::fs::create_dir_all(&self.folder)?;

        // Write aside, then rename, so that a key is never left half-written
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        if let Err(err) = std::fs::write(&tmp_path, value) {
            return Err(format!("Unable to save file {:?}: {}", tmp_path, err).into());
        }
        std::fs::rename(&tmp_path, &path)?;
        log::trace!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), Box<dyn Error>> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
