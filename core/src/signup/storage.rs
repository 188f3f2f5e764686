//! File-backed key-value store
//!
//! Behaves like browser local storage: string keys, string values, everything
//! in one JSON object on disk. A missing file is an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StorageError;

const STORAGE_FILE: &str = "local_storage.json";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/launchpad/local_storage.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("launchpad").join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    pub fn set_item(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.into());
        self.save(&items)
    }

    pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let encoded = serde_json::to_string_pretty(items).map_err(StorageError::Encode)?;
        fs::write(&self.path, encoded).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Email list stored as a JSON array string under one storage key
#[derive(Debug, Clone)]
pub struct SubscriberList {
    storage: LocalStorage,
    key: String,
}

impl SubscriberList {
    pub fn new(storage: LocalStorage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn emails(&self) -> Result<Vec<String>, StorageError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
            path: self.storage.path().to_path_buf(),
            source,
        })
    }

    pub fn contains(&self, email: &str) -> Result<bool, StorageError> {
        Ok(self.emails()?.iter().any(|known| known == email))
    }

    /// Append `email` unless it is already listed. Returns true if added.
    pub fn add(&self, email: &str) -> Result<bool, StorageError> {
        let mut emails = self.emails()?;
        if emails.iter().any(|known| known == email) {
            return Ok(false);
        }
        emails.push(email.to_string());

        let encoded = serde_json::to_string(&emails).map_err(StorageError::Encode)?;
        self.storage.set_item(&self.key, encoded)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("nested").join(STORAGE_FILE));
        (dir, storage)
    }

    #[test]
    fn missing_file_is_empty() {
        let (_dir, storage) = temp_storage();
        assert_eq!(storage.get_item("anything").unwrap(), None);
    }

    #[test]
    fn set_get_remove() {
        let (_dir, storage) = temp_storage();
        storage.set_item("consent", "yes").unwrap();
        storage.set_item("theme", "dark").unwrap();
        assert_eq!(storage.get_item("consent").unwrap().as_deref(), Some("yes"));

        storage.remove_item("consent").unwrap();
        assert_eq!(storage.get_item("consent").unwrap(), None);
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (_dir, storage) = temp_storage();
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "{not json").unwrap();
        assert!(matches!(
            storage.get_item("x"),
            Err(StorageError::Decode { .. })
        ));
    }

    #[test]
    fn subscriber_list_is_a_json_array_under_its_key() {
        let (_dir, storage) = temp_storage();
        let list = SubscriberList::new(storage.clone(), "guestogram_emails");

        assert!(list.emails().unwrap().is_empty());
        assert!(list.add("a@example.com").unwrap());
        assert!(list.add("b@example.com").unwrap());
        assert!(!list.add("a@example.com").unwrap());

        assert_eq!(
            storage.get_item("guestogram_emails").unwrap().as_deref(),
            Some(r#"["a@example.com","b@example.com"]"#)
        );
        assert!(list.contains("b@example.com").unwrap());
        assert!(!list.contains("c@example.com").unwrap());
    }
}
