mod record;

pub use record::AddressRecord;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum Error {
    #[error("entry already exists: {0}")]
    Conflict(String),
    #[error("no entry for key: {0}")]
    NotFound(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Address book backed by a flat JSON file. Every successful mutation is
/// followed by a synchronous full rewrite of that file, before the caller
/// gets its answer. Keys keep their insertion order through serialization.
pub struct Store {
    path: PathBuf,
    entries: IndexMap<String, AddressRecord>,
}

impl Store {
    /// Load the store from `path`. A missing file starts the seed entries;
    /// a file that cannot be read or parsed starts an empty store (logged,
    /// recoverable) rather than failing startup.
    pub fn load(path: &Path) -> Self {
        let entries = if path.is_file() {
            match Self::read(path) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "Discarding unusable data file {}, starting empty: {}",
                        path.display(),
                        e
                    );
                    IndexMap::new()
                }
            }
        } else {
            info!(
                "No data file at {}, starting with seed entries",
                path.display()
            );
            Self::seed()
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    fn read(path: &Path) -> Result<IndexMap<String, AddressRecord>, Error> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Insert a new entry. The record is validated first; an existing key
    /// is a conflict and leaves the store untouched.
    pub fn create(&mut self, key: String, record: AddressRecord) -> Result<(), Error> {
        record.validate()?;
        if self.entries.contains_key(&key) {
            return Err(Error::Conflict(key));
        }
        self.entries.insert(key, record);
        self.persist()
    }

    /// Replace the value at an existing key. The key itself is never
    /// recomputed from the new record's firstname/name.
    pub fn update(&mut self, key: &str, record: AddressRecord) -> Result<(), Error> {
        if !self.entries.contains_key(key) {
            return Err(Error::NotFound(key.to_string()));
        }
        record.validate()?;
        self.entries.insert(key.to_string(), record);
        self.persist()
    }

    pub fn delete(&mut self, key: &str) -> Result<(), Error> {
        if self.entries.shift_remove(key).is_none() {
            return Err(Error::NotFound(key.to_string()));
        }
        self.persist()
    }

    pub fn all(&self) -> &IndexMap<String, AddressRecord> {
        &self.entries
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite the whole file: 2-space indent, non-ASCII kept literal.
    /// Not an atomic rename, so a crash mid-write can truncate the file.
    pub fn persist(&self) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn seed() -> IndexMap<String, AddressRecord> {
        let entries = [
            AddressRecord {
                firstname: "Jonas".to_string(),
                name: "Mahlburg".to_string(),
                street: "Meudonstr".to_string(),
                street_nr: "14".to_string(),
                plz: "29221".to_string(),
                city: "Celle".to_string(),
                ..Default::default()
            },
            AddressRecord {
                firstname: "HM".to_string(),
                name: "Software".to_string(),
                street: "Rampenweg".to_string(),
                street_nr: "1b".to_string(),
                city: "Adelheidsdorf".to_string(),
                ..Default::default()
            },
        ];
        entries.into_iter().map(|r| (r.key(), r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_record(firstname: &str, name: &str, city: &str) -> AddressRecord {
        AddressRecord {
            firstname: firstname.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_file_starts_with_seed_entries() {
        let dir = tempdir().unwrap();
        let store = Store::load(&dir.path().join("addresses.json"));
        assert_eq!(store.len(), 2);
        assert!(store.contains_key("Jonas Mahlburg"));
        assert!(store.contains_key("HM Software"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.json");
        fs::write(&path, "{ this is not json").unwrap();
        let store = Store::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn create_then_reload_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.json");
        let mut store = Store::load(&path);
        let record = AddressRecord {
            firstname: "Jörg".to_string(),
            name: "Müller".to_string(),
            street: "Hauptstraße".to_string(),
            street_nr: "7".to_string(),
            ..Default::default()
        };
        store.create(record.key(), record.clone()).unwrap();

        // Non-ASCII is kept literal in the file.
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Hauptstraße"));

        let reloaded = Store::load(&path);
        assert_eq!(reloaded.all(), store.all());
        assert_eq!(reloaded.all().get("Jörg Müller"), Some(&record));
    }

    #[test]
    fn create_conflict_leaves_existing_value_unchanged() {
        let dir = tempdir().unwrap();
        let mut store = Store::load(&dir.path().join("addresses.json"));
        let original = new_record("Anna", "Bauer", "Celle");
        store.create(original.key(), original.clone()).unwrap();

        let replacement = new_record("Anna", "Bauer", "Berlin");
        let err = store.create(replacement.key(), replacement).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(store.all().get("Anna Bauer"), Some(&original));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn create_rejects_missing_required_fields() {
        let dir = tempdir().unwrap();
        let mut store = Store::load(&dir.path().join("addresses.json"));
        let record = new_record("", "Bauer", "");
        let err = store.create(record.key(), record).unwrap_err();
        assert!(matches!(err, Error::MissingField("firstname")));
    }

    #[test]
    fn update_missing_key_is_not_found() {
        let dir = tempdir().unwrap();
        let mut store = Store::load(&dir.path().join("addresses.json"));
        let err = store
            .update("Anna Bauer", new_record("Anna", "Bauer", "Berlin"))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_replaces_value_but_never_the_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.json");
        let mut store = Store::load(&path);
        store
            .create("Anna Bauer".to_string(), new_record("Anna", "Bauer", ""))
            .unwrap();

        // Renaming via update keeps the entry under its original key.
        let renamed = new_record("Anna", "Schmidt", "Berlin");
        store.update("Anna Bauer", renamed.clone()).unwrap();
        assert!(store.contains_key("Anna Bauer"));
        assert!(!store.contains_key("Anna Schmidt"));
        assert_eq!(store.all().get("Anna Bauer"), Some(&renamed));

        let reloaded = Store::load(&path);
        assert_eq!(reloaded.all().get("Anna Bauer"), Some(&renamed));
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = Store::load(&dir.path().join("addresses.json"));
        store
            .create("Anna Bauer".to_string(), new_record("Anna", "Bauer", ""))
            .unwrap();
        let update = new_record("Anna", "Bauer", "Berlin");
        store.update("Anna Bauer", update.clone()).unwrap();
        store.update("Anna Bauer", update.clone()).unwrap();
        assert_eq!(store.all().get("Anna Bauer"), Some(&update));
    }

    #[test]
    fn delete_removes_and_second_delete_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.json");
        let mut store = Store::load(&path);
        store.delete("Jonas Mahlburg").unwrap();
        assert!(!store.contains_key("Jonas Mahlburg"));

        let err = store.delete("Jonas Mahlburg").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let reloaded = Store::load(&path);
        assert!(!reloaded.contains_key("Jonas Mahlburg"));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn insertion_order_survives_persist_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.json");
        let mut store = Store::load(&path);
        for (firstname, name) in [("Zoe", "Abel"), ("Max", "Weber"), ("Eva", "Kern")] {
            store
                .create(
                    format!("{} {}", firstname, name),
                    new_record(firstname, name, ""),
                )
                .unwrap();
        }
        let keys: Vec<&String> = store.all().keys().collect();
        let reloaded = Store::load(&path);
        let reloaded_keys: Vec<&String> = reloaded.all().keys().collect();
        assert_eq!(keys, reloaded_keys);
    }
}
