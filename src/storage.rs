use crate::day::Day;
use crate::errors::AppError;
use crate::habits;
use crate::models::Habit;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

pub const PROFILES_KEY: &str = "profiles";

pub fn habits_key(profile: &str) -> String {
    format!("habits_{profile}")
}

/// String-keyed store of JSON text, mirrored to a single file. Every `set`
/// rewrites the file before returning.
#[derive(Debug, Default)]
pub struct KvStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl KvStore {
    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub async fn open(path: &Path) -> Self {
        let entries = match fs::read(path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    error!("failed to parse data file: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                error!("failed to read data file: {err}");
                BTreeMap::new()
            }
        };

        Self {
            path: Some(path.to_path_buf()),
            entries,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub async fn set(&mut self, key: &str, value: String) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value);
        if let Some(path) = &self.path {
            let payload = serde_json::to_vec_pretty(&self.entries).map_err(AppError::internal)?;
            fs::write(path, payload).await?;
            debug!(key, path = %path.display(), "persisted");
        }
        Ok(())
    }
}

fn read_json<T: DeserializeOwned + Default>(store: &KvStore, key: &str) -> T {
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            error!("ignoring malformed {key}: {err}");
            T::default()
        }
    }
}

async fn write_json<T: Serialize + ?Sized>(
    store: &mut KvStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let payload = serde_json::to_string(value).map_err(AppError::internal)?;
    store.set(key, payload).await
}

pub fn load_profiles(store: &KvStore) -> Vec<String> {
    read_json(store, PROFILES_KEY)
}

pub async fn save_profiles(store: &mut KvStore, profiles: &[String]) -> Result<(), AppError> {
    write_json(store, PROFILES_KEY, profiles).await
}

pub fn load_habits(store: &KvStore, profile: &str, today: Day) -> Vec<Habit> {
    habits::refresh(read_json(store, &habits_key(profile)), today)
}

pub async fn save_habits(
    store: &mut KvStore,
    profile: &str,
    habits: &[Habit],
) -> Result<(), AppError> {
    write_json(store, &habits_key(profile), habits).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn day(y: i32, m: u32, d: u32) -> Day {
        Day::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[tokio::test]
    async fn missing_and_malformed_values_load_empty() {
        let mut store = KvStore::in_memory();
        assert!(load_profiles(&store).is_empty());

        store.set(PROFILES_KEY, "{not json".to_string()).await.unwrap();
        assert!(load_profiles(&store).is_empty());

        store
            .set(&habits_key("Alice"), "[{\"id\":\"x\"}]".to_string())
            .await
            .unwrap();
        assert!(load_habits(&store, "Alice", day(2026, 1, 5)).is_empty());
    }

    #[tokio::test]
    async fn habits_round_trip_by_day() {
        let today = day(2026, 1, 5);
        let mut habit = Habit::new(1, "Exercise");
        habit.completed_dates = vec![day(2026, 1, 4), today];
        habit.completed = true;

        let mut store = KvStore::in_memory();
        save_habits(&mut store, "Alice", std::slice::from_ref(&habit))
            .await
            .unwrap();

        let raw = store.get("habits_Alice").unwrap();
        assert!(raw.contains("\"completedDates\":[\"2026-01-04\",\"2026-01-05\"]"));
        assert_eq!(load_habits(&store, "Alice", today), vec![habit]);
    }

    #[tokio::test]
    async fn timestamps_from_older_files_are_normalized() {
        let mut store = KvStore::in_memory();
        store
            .set(
                &habits_key("Alice"),
                r#"[{"id":1,"name":"Read","completed":true,"completedDates":["2026-01-03T12:00:00+00:00"]}]"#
                    .to_string(),
            )
            .await
            .unwrap();

        let loaded = load_habits(&store, "Alice", day(2026, 1, 5));
        assert_eq!(loaded.len(), 1);
        assert!(!loaded[0].completed);
        assert_eq!(loaded[0].completed_dates.len(), 1);
    }

    #[tokio::test]
    async fn file_store_persists_each_set() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        let mut store = KvStore::open(&path).await;
        save_profiles(&mut store, &["Alice".to_string(), "Bob".to_string()])
            .await
            .unwrap();

        let reopened = KvStore::open(&path).await;
        assert_eq!(load_profiles(&reopened), vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[tokio::test]
    async fn corrupt_file_opens_empty() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        std::fs::write(&path, b"garbage").unwrap();
        let store = KvStore::open(&path).await;
        assert!(store.get(PROFILES_KEY).is_none());
    }
}
