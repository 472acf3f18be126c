#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use chrono::NaiveDate;
use expense_tracker::{
    core::{ExpenseTracker, TrackerSettings},
    services::{CoreError, FixedClock, KeyValueStore, MemoryStore},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated application home directory.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn test_clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date"))
}

/// Opens a tracker over `store` with default settings and a fixed clock.
pub fn open_tracker<S>(store: S) -> ExpenseTracker
where
    S: KeyValueStore + 'static,
{
    ExpenseTracker::open(
        Box::new(store),
        TrackerSettings::default(),
        Box::new(test_clock()),
    )
    .expect("open tracker")
}

/// Tracker over a shared in-memory store the test can inspect afterwards.
pub fn memory_tracker() -> (Arc<MemoryStore>, ExpenseTracker) {
    let store = Arc::new(MemoryStore::new());
    let tracker = open_tracker(Arc::clone(&store));
    (store, tracker)
}

/// Store wrapper that counts writes and can be switched to fail them.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
    fail_writes: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(CoreError::Storage("quota exceeded".into()));
        }
        self.inner.set(key, value)
    }
}
