use crate::errors::AppError;
use crate::models::{normalize_code, AddressRecord};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Deduplicated, append-only sequence of resolved lookups.
///
/// Insertion order is discovery order and there is at most one entry per
/// distinct normalized code; the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    entries: Vec<AddressRecord>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from stored entries, re-applying deduplication so a
    /// hand-edited file cannot break the invariant.
    pub fn from_entries(entries: Vec<AddressRecord>) -> Self {
        let mut list = Self::new();
        for record in entries {
            list.insert(record);
        }
        list
    }

    /// Whether a record with the same normalized code is already present.
    pub fn contains(&self, code: &str) -> bool {
        let code = normalize_code(code);
        self.entries.iter().any(|r| r.normalized_code() == code)
    }

    /// Appends the record unless its normalized code is already present.
    ///
    /// Returns whether the record was added. An already-present code is
    /// never re-added or updated.
    pub fn insert(&mut self, record: AddressRecord) -> bool {
        if self.contains(&record.code) {
            return false;
        }
        self.entries.push(record);
        true
    }

    pub fn get(&self, index: usize) -> Option<&AddressRecord> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[AddressRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Storage port for the lookup history.
///
/// Injected into the view so tests can substitute an in-memory fake for
/// the file-backed store.
pub trait HistoryRepository {
    /// Loads the persisted history. Absent or unparsable data degrades
    /// silently to an empty list.
    fn load(&self) -> HistoryList;

    /// Rewrites the full history.
    fn save(&self, history: &HistoryList) -> Result<(), AppError>;
}

/// History persisted as a JSON array of address records in a single file.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HistoryRepository for FileHistoryRepository {
    fn load(&self) -> HistoryList {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("No history file at {}: {}", self.path.display(), e);
                return HistoryList::new();
            }
        };

        match serde_json::from_str::<Vec<AddressRecord>>(&raw) {
            Ok(entries) => {
                let history = HistoryList::from_entries(entries);
                tracing::info!("Loaded {} history entries", history.len());
                history
            }
            Err(e) => {
                tracing::warn!(
                    "Corrupt history at {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                HistoryList::new()
            }
        }
    }

    fn save(&self, history: &HistoryList) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string(history.entries())?;

        // Write-then-rename so a crash mid-write cannot corrupt the file.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            "Saved {} history entries to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory repository used by tests as a substitute store.
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    saved: Mutex<Vec<AddressRecord>>,
    save_count: Mutex<usize>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store as if a previous session had saved these entries.
    pub fn with_entries(entries: Vec<AddressRecord>) -> Self {
        Self {
            saved: Mutex::new(entries),
            save_count: Mutex::new(0),
        }
    }

    /// The entries currently persisted.
    pub fn snapshot(&self) -> Vec<AddressRecord> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load(&self) -> HistoryList {
        HistoryList::from_entries(self.snapshot())
    }

    fn save(&self, history: &HistoryList) -> Result<(), AppError> {
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = history.entries().to_vec();
        *self.save_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
