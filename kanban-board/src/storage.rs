//! Key-value storage adapters for board persistence.
//!
//! The board persists into two independent slots (columns and tasks),
//! each a JSON document under a string key. The adapter seam keeps the
//! store testable with an in-memory fake and portable to any
//! localStorage-like backend.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Slot key for the serialized column list
pub const COLUMNS_KEY: &str = "kanban_columns";
/// Slot key for the serialized task map
pub const TASKS_KEY: &str = "kanban_tasks";

/// A minimal localStorage-shaped persistence seam.
///
/// `load` returns `None` for an absent slot; malformed *content* is the
/// store's concern, not the adapter's.
pub trait StorageAdapter {
    /// Read the raw value of a slot, if present
    fn load(&self, key: &str) -> Option<String>;

    /// Write a slot. Callers treat failures as non-fatal.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory adapter backed by a shared map.
///
/// Cloning yields a handle onto the same slots, so a test can keep one
/// clone and hand the other to the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a slot
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed adapter: one `<key>.json` file per slot under a
/// directory. A missing or unreadable file is an absent slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create an adapter rooted at the given directory. The directory
    /// is created lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageAdapter for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.slot_path(key)).ok()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
