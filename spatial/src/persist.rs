//! Remembered card sizes and the key-value storage they live in.
//!
//! Sizes are stored as one JSON object under [`SIZES_STORAGE_KEY`], mapping a
//! section key to `{ "width", "height" }`. The storage backend is a trait so
//! the browser host can plug in `localStorage` while tests use
//! [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. A missing key, an unavailable backend, or a value
//! that fails to parse all read as "no saved sizes" and are logged at warn
//! level; failed writes are logged and dropped.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::consts::SIZES_STORAGE_KEY;
use crate::geometry::{Size, clamp_size};
use crate::manifest::Section;

/// Sizes the user has chosen, keyed by section.
pub type SavedSizes = BTreeMap<Section, Size>;

/// Failure talking to the size storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend does not exist in this environment (private mode, no window, quota disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected a read or write.
    #[error("storage access failed: {0}")]
    Access(String),
    /// The stored value is not the expected JSON shape.
    #[error("stored sizes are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key-value backend holding the serialized size map.
pub trait SizeStorage {
    /// Read the raw stored value. `Ok(None)` means nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be reached.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn write(&mut self, raw: &str) -> Result<(), StorageError>;

    /// Key the value is stored under.
    fn key(&self) -> &str {
        SIZES_STORAGE_KEY
    }
}

/// Parse a stored size map. Entries for unknown sections are ignored and
/// sizes below the minimum are clamped.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if `raw` is not a JSON object of sizes.
pub fn decode_sizes(raw: &str) -> Result<SavedSizes, StorageError> {
    let entries: BTreeMap<String, Size> = serde_json::from_str(raw)?;
    Ok(entries
        .into_iter()
        .filter_map(|(key, size)| {
            let Ok(section) = key.parse::<Section>() else {
                log::debug!("card sizes: skipping unknown section {key:?}");
                return None;
            };
            Some((section, clamp_size(size.width, size.height)))
        })
        .collect())
}

/// Serialize a size map for storage.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] if serialization fails (non-finite sizes).
pub fn encode_sizes(sizes: &SavedSizes) -> Result<String, StorageError> {
    let entries: BTreeMap<&str, &Size> = sizes.iter().map(|(section, size)| (section.key(), size)).collect();
    Ok(serde_json::to_string(&entries)?)
}

/// Load remembered sizes, treating every failure as "nothing saved".
#[must_use]
pub fn load_sizes(storage: &dyn SizeStorage) -> SavedSizes {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return SavedSizes::new(),
        Err(err) => {
            log::warn!("card sizes: read from {} failed: {err}", storage.key());
            return SavedSizes::new();
        }
    };
    match decode_sizes(&raw) {
        Ok(sizes) => sizes,
        Err(err) => {
            log::warn!("card sizes: ignoring stored value under {}: {err}", storage.key());
            SavedSizes::new()
        }
    }
}

/// Persist sizes, logging and dropping any failure. Returns whether the write landed.
pub fn save_sizes(storage: &mut dyn SizeStorage, sizes: &SavedSizes) -> bool {
    let result = encode_sizes(sizes).and_then(|raw| storage.write(&raw));
    if let Err(err) = result {
        log::warn!("card sizes: write to {} failed: {err}", storage.key());
        return false;
    }
    true
}

/// In-memory backend. Clones share the same slot so a test can keep a handle
/// and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a raw stored value.
    #[must_use]
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(raw.into()))) }
    }

    /// Current raw stored value.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SizeStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&mut self, raw: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(raw.to_owned());
        Ok(())
    }
}
