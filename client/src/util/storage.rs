//! `localStorage` backing for remembered card sizes.

#[cfg(all(test, not(feature = "csr")))]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(not(feature = "csr"))]
use spatial::persist::MemoryStorage;
use spatial::persist::SizeStorage;
#[cfg(feature = "csr")]
use spatial::persist::StorageError;

/// Size storage for this environment: `localStorage` in the browser,
/// in-memory otherwise.
pub fn size_storage() -> Box<dyn SizeStorage> {
    #[cfg(feature = "csr")]
    {
        Box::new(LocalSizeStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Box::new(MemoryStorage::new())
    }
}

/// Reads and writes the size map under the fixed key in `window.localStorage`.
///
/// The storage handle is looked up on every call; private browsing modes
/// can revoke it at any time.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSizeStorage;

#[cfg(feature = "csr")]
impl LocalSizeStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_owned())),
            Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
        }
    }
}

#[cfg(feature = "csr")]
impl SizeStorage for LocalSizeStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::handle()?.get_item(self.key()).map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    fn write(&mut self, raw: &str) -> Result<(), StorageError> {
        Self::handle()?.set_item(self.key(), raw).map_err(|err| StorageError::Access(format!("{err:?}")))
    }
}
