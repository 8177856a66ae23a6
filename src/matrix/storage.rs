//! Storage: shared numeric buffer with Arc-based sharing and a write version

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Storage for matrix data
///
/// Storage wraps an `f64` buffer with reference counting, enabling zero-copy
/// views (transpose) that share the underlying buffer. Cloning a `Storage`
/// clones the handle, not the data.
///
/// Every write handed out by [`Storage::write`] bumps a version counter.
/// Cached derived state records the version it was computed at and is
/// discarded when the counter has moved, no matter which handle wrote.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

struct StorageInner {
    data: RwLock<Vec<f64>>,
    version: AtomicU64,
}

impl Storage {
    /// Create zero-filled storage of `len` elements
    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![0.0; len])
    }

    /// Take ownership of an existing buffer
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            inner: Arc::new(StorageInner {
                data: RwLock::new(data),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.read().len()
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current write version of the buffer
    #[inline]
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Borrow the buffer for reading
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<f64>> {
        self.inner.data.read()
    }

    /// Borrow the buffer for writing, bumping the version
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<f64>> {
        let guard = self.inner.data.write();
        self.inner.version.fetch_add(1, Ordering::AcqRel);
        guard
    }

    /// Copy the buffer into a new, unshared storage
    pub fn deep_copy(&self) -> Self {
        let copy = Self::from_vec(self.read().clone());
        copy.inner
            .version
            .store(self.version(), Ordering::Release);
        copy
    }

    /// Whether two handles refer to the same buffer
    #[inline]
    pub fn ptr_eq(&self, other: &Storage) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of handles sharing this buffer
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.len())
            .field("version", &self.version())
            .field("ref_count", &self.ref_count())
            .finish()
    }
}
