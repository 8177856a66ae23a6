//! Per-matrix cache of decomposition results

use crate::algorithm::linalg::{EchelonForm, LupDecomposition};
use std::sync::Arc;

/// Derived state of an owned matrix, tagged with the buffer version it was
/// computed from.
///
/// Lookups pass the buffer's current version; a mismatch drops everything,
/// so writes through a transposed view are noticed even though the view
/// never touches this cache.
#[derive(Clone, Default)]
pub(crate) struct DecompCache {
    version: u64,
    lup: Option<Arc<LupDecomposition>>,
    echelon: Option<Arc<EchelonForm>>,
}

impl DecompCache {
    pub(crate) fn clear(&mut self) {
        self.lup = None;
        self.echelon = None;
    }

    fn sync(&mut self, version: u64) {
        if self.version != version {
            self.clear();
            self.version = version;
        }
    }

    pub(crate) fn lup(&mut self, version: u64) -> Option<Arc<LupDecomposition>> {
        self.sync(version);
        self.lup.clone()
    }

    pub(crate) fn store_lup(&mut self, version: u64, lup: Arc<LupDecomposition>) {
        self.sync(version);
        self.lup = Some(lup);
    }

    pub(crate) fn echelon(&mut self, version: u64) -> Option<Arc<EchelonForm>> {
        self.sync(version);
        self.echelon.clone()
    }

    pub(crate) fn store_echelon(&mut self, version: u64, echelon: Arc<EchelonForm>) {
        self.sync(version);
        self.echelon = Some(echelon);
    }
}
