//! Identity id registry.
//!
//! Owned by the composing application and passed in where identities are
//! created. There is no process-wide instance.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::error::{KernelError, KernelResult};

/// Set of claimed identity ids. Safe to share across threads.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    ids: Mutex<HashSet<String>>,
}

impl IdentityRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `identity_id`.
    ///
    /// # Errors
    ///
    /// `DuplicateIdentity` if the id is already claimed.
    pub fn register(&self, identity_id: &str) -> KernelResult<()> {
        let mut ids = self.ids.lock();
        if !ids.insert(identity_id.to_string()) {
            return Err(KernelError::DuplicateIdentity(identity_id.to_string()));
        }
        Ok(())
    }

    /// Release `identity_id`. Returns true if it was claimed.
    pub fn release(&self, identity_id: &str) -> bool {
        self.ids.lock().remove(identity_id)
    }

    /// True if `identity_id` is claimed.
    pub fn contains(&self, identity_id: &str) -> bool {
        self.ids.lock().contains(identity_id)
    }

    /// Number of claimed ids.
    pub fn len(&self) -> usize {
        self.ids.lock().len()
    }

    /// True if nothing is claimed.
    pub fn is_empty(&self) -> bool {
        self.ids.lock().is_empty()
    }
}
