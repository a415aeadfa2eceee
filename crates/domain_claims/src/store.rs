//! In-memory claim store
//!
//! The store owns every claim and the identifier counter. Two levels of
//! locking keep its operations atomic:
//!
//! - the collection lock covers identifier assignment and append, so
//!   concurrent inserts never share an id;
//! - each claim sits behind its own mutex, so a read-validate-write on one
//!   claim cannot interleave with another on the same claim while other
//!   claims stay available.
//!
//! The store performs no validation; see [`crate::lifecycle`].

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use core_kernel::{now_millis, ClaimId};

use crate::claim::{Claim, ClaimStatus, NewClaim};

type ClaimSlot = Arc<Mutex<Claim>>;

struct StoreInner {
    /// Insertion order
    claims: Vec<ClaimSlot>,
    index: HashMap<ClaimId, ClaimSlot>,
    next_id: ClaimId,
}

/// Owned collection of claims
pub struct ClaimStore {
    inner: RwLock<StoreInner>,
}

impl Default for ClaimStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClaimStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("ClaimStore")
            .field("len", &inner.claims.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}

impl ClaimStore {
    /// Creates an empty store; the first claim receives id 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                claims: Vec::new(),
                index: HashMap::new(),
                next_id: ClaimId::first(),
            }),
        }
    }

    /// Creates a store pre-populated with existing claims.
    ///
    /// The counter continues after the largest id present. A claim whose id
    /// is already taken, or is `u64::MAX` and so leaves no id to assign
    /// next, is skipped.
    pub fn with_claims(claims: Vec<Claim>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            for claim in claims {
                let id = claim.id();
                if inner.index.contains_key(&id) {
                    tracing::warn!(claim_id = %id, "Skipping duplicate claim id");
                    continue;
                }
                let Some(successor) = id.next() else {
                    tracing::warn!(claim_id = %id, "Skipping claim with no successor id");
                    continue;
                };
                if id >= inner.next_id {
                    inner.next_id = successor;
                }
                let slot = Arc::new(Mutex::new(claim));
                inner.claims.push(slot.clone());
                inner.index.insert(id, slot);
            }
        }
        store
    }

    /// Assigns the next identifier and appends a new `OPEN` claim
    pub fn insert(&self, fields: NewClaim) -> Claim {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        // `with_claims` never admits u64::MAX, so the counter cannot be exhausted
        inner.next_id = id.next().unwrap_or(id);

        let claim = Claim::open(id, fields, now_millis());
        let slot = Arc::new(Mutex::new(claim.clone()));
        inner.claims.push(slot.clone());
        inner.index.insert(id, slot);
        claim
    }

    pub fn find_by_id(&self, id: ClaimId) -> Option<Claim> {
        let slot = self.slot(id)?;
        let claim = slot.lock().clone();
        Some(claim)
    }

    /// All claims in insertion order
    pub fn list_all(&self) -> Vec<Claim> {
        let inner = self.inner.read();
        inner.claims.iter().map(|slot| slot.lock().clone()).collect()
    }

    /// Claims whose status equals `status`, in insertion order
    pub fn list_by_status(&self, status: ClaimStatus) -> Vec<Claim> {
        let inner = self.inner.read();
        inner
            .claims
            .iter()
            .map(|slot| slot.lock().clone())
            .filter(|claim| claim.status() == status)
            .collect()
    }

    /// Overwrites the status of one claim without consulting the lifecycle
    pub fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Option<Claim> {
        self.modify(id, |claim| {
            claim.set_status(status);
            claim.clone()
        })
    }

    /// Runs `f` against one claim while holding that claim's lock.
    ///
    /// Returns `None` without calling `f` when the id is unknown.
    pub fn modify<T>(&self, id: ClaimId, f: impl FnOnce(&mut Claim) -> T) -> Option<T> {
        let slot = self.slot(id)?;
        let mut claim = slot.lock();
        Some(f(&mut claim))
    }

    pub fn len(&self) -> usize {
        self.inner.read().claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a claim slot, releasing the collection lock before returning
    fn slot(&self, id: ClaimId) -> Option<ClaimSlot> {
        self.inner.read().index.get(&id).cloned()
    }
}
