//! Transient preview resources for attached files.
//!
//! A [`PreviewStore`] holds attachment bytes under revocable ids, the way a
//! browser holds blob URLs. Each entry is owned by exactly one
//! [`PreviewHandle`]; releasing the handle (explicitly or on drop) revokes
//! the entry. Releasing twice is a no-op.

use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// URL scheme used to refer to transient previews.
pub const PREVIEW_SCHEME: &str = "preview";

#[derive(Debug, Default)]
struct StoreInner {
    blobs: HashMap<Uuid, Bytes>,
    created: u64,
    released: u64,
}

/// Process-local registry of transient preview data.
#[derive(Debug, Clone, Default)]
pub struct PreviewStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves the map itself consistent, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register `data` and return the owning handle.
    pub fn create(&self, data: Bytes) -> PreviewHandle {
        let id = Uuid::new_v4();
        let mut inner = self.lock();
        inner.blobs.insert(id, data);
        inner.created += 1;
        tracing::debug!(preview = %id, live = inner.blobs.len(), "preview created");

        PreviewHandle {
            id,
            store: self.clone(),
            released: false,
        }
    }

    /// Bytes behind a live preview.
    pub fn get(&self, id: Uuid) -> Option<Bytes> {
        self.lock().blobs.get(&id).cloned()
    }

    /// Number of previews currently alive.
    pub fn live_count(&self) -> usize {
        self.lock().blobs.len()
    }

    /// Total previews ever created.
    pub fn created_count(&self) -> u64 {
        self.lock().created
    }

    /// Total previews released.
    pub fn released_count(&self) -> u64 {
        self.lock().released
    }

    fn revoke(&self, id: Uuid) {
        let mut inner = self.lock();
        if inner.blobs.remove(&id).is_some() {
            inner.released += 1;
            tracing::debug!(preview = %id, live = inner.blobs.len(), "preview released");
        }
    }
}

/// Owning reference to one transient preview.
#[derive(Debug)]
pub struct PreviewHandle {
    id: Uuid,
    store: PreviewStore,
    released: bool,
}

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// `preview:<uuid>`, the address shown to the user.
    pub fn url(&self) -> String {
        format!("{}:{}", PREVIEW_SCHEME, self.id)
    }

    /// Size of the previewed data, `None` once released.
    pub fn byte_len(&self) -> Option<usize> {
        self.store.get(self.id).map(|data| data.len())
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Revoke the preview. Later calls do nothing.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.store.revoke(self.id);
        }
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Where an attached file can be previewed from.
#[derive(Debug)]
pub enum PreviewSource {
    /// Bytes attached in this session, held in the preview store.
    Transient(PreviewHandle),
    /// A durable file reference taken from a past exam, e.g. `/uploads/x.pdf`.
    Durable { path: String },
}

impl PreviewSource {
    /// Address of the preview: a `preview:` URL or the durable path.
    pub fn location(&self) -> String {
        match self {
            PreviewSource::Transient(handle) => handle.url(),
            PreviewSource::Durable { path } => path.clone(),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, PreviewSource::Transient(_))
    }

    /// Release the transient preview, if this is one.
    pub fn release(&mut self) {
        if let PreviewSource::Transient(handle) = self {
            handle.release();
        }
    }
}
