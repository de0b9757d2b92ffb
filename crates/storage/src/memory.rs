//! In-process object store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use skillconnect_core::storage::object_key;

use crate::{ObjectInfo, ObjectStore, StorageError, StorageResult, StoredObject};

struct Entry {
    bytes: Vec<u8>,
    content_type: String,
    modified_at: chrono::DateTime<Utc>,
}

/// Object store held in a map, with switchable failures for the put and
/// delete paths.
///
/// Keys use a strictly increasing millisecond counter so two uploads within
/// the same millisecond still get distinct keys.
pub struct MemoryObjectStore {
    public_base: String,
    objects: Mutex<BTreeMap<String, Entry>>,
    last_millis: AtomicI64,
    fail_puts: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemoryObjectStore {
    pub fn new(public_base: &str) -> Self {
        Self {
            public_base: public_base.trim_end_matches('/').to_string(),
            objects: Mutex::new(BTreeMap::new()),
            last_millis: AtomicI64::new(0),
            fail_puts: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
        }
    }

    /// Make subsequent `put` calls fail.
    pub fn set_fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `delete_key` calls fail.
    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Content type recorded for `key`.
    pub fn content_type(&self, key: &str) -> Option<String> {
        self.lock().get(key).map(|e| e.content_type.clone())
    }

    /// Insert an object under an exact key, bypassing key generation.
    pub fn insert(&self, key: &str, bytes: &[u8]) {
        self.lock().insert(
            key.to_string(),
            Entry {
                bytes: bytes.to_vec(),
                content_type: "application/octet-stream".to_string(),
                modified_at: Utc::now(),
            },
        );
    }

    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|prev| prev);
        now.max(prev + 1)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Entry>> {
        self.objects.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    fn public_base(&self) -> &str {
        &self.public_base
    }

    async fn put(
        &self,
        bytes: Vec<u8>,
        original_name: &str,
        content_type: &str,
    ) -> StorageResult<StoredObject> {
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("PutObject failed: injected".into()));
        }

        let key = object_key(self.next_millis(), original_name);
        self.lock().insert(
            key.clone(),
            Entry {
                bytes,
                content_type: content_type.to_string(),
                modified_at: Utc::now(),
            },
        );
        Ok(StoredObject {
            url: self.url_for(&key),
            key,
        })
    }

    async fn list(&self) -> StorageResult<Vec<ObjectInfo>> {
        Ok(self
            .lock()
            .iter()
            .map(|(key, entry)| ObjectInfo {
                key: key.clone(),
                url: self.url_for(key),
                size: entry.bytes.len() as i64,
                modified_at: Some(entry.modified_at),
            })
            .collect())
    }

    async fn delete_key(&self, key: &str) -> StorageResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("DeleteObject failed: injected".into()));
        }
        self.lock().remove(key);
        Ok(())
    }
}
