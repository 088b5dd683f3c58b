use std::collections::HashMap;
use std::fs;
use std::io;
use std::sync::Mutex;

/// Read side of the text store collaborator.
///
/// Identifiers are opaque to the engine; a file-backed implementation treats
/// them as paths, an in-memory one as map keys.
pub trait TextSource {
    /// Returns the complete textual content addressed by `id`.
    fn read(&self, id: &str) -> io::Result<String>;
}

/// Write side of the text store collaborator.
pub trait TextSink {
    /// Replaces the content addressed by `id` with `text`.
    fn write(&self, id: &str, text: &str) -> io::Result<()>;
}

/// Text store backed by the local file system; identifiers are paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl TextSource for FsStore {
    fn read(&self, id: &str) -> io::Result<String> {
        fs::read_to_string(id)
    }
}

impl TextSink for FsStore {
    fn write(&self, id: &str, text: &str) -> io::Result<()> {
        fs::write(id, text)
    }
}

/// In-memory text store used to substitute the file system in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with content for `id`.
    pub fn insert(&self, id: impl Into<String>, text: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(id.into(), text.into());
        }
    }

    /// Returns the current content for `id`, if any.
    pub fn get(&self, id: &str) -> Option<String> {
        self.entries.lock().ok()?.get(id).cloned()
    }
}

impl TextSource for MemoryStore {
    fn read(&self, id: &str) -> io::Result<String> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("store lock poisoned"))?;
        entries
            .get(id)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no entry for '{id}'")))
    }
}

impl TextSink for MemoryStore {
    fn write(&self, id: &str, text: &str) -> io::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("store lock poisoned"))?;
        entries.insert(id.to_string(), text.to_string());
        Ok(())
    }
}
