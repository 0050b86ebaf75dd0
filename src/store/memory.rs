use std::path::Path;

use crate::faq::{default_faqs, FaqDraft, FaqEntry, FaqPatch};
use crate::store::snapshot::{read_snapshot, write_snapshot};
use crate::store::{FaqStore, StoreError};
use crate::types::identifiers::{ChatbotId, FaqId};

/// Vec-backed FAQ store with optional JSON snapshot persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryFaqStore {
    entries: Vec<FaqEntry>,
}

impl MemoryFaqStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the default starter FAQs.
    pub fn seeded() -> Self {
        Self {
            entries: default_faqs(),
        }
    }

    /// Build from existing records. Duplicate ids are rejected.
    pub fn from_entries(entries: Vec<FaqEntry>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for entry in entries {
            store.insert(entry)?;
        }
        Ok(store)
    }

    /// Insert a fully formed record as is.
    pub fn insert(&mut self, entry: FaqEntry) -> Result<(), StoreError> {
        if self.position(&entry.id).is_some() {
            return Err(StoreError::DuplicateFaqId(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load_snapshot(path: &Path) -> Result<Self, StoreError> {
        let snapshot = read_snapshot(path)?;
        tracing::info!(path = %path.display(), faqs = snapshot.faqs.len(), "loaded faq snapshot");
        Self::from_entries(snapshot.faqs)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        write_snapshot(path, &self.entries)?;
        tracing::info!(path = %path.display(), faqs = self.entries.len(), "saved faq snapshot");
        Ok(())
    }

    fn position(&self, id: &FaqId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    fn sorted<'a>(&self, entries: impl Iterator<Item = &'a FaqEntry>) -> Vec<FaqEntry> {
        let mut out: Vec<FaqEntry> = entries.cloned().collect();
        // sort_by_key is stable: equal priorities keep insertion order
        out.sort_by_key(|e| e.priority);
        out
    }
}

impl FaqStore for MemoryFaqStore {
    fn list_active(&self, chatbot: Option<&ChatbotId>) -> Result<Vec<FaqEntry>, StoreError> {
        let active = self.entries.iter().filter(|e| {
            e.is_active
                && match chatbot {
                    Some(bot) => e.chatbot_id.as_ref() == Some(bot),
                    None => true,
                }
        });
        Ok(self.sorted(active))
    }

    fn list_all(&self) -> Result<Vec<FaqEntry>, StoreError> {
        Ok(self.sorted(self.entries.iter()))
    }

    fn get(&self, id: &FaqId) -> Result<FaqEntry, StoreError> {
        self.entries
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| StoreError::FaqNotFound(id.clone()))
    }

    fn create(&mut self, draft: FaqDraft) -> Result<FaqEntry, StoreError> {
        let entry = draft.into_entry(FaqId::generate())?;
        tracing::info!(faq_id = %entry.id, priority = entry.priority, "created faq");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn update(&mut self, id: &FaqId, patch: FaqPatch) -> Result<FaqEntry, StoreError> {
        let idx = self
            .position(id)
            .ok_or_else(|| StoreError::FaqNotFound(id.clone()))?;
        let entry = &mut self.entries[idx];
        entry.apply(patch)?;
        tracing::info!(faq_id = %entry.id, "updated faq");
        Ok(entry.clone())
    }

    fn delete(&mut self, id: &FaqId) -> Result<(), StoreError> {
        let idx = self
            .position(id)
            .ok_or_else(|| StoreError::FaqNotFound(id.clone()))?;
        self.entries.remove(idx);
        tracing::info!(faq_id = %id, "deleted faq");
        Ok(())
    }
}
