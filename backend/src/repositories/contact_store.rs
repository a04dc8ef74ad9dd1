use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::contact_models::StoredContact;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("failed to run migrations: {0}")]
    Migration(String),
    #[error("contact id {0} is already taken")]
    DuplicateId(Uuid),
}

/// Where accepted contact submissions go.
///
/// The intake handler only depends on this trait, so a deployment picks its
/// durability by picking an implementation.
pub trait ContactStore: Send + Sync {
    /// Short name used in logs.
    fn kind(&self) -> &'static str;

    /// Stores the submission. An id the store has already seen is an error.
    fn save(&self, contact: &StoredContact) -> Result<(), StoreError>;

    fn receipt_message(&self) -> &'static str {
        "Message sent successfully"
    }

    /// Whether the accepted submission is sent back in the response body.
    fn echoes_payload(&self) -> bool {
        false
    }
}

/// Append-only map. Everything is lost on restart.
#[derive(Default)]
pub struct MemoryContactStore {
    messages: DashMap<Uuid, StoredContact>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Snapshot of everything stored so far, oldest first.
    pub fn messages(&self) -> Vec<StoredContact> {
        let mut all: Vec<StoredContact> = self
            .messages
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|c| c.received_at);
        all
    }
}

impl ContactStore for MemoryContactStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    fn save(&self, contact: &StoredContact) -> Result<(), StoreError> {
        match self.messages.entry(contact.id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateId(contact.id)),
            Entry::Vacant(slot) => {
                slot.insert(contact.clone());
                Ok(())
            }
        }
    }
}

/// Stateless intake: acknowledges receipt, keeps nothing.
#[derive(Default)]
pub struct AcknowledgeOnly;

impl ContactStore for AcknowledgeOnly {
    fn kind(&self) -> &'static str {
        "acknowledge"
    }

    fn save(&self, _contact: &StoredContact) -> Result<(), StoreError> {
        Ok(())
    }

    fn receipt_message(&self) -> &'static str {
        "Message received"
    }

    fn echoes_payload(&self) -> bool {
        true
    }
}
