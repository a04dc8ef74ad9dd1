use chrono::{DateTime, TimeZone, Utc};
use diesel::prelude::*;
use portfolio_shared::ContactMessage;
use uuid::Uuid;

use crate::schema::contact_messages;

/// A validated submission together with the id the intake assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredContact {
    pub id: Uuid,
    pub message: ContactMessage,
    pub received_at: DateTime<Utc>,
}

impl StoredContact {
    pub fn new(id: Uuid, message: ContactMessage) -> Self {
        Self {
            id,
            message,
            received_at: Utc::now(),
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactMessageRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: i64, // unix epoch millis, utc
}

#[derive(Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessageRow<'a> {
    pub id: String,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub received_at: i64,
}

impl<'a> From<&'a StoredContact> for NewContactMessageRow<'a> {
    fn from(contact: &'a StoredContact) -> Self {
        NewContactMessageRow {
            id: contact.id.to_string(),
            name: &contact.message.name,
            email: &contact.message.email,
            message: &contact.message.message,
            received_at: contact.received_at.timestamp_millis(),
        }
    }
}

impl ContactMessageRow {
    /// Rows with an unparseable id are skipped by callers.
    pub fn into_stored(self) -> Option<StoredContact> {
        let id = Uuid::parse_str(&self.id).ok()?;
        let received_at = Utc.timestamp_millis_opt(self.received_at).single()?;
        Some(StoredContact {
            id,
            message: ContactMessage {
                name: self.name,
                email: self.email,
                message: self.message,
            },
            received_at,
        })
    }
}
