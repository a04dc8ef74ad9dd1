use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::{
    models::contact_models::{ContactMessageRow, NewContactMessageRow, StoredContact},
    repositories::contact_store::{ContactStore, StoreError},
    schema::contact_messages,
};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Durable contact store on top of sqlite.
pub struct ContactRepository {
    pool: DbPool,
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens (or creates) the database file and brings the schema up to date.
    pub fn connect(database_url: &str) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = r2d2::Pool::builder().build(manager)?;
        let repository = Self::new(pool);
        repository.run_migrations()?;
        Ok(repository)
    }

    /// Single-connection pool over `:memory:`; every connection would otherwise
    /// see its own empty database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?;
        let repository = Self::new(pool);
        repository.run_migrations()?;
        Ok(repository)
    }

    pub fn run_migrations(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.get()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get()?;
        let total = contact_messages::table
            .count()
            .get_result::<i64>(&mut conn)?;
        Ok(total)
    }

    // Newest first
    #[cfg(test)]
    pub fn recent(&self, limit: i64) -> Result<Vec<StoredContact>, StoreError> {
        let mut conn = self.pool.get()?;
        let rows = contact_messages::table
            .order(contact_messages::received_at.desc())
            .limit(limit)
            .select(ContactMessageRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().filter_map(ContactMessageRow::into_stored).collect())
    }
}

impl ContactStore for ContactRepository {
    fn kind(&self) -> &'static str {
        "sqlite"
    }

    fn save(&self, contact: &StoredContact) -> Result<(), StoreError> {
        let mut conn = self.pool.get()?;
        match diesel::insert_into(contact_messages::table)
            .values(NewContactMessageRow::from(contact))
            .execute(&mut conn)
        {
            Ok(_) => Ok(()),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Err(StoreError::DuplicateId(contact.id))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::ContactMessage;
    use uuid::Uuid;

    fn contact(name: &str) -> StoredContact {
        StoredContact::new(
            Uuid::new_v4(),
            ContactMessage {
                name: name.to_string(),
                email: "al@x.com".to_string(),
                message: "Hello there, this is long enough.".to_string(),
            },
        )
    }

    #[test]
    fn saves_and_reads_back() {
        let repository = ContactRepository::in_memory().unwrap();
        let first = contact("Al");
        repository.save(&first).unwrap();
        repository.save(&contact("Bo")).unwrap();

        assert_eq!(repository.count().unwrap(), 2);
        let recent = repository.recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        let stored = recent.iter().find(|c| c.id == first.id).expect("first message stored");
        assert_eq!(stored.message, first.message);
        assert_eq!(
            stored.received_at.timestamp_millis(),
            first.received_at.timestamp_millis()
        );
    }

    #[test]
    fn refuses_duplicate_id() {
        let repository = ContactRepository::in_memory().unwrap();
        let message = contact("Al");
        repository.save(&message).unwrap();
        assert!(repository.save(&message).is_err());
        assert_eq!(repository.count().unwrap(), 1);
    }

    #[test]
    fn migrations_are_idempotent() {
        let repository = ContactRepository::in_memory().unwrap();
        repository.run_migrations().unwrap();
        assert_eq!(repository.count().unwrap(), 0);
    }
}
