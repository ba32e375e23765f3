//! SQLite-backed slot over the `kv_slots` table.
//!
//! Mirrors a browser local-storage key: one row per key, value replaced on
//! every save.

use super::file::validate_key;
use super::{EventSlot, SlotResult};
use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};

pub struct SqliteSlot<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteSlot<'conn> {
    /// Binds a slot key to a migrated connection.
    ///
    /// # Errors
    /// - `Db` when the connection schema is older or newer than this binary.
    /// - `Malformed` when `key` is blank.
    pub fn try_new(conn: &'conn Connection, key: impl Into<String>) -> SlotResult<Self> {
        let key = validate_key(&key.into())?;

        let version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let latest = latest_version();
        if version < latest {
            return Err(DbError::OutdatedSchemaVersion {
                db_version: version,
                required: latest,
            }
            .into());
        }
        if version > latest {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version: version,
                latest_supported: latest,
            }
            .into());
        }

        Ok(Self { conn, key })
    }
}

impl EventSlot for SqliteSlot<'_> {
    fn key(&self) -> &str {
        &self.key
    }

    fn read_raw(&self) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_raw(&self, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.key.as_str(), value],
        )?;
        Ok(())
    }
}
