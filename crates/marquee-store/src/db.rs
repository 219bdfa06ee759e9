use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashSet;
use std::path::Path;

use marquee_types::{FilmId, ScreeningId};

use crate::Result;

// NOTE: Storage Design Rationale
//
// Why two opaque JSON slots (not normalized rows)?
// - The planner state is two small id lists owned wholesale by the session;
//   every mutation rewrites the full list (write-through), so row-level
//   updates buy nothing
// - Payloads are parsed at read time; a corrupt or stale payload degrades to
//   the empty collection instead of failing the session
// - Ids are never validated against a catalog here: a stale id stays in the
//   payload and silently drops out of derived views, which makes catalog
//   refreshes self-healing
//
// Why SQLite (not flat files)?
// - One database file in the data dir, atomic single-statement writes,
//   no partial-write torn state to handle ourselves

const FAVORITES_SLOT: &str = "favorites";
const SELECTIONS_SLOT: &str = "selections";

#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO slots (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = ?2
            "#,
            params![key, value],
        )?;

        Ok(())
    }

    /// Load the ranked shortlist. Absent or malformed payload reads as empty.
    pub fn load_favorites(&self) -> Result<Vec<FilmId>> {
        Ok(self
            .read_slot(FAVORITES_SLOT)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default())
    }

    /// Replace the persisted shortlist with the given order.
    pub fn save_favorites(&self, favorites: &[FilmId]) -> Result<()> {
        let payload = serde_json::to_string(favorites)?;
        self.write_slot(FAVORITES_SLOT, &payload)
    }

    /// Load the selected-screenings set. Absent or malformed payload reads
    /// as empty.
    pub fn load_selections(&self) -> Result<HashSet<ScreeningId>> {
        Ok(self
            .read_slot(SELECTIONS_SLOT)?
            .and_then(|raw| serde_json::from_str::<Vec<ScreeningId>>(&raw).ok())
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default())
    }

    /// Replace the persisted selection set.
    ///
    /// The set has no order; ids are sorted so the payload is stable across
    /// writes of the same set.
    pub fn save_selections(&self, selections: &HashSet<ScreeningId>) -> Result<()> {
        let mut ids: Vec<&ScreeningId> = selections.iter().collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        let payload = serde_json::to_string(&ids)?;
        self.write_slot(SELECTIONS_SLOT, &payload)
    }
}
