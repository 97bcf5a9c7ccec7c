//! Database schema definitions using sea-query.
//!
//! These define the table and column identifiers for type-safe query building.

use sea_query::Iden;

/// Reminders table schema.
#[derive(Iden)]
pub enum Reminders {
    Table,
    #[iden = "id"]
    Id,
    #[iden = "title"]
    Title,
    #[iden = "description"]
    Description,
    #[iden = "location_label"]
    LocationLabel,
    #[iden = "latitude"]
    Latitude,
    #[iden = "longitude"]
    Longitude,
    #[iden = "updated_at"]
    UpdatedAt,
    #[iden = "rowid"]
    RowId,
}

/// SQL for creating the reminders table.
///
/// `rowid` is kept implicit; upserts go through `ON CONFLICT DO UPDATE`, which
/// keeps the original rowid, so ordering by it yields first-insertion order.
pub const CREATE_REMINDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS reminders (
    id TEXT NOT NULL PRIMARY KEY,
    title TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    location_label TEXT NOT NULL DEFAULT '',
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
