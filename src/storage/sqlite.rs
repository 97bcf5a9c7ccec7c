//! SQLite implementation of ReminderStore.

use async_trait::async_trait;
use sea_query::{Expr, OnConflict, Order, Query, SqliteQueryBuilder};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::interfaces::reminder_store::{ReminderStore, Result, StorageError};
use crate::model::Reminder;

use super::schema::{Reminders, CREATE_REMINDERS_TABLE};

/// SQLite implementation of ReminderStore.
pub struct SqliteReminderStore {
    pool: SqlitePool,
}

impl SqliteReminderStore {
    /// Create a new SQLite reminder store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the database schema.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_REMINDERS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn select_columns() -> sea_query::SelectStatement {
        Query::select()
            .columns([
                Reminders::Id,
                Reminders::Title,
                Reminders::Description,
                Reminders::LocationLabel,
                Reminders::Latitude,
                Reminders::Longitude,
            ])
            .from(Reminders::Table)
            .to_owned()
    }
}

fn reminder_from_row(row: &SqliteRow) -> Result<Reminder> {
    Ok(Reminder {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        location_label: row.try_get("location_label")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
    })
}

#[async_trait]
impl ReminderStore for SqliteReminderStore {
    async fn list_all(&self) -> Result<Vec<Reminder>> {
        let query = Self::select_columns()
            .order_by(Reminders::RowId, Order::Asc)
            .to_string(SqliteQueryBuilder);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter().map(reminder_from_row).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Reminder> {
        let query = Self::select_columns()
            .and_where(Expr::col(Reminders::Id).eq(id))
            .to_string(SqliteQueryBuilder);

        let row = sqlx::query(&query).fetch_optional(&self.pool).await?;

        match row {
            Some(row) => reminder_from_row(&row),
            None => Err(StorageError::NotFound { id: id.to_string() }),
        }
    }

    async fn upsert(&self, reminder: Reminder) -> Result<()> {
        // Statements are rendered to text; non-finite floats have no SQL literal.
        if !reminder.latitude.is_finite() || !reminder.longitude.is_finite() {
            return Err(StorageError::Rejected {
                id: reminder.id,
                reason: format!(
                    "non-finite coordinates ({}, {})",
                    reminder.latitude, reminder.longitude
                ),
            });
        }

        let updated_at = chrono::Utc::now().to_rfc3339();
        debug!(id = %reminder.id, "Upserting reminder");

        let query = Query::insert()
            .into_table(Reminders::Table)
            .columns([
                Reminders::Id,
                Reminders::Title,
                Reminders::Description,
                Reminders::LocationLabel,
                Reminders::Latitude,
                Reminders::Longitude,
                Reminders::UpdatedAt,
            ])
            .values_panic([
                reminder.id.into(),
                reminder.title.into(),
                reminder.description.into(),
                reminder.location_label.into(),
                reminder.latitude.into(),
                reminder.longitude.into(),
                updated_at.into(),
            ])
            .on_conflict(
                OnConflict::column(Reminders::Id)
                    .update_columns([
                        Reminders::Title,
                        Reminders::Description,
                        Reminders::LocationLabel,
                        Reminders::Latitude,
                        Reminders::Longitude,
                        Reminders::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_string(SqliteQueryBuilder);

        sqlx::query(&query).execute(&self.pool).await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let query = Query::delete()
            .from_table(Reminders::Table)
            .to_string(SqliteQueryBuilder);

        sqlx::query(&query).execute(&self.pool).await?;

        Ok(())
    }
}
