use std::path::Path;

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};
use tracing::info;

use super::types::{RecommendationRecord, StoredRecommendation};
use crate::error::AgriCureError;

const SELECT_COLUMNS: &str = "id, user_id, created_at, field_name, field_size, field_size_unit,
    crop_type, soil_type, soil_ph, nitrogen, phosphorus, potassium, temperature, humidity,
    soil_moisture, ml_prediction_fertilizer, ml_prediction_confidence, primary_fertilizer_name,
    primary_fertilizer_amount, secondary_fertilizer_name, secondary_fertilizer_amount,
    total_cost_estimate";

/// SQLite store for saved recommendations.
/// All operations are synchronous (rusqlite is blocking).
/// Callers in async contexts should use `tokio::task::spawn_blocking`.
pub struct RecommendationHistory {
    conn: Connection,
}

fn history_err(context: &str, e: impl std::fmt::Display) -> AgriCureError {
    AgriCureError::History(format!("{}: {}", context, e))
}

impl RecommendationHistory {
    /// Create or open the history database at `db_path`.
    pub fn new(db_path: &Path) -> Result<Self, AgriCureError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| history_err("Failed to create data dir", e))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| history_err("Failed to open history db", e))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS fertilizer_recommendations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                field_name TEXT NOT NULL,
                field_size REAL NOT NULL,
                field_size_unit TEXT NOT NULL,
                crop_type TEXT NOT NULL,
                soil_type TEXT NOT NULL,
                soil_ph REAL NOT NULL,
                nitrogen REAL NOT NULL,
                phosphorus REAL NOT NULL,
                potassium REAL NOT NULL,
                temperature REAL NOT NULL,
                humidity REAL NOT NULL,
                soil_moisture REAL NOT NULL,
                ml_prediction_fertilizer TEXT NOT NULL,
                ml_prediction_confidence REAL NOT NULL,
                primary_fertilizer_name TEXT NOT NULL,
                primary_fertilizer_amount TEXT NOT NULL,
                secondary_fertilizer_name TEXT NOT NULL,
                secondary_fertilizer_amount TEXT NOT NULL,
                total_cost_estimate TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_recommendations_user
                ON fertilizer_recommendations(user_id, created_at DESC);",
        )
        .map_err(|e| history_err("Failed to create table", e))?;

        info!("Opened recommendation history database at {:?}", db_path);
        Ok(Self { conn })
    }

    /// Save a recommendation for a user. Returns the new row ID.
    pub fn save(&self, user_id: &str, record: &RecommendationRecord) -> Result<i64, AgriCureError> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        self.conn
            .execute(
                "INSERT INTO fertilizer_recommendations (
                    user_id, created_at, field_name, field_size, field_size_unit,
                    crop_type, soil_type, soil_ph, nitrogen, phosphorus, potassium,
                    temperature, humidity, soil_moisture, ml_prediction_fertilizer,
                    ml_prediction_confidence, primary_fertilizer_name,
                    primary_fertilizer_amount, secondary_fertilizer_name,
                    secondary_fertilizer_amount, total_cost_estimate
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                          ?15, ?16, ?17, ?18, ?19, ?20, ?21)",
                params![
                    user_id,
                    created_at,
                    record.field_name,
                    record.field_size,
                    record.field_size_unit,
                    record.crop_type,
                    record.soil_type,
                    record.soil_ph,
                    record.nitrogen,
                    record.phosphorus,
                    record.potassium,
                    record.temperature,
                    record.humidity,
                    record.soil_moisture,
                    record.ml_prediction_fertilizer,
                    record.ml_prediction_confidence,
                    record.primary_fertilizer_name,
                    record.primary_fertilizer_amount,
                    record.secondary_fertilizer_name,
                    record.secondary_fertilizer_amount,
                    record.total_cost_estimate,
                ],
            )
            .map_err(|e| history_err("Failed to insert recommendation", e))?;

        let id = self.conn.last_insert_rowid();
        info!(
            "Saved recommendation {} for field '{}'",
            id, record.field_name
        );
        Ok(id)
    }

    /// All recommendations for a user, newest first.
    pub fn list_for_user(&self, user_id: &str) -> Result<Vec<StoredRecommendation>, AgriCureError> {
        let sql = format!(
            "SELECT {} FROM fertilizer_recommendations
             WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        );
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| history_err("Failed to prepare query", e))?;

        let rows = stmt
            .query_map(params![user_id], row_to_stored)
            .map_err(|e| history_err("Failed to query recommendations", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| history_err("Failed to collect recommendations", e))
    }

    pub fn get(&self, id: i64) -> Result<StoredRecommendation, AgriCureError> {
        let sql = format!(
            "SELECT {} FROM fertilizer_recommendations WHERE id = ?1",
            SELECT_COLUMNS
        );
        self.conn
            .query_row(&sql, params![id], row_to_stored)
            .map_err(|e| history_err("Recommendation not found", e))
    }

    /// Delete one recommendation. Fails if no row has this ID.
    pub fn delete(&self, id: i64) -> Result<(), AgriCureError> {
        let deleted = self
            .conn
            .execute(
                "DELETE FROM fertilizer_recommendations WHERE id = ?1",
                params![id],
            )
            .map_err(|e| history_err("Failed to delete recommendation", e))?;

        if deleted == 0 {
            return Err(AgriCureError::History(format!(
                "Recommendation not found: {}",
                id
            )));
        }
        info!("Deleted recommendation {}", id);
        Ok(())
    }
}

fn row_to_stored(row: &Row<'_>) -> rusqlite::Result<StoredRecommendation> {
    Ok(StoredRecommendation {
        id: row.get(0)?,
        user_id: row.get(1)?,
        created_at: row.get(2)?,
        record: RecommendationRecord {
            field_name: row.get(3)?,
            field_size: row.get(4)?,
            field_size_unit: row.get(5)?,
            crop_type: row.get(6)?,
            soil_type: row.get(7)?,
            soil_ph: row.get(8)?,
            nitrogen: row.get(9)?,
            phosphorus: row.get(10)?,
            potassium: row.get(11)?,
            temperature: row.get(12)?,
            humidity: row.get(13)?,
            soil_moisture: row.get(14)?,
            ml_prediction_fertilizer: row.get(15)?,
            ml_prediction_confidence: row.get(16)?,
            primary_fertilizer_name: row.get(17)?,
            primary_fertilizer_amount: row.get(18)?,
            secondary_fertilizer_name: row.get(19)?,
            secondary_fertilizer_amount: row.get(20)?,
            total_cost_estimate: row.get(21)?,
        },
    })
}
