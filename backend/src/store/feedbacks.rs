//! Operations on the feedback collection. Each runs against a borrowed connection
//! and is atomic on its own; none spans more than one record except the read-only
//! dashboard snapshot.

use crate::query::ListQuery;
use crate::store::filter_sql;
use crate::store::schema::COLUMNS;
use crate::validation::ValidFeedback;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use common::model::category::Category;
use common::model::dashboard::{CategoryCount, DashboardStats};
use common::model::feedback::Feedback;
use common::model::status::Status;
use log::debug;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::str::FromStr;
use uuid::Uuid;

const RECENT_LIMIT: u32 = 5;

/// Fixed-width UTC form, so that text order equals time order.
pub fn to_stored_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time at the precision timestamps are stored with.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn conversion_error(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|e| conversion_error(idx, e))
}

fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

/// Maps a row selected with `schema::COLUMNS`.
fn feedback_from_row(row: &Row) -> rusqlite::Result<Feedback> {
    Ok(Feedback {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        rating: row.get(3)?,
        category: parse_column::<Category>(row, 4)?,
        message: row.get(5)?,
        status: parse_column::<Status>(row, 6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
    })
}

/// Persists a validated submission as a new `New` record with fresh id and timestamps.
pub fn insert(conn: &Connection, candidate: &ValidFeedback) -> rusqlite::Result<Feedback> {
    let created_at = now();
    let feedback = Feedback {
        id: Uuid::new_v4().to_string(),
        name: candidate.name.clone(),
        email: candidate.email.clone(),
        rating: candidate.rating,
        category: candidate.category,
        message: candidate.message.clone(),
        status: Status::New,
        created_at,
        updated_at: created_at,
    };
    let stamp = to_stored_timestamp(&created_at);

    conn.execute(
        "INSERT INTO feedbacks (id, name, email, rating, category, message, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
        params![
            feedback.id,
            feedback.name,
            feedback.email,
            feedback.rating,
            feedback.category.as_str(),
            feedback.message,
            feedback.status.as_str(),
            stamp,
        ],
    )?;

    Ok(feedback)
}

pub fn get(conn: &Connection, id: &str) -> rusqlite::Result<Option<Feedback>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM feedbacks WHERE id = ?1"),
        params![id],
        feedback_from_row,
    )
    .optional()
}

pub fn find(conn: &Connection, query: &ListQuery) -> rusqlite::Result<Vec<Feedback>> {
    let filter = filter_sql::translate(query);
    let sql = format!(
        "SELECT {COLUMNS} FROM feedbacks f WHERE {} ORDER BY {}",
        filter.where_clause, filter.order_by
    );
    debug!("Listing feedbacks: {sql} with {:?}", filter.params);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(filter.params.iter()), feedback_from_row)?;
    rows.collect()
}

/// Sets `status` and refreshes `updated_at`; returns `None` when no record has `id`.
/// `updated_at` never moves behind `created_at`, even if the clock does.
pub fn update_status(
    conn: &mut Connection,
    id: &str,
    status: Status,
) -> rusqlite::Result<Option<Feedback>> {
    let tx = conn.transaction()?;
    let changed = tx.execute(
        "UPDATE feedbacks SET status = ?1, updated_at = MAX(?2, created_at) WHERE id = ?3",
        params![status.as_str(), to_stored_timestamp(&now()), id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    let updated = get(&tx, id)?;
    tx.commit()?;
    Ok(updated)
}

/// Removes the record permanently. Returns `false` when no record has `id`.
pub fn delete(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    let removed = conn.execute("DELETE FROM feedbacks WHERE id = ?1", params![id])?;
    Ok(removed > 0)
}

/// Summarises the collection from a single read snapshot.
pub fn dashboard(conn: &mut Connection) -> rusqlite::Result<DashboardStats> {
    let tx = conn.transaction()?;

    let (total_count, avg): (i64, Option<f64>) =
        tx.query_row("SELECT COUNT(*), AVG(rating) FROM feedbacks", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;

    let category_breakdown = {
        let mut stmt = tx.prepare(
            "SELECT category, COUNT(*) FROM feedbacks GROUP BY category ORDER BY category",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CategoryCount {
                category: parse_column::<Category>(row, 0)?,
                count: row.get::<_, i64>(1)? as u64,
            })
        })?;
        rows.collect::<rusqlite::Result<Vec<_>>>()?
    };

    let recent_feedbacks = {
        let mut stmt = tx.prepare(&format!(
            "SELECT {COLUMNS} FROM feedbacks ORDER BY created_at DESC, seq DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![RECENT_LIMIT], feedback_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()?
    };

    tx.commit()?;

    Ok(DashboardStats {
        total_count: total_count as u64,
        avg_rating: avg.map(round_to_tenth).unwrap_or(0.0),
        category_breakdown,
        recent_feedbacks,
    })
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
