use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::services::catalog::models::Tag;
use crate::services::matching::models::types::CandidateEntity;

/// Politician row stored in the `politicians` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PoliticianRow {
    pub id: String,
    pub name: String,
    pub party: String,
    pub is_active: bool,
}

// ── Reads ───────────────────────────────────────────────────

/// Politicians eligible for matching, ordered by name.
pub async fn get_active_politicians(pool: &SqlitePool) -> Result<Vec<PoliticianRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PoliticianRow>(
        "SELECT id, name, party, is_active FROM politicians WHERE is_active = 1 ORDER BY name, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// `(politician_id, tag_id)` pairs for active politicians.
pub async fn get_active_tag_assignments(
    pool: &SqlitePool,
) -> Result<Vec<(String, String)>, sqlx::Error> {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT pt.politician_id, pt.tag_id
         FROM politician_tags pt
         JOIN politicians p ON p.id = pt.politician_id
         WHERE p.is_active = 1",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Every active politician with its full tag set. Politicians without tags
/// are included with an empty set.
pub async fn list_candidates_with_tags(
    pool: &SqlitePool,
) -> Result<Vec<CandidateEntity>, sqlx::Error> {
    let politicians = get_active_politicians(pool).await?;

    let mut tags_by_politician: HashMap<String, BTreeSet<String>> = HashMap::new();
    for (politician_id, tag_id) in get_active_tag_assignments(pool).await? {
        tags_by_politician
            .entry(politician_id)
            .or_default()
            .insert(tag_id);
    }

    Ok(politicians
        .into_iter()
        .map(|row| CandidateEntity {
            tags: tags_by_politician.remove(&row.id).unwrap_or_default(),
            id: row.id,
            name: row.name,
            group: row.party,
        })
        .collect())
}

// ── Writes ──────────────────────────────────────────────────

/// Upsert a politician row. Updates in place so tag assignments survive.
pub async fn upsert_politician(pool: &SqlitePool, row: &PoliticianRow) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO politicians (id, name, party, is_active) VALUES (?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name, party = excluded.party, is_active = excluded.is_active",
    )
    .bind(&row.id)
    .bind(&row.name)
    .bind(&row.party)
    .bind(row.is_active)
    .execute(pool)
    .await?;
    Ok(())
}

/// Mirror the tag catalog into the `tags` table in one transaction.
/// Returns the number of rows written.
pub async fn sync_tags(pool: &SqlitePool, tags: &[Tag]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut written = 0;

    for tag in tags {
        written += sqlx::query(
            "INSERT INTO tags (id, name, category) VALUES (?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, category = excluded.category",
        )
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(&tag.category)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    Ok(written)
}

/// Assign a tag to a politician. Re-assigning is a no-op.
pub async fn assign_tag(
    pool: &SqlitePool,
    politician_id: &str,
    tag_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO politician_tags (politician_id, tag_id) VALUES (?, ?)")
        .bind(politician_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn unassign_tag(
    pool: &SqlitePool,
    politician_id: &str,
    tag_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM politician_tags WHERE politician_id = ? AND tag_id = ?")
        .bind(politician_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/candidate_repo_tests.rs"]
mod tests;
