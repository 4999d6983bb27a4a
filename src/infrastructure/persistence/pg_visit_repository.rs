//! PostgreSQL implementation of the visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct VisitRow {
    id: i64,
    link_id: i64,
    visitor_ip: Option<String>,
    user_agent: Option<String>,
    referer: Option<String>,
    visited_at: DateTime<Utc>,
    country: Option<String>,
    city: Option<String>,
    device: Option<String>,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        Visit {
            id: row.id,
            link_id: row.link_id,
            visitor_ip: row.visitor_ip,
            user_agent: row.user_agent,
            referer: row.referer,
            visited_at: row.visited_at,
            country: row.country,
            city: row.city,
            device: row.device,
        }
    }
}

/// PostgreSQL repository for per-visit analytics rows.
///
/// Rows live in the `analytics` table; geolocation columns are never
/// written and stay null.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            INSERT INTO analytics (link_id, visitor_ip, user_agent, referer, device)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, link_id, visitor_ip, user_agent, referer,
                      visited_at, country, city, device
            "#,
        )
        .bind(new_visit.link_id)
        .bind(&new_visit.visitor_ip)
        .bind(&new_visit.user_agent)
        .bind(&new_visit.referer)
        .bind(&new_visit.device)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, visitor_ip, user_agent, referer,
                   visited_at, country, city, device
            FROM analytics
            WHERE link_id = $1
            ORDER BY visited_at DESC
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn delete_for_link(&self, link_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM analytics WHERE link_id = $1")
            .bind(link_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
