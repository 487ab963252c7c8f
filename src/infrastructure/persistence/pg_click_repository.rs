//! PostgreSQL implementation of click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_link_repository::LinkRow;
use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, LinkWithClicks};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    ip: Option<String>,
    user_agent: Option<String>,
    region: String,
    device: String,
    clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click::new(
            r.id,
            r.link_id,
            r.ip,
            r.user_agent,
            r.region,
            r.device,
            r.clicked_at,
        )
    }
}

/// PostgreSQL repository for the append-only click log.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (link_id, ip, user_agent, region, device)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, link_id, ip, user_agent, region, device, clicked_at
            "#,
        )
        .bind(new_click.link_id)
        .bind(new_click.ip)
        .bind(new_click.user_agent)
        .bind(new_click.region)
        .bind(new_click.device)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_link_with_clicks(
        &self,
        short_code: &str,
    ) -> Result<Option<LinkWithClicks>, AppError> {
        let link_row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, created_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(link_row) = link_row else {
            return Ok(None);
        };

        let click_rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, link_id, ip, user_agent, region, device, clicked_at
            FROM clicks
            WHERE link_id = $1
            "#,
        )
        .bind(link_row.id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(Some(LinkWithClicks {
            link: link_row.into(),
            clicks: click_rows.into_iter().map(Click::from).collect(),
        }))
    }
}
