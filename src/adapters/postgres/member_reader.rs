//! PostgreSQL implementation of MemberReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::member::Member;
use crate::ports::MemberReader;

/// PostgreSQL implementation of MemberReader.
#[derive(Clone)]
pub struct PostgresMemberReader {
    pool: PgPool,
}

impl PostgresMemberReader {
    /// Creates a new PostgresMemberReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberReader for PostgresMemberReader {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let row = sqlx::query("SELECT id, email, name FROM members WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch member by email", e))?;

        row.map(row_to_member).transpose()
    }
}

fn row_to_member(row: PgRow) -> Result<Member, DomainError> {
    Ok(Member::reconstitute(
        MemberId::from_uuid(column(&row, "id")?),
        column(&row, "email")?,
        column(&row, "name")?,
    ))
}
