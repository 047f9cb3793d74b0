// src/infrastructure/repositories/postgres_taxonomy.rs
use super::error::{invalid_persisted, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{NewTerm, TaxonomyRepository, Term, TermId, TermKind, TermName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Tags and topics live in identically shaped tables; `kind` picks which one.
#[derive(Clone)]
pub struct PostgresTaxonomyRepository {
    pool: PgPool,
    kind: TermKind,
}

impl PostgresTaxonomyRepository {
    pub fn new(pool: PgPool, kind: TermKind) -> Self {
        Self { pool, kind }
    }

    fn table(&self) -> &'static str {
        match self.kind {
            TermKind::Tag => "tags",
            TermKind::Topic => "topics",
        }
    }

    fn not_found(&self) -> DomainError {
        DomainError::NotFound(format!("{} not found", self.kind))
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TermRow {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TermRow> for Term {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Term {
            id: TermId::new(&row.id).map_err(|err| invalid_persisted("term id", err))?,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TaxonomyRepository for PostgresTaxonomyRepository {
    async fn list(&self) -> DomainResult<Vec<Term>> {
        let sql = format!(
            "SELECT id, name, created_at, updated_at FROM {} ORDER BY name, id",
            self.table()
        );
        let rows = sqlx::query_as::<_, TermRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Term::try_from).collect()
    }

    async fn find(&self, id: &TermId) -> DomainResult<Option<Term>> {
        let sql = format!(
            "SELECT id, name, created_at, updated_at FROM {} WHERE id = $1",
            self.table()
        );
        let row = sqlx::query_as::<_, TermRow>(&sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Term::try_from).transpose()
    }

    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        let NewTerm {
            id,
            name,
            created_at,
        } = term;

        let sql = format!(
            "INSERT INTO {} (id, name, created_at, updated_at) VALUES ($1, $2, $3, $3)
             RETURNING id, name, created_at, updated_at",
            self.table()
        );
        let row = sqlx::query_as::<_, TermRow>(&sql)
            .bind(id.as_str())
            .bind(name.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Term::try_from(row)
    }

    async fn rename(&self, id: &TermId, name: TermName, at: DateTime<Utc>) -> DomainResult<Term> {
        let sql = format!(
            "UPDATE {} SET name = $2, updated_at = $3 WHERE id = $1
             RETURNING id, name, created_at, updated_at",
            self.table()
        );
        let row = sqlx::query_as::<_, TermRow>(&sql)
            .bind(id.as_str())
            .bind(name.as_str())
            .bind(at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| self.not_found())?;

        Term::try_from(row)
    }

    async fn remove(&self, id: &TermId) -> DomainResult<()> {
        // Foreign keys detach the term: tags cascade, topics are set to NULL.
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table());
        let result = sqlx::query(&sql)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(self.not_found());
        }
        Ok(())
    }
}
