// src/domain/taxonomy/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::entity::{NewTerm, Term};
use crate::domain::taxonomy::value_objects::{TermId, TermName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage for one kind of term. Removing a term detaches it from every article.
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Term>>;
    async fn find(&self, id: &TermId) -> DomainResult<Option<Term>>;
    /// Fails with `Conflict` when the id is already taken.
    async fn insert(&self, term: NewTerm) -> DomainResult<Term>;
    async fn rename(&self, id: &TermId, name: TermName, at: DateTime<Utc>) -> DomainResult<Term>;
    async fn remove(&self, id: &TermId) -> DomainResult<()>;
}
