// tests/support/mocks/util.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::application::ports::time::Clock;
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::taxonomy::{NewTerm, TaxonomyRepository, Term, TermId, TermName};
use std::sync::Mutex;

/// Clock that stays put until a test moves it.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::at(super::time::fixed_now())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Taxonomy store whose every call fails, for cache fallback tests.
pub struct FailingTaxonomy;

#[async_trait]
impl TaxonomyRepository for FailingTaxonomy {
    async fn list(&self) -> DomainResult<Vec<Term>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn find(&self, _id: &TermId) -> DomainResult<Option<Term>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn insert(&self, _term: NewTerm) -> DomainResult<Term> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn rename(&self, _id: &TermId, _name: TermName, _at: DateTime<Utc>) -> DomainResult<Term> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn remove(&self, _id: &TermId) -> DomainResult<()> {
        Err(DomainError::Persistence("store offline".into()))
    }
}
