// tests/support/mocks/taxonomy.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::taxonomy::{NewTerm, TaxonomyRepository, Term, TermId, TermName};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tag or topic store backed by a sorted map. Counts `list` calls so tests can
/// tell cache hits from store reads.
#[derive(Default)]
pub struct InMemoryTaxonomy {
    terms: Mutex<BTreeMap<TermId, Term>>,
    list_calls: AtomicUsize,
    find_calls: AtomicUsize,
}

impl InMemoryTaxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert directly, bypassing the service. `id` must be slug-shaped.
    pub fn seed(&self, id: &str, name: &str) -> Term {
        let term = Term {
            id: TermId::new(id).unwrap(),
            name: name.to_string(),
            created_at: super::time::fixed_now(),
            updated_at: super::time::fixed_now(),
        };
        self.terms
            .lock()
            .unwrap()
            .insert(term.id.clone(), term.clone());
        term
    }

    pub fn term(&self, id: &TermId) -> Option<Term> {
        self.terms.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.terms.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.lock().unwrap().is_empty()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaxonomyRepository for InMemoryTaxonomy {
    async fn list(&self) -> DomainResult<Vec<Term>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut terms: Vec<Term> = self.terms.lock().unwrap().values().cloned().collect();
        terms.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(terms)
    }

    async fn find(&self, id: &TermId) -> DomainResult<Option<Term>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.term(id))
    }

    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        let mut terms = self.terms.lock().unwrap();
        if terms.contains_key(&term.id) {
            return Err(DomainError::Conflict(format!("'{}' already exists", term.id)));
        }
        let stored = Term {
            id: term.id.clone(),
            name: term.name.into_inner(),
            created_at: term.created_at,
            updated_at: term.created_at,
        };
        terms.insert(term.id, stored.clone());
        Ok(stored)
    }

    async fn rename(&self, id: &TermId, name: TermName, at: DateTime<Utc>) -> DomainResult<Term> {
        let mut terms = self.terms.lock().unwrap();
        let term = terms
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("'{id}' not found")))?;
        term.name = name.into_inner();
        term.updated_at = at;
        Ok(term.clone())
    }

    async fn remove(&self, id: &TermId) -> DomainResult<()> {
        self.terms
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("'{id}' not found")))
    }
}
