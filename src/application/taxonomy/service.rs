// src/application/taxonomy/service.rs
use std::sync::Arc;

use super::CollectionCache;
use crate::{
    application::{
        dto::TermDto,
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::taxonomy::{
        NewTerm, TaxonomyRepository, Term, TermId, TermKind, TermName,
        value_objects::term_id_from_slug,
    },
};

/// CRUD for one kind of term, fronted by a whole-collection cache that every
/// write repopulates.
pub struct TaxonomyService {
    kind: TermKind,
    repo: Arc<dyn TaxonomyRepository>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    cache: CollectionCache<Term>,
}

impl TaxonomyService {
    pub fn new(
        kind: TermKind,
        repo: Arc<dyn TaxonomyRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            kind,
            repo,
            slugger,
            clock,
            cache: CollectionCache::new(),
        }
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    pub async fn list(&self) -> ApplicationResult<Vec<TermDto>> {
        let terms = match self.cache.snapshot() {
            Some(terms) => terms,
            None => self.cache.replace(self.repo.list().await?),
        };
        Ok(terms.iter().cloned().map(Into::into).collect())
    }

    pub async fn get(&self, id: &str) -> ApplicationResult<TermDto> {
        let id = TermId::new(id)?;
        let term = match self.cache.snapshot() {
            Some(terms) => terms.iter().find(|term| term.id == id).cloned(),
            None => self.repo.find(&id).await?,
        };
        term.map(Into::into).ok_or_else(|| self.not_found(&id))
    }

    pub async fn create(&self, name: &str) -> ApplicationResult<TermDto> {
        let name = TermName::new(name)?;
        let id = term_id_from_slug(self.slugger.slugify(name.as_str()))?;

        if self.repo.find(&id).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "{} '{id}' already exists",
                self.kind
            )));
        }

        let created = self
            .repo
            .insert(NewTerm {
                id,
                name,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(kind = %self.kind, id = %created.id, "term created");
        self.repopulate().await;
        Ok(created.into())
    }

    pub async fn update(&self, id: &str, name: &str) -> ApplicationResult<TermDto> {
        let id = TermId::new(id)?;
        let name = TermName::new(name)?;
        let updated = self.repo.rename(&id, name, self.clock.now()).await?;
        tracing::info!(kind = %self.kind, id = %updated.id, "term renamed");
        self.repopulate().await;
        Ok(updated.into())
    }

    pub async fn remove(&self, id: &str) -> ApplicationResult<()> {
        let id = TermId::new(id)?;
        self.repo.remove(&id).await?;
        tracing::info!(kind = %self.kind, id = %id, "term removed");
        self.repopulate().await;
        Ok(())
    }

    /// Clear the slot and reload it right away. A failed reload leaves the slot
    /// empty so the next read goes to the store.
    async fn repopulate(&self) {
        self.cache.clear();
        match self.repo.list().await {
            Ok(terms) => {
                tracing::debug!(kind = %self.kind, count = terms.len(), "term cache repopulated");
                self.cache.replace(terms);
            }
            Err(err) => {
                tracing::warn!(kind = %self.kind, error = %err, "term cache reload failed");
            }
        }
    }

    fn not_found(&self, id: &TermId) -> ApplicationError {
        ApplicationError::not_found(format!("{} '{id}' not found", self.kind))
    }
}
