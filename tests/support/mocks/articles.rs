// tests/support/mocks/articles.rs
use super::rows::{PendingPatch, StoredArticle, window_contains};
use super::taxonomy::InMemoryTaxonomy;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRevision,
    ArticleStatus, ArticleSummary, ArticleView, ArticleWriteRepository, Cover, DiscardTarget,
    Lifecycle, NewDraft, PublishOutcome, RevisionTarget,
};
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::taxonomy::{Term, TermId};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct Store {
    /// The published (or draft) row; `has_patch` and `tags` are derived on read.
    articles: HashMap<ArticleId, Article>,
    patches: HashMap<ArticleId, PendingPatch>,
    links: HashMap<ArticleId, String>,
    tags: HashMap<ArticleId, BTreeSet<TermId>>,
}

impl Store {
    fn lifecycle(&self, id: ArticleId) -> DomainResult<Lifecycle> {
        let article = self.articles.get(&id).ok_or_else(not_found)?;
        Ok(Lifecycle::from_flags(
            article.is_draft(),
            self.patches.contains_key(&id),
        ))
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound("article not found".into())
}

/// Both article repository traits over one mutex-guarded store. Lifecycle
/// decisions go through the same domain rules the Postgres store uses.
pub struct InMemoryArticles {
    store: Mutex<Store>,
    tags: Arc<InMemoryTaxonomy>,
    topics: Arc<InMemoryTaxonomy>,
    writes: AtomicUsize,
}

impl InMemoryArticles {
    pub fn new(tags: Arc<InMemoryTaxonomy>, topics: Arc<InMemoryTaxonomy>) -> Self {
        Self {
            store: Mutex::new(Store::default()),
            tags,
            topics,
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of write-repository calls that reached the store.
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn patch(&self, id: ArticleId) -> Option<PendingPatch> {
        self.store.lock().unwrap().patches.get(&id).cloned()
    }

    /// The stored row as the public sees it, ignoring drafts and hidden flags.
    pub fn row(&self, id: ArticleId) -> Option<Article> {
        self.store.lock().unwrap().articles.get(&id).cloned()
    }

    /// Adjust a stored row directly, e.g. to backdate timestamps.
    pub fn update_row(&self, id: ArticleId, change: impl FnOnce(&mut Article)) {
        let mut store = self.store.lock().unwrap();
        if let Some(article) = store.articles.get_mut(&id) {
            change(article);
        }
    }

    fn touch(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    fn resolve_topic(&self, id: Option<&TermId>) -> DomainResult<Option<Term>> {
        match id {
            None => Ok(None),
            Some(id) => self
                .topics
                .term(id)
                .map(Some)
                .ok_or_else(|| DomainError::NotFound("topic not found".into())),
        }
    }

    fn hydrate(&self, store: &Store, mut article: Article, view: ArticleView) -> Article {
        let id = article.id;
        article.has_patch = store.patches.contains_key(&id);
        // Topics removed from the taxonomy read as detached.
        article.topic = article
            .topic
            .and_then(|topic| self.topics.term(&topic.id));

        if view == ArticleView::Working {
            if let Some(patch) = store.patches.get(&id) {
                let topic = patch.topic.as_ref().and_then(|topic| self.topics.term(topic));
                article.overlay(patch, topic);
            }
        }

        article.tags = store
            .tags
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|tag| self.tags.term(tag))
            .collect();
        article
    }

    fn matches(
        store: &Store,
        article: &Article,
        filter: &ArticleFilter,
        hidden: bool,
        drafts_only: bool,
    ) -> bool {
        if article.is_draft() != drafts_only || (!hidden && article.hidden) {
            return false;
        }
        if let Some(topic) = &filter.topic {
            if article.topic.as_ref().map(|t| &t.id) != Some(topic) {
                return false;
            }
        }
        if let Some(tag) = &filter.tag {
            if !store
                .tags
                .get(&article.id)
                .is_some_and(|tags| tags.contains(tag))
            {
                return false;
            }
        }
        if let Some(window) = &filter.window {
            let dated = if drafts_only {
                Some(article.drafted_at)
            } else {
                article.published_at
            };
            if !dated.is_some_and(|at| window_contains(window, at)) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let haystack =
                format!("{} {} {}", article.title, article.summary, article.content).to_lowercase();
            if !search
                .to_lowercase()
                .split_whitespace()
                .all(|word| haystack.contains(word))
            {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn draft(&self, draft: NewDraft) -> DomainResult<ArticleId> {
        self.touch();
        let id = ArticleId::generate();
        let article = Article {
            id,
            title: draft.title.into_inner(),
            slug: draft.slug.into_inner(),
            content: draft.content.into_inner(),
            summary: String::new(),
            cover: Cover::default(),
            read_time: draft.read_time,
            views: 0,
            status: ArticleStatus::Draft,
            pinned: false,
            hidden: false,
            has_patch: false,
            topic: None,
            tags: Vec::new(),
            drafted_at: draft.drafted_at,
            published_at: None,
            modified_at: None,
            updated_at: draft.drafted_at,
        };
        self.store.lock().unwrap().articles.insert(id, article);
        Ok(id)
    }

    async fn publish(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<PublishOutcome> {
        self.touch();
        let mut store = self.store.lock().unwrap();
        let outcome = store.lifecycle(id)?.publish();
        if outcome == PublishOutcome::Published {
            if let Some(article) = store.articles.get_mut(&id) {
                article.publish(at);
            }
        }
        Ok(outcome)
    }

    async fn revise(&self, id: ArticleId, revision: ArticleRevision) -> DomainResult<()> {
        self.touch();
        let topic = self.resolve_topic(revision.topic.as_ref())?;
        let mut guard = self.store.lock().unwrap();
        let store = &mut *guard;
        let target = store.lifecycle(id)?.revision_target();

        let article = store.articles.get_mut(&id).ok_or_else(not_found)?;
        article.apply_presentation(&revision);
        match target {
            RevisionTarget::Draft => article.apply_draft_content(&revision, topic),
            RevisionTarget::Patch => {
                if revision.touches_patchable() {
                    store.patches.entry(id).or_default().merge(&revision);
                }
            }
        }
        Ok(())
    }

    async fn share(&self, id: ArticleId) -> DomainResult<String> {
        self.touch();
        let mut store = self.store.lock().unwrap();
        if !store.articles.contains_key(&id) {
            return Err(not_found());
        }
        let link = store
            .links
            .entry(id)
            .or_insert_with(|| Uuid::new_v4().simple().to_string())
            .clone();
        Ok(link)
    }

    async fn discard(&self, id: ArticleId) -> DomainResult<DiscardTarget> {
        self.touch();
        let mut store = self.store.lock().unwrap();
        let target = store.lifecycle(id)?.discard()?;
        match target {
            DiscardTarget::Draft => {
                store.articles.remove(&id);
                store.links.remove(&id);
                store.tags.remove(&id);
            }
            DiscardTarget::Patch => {
                store.patches.remove(&id);
            }
        }
        Ok(target)
    }

    async fn release(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()> {
        self.touch();
        let mut store = self.store.lock().unwrap();
        store.lifecycle(id)?.release()?;

        let patch = store.patches.remove(&id).ok_or_else(not_found)?;
        let topic = patch.topic.as_ref().and_then(|topic| self.topics.term(topic));
        let article = store.articles.get_mut(&id).ok_or_else(not_found)?;
        article.release(&patch, topic, at);
        Ok(())
    }

    async fn add_tag(&self, id: ArticleId, tag: &TermId) -> DomainResult<()> {
        self.touch();
        let mut store = self.store.lock().unwrap();
        if !store.articles.contains_key(&id) {
            return Err(not_found());
        }
        if self.tags.term(tag).is_none() {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        if !store.tags.entry(id).or_default().insert(tag.clone()) {
            return Err(DomainError::Conflict(format!(
                "tag '{tag}' is already attached to article {id}"
            )));
        }
        Ok(())
    }

    async fn remove_tag(&self, id: ArticleId, tag: &TermId) -> DomainResult<()> {
        self.touch();
        let mut store = self.store.lock().unwrap();
        let removed = store
            .tags
            .get_mut(&id)
            .is_some_and(|tags| tags.remove(tag));
        if !removed {
            return Err(DomainError::NotFound(format!(
                "tag '{tag}' is not attached to article {id}"
            )));
        }
        Ok(())
    }

    async fn record_view(&self, id: ArticleId) -> DomainResult<()> {
        self.touch();
        let mut store = self.store.lock().unwrap();
        match store.articles.get_mut(&id) {
            Some(article) if !article.is_draft() => {
                article.views += 1;
                Ok(())
            }
            _ => Err(not_found()),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn list(
        &self,
        filter: &ArticleFilter,
        hidden: bool,
        drafts_only: bool,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let store = self.store.lock().unwrap();
        let mut matching: Vec<&Article> = store
            .articles
            .values()
            .filter(|article| Self::matches(&store, article, filter, hidden, drafts_only))
            .collect();

        let dated = |article: &Article| {
            if drafts_only {
                Some(article.drafted_at)
            } else {
                article.published_at
            }
        };
        matching.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then_with(|| dated(b).cmp(&dated(a)))
                .then_with(|| b.id.as_uuid().cmp(&a.id.as_uuid()))
        });

        let pagination = filter.pagination;
        Ok(matching
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap())
            .take(pagination.per_page as usize + 1)
            .map(Article::to_summary)
            .collect())
    }

    async fn find_by_id(&self, id: ArticleId, view: ArticleView) -> DomainResult<Option<Article>> {
        let store = self.store.lock().unwrap();
        let Some(article) = store.articles.get(&id).cloned() else {
            return Ok(None);
        };
        if view == ArticleView::Published && article.is_draft() {
            return Ok(None);
        }
        Ok(Some(self.hydrate(&store, article, view)))
    }

    async fn find_by_link(&self, link: &str) -> DomainResult<Option<Article>> {
        let store = self.store.lock().unwrap();
        let id = store
            .links
            .iter()
            .find(|(_, issued)| issued.as_str() == link)
            .map(|(id, _)| *id);
        let article = id.and_then(|id| store.articles.get(&id).cloned());
        Ok(article.map(|article| self.hydrate(&store, article, ArticleView::Working)))
    }
}
