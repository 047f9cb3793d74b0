// src/infrastructure/repositories/postgres_article.rs
use super::error::{invalid_persisted, map_sqlx, read_time_from_db, read_time_to_db};
use super::postgres_taxonomy::TermRow;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRevision, ArticleStatus,
    ArticleSummary, ArticleView, ArticleWriteRepository, Cover, DiscardTarget, Lifecycle,
    NewDraft, PublishOutcome, RevisionTarget,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{Term, TermId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

/// Editor's copy: patch overrides win over the published row.
const WORKING_SELECT: &str = "SELECT a.id,
        COALESCE(p.title, a.title) AS title,
        COALESCE(p.slug, a.slug) AS slug,
        COALESCE(p.content, a.content) AS content,
        a.summary, a.cover_url, a.cover_caption,
        COALESCE(p.read_time, a.read_time) AS read_time,
        a.views, a.is_draft, a.is_pinned, a.is_hidden,
        (p.article_id IS NOT NULL) AS has_patch,
        t.id AS topic_id, t.name AS topic_name,
        t.created_at AS topic_created_at, t.updated_at AS topic_updated_at,
        a.drafted_at, a.published_at, a.modified_at, a.updated_at
    FROM articles a
    LEFT JOIN article_patches p ON p.article_id = a.id
    LEFT JOIN topics t ON t.id = COALESCE(p.topic_id, a.topic_id)";

const PUBLISHED_SELECT: &str = "SELECT a.id, a.title, a.slug, a.content,
        a.summary, a.cover_url, a.cover_caption, a.read_time,
        a.views, a.is_draft, a.is_pinned, a.is_hidden,
        EXISTS (SELECT 1 FROM article_patches p WHERE p.article_id = a.id) AS has_patch,
        t.id AS topic_id, t.name AS topic_name,
        t.created_at AS topic_created_at, t.updated_at AS topic_updated_at,
        a.drafted_at, a.published_at, a.modified_at, a.updated_at
    FROM articles a
    LEFT JOIN topics t ON t.id = a.topic_id";

const SUMMARY_SELECT: &str = "SELECT a.id, a.title, a.slug, a.summary, a.cover_url, a.cover_caption,
        a.read_time, a.views, a.is_draft, a.is_pinned, a.is_hidden, a.topic_id,
        a.drafted_at, a.published_at
    FROM articles a";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    slug: String,
    content: String,
    summary: String,
    cover_url: String,
    cover_caption: String,
    read_time: i32,
    views: i64,
    is_draft: bool,
    is_pinned: bool,
    is_hidden: bool,
    has_patch: bool,
    topic_id: Option<String>,
    topic_name: Option<String>,
    topic_created_at: Option<DateTime<Utc>>,
    topic_updated_at: Option<DateTime<Utc>>,
    drafted_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    modified_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let topic = match (
            row.topic_id,
            row.topic_name,
            row.topic_created_at,
            row.topic_updated_at,
        ) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => Some(Term::try_from(
                TermRow {
                    id,
                    name,
                    created_at,
                    updated_at,
                },
            )?),
            _ => None,
        };

        Ok(Article {
            id: ArticleId::new(row.id),
            title: row.title,
            slug: row.slug,
            content: row.content,
            summary: row.summary,
            cover: Cover {
                url: row.cover_url,
                caption: row.cover_caption,
            },
            read_time: read_time_from_db(row.read_time)?,
            views: row.views,
            status: status_from_flag(row.is_draft),
            pinned: row.is_pinned,
            hidden: row.is_hidden,
            has_patch: row.has_patch,
            topic,
            tags: Vec::new(),
            drafted_at: row.drafted_at,
            published_at: row.published_at,
            modified_at: row.modified_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: Uuid,
    title: String,
    slug: String,
    summary: String,
    cover_url: String,
    cover_caption: String,
    read_time: i32,
    views: i64,
    is_draft: bool,
    is_pinned: bool,
    is_hidden: bool,
    topic_id: Option<String>,
    drafted_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        let topic = row
            .topic_id
            .as_deref()
            .map(TermId::new)
            .transpose()
            .map_err(|err| invalid_persisted("topic id", err))?;

        Ok(ArticleSummary {
            id: ArticleId::new(row.id),
            title: row.title,
            slug: row.slug,
            summary: row.summary,
            cover: Cover {
                url: row.cover_url,
                caption: row.cover_caption,
            },
            read_time: read_time_from_db(row.read_time)?,
            views: row.views,
            status: status_from_flag(row.is_draft),
            pinned: row.is_pinned,
            hidden: row.is_hidden,
            topic,
            drafted_at: row.drafted_at,
            published_at: row.published_at,
        })
    }
}

fn status_from_flag(is_draft: bool) -> ArticleStatus {
    if is_draft {
        ArticleStatus::Draft
    } else {
        ArticleStatus::Published
    }
}

fn article_not_found() -> DomainError {
    DomainError::NotFound("article not found".into())
}

/// Lock the article row for the rest of the transaction and report where it
/// sits in its lifecycle.
async fn lock_lifecycle(
    tx: &mut Transaction<'_, Postgres>,
    id: ArticleId,
) -> DomainResult<Lifecycle> {
    let flags = sqlx::query_as::<_, (bool, bool)>(
        "SELECT a.is_draft,
                EXISTS (SELECT 1 FROM article_patches p WHERE p.article_id = a.id)
         FROM articles a WHERE a.id = $1
         FOR UPDATE",
    )
    .bind(id.as_uuid())
    .fetch_optional(&mut **tx)
    .await
    .map_err(map_sqlx)?;

    let (is_draft, has_patch) = flags.ok_or_else(article_not_found)?;
    Ok(Lifecycle::from_flags(is_draft, has_patch))
}

impl PostgresArticleWriteRepository {
    async fn update_article_row(
        tx: &mut Transaction<'_, Postgres>,
        id: ArticleId,
        revision: &ArticleRevision,
        target: RevisionTarget,
    ) -> DomainResult<()> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(revision.revised_at);

        if let Some(summary) = &revision.summary {
            builder.push(", summary = ");
            builder.push_bind(summary.as_str().to_owned());
        }
        if let Some(url) = &revision.cover_url {
            builder.push(", cover_url = ");
            builder.push_bind(url.clone());
        }
        if let Some(caption) = &revision.cover_caption {
            builder.push(", cover_caption = ");
            builder.push_bind(caption.as_str().to_owned());
        }
        if let Some(pinned) = revision.pinned {
            builder.push(", is_pinned = ");
            builder.push_bind(pinned);
        }
        if let Some(hidden) = revision.hidden {
            builder.push(", is_hidden = ");
            builder.push_bind(hidden);
        }

        if target == RevisionTarget::Draft {
            if let Some(title) = &revision.title {
                builder.push(", title = ");
                builder.push_bind(title.as_str().to_owned());
            }
            if let Some(slug) = &revision.slug {
                builder.push(", slug = ");
                builder.push_bind(slug.as_str().to_owned());
            }
            if let Some(content) = &revision.content {
                builder.push(", content = ");
                builder.push_bind(content.as_str().to_owned());
            }
            if let Some(read_time) = revision.read_time {
                builder.push(", read_time = ");
                builder.push_bind(read_time_to_db(read_time));
            }
            if let Some(topic) = &revision.topic {
                builder.push(", topic_id = ");
                builder.push_bind(topic.as_str().to_owned());
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());

        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn upsert_patch(
        tx: &mut Transaction<'_, Postgres>,
        id: ArticleId,
        revision: &ArticleRevision,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_patches (article_id, title, slug, content, read_time, topic_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             ON CONFLICT (article_id) DO UPDATE SET
                title = COALESCE(EXCLUDED.title, article_patches.title),
                slug = COALESCE(EXCLUDED.slug, article_patches.slug),
                content = COALESCE(EXCLUDED.content, article_patches.content),
                read_time = COALESCE(EXCLUDED.read_time, article_patches.read_time),
                topic_id = COALESCE(EXCLUDED.topic_id, article_patches.topic_id),
                updated_at = EXCLUDED.updated_at",
        )
        .bind(id.as_uuid())
        .bind(revision.title.as_ref().map(|title| title.as_str()))
        .bind(revision.slug.as_ref().map(|slug| slug.as_str()))
        .bind(revision.content.as_ref().map(|content| content.as_str()))
        .bind(revision.read_time.map(read_time_to_db))
        .bind(revision.topic.as_ref().map(TermId::as_str))
        .bind(revision.revised_at)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn draft(&self, draft: NewDraft) -> DomainResult<ArticleId> {
        let NewDraft {
            title,
            slug,
            content,
            read_time,
            drafted_at,
        } = draft;
        let id = ArticleId::generate();

        sqlx::query(
            "INSERT INTO articles (id, title, slug, content, read_time, is_draft, drafted_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, TRUE, $6, $6)",
        )
        .bind(id.as_uuid())
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(read_time_to_db(read_time))
        .bind(drafted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(id)
    }

    async fn publish(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<PublishOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let outcome = lock_lifecycle(&mut tx, id).await?.publish();

        if outcome == PublishOutcome::Published {
            sqlx::query(
                "UPDATE articles SET is_draft = FALSE, published_at = $2, updated_at = $2
                 WHERE id = $1",
            )
            .bind(id.as_uuid())
            .bind(at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(outcome)
    }

    async fn revise(&self, id: ArticleId, revision: ArticleRevision) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let target = lock_lifecycle(&mut tx, id).await?.revision_target();

        Self::update_article_row(&mut tx, id, &revision, target).await?;
        if target == RevisionTarget::Patch && revision.touches_patchable() {
            Self::upsert_patch(&mut tx, id, &revision).await?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn share(&self, id: ArticleId) -> DomainResult<String> {
        let candidate = Uuid::new_v4().simple().to_string();
        let link = sqlx::query_scalar::<_, Option<String>>(
            "UPDATE articles SET share_link = COALESCE(share_link, $2)
             WHERE id = $1
             RETURNING share_link",
        )
        .bind(id.as_uuid())
        .bind(candidate)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(article_not_found)?;

        link.ok_or_else(|| invalid_persisted("share link", "missing after issue"))
    }

    async fn discard(&self, id: ArticleId) -> DomainResult<DiscardTarget> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let target = lock_lifecycle(&mut tx, id).await?.discard()?;

        let sql = match target {
            DiscardTarget::Draft => "DELETE FROM articles WHERE id = $1",
            DiscardTarget::Patch => "DELETE FROM article_patches WHERE article_id = $1",
        };
        sqlx::query(sql)
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(target)
    }

    async fn release(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        lock_lifecycle(&mut tx, id).await?.release()?;

        sqlx::query(
            "UPDATE articles a SET
                title = COALESCE(p.title, a.title),
                slug = COALESCE(p.slug, a.slug),
                content = COALESCE(p.content, a.content),
                read_time = COALESCE(p.read_time, a.read_time),
                topic_id = COALESCE(p.topic_id, a.topic_id),
                modified_at = $2,
                updated_at = $2
             FROM article_patches p
             WHERE p.article_id = a.id AND a.id = $1",
        )
        .bind(id.as_uuid())
        .bind(at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query("DELETE FROM article_patches WHERE article_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn add_tag(&self, id: ArticleId, tag: &TermId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        lock_lifecycle(&mut tx, id).await?;

        let tag_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM tags WHERE id = $1)")
                .bind(tag.as_str())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        if !tag_exists {
            return Err(DomainError::NotFound("tag not found".into()));
        }

        let inserted = sqlx::query(
            "INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(id.as_uuid())
        .bind(tag.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;
        if inserted.rows_affected() == 0 {
            return Err(DomainError::Conflict(format!(
                "tag '{tag}' is already attached to article {id}"
            )));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_tag(&self, id: ArticleId, tag: &TermId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM article_tags WHERE article_id = $1 AND tag_id = $2")
            .bind(id.as_uuid())
            .bind(tag.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "tag '{tag}' is not attached to article {id}"
            )));
        }
        Ok(())
    }

    async fn record_view(&self, id: ArticleId) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE articles SET views = views + 1 WHERE id = $1 AND NOT is_draft")
                .bind(id.as_uuid())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(article_not_found());
        }
        Ok(())
    }
}

/// Criteria after the domain has resolved the publication window.
struct ListCriteria<'f> {
    filter: &'f ArticleFilter,
    hidden: bool,
    drafts_only: bool,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    /// `ILIKE` patterns, one per search word; every one must match.
    search: Vec<String>,
}

impl ListCriteria<'_> {
    /// Drafts are dated by when they were drafted, published articles by publication.
    fn date_column(&self) -> &'static str {
        if self.drafts_only {
            "a.drafted_at"
        } else {
            "a.published_at"
        }
    }
}

/// Normalized search text only carries word characters and single spaces, so
/// the words need no `LIKE` escaping.
fn search_patterns(search: Option<&str>) -> Vec<String> {
    search
        .unwrap_or_default()
        .split_whitespace()
        .map(|word| format!("%{word}%"))
        .collect()
}

impl PostgresArticleReadRepository {
    fn apply_conditions(
        builder: &mut QueryBuilder<'_, Postgres>,
        criteria: &ListCriteria<'_>,
    ) {
        builder.push(" WHERE a.is_draft = ");
        builder.push_bind(criteria.drafts_only);

        if !criteria.hidden {
            builder.push(" AND NOT a.is_hidden");
        }

        if let Some(topic) = &criteria.filter.topic {
            builder.push(" AND a.topic_id = ");
            builder.push_bind(topic.as_str().to_owned());
        }

        if let Some(tag) = &criteria.filter.tag {
            builder.push(
                " AND EXISTS (SELECT 1 FROM article_tags art WHERE art.article_id = a.id AND art.tag_id = ",
            );
            builder.push_bind(tag.as_str().to_owned());
            builder.push(")");
        }

        if let Some((start, end)) = criteria.window {
            let column = criteria.date_column();
            builder.push(format!(" AND {column} >= "));
            builder.push_bind(start);
            builder.push(format!(" AND {column} < "));
            builder.push_bind(end);
        }

        for pattern in &criteria.search {
            builder.push(" AND (a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.summary ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.content ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(")");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, criteria: &ListCriteria<'_>) {
        builder.push(format!(
            " ORDER BY a.is_pinned DESC, {} DESC, a.id DESC",
            criteria.date_column()
        ));
    }

    async fn fetch_page(&self, criteria: &ListCriteria<'_>) -> DomainResult<Vec<ArticleSummary>> {
        let pagination = criteria.filter.pagination;
        let fetch_limit = i64::from(pagination.per_page) + 1;
        let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SUMMARY_SELECT);
        Self::apply_conditions(&mut builder, criteria);
        Self::apply_ordering(&mut builder, criteria);
        builder.push(" LIMIT ");
        builder.push_bind(fetch_limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }

    async fn load_tags(&self, id: ArticleId) -> DomainResult<Vec<Term>> {
        let rows = sqlx::query_as::<_, TermRow>(
            "SELECT t.id, t.name, t.created_at, t.updated_at
             FROM tags t
             JOIN article_tags art ON art.tag_id = t.id
             WHERE art.article_id = $1
             ORDER BY t.name, t.id",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Term::try_from).collect()
    }

    async fn hydrate(&self, row: Option<ArticleRow>) -> DomainResult<Option<Article>> {
        let Some(row) = row else {
            return Ok(None);
        };
        let mut article = Article::try_from(row)?;
        article.tags = self.load_tags(article.id).await?;
        Ok(Some(article))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list(
        &self,
        filter: &ArticleFilter,
        hidden: bool,
        drafts_only: bool,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let criteria = ListCriteria {
            filter,
            hidden,
            drafts_only,
            window: filter.window.as_ref().map(|w| w.bounds()).transpose()?,
            search: search_patterns(filter.search.as_deref()),
        };

        self.fetch_page(&criteria).await
    }

    async fn find_by_id(&self, id: ArticleId, view: ArticleView) -> DomainResult<Option<Article>> {
        let sql = match view {
            ArticleView::Working => format!("{WORKING_SELECT} WHERE a.id = $1"),
            ArticleView::Published => format!("{PUBLISHED_SELECT} WHERE a.id = $1 AND NOT a.is_draft"),
        };
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate(row).await
    }

    async fn find_by_link(&self, link: &str) -> DomainResult<Option<Article>> {
        let sql = format!("{WORKING_SELECT} WHERE a.share_link = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(link)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate(row).await
    }
}
