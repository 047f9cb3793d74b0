// src/application/commands/articles/revise.rs
use super::{ArticleCommandService, service::read_minutes};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{
            ArticleContent, ArticleId, ArticleRevision, ArticleSummaryText, ArticleTitle,
            ArticleView, CoverCaption,
        },
        taxonomy::TermId,
        text::sanitize_urls,
    },
};

/// Partial update; blank strings and `None` mean "leave unchanged".
#[derive(Debug, Default)]
pub struct ReviseArticleCommand {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub cover_url: String,
    pub cover_caption: String,
    pub content: String,
    pub topic_id: String,
    pub pinned: Option<bool>,
    pub hidden: Option<bool>,
}

impl ArticleCommandService {
    /// Apply a revision. Drafts are edited in place; published articles
    /// collect title, content and topic changes in their pending patch.
    ///
    /// When the title, content, summary or caption changes, the slug and read-time
    /// are re-derived from the revised values merged over the current working copy.
    /// Only derived values that differ from the working copy are written, so a
    /// summary edit on a published article does not open a patch.
    pub async fn revise(&self, command: ReviseArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.id)?;
        let revision = self.build_revision(command)?;

        if revision.is_empty() {
            tracing::debug!(article_id = %id, "empty revision ignored");
            return Ok(());
        }

        let revision = self.complete_revision(id, revision).await?;
        self.write_repo.revise(id, revision).await?;
        tracing::info!(article_id = %id, "article revised");
        Ok(())
    }

    fn build_revision(&self, command: ReviseArticleCommand) -> ApplicationResult<ArticleRevision> {
        let ReviseArticleCommand {
            id: _,
            title,
            summary,
            mut cover_url,
            cover_caption,
            content,
            topic_id,
            pinned,
            hidden,
        } = command;

        sanitize_urls(&mut [&mut cover_url])?;

        let mut revision = ArticleRevision::new(self.clock.now());
        revision.title = ArticleTitle::optional(&title)?;
        revision.content = ArticleContent::optional(&content)?;
        revision.summary = ArticleSummaryText::optional(&summary)?;
        revision.cover_caption = CoverCaption::optional(&cover_caption)?;
        revision.cover_url = (!cover_url.is_empty()).then_some(cover_url);
        revision.topic = TermId::optional(&topic_id)?;
        revision.pinned = pinned;
        revision.hidden = hidden;
        Ok(revision)
    }

    async fn complete_revision(
        &self,
        id: ArticleId,
        mut revision: ArticleRevision,
    ) -> ApplicationResult<ArticleRevision> {
        let text_changed = revision.title.is_some()
            || revision.content.is_some()
            || revision.summary.is_some()
            || revision.cover_caption.is_some();
        let visibility_changed = revision.pinned.is_some() || revision.hidden.is_some();

        if !text_changed && !visibility_changed {
            return Ok(revision);
        }

        let current = self
            .read_repo
            .find_by_id(id, ArticleView::Working)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if visibility_changed {
            current.ensure_pin_allowed(revision.pinned, revision.hidden)?;
        }

        if text_changed {
            let title = revision
                .title
                .as_ref()
                .map_or(current.title.as_str(), ArticleTitle::as_str);
            let content = revision
                .content
                .as_ref()
                .map_or(current.content.as_str(), ArticleContent::as_str);
            let slug = self.derive_slug(title);
            let read_time = read_minutes(title, content);
            revision.slug = (slug.as_str() != current.slug).then_some(slug);
            revision.read_time = (read_time != current.read_time).then_some(read_time);
        }

        Ok(revision)
    }
}
