// src/application/commands/articles/draft.rs
use super::{ArticleCommandService, service::read_minutes};
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleContent, ArticleId, ArticleTitle, NewDraft},
};

pub struct DraftArticleCommand {
    pub title: String,
    pub content: Option<String>,
}

impl ArticleCommandService {
    /// Store a new draft and return its identifier. Nothing is persisted when
    /// the title or content fails validation.
    pub async fn draft_article(&self, command: DraftArticleCommand) -> ApplicationResult<ArticleId> {
        let title = ArticleTitle::new(&command.title)?;
        let content = match command.content.as_deref() {
            Some(raw) => ArticleContent::new(raw)?,
            None => ArticleContent::default(),
        };

        let slug = self.derive_slug(title.as_str());
        let read_time = read_minutes(title.as_str(), content.as_str());

        let id = self
            .write_repo
            .draft(NewDraft {
                title,
                slug,
                content,
                read_time,
                drafted_at: self.clock.now(),
            })
            .await?;

        tracing::info!(article_id = %id, "article drafted");
        Ok(id)
    }
}
