// src/application/commands/articles/discard.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleId, DiscardTarget},
};

pub struct DiscardCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Drop a draft, or the pending patch of a published article. The
    /// published copy itself is never touched.
    pub async fn discard(&self, command: DiscardCommand) -> ApplicationResult<DiscardTarget> {
        let id = ArticleId::parse(&command.id)?;
        let target = self.write_repo.discard(id).await?;
        tracing::info!(article_id = %id, discarded = ?target, "article changes discarded");
        Ok(target)
    }
}
