// src/application/commands/articles/release.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

/// Patches are keyed by the id of the article they amend.
pub struct ReleasePatchCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn release(&self, command: ReleasePatchCommand) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.id)?;
        self.write_repo.release(id, self.clock.now()).await?;
        tracing::info!(article_id = %id, "patch released");
        Ok(())
    }
}
