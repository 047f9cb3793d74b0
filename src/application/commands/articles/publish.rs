// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleId, PublishOutcome},
};

pub struct PublishCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Publishing an already published article is a no-op reported as
    /// [`PublishOutcome::AlreadyPublished`].
    pub async fn publish(&self, command: PublishCommand) -> ApplicationResult<PublishOutcome> {
        let id = ArticleId::parse(&command.id)?;
        let outcome = self.write_repo.publish(id, self.clock.now()).await?;

        match outcome {
            PublishOutcome::Published => tracing::info!(article_id = %id, "article published"),
            PublishOutcome::AlreadyPublished => {
                tracing::debug!(article_id = %id, "publish skipped, already published");
            }
        }
        Ok(outcome)
    }
}
