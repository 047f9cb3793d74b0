// src/application/commands/articles/share.rs
use super::ArticleCommandService;
use crate::{application::error::ShareFailure, domain::article::ArticleId};

pub struct ShareCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Issue a preview link. Every failure carries `about:blank` as its link.
    pub async fn share(&self, command: ShareCommand) -> Result<String, ShareFailure> {
        let id = ArticleId::parse(&command.id)?;
        let link = self.write_repo.share(id).await?;
        tracing::info!(article_id = %id, "share link issued");
        Ok(link)
    }
}
