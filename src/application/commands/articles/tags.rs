// src/application/commands/articles/tags.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleId, taxonomy::TermId},
};

pub struct ArticleTagCommand {
    pub article_id: String,
    pub tag_id: String,
}

impl ArticleTagCommand {
    fn parse(&self) -> ApplicationResult<(ArticleId, TermId)> {
        Ok((
            ArticleId::parse(&self.article_id)?,
            TermId::new(&self.tag_id)?,
        ))
    }
}

impl ArticleCommandService {
    /// Attach a tag. An already attached tag surfaces as a conflict.
    pub async fn add_tag(&self, command: ArticleTagCommand) -> ApplicationResult<()> {
        let (id, tag) = command.parse()?;
        self.write_repo.add_tag(id, &tag).await?;
        tracing::debug!(article_id = %id, tag = %tag, "tag attached");
        Ok(())
    }

    pub async fn remove_tag(&self, command: ArticleTagCommand) -> ApplicationResult<()> {
        let (id, tag) = command.parse()?;
        self.write_repo.remove_tag(id, &tag).await?;
        tracing::debug!(article_id = %id, tag = %tag, "tag detached");
        Ok(())
    }
}
