use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleView},
};

pub struct GetArticleQuery {
    pub id: String,
    pub view: ArticleView,
}

pub struct GetArticleByLinkQuery {
    pub link: String,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&query.id)?;
        let article = self
            .read_repo
            .find_by_id(id, query.view)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }

    /// Public read of a published article; counts as a view unless the article is hidden.
    pub async fn read_article(&self, id: &str) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(id)?;
        let mut article = self
            .read_repo
            .find_by_id(id, ArticleView::Published)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !article.hidden {
            self.write_repo.record_view(id).await?;
            article.views += 1;
        }
        Ok(article.into())
    }

    pub async fn get_article_by_link(
        &self,
        query: GetArticleByLinkQuery,
    ) -> ApplicationResult<ArticleDto> {
        let link = query.link.trim();
        if link.is_empty() {
            return Err(ApplicationError::not_found("shared article not found"));
        }
        let article = self
            .read_repo
            .find_by_link(link)
            .await?
            .ok_or_else(|| ApplicationError::not_found("shared article not found"))?;
        Ok(article.into())
    }
}
