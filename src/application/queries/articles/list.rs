use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, Page},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, Pagination, PublicationWindow},
        taxonomy::TermId,
        text::normalize_search,
    },
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub topic: Option<String>,
    pub tag: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub page: u32,
    pub per_page: u32,
    /// Include hidden articles.
    pub hidden: bool,
    /// Only drafts instead of published articles.
    pub drafts_only: bool,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let filter = Self::build_filter(&query)?;
        let pagination = filter.pagination;

        let records = self
            .read_repo
            .list(&filter, query.hidden, query.drafts_only)
            .await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::from_overfetch(
            items,
            pagination.page,
            pagination.per_page,
        ))
    }

    fn build_filter(query: &ListArticlesQuery) -> ApplicationResult<ArticleFilter> {
        let search = query
            .search
            .as_deref()
            .map(normalize_search)
            .filter(|value| !value.is_empty());

        Ok(ArticleFilter {
            search,
            topic: TermId::optional(query.topic.as_deref().unwrap_or_default())?,
            tag: TermId::optional(query.tag.as_deref().unwrap_or_default())?,
            window: PublicationWindow::new(query.month, query.year)?,
            pagination: Pagination::new(query.page, query.per_page),
        })
    }
}
