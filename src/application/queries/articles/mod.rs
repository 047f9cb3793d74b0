mod get;
mod list;
mod service;

pub use get::{GetArticleByLinkQuery, GetArticleQuery};
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
