pub mod articles;
pub mod pagination;
pub mod taxonomy;

pub use articles::{ArticleDto, ArticleSummaryDto, DraftCreatedDto, ShareLinkDto};
pub use pagination::Page;
pub use taxonomy::TermDto;
