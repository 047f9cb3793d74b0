pub mod entity;
pub mod lifecycle;
pub mod metrics;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleRevision, ArticleStatus, ArticleSummary, Cover, NewDraft};
pub use lifecycle::{DiscardTarget, Lifecycle, PublishOutcome, RevisionTarget};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleContent, ArticleFilter, ArticleId, ArticleSlug, ArticleSummaryText, ArticleTitle,
    ArticleView, CoverCaption, Pagination, PublicationWindow,
};
