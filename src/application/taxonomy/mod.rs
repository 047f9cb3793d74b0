mod cache;
mod service;

pub use cache::CollectionCache;
pub use service::TaxonomyService;
