// src/application/commands/articles/mod.rs
mod discard;
mod draft;
mod publish;
mod release;
mod revise;
mod service;
mod share;
mod tags;

pub use discard::DiscardCommand;
pub use draft::DraftArticleCommand;
pub use publish::PublishCommand;
pub use release::ReleasePatchCommand;
pub use revise::ReviseArticleCommand;
pub use service::ArticleCommandService;
pub use share::ShareCommand;
pub use tags::ArticleTagCommand;
