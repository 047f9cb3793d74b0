// tests/support/builders.rs
use folio_core::application::commands::articles::ReviseArticleCommand;
use folio_core::domain::article::ArticleId;

/// Builds a revision where every field starts blank, i.e. unchanged.
pub struct ReviseBuilder {
    command: ReviseArticleCommand,
}

impl ReviseBuilder {
    pub fn new(id: ArticleId) -> Self {
        Self {
            command: ReviseArticleCommand {
                id: id.to_string(),
                ..ReviseArticleCommand::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.command.title = title.into();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.command.content = content.into();
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.command.summary = summary.into();
        self
    }

    pub fn cover_url(mut self, url: &str) -> Self {
        self.command.cover_url = url.into();
        self
    }

    pub fn topic(mut self, topic_id: &str) -> Self {
        self.command.topic_id = topic_id.into();
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.command.pinned = Some(pinned);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.command.hidden = Some(hidden);
        self
    }

    pub fn build(self) -> ReviseArticleCommand {
        self.command
    }
}

/// Body text of roughly `words` readable words.
pub fn words(count: usize) -> String {
    vec!["lorem"; count].join(" ")
}
