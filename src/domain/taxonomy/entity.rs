// src/domain/taxonomy/entity.rs
use crate::domain::taxonomy::value_objects::{TermId, TermName};
use chrono::{DateTime, Utc};

/// A tag or a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTerm {
    pub id: TermId,
    pub name: TermName,
    pub created_at: DateTime<Utc>,
}
