// src/domain/taxonomy/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult, FieldViolation};
use crate::domain::text::{collapse_whitespace, ensure_max_chars, ensure_required};
use std::fmt;

pub const TERM_NAME_MAX_CHARS: usize = 64;

/// Tags attach many-to-many, topics one-per-article. Both share one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Tag,
    Topic,
}

impl TermKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermKind::Tag => "tag",
            TermKind::Topic => "topic",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slug-shaped identifier: lowercase word characters separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(String);

impl TermId {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let value = raw.trim();
        if value.is_empty() || !is_slug_shaped(value) {
            return Err(DomainError::InvalidIdentifier(format!(
                "'{value}' is not a valid slug identifier"
            )));
        }
        ensure_max_chars("id", value, TERM_NAME_MAX_CHARS)?;
        Ok(Self(value.to_owned()))
    }

    pub fn optional(raw: &str) -> DomainResult<Option<Self>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::new(raw).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_slug_shaped(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermName(String);

impl TermName {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let value = collapse_whitespace(raw);
        ensure_required("name", &value)?;
        ensure_max_chars("name", &value, TERM_NAME_MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Derive the identifier for a freshly named term.
pub fn term_id_from_slug(slug: String) -> DomainResult<TermId> {
    if slug.is_empty() {
        return Err(FieldViolation::new("name", "alphanum").into());
    }
    TermId::new(&slug)
}
