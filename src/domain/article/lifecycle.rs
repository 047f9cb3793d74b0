// src/domain/article/lifecycle.rs
//! Transition rules for `Drafted -> Published -> Amending -> (Released | Discarded)`.
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Not yet public.
    Drafted,
    /// Public, no pending revision.
    Published,
    /// Public with an open patch awaiting release or discard.
    Amending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    AlreadyPublished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardTarget {
    /// Delete the draft article outright.
    Draft,
    /// Delete the pending patch; the published article is untouched.
    Patch,
}

/// Where the patchable fields of a revision (title, slug, content, read-time, topic) land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionTarget {
    Draft,
    Patch,
}

impl Lifecycle {
    pub fn from_flags(is_draft: bool, has_patch: bool) -> Self {
        match (is_draft, has_patch) {
            (true, _) => Lifecycle::Drafted,
            (false, false) => Lifecycle::Published,
            (false, true) => Lifecycle::Amending,
        }
    }

    pub fn publish(self) -> PublishOutcome {
        match self {
            Lifecycle::Drafted => PublishOutcome::Published,
            Lifecycle::Published | Lifecycle::Amending => PublishOutcome::AlreadyPublished,
        }
    }

    pub fn discard(self) -> DomainResult<DiscardTarget> {
        match self {
            Lifecycle::Drafted => Ok(DiscardTarget::Draft),
            Lifecycle::Amending => Ok(DiscardTarget::Patch),
            Lifecycle::Published => Err(DomainError::NotFound(
                "no draft or pending patch to discard".into(),
            )),
        }
    }

    pub fn release(self) -> DomainResult<()> {
        match self {
            Lifecycle::Amending => Ok(()),
            Lifecycle::Published => Err(DomainError::NotFound("no pending patch to release".into())),
            Lifecycle::Drafted => Err(DomainError::Conflict(
                "article is still a draft; publish it instead".into(),
            )),
        }
    }

    pub fn revision_target(self) -> RevisionTarget {
        match self {
            Lifecycle::Drafted => RevisionTarget::Draft,
            Lifecycle::Published | Lifecycle::Amending => RevisionTarget::Patch,
        }
    }
}
