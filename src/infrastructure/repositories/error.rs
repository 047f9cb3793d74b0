// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use std::fmt::Display;

const CNT_ARTICLE_SHARE_LINK: &str = "articles_share_link_key";
const CNT_ARTICLE_TOPIC: &str = "articles_topic_id_fkey";
const CNT_PATCH_TOPIC: &str = "article_patches_topic_id_fkey";
const CNT_ARTICLE_TAG_PK: &str = "article_tags_pkey";
const CNT_ARTICLE_TAG_TAG: &str = "article_tags_tag_id_fkey";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "articles_published_requires_timestamp_chk";
const CNT_TAG_PK: &str = "tags_pkey";
const CNT_TOPIC_PK: &str = "topics_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SHARE_LINK => {
                        DomainError::Conflict("share link already issued".into())
                    }
                    CNT_ARTICLE_TOPIC | CNT_PATCH_TOPIC => {
                        DomainError::NotFound("topic not found".into())
                    }
                    CNT_ARTICLE_TAG_PK => {
                        DomainError::Conflict("tag already attached to article".into())
                    }
                    CNT_ARTICLE_TAG_TAG => DomainError::NotFound("tag not found".into()),
                    CNT_TAG_PK => DomainError::Conflict("tag already exists".into()),
                    CNT_TOPIC_PK => DomainError::Conflict("topic already exists".into()),
                    CNT_ARTICLE_PUBLISHED_CHECK => {
                        DomainError::Persistence("published articles require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// A stored value no longer satisfies the rules it was written under.
pub fn invalid_persisted(what: &str, err: impl Display) -> DomainError {
    DomainError::Persistence(format!("invalid persisted {what}: {err}"))
}

/// Postgres integers are signed; read-times never exceed `i32::MAX` minutes in practice.
pub fn read_time_to_db(minutes: u32) -> i32 {
    i32::try_from(minutes).unwrap_or(i32::MAX)
}

pub fn read_time_from_db(minutes: i32) -> Result<u32, DomainError> {
    u32::try_from(minutes).map_err(|err| invalid_persisted("read_time", err))
}
