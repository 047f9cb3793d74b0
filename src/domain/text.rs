// src/domain/text.rs
//! String rules shared by the article and taxonomy models. Every rule runs on
//! already-trimmed input; empty values never trip a maximum.
use crate::domain::errors::{DomainError, DomainResult, FieldViolation};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]+").expect("non-word pattern is valid"));

pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn ensure_required(field: &'static str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(FieldViolation::new(field, "required").into());
    }
    Ok(())
}

pub fn ensure_max_chars(field: &'static str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(FieldViolation::new(field, "max").with_param(max).into());
    }
    Ok(())
}

pub fn ensure_min_chars(field: &'static str, value: &str, min: usize) -> DomainResult<()> {
    if !value.is_empty() && value.chars().count() < min {
        return Err(FieldViolation::new(field, "min").with_param(min).into());
    }
    Ok(())
}

pub fn ensure_max_bytes(field: &'static str, value: &str, max: usize) -> DomainResult<()> {
    if value.len() > max {
        return Err(FieldViolation::new(field, "max_bytes").with_param(max).into());
    }
    Ok(())
}

/// Trim every URL in place. Empty values pass; anything else must parse as an
/// absolute URL, and all offending values are reported together.
pub fn sanitize_urls(urls: &mut [&mut String]) -> DomainResult<()> {
    let mut rejected = Vec::new();
    for url in urls.iter_mut() {
        let trimmed = url.trim().to_owned();
        **url = trimmed;
        if !url.is_empty() && Url::parse(url.as_str()).is_err() {
            rejected.push(url.as_str().to_owned());
        }
    }

    if rejected.is_empty() {
        Ok(())
    } else {
        Err(DomainError::UnprocessableUrl(rejected))
    }
}

/// Underscores become spaces and every other non-word character is dropped.
pub fn normalize_search(value: &str) -> String {
    let spaced = value.replace('_', " ");
    collapse_whitespace(&NON_WORD.replace_all(&spaced, ""))
}
