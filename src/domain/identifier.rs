// src/domain/identifier.rs
use crate::domain::errors::{DomainError, DomainResult};
use uuid::Uuid;

/// Rewrite `raw` in place to the canonical hyphenated lowercase UUID form.
///
/// Braced (`{...}`), `urn:uuid:` and hyphenless inputs are accepted. On failure
/// `raw` is cleared so a caller cannot keep using the rejected value.
pub fn normalize_id(raw: &mut String) -> DomainResult<()> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => {
            *raw = id.hyphenated().to_string();
            Ok(())
        }
        Err(_) => {
            let rejected = std::mem::take(raw);
            Err(DomainError::InvalidIdentifier(format!(
                "'{}' is not a valid uuid",
                rejected.trim()
            )))
        }
    }
}

/// Validate and parse an identifier received from a caller.
pub fn parse_uuid(raw: &str) -> DomainResult<Uuid> {
    let mut value = raw.to_owned();
    normalize_id(&mut value)?;
    Uuid::parse_str(&value).map_err(|err| DomainError::InvalidIdentifier(err.to_string()))
}
