use std::fmt;

use crate::types::{EntityKind, EntityRef};

#[derive(Debug)]
pub enum ResolveError {
    NoId(String),
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoId(input) => {
                write!(f, "Invalid input. Could not extract an id from \"{input}\".")
            }
            ResolveError::KindMismatch { expected, found } => write!(
                f,
                "Invalid input. Expected a {expected} id or URL but the input looks like a {found}."
            ),
        }
    }
}

/// Extracts the numeric id from a Deezer URL or accepts raw numeric ids.
///
/// An entirely-numeric input is returned verbatim; otherwise the trailing
/// `/<digits>` path segment of a URL-like input is extracted. Returns `None`
/// when neither applies.
pub fn extract_id(input: &str) -> Option<String> {
    let input = input.trim();
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return Some(input.to_string());
    }

    let (_, tail) = input.rsplit_once('/')?;
    if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
        Some(tail.to_string())
    } else {
        None
    }
}

/// Classifies the entity kind from keywords in the input.
///
/// Scans for the substrings `album`, `playlist` and `profile`/`user`,
/// case-sensitive, first match wins in that fixed priority order. There is
/// deliberately no numeric-only fallback: a bare id carries no kind and
/// classifies to `None` — the caller has to state the kind explicitly.
pub fn classify_kind(input: &str) -> Option<EntityKind> {
    if input.contains("album") {
        Some(EntityKind::Album)
    } else if input.contains("playlist") {
        Some(EntityKind::Playlist)
    } else if input.contains("profile") || input.contains("user") {
        Some(EntityKind::User)
    } else {
        None
    }
}

/// Resolves free-form input into an [`EntityRef`] of the expected kind.
///
/// The kind is stated by the caller (the CLI subcommand). Raw numeric ids
/// are accepted as-is; URL input must yield a trailing numeric id and must
/// not classify to a different kind than expected.
pub fn resolve(input: &str, expected: EntityKind) -> Result<EntityRef, ResolveError> {
    let input = input.trim();
    let id = extract_id(input).ok_or_else(|| ResolveError::NoId(input.to_string()))?;

    if let Some(found) = classify_kind(input) {
        if found != expected {
            return Err(ResolveError::KindMismatch { expected, found });
        }
    }

    Ok(EntityRef { kind: expected, id })
}

/// Maps filesystem-unsafe characters in a playlist title to `_` so the
/// title can be used as a file name. Falls back to `"playlist"` for titles
/// that sanitize to nothing.
pub fn sanitize_filename(name: &str) -> String {
    const UNSAFE: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if UNSAFE.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if cleaned.is_empty() {
        "playlist".to_string()
    } else {
        cleaned
    }
}
