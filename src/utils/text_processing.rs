//! Text processing utilities.
//!
//! This module contains utilities for processing and transforming text, such as
//! building collation keys for Spanish names, truncating user input and
//! formatting creation dates for display.

use chrono::{DateTime, Local};
use log::*;

/// Build a key that orders strings the way a Spanish reader expects: case and
/// accents are ignored and `ñ` sorts after `n`.
///
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'á' | 'à' | 'ä' | 'â' => key.push('a'),
            'é' | 'è' | 'ë' | 'ê' => key.push('e'),
            'í' | 'ì' | 'ï' | 'î' => key.push('i'),
            'ó' | 'ò' | 'ö' | 'ô' => key.push('o'),
            'ú' | 'ù' | 'ü' | 'û' => key.push('u'),
            'ç' => key.push('c'),
            'ñ' => {
                key.push('n');
                key.push('~');
            }
            other => key.push(other),
        }
    }
    key
}

/// Keep at most `max` characters of `text`.
///
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Shorten `text` to `max` characters for display, marking the cut with "...".
///
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        format!("{}...", truncate_chars(text, max.saturating_sub(3)))
    }
}

/// Format an ISO 8601 creation timestamp as `dd/mm/yyyy` in local time, the
/// `es-ES` short date convention. Unparseable input is returned unchanged.
///
pub fn format_creation_date(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(date) => date.with_timezone(&Local).format("%d/%m/%Y").to_string(),
        Err(e) => {
            debug!("Failed to parse creation date '{}': {}", created_at, e);
            created_at.to_string()
        }
    }
}
