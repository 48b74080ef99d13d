//! Identifier extraction from a loosely structured payload.
//!
//! Order of attempts: strict JSON list, repaired JSON list (missing `]`,
//! trailing `,` before `]`), then a scan for every signed integer in the text.
//! Zero and values that do not fit `i64` are dropped. Never fails.

use crate::domain::ChatId;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static TRAILING_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*]").expect("valid trailing separator regex"));

static SIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("valid signed integer regex"));

/// Which strategy produced the identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMethod {
    /// Payload was a valid JSON list as-is.
    Strict,
    /// Payload became a valid JSON list after repair.
    Repaired,
    /// Integers were scanned out of free text.
    Scanned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub ids: Vec<ChatId>,
    pub method: ExtractMethod,
}

/// Extract chat identifiers, preserving order of appearance. Duplicates are kept.
pub fn extract(raw: &str) -> Vec<ChatId> {
    extract_detailed(raw).ids
}

/// Same as [`extract`], but also reports the strategy that succeeded.
pub fn extract_detailed(raw: &str) -> Extraction {
    let content = raw.trim();

    if let Some(ids) = parse_list(content) {
        return Extraction {
            ids,
            method: ExtractMethod::Strict,
        };
    }

    let repaired = repair(content);
    if repaired != content {
        if let Some(ids) = parse_list(&repaired) {
            return Extraction {
                ids,
                method: ExtractMethod::Repaired,
            };
        }
    }

    Extraction {
        ids: scan(&repaired),
        method: ExtractMethod::Scanned,
    }
}

/// `Some` only for a non-empty JSON array. Its elements are filtered to non-zero `i64`s,
/// which may leave the result empty; an empty or non-array document returns `None`.
fn parse_list(content: &str) -> Option<Vec<ChatId>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(items)) if !items.is_empty() => Some(
            items
                .iter()
                .filter_map(Value::as_i64)
                .filter(|&id| id != 0)
                .collect(),
        ),
        _ => None,
    }
}

fn repair(content: &str) -> String {
    let mut fixed = content.to_string();
    if fixed.starts_with('[') && !fixed.ends_with(']') {
        fixed.push(']');
    }
    TRAILING_SEPARATOR.replace_all(&fixed, "]").into_owned()
}

fn scan(content: &str) -> Vec<ChatId> {
    SIGNED_INTEGER
        .find_iter(content)
        .filter_map(|m| m.as_str().parse::<i64>().ok())
        .filter(|&id| id != 0)
        .collect()
}
