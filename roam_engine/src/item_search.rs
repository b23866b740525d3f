//! Item Search Module
//!
//! Matches what the player typed against the item names in scope. Pickups
//! search the current room by case-insensitive prefix; drops search the
//! inventory by case-insensitive full name.
//!
//! Callers get back either the stored name of the single match, or the reason
//! there isn't one (`SearchError`). An ambiguous prefix carries its candidates
//! so the caller can ask the player to choose.

use thiserror::Error;

use crate::{ItemHolder, item::same_item};

/// Possible errors / situations causing a failed item search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no item in scope matching '{0}'")]
    NoMatch(String),
    #[error("'{phrase}' matches several items: {candidates:?}")]
    Ambiguous { phrase: String, candidates: Vec<String> },
}

/// Names in `names` starting with `phrase` (case-insensitive), without repeats, in holder order.
pub fn prefix_matches(names: &[String], phrase: &str) -> Vec<String> {
    let lc_phrase = phrase.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for name in names {
        if name.to_lowercase().starts_with(&lc_phrase) && !found.contains(name) {
            found.push(name.clone());
        }
    }
    found
}

/// Find the single item in `holder` whose name starts with `phrase`.
///
/// An exact name does not win over longer names sharing it as a prefix:
/// "key" against "key" and "keycard" is ambiguous.
pub fn find_by_prefix(holder: &impl ItemHolder, phrase: &str) -> Result<String, SearchError> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return Err(SearchError::NoMatch(String::new()));
    }
    let mut candidates = prefix_matches(&holder.item_names(), phrase);
    match candidates.len() {
        0 => Err(SearchError::NoMatch(phrase.to_string())),
        1 => Ok(candidates.remove(0)),
        _ => Err(SearchError::Ambiguous {
            phrase: phrase.to_string(),
            candidates,
        }),
    }
}

/// Find the item in `holder` whose full name is `name` (case-insensitive).
pub fn find_exact(holder: &impl ItemHolder, name: &str) -> Result<String, SearchError> {
    let name = name.trim();
    holder
        .item_names()
        .into_iter()
        .find(|held| same_item(held, name))
        .ok_or_else(|| SearchError::NoMatch(name.to_string()))
}

/// Resolve a disambiguation answer: it must be one of `candidates`, spelled in full.
///
/// Candidates differing only in case are told apart by an exact spelling;
/// otherwise case is ignored.
pub fn resolve_choice(candidates: &[String], answer: &str) -> Option<String> {
    let answer = answer.trim();
    candidates
        .iter()
        .find(|candidate| candidate.as_str() == answer)
        .or_else(|| candidates.iter().find(|candidate| same_item(candidate, answer)))
        .cloned()
}
