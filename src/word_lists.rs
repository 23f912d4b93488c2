use chrono::{DateTime, Utc};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static LISTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lists");

pub const DEFAULT_LIST_ID: &str = "ce1_officielle";

/// Display order of the bundled lists.
const BUILTIN_IDS: &[&str] = &["ce1_officielle", "fin_cp", "mi_cp"];

pub const MIN_WORDS: usize = 1;
pub const MAX_WORDS: usize = 200;
pub const MAX_WORD_LENGTH: usize = 50;
const FORBIDDEN_CHARS: &[char] = &['<', '>', '{', '}', '[', ']', '|', '\\', '`', '~'];
const SEPARATORS: &[char] = &['\n', ',', ';'];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: String,
    /// Tempo the list was designed for. Informational only; sessions are
    /// always scored against the configured tempo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tempo: Option<f64>,
    pub words: Vec<String>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl WordList {
    /// Build a user list from free text, validating it the same way on every path.
    pub fn custom(name: &str, text: &str, created: DateTime<Utc>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidWordList("list name is required".into()));
        }
        let words = parse_words(text)?;

        Ok(Self {
            id: format!("custom_{}", created.timestamp_millis()),
            name: name.to_string(),
            description: format!("custom list ({} words)", words.len()),
            level: "custom".to_string(),
            target_tempo: None,
            words,
            is_custom: true,
            created: Some(created),
        })
    }
}

/// Split on newlines, commas and semicolons, trimming and dropping blanks.
pub fn parse_words(text: &str) -> Result<Vec<String>> {
    let words: Vec<String> = text
        .split(SEPARATORS)
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    if words.len() < MIN_WORDS {
        return Err(Error::EmptyWordList);
    }
    if words.len() > MAX_WORDS {
        return Err(Error::InvalidWordList(format!(
            "at most {MAX_WORDS} words allowed, got {}",
            words.len()
        )));
    }
    if let Some(long) = words.iter().find(|w| w.chars().count() > MAX_WORD_LENGTH) {
        return Err(Error::InvalidWordList(format!(
            "word longer than {MAX_WORD_LENGTH} characters: {long}"
        )));
    }
    if let Some(bad) = words.iter().find(|w| w.contains(FORBIDDEN_CHARS)) {
        return Err(Error::InvalidWordList(format!("forbidden character in: {bad}")));
    }

    Ok(words)
}

fn read_builtin(id: &str) -> Result<WordList> {
    let file = LISTS_DIR
        .get_file(format!("{id}.json"))
        .ok_or_else(|| Error::UnknownList(id.to_string()))?;
    let contents = file
        .contents_utf8()
        .ok_or_else(|| Error::InvalidWordList(format!("{id}.json is not utf-8")))?;

    Ok(serde_json::from_str(contents)?)
}

pub fn builtin_lists() -> Vec<WordList> {
    BUILTIN_IDS
        .iter()
        .filter_map(|id| match read_builtin(id) {
            Ok(list) => Some(list),
            Err(err) => {
                tracing::warn!(%err, id, "skipping bundled word list");
                None
            }
        })
        .collect()
}

/// Find a list by id, bundled lists first, then `custom`.
pub fn resolve(id: &str, custom: &[WordList]) -> Result<WordList> {
    if BUILTIN_IDS.contains(&id) {
        return read_builtin(id);
    }
    custom
        .iter()
        .find(|list| list.id == id)
        .cloned()
        .ok_or_else(|| Error::UnknownList(id.to_string()))
}
