//! Front-matter extraction for project metadata files.
//!
//! Project files start with a small header block of `key: value` lines
//! fenced by `---` delimiter lines. This module locates that block and turns
//! it into a flat [`FrontMatter`] mapping whose values are coerced from their
//! surface syntax into a [`FieldValue`].
//!
//! # Format
//!
//! ```text
//! ---
//! title: Sample Project
//! tags: [rust, cli]
//! featured: true
//! links: {"github": "https://github.com/example/sample"}
//! time: 10:30:00
//! ---
//! Anything after the closing delimiter is body text.
//! ```
//!
//! # Coercion Rules
//!
//! Values are trimmed and then coerced in priority order:
//!
//! | Surface syntax | Result |
//! |----------------|--------|
//! | `[a, b, c]` | [`FieldValue::List`], split on commas, each piece trimmed |
//! | `true` / `false` | [`FieldValue::Bool`] |
//! | `{ ... }` | [`FieldValue::Object`], parsed as a JSON object |
//! | anything else | [`FieldValue::String`] |
//!
//! Numbers are never coerced. List items cannot contain escaped commas or
//! brackets, and `[]` yields a single empty item.
//!
//! # Error Policy
//!
//! Extraction is best effort. A missing block, lines without a colon and
//! empty lines are silently dropped. The only failure is a `{ ... }` value
//! that is not valid JSON, reported as [`FrontMatterError::MalformedObject`].
//!
//! # Example
//!
//! ```rust
//! use portfolio_cli::frontmatter::{FieldValue, extract};
//!
//! let fm = extract("---\ntitle: Hello\ntags: [a, b]\n---\nbody").unwrap();
//! assert_eq!(fm.get_str("title"), Some("Hello"));
//! assert_eq!(
//!     fm.get("tags"),
//!     Some(&FieldValue::List(vec!["a".to_string(), "b".to_string()]))
//! );
//! ```

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;


/// Delimiter line that opens and closes a front-matter block.
pub const DELIMITER: &str = "---";

/// Leading delimiter (trailing whitespace allowed), lazily captured block, then
/// a newline followed by the closing delimiter.
static BLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---").unwrap());

/// Errors raised while extracting front matter.
#[derive(Error, Debug)]
pub enum FrontMatterError {
    /// A value wrapped in curly braces could not be parsed as a JSON object.
    #[error("Malformed object value for key '{key}': {source}")]
    MalformedObject {
        /// The key whose value failed to parse
        key: String,
        /// The underlying JSON parse error
        #[source]
        source: serde_json::Error,
    },
}

/// A front-matter value after coercion.
///
/// Serializes untagged, so a [`FrontMatter`] renders as a plain JSON or YAML
/// mapping of strings, booleans, arrays and objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Raw trimmed text, including anything that looks numeric.
    String(String),
    /// Exactly `true` or `false`.
    Bool(bool),
    /// A bracketed, comma separated list.
    List(Vec<String>),
    /// A brace wrapped JSON object.
    Object(serde_json::Map<String, serde_json::Value>),
}

impl FieldValue {
    /// Returns the string payload, if this is a [`FieldValue::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a [`FieldValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the list payload, if this is a [`FieldValue::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object payload, if this is a [`FieldValue::Object`].
    pub fn as_object(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Coerce a trimmed raw value according to the module's rules.
    fn coerce(key: &str, value: &str) -> Result<Self, FrontMatterError> {
        if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
            return Ok(Self::List(inner.split(',').map(|item| item.trim().to_string()).collect()));
        }

        match value {
            "true" => return Ok(Self::Bool(true)),
            "false" => return Ok(Self::Bool(false)),
            _ => {}
        }

        if value.starts_with('{') && value.ends_with('}') {
            let map = serde_json::from_str(value).map_err(|source| {
                FrontMatterError::MalformedObject {
                    key: key.to_string(),
                    source,
                }
            })?;
            return Ok(Self::Object(map));
        }

        Ok(Self::String(value.to_string()))
    }
}

/// The coerced fields of one document's front-matter block.
///
/// Keys are kept in sorted order. When a key appears more than once in the
/// block, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: BTreeMap<String, FieldValue>,
}

impl FrontMatter {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(key.into(), value)
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Look up a string field. Returns `None` if absent or of another kind.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_str)
    }

    /// Look up a boolean field. Returns `None` if absent or of another kind.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_bool)
    }

    /// Look up a list field. Returns `None` if absent or of another kind.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(FieldValue::as_list)
    }

    /// Look up an object field. Returns `None` if absent or of another kind.
    pub fn get_object(&self, key: &str) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.get(key).and_then(FieldValue::as_object)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a document into its raw front-matter block and the body that follows.
///
/// Returns `(None, text)` when the document does not start with a block.
/// The body excludes the closing delimiter and the rest of its line.
pub fn split(text: &str) -> (Option<&str>, &str) {
    let Some(captures) = BLOCK_PATTERN.captures(text) else {
        return (None, text);
    };

    let block = captures.get(1).map_or("", |m| m.as_str());
    let end = captures.get(0).map_or(0, |m| m.end());
    let rest = &text[end..];
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => "",
    };

    (Some(block), body)
}

/// Extract and coerce the front-matter fields of a document.
///
/// A document without a leading block yields an empty mapping. Lines without
/// a colon, and lines with an empty key, produce no field. A whitespace-only
/// key such as `"  : v"` is treated as empty and skipped too, rather than
/// stored under `""`. Only the first
/// colon separates key from value, so `time: 10:30:00` maps `time` to
/// `"10:30:00"`.
///
/// # Errors
///
/// Returns [`FrontMatterError::MalformedObject`] when a `{ ... }` value is
/// not a valid JSON object.
pub fn extract(text: &str) -> Result<FrontMatter, FrontMatterError> {
    let mut front_matter = FrontMatter::new();

    let (Some(block), _) = split(text) else {
        return Ok(front_matter);
    };

    for line in block.split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = FieldValue::coerce(key, value.trim())?;
        front_matter.insert(key, value);
    }

    Ok(front_matter)
}
