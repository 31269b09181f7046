//! Project records built from front matter.
//!
//! A [`Project`] is what one card on the listing page shows. It is derived
//! from a file's [`FrontMatter`] plus its file name, with defaults for every
//! key the file leaves out:
//!
//! | Field | Source key | Default |
//! |-------|-----------|---------|
//! | `slug` | file name | file name with the first `.md` removed |
//! | `title` | `title` (non-empty string) | file name |
//! | `description` | `description` | `""` |
//! | `image` | `image` starting with `/` or `http` | `""` |
//! | `logo` | `logo` starting with `/` or `http` | `""` |
//! | `date` | `date` | `""` |
//! | `tags` | `tags` (list) | `[]` |
//! | `featured` | `featured` (boolean) | `false` |
//! | `links` | `links` (object) | `{ github: "" }` |
//!
//! A key holding the wrong kind of value (say `featured: yes`) is treated as
//! absent and logged at debug level.

pub mod date;

use serde::{Deserialize, Serialize};

use crate::constants::PROJECT_FILE_EXTENSION;
use crate::frontmatter::{FieldValue, FrontMatter};

/// External links shown in a card's footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    /// Repository URL; empty when the project has none.
    pub github: String,

    /// Live demo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

impl ProjectLinks {
    fn from_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let github = object.get("github").and_then(|v| v.as_str()).unwrap_or_default().to_string();
        let live = object
            .get("live")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            github,
            live,
        }
    }

    pub fn has_github(&self) -> bool {
        !self.github.is_empty()
    }
}

/// One entry of the projects listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub logo: String,
    pub date: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub links: ProjectLinks,
}

impl Project {
    /// Build a project from a file name and its extracted front matter.
    pub fn from_front_matter(file_name: &str, front_matter: &FrontMatter) -> Self {
        let field = |key: &'static str| Field {
            file_name,
            key,
            value: front_matter.get(key),
        };

        let title = field("title")
            .string()
            .filter(|s| !s.is_empty())
            .map_or_else(|| file_name.to_string(), str::to_string);

        Self {
            slug: slug_from_file_name(file_name),
            title,
            description: field("description").string().unwrap_or_default().to_string(),
            image: field("image").string().filter(|s| is_asset_url(s)).unwrap_or_default().to_string(),
            logo: field("logo").string().filter(|s| is_asset_url(s)).unwrap_or_default().to_string(),
            date: field("date").string().unwrap_or_default().to_string(),
            tags: field("tags").list().map(<[String]>::to_vec).unwrap_or_default(),
            featured: field("featured").boolean().unwrap_or(false),
            links: field("links").object().map(ProjectLinks::from_object).unwrap_or_default(),
        }
    }

    /// Date in display form, or `None` when it cannot be parsed.
    pub fn display_date(&self) -> Option<String> {
        date::format_display_date(&self.date)
    }
}

/// A front-matter lookup that logs when the value has the wrong kind.
struct Field<'a> {
    file_name: &'a str,
    key: &'static str,
    value: Option<&'a FieldValue>,
}

impl<'a> Field<'a> {
    fn pick<T>(&self, wanted: &str, select: impl Fn(&'a FieldValue) -> Option<T>) -> Option<T> {
        let value = self.value?;
        let picked = select(value);
        if picked.is_none() {
            tracing::debug!(
                "{}: ignoring '{}' ({} given, {} expected)",
                self.file_name,
                self.key,
                value.kind(),
                wanted
            );
        }
        picked
    }

    fn string(&self) -> Option<&'a str> {
        self.pick("string", FieldValue::as_str)
    }

    fn boolean(&self) -> Option<bool> {
        self.pick("boolean", FieldValue::as_bool)
    }

    fn list(&self) -> Option<&'a [String]> {
        self.pick("list", FieldValue::as_list)
    }

    fn object(&self) -> Option<&'a serde_json::Map<String, serde_json::Value>> {
        self.pick("object", FieldValue::as_object)
    }
}

/// Strip the first `.md` occurrence from a file name.
pub fn slug_from_file_name(file_name: &str) -> String {
    file_name.replacen(PROJECT_FILE_EXTENSION, "", 1)
}

/// Images and logos must be site-absolute or remote.
pub fn is_asset_url(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("http")
}
