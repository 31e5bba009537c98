//! CMS record types as exchanged with the Skygarden API
//!
//! The server serializes every column as a string (and occasionally as `null`
//! or a bare number), so all scalar fields go through [`lenient_string`].

use serde::{Deserialize, Deserializer, Serialize};

/// Wire value for an enabled flag (`admin`, `published`, ...)
pub const FLAG_YES: &str = "1";
/// Wire value for a disabled flag
pub const FLAG_NO: &str = "0";

/// Accept strings, numbers, booleans and `null` where the API promises a string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Bool(b) => if b { FLAG_YES } else { FLAG_NO }.to_string(),
        other => other.to_string(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Content Mode
// ─────────────────────────────────────────────────────────────────────────────

/// Record type a list or editor screen operates on (the `mode` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Plain pages; sent as the empty string
    #[default]
    #[serde(rename = "")]
    Content,
    Template,
    Element,
    Stylesheet,
    Script,
    Image,
    File,
    Movie,
}

impl ContentMode {
    /// Every mode in navigation order
    pub const ALL: [ContentMode; 8] = [
        ContentMode::Content,
        ContentMode::Template,
        ContentMode::Element,
        ContentMode::Stylesheet,
        ContentMode::Script,
        ContentMode::Image,
        ContentMode::File,
        ContentMode::Movie,
    ];

    /// Value used for the `mode` query parameter and the `type` form field
    pub fn as_query(&self) -> &'static str {
        match self {
            ContentMode::Content => "",
            ContentMode::Template => "template",
            ContentMode::Element => "element",
            ContentMode::Stylesheet => "stylesheet",
            ContentMode::Script => "script",
            ContentMode::Image => "image",
            ContentMode::File => "file",
            ContentMode::Movie => "movie",
        }
    }

    /// Parse a `mode` query value; unknown values fall back to `None`
    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_query() == value.trim())
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            ContentMode::Content => "Content",
            ContentMode::Template => "Template",
            ContentMode::Element => "Element",
            ContentMode::Stylesheet => "CSS",
            ContentMode::Script => "JS",
            ContentMode::Image => "Image",
            ContentMode::File => "File",
            ContentMode::Movie => "Movie",
        }
    }

    /// Whether records of this mode carry a publish schedule and template
    pub fn has_schedule(&self) -> bool {
        matches!(self, ContentMode::Content)
    }

    /// Whether the body is composed from an element list instead of free text
    pub fn is_composed(&self) -> bool {
        matches!(self, ContentMode::Template)
    }

    /// Whether the record is addressable by URL (templates are not)
    pub fn has_url(&self) -> bool {
        !self.is_composed()
    }

    /// Whether the record has a `head` markup field
    pub fn has_head(&self) -> bool {
        matches!(self, ContentMode::Content | ContentMode::Template)
    }

    /// Next mode in navigation order (wraps)
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous mode in navigation order (wraps)
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ContentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// One content/template/element row as returned by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub created: String,
    #[serde(deserialize_with = "lenient_string")]
    pub updated: String,
    #[serde(deserialize_with = "lenient_string")]
    pub created_by: String,
    #[serde(deserialize_with = "lenient_string")]
    pub updated_by: String,
    #[serde(deserialize_with = "lenient_string")]
    pub schedule_published: String,
    #[serde(deserialize_with = "lenient_string")]
    pub schedule_unpublished: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(deserialize_with = "lenient_string")]
    pub head: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub elementcolor: String,
    #[serde(deserialize_with = "lenient_string")]
    pub template: String,
}

/// One entry of a template's composition as returned by `/getcontent`
///
/// The content sentinel arrives as `{"content": "1"}`; element references carry
/// `id`, `title` and `code` (the element color).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EleResult {
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub code: String,
}

impl EleResult {
    /// Whether this entry is the record's own body placeholder
    pub fn is_content(&self) -> bool {
        self.content == FLAG_YES || self.id.is_empty() || self.id == crate::CONTENT_ID
    }
}

/// Single record plus editor support data, as returned by `/getcontent`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentDetail {
    #[serde(rename = "screenName", deserialize_with = "lenient_string")]
    pub screen_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub schedule_published: String,
    #[serde(deserialize_with = "lenient_string")]
    pub schedule_unpublished: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub head: String,
    #[serde(deserialize_with = "lenient_string")]
    pub template: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub elementcolor: String,
    /// `<option>` markup listing templates (content mode)
    #[serde(rename = "templateOutput", deserialize_with = "lenient_string")]
    pub template_output: String,
    /// `<option>` markup listing element colors (element mode)
    #[serde(rename = "colorOutput", deserialize_with = "lenient_string")]
    pub color_output: String,
    #[serde(rename = "eleResults")]
    pub ele_results: Vec<EleResult>,
    #[serde(rename = "publishflgKeep", deserialize_with = "lenient_string")]
    pub publish_flag_keep: String,
}

impl ContentDetail {
    pub fn is_published(&self) -> bool {
        self.publish_flag_keep == FLAG_YES
    }
}

/// User account as returned by `/getuser` and `/getlist-user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub password: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub admin: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.admin == FLAG_YES
    }
}

/// Catalog of reusable elements offered by the element selection modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ElementCatalog {
    pub results: Vec<ContentRecord>,
}

// ─────────────────────────────────────────────────────────────────────────────
// List pages
// ─────────────────────────────────────────────────────────────────────────────

/// One page of a list screen
///
/// `sort_output` and `pager_output` are server-rendered markup; see
/// [`crate::markup`] for how the TUI turns them into choices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListPage<T> {
    #[serde(deserialize_with = "lenient_string")]
    pub login_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub screen_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub register_message: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sort_output: String,
    #[serde(deserialize_with = "lenient_string")]
    pub pager_output: String,
    pub results: Vec<T>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            login_name: String::new(),
            screen_name: String::new(),
            register_message: String::new(),
            sort_output: String::new(),
            pager_output: String::new(),
            results: Vec::new(),
        }
    }
}

/// Query for `/getlist`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub mode: ContentMode,
    /// Server sort key, e.g. `updated` or `title desc`; empty = server default
    pub sort: String,
    /// 1-based page number
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(ContentMode::Content)
    }
}

impl ListQuery {
    pub fn new(mode: ContentMode) -> Self {
        Self {
            mode,
            sort: String::new(),
            page: 1,
        }
    }

    /// Same mode and page with a different sort
    pub fn with_sort(&self, sort: impl Into<String>) -> Self {
        Self {
            sort: sort.into(),
            ..self.clone()
        }
    }

    /// Same mode and sort on another page
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("mode", self.mode.as_query().to_string()),
            ("sort", self.sort.clone()),
            ("page", self.page.to_string()),
        ]
    }
}

/// Query for `/getlist-user`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    pub sort: String,
    pub page: u32,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            sort: String::new(),
            page: 1,
        }
    }
}

impl UserListQuery {
    pub fn with_sort(&self, sort: impl Into<String>) -> Self {
        Self {
            sort: sort.into(),
            page: self.page,
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            sort: self.sort.clone(),
            page: page.max(1),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("sort", self.sort.clone()), ("page", self.page.to_string())]
    }
}
