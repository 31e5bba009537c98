//! Extraction of choices from server-rendered HTML fragments
//!
//! List and editor responses embed `<option>` lists (sort keys, templates,
//! colors) and pager links. The server remains the single source of these
//! choices; this module only reads them into plain values the terminal can show.

use std::sync::LazyLock;

use regex::Regex;

static OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<option\b([^>]*)>(.*?)</option>").expect("Invalid OPTION_RE")
});

static VALUE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bvalue\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid VALUE_ATTR_RE")
});

static SELECTED_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)selected\b").expect("Invalid SELECTED_ATTR_RE"));

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*\bhref\s*=\s*"([^"]*)"[^>]*>(.*?)</a>"#).expect("Invalid LINK_RE")
});

static PAGE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]page=(\d+)").expect("Invalid PAGE_PARAM_RE"));

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid TAG_RE"));

/// One `<option>` of a server-rendered select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One navigable link of a server-rendered pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerLink {
    pub page: u32,
    /// Visible text: a page number or a step arrow
    pub label: String,
}

/// Read every `<option>` in a fragment, in document order
pub fn parse_options(markup: &str) -> Vec<SelectOption> {
    OPTION_RE
        .captures_iter(markup)
        .map(|caps| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            let value = VALUE_ATTR_RE
                .captures(attrs)
                .and_then(|v| v.get(1).or_else(|| v.get(2)))
                .map(|m| decode_entities(m.as_str()));
            let label = strip_tags(caps.get(2).map_or("", |m| m.as_str()));
            SelectOption {
                // a missing value attribute submits the label
                value: value.unwrap_or_else(|| label.clone()),
                label,
                selected: SELECTED_ATTR_RE.is_match(attrs),
            }
        })
        .collect()
}

/// Read the pager's links; entries without a `page=` parameter are ignored
pub fn parse_pager(markup: &str) -> Vec<PagerLink> {
    LINK_RE
        .captures_iter(markup)
        .filter_map(|caps| {
            let href = decode_entities(caps.get(1)?.as_str());
            let page = PAGE_PARAM_RE
                .captures(&href)?
                .get(1)?
                .as_str()
                .parse()
                .ok()?;
            Some(PagerLink {
                page,
                label: strip_tags(caps.get(2).map_or("", |m| m.as_str())),
            })
        })
        .collect()
}

/// Plain text of a fragment with tags removed and common entities decoded
pub fn strip_tags(markup: &str) -> String {
    decode_entities(&TAG_RE.replace_all(markup, ""))
        .trim()
        .to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&laquo;", "\u{ab}")
        .replace("&raquo;", "\u{bb}")
        .replace("&amp;", "&")
}
