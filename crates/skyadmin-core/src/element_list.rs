//! Ordered element composition of a template
//!
//! A template's body is a list of references to reusable elements plus one
//! sentinel entry standing for the record's own content. The list is edited
//! locally and sent to the server as a comma-joined token string.

use crate::types::{ContentRecord, EleResult};

/// Id of the sentinel entry representing the record's own body
pub const CONTENT_ID: &str = "content";

const CONTENT_TOKEN: &str = "###content###";
const ELEMENT_PREFIX: &str = "###element(";
const ELEMENT_SUFFIX: &str = ")###";

/// One entry of the composition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRef {
    /// Element id, [`CONTENT_ID`] for the sentinel, empty for a placeholder
    pub id: String,
    pub title: String,
    /// Element color code, e.g. `#000000`
    pub color_code: String,
}

impl ElementRef {
    pub fn content() -> Self {
        Self {
            id: CONTENT_ID.to_string(),
            title: "Content".to_string(),
            color_code: String::new(),
        }
    }

    pub fn element(
        id: impl Into<String>,
        title: impl Into<String>,
        color_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color_code: color_code.into(),
        }
    }

    /// Reference to a catalog entry
    pub fn from_record(record: &ContentRecord) -> Self {
        Self::element(&record.id, &record.title, &record.elementcolor)
    }

    pub fn is_content(&self) -> bool {
        self.id == CONTENT_ID
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }

    /// Wire token, `None` for an unresolved placeholder
    pub fn token(&self) -> Option<String> {
        if self.is_placeholder() {
            None
        } else if self.is_content() {
            Some(CONTENT_TOKEN.to_string())
        } else {
            Some(format!("{ELEMENT_PREFIX}{}{ELEMENT_SUFFIX}", self.id))
        }
    }
}

impl From<&EleResult> for ElementRef {
    fn from(result: &EleResult) -> Self {
        if result.is_content() {
            Self::content()
        } else {
            Self::element(&result.id, &result.title, &result.code)
        }
    }
}

/// Editable, ordered element composition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementList {
    items: Vec<ElementRef>,
    /// Index of the placeholder awaiting a selection
    pending: Option<usize>,
}

impl ElementList {
    pub fn new(items: Vec<ElementRef>) -> Self {
        Self {
            items,
            pending: None,
        }
    }

    /// Composition of a new template: just the body
    pub fn with_content() -> Self {
        Self::new(vec![ElementRef::content()])
    }

    /// Build from the `eleResults` array of a loaded record
    pub fn from_detail(results: &[EleResult]) -> Self {
        Self::new(results.iter().map(ElementRef::from).collect())
    }

    /// Parse a composition string (ids only; titles are unknown)
    pub fn parse_wire(wire: &str) -> Self {
        let items = wire
            .split(',')
            .map(str::trim)
            .filter_map(|token| {
                if token == CONTENT_TOKEN {
                    Some(ElementRef::content())
                } else {
                    token
                        .strip_prefix(ELEMENT_PREFIX)
                        .and_then(|rest| rest.strip_suffix(ELEMENT_SUFFIX))
                        .filter(|id| !id.is_empty())
                        .map(|id| ElementRef::element(id, "", ""))
                }
            })
            .collect();
        Self::new(items)
    }

    pub fn items(&self) -> &[ElementRef] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ElementRef> {
        self.items.get(index)
    }

    /// Index of the placeholder awaiting a selection, if any
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Append a placeholder and mark it as the pending add
    ///
    /// An earlier unresolved placeholder is dropped first so at most one exists.
    pub fn add_placeholder(&mut self) -> usize {
        self.cancel_add();
        self.items.push(ElementRef::default());
        let index = self.items.len() - 1;
        self.pending = Some(index);
        index
    }

    /// Resolve the pending placeholder with the chosen element
    pub fn select(&mut self, element: ElementRef) -> bool {
        match self.pending.take() {
            Some(index) => match self.items.get_mut(index) {
                Some(slot) => {
                    *slot = element;
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Remove the pending placeholder, if any
    pub fn cancel_add(&mut self) {
        if let Some(index) = self.pending.take() {
            if self.items.get(index).is_some_and(ElementRef::is_placeholder) {
                self.items.remove(index);
            }
        }
    }

    /// Swap with the previous entry; false when `index` is 0 or out of range
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.items.len() {
            return false;
        }
        self.swap(index - 1, index);
        true
    }

    /// Swap with the next entry; false when `index` is the last or out of range
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.items.len() {
            return false;
        }
        self.swap(index, index + 1);
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.pending = self.pending.map(|p| match p {
            p if p == a => b,
            p if p == b => a,
            p => p,
        });
    }

    /// Remove an entry; the content sentinel cannot be removed
    pub fn delete(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) if !item.is_content() => {
                self.items.remove(index);
                self.pending = match self.pending {
                    Some(p) if p == index => None,
                    Some(p) if p > index => Some(p - 1),
                    other => other,
                };
                true
            }
            _ => false,
        }
    }

    /// Composition string submitted as a template's `content`
    pub fn to_wire(&self) -> String {
        self.items
            .iter()
            .filter_map(ElementRef::token)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ElementList {
        ElementList::new(vec![
            ElementRef::content(),
            ElementRef::element("5", "Header", "#000000"),
            ElementRef::element("9", "Footer", "#ffffff"),
        ])
    }

    fn ids(list: &ElementList) -> Vec<&str> {
        list.items().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(
            sample().to_wire(),
            "###content###,###element(5)###,###element(9)###"
        );
    }

    #[test]
    fn test_to_wire_skips_placeholder() {
        let mut list = sample();
        list.add_placeholder();
        assert_eq!(
            list.to_wire(),
            "###content###,###element(5)###,###element(9)###"
        );
    }

    #[test]
    fn test_parse_wire() {
        let list = ElementList::parse_wire("###content###,###element(5)###,###element(9)###");
        assert_eq!(ids(&list), vec!["content", "5", "9"]);
        assert_eq!(ElementList::parse_wire("").len(), 0);
    }

    #[test]
    fn test_delete_content_is_noop() {
        let mut list = sample();
        assert!(!list.delete(0));
        assert_eq!(list, sample());
    }

    #[test]
    fn test_delete_element() {
        let mut list = sample();
        assert!(list.delete(1));
        assert_eq!(ids(&list), vec!["content", "9"]);
        assert!(!list.delete(7));
    }

    #[test]
    fn test_add_then_cancel_restores() {
        let mut list = sample();
        let index = list.add_placeholder();
        assert_eq!(index, 3);
        assert_eq!(list.len(), 4);
        list.cancel_add();
        assert_eq!(list, sample());
    }

    #[test]
    fn test_add_then_select() {
        let mut list = sample();
        list.add_placeholder();
        assert!(list.select(ElementRef::element("12", "Banner", "#ff0000")));
        assert_eq!(ids(&list), vec!["content", "5", "9", "12"]);
        assert_eq!(list.pending(), None);
        // nothing pending any more
        assert!(!list.select(ElementRef::element("13", "", "")));
    }

    #[test]
    fn test_second_add_replaces_placeholder() {
        let mut list = sample();
        list.add_placeholder();
        list.add_placeholder();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_move_boundaries_rejected() {
        let mut list = sample();
        assert!(!list.move_up(0));
        assert!(!list.move_down(2));
        assert!(!list.move_up(3));
        assert!(!list.move_down(3));
        assert_eq!(list, sample());
    }

    #[test]
    fn test_move_swaps_neighbours() {
        let mut list = sample();
        assert!(list.move_up(1));
        assert_eq!(ids(&list), vec!["5", "content", "9"]);
        assert!(list.move_down(1));
        assert_eq!(ids(&list), vec!["5", "9", "content"]);
    }

    #[test]
    fn test_pending_follows_moves() {
        let mut list = sample();
        list.add_placeholder();
        list.move_up(3);
        assert_eq!(list.pending(), Some(2));
        list.select(ElementRef::element("12", "Banner", ""));
        assert_eq!(ids(&list), vec!["content", "5", "12", "9"]);
    }

    #[test]
    fn test_from_detail() {
        let results = vec![
            EleResult {
                id: "5".into(),
                title: "Header".into(),
                code: "#000000".into(),
                ..Default::default()
            },
            EleResult {
                content: "1".into(),
                ..Default::default()
            },
        ];
        let list = ElementList::from_detail(&results);
        assert_eq!(ids(&list), vec!["5", "content"]);
        assert_eq!(list.items()[0].color_code, "#000000");
    }
}
