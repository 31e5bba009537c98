//! Element color settings
//!
//! The server stores the palette as one string, `name=code*name=code*`. The
//! settings screen edits it as numbered rows.

use serde::{Deserialize, Serialize};

use crate::types::lenient_string;

const PAIR_TERMINATOR: char = '*';
const PAIR_SEPARATOR: char = '=';

/// Palette entry as returned by `/get-setting`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorElement {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub code: String,
}

/// `/get-setting` response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingData {
    pub color_elements: Vec<ColorElement>,
}

/// One row of the settings table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRow {
    /// 1-based position, contiguous across the list
    pub number: usize,
    pub name: String,
    pub code: String,
}

/// Numbered list of element colors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSettingList {
    rows: Vec<ColorRow>,
}

impl ColorSettingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: &[ColorElement]) -> Self {
        let mut list = Self::new();
        for element in elements {
            list.push(&element.name, &element.code);
        }
        list
    }

    /// Parse the stored `name=code*` string; malformed pairs are skipped
    pub fn parse_wire(wire: &str) -> Self {
        let mut list = Self::new();
        for pair in wire.split(PAIR_TERMINATOR) {
            if let Some((name, code)) = pair.split_once(PAIR_SEPARATOR) {
                if !name.is_empty() {
                    list.push(name, code);
                }
            }
        }
        list
    }

    pub fn rows(&self) -> &[ColorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn push(&mut self, name: &str, code: &str) {
        self.rows.push(ColorRow {
            number: self.rows.len() + 1,
            name: name.to_string(),
            code: code.to_string(),
        });
    }

    /// Append a row; both fields must be non-empty
    pub fn add(&mut self, name: &str, code: &str) -> bool {
        let (name, code) = (name.trim(), code.trim());
        if name.is_empty() || code.is_empty() {
            return false;
        }
        self.push(name, code);
        true
    }

    /// Remove the row with this number and renumber the rest
    pub fn delete(&mut self, number: usize) -> bool {
        let Some(index) = self.rows.iter().position(|r| r.number == number) else {
            return false;
        };
        self.rows.remove(index);
        for (i, row) in self.rows.iter_mut().enumerate().skip(index) {
            row.number = i + 1;
        }
        true
    }

    /// Serialized palette posted as `elements-color-value`
    pub fn to_wire(&self) -> String {
        let mut rows: Vec<&ColorRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.number);
        rows.iter()
            .map(|r| format!("{}{PAIR_SEPARATOR}{}{PAIR_TERMINATOR}", r.name, r.code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColorSettingList {
        let mut list = ColorSettingList::new();
        list.add("header", "#000000");
        list.add("footer", "#ffffff");
        list
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(sample().to_wire(), "header=#000000*footer=#ffffff*");
        assert_eq!(ColorSettingList::new().to_wire(), "");
    }

    #[test]
    fn test_add_requires_both_fields() {
        let mut list = sample();
        assert!(!list.add("", "#123456"));
        assert!(!list.add("side", "  "));
        assert_eq!(list.len(), 2);
        assert!(list.add("side", "#123456"));
        assert_eq!(list.rows()[2].number, 3);
    }

    #[test]
    fn test_delete_renumbers() {
        let mut list = sample();
        list.add("side", "#123456");
        assert!(list.delete(1));
        let numbers: Vec<usize> = list.rows().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(list.rows()[0].name, "footer");
        assert_eq!(list.to_wire(), "footer=#ffffff*side=#123456*");
    }

    #[test]
    fn test_delete_unknown_number() {
        let mut list = sample();
        assert!(!list.delete(9));
        assert_eq!(list, sample());
    }

    #[test]
    fn test_wire_roundtrip() {
        let wire = "header=#000000*footer=#333333*";
        assert_eq!(ColorSettingList::parse_wire(wire).to_wire(), wire);
    }

    #[test]
    fn test_parse_wire_skips_malformed() {
        let list = ColorSettingList::parse_wire("header=#000*junk*=#fff*");
        assert_eq!(list.len(), 1);
        assert_eq!(list.rows()[0].name, "header");
    }

    #[test]
    fn test_setting_data_deserializes() {
        let data: SettingData = serde_json::from_str(
            r##"{"colorElements":[{"name":"header","code":"#000000"}]}"##,
        )
        .unwrap();
        let list = ColorSettingList::from_elements(&data.color_elements);
        assert_eq!(list.to_wire(), "header=#000000*");
    }
}
