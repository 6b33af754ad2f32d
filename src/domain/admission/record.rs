//! Roster rows and cell rendering.

use serde::{Deserialize, Serialize};

/// 权利列的哨兵值，只有完全等于它才算"有"
pub const ACCESS_GRANTED: &str = "有";

/// Trims surrounding whitespace and byte-order marks.
///
/// `str::trim` keeps U+FEFF, which spreadsheet exports and pasted input
/// often carry in front of an ID.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// 名单的列顺序是固定的
pub mod columns {
    pub const IDENTIFIER: usize = 0;
    pub const NAME: usize = 1;
    pub const REWARD: usize = 2;
    pub const ENTRY_ACCESS: usize = 3;
    pub const REHEARSAL_ACCESS: usize = 4;
    pub const NOTE: usize = 5;

    pub const COUNT: usize = 6;
}

/// A single loosely typed sheet cell.
///
/// Spreadsheet exports mix text, numbers and booleans in one column, so an ID
/// column may well contain `12345` as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Bool(bool),
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Renders the cell the way the sheet displays it.
    ///
    /// Falsy values (empty, `false`, `0`) render as the empty string and
    /// integral numbers drop their fractional part.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty | Cell::Bool(false) => String::new(),
            Cell::Bool(true) => "true".to_string(),
            Cell::Number(n) if *n == 0.0 || n.is_nan() => String::new(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// One participant row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 已去除首尾空白
    pub identifier: String,
    pub display_name: Option<String>,
    pub reward_description: Option<String>,
    /// 已去除首尾空白
    pub entry_access: String,
    /// 已去除首尾空白
    pub rehearsal_access: String,
    pub note: Option<String>,
}

impl Record {
    /// Builds a record from a raw row. Missing trailing columns read as empty.
    pub fn from_row(row: &[Cell]) -> Self {
        Self {
            identifier: Self::identifier_of(row),
            display_name: non_empty(cell_text(row, columns::NAME)),
            reward_description: non_empty(cell_text(row, columns::REWARD)),
            entry_access: trim_text(&cell_text(row, columns::ENTRY_ACCESS)).to_string(),
            rehearsal_access: trim_text(&cell_text(row, columns::REHEARSAL_ACCESS)).to_string(),
            note: non_empty(cell_text(row, columns::NOTE)),
        }
    }

    /// The trimmed identifier of a raw row, without building the whole record.
    pub fn identifier_of(row: &[Cell]) -> String {
        trim_text(&cell_text(row, columns::IDENTIFIER)).to_string()
    }

    pub fn has_entry_access(&self) -> bool {
        self.entry_access == ACCESS_GRANTED
    }

    pub fn has_rehearsal_access(&self) -> bool {
        self.rehearsal_access == ACCESS_GRANTED
    }
}

fn cell_text(row: &[Cell], index: usize) -> String {
    row.get(index).map(Cell::to_text).unwrap_or_default()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    #[test]
    fn test_cell_text_rendering() {
        assert_eq!(Cell::Empty.to_text(), "");
        assert_eq!(Cell::Bool(false).to_text(), "");
        assert_eq!(Cell::Bool(true).to_text(), "true");
        assert_eq!(Cell::Number(0.0).to_text(), "");
        assert_eq!(Cell::Number(12345.0).to_text(), "12345");
        assert_eq!(Cell::Number(1.5).to_text(), "1.5");
        assert_eq!(Cell::from(" abc ").to_text(), " abc ");
    }

    #[test]
    fn test_cell_deserialize_mixed_types() {
        let cells: Vec<Cell> =
            serde_json::from_str(r#"["abc", 42, true, null, ""]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                Cell::Text("abc".to_string()),
                Cell::Number(42.0),
                Cell::Bool(true),
                Cell::Empty,
                Cell::Text(String::new()),
            ]
        );
    }

    #[test]
    fn test_record_from_full_row() {
        let record = Record::from_row(&row(&[" abc123 ", "Taro", "T-Shirt", " 有 ", "無", "memo"]));

        assert_eq!(record.identifier, "abc123");
        assert_eq!(record.display_name.as_deref(), Some("Taro"));
        assert_eq!(record.reward_description.as_deref(), Some("T-Shirt"));
        assert!(record.has_entry_access());
        assert!(!record.has_rehearsal_access());
        assert_eq!(record.note.as_deref(), Some("memo"));
    }

    #[test]
    fn test_record_from_short_row() {
        let record = Record::from_row(&row(&["abc123", "Taro"]));

        assert_eq!(record.identifier, "abc123");
        assert!(record.reward_description.is_none());
        assert!(!record.has_entry_access());
        assert!(!record.has_rehearsal_access());
        assert!(record.note.is_none());
    }

    #[test]
    fn test_sentinel_is_exact() {
        for value in ["", "無", "有り", "yes", "granted", "true"] {
            let record = Record::from_row(&row(&["id1", "", "", value, value, ""]));
            assert!(!record.has_entry_access(), "{value:?} must not grant entry");
            assert!(!record.has_rehearsal_access(), "{value:?} must not grant rehearsal");
        }
    }

    #[test]
    fn test_trim_text_strips_bom() {
        assert_eq!(trim_text("\u{feff}abc123 "), "abc123");
        assert_eq!(trim_text(" \u{feff}\t"), "");
        assert_eq!(trim_text("a\u{feff}b"), "a\u{feff}b");

        let record = Record::from_row(&row(&["\u{feff}abc123", "", "", "\u{feff}有", "", ""]));
        assert_eq!(record.identifier, "abc123");
        assert!(record.has_entry_access());
    }

    #[test]
    fn test_numeric_identifier() {
        let cells = vec![Cell::Number(12345.0), Cell::from("Hanako")];
        assert_eq!(Record::identifier_of(&cells), "12345");
    }
}
