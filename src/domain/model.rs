use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::PathBuf;

pub const DEFAULT_BOARD_NAME: &str = "Untitled Board";
pub const DEFAULT_LIST_NAME: &str = "Unknown List";
pub const DEFAULT_CARD_NAME: &str = "Untitled Card";

fn default_board_name() -> String {
    DEFAULT_BOARD_NAME.to_string()
}

fn default_list_name() -> String {
    DEFAULT_LIST_NAME.to_string()
}

fn default_card_name() -> String {
    DEFAULT_CARD_NAME.to_string()
}

// An explicit `null` falls back to the same default as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_board_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_board_name))
}

fn null_as_list_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_list_name))
}

fn null_as_card_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_card_name))
}

// Any non-string value (number, bool, object) reads as absent, so the card
// is written without a timestamp.
fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn scalar_id(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// Numeric ids are read as their decimal text; other shapes read as absent.
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_id(Value::deserialize(deserializer)?))
}

fn required_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let shown = value.to_string();
    scalar_id(value).ok_or_else(|| D::Error::custom(format!("invalid list id: {}", shown)))
}

/// Root of a board export. Only the name, lists and cards are read; every
/// other key in the export is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    #[serde(default = "default_board_name", deserialize_with = "null_as_board_name")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lists: Vec<List>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct List {
    #[serde(deserialize_with = "required_id")]
    pub id: String,
    #[serde(default = "default_list_name", deserialize_with = "null_as_list_name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default = "default_card_name", deserialize_with = "null_as_card_name")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_list: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closed: bool,
    #[serde(default, deserialize_with = "string_or_none")]
    pub date_last_activity: Option<String>,
}

/// One rendered card, ready to be written below the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub list_dir: String,
    pub file_name: String,
    pub content: String,
    pub modified: Option<DateTime<FixedOffset>>,
}

impl Document {
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.list_dir).join(&self.file_name)
    }
}

#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub output_root: PathBuf,
    /// Directories for lists that have at least one card, in input order.
    pub list_dirs: Vec<PathBuf>,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub output_root: PathBuf,
    pub files_written: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_defaults_for_missing_fields() {
        let board: Board = serde_json::from_str("{}").unwrap();
        assert_eq!(board.name, DEFAULT_BOARD_NAME);
        assert!(board.lists.is_empty());
        assert!(board.cards.is_empty());
    }

    #[test]
    fn test_card_defaults_for_missing_and_null_fields() {
        let card: Card = serde_json::from_str(r#"{"id": "C1", "desc": null, "closed": null}"#)
            .unwrap();
        assert_eq!(card.id.as_deref(), Some("C1"));
        assert_eq!(card.name, DEFAULT_CARD_NAME);
        assert_eq!(card.desc, "");
        assert!(!card.closed);
        assert!(card.id_list.is_none());
        assert!(card.date_last_activity.is_none());
    }

    #[test]
    fn test_card_reads_camel_case_keys() {
        let card: Card = serde_json::from_str(
            r#"{
                "id": "C1",
                "name": "Task A",
                "desc": "hello",
                "idList": "L1",
                "closed": true,
                "dateLastActivity": "2024-03-01T10:00:00.000Z",
                "labels": [{"name": "ignored"}]
            }"#,
        )
        .unwrap();
        assert_eq!(card.name, "Task A");
        assert_eq!(card.id_list.as_deref(), Some("L1"));
        assert!(card.closed);
        assert_eq!(
            card.date_last_activity.as_deref(),
            Some("2024-03-01T10:00:00.000Z")
        );
    }

    #[test]
    fn test_list_without_id_is_rejected() {
        let result: std::result::Result<List, _> = serde_json::from_str(r#"{"name": "To Do"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_date_reads_as_absent() {
        for raw in ["1709287200", "false", r#"{"at": "2024-03-01"}"#, "[]"] {
            let board: Board = serde_json::from_str(&format!(
                r#"{{"cards": [{{"name": "A", "idList": "L1", "dateLastActivity": {}}}]}}"#,
                raw
            ))
            .unwrap();
            assert_eq!(board.cards.len(), 1);
            assert!(board.cards[0].date_last_activity.is_none(), "for {}", raw);
        }
    }

    #[test]
    fn test_numeric_ids_read_as_text() {
        let board: Board = serde_json::from_str(
            r#"{
                "lists": [{"id": 7, "name": "Numbers"}],
                "cards": [
                    {"id": 1, "name": "A", "idList": 7},
                    {"id": true, "name": "B", "idList": {"nested": 1}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(board.lists[0].id, "7");
        assert_eq!(board.cards[0].id.as_deref(), Some("1"));
        assert_eq!(board.cards[0].id_list.as_deref(), Some("7"));
        assert!(board.cards[1].id.is_none());
        assert!(board.cards[1].id_list.is_none());
    }

    #[test]
    fn test_list_with_object_id_is_rejected() {
        let result: std::result::Result<List, _> =
            serde_json::from_str(r#"{"id": {"x": 1}, "name": "To Do"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_name_defaults() {
        let list: List = serde_json::from_str(r#"{"id": "L1"}"#).unwrap();
        assert_eq!(list.name, DEFAULT_LIST_NAME);
    }
}
