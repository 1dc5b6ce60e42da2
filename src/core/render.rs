use crate::core::dates::parse_board_date;
use crate::core::sanitize::sanitize_filename;
use crate::domain::model::{Card, Document};
use chrono::{NaiveDate, Utc};

pub const EMPTY_BODY_PLACEHOLDER: &str = "(no description)";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders a card into a markdown document placed in its list directory.
///
/// Header lines appear in a fixed order: `modified` (only with a parseable
/// last-activity date, as a UTC calendar date), `exported` (always),
/// `deleted` (only for closed cards).
pub fn render_card(card: &Card, list_name: &str, export_date: NaiveDate) -> Document {
    let modified = parse_board_date(card.date_last_activity.as_deref());

    let mut lines = vec!["---".to_string()];
    if let Some(date) = modified {
        lines.push(format!(
            "modified: {}",
            date.with_timezone(&Utc).format(DATE_FORMAT)
        ));
    }
    lines.push(format!("exported: {}", export_date.format(DATE_FORMAT)));
    if card.closed {
        lines.push("deleted: true".to_string());
    }
    lines.push("---".to_string());

    let mut content = lines.join("\n");
    content.push('\n');
    if card.desc.is_empty() {
        content.push_str(EMPTY_BODY_PLACEHOLDER);
    } else {
        content.push_str(&card.desc);
    }
    content.push('\n');

    Document {
        list_dir: sanitize_filename(list_name),
        file_name: format!("{}.md", sanitize_filename(&card.name)),
        content,
        modified,
    }
}
