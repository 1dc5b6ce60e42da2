use chrono::{DateTime, FixedOffset};

/// Parses a board timestamp such as `2024-03-01T10:00:00.000Z`.
///
/// A missing, empty or unparseable value yields `None`; callers treat all
/// three the same way.
pub fn parse_board_date(value: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let raw = value.filter(|v| !v.is_empty())?;

    let normalized = match raw.strip_suffix('Z') {
        Some(stem) => format!("{}+00:00", stem),
        None => raw.to_string(),
    };

    match DateTime::parse_from_rfc3339(&normalized) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!("Ignoring unparseable date {:?}: {}", raw, e);
            None
        }
    }
}
