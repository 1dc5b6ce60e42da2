use crate::core::sanitize::sanitize_filename;
use crate::domain::model::{Board, List, DEFAULT_LIST_NAME};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

pub const OUTPUT_DIR_SUFFIX: &str = "_markdown";

/// Lists keyed by id. A duplicated id keeps the last list object.
pub struct ListIndex<'a> {
    by_id: HashMap<&'a str, &'a List>,
    order: Vec<&'a str>,
}

impl<'a> ListIndex<'a> {
    pub fn new(lists: &'a [List]) -> Self {
        let mut by_id = HashMap::new();
        let mut order = Vec::new();
        for list in lists {
            if by_id.insert(list.id.as_str(), list).is_none() {
                order.push(list.id.as_str());
            }
        }
        Self { by_id, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Name of the list a card points at, or "Unknown List" when the id is
    /// missing or matches no list.
    pub fn resolve_name(&self, id_list: Option<&str>) -> &str {
        id_list
            .and_then(|id| self.by_id.get(id))
            .map(|list| list.name.as_str())
            .unwrap_or(DEFAULT_LIST_NAME)
    }

    /// Lists in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &'a List> + '_ {
        self.order.iter().map(|id| self.by_id[id])
    }
}

pub fn output_root(output_base: &Path, board_name: &str) -> PathBuf {
    output_base.join(format!("{}{}", sanitize_filename(board_name), OUTPUT_DIR_SUFFIX))
}

/// Directories to create: one per list that at least one card references.
pub fn list_directories(root: &Path, board: &Board, index: &ListIndex<'_>) -> Vec<PathBuf> {
    let referenced: HashSet<&str> = board
        .cards
        .iter()
        .filter_map(|card| card.id_list.as_deref())
        .collect();

    index
        .iter()
        .filter(|list| {
            let keep = referenced.contains(list.id.as_str());
            if !keep {
                tracing::debug!("Skipping list '{}' with no cards", list.name);
            }
            keep
        })
        .map(|list| root.join(sanitize_filename(&list.name)))
        .collect()
}
