use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::entities::catalog::{
    CATEGORY_KEY, CATEGORY_KEY_KEY, CONTROL_ID_KEY, DESCRIPTION_KEY,
};
use crate::domain::entities::table::{PageResult, Row, SortDirection, TableQuery};

/// Answers a [`TableQuery`] against rows that are already in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    search_keys: Vec<String>,
    filter_fields: BTreeMap<String, String>,
}

impl RowQuery {
    pub fn new<I, S>(search_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_keys: search_keys.into_iter().map(Into::into).collect(),
            filter_fields: BTreeMap::new(),
        }
    }

    /// Matches the filter named `filter_key` against `row_field` instead of a
    /// field of the same name.
    pub fn filter_field(mut self, filter_key: impl Into<String>, row_field: impl Into<String>) -> Self {
        self.filter_fields.insert(filter_key.into(), row_field.into());
        self
    }

    pub fn run(&self, rows: &[Row], query: &TableQuery) -> PageResult {
        let needle = query.q.trim().to_lowercase();

        let mut matching: Vec<&Row> = rows
            .iter()
            .filter(|row| self.matches_filters(row, &query.filters))
            .filter(|row| needle.is_empty() || self.matches_search(row, &needle))
            .collect();

        if let Some(sort_key) = query.sort.as_deref() {
            matching.sort_by(|a, b| compare_rows(a, b, sort_key, query.dir));
        }

        let total = matching.len();
        let start = query.page.saturating_sub(1).saturating_mul(query.page_size).min(total);
        let end = if query.with_page_size {
            start.saturating_add(query.page_size).min(total)
        } else {
            total
        };

        PageResult {
            rows: matching[start..end].iter().map(|row| (*row).clone()).collect(),
            total,
        }
    }

    fn matches_filters(&self, row: &Row, filters: &BTreeMap<String, String>) -> bool {
        filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .all(|(key, value)| {
                let field = self.filter_fields.get(key).unwrap_or(key);
                row.display(field) == *value
            })
    }

    fn matches_search(&self, row: &Row, needle: &str) -> bool {
        self.search_keys
            .iter()
            .any(|key| row.display(key).to_lowercase().contains(needle))
    }
}

fn compare_rows(a: &Row, b: &Row, key: &str, dir: SortDirection) -> Ordering {
    let left = a.display(key).to_lowercase();
    let right = b.display(key).to_lowercase();
    match dir {
        SortDirection::Asc => left.cmp(&right),
        SortDirection::Desc => right.cmp(&left),
    }
}

/// Search over id, category and description; the `category` filter selects by category key.
pub fn controls_query() -> RowQuery {
    RowQuery::new([CONTROL_ID_KEY, CATEGORY_KEY, DESCRIPTION_KEY])
        .filter_field(CATEGORY_KEY, CATEGORY_KEY_KEY)
}
