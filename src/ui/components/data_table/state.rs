use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::entities::table::{
    PageResult, Row, SortDirection, TableQuery, FETCH_ALL_PAGE_SIZE,
};
use crate::ui::components::data_table::config::{DataTableConfig, FetchError};
use crate::ui::components::pagination::{PaginationOptions, PaginationUpdate};
use crate::ui::hooks::viewport::ViewportClass;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// User-controlled part of a table request. Every setter except `set_page` returns to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: usize,
    pub page_size: usize,
    pub q: String,
    pub sort: Option<String>,
    pub dir: SortDirection,
    pub filters: BTreeMap<String, String>,
    pub total: usize,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            q: String::new(),
            sort: None,
            dir: SortDirection::Asc,
            filters: BTreeMap::new(),
            total: 0,
        }
    }

    pub fn set_search(&mut self, text: &str) {
        self.q = text.trim().to_string();
        self.page = 1;
    }

    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        self.filters.insert(key.to_string(), value.into());
        self.page = 1;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Same column flips the direction, a new column starts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort.as_deref() == Some(key) {
            self.dir = self.dir.toggled();
        } else {
            self.sort = Some(key.to_string());
            self.dir = SortDirection::Asc;
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// 1-based inclusive bounds of the rows on the current page.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.total == 0 {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (self.page * self.page_size).min(self.total);
        Some((start, end))
    }

    pub fn range_text(&self) -> String {
        match self.range() {
            Some((start, end)) => format!("Showing {start} to {end} of {} entries", self.total),
            None => String::new(),
        }
    }

    fn to_query(&self, fetch_all: bool, with_page_size: bool) -> TableQuery {
        let (page, page_size, with_page_size) = if fetch_all {
            (1, FETCH_ALL_PAGE_SIZE, false)
        } else {
            (self.page, self.page_size, with_page_size)
        };

        TableQuery {
            page,
            page_size,
            q: self.q.clone(),
            sort: self.sort.clone(),
            dir: self.dir,
            filters: self.filters.clone(),
            with_page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Empty,
    Rows(Vec<Row>),
    Failed,
}

/// Whether the viewport collapses the table into one unpaginated request.
pub fn fetches_everything(config: &DataTableConfig, class: ViewportClass) -> bool {
    (class.narrow && config.disable_pagination_on_mobile) || class.medium
}

/// Whether the page-size selector and the pagination strip are shown.
pub fn controls_visible(config: &DataTableConfig, class: ViewportClass) -> bool {
    (!config.disable_pagination_on_mobile || !class.narrow) && !class.medium
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket {
    generation: u64,
    fetch_all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    Applied,
    /// A newer reload was issued meanwhile; nothing changed.
    Stale,
    /// The stored page was past the last page and has been clamped.
    Refetch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub query: QueryState,
    pub load: LoadState,
    pub pagination: PaginationOptions,
    generation: u64,
}

impl TableState {
    pub fn new(config: &DataTableConfig) -> Self {
        Self {
            query: QueryState::new(config.initial_page_size),
            load: LoadState::Loading,
            pagination: PaginationOptions::default(),
            generation: 0,
        }
    }

    pub fn begin_reload(
        &mut self,
        config: &DataTableConfig,
        class: ViewportClass,
    ) -> (ReloadTicket, TableQuery) {
        self.generation += 1;
        self.load = LoadState::Loading;

        let fetch_all = fetches_everything(config, class);
        let ticket = ReloadTicket {
            generation: self.generation,
            fetch_all,
        };
        (ticket, self.query.to_query(fetch_all, config.with_page_size))
    }

    pub fn finish_reload(
        &mut self,
        ticket: ReloadTicket,
        outcome: Result<PageResult, FetchError>,
    ) -> ReloadOutcome {
        if ticket.generation != self.generation {
            return ReloadOutcome::Stale;
        }

        let result = match outcome {
            Ok(result) => result,
            Err(_) => {
                self.load = LoadState::Failed;
                return ReloadOutcome::Applied;
            }
        };

        self.query.total = result.total;
        self.load = if result.rows.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Rows(result.rows)
        };

        let last_page = self.query.total_pages();
        let clamped = self.query.page > last_page;
        if clamped {
            self.query.page = last_page;
        }

        self.pagination.update(PaginationUpdate {
            current_page: Some(self.query.page),
            total_pages: Some(last_page),
            ..PaginationUpdate::default()
        });

        if clamped && !ticket.fetch_all {
            ReloadOutcome::Refetch
        } else {
            ReloadOutcome::Applied
        }
    }
}
