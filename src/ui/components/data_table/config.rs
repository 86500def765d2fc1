use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{ready, LocalBoxFuture};
use futures::FutureExt;
use thiserror::Error;

use crate::domain::entities::table::{ColumnDef, FilterDef, PageResult, Row, TableQuery};
use crate::usecase::ports::catalog::CatalogError;
use crate::usecase::services::query_service::RowQuery;

pub const DEFAULT_PAGE_SIZES: [usize; 3] = [10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_ID_PREFIX: &str = "dt";
pub const DEFAULT_TABLE_HEIGHT: &str = "73vh";

/// Any failure of a data source. The table only ever shows it as "Failed to load".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

impl From<CatalogError> for FetchError {
    fn from(err: CatalogError) -> Self {
        FetchError(err.to_string())
    }
}

pub type FetchFuture = LocalBoxFuture<'static, Result<PageResult, FetchError>>;

/// Async data source of a table: one query in, one page of rows plus the total out.
#[derive(Clone)]
pub struct FetchData(Rc<dyn Fn(TableQuery) -> FetchFuture>);

impl FetchData {
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(TableQuery) -> Fut + 'static,
        Fut: Future<Output = Result<PageResult, FetchError>> + 'static,
    {
        Self(Rc::new(move |query| fetch(query).boxed_local()))
    }

    /// Serves queries from a fixed row set.
    pub fn in_memory(rows: Vec<Row>, row_query: RowQuery) -> Self {
        let rows = Rc::new(rows);
        Self::new(move |query: TableQuery| ready(Ok(row_query.run(&rows, &query))))
    }

    pub fn call(&self, query: TableQuery) -> FetchFuture {
        (self.0)(query)
    }
}

impl PartialEq for FetchData {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FetchData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FetchData(..)")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataTableConfig {
    pub columns: Vec<ColumnDef>,
    pub fetch_data: FetchData,
    pub page_size_options: Vec<usize>,
    pub initial_page_size: usize,
    pub searchable: bool,
    pub filters: Vec<FilterDef>,
    pub with_pagination: bool,
    pub with_page_size: bool,
    pub disable_pagination_on_mobile: bool,
    pub id_prefix: String,
    pub table_height: String,
}

impl DataTableConfig {
    pub fn new(columns: Vec<ColumnDef>, fetch_data: FetchData) -> Self {
        Self {
            columns,
            fetch_data,
            page_size_options: DEFAULT_PAGE_SIZES.to_vec(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            searchable: true,
            filters: Vec::new(),
            with_pagination: true,
            with_page_size: true,
            disable_pagination_on_mobile: true,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            table_height: DEFAULT_TABLE_HEIGHT.to_string(),
        }
    }

    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn initial_page_size(mut self, size: usize) -> Self {
        self.initial_page_size = size.max(1);
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn filters(mut self, filters: Vec<FilterDef>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_pagination(mut self, enabled: bool) -> Self {
        self.with_pagination = enabled;
        self
    }

    pub fn with_page_size(mut self, enabled: bool) -> Self {
        self.with_page_size = enabled;
        self
    }

    pub fn disable_pagination_on_mobile(mut self, disabled: bool) -> Self {
        self.disable_pagination_on_mobile = disabled;
        self
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn table_height(mut self, height: impl Into<String>) -> Self {
        self.table_height = height.into();
        self
    }
}
