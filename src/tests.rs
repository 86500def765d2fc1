#![allow(non_snake_case)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use rusqlite::Connection;

use crate::app::{App, Shell, ShellProps};
use crate::config::AppConfig;
use crate::domain::entities::catalog::{Control, Framework, FrameworkOrigin};
use crate::domain::entities::custom_framework::{
    CustomFrameworkId, FrameworkDraft, NewCustomFramework,
};
use crate::domain::entities::table::{ColumnDef, Row, SortDirection, TableQuery};
use crate::infra::import::csv::parse_csv_controls;
use crate::infra::memory::repo::MemoryRepo;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::infra::sqlite::schema::init_db;
use crate::ui::components::data_table::config::{FetchData, FetchError};
use crate::ui::components::data_table::state::LoadState;
use crate::ui::components::data_table::view::ResultRegion;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::input::TextInput;
use crate::ui::components::pagination::{Pagination, PaginationOptions};
use crate::ui::components::stepper::{StepDef, Stepper, StepperState};
use crate::ui::hooks::debounce::use_debounced;
use crate::ui::hooks::viewport::Breakpoints;
use crate::ui::modules::custom_framework_modal::{
    merge_controls, modal_table_config, next_button_class, MODAL_TABLE_PREFIX,
};
use crate::ui::modules::framework_cards::controls_table_config;
use crate::usecase::ports::catalog::{CatalogError, CatalogSource};
use crate::usecase::ports::repo::{FrameworkRepository, RepoError};
use crate::usecase::services::catalog_service::CatalogService;
use crate::usecase::services::framework_service::FrameworkService;
use crate::usecase::services::import_service::{import_control_template, ImportError};
use crate::usecase::services::query_service::controls_query;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("compliance-{prefix}-{nanos}"))
}

fn control(id: &str, category: &str, key: &str, description: &str) -> Control {
    Control {
        control_id: id.to_string(),
        category: category.to_string(),
        category_key: key.to_string(),
        description: description.to_string(),
    }
}

fn sample_controls() -> Vec<Control> {
    (1..=23)
        .map(|i| {
            let (category, key) = if i % 2 == 1 {
                ("Business Contact Information", "bci")
            } else {
                ("Technical & Org. Measures", "tom")
            };
            control(
                &format!("Article {i}"),
                category,
                key,
                &format!("Requirement number {i}"),
            )
        })
        .collect()
}

fn sample_rows() -> Vec<Row> {
    sample_controls().iter().map(Control::to_row).collect()
}

fn query(page: usize, page_size: usize) -> TableQuery {
    TableQuery {
        page,
        page_size,
        q: String::new(),
        sort: None,
        dir: SortDirection::Asc,
        filters: Default::default(),
        with_page_size: true,
    }
}

fn draft(name: &str, short_name: &str, description: &str) -> FrameworkDraft {
    FrameworkDraft {
        name: name.to_string(),
        short_name: short_name.to_string(),
        description: description.to_string(),
        use_logo: false,
        template_name: None,
    }
}

#[test]
fn controls_query_slices_requested_page() {
    let result = controls_query().run(&sample_rows(), &query(3, 10));

    assert_eq!(result.total, 23);
    assert_eq!(result.rows.len(), 3, "last page holds the remainder");
    assert_eq!(result.rows[0].display("controlId"), "Article 21");
}

#[test]
fn controls_query_without_page_size_returns_everything_from_start() {
    let mut request = query(2, 10);
    request.with_page_size = false;

    let result = controls_query().run(&sample_rows(), &request);

    assert_eq!(result.total, 23);
    assert_eq!(result.rows.len(), 13, "slice runs from page start to the end");
}

#[test]
fn category_filter_matches_category_key() {
    let mut request = query(1, 50);
    request.filters.insert("category".to_string(), "tom".to_string());

    let result = controls_query().run(&sample_rows(), &request);

    assert_eq!(result.total, 11);
    assert!(result
        .rows
        .iter()
        .all(|row| row.display("categoryKey") == "tom"));
}

#[test]
fn empty_filter_value_means_no_constraint() {
    let mut request = query(1, 50);
    request.filters.insert("category".to_string(), String::new());

    assert_eq!(controls_query().run(&sample_rows(), &request).total, 23);
}

#[test]
fn search_is_case_insensitive_across_searchable_fields() {
    let mut request = query(1, 50);
    request.q = "NUMBER 7".to_string();
    assert_eq!(controls_query().run(&sample_rows(), &request).total, 1);

    request.q = "technical".to_string();
    assert_eq!(
        controls_query().run(&sample_rows(), &request).total,
        11,
        "category text is searchable"
    );
}

#[test]
fn sort_is_lexicographic_on_lowercased_text() {
    let rows = vec![
        Row::new().with("controlId", "b"),
        Row::new().with("controlId", "A"),
        Row::new().with("controlId", "c"),
    ];
    let mut request = query(1, 10);
    request.sort = Some("controlId".to_string());

    let asc = controls_query().run(&rows, &request);
    let asc_ids: Vec<String> = asc.rows.iter().map(|r| r.display("controlId")).collect();
    assert_eq!(asc_ids, vec!["A", "b", "c"]);

    request.dir = SortDirection::Desc;
    let desc = controls_query().run(&rows, &request);
    let desc_ids: Vec<String> = desc.rows.iter().map(|r| r.display("controlId")).collect();
    assert_eq!(desc_ids, vec!["c", "b", "A"]);
}

#[test]
fn page_past_the_end_yields_no_rows_but_keeps_total() {
    let result = controls_query().run(&sample_rows(), &query(9, 10));

    assert!(result.rows.is_empty());
    assert_eq!(result.total, 23);
}

#[test]
fn in_memory_fetch_data_answers_queries() {
    let fetch = FetchData::in_memory(sample_rows(), controls_query());

    let result = futures::executor::block_on(fetch.call(query(1, 10)))
        .expect("in-memory fetch should not fail");

    assert_eq!(result.rows.len(), 10);
    assert_eq!(result.total, 23);
    assert_eq!(fetch.clone(), fetch, "clones share one source");
}

#[test]
fn catalog_errors_collapse_into_fetch_errors() {
    let err: FetchError = CatalogError::Status {
        url: "http://localhost:3000/controls".to_string(),
        status: 503,
    }
    .into();

    assert!(err.0.contains("503"), "message should keep the status: {err}");
}

#[test]
fn controls_table_uses_paginated_defaults() {
    let config = controls_table_config(sample_rows());

    assert_eq!(config.id_prefix, "dt");
    assert_eq!(config.table_height, "73vh");
    assert_eq!(config.page_size_options, vec![10, 20, 50]);
    assert_eq!(config.initial_page_size, 10);
    assert!(config.searchable && config.with_page_size && config.with_pagination);
    assert!(config.disable_pagination_on_mobile);

    let sortable: Vec<bool> = config.columns.iter().map(|c| c.sortable).collect();
    assert_eq!(sortable, vec![true, true, false]);
    assert_eq!(config.columns[0].width.as_deref(), Some("140px"));
    assert_eq!(config.filters[0].options.len(), 3);
}

#[test]
fn modal_table_shows_everything_without_controls() {
    let config = modal_table_config(sample_rows());

    assert_eq!(config.id_prefix, MODAL_TABLE_PREFIX);
    assert_eq!(config.table_height, "570px");
    assert!(!config.searchable);
    assert!(!config.with_page_size);
    assert!(!config.with_pagination);
}

#[test]
fn next_button_turns_green_only_for_valid_draft() {
    assert!(!draft("GDPR", "", "desc").is_valid());
    assert_eq!(next_button_class(false), "btn btn-secondary");
    assert!(draft("GDPR", "gdpr", "desc").is_valid());
    assert_eq!(next_button_class(true), "btn btn-success");
}

#[test]
fn template_import_replaces_or_appends_controls() {
    let current = vec![
        control("A1", "Business Contact Information", "bci", "old"),
        control("A2", "Business Contact Information", "bci", "keep"),
    ];
    let imported = vec![control("A1", "Technical & Org. Measures", "tom", "new")];

    let replaced = merge_controls(&current, imported.clone(), false);
    assert_eq!(replaced, imported);

    let appended = merge_controls(&current, imported, true);
    let ids: Vec<&str> = appended.iter().map(|c| c.control_id.as_str()).collect();
    assert_eq!(ids, vec!["A2", "A1"]);
    assert_eq!(appended[1].description, "new", "imported control wins");
}

#[test]
fn wizard_steps_walk_forward_and_back() {
    let mut stepper = StepperState::new(
        vec![StepDef::new("Framework Details"), StepDef::new("Control Items")],
        1,
    );

    assert_eq!(stepper.indicator(), "1/2");
    assert_eq!(stepper.next(), Some(2));
    assert_eq!(stepper.indicator(), "2/2");
    assert_eq!(stepper.previous(), Some(1));
}

#[test]
fn csv_template_matches_headers_case_insensitively() {
    let csv = "Control ID,Control Category,Description\n\
               Article 1,Business Contact Information,Keep contacts current\n\
               Article 2,Technical & Org. Measures,Encrypt at rest\n";

    let controls = parse_csv_controls(csv.as_bytes()).expect("csv template should parse");

    assert_eq!(controls.len(), 2);
    assert_eq!(controls[0].control_id, "Article 1");
    assert_eq!(controls[0].category_key, "bci", "known category maps to its key");
    assert_eq!(controls[1].category_key, "tom");
    assert_eq!(controls[1].description, "Encrypt at rest");
}

#[test]
fn csv_template_skips_rows_without_control_id() {
    let csv = "controlId,category,categoryKey,description\n\
               ,Orphan,orphan,no id\n\
               Art. 5,Data Minimisation,,Collect less\n";

    let controls = parse_csv_controls(csv.as_bytes()).expect("csv template should parse");

    assert_eq!(controls.len(), 1);
    assert_eq!(controls[0].control_id, "Art. 5");
    assert_eq!(controls[0].category_key, "data-minimisation", "unknown category slugs");
}

#[test]
fn csv_template_without_id_column_is_rejected() {
    let result = parse_csv_controls(b"category,description\nA,B\n");

    let err = result.expect_err("missing id column should fail");
    assert!(
        format!("{err:#}").contains("control id"),
        "error should name the missing column: {err:#}"
    );
}

#[test]
fn import_dispatches_by_extension() {
    let csv = b"id,category,description\nC-1,Business Contact Information,x\n";

    let controls =
        import_control_template("Template.CSV", csv).expect("uppercase extension should work");
    assert_eq!(controls.len(), 1);

    let unsupported = import_control_template("template.pdf", csv);
    assert!(matches!(unsupported, Err(ImportError::UnsupportedFormat(_))));
}

#[test]
fn broken_xlsx_template_reports_parse_error() {
    let result = import_control_template("controls.xlsx", b"definitely not a zip archive");

    assert!(matches!(result, Err(ImportError::Parse(_))), "got {result:?}");
}

#[test]
fn init_db_creates_required_tables() {
    let temp_dir = unique_test_dir("init-db");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("app.sqlite");

    let result = init_db(&db_path);

    assert!(result.is_ok(), "init_db should succeed: {result:?}");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'table' AND name IN ('custom_framework', 'custom_control')",
            [],
            |row| row.get(0),
        )
        .expect("should count tables");
    assert_eq!(table_count, 2);

    fs::remove_dir_all(&temp_dir).expect("should clean temp dir");
}

#[test]
fn sqlite_repo_round_trips_frameworks_with_ordered_controls() {
    let temp_dir = unique_test_dir("sqlite-repo");
    let repo = SqliteRepo {
        db_path: temp_dir.join("frameworks.sqlite"),
    };
    repo.init().expect("store should initialise");

    let controls = vec![
        control("Z-9", "Technical & Org. Measures", "tom", "last alphabetically"),
        control("A-1", "Business Contact Information", "bci", "first alphabetically"),
    ];
    let id = repo
        .create_framework(NewCustomFramework::from_draft(
            &draft(" Internal Policy ", "IP", "House rules"),
            controls.clone(),
        ))
        .expect("create should succeed");

    let stored = repo.list_frameworks().expect("list should succeed");

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].name, "Internal Policy", "draft fields are trimmed");
    assert_eq!(stored[0].controls, controls, "controls keep insertion order");
    assert!(!stored[0].created_at.is_empty());

    fs::remove_dir_all(&temp_dir).expect("should clean temp dir");
}

#[test]
fn memory_repo_assigns_increasing_ids() {
    let repo = MemoryRepo::default();

    let first = repo
        .create_framework(NewCustomFramework::from_draft(&draft("A", "a", "x"), Vec::new()))
        .expect("first create should succeed");
    let second = repo
        .create_framework(NewCustomFramework::from_draft(&draft("B", "b", "y"), Vec::new()))
        .expect("second create should succeed");

    assert_eq!((first, second), (CustomFrameworkId(1), CustomFrameworkId(2)));
    assert_eq!(repo.list_frameworks().expect("list should succeed").len(), 2);
}

#[test]
fn framework_service_rejects_incomplete_draft() {
    let repo = Arc::new(MemoryRepo::default());
    let service = FrameworkService::new(repo.clone());

    let result = service.create_from_draft(&draft("GDPR", "  ", "desc"), sample_controls());

    assert!(matches!(result, Err(RepoError::Invalid(_))), "got {result:?}");
    assert!(repo.list_frameworks().expect("list should succeed").is_empty());
}

struct FakeCatalog {
    frameworks: Result<Vec<Framework>, CatalogError>,
    controls: Vec<Control>,
    control_calls: Cell<usize>,
}

impl FakeCatalog {
    fn with_frameworks(frameworks: Vec<Framework>) -> Self {
        Self {
            frameworks: Ok(frameworks),
            controls: sample_controls(),
            control_calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for FakeCatalog {
    async fn frameworks(&self) -> Result<Vec<Framework>, CatalogError> {
        self.frameworks.clone()
    }

    async fn controls(&self) -> Result<Vec<Control>, CatalogError> {
        self.control_calls.set(self.control_calls.get() + 1);
        Ok(self.controls.clone())
    }
}

fn remote_framework(id: Option<i64>, title: &str) -> Framework {
    Framework {
        id: id.map(Into::into),
        title: title.to_string(),
        name: format!("{title} framework"),
        description: String::new(),
        logo: None,
    }
}

#[tokio::test]
async fn framework_cards_list_remote_then_custom() {
    let repo = Arc::new(MemoryRepo::default());
    repo.create_framework(NewCustomFramework::from_draft(
        &draft("Internal Policy", "IP", "House rules"),
        vec![control("IP-1", "Business Contact Information", "bci", "x")],
    ))
    .expect("create should succeed");
    let source = Rc::new(FakeCatalog::with_frameworks(vec![
        remote_framework(Some(7), "GDPR"),
        remote_framework(None, "ISO"),
    ]));
    let service = CatalogService::new(source, repo);

    let cards = service.framework_cards().await.expect("cards should load");

    let keys: Vec<&str> = cards.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["7", "1", "custom-1"], "missing id falls back to index");
    assert_eq!(cards[2].title, "IP");
    assert_eq!(cards[2].origin, FrameworkOrigin::Custom(CustomFrameworkId(1)));
}

#[tokio::test]
async fn failing_backend_fails_framework_cards() {
    let source = Rc::new(FakeCatalog {
        frameworks: Err(CatalogError::Transport {
            url: "http://localhost:3000/frameworks".to_string(),
            message: "connection refused".to_string(),
        }),
        controls: Vec::new(),
        control_calls: Cell::new(0),
    });
    let service = CatalogService::new(source, Arc::new(MemoryRepo::default()));

    let result = service.framework_cards().await;

    assert!(matches!(result, Err(CatalogError::Transport { .. })), "got {result:?}");
}

#[tokio::test]
async fn control_rows_come_from_backend_or_store() {
    let repo = Arc::new(MemoryRepo::default());
    let id = repo
        .create_framework(NewCustomFramework::from_draft(
            &draft("Internal Policy", "IP", "House rules"),
            vec![control("IP-1", "Business Contact Information", "bci", "x")],
        ))
        .expect("create should succeed");
    let source = Rc::new(FakeCatalog::with_frameworks(Vec::new()));
    let service = CatalogService::new(source.clone(), repo);

    let remote = service
        .control_rows(FrameworkOrigin::Remote)
        .await
        .expect("remote controls should load");
    assert_eq!(remote.len(), 23);
    assert_eq!(source.control_calls.get(), 1);

    let custom = service
        .control_rows(FrameworkOrigin::Custom(id))
        .await
        .expect("stored controls should load");
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].display("controlId"), "IP-1");
    assert_eq!(source.control_calls.get(), 1, "custom frameworks never hit the backend");

    let missing = service
        .control_rows(FrameworkOrigin::Custom(CustomFrameworkId(99)))
        .await;
    assert!(matches!(missing, Err(CatalogError::MissingFramework(99))));
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn region_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("controlId", "Control ID").width("140px").sortable(),
        ColumnDef::new("description", "Control Description"),
    ]
}

fn EmptyRegion() -> Element {
    rsx! {
        ResultRegion {
            columns: region_columns(),
            load: LoadState::Empty,
            id_prefix: "dt".to_string(),
            card_view: false,
            sort: None,
            on_sort: |_: String| {},
        }
    }
}

fn FailedRegion() -> Element {
    rsx! {
        ResultRegion {
            columns: region_columns(),
            load: LoadState::Failed,
            id_prefix: "dt".to_string(),
            card_view: false,
            sort: None,
            on_sort: |_: String| {},
        }
    }
}

fn FilledRegion() -> Element {
    let rows = vec![
        Row::new()
            .with("controlId", "Article 1")
            .with("description", "<script>alert(1)</script>"),
        Row::new().with("controlId", "Article 2"),
    ];
    rsx! {
        ResultRegion {
            columns: region_columns(),
            load: LoadState::Rows(rows),
            id_prefix: "dt".to_string(),
            card_view: false,
            sort: Some(("controlId".to_string(), SortDirection::Desc)),
            on_sort: |_: String| {},
        }
    }
}

#[test]
fn empty_result_renders_no_results() {
    let html = render(EmptyRegion);

    assert!(html.contains("No results"), "html: {html}");
    assert!(!html.contains("<table"), "no table for empty results");
}

#[test]
fn failed_result_renders_inline_message() {
    let html = render(FailedRegion);

    assert!(html.contains("Failed to load"), "html: {html}");
    assert!(html.contains("text-danger"));
}

#[test]
fn rows_render_as_table_and_cards_with_escaped_text() {
    let html = render(FilledRegion);

    assert!(html.contains("data-table-desktop"));
    assert!(html.contains("data-table-mobile"));
    assert!(html.contains("data-card-id=\"card-dt-0\""));
    assert!(html.contains("data-card-id=\"card-dt-1\""));
    assert!(html.contains("&lt;script&gt;"), "cell text must be escaped: {html}");
    assert!(!html.contains("<script>"));
    assert!(html.contains("data-sort=\"controlId\""), "sortable header is marked");
    assert!(!html.contains("data-sort=\"description\""), "plain header is not");
    assert!(html.contains("width: 140px;"));
    assert!(html.contains("Control ID ▼"), "active sort shows its direction");
}

fn TenPageStrip() -> Element {
    rsx! {
        Pagination {
            options: PaginationOptions::new(1, 10),
            on_page_change: |_: usize| {},
        }
    }
}

fn SinglePageStrip() -> Element {
    rsx! {
        Pagination {
            options: PaginationOptions::new(1, 1),
            on_page_change: |_: usize| {},
        }
    }
}

#[test]
fn pagination_renders_window_edges_and_ellipsis() {
    let html = render(TenPageStrip);

    assert!(html.contains("pagination-prev"));
    assert!(html.contains("pagination-next"));
    assert!(html.contains("data-page=\"10\""), "last page button present");
    assert!(!html.contains("data-page=\"5\""), "page 5 is outside the window");
    assert_eq!(html.matches("pagination-ellipsis").count(), 1);
    assert_eq!(html.matches("btn-primary").count(), 1, "one active page");
}

#[test]
fn single_page_pagination_renders_nothing() {
    let html = render(SinglePageStrip);

    assert!(!html.contains("pagination-btn"), "html: {html}");
}

fn WizardStepper() -> Element {
    rsx! {
        Stepper {
            state: StepperState::new(vec![StepDef::new("Framework Details"), StepDef::default()], 2),
        }
    }
}

#[test]
fn stepper_renders_padded_numbers_and_fallback_label() {
    let html = render(WizardStepper);

    assert!(html.contains("01"));
    assert!(html.contains("02"));
    assert!(html.contains("bk-stepper__step--completed"));
    assert!(html.contains("bk-stepper__step--active"));
    assert!(html.contains("Step 2"));
    assert_eq!(html.matches("bk-stepper__line").count(), 1);
}

fn LabelledInput() -> Element {
    rsx! {
        TextInput {
            id: "frameworkName",
            label: "Name",
            placeholder: "Enter name",
        }
    }
}

#[test]
fn text_input_renders_label_and_control() {
    let html = render(LabelledInput);

    assert!(html.contains("bk-input__label"));
    assert!(html.contains("bk-input--label-top"));
    assert!(html.contains("bk-input--default"));
    assert!(html.contains("id=\"frameworkName\""));
}

fn ControlsTable() -> Element {
    rsx! { DataTable { config: controls_table_config(sample_rows()) } }
}

fn ModalTable() -> Element {
    rsx! { DataTable { config: modal_table_config(sample_rows()) } }
}

#[test]
fn data_table_creates_its_regions_and_starts_loading() {
    let html = render(ControlsTable);

    assert!(html.contains("id=\"dt-q-wrap\""));
    assert!(html.contains("id=\"dt-area\""));
    assert!(html.contains("id=\"dt-pageSize\""));
    assert!(html.contains("id=\"dt-range\""));
    assert!(html.contains("pagination-container"));
    assert!(html.contains("data-filter=\"category\""));
    assert!(html.contains("max-height: 73vh;"));
    assert!(html.contains("Loading..."), "first render shows the placeholder");
}

#[test]
fn modal_table_omits_search_and_footer() {
    let html = render(ModalTable);

    assert!(html.contains("id=\"modal-dt-area\""));
    assert!(html.contains("max-height: 570px;"));
    assert!(!html.contains("modal-dt-q-wrap"));
    assert!(!html.contains("modal-dt-pageSize"));
    assert!(!html.contains("pagination-container"));
}

async fn settle(dom: &mut VirtualDom) {
    for _ in 0..12 {
        let work = tokio::time::timeout(Duration::from_millis(150), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

#[tokio::test]
async fn data_table_renders_first_page_after_reload() {
    let mut dom = VirtualDom::new(ControlsTable);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);

    assert!(!html.contains("Loading..."), "reload should finish: {html}");
    assert!(html.contains("Showing 1 to 10 of 23 entries"));
    assert!(html.contains("Article 10"));
    assert!(!html.contains("Article 11"), "second page stays unrendered");
    assert!(html.contains("data-page=\"3\""), "pagination strip lists the last page");
    assert!(html.contains("Control ID:"), "card labels end with a colon");
    assert!(html.contains("Type to filter..."));
}

#[derive(Clone, Default)]
struct FiredSearches(Rc<RefCell<Vec<String>>>);

fn SearchBurst() -> Element {
    let fired = use_context::<FiredSearches>();
    let search = use_debounced(Duration::from_millis(20), move |text: String| {
        fired.0.borrow_mut().push(text);
    });

    use_effect(move || {
        for text in ["c", "co", "con"] {
            search.call(text.to_string());
        }
    });

    rsx! { div {} }
}

#[tokio::test]
async fn debounced_callback_fires_once_with_last_value() {
    let fired = FiredSearches::default();
    let mut dom = VirtualDom::new(SearchBurst).with_root_context(fired.clone());
    dom.rebuild_in_place();
    settle(&mut dom).await;

    assert_eq!(*fired.0.borrow(), vec!["con".to_string()]);
}

#[derive(Clone, Default)]
struct StepChanges(Rc<RefCell<Vec<usize>>>);

fn AdvancingStepper() -> Element {
    let changes = use_context::<StepChanges>();
    let mut stepper = use_signal(|| {
        StepperState::new(vec![StepDef::new("Framework Details"), StepDef::new("Control Items")], 1)
    });

    use_effect(move || {
        stepper.write().next();
    });

    rsx! {
        Stepper {
            state: stepper(),
            on_step_change: move |step: usize| changes.0.borrow_mut().push(step),
        }
    }
}

#[tokio::test]
async fn stepper_reports_step_changes_but_not_mount() {
    let changes = StepChanges::default();
    let mut dom = VirtualDom::new(AdvancingStepper).with_root_context(changes.clone());
    dom.rebuild_in_place();
    settle(&mut dom).await;

    assert_eq!(*changes.0.borrow(), vec![2]);
    assert!(dioxus_ssr::render(&dom).contains("bk-stepper__step--completed"));
}

#[tokio::test]
async fn shell_renders_layout_and_initialises_store() {
    let dir = unique_test_dir("shell");
    let db_path = dir.join("frameworks.sqlite");
    let config = AppConfig {
        api_base_url: "http://127.0.0.1:9".to_string(),
        db_path: db_path.clone(),
        breakpoints: Breakpoints::default(),
    };

    let mut dom = VirtualDom::new_with_props(Shell, ShellProps { config });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("id=\"hamburger-toggle\""), "html: {html}");
    assert!(html.contains("id=\"add-custom-framework\""));
    assert!(html.contains("Loading frameworks..."));
    assert!(html.contains("Please select framework from list in left side"));
    assert!(!html.contains("stepper-container"), "wizard starts closed");

    settle(&mut dom).await;
    assert!(db_path.exists(), "store should be created on mount");

    let _ = fs::remove_dir_all(dir);
}

#[tokio::test]
async fn app_renders_the_shell() {
    let html = render(App);

    assert!(html.contains("id=\"hamburger-toggle\""), "html: {html}");
    assert!(html.contains("Compliance Frameworks"));
}
