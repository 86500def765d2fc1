use dioxus::prelude::*;

use crate::domain::entities::table::{ColumnDef, Row, SortDirection};
use crate::ui::components::data_table::state::LoadState;

fn column_style(column: &ColumnDef) -> Option<String> {
    column.width.as_ref().map(|width| format!("width: {width};"))
}

fn sort_indicator(column: &ColumnDef, sort: Option<&(String, SortDirection)>) -> &'static str {
    match sort {
        Some((key, SortDirection::Asc)) if *key == column.key => " ▲",
        Some((key, SortDirection::Desc)) if *key == column.key => " ▼",
        _ => "",
    }
}

/// The part of the table that changes with every reload: placeholder or rows.
///
/// Rows are rendered twice, once as a table and once as cards; `card_view` picks which one
/// is visible.
#[component]
pub fn ResultRegion(
    columns: Vec<ColumnDef>,
    load: LoadState,
    id_prefix: String,
    card_view: bool,
    sort: Option<(String, SortDirection)>,
    on_sort: EventHandler<String>,
) -> Element {
    let rows: Vec<Row> = match load {
        LoadState::Loading => {
            return rsx! {
                div { class: "p-3 text-muted data-table-placeholder", "Loading..." }
            }
        }
        LoadState::Empty => {
            return rsx! {
                div { class: "p-3 text-muted data-table-placeholder", "No results" }
            }
        }
        LoadState::Failed => {
            return rsx! {
                div { class: "p-3 text-danger data-table-placeholder", "Failed to load" }
            }
        }
        LoadState::Rows(rows) => rows,
    };

    rsx! {
        div {
            class: "data-table-desktop",
            hidden: card_view,
            table { class: "table table-hover align-middle mb-0",
                thead {
                    tr {
                        for column in columns.iter() {
                            if column.sortable {
                                th {
                                    "scope": "col",
                                    class: "sortable",
                                    style: column_style(column),
                                    "data-sort": "{column.key}",
                                    onclick: {
                                        let key = column.key.clone();
                                        move |_| on_sort.call(key.clone())
                                    },
                                    "{column.label}{sort_indicator(column, sort.as_ref())}"
                                }
                            } else {
                                th {
                                    "scope": "col",
                                    style: column_style(column),
                                    "{column.label}"
                                }
                            }
                        }
                    }
                }
                tbody {
                    for (index, row) in rows.iter().enumerate() {
                        tr { key: "{index}",
                            for column in columns.iter() {
                                td { key: "{column.key}", "{row.display(&column.key)}" }
                            }
                        }
                    }
                }
            }
        }
        div {
            class: "data-table-mobile",
            hidden: !card_view,
            div { class: "data-cards",
                for (index, row) in rows.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "data-card",
                        "data-card-id": "card-{id_prefix}-{index}",
                        for column in columns.iter() {
                            div { key: "{column.key}", class: "data-card-row",
                                span { class: "card-label", "{column.label}:" }
                                span { class: "card-value", "{row.display(&column.key)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
