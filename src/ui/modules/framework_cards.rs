use std::iter;

use dioxus::prelude::*;
use tracing::error;

use crate::domain::entities::catalog::{
    FrameworkCard, CATEGORY_KEY, CONTROL_ID_KEY, DESCRIPTION_KEY,
};
use crate::domain::entities::table::{ColumnDef, FilterDef, FilterOption, Row};
use crate::ui::components::data_table::config::{DataTableConfig, FetchData};
use crate::ui::components::data_table::DataTable;
use crate::ui::modules::empty_state::EmptyState;
use crate::ui::state::app_state::{AppState, Services};
use crate::usecase::services::query_service::controls_query;

pub const CONTROLS_PAGE_SIZE: usize = 10;

pub fn control_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new(CONTROL_ID_KEY, "Control ID").width("140px").sortable(),
        ColumnDef::new(CATEGORY_KEY, "Control Category").width("240px").sortable(),
        ColumnDef::new(DESCRIPTION_KEY, "Control Description"),
    ]
}

pub fn control_filters() -> Vec<FilterDef> {
    vec![FilterDef {
        key: CATEGORY_KEY.to_string(),
        label: "Category".to_string(),
        options: vec![
            FilterOption::new("", "All"),
            FilterOption::new("bci", "Business Contact Information"),
            FilterOption::new("tom", "Technical & Org. Measures"),
        ],
    }]
}

/// Table of a framework's controls in the main region.
pub fn controls_table_config(rows: Vec<Row>) -> DataTableConfig {
    DataTableConfig::new(control_columns(), FetchData::in_memory(rows, controls_query()))
        .filters(control_filters())
        .searchable(true)
        .with_page_size(true)
        .with_pagination(true)
        .initial_page_size(CONTROLS_PAGE_SIZE)
}

fn card_class(selected: bool) -> &'static str {
    if selected {
        "framework-card-container selected"
    } else {
        "framework-card-container"
    }
}

/// Sidebar list of frameworks. Reloads whenever a custom framework is saved.
#[component]
pub fn FrameworkCards() -> Element {
    let services = use_context::<Services>();
    let app = use_context::<AppState>();
    let mut selected_card = app.selected_card;
    let frameworks_version = app.frameworks_version;

    let cards = use_resource(move || {
        let catalog = services.catalog.clone();
        let _ = frameworks_version();
        async move {
            catalog.framework_cards().await.inspect_err(|err| {
                error!("failed to load frameworks: {err}");
            })
        }
    });

    let selected_key = selected_card
        .read()
        .as_ref()
        .map(|card| card.key.clone());

    let cards = cards.read();
    let view = match &*cards {
        None => rsx! {
            div { class: "text-center p-4 text-muted", "Loading frameworks..." }
        },
        Some(Err(_)) => rsx! {
            div { class: "text-center p-4 text-danger", "Error loading frameworks" }
        },
        Some(Ok(cards)) if cards.is_empty() => rsx! {
            div { class: "text-center p-4 text-muted", "No frameworks found" }
        },
        Some(Ok(cards)) => rsx! {
            for card in cards.iter() {
                div {
                    key: "{card.key}",
                    class: card_class(selected_key.as_deref() == Some(card.key.as_str())),
                    "data-framework-id": "{card.key}",
                    onclick: {
                        let card = card.clone();
                        move |_| selected_card.set(Some(card.clone()))
                    },
                    div { class: "framework-card-logo",
                        if let Some(logo) = card.logo.as_ref() {
                            img {
                                src: "{logo}",
                                height: "80",
                                width: "80",
                                alt: "{card.name}",
                            }
                        }
                    }
                    div { class: "framework-card-content",
                        div { class: "framework-card-title", "{card.title}" }
                        div { class: "framework-card-name", "{card.name}" }
                        div { class: "framework-card-description", "{card.description}" }
                    }
                }
            }
        },
    };
    view
}

/// Main region: placeholder until a card is selected, then that framework's controls.
#[component]
pub fn ControlsPanel() -> Element {
    let app = use_context::<AppState>();
    let selected = (app.selected_card)();

    match selected {
        None => rsx! { EmptyState {} },
        Some(card) => rsx! {
            {iter::once(card).map(|card| {
                let key = card.key.clone();
                rsx!(ControlsTable { key: "{key}", card })
            })}
        },
    }
}

#[component]
fn ControlsTable(card: FrameworkCard) -> Element {
    let services = use_context::<Services>();
    let origin = card.origin;

    let rows = use_resource(move || {
        let catalog = services.catalog.clone();
        async move {
            catalog.control_rows(origin).await.inspect_err(|err| {
                error!("failed to load controls: {err}");
            })
        }
    });

    let rows = rows.read();
    let view = match &*rows {
        None => rsx! {
            div { class: "p-3 text-muted", "Loading..." }
        },
        Some(Err(_)) => rsx! {
            div { class: "p-3 text-danger", "Failed to load" }
        },
        Some(Ok(rows)) => rsx! {
            DataTable { config: controls_table_config(rows.clone()) }
        },
    };
    view
}
