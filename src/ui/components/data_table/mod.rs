pub mod config;
pub mod state;
pub mod view;

use std::iter;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::domain::entities::table::FilterDef;
use crate::ui::components::data_table::config::DataTableConfig;
use crate::ui::components::data_table::state::{
    controls_visible, ReloadOutcome, TableState, SEARCH_DEBOUNCE,
};
use crate::ui::components::data_table::view::ResultRegion;
use crate::ui::components::input::{InputSize, LabelPosition, TextInput};
use crate::ui::components::pagination::Pagination;
use crate::ui::hooks::debounce::use_debounced;
use crate::ui::hooks::viewport::use_viewport;

#[component]
fn FilterSelect(filter: FilterDef, selected: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        label { class: "data-table-filter d-inline-flex align-items-center gap-2",
            span { class: "small text-muted", "{filter.label}" }
            select {
                class: "form-select form-select-sm",
                "data-filter": "{filter.key}",
                onchange: move |event| on_change.call(event.value()),
                for choice in filter.options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == selected,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

/// Searchable, filterable, sortable and paginated view over a [`FetchData`] source.
///
/// The configuration is read once at mount; remount (with a new `key`) to change it.
///
/// [`FetchData`]: config::FetchData
#[component]
pub fn DataTable(config: DataTableConfig) -> Element {
    let config = use_hook(|| config.clone());
    let viewport = use_viewport();
    let mut table = use_signal(|| TableState::new(&config));
    let mut reload_nonce = use_signal(|| 0_u64);

    let reload = use_callback(move |_: ()| {
        *reload_nonce.write() += 1;
    });

    {
        let config = config.clone();
        use_effect(move || {
            let class = viewport();
            let _ = reload_nonce();

            let (ticket, query) = table.write().begin_reload(&config, class);
            let fetch = config.fetch_data.clone();
            let prefix = config.id_prefix.clone();
            spawn(async move {
                let outcome = fetch.call(query).await;
                if let Err(err) = &outcome {
                    warn!(table = %prefix, "data table fetch failed: {err}");
                }
                let applied = table.write().finish_reload(ticket, outcome);
                match applied {
                    ReloadOutcome::Applied => {}
                    ReloadOutcome::Stale => debug!(table = %prefix, "discarded stale reload"),
                    ReloadOutcome::Refetch => reload.call(()),
                }
            });
        });
    }

    let search = use_debounced(SEARCH_DEBOUNCE, move |text: String| {
        table.write().query.set_search(&text);
        reload.call(());
    });

    let class = viewport();
    let state = table.read().clone();
    let prefix = config.id_prefix.clone();
    let show_footer =
        (config.with_page_size || config.with_pagination) && controls_visible(&config, class);
    let sort = state
        .query
        .sort
        .clone()
        .map(|key| (key, state.query.dir));
    let range_text = state.query.range_text();

    rsx! {
        div { class: "data-table", id: "{prefix}",
            {iter::once(class.key()).map(|mode| rsx!(
                div { key: "{mode}", class: "data-table-shell data-table-{mode}",
                    div { class: "data-table-toolbar d-flex flex-wrap align-items-center gap-2 mb-2",
                        if config.searchable {
                            div { id: "{prefix}-q-wrap", class: "data-table-search",
                                TextInput {
                                    id: format!("{prefix}-q"),
                                    name: "search",
                                    label: "Search",
                                    label_position: LabelPosition::Left,
                                    placeholder: "Type to filter...",
                                    size: InputSize::Small,
                                    default_value: state.query.q.clone(),
                                    on_change: move |text: String| search.call(text),
                                }
                            }
                        }
                        for filter in config.filters.iter() {
                            FilterSelect {
                                key: "{filter.key}",
                                filter: filter.clone(),
                                selected: state.query.filters.get(&filter.key).cloned().unwrap_or_default(),
                                on_change: {
                                    let key = filter.key.clone();
                                    move |value: String| {
                                        table.write().query.set_filter(&key, value);
                                        reload.call(());
                                    }
                                },
                            }
                        }
                    }
                    div {
                        id: "{prefix}-area",
                        class: "data-table-area",
                        style: "max-height: {config.table_height}; overflow: auto;",
                        ResultRegion {
                            columns: config.columns.clone(),
                            load: state.load.clone(),
                            id_prefix: prefix.clone(),
                            card_view: class.narrow,
                            sort: sort.clone(),
                            on_sort: move |key: String| {
                                table.write().query.toggle_sort(&key);
                                reload.call(());
                            },
                        }
                    }
                    if show_footer {
                        div { class: "data-table-footer d-flex flex-wrap align-items-center justify-content-between gap-2 mt-2",
                            if config.with_page_size {
                                div { class: "d-flex align-items-center gap-2",
                                    select {
                                        id: "{prefix}-pageSize",
                                        class: "form-select form-select-sm w-auto",
                                        onchange: move |event| {
                                            if let Ok(size) = event.value().parse::<usize>() {
                                                table.write().query.set_page_size(size);
                                                reload.call(());
                                            }
                                        },
                                        for size in config.page_size_options.iter().copied() {
                                            option {
                                                key: "{size}",
                                                value: "{size}",
                                                selected: size == state.query.page_size,
                                                "{size}"
                                            }
                                        }
                                    }
                                    span { id: "{prefix}-range", class: "small text-muted", "{range_text}" }
                                }
                            }
                            if config.with_pagination {
                                div { class: "pagination-container d-flex gap-1",
                                    Pagination {
                                        options: state.pagination,
                                        on_page_change: move |page: usize| {
                                            table.write().query.set_page(page);
                                            reload.call(());
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            ))}
        }
    }
}
