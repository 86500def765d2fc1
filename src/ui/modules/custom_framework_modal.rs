use std::iter;

use dioxus::prelude::*;
use tracing::{debug, error, info};

use crate::domain::entities::catalog::Control;
use crate::domain::entities::custom_framework::FrameworkDraft;
use crate::domain::entities::table::Row;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::data_table::config::{DataTableConfig, FetchData};
use crate::ui::components::data_table::DataTable;
use crate::ui::components::input::{InputSize, TextInput};
use crate::ui::components::stepper::{StepDef, Stepper, StepperState};
use crate::ui::components::textarea::TextArea;
use crate::ui::modules::framework_cards::{control_columns, control_filters};
use crate::ui::state::app_state::{AppState, Services};
use crate::usecase::services::import_service::{
    import_control_template, ImportError, TEMPLATE_EXTENSIONS,
};
use crate::usecase::services::query_service::controls_query;

pub const MODAL_TABLE_PREFIX: &str = "modal-dt";
pub const MODAL_TABLE_HEIGHT: &str = "570px";

pub fn wizard_steps() -> Vec<StepDef> {
    vec![StepDef::new("Framework Details"), StepDef::new("Control Items")]
}

/// Control items preview inside the wizard: everything on one scrolling page.
pub fn modal_table_config(rows: Vec<Row>) -> DataTableConfig {
    DataTableConfig::new(control_columns(), FetchData::in_memory(rows, controls_query()))
        .filters(control_filters())
        .searchable(false)
        .with_page_size(false)
        .with_pagination(false)
        .id_prefix(MODAL_TABLE_PREFIX)
        .table_height(MODAL_TABLE_HEIGHT)
}

pub fn next_button_class(valid: bool) -> &'static str {
    if valid {
        "btn btn-success"
    } else {
        "btn btn-secondary"
    }
}

/// Merges freshly imported items into the wizard's list.
///
/// Without `append` the import replaces the list. With it, items are added at the end and an
/// imported control replaces an existing one with the same id.
pub fn merge_controls(current: &[Control], imported: Vec<Control>, append: bool) -> Vec<Control> {
    if !append {
        return imported;
    }

    let mut merged: Vec<Control> = current
        .iter()
        .filter(|existing| {
            !imported
                .iter()
                .any(|control| control.control_id == existing.control_id)
        })
        .cloned()
        .collect();
    merged.extend(imported);
    merged
}

async fn pick_control_template() -> Result<Option<(String, Vec<Control>)>, ImportError> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .add_filter("Control template", &TEMPLATE_EXTENSIONS)
        .pick_file()
        .await
    else {
        return Ok(None);
    };

    let file_name = handle.file_name();
    let bytes = handle.read().await;
    let controls = import_control_template(&file_name, &bytes)?;
    Ok(Some((file_name, controls)))
}

/// Two-step wizard for creating a custom framework.
///
/// Mounted only while open, so every opening starts from a blank draft on step 1.
#[component]
pub fn CustomFrameworkModal() -> Element {
    let services = use_context::<Services>();
    let app = use_context::<AppState>();
    let mut modal_open = app.modal_open;
    let mut frameworks_version = app.frameworks_version;
    let mut status = app.status;

    let mut stepper = use_signal(|| StepperState::new(wizard_steps(), 1));
    let mut draft = use_signal(FrameworkDraft::default);
    let mut controls = use_signal(Vec::<Control>::new);
    let mut imports = use_signal(|| 0_u64);
    let mut notice = use_signal(|| None::<String>);

    let import_template = move |append: bool| {
        spawn(async move {
            match pick_control_template().await {
                Ok(Some((file_name, imported))) => {
                    let merged = merge_controls(&controls.read(), imported, append);
                    controls.set(merged);
                    if !append {
                        draft.write().template_name = Some(file_name);
                    }
                    *imports.write() += 1;
                    notice.set(None);
                }
                Ok(None) => {}
                Err(err) => {
                    error!("control template import failed: {err}");
                    notice.set(Some(err.to_string()));
                }
            }
        });
    };

    let save = move |_: MouseEvent| {
        let current = draft.read().clone();
        let items = controls.read().clone();
        let result = run_blocking("create_framework", || {
            services.frameworks.create_from_draft(&current, items)
        });

        match result {
            Ok(id) => {
                info!(id = id.0, "saved custom framework");
                status.set(format!("Saved {}", current.short_name.trim()));
                *frameworks_version.write() += 1;
                modal_open.set(false);
            }
            Err(err) => {
                error!("failed to save custom framework: {err}");
                notice.set(Some(err.to_string()));
            }
        }
    };

    let step = stepper.read().current_step();
    let indicator = stepper.read().indicator();
    let valid = draft.read().is_valid();
    let snapshot = draft.read().clone();
    let template_label = snapshot
        .template_name
        .clone()
        .unwrap_or_else(|| "No file selected".to_string());
    let rows: Vec<Row> = controls.read().iter().map(Control::to_row).collect();

    rsx! {
        div {
            id: "customFrameworkModal",
            class: "modal fade show d-block",
            "tabindex": "-1",
            "role": "dialog",
            "aria-modal": "true",
            div { class: "modal-dialog modal-xl modal-dialog-centered",
                div { class: "modal-content",
                    div { class: "modal-header",
                        h5 { class: "modal-title", "Add Custom Framework" }
                        span { id: "modal-step-indicator", class: "ms-2 text-muted", "{indicator}" }
                        button {
                            r#type: "button",
                            class: "btn-close",
                            "aria-label": "Close",
                            onclick: move |_| modal_open.set(false),
                        }
                    }
                    div { class: "modal-body",
                        div { id: "stepper-container",
                            Stepper {
                                state: stepper(),
                                on_step_change: move |step: usize| {
                                    debug!(step, "custom framework wizard moved");
                                    notice.set(None);
                                },
                            }
                        }
                        if step == 1 {
                            div { id: "alert-container", class: "alert alert-info d-flex align-items-center",
                                "Download the control template, fill in the control items and upload it here."
                            }
                        }
                        if let Some(message) = notice() {
                            div { class: "alert alert-danger", "{message}" }
                        }
                        if step == 1 {
                            div { id: "step-1-content", class: "step-content",
                                div { id: "f-name",
                                    TextInput {
                                        id: "frameworkName",
                                        label: "Name",
                                        placeholder: "Enter name",
                                        size: InputSize::Small,
                                        full_width: true,
                                        default_value: snapshot.name.clone(),
                                        on_change: move |value: String| draft.write().name = value,
                                    }
                                }
                                div { id: "f-shortname",
                                    TextInput {
                                        id: "frameworkShortName",
                                        label: "Short Name",
                                        placeholder: "Enter short name",
                                        size: InputSize::Small,
                                        full_width: true,
                                        default_value: snapshot.short_name.clone(),
                                        on_change: move |value: String| draft.write().short_name = value,
                                    }
                                }
                                div { id: "f-desc",
                                    TextArea {
                                        id: "frameworkDesc",
                                        label: "Description",
                                        placeholder: "Please add description",
                                        rows: 5,
                                        default_value: snapshot.description.clone(),
                                        on_change: move |value: String| draft.write().description = value,
                                    }
                                }
                                div { class: "d-flex align-items-center gap-2 my-2",
                                    button {
                                        id: "f-template",
                                        r#type: "button",
                                        class: "btn btn-outline-secondary btn-sm",
                                        onclick: move |_| import_template(false),
                                        "Upload template"
                                    }
                                    span { class: "small text-muted", "{template_label}" }
                                }
                                label { class: "form-check",
                                    input {
                                        id: "f-logo",
                                        r#type: "checkbox",
                                        class: "form-check-input",
                                        checked: snapshot.use_logo,
                                        onchange: move |event| draft.write().use_logo = event.checked(),
                                    }
                                    span { class: "form-check-label", "Use logo" }
                                }
                            }
                        } else {
                            div { id: "step-2-content", class: "step-content",
                                div { id: "modal-table-container",
                                    {iter::once(imports()).map(|version| rsx!(
                                        DataTable {
                                            key: "{version}",
                                            config: modal_table_config(rows.clone()),
                                        }
                                    ))}
                                }
                            }
                        }
                    }
                    if step == 1 {
                        div { id: "step-1-footer", class: "modal-footer step-footer",
                            button {
                                r#type: "button",
                                class: "btn btn-outline-secondary",
                                onclick: move |_| modal_open.set(false),
                                "Cancel"
                            }
                            button {
                                id: "f-next",
                                r#type: "button",
                                class: next_button_class(valid),
                                disabled: !valid,
                                onclick: move |_| {
                                    if draft.read().is_valid() {
                                        stepper.write().next();
                                    }
                                },
                                "Next"
                            }
                        }
                    } else {
                        div { id: "step-2-footer", class: "modal-footer step-footer",
                            button {
                                id: "f-previous",
                                r#type: "button",
                                class: "btn btn-outline-secondary",
                                onclick: move |_| {
                                    stepper.write().previous();
                                },
                                "Previous"
                            }
                            button {
                                id: "f-add-control",
                                r#type: "button",
                                class: "btn btn-outline-primary",
                                onclick: move |_| import_template(true),
                                "Add Control Items"
                            }
                            button {
                                id: "f-save",
                                r#type: "button",
                                class: "btn btn-primary",
                                onclick: save,
                                "Save"
                            }
                        }
                    }
                }
            }
        }
        div { class: "modal-backdrop fade show" }
    }
}
