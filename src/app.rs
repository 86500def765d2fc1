use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::infra::http::catalog_client::HttpCatalog;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::hooks::viewport::ViewportShell;
use crate::ui::modules::custom_framework_modal::CustomFrameworkModal;
use crate::ui::modules::framework_cards::{ControlsPanel, FrameworkCards};
use crate::ui::modules::header_dropdown::{closes_menu, HeaderDropdown};
use crate::ui::state::app_state::{AppState, Services};
use crate::usecase::ports::repo::FrameworkRepository;
use crate::usecase::services::catalog_service::CatalogService;
use crate::usecase::services::framework_service::FrameworkService;

#[cfg(not(target_arch = "wasm32"))]
fn framework_repo(config: &AppConfig) -> Arc<dyn FrameworkRepository> {
    Arc::new(crate::infra::sqlite::repo::SqliteRepo {
        db_path: config.db_path.clone(),
    })
}

#[cfg(target_arch = "wasm32")]
fn framework_repo(_config: &AppConfig) -> Arc<dyn FrameworkRepository> {
    Arc::new(crate::infra::memory::repo::MemoryRepo::default())
}

pub fn build_services(config: &AppConfig) -> Services {
    let repo = framework_repo(config);
    let source = Rc::new(HttpCatalog::new(config.api_base_url.clone()));

    Services {
        catalog: Rc::new(CatalogService::new(source, repo.clone())),
        frameworks: Arc::new(FrameworkService::new(repo)),
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| AppConfig::load().map_err(|err| format!("{err:#}")));

    match config {
        Ok(config) => rsx! { Shell { config } },
        Err(err) => rsx! {
            div { class: "p-4 text-danger",
                p { "Unable to load configuration: {err}" }
            }
        },
    }
}

#[component]
pub fn Shell(config: AppConfig) -> Element {
    let services = use_context_provider(|| build_services(&config));
    let app = AppState::new();
    use_context_provider(|| app);
    let mut menu_open = app.menu_open;
    let mut modal_open = app.modal_open;
    let mut status = app.status;

    use_effect(move || {
        match run_blocking("init_store", || services.frameworks.init()) {
            Ok(()) => info!("custom framework store ready"),
            Err(err) => {
                error!("failed to initialise custom framework store: {err}");
                status.set(format!("Custom frameworks unavailable: {err}"));
            }
        }
    });

    rsx! {
        ViewportShell {
            breakpoints: config.breakpoints,
            class: "shell",
            onclick: move |_: MouseEvent| {
                if *menu_open.peek() {
                    menu_open.set(false);
                }
            },
            onkeydown: move |event: KeyboardEvent| {
                if closes_menu(&event.key()) {
                    menu_open.set(false);
                }
            },
            HeaderDropdown {}
            div { class: "shell__body d-flex",
                aside { class: "shell__sidebar",
                    button {
                        id: "add-custom-framework",
                        r#type: "button",
                        class: "btn btn-primary w-100 mb-3",
                        onclick: move |_| modal_open.set(true),
                        "Add custom framework"
                    }
                    FrameworkCards {}
                }
                main { id: "table-wrap", class: "shell__main flex-grow-1",
                    ControlsPanel {}
                }
            }
            if modal_open() {
                CustomFrameworkModal {}
            }
        }
    }
}
