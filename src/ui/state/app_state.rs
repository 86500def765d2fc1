use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::catalog::FrameworkCard;
use crate::usecase::services::catalog_service::CatalogService;
use crate::usecase::services::framework_service::FrameworkService;

/// Shell-wide UI state, shared through context. Every field is a signal, so copies alias.
#[derive(Clone, Copy)]
pub struct AppState {
    pub selected_card: Signal<Option<FrameworkCard>>,
    pub modal_open: Signal<bool>,
    pub menu_open: Signal<bool>,
    /// Bumped after a custom framework is saved so the sidebar reloads.
    pub frameworks_version: Signal<u64>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            selected_card: use_signal(|| None::<FrameworkCard>),
            modal_open: use_signal(|| false),
            menu_open: use_signal(|| false),
            frameworks_version: use_signal(|| 0_u64),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}

#[derive(Clone)]
pub struct Services {
    pub catalog: Rc<CatalogService>,
    pub frameworks: Arc<FrameworkService>,
}
