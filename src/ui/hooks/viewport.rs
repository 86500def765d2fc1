use std::time::Duration;

use dioxus::prelude::*;
use tracing::info;

use crate::ui::hooks::debounce::use_debounced;

pub const NARROW_MAX_WIDTH: f64 = 992.0;
pub const MEDIUM_MAX_WIDTH: f64 = 1120.0;
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub narrow_max: f64,
    pub medium_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow_max: NARROW_MAX_WIDTH,
            medium_max: MEDIUM_MAX_WIDTH,
        }
    }
}

/// Coarse width classification. The two flags are checked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewportClass {
    pub narrow: bool,
    pub medium: bool,
}

impl ViewportClass {
    pub const WIDE: Self = Self {
        narrow: false,
        medium: false,
    };

    pub fn classify(width: f64, breakpoints: &Breakpoints) -> Self {
        Self {
            narrow: width <= breakpoints.narrow_max,
            medium: width <= breakpoints.medium_max,
        }
    }

    /// Stable key per class, used to remount widgets when the class flips.
    pub fn key(self) -> &'static str {
        match (self.narrow, self.medium) {
            (false, false) => "wide",
            (false, true) => "medium",
            (true, false) => "narrow",
            (true, true) => "narrow-medium",
        }
    }
}

/// Turns raw widths into class changes; widths that stay inside a class yield nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportWatcher {
    breakpoints: Breakpoints,
    current: Option<ViewportClass>,
}

impl ViewportWatcher {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            current: None,
        }
    }

    pub fn observe(&mut self, width: f64) -> Option<ViewportClass> {
        let next = ViewportClass::classify(width, &self.breakpoints);
        if self.current == Some(next) {
            return None;
        }
        self.current = Some(next);
        Some(next)
    }
}

#[derive(Clone, Copy)]
pub struct ViewportContext(pub Signal<ViewportClass>);

/// Current viewport class from the nearest [`ViewportShell`], or wide when there is none.
pub fn use_viewport() -> Signal<ViewportClass> {
    let fallback = use_signal(|| ViewportClass::WIDE);
    try_use_context::<ViewportContext>()
        .map(|ctx| ctx.0)
        .unwrap_or(fallback)
}

/// Measures its own width and publishes the viewport class to descendants.
#[component]
pub fn ViewportShell(
    breakpoints: Breakpoints,
    #[props(default, into)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
    children: Element,
) -> Element {
    let mut viewport = use_signal(|| ViewportClass::WIDE);
    use_context_provider(|| ViewportContext(viewport));

    let mut watcher = use_signal(|| ViewportWatcher::new(breakpoints));
    let on_width = use_debounced(RESIZE_DEBOUNCE, move |width: f64| {
        let changed = watcher.write().observe(width);
        if let Some(next) = changed {
            if *viewport.peek() != next {
                info!(width, narrow = next.narrow, medium = next.medium, "viewport class changed");
                viewport.set(next);
            }
        }
    });

    rsx! {
        div {
            class: "{class}",
            onresize: move |event| {
                if let Ok(size) = event.get_border_box_size() {
                    on_width.call(size.width);
                }
            },
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            onkeydown: move |event| {
                if let Some(handler) = &onkeydown {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}
