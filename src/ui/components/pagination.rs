use dioxus::prelude::*;

pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 4;

/// Render options of the page strip. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    current_page: usize,
    total_pages: usize,
    max_visible_pages: usize,
    show_first_last: bool,
    show_previous_next: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            show_first_last: true,
            show_previous_next: true,
        }
    }
}

/// Partial options merged by [`PaginationOptions::update`]; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationUpdate {
    pub current_page: Option<usize>,
    pub total_pages: Option<usize>,
    pub max_visible_pages: Option<usize>,
    pub show_first_last: Option<bool>,
    pub show_previous_next: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous { target: usize, disabled: bool },
    Page { page: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

impl PaginationOptions {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            ..Self::default()
        }
    }

    pub fn update(&mut self, update: PaginationUpdate) {
        if let Some(current_page) = update.current_page {
            self.current_page = current_page;
        }
        if let Some(total_pages) = update.total_pages {
            self.total_pages = total_pages;
        }
        if let Some(max_visible_pages) = update.max_visible_pages {
            self.max_visible_pages = max_visible_pages;
        }
        if let Some(show_first_last) = update.show_first_last {
            self.show_first_last = show_first_last;
        }
        if let Some(show_previous_next) = update.show_previous_next {
            self.show_previous_next = show_previous_next;
        }
    }

    /// Moves to `page` when it exists; out-of-range pages are ignored.
    pub fn set_current_page(&mut self, page: usize) {
        if (1..=self.total_pages).contains(&page) {
            self.update(PaginationUpdate {
                current_page: Some(page),
                ..PaginationUpdate::default()
            });
        }
    }

    pub fn set_total_pages(&mut self, pages: usize) {
        self.update(PaginationUpdate {
            total_pages: Some(pages),
            ..PaginationUpdate::default()
        });
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether a click on `page` should be reported.
    pub fn accepts(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages && page != self.current_page
    }

    /// Inclusive range of numbered buttons shown around the current page.
    pub fn window(&self) -> (usize, usize) {
        let (current, total, max) = (self.current_page, self.total_pages, self.max_visible_pages);

        if total <= max {
            (1, total)
        } else if current <= 3 {
            (1, max)
        } else if current + 2 >= total {
            (total - max + 1, total)
        } else {
            (current - 1, current + 2)
        }
    }

    /// The full strip, left to right. Empty when there is at most one page.
    pub fn items(&self) -> Vec<PageItem> {
        if self.total_pages <= 1 {
            return Vec::new();
        }

        let (start, end) = self.window();
        let mut items = Vec::new();

        if self.show_previous_next {
            items.push(PageItem::Previous {
                target: self.current_page.saturating_sub(1),
                disabled: self.current_page == 1,
            });
        }

        if self.show_first_last && start > 1 {
            items.push(PageItem::Page {
                page: 1,
                active: self.current_page == 1,
            });
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }

        items.extend((start..=end).map(|page| PageItem::Page {
            page,
            active: page == self.current_page,
        }));

        if self.show_first_last && end < self.total_pages {
            if end + 1 < self.total_pages {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page {
                page: self.total_pages,
                active: self.current_page == self.total_pages,
            });
        }

        if self.show_previous_next {
            items.push(PageItem::Next {
                target: self.current_page + 1,
                disabled: self.current_page == self.total_pages,
            });
        }

        items
    }
}

/// Page-button strip. Every render replaces the buttons and their handlers.
#[component]
pub fn Pagination(options: PaginationOptions, on_page_change: EventHandler<usize>) -> Element {
    let go_to = move |page: usize| {
        if options.accepts(page) {
            on_page_change.call(page);
        }
    };

    rsx! {
        {options.items().into_iter().map(|item| match item {
            PageItem::Previous { target, disabled } => rsx!(
                button {
                    r#type: "button",
                    class: "btn btn-outline-secondary btn-sm pagination-btn pagination-prev",
                    disabled,
                    "data-page": "{target}",
                    onclick: move |_| go_to(target),
                    "Previous"
                }
            ),
            PageItem::Page { page, active } => {
                let variant = if active { "btn-primary" } else { "btn-outline-secondary" };
                rsx!(
                    button {
                        r#type: "button",
                        class: "btn {variant} btn-sm pagination-btn pagination-number",
                        "data-page": "{page}",
                        onclick: move |_| go_to(page),
                        "{page}"
                    }
                )
            }
            PageItem::Ellipsis => rsx!(
                span { class: "pagination-ellipsis", "..." }
            ),
            PageItem::Next { target, disabled } => rsx!(
                button {
                    r#type: "button",
                    class: "btn btn-outline-secondary btn-sm pagination-btn pagination-next",
                    disabled,
                    "data-page": "{target}",
                    onclick: move |_| go_to(target),
                    "Next"
                }
            ),
        })}
    }
}
