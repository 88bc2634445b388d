//! Root UI state: which view is showing.
//!
//! DESIGN
//! ======
//! Navigation is a field on one root struct with a single transition
//! function, provided to components as `RwSignal<UiState>` context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Recommend,
    Analytics,
}

impl Page {
    /// Nav order.
    pub const ALL: [Page; 2] = [Page::Recommend, Page::Analytics];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recommend => "Recommend",
            Self::Analytics => "Analytics",
        }
    }
}

/// App-wide UI state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub page: Page,
}

impl UiState {
    /// Switch to `page`. Returns whether the page changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }
}
