//! Effects produced by state transitions

use super::event::CategorySource;

/// Side effects to run after a transition
///
/// Send effects go straight out to the user. Lookup effects come back as a
/// follow-up `Event` fed into the next transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a text message
    SendText { text: String },

    /// Send an image; a failure here never blocks the sends after it
    SendImage {
        image: String,
        filename: String,
        caption: String,
    },

    /// Run a by-name search
    SearchByName { query: String },

    /// Run a by-category search
    SearchByCategory { category: String },

    /// Fetch the category list
    ListCategories { source: CategorySource },
}

impl Effect {
    pub fn send_text(text: impl Into<String>) -> Self {
        Effect::SendText { text: text.into() }
    }
}
